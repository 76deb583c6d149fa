pub mod atomic;
pub mod csv;

pub use self::atomic::{write_json_atomic, write_with_atomic};
pub use self::csv::write_records_csv;
