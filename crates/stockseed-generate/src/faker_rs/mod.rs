//! Locale-aware free text backed by the `fake` crate.

mod adapter;
pub mod locales;

pub use adapter::FakeRsAdapter;
pub use locales::LocaleKey;
