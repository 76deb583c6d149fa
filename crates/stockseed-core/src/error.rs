use thiserror::Error;

/// Core error type shared across stockseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog violates internal invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Convenience alias for results returned by stockseed crates.
pub type Result<T> = std::result::Result<T, Error>;
