//! Synthetic inventory record generation for stockseed.
//!
//! This crate draws inventory records from a catalog with a seedable random
//! source and writes them as a Homebox-style import CSV.

pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use faker_rs::LocaleKey;
pub use generators::{GeneratorSettings, RecordGenerator};
pub use model::{GenerateOptions, GenerationReport};
