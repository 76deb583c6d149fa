//! Core contracts for stockseed.
//!
//! This crate defines the item catalog, the inventory record model, the
//! fixed field table of the import format, and catalog validation shared by
//! the generator and the CLI.

pub mod catalog;
pub mod error;
pub mod fields;
pub mod record;
pub mod validation;

pub use catalog::{Archetype, Catalog, PriceRange};
pub use error::{Error, Result};
pub use fields::{FIELD_COUNT, Field, FieldValue};
pub use record::{InventoryRecord, Price, Sale, Warranty, WarrantyTier};
pub use validation::validate_catalog;

/// Header prefix used by the Homebox CSV import format.
pub const HOMEBOX_HEADER_PREFIX: &str = "HB.";
