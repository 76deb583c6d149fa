use std::collections::BTreeSet;

use crate::catalog::{Archetype, Catalog};
use crate::error::{Error, Result};

/// Validate internal consistency of a catalog.
///
/// This checks:
/// - the catalog has at least one archetype
/// - categories are non-blank and unique
/// - manufacturer and model lists are non-empty and hold no blank names
/// - price bounds are finite, ordered and the minimum is at least one cent
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        return Err(Error::InvalidCatalog(
            "catalog has no archetypes".to_string(),
        ));
    }

    let mut categories = BTreeSet::new();
    for archetype in &catalog.archetypes {
        if archetype.category.trim().is_empty() {
            return Err(Error::InvalidCatalog(
                "archetype with blank category".to_string(),
            ));
        }
        if !categories.insert(archetype.category.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate category: {}",
                archetype.category
            )));
        }
        validate_names(archetype, "manufacturers", &archetype.manufacturers)?;
        validate_names(archetype, "models", &archetype.models)?;
        validate_price_range(archetype)?;
    }

    Ok(())
}

fn validate_names(archetype: &Archetype, label: &str, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(Error::InvalidCatalog(format!(
            "{}: {label} list is empty",
            archetype.category
        )));
    }
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(Error::InvalidCatalog(format!(
            "{}: {label} contains a blank name",
            archetype.category
        )));
    }
    Ok(())
}

fn validate_price_range(archetype: &Archetype) -> Result<()> {
    let range = archetype.price_range;
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(Error::InvalidCatalog(format!(
            "{}: price bounds must be finite",
            archetype.category
        )));
    }
    if range.min_cents() < 1 {
        return Err(Error::InvalidCatalog(format!(
            "{}: minimum price {} is below 0.01",
            archetype.category, range.min
        )));
    }
    if range.min > range.max {
        return Err(Error::InvalidCatalog(format!(
            "{}: minimum price {} exceeds maximum {}",
            archetype.category, range.min, range.max
        )));
    }
    Ok(())
}
