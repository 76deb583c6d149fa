//! Random field drawing for inventory records.

pub mod dates;
pub mod identifiers;
pub mod pricing;

use rand::Rng;
use rand::distr::{Bernoulli, Distribution};
use rand::seq::IndexedRandom;

use stockseed_core::{
    Archetype, Catalog, Error as CoreError, InventoryRecord, Sale, Warranty, WarrantyTier,
};

use crate::errors::GenerationError;
use crate::faker_rs::FakeRsAdapter;
use crate::model::GenerateOptions;

/// Sentences in the notes paragraph of every record.
pub const NOTES_SENTENCES: usize = 3;
/// Sentences in the notes paragraph of a sale.
pub const SOLD_NOTES_SENTENCES: usize = 2;
/// Largest quantity drawn for one record.
pub const MAX_QUANTITY: u32 = 3;

/// Year window and sale odds for drawn records.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorSettings {
    pub start_year: i32,
    pub end_year: i32,
    sold: Bernoulli,
}

impl GeneratorSettings {
    pub fn new(
        start_year: i32,
        end_year: i32,
        sold_probability: f64,
    ) -> Result<Self, GenerationError> {
        if start_year < dates::MIN_YEAR || end_year > dates::MAX_YEAR {
            return Err(GenerationError::InvalidOptions(format!(
                "years must lie within {}..={}, got {start_year}..={end_year}",
                dates::MIN_YEAR,
                dates::MAX_YEAR
            )));
        }
        if start_year > end_year {
            return Err(GenerationError::InvalidOptions(format!(
                "start_year {start_year} is after end_year {end_year}"
            )));
        }
        let sold = Bernoulli::new(sold_probability).map_err(|_| {
            GenerationError::InvalidOptions(format!(
                "sold_probability must be within [0, 1], got {sold_probability}"
            ))
        })?;
        Ok(Self {
            start_year,
            end_year,
            sold,
        })
    }

    pub fn from_options(options: &GenerateOptions) -> Result<Self, GenerationError> {
        Self::new(options.start_year, options.end_year, options.sold_probability)
    }
}

/// Draws inventory records from a catalog.
#[derive(Debug, Clone)]
pub struct RecordGenerator<'a> {
    catalog: &'a Catalog,
    settings: GeneratorSettings,
    faker: FakeRsAdapter,
}

impl<'a> RecordGenerator<'a> {
    pub fn new(catalog: &'a Catalog, settings: GeneratorSettings, faker: FakeRsAdapter) -> Self {
        Self {
            catalog,
            settings,
            faker,
        }
    }

    pub fn from_options(
        catalog: &'a Catalog,
        options: &GenerateOptions,
    ) -> Result<Self, GenerationError> {
        let settings = GeneratorSettings::from_options(options)?;
        Ok(Self::new(catalog, settings, FakeRsAdapter::new(options.locale)))
    }

    /// Draw one record for `asset_id`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        asset_id: u64,
        rng: &mut R,
    ) -> Result<InventoryRecord, GenerationError> {
        let archetype = self.catalog.archetypes.choose(rng).ok_or_else(|| {
            CoreError::InvalidCatalog("catalog has no archetypes".to_string())
        })?;
        let manufacturer = pick(archetype, "manufacturers", &archetype.manufacturers, rng)?;
        let model = pick(archetype, "models", &archetype.models, rng)?;
        let purchase_price = pricing::purchase_price(&archetype.price_range, rng);

        let purchase_time =
            dates::random_date(self.settings.start_year, self.settings.end_year, rng)?;
        let lifetime: bool = rng.random();
        let warranty = if lifetime {
            Warranty::Lifetime
        } else {
            let years = dates::random_warranty_years(rng);
            let expires = dates::warranty_expiry(purchase_time, years)?;
            let tier = WarrantyTier::ALL
                .choose(rng)
                .copied()
                .unwrap_or(WarrantyTier::Standard);
            Warranty::Limited {
                tier,
                years,
                expires,
            }
        };

        let sale = if self.settings.sold.sample(rng) {
            let sold_time = dates::sale_date(purchase_time, self.settings.end_year, rng)?;
            let sold_price = pricing::resale_price(purchase_price, rng);
            Some(Sale {
                sold_to: self.faker.person_name(rng),
                sold_time,
                sold_price,
                sold_notes: self.faker.paragraph(SOLD_NOTES_SENTENCES, rng),
            })
        } else {
            None
        };

        Ok(InventoryRecord {
            asset_id,
            quantity: rng.random_range(1..=MAX_QUANTITY),
            category: archetype.category.clone(),
            name: format!("{manufacturer} {model} {}", archetype.category),
            description: archetype.description.clone(),
            insured: rng.random(),
            serial_number: identifiers::serial_number(rng),
            model_number: identifiers::model_number(model, rng),
            manufacturer: manufacturer.to_string(),
            notes: self.faker.paragraph(NOTES_SENTENCES, rng),
            purchase_from: self.faker.company(rng),
            purchase_price,
            purchase_time,
            warranty,
            sale,
        })
    }

    /// Draw `count` records with consecutive asset ids starting at `start_asset_id`.
    pub fn generate_batch<R: Rng + ?Sized>(
        &self,
        start_asset_id: u64,
        count: u64,
        rng: &mut R,
    ) -> Result<Vec<InventoryRecord>, GenerationError> {
        let end = start_asset_id.checked_add(count).ok_or_else(|| {
            GenerationError::InvalidOptions(format!(
                "{count} records starting at asset id {start_asset_id} overflow the id space"
            ))
        })?;
        (start_asset_id..end)
            .map(|asset_id| self.generate(asset_id, rng))
            .collect()
    }
}

fn pick<'c, R: Rng + ?Sized>(
    archetype: &Archetype,
    label: &str,
    values: &'c [String],
    rng: &mut R,
) -> Result<&'c str, GenerationError> {
    values.choose(rng).map(String::as_str).ok_or_else(|| {
        CoreError::InvalidCatalog(format!("{}: {label} list is empty", archetype.category))
            .into()
    })
}
