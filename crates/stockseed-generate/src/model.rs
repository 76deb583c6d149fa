use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use stockseed_core::{HOMEBOX_HEADER_PREFIX, InventoryRecord};

use crate::faker_rs::LocaleKey;

pub const DEFAULT_COUNT: u64 = 20;
pub const DEFAULT_START_ASSET_ID: u64 = 1001;
pub const DEFAULT_OUT_PATH: &str = "test_items.csv";
pub const DEFAULT_START_YEAR: i32 = 2020;
pub const DEFAULT_END_YEAR: i32 = 2024;
pub const DEFAULT_SOLD_PROBABILITY: f64 = 0.10;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of records to generate.
    pub count: u64,
    /// Asset id of the first record; later records count up by one.
    pub start_asset_id: u64,
    /// CSV file the records are written to.
    pub out_path: PathBuf,
    /// Optional path for a JSON generation report.
    pub report_path: Option<PathBuf>,
    /// Seed for the random source. A fresh seed is drawn when absent.
    pub seed: Option<u64>,
    /// Locale for generated company names, person names and notes.
    pub locale: LocaleKey,
    /// First year a purchase may fall in.
    pub start_year: i32,
    /// Last year a purchase or sale may fall in.
    pub end_year: i32,
    /// Probability that a record carries sale details.
    pub sold_probability: f64,
    /// Prefix prepended to every header name.
    pub header_prefix: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            start_asset_id: DEFAULT_START_ASSET_ID,
            out_path: PathBuf::from(DEFAULT_OUT_PATH),
            report_path: None,
            seed: None,
            locale: LocaleKey::default(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            sold_probability: DEFAULT_SOLD_PROBABILITY,
            header_prefix: HOMEBOX_HEADER_PREFIX.to_string(),
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub locale: LocaleKey,
    pub records_requested: u64,
    pub records_written: u64,
    pub first_asset_id: Option<u64>,
    pub last_asset_id: Option<u64>,
    pub sold_count: u64,
    pub insured_count: u64,
    pub lifetime_warranty_count: u64,
    pub category_usage: BTreeMap<String, u64>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, locale: LocaleKey, records_requested: u64) -> Self {
        Self {
            run_id,
            seed,
            locale,
            records_requested,
            records_written: 0,
            first_asset_id: None,
            last_asset_id: None,
            sold_count: 0,
            insured_count: 0,
            lifetime_warranty_count: 0,
            category_usage: BTreeMap::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record(&mut self, record: &InventoryRecord) {
        self.records_written += 1;
        self.first_asset_id.get_or_insert(record.asset_id);
        self.last_asset_id = Some(record.asset_id);
        if record.is_sold() {
            self.sold_count += 1;
        }
        if record.insured {
            self.insured_count += 1;
        }
        if record.warranty.is_lifetime() {
            self.lifetime_warranty_count += 1;
        }
        *self
            .category_usage
            .entry(record.category.clone())
            .or_insert(0) += 1;
    }
}
