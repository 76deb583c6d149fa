use std::path::PathBuf;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use stockseed_core::{Catalog, InventoryRecord, validate_catalog};

use crate::errors::GenerationError;
use crate::generators::RecordGenerator;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::{write_json_atomic, write_records_csv};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_path: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating an inventory CSV from a catalog.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate every record, write the CSV, then the optional report.
    pub fn run(&self, catalog: &Catalog) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        info!(
            run_id = %run_id,
            records = self.options.count,
            categories = catalog.len(),
            seed,
            locale = %self.options.locale,
            "generation started"
        );

        let records = self.generate_records(catalog, &mut rng)?;

        let mut report = GenerationReport::new(
            run_id.clone(),
            seed,
            self.options.locale,
            self.options.count,
        );
        for record in &records {
            report.record(record);
        }

        let out_path = self.options.out_path.clone();
        report.bytes_written =
            match write_records_csv(&out_path, &self.options.header_prefix, &records) {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(
                        run_id = %run_id,
                        path = %out_path.display(),
                        error = %err,
                        "csv write failed"
                    );
                    return Err(err);
                }
            };
        debug!(
            path = %out_path.display(),
            bytes = report.bytes_written,
            "csv written"
        );

        report.duration_ms = start.elapsed().as_millis() as u64;
        if let Some(report_path) = &self.options.report_path {
            write_json_atomic(report_path, &report)?;
            debug!(path = %report_path.display(), "report written");
        }

        info!(
            run_id = %run_id,
            records = report.records_written,
            sold = report.sold_count,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { out_path, report })
    }

    /// Generate the configured number of records in memory.
    pub fn generate_records<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<Vec<InventoryRecord>, GenerationError> {
        validate_catalog(catalog)?;
        let generator = RecordGenerator::from_options(catalog, &self.options)?;
        generator.generate_batch(self.options.start_asset_id, self.options.count, rng)
    }
}
