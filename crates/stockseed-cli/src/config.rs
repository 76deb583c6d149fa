use std::path::{Path, PathBuf};

use serde::Deserialize;

use stockseed_core::{Archetype, Catalog};
use stockseed_generate::generators::dates::{MAX_YEAR, MIN_YEAR};
use stockseed_generate::{GenerateOptions, LocaleKey};

use crate::{CliError, CliResult};

/// Contents of a `--config` TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub generation: GenerationSection,
    /// Archetypes replacing the built-in catalog when non-empty.
    #[serde(rename = "archetype")]
    pub archetypes: Vec<Archetype>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationSection {
    pub count: Option<u64>,
    pub out: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub start_asset_id: Option<u64>,
    pub seed: Option<u64>,
    pub locale: Option<LocaleKey>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub sold_probability: Option<f64>,
    pub header_prefix: Option<String>,
}

pub fn load_config(path: &Path) -> CliResult<ConfigFile> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> CliResult<ConfigFile> {
    let config: ConfigFile = toml::from_str(content)?;
    config.generation.validate()?;
    Ok(config)
}

impl GenerationSection {
    /// Reject values no run could accept, naming the offending key.
    fn validate(&self) -> CliResult<()> {
        for (key, year) in [("start_year", self.start_year), ("end_year", self.end_year)] {
            match year {
                Some(year) if !(MIN_YEAR..=MAX_YEAR).contains(&year) => {
                    return Err(CliError::InvalidConfig(format!(
                        "generation.{key} = {year} is outside {MIN_YEAR}..={MAX_YEAR}"
                    )));
                }
                _ => {}
            }
        }
        if let (Some(start), Some(end)) = (self.start_year, self.end_year) {
            if start > end {
                return Err(CliError::InvalidConfig(format!(
                    "generation.start_year = {start} is after generation.end_year = {end}"
                )));
            }
        }
        if let Some(probability) = self.sold_probability {
            if !(0.0..=1.0).contains(&probability) {
                return Err(CliError::InvalidConfig(format!(
                    "generation.sold_probability = {probability} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl ConfigFile {
    pub fn catalog(&self) -> Catalog {
        if self.archetypes.is_empty() {
            Catalog::builtin()
        } else {
            Catalog::new(self.archetypes.clone())
        }
    }

    /// Overwrite every option the file sets.
    pub fn apply(&self, options: &mut GenerateOptions) {
        let section = &self.generation;
        if let Some(count) = section.count {
            options.count = count;
        }
        if let Some(out) = &section.out {
            options.out_path = out.clone();
        }
        if let Some(report) = &section.report {
            options.report_path = Some(report.clone());
        }
        if let Some(start_asset_id) = section.start_asset_id {
            options.start_asset_id = start_asset_id;
        }
        if section.seed.is_some() {
            options.seed = section.seed;
        }
        if let Some(locale) = section.locale {
            options.locale = locale;
        }
        if let Some(start_year) = section.start_year {
            options.start_year = start_year;
        }
        if let Some(end_year) = section.end_year {
            options.end_year = end_year;
        }
        if let Some(sold_probability) = section.sold_probability {
            options.sold_probability = sold_probability;
        }
        if let Some(prefix) = &section.header_prefix {
            options.header_prefix = prefix.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[generation]
count = 50
out = "items.csv"
start_asset_id = 5001
seed = 42
locale = "pt_BR"
start_year = 2019
end_year = 2023
sold_probability = 0.2
header_prefix = ""

[[archetype]]
category = "Router"
manufacturers = ["Netgear", "TP-Link"]
models = ["Nighthawk", "Archer"]
price_range = [60, 400.0]
description = "Wi-Fi router"
"#;

    #[test]
    fn sample_config_overrides_defaults() {
        let config = parse_config(SAMPLE).expect("parse config");
        let mut options = GenerateOptions::default();
        config.apply(&mut options);

        assert_eq!(options.count, 50);
        assert_eq!(options.out_path, PathBuf::from("items.csv"));
        assert_eq!(options.start_asset_id, 5001);
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.locale, LocaleKey::PtBr);
        assert_eq!((options.start_year, options.end_year), (2019, 2023));
        assert_eq!(options.sold_probability, 0.2);
        assert_eq!(options.header_prefix, "");
        assert_eq!(options.report_path, None);

        let catalog = config.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.archetypes[0].price_range.min, 60.0);
    }

    #[test]
    fn empty_config_keeps_builtin_defaults() {
        let config = parse_config("").expect("parse empty config");
        let mut options = GenerateOptions::default();
        config.apply(&mut options);

        assert_eq!(options.count, 20);
        assert_eq!(options.start_asset_id, 1001);
        assert_eq!(options.out_path, PathBuf::from("test_items.csv"));
        assert_eq!(config.catalog(), Catalog::builtin());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = parse_config("[generation]\nrows = 10\n");
        assert!(matches!(result, Err(CliError::Config(_))));

        let result = parse_config("[output]\npath = \"x.csv\"\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let result = parse_config("[generation]\nlocale = \"fr_FR\"\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn out_of_range_values_are_invalid_config() {
        for content in [
            "[generation]\nstart_year = 0\n",
            "[generation]\nend_year = 9999\n",
            "[generation]\nstart_year = 2024\nend_year = 2020\n",
            "[generation]\nsold_probability = 1.5\n",
        ] {
            let result = parse_config(content);
            assert!(
                matches!(result, Err(CliError::InvalidConfig(_))),
                "{content:?} gave {result:?}"
            );
        }

        let config = parse_config("[generation]\nstart_year = 1\nend_year = 9994\n")
            .expect("edge years parse");
        assert_eq!(config.generation.end_year, Some(9994));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let path = std::env::temp_dir().join(format!(
            "stockseed_missing_{}.toml",
            uuid::Uuid::new_v4()
        ));
        assert!(matches!(load_config(&path), Err(CliError::Io(_))));
    }
}
