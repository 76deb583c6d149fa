mod config;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use stockseed_generate::{
    GenerateOptions, GenerationEngine, GenerationError, GenerationResult, LocaleKey,
};
use thiserror::Error;

use config::{ConfigFile, load_config};
use logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(
    name = "stockseed",
    version,
    about = "Generate synthetic inventory records as a Homebox import CSV"
)]
struct Cli {
    /// Number of records to generate [default: 20].
    #[arg(long)]
    count: Option<u64>,
    /// Output CSV path [default: test_items.csv].
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Asset id of the first record [default: 1001].
    #[arg(long, value_name = "ID")]
    start_id: Option<u64>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Locale for generated text (en_US or pt_BR) [default: en_US].
    #[arg(long, value_parser = parse_locale)]
    locale: Option<LocaleKey>,
    /// Write a JSON generation report to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    /// TOML file with generation settings and catalog archetypes.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Append JSON logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn parse_locale(value: &str) -> Result<LocaleKey, String> {
    LocaleKey::parse(value).ok_or_else(|| {
        let supported: Vec<&str> = LocaleKey::ALL.iter().map(|key| key.as_str()).collect();
        format!(
            "unsupported locale '{value}' (expected one of: {})",
            supported.join(", ")
        )
    })
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => {
            let config = load_config(path)?;
            tracing::info!(
                path = %path.display(),
                archetypes = config.archetypes.len(),
                "config loaded"
            );
            config
        }
        None => ConfigFile::default(),
    };

    let catalog = config.catalog();
    let options = resolve_options(&cli, &config);
    let engine = GenerationEngine::new(options);
    let result = engine.run(&catalog)?;

    println!("{}", summary(&result));
    Ok(())
}

/// Line printed to stdout after a successful run.
fn summary(result: &GenerationResult) -> String {
    format!(
        "Generated {} items in {}",
        result.report.records_written,
        result.out_path.display()
    )
}

/// Flags win over the config file, which wins over built-in defaults.
fn resolve_options(cli: &Cli, config: &ConfigFile) -> GenerateOptions {
    let mut options = GenerateOptions::default();
    config.apply(&mut options);

    if let Some(count) = cli.count {
        options.count = count;
    }
    if let Some(out) = &cli.out {
        options.out_path = out.clone();
    }
    if let Some(start_id) = cli.start_id {
        options.start_asset_id = start_id;
    }
    if cli.seed.is_some() {
        options.seed = cli.seed;
    }
    if let Some(locale) = cli.locale {
        options.locale = locale;
    }
    if let Some(report) = &cli.report {
        options.report_path = Some(report.clone());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn no_arguments_keep_defaults() {
        let cli = Cli::try_parse_from(["stockseed"]).expect("parse no args");
        let options = resolve_options(&cli, &ConfigFile::default());

        assert_eq!(options.count, 20);
        assert_eq!(options.start_asset_id, 1001);
        assert_eq!(options.out_path, PathBuf::from("test_items.csv"));
        assert_eq!(options.seed, None);
        assert_eq!(options.locale, LocaleKey::EnUs);
        assert_eq!(options.header_prefix, "HB.");
    }

    #[test]
    fn flags_override_config() {
        let config =
            parse_config("[generation]\ncount = 50\nseed = 1\nout = \"from_config.csv\"\n")
                .expect("parse config");
        let cli = Cli::try_parse_from([
            "stockseed",
            "--count",
            "5",
            "--seed",
            "9",
            "--start-id",
            "7000",
            "--locale",
            "pt_BR",
        ])
        .expect("parse flags");
        let options = resolve_options(&cli, &config);

        assert_eq!(options.count, 5);
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.start_asset_id, 7000);
        assert_eq!(options.locale, LocaleKey::PtBr);
        assert_eq!(options.out_path, PathBuf::from("from_config.csv"));
    }

    #[test]
    fn no_argument_run_writes_default_file_and_summary() {
        let dir = std::env::temp_dir().join(format!("stockseed_cli_{}", uuid::Uuid::new_v4()));
        let cli = Cli::try_parse_from(["stockseed"]).expect("parse no args");
        let config = ConfigFile::default();
        let mut options = resolve_options(&cli, &config);
        options.out_path = dir.join(&options.out_path);

        let result = GenerationEngine::new(options)
            .run(&config.catalog())
            .expect("run generation");

        let out_path = dir.join("test_items.csv");
        assert_eq!(result.out_path, out_path);
        assert_eq!(
            summary(&result),
            format!("Generated 20 items in {}", out_path.display())
        );
        let content = std::fs::read_to_string(&out_path).expect("read csv");
        assert_eq!(content.lines().count(), 21);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unknown_locale_flag_is_rejected() {
        let result = Cli::try_parse_from(["stockseed", "--locale", "xx_XX"]);
        assert!(result.is_err());
    }
}
