//! Command-line interface definitions and argument parsing

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::types::car::CarRecord;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Used car price, price label and cluster group from a pre-trained model bundle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file (missing file means defaults)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Reference dataset CSV, overrides `artifacts.dataset_path`
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Model bundle JSON, overrides `artifacts.bundle_path`
    #[arg(long)]
    pub bundle: Option<PathBuf>,

    /// Headless mode: predict one car given as JSON and exit
    /// Example: --record '{"name": "Maruti Swift Dzire VDI", "year": 2015, ...}'
    #[arg(short, long)]
    pub record: Option<String>,
}

impl Args {
    /// Apply the artifact path overrides to a loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(dataset) = &self.dataset {
            config.artifacts.dataset_path = dataset.clone();
        }
        if let Some(bundle) = &self.bundle {
            config.artifacts.bundle_path = bundle.clone();
        }
    }

    /// Parse the headless record, if one was given
    pub fn parse_record(&self) -> crate::Result<Option<CarRecord>> {
        let Some(json) = &self.record else {
            return Ok(None);
        };
        let record = serde_json::from_str(json).context("Invalid --record JSON")?;
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["car-price-predictor"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.config, PathBuf::from("config/config.toml"));
        assert!(args.record.is_none());
        assert!(args.parse_record().unwrap().is_none());
    }

    #[test]
    fn test_overrides() {
        let args = args(&["--dataset", "cars.csv", "--bundle", "bundle.json"]);
        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.artifacts.dataset_path, PathBuf::from("cars.csv"));
        assert_eq!(config.artifacts.bundle_path, PathBuf::from("bundle.json"));
    }

    #[test]
    fn test_parse_record() {
        let args = args(&[
            "--record",
            r#"{"name": "Maruti Swift Dzire VDI", "year": 2015, "km_driven": 50000,
                "fuel": "Diesel", "seller_type": "Individual",
                "transmission": "Manual", "owner": "First Owner"}"#,
        ]);

        let record = args.parse_record().unwrap().unwrap();
        assert_eq!(record.year, 2015);
        assert_eq!(record.owner, "First Owner");

        let bad = self::args(&["--record", r#"{"name": "x"}"#]);
        assert!(bad.parse_record().is_err());
    }
}
