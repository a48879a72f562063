//! Car Price Predictor Library
//!
//! Loads a reference dataset of used-car listings and a pre-trained model
//! bundle, then turns one car's attributes into an estimated selling price,
//! a High/Low price label and a cluster group.

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod error;
pub mod feature_extractor;
pub mod logging;
pub mod models;
pub mod presenter;
pub mod reference;
pub mod types;
pub mod ui;

pub use artifacts::ArtifactCache;
pub use cli::Args;
pub use config::AppConfig;
pub use error::{ArtifactError, PredictError};
pub use feature_extractor::FeatureExtractor;
pub use models::{InferenceEngine, ModelBundle};
pub use presenter::ResultPresenter;
pub use reference::{InputDomains, ReferenceDataset};
pub use types::{CarRecord, PredictionResult, PriceLabel};

/// Common result type used at the application boundary
pub type Result<T> = anyhow::Result<T>;
