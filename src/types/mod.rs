//! Type definitions for the car price predictor

pub mod car;
pub mod prediction;

pub use car::{CarRecord, CategoricalField, Feature, NumericField};
pub use prediction::{ModelIdentity, PredictionResult, PriceLabel};
