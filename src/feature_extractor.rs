//! Feature extraction for car price inference.
//!
//! Turns a submitted [`CarRecord`] into the raw (unscaled) feature vector
//! the bundle's scaler was fitted on: categorical columns become their label
//! encoder codes, numeric columns pass through unchanged.

use crate::error::PredictError;
use crate::models::encoder::EncoderMap;
use crate::types::car::{CarRecord, Feature};

/// Feature extractor that transforms car records into model input features.
///
/// Features are emitted in the column order of the training frame, which the
/// bundle may override with its own `feature_names`.
pub struct FeatureExtractor {
    order: Vec<Feature>,
}

impl FeatureExtractor {
    /// Create an extractor for a given column order.
    pub fn new(order: Vec<Feature>) -> Self {
        Self { order }
    }

    /// Extract features from a car record.
    ///
    /// Fails with [`PredictError::UnseenCategory`] when a categorical value
    /// was never seen by its encoder, or when the encoder is absent.
    pub fn extract(&self, car: &CarRecord, encoders: &EncoderMap) -> Result<Vec<f64>, PredictError> {
        let mut features = Vec::with_capacity(self.order.len());

        for feature in &self.order {
            let value = match *feature {
                Feature::Categorical(field) => {
                    let raw = car.categorical(field);
                    let code = encoders
                        .get(&field)
                        .and_then(|encoder| encoder.transform(raw))
                        .ok_or_else(|| PredictError::UnseenCategory {
                            column: field.column().to_string(),
                            value: raw.to_string(),
                        })?;
                    code as f64
                }
                Feature::Numeric(field) => car.numeric(field) as f64,
            };
            features.push(value);
        }

        Ok(features)
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        self.order.len()
    }

    /// Get feature names in emission order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.order.iter().map(|feature| feature.column()).collect()
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(Feature::TRAINING_ORDER.to_vec())
    }
}
