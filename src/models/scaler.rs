//! Fitted feature scalers

use crate::error::PredictError;
use serde::Deserialize;

/// Scaler fitted on the raw training frame
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum FeatureScaler {
    /// `(x - mean) / scale`
    StandardScaler { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`
    MinMaxScaler { min: Vec<f64>, scale: Vec<f64> },
}

impl FeatureScaler {
    pub fn class_name(&self) -> &'static str {
        match self {
            FeatureScaler::StandardScaler { .. } => "StandardScaler",
            FeatureScaler::MinMaxScaler { .. } => "MinMaxScaler",
        }
    }

    /// Width of the vectors this scaler was fitted on
    pub fn n_features(&self) -> usize {
        match self {
            FeatureScaler::StandardScaler { scale, .. } => scale.len(),
            FeatureScaler::MinMaxScaler { scale, .. } => scale.len(),
        }
    }

    pub(crate) fn validate(&self, n_features: usize) -> Result<(), String> {
        let (offset, scale) = match self {
            FeatureScaler::StandardScaler { mean, scale } => (mean, scale),
            FeatureScaler::MinMaxScaler { min, scale } => (min, scale),
        };
        if offset.len() != n_features || scale.len() != n_features {
            return Err(format!(
                "{} fitted on {}/{} features, expected {n_features}",
                self.class_name(),
                offset.len(),
                scale.len()
            ));
        }
        Ok(())
    }

    /// Normalize one feature vector
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PredictError> {
        if features.len() != self.n_features() {
            return Err(PredictError::DimensionMismatch {
                expected: self.n_features(),
                actual: features.len(),
            });
        }

        let scaled = match self {
            FeatureScaler::StandardScaler { mean, scale } => features
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(x, (m, s))| {
                    // constant columns are fitted with a zero scale
                    let s = if *s == 0.0 { 1.0 } else { *s };
                    (x - m) / s
                })
                .collect(),
            FeatureScaler::MinMaxScaler { min, scale } => features
                .iter()
                .zip(min.iter().zip(scale))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        };

        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scaler() {
        let scaler: FeatureScaler = serde_json::from_str(
            r#"{"type": "StandardScaler", "mean": [2012.0, 60000.0], "scale": [4.0, 0.0]}"#,
        )
        .unwrap();

        let scaled = scaler.transform(&[2016.0, 61000.0]).unwrap();
        assert_eq!(scaled, vec![1.0, 1000.0]);
    }

    #[test]
    fn test_min_max_scaler() {
        // fitted on year in [2000, 2020]
        let scaler = FeatureScaler::MinMaxScaler {
            min: vec![-100.0],
            scale: vec![0.05],
        };

        let scaled = scaler.transform(&[2010.0]).unwrap();
        assert!((scaled[0] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_width_mismatch() {
        let scaler = FeatureScaler::StandardScaler {
            mean: vec![0.0; 7],
            scale: vec![1.0; 7],
        };

        assert_eq!(
            scaler.transform(&[1.0, 2.0]),
            Err(PredictError::DimensionMismatch {
                expected: 7,
                actual: 2
            })
        );
        assert!(scaler.validate(7).is_ok());
        assert!(scaler.validate(6).is_err());
    }
}
