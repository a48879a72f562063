//! Prediction output data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary price label produced by the classification estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceLabel {
    High,
    Low,
}

impl PriceLabel {
    /// Map a classifier output code to a label. Code 1 is "High", anything
    /// else is "Low".
    pub fn from_code(code: i64) -> Self {
        if code == 1 {
            PriceLabel::High
        } else {
            PriceLabel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceLabel::High => "High",
            PriceLabel::Low => "Low",
        }
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three outputs of one form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Estimated selling price
    pub price: f64,
    /// High/Low price label
    pub label: PriceLabel,
    /// Cluster group, in `0..k`
    pub cluster: usize,
}

/// Class names and metadata of the loaded estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelIdentity {
    pub regression: String,
    pub classification: String,
    pub clustering: String,
    /// Target column the estimators were trained on
    pub target_col: String,
    /// Median of the target when the bundle records it as a single number
    pub target_median: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_mapping_is_binary() {
        assert_eq!(PriceLabel::from_code(1), PriceLabel::High);
        for code in [-1, 0, 2, 7, i64::MAX] {
            assert_eq!(PriceLabel::from_code(code), PriceLabel::Low);
        }
        assert_eq!(PriceLabel::High.to_string(), "High");
        assert_eq!(PriceLabel::Low.to_string(), "Low");
    }

    #[test]
    fn test_prediction_result_serialization() {
        let result = PredictionResult {
            price: 512_345.6,
            label: PriceLabel::High,
            cluster: 2,
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: PredictionResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }
}
