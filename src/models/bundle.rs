//! Fitted artifact bundle: estimators, transformers and metadata

use crate::error::ArtifactError;
use crate::models::encoder::{EncoderMap, LabelEncoder};
use crate::models::estimator::{Classifier, Regressor};
use crate::models::kmeans::KMeans;
use crate::models::scaler::FeatureScaler;
use crate::types::car::{CategoricalField, Feature};
use crate::types::prediction::ModelIdentity;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::warn;

/// Median metadata recorded by the training process
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MedianValues {
    /// Median of the target column (the High/Low split)
    Scalar(f64),
    /// Medians of several columns
    PerColumn(BTreeMap<String, f64>),
}

/// The bundle as written by the training process
#[derive(Debug, Deserialize)]
struct BundleFile {
    reg: Regressor,
    clf: Classifier,
    scaler: FeatureScaler,
    encoders: HashMap<String, LabelEncoder>,
    kmeans: KMeans,
    median_val: MedianValues,
    target_col: String,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
}

/// Immutable, shape-checked model bundle
#[derive(Debug, Clone)]
pub struct ModelBundle {
    reg: Regressor,
    clf: Classifier,
    scaler: FeatureScaler,
    encoders: EncoderMap,
    kmeans: KMeans,
    median_val: MedianValues,
    target_col: String,
    features: Vec<Feature>,
}

impl ModelBundle {
    /// Parse and shape-check a JSON bundle.
    ///
    /// Parse failures (bad JSON, missing keys, unknown estimator types) are
    /// reported as [`ArtifactError::Malformed`] against `origin`; shape
    /// disagreements as [`ArtifactError::Incompatible`].
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ArtifactError> {
        let raw: BundleFile =
            serde_json::from_str(json).map_err(|e| ArtifactError::malformed(origin, e))?;
        Self::try_from(raw)
    }

    pub fn regressor(&self) -> &Regressor {
        &self.reg
    }

    pub fn classifier(&self) -> &Classifier {
        &self.clf
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn kmeans(&self) -> &KMeans {
        &self.kmeans
    }

    pub fn encoders(&self) -> &EncoderMap {
        &self.encoders
    }

    pub fn encoder(&self, field: CategoricalField) -> Option<&LabelEncoder> {
        self.encoders.get(&field)
    }

    pub fn median_val(&self) -> &MedianValues {
        &self.median_val
    }

    pub fn target_col(&self) -> &str {
        &self.target_col
    }

    /// Column order of the feature vector the artifacts were fitted on
    pub fn feature_order(&self) -> &[Feature] {
        &self.features
    }

    /// Class names and metadata for display
    pub fn identity(&self) -> ModelIdentity {
        let target_median = match &self.median_val {
            MedianValues::Scalar(value) => Some(*value),
            MedianValues::PerColumn(medians) => medians.get(&self.target_col).copied(),
        };

        ModelIdentity {
            regression: self.reg.class_name().to_string(),
            classification: self.clf.class_name().to_string(),
            clustering: "KMeans".to_string(),
            target_col: self.target_col.clone(),
            target_median,
        }
    }
}

impl TryFrom<BundleFile> for ModelBundle {
    type Error = ArtifactError;

    fn try_from(raw: BundleFile) -> Result<Self, Self::Error> {
        let features = resolve_feature_order(raw.feature_names.as_deref())
            .map_err(ArtifactError::Incompatible)?;
        let n_features = features.len();

        let mut encoders = EncoderMap::new();
        for (column, encoder) in raw.encoders {
            match Feature::from_column(&column) {
                Some(Feature::Categorical(field)) => {
                    encoders.insert(field, encoder);
                }
                _ => warn!(column = %column, "Ignoring encoder for a non-categorical column"),
            }
        }
        for field in CategoricalField::ALL {
            if !encoders.contains_key(&field) {
                return Err(ArtifactError::Incompatible(format!(
                    "no encoder for column '{}'",
                    field.column()
                )));
            }
        }

        raw.scaler
            .validate(n_features)
            .map_err(ArtifactError::Incompatible)?;
        raw.reg
            .validate(n_features)
            .map_err(ArtifactError::Incompatible)?;
        raw.clf
            .validate(n_features)
            .map_err(ArtifactError::Incompatible)?;
        if raw.kmeans.n_features() != n_features {
            return Err(ArtifactError::Incompatible(format!(
                "KMeans centres have {} features, expected {n_features}",
                raw.kmeans.n_features()
            )));
        }

        Ok(Self {
            reg: raw.reg,
            clf: raw.clf,
            scaler: raw.scaler,
            encoders,
            kmeans: raw.kmeans,
            median_val: raw.median_val,
            target_col: raw.target_col,
            features,
        })
    }
}

/// Map exported column names onto features; every car column exactly once
fn resolve_feature_order(names: Option<&[String]>) -> Result<Vec<Feature>, String> {
    let Some(names) = names else {
        return Ok(Feature::TRAINING_ORDER.to_vec());
    };

    let mut seen = HashSet::new();
    let mut features = Vec::with_capacity(names.len());
    for name in names {
        let feature = Feature::from_column(name)
            .ok_or_else(|| format!("unknown feature column '{name}'"))?;
        if !seen.insert(feature) {
            return Err(format!("feature column '{name}' listed twice"));
        }
        features.push(feature);
    }

    if features.len() != Feature::TRAINING_ORDER.len() {
        return Err(format!(
            "feature_names lists {} columns, expected {}",
            features.len(),
            Feature::TRAINING_ORDER.len()
        ));
    }

    Ok(features)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::car::NumericField;

    /// Small linear bundle over two options per categorical column.
    ///
    /// Scaled values of the record
    /// (Maruti Swift Dzire VDI, 2016, 40000, Diesel, Individual, Manual, First Owner)
    /// are [1, 1, -1, -1, 1, 1, -1], which prices at 425000, classifies as 1
    /// and lands exactly on cluster 1.
    pub(crate) const LINEAR_BUNDLE: &str = r#"{
        "reg": {
            "type": "LinearRegression",
            "coef": [10000.0, 50000.0, -40000.0, 30000.0, -5000.0, -60000.0, -20000.0],
            "intercept": 400000.0
        },
        "clf": {
            "type": "LogisticRegression",
            "coef": [0.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0],
            "intercept": 0.0,
            "classes": [0, 1]
        },
        "scaler": {
            "type": "StandardScaler",
            "mean": [0.5, 2012.0, 60000.0, 0.5, 0.5, 0.5, 0.5],
            "scale": [0.5, 4.0, 20000.0, 0.5, 0.5, 0.5, 0.5]
        },
        "encoders": {
            "name": {"classes": ["Honda City 1.5 V AT", "Maruti Swift Dzire VDI"]},
            "fuel": {"classes": ["Diesel", "Petrol"]},
            "seller_type": {"classes": ["Dealer", "Individual"]},
            "transmission": {"classes": ["Automatic", "Manual"]},
            "owner": {"classes": ["First Owner", "Second Owner"]}
        },
        "kmeans": {
            "cluster_centers": [
                [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                [1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0]
            ]
        },
        "median_val": 300000.0,
        "target_col": "selling_price"
    }"#;

    pub(crate) fn linear_bundle() -> ModelBundle {
        ModelBundle::from_json_str(LINEAR_BUNDLE, "linear-bundle").unwrap()
    }

    fn patched(key: &str, value: serde_json::Value) -> String {
        let mut json: serde_json::Value = serde_json::from_str(LINEAR_BUNDLE).unwrap();
        match value {
            serde_json::Value::Null => {
                json.as_object_mut().unwrap().remove(key);
            }
            value => {
                json[key] = value;
            }
        }
        json.to_string()
    }

    #[test]
    fn test_parse_bundle() {
        let bundle = linear_bundle();

        assert_eq!(bundle.target_col(), "selling_price");
        assert_eq!(bundle.median_val(), &MedianValues::Scalar(300000.0));
        assert_eq!(bundle.feature_order(), Feature::TRAINING_ORDER);
        assert_eq!(bundle.kmeans().n_clusters(), 2);
        assert_eq!(
            bundle.encoder(CategoricalField::Fuel).unwrap().transform("Petrol"),
            Some(1)
        );
    }

    #[test]
    fn test_identity() {
        let identity = linear_bundle().identity();

        assert_eq!(identity.regression, "LinearRegression");
        assert_eq!(identity.classification, "LogisticRegression");
        assert_eq!(identity.clustering, "KMeans");
        assert_eq!(identity.target_median, Some(300000.0));
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let json = patched("kmeans", serde_json::Value::Null);
        let result = ModelBundle::from_json_str(&json, "bundle.json");

        match result {
            Err(ArtifactError::Malformed { reason, .. }) => assert!(reason.contains("kmeans")),
            other => panic!("expected malformed bundle, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_encoder_is_incompatible() {
        let json = patched(
            "encoders",
            serde_json::json!({
                "name": {"classes": ["A"]},
                "fuel": {"classes": ["Diesel"]},
                "seller_type": {"classes": ["Dealer"]},
                "transmission": {"classes": ["Manual"]}
            }),
        );
        let result = ModelBundle::from_json_str(&json, "bundle.json");
        assert!(matches!(result, Err(ArtifactError::Incompatible(msg)) if msg.contains("owner")));
    }

    #[test]
    fn test_scaler_width_is_checked() {
        let json = patched(
            "scaler",
            serde_json::json!({"type": "StandardScaler", "mean": [0.0, 0.0], "scale": [1.0, 1.0]}),
        );
        let result = ModelBundle::from_json_str(&json, "bundle.json");
        assert!(matches!(result, Err(ArtifactError::Incompatible(_))));
    }

    #[test]
    fn test_kmeans_width_is_checked() {
        let json = patched("kmeans", serde_json::json!({"cluster_centers": [[0.0, 1.0]]}));
        let result = ModelBundle::from_json_str(&json, "bundle.json");
        assert!(matches!(result, Err(ArtifactError::Incompatible(_))));
    }

    #[test]
    fn test_custom_feature_order() {
        let json = patched(
            "feature_names",
            serde_json::json!([
                "year", "km_driven", "name", "fuel", "seller_type", "transmission", "owner"
            ]),
        );
        let bundle = ModelBundle::from_json_str(&json, "bundle.json").unwrap();

        assert_eq!(bundle.feature_order()[0], Feature::Numeric(NumericField::Year));
        assert_eq!(
            bundle.feature_order()[2],
            Feature::Categorical(CategoricalField::Name)
        );
    }

    #[test]
    fn test_feature_order_must_cover_every_column() {
        let json = patched(
            "feature_names",
            serde_json::json!(["year", "year", "name", "fuel", "seller_type", "transmission", "owner"]),
        );
        assert!(ModelBundle::from_json_str(&json, "bundle.json").is_err());

        let json = patched("feature_names", serde_json::json!(["year", "selling_price"]));
        assert!(ModelBundle::from_json_str(&json, "bundle.json").is_err());
    }

    #[test]
    fn test_per_column_medians() {
        let json = patched(
            "median_val",
            serde_json::json!({"selling_price": 350000.0, "km_driven": 60000.0}),
        );
        let bundle = ModelBundle::from_json_str(&json, "bundle.json").unwrap();

        assert_eq!(bundle.identity().target_median, Some(350000.0));
    }
}
