//! Inference engine: encode, scale, then regression, classification and clustering

use crate::error::PredictError;
use crate::feature_extractor::FeatureExtractor;
use crate::models::bundle::ModelBundle;
use crate::reference::InputDomains;
use crate::types::car::{CarRecord, CategoricalField};
use crate::types::prediction::{ModelIdentity, PredictionResult, PriceLabel};
use std::sync::Arc;
use tracing::debug;

/// A dataset category the fitted encoder has never seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainGap {
    pub field: CategoricalField,
    pub value: String,
}

/// Runs one car record through the three fitted estimators
pub struct InferenceEngine {
    bundle: Arc<ModelBundle>,
    extractor: FeatureExtractor,
}

impl InferenceEngine {
    /// Create an engine over a loaded bundle, honouring its feature order
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        let extractor = FeatureExtractor::new(bundle.feature_order().to_vec());
        Self { bundle, extractor }
    }

    pub fn bundle(&self) -> &ModelBundle {
        &self.bundle
    }

    /// Class names of the loaded estimators
    pub fn identity(&self) -> ModelIdentity {
        self.bundle.identity()
    }

    /// Number of clusters `k`; cluster ids are in `0..k`
    pub fn n_clusters(&self) -> usize {
        self.bundle.kmeans().n_clusters()
    }

    /// Predict price, label and cluster for one record
    pub fn predict(&self, car: &CarRecord) -> Result<PredictionResult, PredictError> {
        let raw = self.extractor.extract(car, self.bundle.encoders())?;
        let scaled = self.bundle.scaler().transform(&raw)?;

        let price = self.bundle.regressor().predict(&scaled);
        if !price.is_finite() {
            return Err(PredictError::NonFinite(price));
        }
        let label = PriceLabel::from_code(self.bundle.classifier().predict(&scaled));
        let cluster = self.bundle.kmeans().predict(&scaled);

        debug!(
            name = %car.name,
            year = car.year,
            km_driven = car.km_driven,
            price = price,
            label = %label,
            cluster = cluster,
            "Prediction complete"
        );

        Ok(PredictionResult {
            price,
            label,
            cluster,
        })
    }

    /// Dataset categories that the bundle's encoders cannot transform.
    ///
    /// The form offers every dataset category, so each gap is a value whose
    /// submission would fail with [`PredictError::UnseenCategory`].
    pub fn domain_gaps(&self, domains: &InputDomains) -> Vec<DomainGap> {
        let mut gaps = Vec::new();
        for field in CategoricalField::ALL {
            let Some(encoder) = self.bundle.encoder(field) else {
                continue;
            };
            gaps.extend(
                domains
                    .options(field)
                    .iter()
                    .filter(|value| !encoder.contains(value))
                    .map(|value| DomainGap {
                        field,
                        value: value.clone(),
                    }),
            );
        }
        gaps
    }
}
