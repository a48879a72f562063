//! Process-lifetime cache of the two startup artifacts

use crate::error::ArtifactError;
use crate::models::{ModelBundle, ModelLoader};
use crate::reference::ReferenceDataset;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::Arc;

/// Loads the reference dataset and the model bundle at most once each and
/// hands out shared read-only handles afterwards.
///
/// A failed load leaves the cell empty, so the next access retries.
pub struct ArtifactCache {
    dataset_path: PathBuf,
    bundle_path: PathBuf,
    dataset: OnceCell<Arc<ReferenceDataset>>,
    bundle: OnceCell<Arc<ModelBundle>>,
}

impl ArtifactCache {
    pub fn new(dataset_path: impl Into<PathBuf>, bundle_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            bundle_path: bundle_path.into(),
            dataset: OnceCell::new(),
            bundle: OnceCell::new(),
        }
    }

    pub fn dataset(&self) -> Result<Arc<ReferenceDataset>, ArtifactError> {
        self.dataset
            .get_or_try_init(|| ReferenceDataset::load(&self.dataset_path).map(Arc::new))
            .cloned()
    }

    pub fn bundle(&self) -> Result<Arc<ModelBundle>, ArtifactError> {
        self.bundle
            .get_or_try_init(|| ModelLoader::load_bundle(&self.bundle_path).map(Arc::new))
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some() && self.bundle.get().is_some()
    }
}
