//! Model bundle loader

use crate::error::ArtifactError;
use crate::models::bundle::ModelBundle;
use std::path::Path;
use tracing::info;

/// Loader for serialized model bundles
pub struct ModelLoader;

impl ModelLoader {
    /// Load and shape-check a bundle from a JSON file
    pub fn load_bundle<P: AsRef<Path>>(path: P) -> Result<ModelBundle, ArtifactError> {
        let path = path.as_ref();

        info!(path = %path.display(), "Loading model bundle");

        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let json = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle = ModelBundle::from_json_str(&json, &path.to_string_lossy())?;

        let identity = bundle.identity();
        info!(
            regression = %identity.regression,
            classification = %identity.classification,
            scaler = bundle.scaler().class_name(),
            clusters = bundle.kmeans().n_clusters(),
            target = %identity.target_col,
            "Model bundle loaded successfully"
        );

        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bundle::tests::LINEAR_BUNDLE;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_bundle_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(LINEAR_BUNDLE.as_bytes()).unwrap();

        let bundle = ModelLoader::load_bundle(file.path()).unwrap();
        assert_eq!(bundle.regressor().class_name(), "LinearRegression");
    }

    #[test]
    fn test_missing_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");

        match ModelLoader::load_bundle(&path) {
            Err(ArtifactError::NotFound(missing)) => assert_eq!(missing, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_bundle() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&LINEAR_BUNDLE.as_bytes()[..200]).unwrap();

        let result = ModelLoader::load_bundle(file.path());
        assert!(matches!(result, Err(ArtifactError::Malformed { .. })));
    }
}
