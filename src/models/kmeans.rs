//! Fitted K-Means clustering model

use serde::Deserialize;

/// K-Means model reduced to its fitted centroids
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "KMeansCenters")]
pub struct KMeans {
    cluster_centers: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct KMeansCenters {
    cluster_centers: Vec<Vec<f64>>,
}

impl TryFrom<KMeansCenters> for KMeans {
    type Error = String;

    fn try_from(raw: KMeansCenters) -> Result<Self, Self::Error> {
        let width = match raw.cluster_centers.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err("k-means model has no cluster centres".to_string()),
        };
        if raw.cluster_centers.iter().any(|c| c.len() != width) {
            return Err("k-means cluster centres differ in width".to_string());
        }
        Ok(Self {
            cluster_centers: raw.cluster_centers,
        })
    }
}

impl KMeans {
    /// Number of clusters `k`
    pub fn n_clusters(&self) -> usize {
        self.cluster_centers.len()
    }

    pub fn n_features(&self) -> usize {
        self.cluster_centers[0].len()
    }

    pub fn centroids(&self) -> &[Vec<f64>] {
        &self.cluster_centers
    }

    /// Index of the nearest centroid; ties go to the lower index
    pub fn predict(&self, features: &[f64]) -> usize {
        let mut min_distance = f64::INFINITY;
        let mut closest_cluster = 0;

        for (cluster_idx, centroid) in self.cluster_centers.iter().enumerate() {
            let distance: f64 = features
                .iter()
                .zip(centroid)
                .map(|(a, b)| (a - b).powi(2))
                .sum();

            if distance < min_distance {
                min_distance = distance;
                closest_cluster = cluster_idx;
            }
        }

        closest_cluster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> KMeans {
        serde_json::from_str(
            r#"{"cluster_centers": [[0.0, 0.0], [1.0, 1.0], [-1.0, 1.0]]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_predict_nearest_centroid() {
        let kmeans = model();

        assert_eq!(kmeans.n_clusters(), 3);
        assert_eq!(kmeans.predict(&[0.1, -0.2]), 0);
        assert_eq!(kmeans.predict(&[0.9, 1.3]), 1);
        assert_eq!(kmeans.predict(&[-2.0, 2.0]), 2);
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        // equidistant from centres 1 and 2
        assert_eq!(model().predict(&[0.0, 2.0]), 1);
    }

    #[test]
    fn test_empty_or_ragged_centres_rejected() {
        assert!(serde_json::from_str::<KMeans>(r#"{"cluster_centers": []}"#).is_err());
        assert!(
            serde_json::from_str::<KMeans>(r#"{"cluster_centers": [[0.0], [1.0, 2.0]]}"#).is_err()
        );
    }
}
