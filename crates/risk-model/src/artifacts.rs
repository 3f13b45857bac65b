//! Fitted Prediction Artifacts

use crate::ModelError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// File name of the serialized classifier artifact
pub const MODEL_FILE: &str = "heart_knn_model.json";
/// File name of the serialized scaler artifact
pub const SCALER_FILE: &str = "heart_scaler.json";
/// File name of the expected column list artifact
pub const COLUMNS_FILE: &str = "heart_columns.json";

/// Locations of the three artifact files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// Serialized classifier
    pub model: PathBuf,
    /// Serialized scaler
    pub scaler: PathBuf,
    /// Expected column list
    pub columns: PathBuf,
}

impl ArtifactPaths {
    /// Conventional artifact layout: all three files in one directory
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            model: dir.join(MODEL_FILE),
            scaler: dir.join(SCALER_FILE),
            columns: dir.join(COLUMNS_FILE),
        }
    }
}

/// Deserialize one artifact file
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let file = File::open(path)
        .map_err(|e| ModelError::ArtifactLoad(format!("{}: {}", path.display(), e)))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ModelError::ArtifactLoad(format!("{}: {}", path.display(), e)))
}

/// Standardization transform with parameters fitted at training time.
/// Applied identically at inference time; never re-fitted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler from fitted parameters
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Identity scaler (mean 0, scale 1) over `len` columns
    pub fn identity(len: usize) -> Self {
        Self {
            mean: vec![0.0; len],
            scale: vec![1.0; len],
        }
    }

    /// Number of columns the scaler was fitted against
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Whether the scaler covers no columns
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Apply the fitted transform: `(x - mean) / scale` per column
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>, ModelError> {
        if values.len() != self.mean.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.mean.len(),
                actual: values.len(),
            });
        }

        Ok(values
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(v, (m, s))| (v - m) / s)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_applies_fitted_parameters() {
        let scaler = StandardScaler::new(vec![10.0, 0.0], vec![2.0, 1.0]);
        let out = scaler.transform(&[14.0, 3.0]).unwrap();
        assert_eq!(out, vec![2.0, 3.0]);
    }

    #[test]
    fn test_identity_is_a_no_op() {
        let scaler = StandardScaler::identity(3);
        let out = scaler.transform(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let scaler = StandardScaler::identity(3);
        let err = scaler.transform(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_missing_artifact_is_load_error() {
        let err = load_json::<StandardScaler>(Path::new("/nonexistent/heart_scaler.json"))
            .unwrap_err();
        assert!(matches!(err, ModelError::ArtifactLoad(_)));
    }
}
