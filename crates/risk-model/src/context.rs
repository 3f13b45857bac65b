//! Model Context and Inference

use crate::artifacts::{load_json, ArtifactPaths, StandardScaler};
use crate::{ModelError, RiskAssessment, RiskLabel};
use feature_encoder::{ColumnSchema, FeatureVector};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::distance::euclidian::Euclidian;
use smartcore::neighbors::knn_classifier::KNNClassifier;
use tracing::{debug, info};

/// Fitted k-nearest-neighbors classifier over the heart feature schema
pub type HeartClassifier = KNNClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>, Euclidian<f64>>;

/// Immutable inference context: the three fitted artifacts, loaded once at
/// startup and passed explicitly to callers for the process lifetime
#[derive(Debug)]
pub struct ModelContext {
    scaler: StandardScaler,
    classifier: HeartClassifier,
    schema: ColumnSchema,
}

impl ModelContext {
    /// Assemble a context from already-loaded artifacts.
    ///
    /// Rejects a scaler whose width disagrees with the column schema, so a
    /// mismatched artifact set fails here instead of producing nonsense
    /// labels later.
    pub fn new(
        scaler: StandardScaler,
        classifier: HeartClassifier,
        schema: ColumnSchema,
    ) -> Result<Self, ModelError> {
        if scaler.len() != schema.len() {
            return Err(ModelError::ShapeMismatch {
                expected: schema.len(),
                actual: scaler.len(),
            });
        }

        Ok(Self {
            scaler,
            classifier,
            schema,
        })
    }

    /// Load all three artifacts from disk. Any failure is fatal to startup.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ModelError> {
        info!("Loading prediction artifacts from {}", paths.model.display());

        let scaler: StandardScaler = load_json(&paths.scaler)?;
        let classifier: HeartClassifier = load_json(&paths.model)?;
        let schema: ColumnSchema = load_json(&paths.columns)?;

        info!("Artifacts loaded: {} expected columns", schema.len());
        Self::new(scaler, classifier, schema)
    }

    /// The expected column schema the artifacts were fitted against
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Scale a schema-aligned feature vector and classify it, returning the
    /// single binary label for the single input row
    pub fn predict(&self, features: &FeatureVector) -> Result<RiskAssessment, ModelError> {
        if features.len() != self.schema.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.schema.len(),
                actual: features.len(),
            });
        }

        let scaled = self.scaler.transform(features.values())?;
        let row = DenseMatrix::new(1, scaled.len(), scaled, false);

        let classes = self
            .classifier
            .predict(&row)
            .map_err(|e| ModelError::ClassificationFailed(e.to_string()))?;
        let class = classes
            .first()
            .copied()
            .ok_or_else(|| ModelError::ClassificationFailed("empty prediction".to_string()))?;

        debug!("Classifier returned class {}", class);
        Ok(RiskAssessment::from(RiskLabel::from_class(class)))
    }
}
