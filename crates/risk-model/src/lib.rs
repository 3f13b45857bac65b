//! Risk Model
//!
//! Loads the fitted prediction artifacts (scaler, k-NN classifier, expected
//! column schema) once at startup and runs single-row risk inference.

mod artifacts;
mod context;
mod label;

pub use artifacts::{ArtifactPaths, StandardScaler};
pub use context::{HeartClassifier, ModelContext};
pub use label::{RiskAssessment, RiskLabel};

use thiserror::Error;

/// Errors during artifact loading and inference
#[derive(Debug, Error)]
pub enum ModelError {
    /// Artifact could not be read or deserialized; fatal at startup
    #[error("artifact load failed: {0}")]
    ArtifactLoad(String),

    /// Input width does not match what the fitted artifacts expect
    #[error("input shape mismatch: expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Classifier rejected the scaled input
    #[error("classification failed: {0}")]
    ClassificationFailed(String),
}
