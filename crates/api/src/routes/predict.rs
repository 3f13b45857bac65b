//! Predict Route

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

use crate::AppState;
use patient_intake::{IntakeError, PatientRecord};
use risk_model::{ModelError, RiskAssessment};

/// Errors surfaced by the predict endpoint
#[derive(Debug)]
pub enum PredictError {
    /// Record failed range validation
    Invalid(IntakeError),
    /// Inference pass failed
    Inference(ModelError),
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PredictError::Invalid(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            PredictError::Inference(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Run one inference pass: validate, encode, scale + classify, render.
/// The record is transient; nothing is stored between requests.
pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Json(record): Json<PatientRecord>,
) -> Result<Json<RiskAssessment>, PredictError> {
    let start = std::time::Instant::now();

    state
        .validator
        .validate(&record)
        .map_err(PredictError::Invalid)?;

    let vector = state.encoder.encode(&record, state.context.schema());
    let assessment = state
        .context
        .predict(&vector)
        .map_err(PredictError::Inference)?;

    debug!("Predict pass completed in {:?}", start.elapsed());
    info!("Risk assessment: {}", assessment.label.as_str());

    Ok(Json(assessment))
}
