//! HTTP handlers for the detection API

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::detection::{DetectionResult, ModelPredictions, SpamDetector, TrainingStats};

/// Shared application state
pub struct AppState {
    pub detector: SpamDetector,
}

/// Prediction request body
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
}

/// Prediction response, matching the scoring service wire format
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "isSpam")]
    pub is_spam: bool,
    #[serde(rename = "spamScore")]
    pub spam_score: f64,
    #[serde(rename = "detectedPatterns")]
    pub detected_patterns: Vec<String>,
    #[serde(rename = "modelPredictions")]
    pub model_predictions: ModelPredictions,
}

impl From<DetectionResult> for PredictResponse {
    fn from(result: DetectionResult) -> Self {
        Self {
            is_spam: result.is_spam,
            spam_score: result.score,
            detected_patterns: result.patterns,
            model_predictions: result.model_predictions,
        }
    }
}

impl From<PredictResponse> for DetectionResult {
    fn from(response: PredictResponse) -> Self {
        Self {
            is_spam: response.is_spam,
            score: response.spam_score,
            patterns: response.detected_patterns,
            model_predictions: response.model_predictions,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health response body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(rename = "models_loaded")]
    pub models_loaded: bool,
}

/// Classify a message
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    if req.subject.is_empty() && req.content.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Please provide subject or content".to_string(),
            }),
        ));
    }

    let result = state.detector.classify(&req.subject, &req.content);
    Ok(Json(result.into()))
}

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running".to_string(),
        models_loaded: true,
    })
}

/// Simulated training statistics
pub async fn stats() -> Json<TrainingStats> {
    Json(TrainingStats::simulated())
}
