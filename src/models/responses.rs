use crate::models::domain::Prediction;
use serde::{Deserialize, Serialize};

/// Response for the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub sport: String,
    pub probability: u8,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            sport: prediction.sport,
            probability: prediction.probability,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
