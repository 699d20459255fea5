use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to predict the national sport for a demographic profile
///
/// `age` is kept as a raw JSON value because clients send it both as a
/// number and as a numeric string; the predictor parses and validates it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    pub age: serde_json::Value,
    #[validate(length(min = 1))]
    pub gender: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub education: String,
}
