use crate::core::{PredictError, Predictor};
use crate::models::{ErrorResponse, HealthResponse, PredictRequest, PredictResponse};
use crate::services::DatasetStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DatasetStore>,
    pub predictor: Predictor,
}

/// Configure all prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
///
/// Reports `degraded` when the survey dataset failed to load; the service
/// keeps answering requests either way.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.store.is_available() {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Predict endpoint
///
/// POST /api/predict
///
/// Request body:
/// ```json
/// {
///   "age": 30,
///   "gender": "Female",
///   "state": "VIC",
///   "education": "Bachelor"
/// }
/// ```
///
/// `age` may also be a numeric string. Responds 200 with
/// `{"sport": ..., "probability": ...}`, 400 on an invalid query and 500
/// when the dataset is unavailable.
async fn predict(state: web::Data<AppState>, req: web::Json<PredictRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("validation failed for predict request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let query = match Predictor::parse_query(&req) {
        Ok(query) => query,
        Err(e) => {
            tracing::info!("rejected predict request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid input data".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    match state.predictor.predict(&query) {
        Ok(prediction) => {
            tracing::info!(
                sport = %prediction.sport,
                probability = prediction.probability,
                state = %query.state,
                "prediction served"
            );
            HttpResponse::Ok().json(PredictResponse::from(prediction))
        }
        Err(e @ PredictError::InvalidQuery(_)) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid input data".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
        Err(e @ PredictError::DataUnavailable) => {
            tracing::error!("prediction failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Server error: Data not loaded".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
