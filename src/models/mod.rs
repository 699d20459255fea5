// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Prediction, Query, SurveyRecord, NOT_ENOUGH_DATA};
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, HealthResponse, PredictResponse};
