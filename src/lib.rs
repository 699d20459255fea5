//! NatSport API - cohort-based national sport prediction service
//!
//! This library answers "what sport would someone like me call the national
//! sport?" by selecting a survey cohort that matches the caller's
//! demographics through a cascade of progressively looser filters, then
//! returning the cohort's most common answer with its empirical probability.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{AgeBracket, CascadeStage, PredictError, Predictor};
pub use models::{PredictRequest, Prediction, Query, SurveyRecord};
pub use services::DatasetStore;
