// Service exports
pub mod dataset;

pub use dataset::{load_survey_csv, DatasetError, DatasetStore};
