// Core algorithm exports
pub mod bracket;
pub mod cascade;
pub mod predictor;

pub use bracket::AgeBracket;
pub use cascade::CascadeStage;
pub use predictor::{PredictError, Predictor};
