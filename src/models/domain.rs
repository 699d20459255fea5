use serde::{Deserialize, Serialize};

/// One survey respondent's row, deserialized straight from the CSV export.
///
/// Demographic fields are free-form strings matched by exact, case-sensitive
/// equality; no normalization happens anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
    #[serde(alias = "Sport")]
    pub sport: String,
    #[serde(alias = "Age")]
    pub age: u32,
    #[serde(alias = "Gender")]
    pub gender: String,
    #[serde(alias = "State")]
    pub state: String,
    #[serde(alias = "Education")]
    pub education: String,
}

/// A validated prediction query, built from a `PredictRequest` at the
/// transport boundary.
#[derive(Debug, Clone)]
pub struct Query {
    pub age: i64,
    pub gender: String,
    pub state: String,
    pub education: String,
}

/// Label returned when the dataset holds no records at all.
pub const NOT_ENOUGH_DATA: &str = "Not enough data";

/// Outcome of a prediction: the winning sport and its share of the selected
/// cohort, as a whole percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub sport: String,
    pub probability: u8,
}

impl Prediction {
    /// The "no match anywhere" sentinel. A valid domain outcome, not an error.
    pub fn not_enough_data() -> Self {
        Self {
            sport: NOT_ENOUGH_DATA.to_string(),
            probability: 0,
        }
    }
}
