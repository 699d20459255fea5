use crate::core::bracket::AgeBracket;
use crate::core::cascade::CascadeStage;
use crate::models::{PredictRequest, Prediction, Query, SurveyRecord};
use crate::services::DatasetStore;
use std::sync::Arc;
use thiserror::Error;

/// Errors a prediction can fail with
///
/// "No cohort matched anywhere" is deliberately not in here: an empty dataset
/// produces the sentinel result, because no-match is a valid domain outcome
/// rather than a system failure.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("survey dataset is not loaded")]
    DataUnavailable,
}

/// Cohort predictor - selects a demographic cohort via the filter cascade
/// and predicts the most common answer within it
///
/// # Pipeline
/// 1. Map the query age to an age bracket
/// 2. Walk the cascade once, keeping the first cohort of adequate size
/// 3. If none qualified, walk it again and keep the first non-empty cohort
/// 4. Aggregate answer frequencies within the chosen cohort
#[derive(Debug, Clone)]
pub struct Predictor {
    store: Arc<DatasetStore>,
    adequacy_threshold: usize,
}

impl Predictor {
    /// Minimum cohort size below which a stage is abandoned for the next one
    pub const DEFAULT_ADEQUACY_THRESHOLD: usize = 10;

    pub fn new(store: Arc<DatasetStore>, adequacy_threshold: usize) -> Self {
        Self {
            store,
            adequacy_threshold,
        }
    }

    pub fn with_default_threshold(store: Arc<DatasetStore>) -> Self {
        Self::new(store, Self::DEFAULT_ADEQUACY_THRESHOLD)
    }

    /// Build a validated `Query` from the raw request DTO
    ///
    /// Clients send `age` as either a JSON number or a numeric string; both
    /// are accepted. Anything else, or a blank demographic field, is an
    /// `InvalidQuery` naming the offending field.
    pub fn parse_query(request: &PredictRequest) -> Result<Query, PredictError> {
        let age = match &request.age {
            serde_json::Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| PredictError::InvalidQuery("age must be an integer".to_string()))?,
            serde_json::Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
                PredictError::InvalidQuery(format!("age '{}' is not an integer", s))
            })?,
            _ => {
                return Err(PredictError::InvalidQuery(
                    "age must be an integer or a numeric string".to_string(),
                ))
            }
        };

        for (field, value) in [
            ("gender", &request.gender),
            ("state", &request.state),
            ("education", &request.education),
        ] {
            if value.trim().is_empty() {
                return Err(PredictError::InvalidQuery(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        Ok(Query {
            age,
            gender: request.gender.clone(),
            state: request.state.clone(),
            education: request.education.clone(),
        })
    }

    /// Predict the national sport for the query's demographic profile
    ///
    /// Never mutates the store; safe to call from concurrent handlers.
    pub fn predict(&self, query: &Query) -> Result<Prediction, PredictError> {
        if !self.store.is_available() {
            return Err(PredictError::DataUnavailable);
        }

        let bracket = AgeBracket::from_age(query.age);

        let Some((stage, cohort)) = self.select_cohort(query, bracket) else {
            tracing::debug!("no non-empty cohort found, dataset is empty");
            return Ok(Prediction::not_enough_data());
        };

        tracing::debug!(
            stage = %stage,
            cohort_size = cohort.len(),
            "cohort selected"
        );

        Ok(aggregate(&cohort))
    }

    /// Two-pass cascade walk
    ///
    /// Pass 1 keeps the first cohort of at least `adequacy_threshold`
    /// records; pass 2 only runs if pass 1 found nothing and keeps the first
    /// non-empty cohort. Returns `None` only when the dataset itself is
    /// empty (the final stage matches every record).
    fn select_cohort(
        &self,
        query: &Query,
        bracket: Option<AgeBracket>,
    ) -> Option<(CascadeStage, Vec<&SurveyRecord>)> {
        for stage in CascadeStage::ALL {
            let cohort = self.store.filter(|r| stage.matches(r, query, bracket));
            if cohort.len() >= self.adequacy_threshold {
                return Some((stage, cohort));
            }
        }

        for stage in CascadeStage::ALL {
            let cohort = self.store.filter(|r| stage.matches(r, query, bracket));
            if !cohort.is_empty() {
                return Some((stage, cohort));
            }
        }

        None
    }
}

/// Pick the most frequent answer in the cohort and its rounded share
///
/// Counts are kept in first-encounter order, so a tie goes to the sport seen
/// first in the cohort - deterministic for a fixed dataset file. The share is
/// rounded half to even (12.5 -> 12, 13.5 -> 14).
fn aggregate(cohort: &[&SurveyRecord]) -> Prediction {
    debug_assert!(!cohort.is_empty());

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in cohort {
        match counts.iter_mut().find(|(sport, _)| *sport == record.sport) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.sport.as_str(), 1)),
        }
    }

    let mut top = counts[0];
    for &(sport, n) in &counts[1..] {
        if n > top.1 {
            top = (sport, n);
        }
    }

    let share = top.1 as f64 / cohort.len() as f64 * 100.0;

    Prediction {
        sport: top.0.to_string(),
        probability: share.round_ties_even() as u8,
    }
}
