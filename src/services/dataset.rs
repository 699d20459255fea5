use crate::models::SurveyRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the survey dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse a headered survey CSV into records
///
/// The header row names the five columns (`sport, age, gender, state,
/// education`); the capitalized headers used by older survey exports are
/// accepted as aliases. Rows are deserialized strictly - a malformed row
/// fails the whole load rather than being silently dropped.
pub fn load_survey_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SurveyRecord>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Immutable, in-memory survey table
///
/// Write-once at construction, read-many thereafter; `filter` hands out
/// borrowed cohorts and never touches the underlying rows. A store whose
/// backing file failed to load is *unavailable*: it answers every query with
/// an empty result and reports the condition through `is_available`, which
/// callers check before filtering.
#[derive(Debug)]
pub struct DatasetStore {
    records: Option<Vec<SurveyRecord>>,
}

impl DatasetStore {
    pub fn new(records: Vec<SurveyRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    /// A store whose backing data never loaded
    pub fn unavailable() -> Self {
        Self { records: None }
    }

    /// Load the survey CSV, degrading to an unavailable store on failure
    ///
    /// The load error is logged once here; every later request sees the
    /// unavailable state instead, until the process is restarted with a
    /// readable file.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match load_survey_csv(&path) {
            Ok(records) => {
                tracing::info!(
                    "loaded {} survey records from {}",
                    records.len(),
                    path.as_ref().display()
                );
                Self::new(records)
            }
            Err(e) => {
                tracing::error!(
                    "failed to load survey dataset from {}: {}",
                    path.as_ref().display(),
                    e
                );
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.records.is_some()
    }

    /// Number of records; 0 when unavailable
    pub fn size(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    /// Borrowed cohort of records satisfying the predicate
    ///
    /// Empty when the store is unavailable; callers distinguish that case
    /// via `is_available`.
    pub fn filter<P>(&self, predicate: P) -> Vec<&SurveyRecord>
    where
        P: Fn(&SurveyRecord) -> bool,
    {
        self.records
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|r| predicate(r))
            .collect()
    }
}
