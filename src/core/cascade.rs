use crate::core::bracket::AgeBracket;
use crate::models::{Query, SurveyRecord};
use std::fmt;

/// One step of the cohort-selection cascade, from most to least specific
///
/// The cascade is walked in declaration order. Earlier stages are strictly
/// preferred: once a stage yields an adequate cohort, later stages are never
/// evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStage {
    /// gender + state + age bracket + education
    Exact,
    /// gender + state + age bracket
    GenderStateBracket,
    /// gender + state
    GenderState,
    /// state only
    State,
    /// gender + age bracket
    GenderBracket,
    /// entire dataset
    Nationwide,
}

impl CascadeStage {
    /// All stages in cascade order
    pub const ALL: [CascadeStage; 6] = [
        CascadeStage::Exact,
        CascadeStage::GenderStateBracket,
        CascadeStage::GenderState,
        CascadeStage::State,
        CascadeStage::GenderBracket,
        CascadeStage::Nationwide,
    ];

    /// Check whether a record belongs to this stage's cohort for the query
    pub fn matches(
        &self,
        record: &SurveyRecord,
        query: &Query,
        bracket: Option<AgeBracket>,
    ) -> bool {
        match self {
            CascadeStage::Exact => {
                same_gender(record, query)
                    && same_state(record, query)
                    && same_bracket(record, bracket)
                    && same_education(record, query)
            }
            CascadeStage::GenderStateBracket => {
                same_gender(record, query)
                    && same_state(record, query)
                    && same_bracket(record, bracket)
            }
            CascadeStage::GenderState => same_gender(record, query) && same_state(record, query),
            CascadeStage::State => same_state(record, query),
            CascadeStage::GenderBracket => {
                same_gender(record, query) && same_bracket(record, bracket)
            }
            CascadeStage::Nationwide => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CascadeStage::Exact => "gender+state+age+education",
            CascadeStage::GenderStateBracket => "gender+state+age",
            CascadeStage::GenderState => "gender+state",
            CascadeStage::State => "state",
            CascadeStage::GenderBracket => "gender+age",
            CascadeStage::Nationwide => "nationwide",
        }
    }
}

impl fmt::Display for CascadeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[inline]
fn same_gender(record: &SurveyRecord, query: &Query) -> bool {
    record.gender == query.gender
}

#[inline]
fn same_state(record: &SurveyRecord, query: &Query) -> bool {
    record.state == query.state
}

#[inline]
fn same_education(record: &SurveyRecord, query: &Query) -> bool {
    record.education == query.education
}

/// Bracket equality against the query's (possibly absent) bracket
///
/// A query with no bracket matches no record, and a record whose age falls
/// outside every bracket matches no query. This is what lets out-of-range
/// query ages fall straight through to the looser stages.
#[inline]
fn same_bracket(record: &SurveyRecord, query_bracket: Option<AgeBracket>) -> bool {
    match query_bracket {
        Some(bracket) => AgeBracket::from_age(record.age as i64) == Some(bracket),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gender: &str, state: &str, age: u32, education: &str) -> SurveyRecord {
        SurveyRecord {
            sport: "Cricket".to_string(),
            age,
            gender: gender.to_string(),
            state: state.to_string(),
            education: education.to_string(),
        }
    }

    fn query(gender: &str, state: &str, age: i64, education: &str) -> Query {
        Query {
            age,
            gender: gender.to_string(),
            state: state.to_string(),
            education: education.to_string(),
        }
    }

    #[test]
    fn test_exact_stage_requires_all_four() {
        let q = query("Female", "VIC", 30, "Bachelor");
        let bracket = AgeBracket::from_age(q.age);

        assert!(CascadeStage::Exact.matches(&record("Female", "VIC", 28, "Bachelor"), &q, bracket));
        assert!(!CascadeStage::Exact.matches(&record("Male", "VIC", 28, "Bachelor"), &q, bracket));
        assert!(!CascadeStage::Exact.matches(&record("Female", "NSW", 28, "Bachelor"), &q, bracket));
        assert!(!CascadeStage::Exact.matches(&record("Female", "VIC", 45, "Bachelor"), &q, bracket));
        assert!(!CascadeStage::Exact.matches(&record("Female", "VIC", 28, "PhD"), &q, bracket));
    }

    #[test]
    fn test_stage_specificity_is_nested_for_prefix_stages() {
        // cohort(Exact) ⊆ cohort(GenderStateBracket) ⊆ cohort(GenderState) ⊆ cohort(Nationwide)
        let q = query("Female", "VIC", 30, "Bachelor");
        let bracket = AgeBracket::from_age(q.age);
        let records = [
            record("Female", "VIC", 28, "Bachelor"),
            record("Female", "VIC", 28, "PhD"),
            record("Female", "VIC", 50, "Bachelor"),
            record("Male", "VIC", 28, "Bachelor"),
            record("Female", "NSW", 28, "Bachelor"),
        ];

        let nested = [
            CascadeStage::Exact,
            CascadeStage::GenderStateBracket,
            CascadeStage::GenderState,
            CascadeStage::Nationwide,
        ];
        for r in &records {
            for pair in nested.windows(2) {
                if pair[0].matches(r, &q, bracket) {
                    assert!(
                        pair[1].matches(r, &q, bracket),
                        "{:?} matched {:?} but looser {:?} did not",
                        pair[0],
                        r,
                        pair[1]
                    );
                }
            }
        }
    }

    #[test]
    fn test_null_query_bracket_matches_no_record() {
        // age 15 has no bracket, so every bracket-requiring stage is empty
        let q = query("Female", "VIC", 15, "Bachelor");
        let bracket = AgeBracket::from_age(q.age);
        assert!(bracket.is_none());

        let r = record("Female", "VIC", 15, "Bachelor");
        assert!(!CascadeStage::Exact.matches(&r, &q, bracket));
        assert!(!CascadeStage::GenderStateBracket.matches(&r, &q, bracket));
        assert!(!CascadeStage::GenderBracket.matches(&r, &q, bracket));
        // bracket-free stages still match
        assert!(CascadeStage::GenderState.matches(&r, &q, bracket));
        assert!(CascadeStage::State.matches(&r, &q, bracket));
        assert!(CascadeStage::Nationwide.matches(&r, &q, bracket));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let q = query("female", "vic", 30, "bachelor");
        let bracket = AgeBracket::from_age(q.age);
        let r = record("Female", "VIC", 30, "Bachelor");
        assert!(!CascadeStage::GenderState.matches(&r, &q, bracket));
        assert!(!CascadeStage::State.matches(&r, &q, bracket));
    }
}
