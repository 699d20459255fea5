use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bracket used to group survey respondents
///
/// Each bracket is a half-open-on-left/closed-on-right interval; together
/// they tile (17,120] without gaps or overlap. Ages outside that range have
/// no bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55-64")]
    From55To64,
    #[serde(rename = "65+")]
    From65,
}

/// Bracket bounds: (exclusive min, inclusive max)
const BRACKET_BOUNDS: [(AgeBracket, i64, i64); 6] = [
    (AgeBracket::From18To24, 17, 24),
    (AgeBracket::From25To34, 24, 34),
    (AgeBracket::From35To44, 34, 44),
    (AgeBracket::From45To54, 44, 54),
    (AgeBracket::From55To64, 54, 64),
    (AgeBracket::From65, 64, 120),
];

impl AgeBracket {
    /// Map an age in years to its bracket, or `None` outside (17,120]
    pub fn from_age(age: i64) -> Option<AgeBracket> {
        BRACKET_BOUNDS
            .iter()
            .find(|(_, min, max)| *min < age && age <= *max)
            .map(|(bracket, _, _)| *bracket)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::From18To24 => "18-24",
            AgeBracket::From25To34 => "25-34",
            AgeBracket::From35To44 => "35-44",
            AgeBracket::From45To54 => "45-54",
            AgeBracket::From55To64 => "55-64",
            AgeBracket::From65 => "65+",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(AgeBracket::from_age(18), Some(AgeBracket::From18To24));
        assert_eq!(AgeBracket::from_age(24), Some(AgeBracket::From18To24));
        assert_eq!(AgeBracket::from_age(25), Some(AgeBracket::From25To34));
        assert_eq!(AgeBracket::from_age(34), Some(AgeBracket::From25To34));
        assert_eq!(AgeBracket::from_age(35), Some(AgeBracket::From35To44));
        assert_eq!(AgeBracket::from_age(65), Some(AgeBracket::From65));
        assert_eq!(AgeBracket::from_age(120), Some(AgeBracket::From65));
    }

    #[test]
    fn test_every_age_in_range_has_exactly_one_bracket() {
        for age in 18..=120 {
            let matches = BRACKET_BOUNDS
                .iter()
                .filter(|(_, min, max)| *min < age && age <= *max)
                .count();
            assert_eq!(matches, 1, "age {} should match exactly one bracket", age);
        }
    }

    #[test]
    fn test_ages_outside_range_have_no_bracket() {
        assert_eq!(AgeBracket::from_age(17), None);
        assert_eq!(AgeBracket::from_age(0), None);
        assert_eq!(AgeBracket::from_age(-3), None);
        assert_eq!(AgeBracket::from_age(121), None);
        assert_eq!(AgeBracket::from_age(200), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(AgeBracket::From18To24.label(), "18-24");
        assert_eq!(AgeBracket::From65.to_string(), "65+");
    }
}
