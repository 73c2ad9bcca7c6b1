use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Seniority category as stored in the dataset (`EN`, `MI`, `SE`, `EX`).
///
/// Variant order is the ordinal order used for legends and selectors.
/// Deserializes through [`ExperienceLevel::from_code`], so any case is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ExperienceLevel {
    #[serde(rename = "EN")]
    Entry,
    #[serde(rename = "MI")]
    Mid,
    #[serde(rename = "SE")]
    Senior,
    #[serde(rename = "EX")]
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [Self::Entry, Self::Mid, Self::Senior, Self::Executive];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Entry => "EN",
            Self::Mid => "MI",
            Self::Senior => "SE",
            Self::Executive => "EX",
        }
    }

    /// Legend label shown on charts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Entry-level",
            Self::Mid => "Mid-level",
            Self::Senior => "Senior-level",
            Self::Executive => "Executive-level",
        }
    }

    /// Fixed line color for the trend chart.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Entry => "#FF5733",
            Self::Mid => "#2E86C1",
            Self::Senior => "#28B463",
            Self::Executive => "#AF7AC5",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl<'de> Deserialize<'de> for ExperienceLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code)
            .ok_or_else(|| de::Error::unknown_variant(&code, &["EN", "MI", "SE", "EX"]))
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One salary observation with its enriched `country_name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRecord {
    pub work_year: i32,
    pub experience_level: ExperienceLevel,
    pub employee_residence: String,
    pub job_title: String,
    pub salary_in_usd: f64,
    pub country_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(ExperienceLevel::from_code(" se "), Some(ExperienceLevel::Senior));
        assert_eq!(ExperienceLevel::from_code("XX"), None);
    }

    #[test]
    fn levels_serialize_as_codes() {
        let json = serde_json::to_string(&vec![ExperienceLevel::Entry, ExperienceLevel::Executive])
            .expect("levels should serialize");
        assert_eq!(json, r#"["EN","EX"]"#);
        let parsed: ExperienceLevel = serde_json::from_str(r#""MI""#).expect("MI should parse");
        assert_eq!(parsed, ExperienceLevel::Mid);
    }

    #[test]
    fn deserialize_accepts_any_case_like_from_code() {
        let parsed: Vec<ExperienceLevel> =
            serde_json::from_str(r#"["se","En","mi","EX"]"#).expect("mixed case should parse");
        assert_eq!(
            parsed,
            vec![
                ExperienceLevel::Senior,
                ExperienceLevel::Entry,
                ExperienceLevel::Mid,
                ExperienceLevel::Executive
            ]
        );
        let err = serde_json::from_str::<ExperienceLevel>(r#""xx""#).expect_err("xx is unknown");
        assert!(err.to_string().contains("unknown variant"), "{err}");
    }

    #[test]
    fn ordinal_order_runs_entry_to_executive() {
        let mut levels = vec![
            ExperienceLevel::Executive,
            ExperienceLevel::Entry,
            ExperienceLevel::Senior,
            ExperienceLevel::Mid,
        ];
        levels.sort();
        assert_eq!(levels, ExperienceLevel::ALL.to_vec());
    }
}
