use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::record::ExperienceLevel;
use crate::table::SalaryTable;

/// Filter request as sent by the page or the CLI. Absent fields take the defaults;
/// an explicitly empty list means "nothing selected".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardRequest {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub countries: Option<Vec<String>>,
    #[serde(default)]
    pub levels: Option<Vec<ExperienceLevel>>,
}

/// Resolved filter state for one interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub year: i32,
    pub countries: BTreeSet<String>,
    pub levels: BTreeSet<ExperienceLevel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelOption {
    pub code: ExperienceLevel,
    pub label: &'static str,
}

/// Selector contents derived from the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub countries: Vec<String>,
    pub experience_levels: Vec<LevelOption>,
}

impl FilterOptions {
    pub fn from_table(table: &SalaryTable) -> Self {
        Self {
            years: table.distinct_years(),
            countries: table.distinct_countries(),
            experience_levels: table
                .distinct_levels()
                .into_iter()
                .map(|code| LevelOption {
                    code,
                    label: code.label(),
                })
                .collect(),
        }
    }

    /// First year, every country, every level.
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection {
            year: self.years.first().copied().unwrap_or_default(),
            countries: self.countries.iter().cloned().collect(),
            levels: self.experience_levels.iter().map(|l| l.code).collect(),
        }
    }

    pub fn resolve(&self, request: &DashboardRequest) -> FilterSelection {
        let defaults = self.default_selection();
        FilterSelection {
            year: request.year.unwrap_or(defaults.year),
            countries: request
                .countries
                .as_ref()
                .map(|c| c.iter().map(|name| name.trim().to_string()).collect())
                .unwrap_or(defaults.countries),
            levels: request
                .levels
                .as_ref()
                .map(|l| l.iter().copied().collect())
                .unwrap_or(defaults.levels),
        }
    }
}
