//! Runtime configuration from the environment, with per-invocation CLI overrides.

use std::env;
use std::path::PathBuf;

use crate::data::loader::DEFAULT_DATASET_PATH;

pub const BIND_ENV: &str = "SALARY_INSIGHTS_BIND";
pub const DATA_ENV: &str = "SALARY_INSIGHTS_DATA";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";
pub const DEFAULT_LOG_FILTER: &str = "salary_insights=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub bind_addr: String,
    pub data_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            bind_addr: read(BIND_ENV).unwrap_or(defaults.bind_addr),
            data_path: read(DATA_ENV).map(PathBuf::from).unwrap_or(defaults.data_path),
        }
    }

    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_path = path;
        }
        self
    }

    pub fn with_bind_addr(mut self, addr: Option<String>) -> Self {
        if let Some(addr) = addr {
            self.bind_addr = addr;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_apply_without_variables() {
        let config = DashboardConfig::from_lookup(|_| None);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.bind_addr, "127.0.0.1:8050");
        assert_eq!(config.data_path, PathBuf::from("salaries.csv"));
    }

    #[test]
    fn variables_override_defaults() {
        let vars = HashMap::from([
            (BIND_ENV, "0.0.0.0:9000".to_string()),
            (DATA_ENV, "/data/ai_salaries.csv".to_string()),
        ]);
        let config = DashboardConfig::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.data_path, PathBuf::from("/data/ai_salaries.csv"));
    }

    #[test]
    fn blank_variables_are_ignored() {
        let config = DashboardConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn cli_overrides_win() {
        let config = DashboardConfig::default()
            .with_data_path(Some(PathBuf::from("other.csv")))
            .with_bind_addr(None);
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }
}
