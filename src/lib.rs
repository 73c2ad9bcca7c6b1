//! AI/ML salary insights: a read-only salary dataset, filtered per interaction and
//! rendered as a trend line, a top job titles ranking and a country ranking.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod render;
pub mod server;
pub mod table;

pub use config::DashboardConfig;
pub use dashboard::{build_dashboard, DashboardView};
pub use data::{DatasetCache, SalaryRecord};
pub use error::{DataLoadError, RequestError};
pub use table::SalaryTable;
