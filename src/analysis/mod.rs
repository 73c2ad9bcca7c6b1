pub mod aggregate;
pub mod filter;
pub mod selection;

pub use aggregate::{
    country_ranking, salary_trend, top_job_titles, TrendPoint, TOP_COUNTRIES, TOP_JOB_TITLES,
};
pub use filter::{apply_selection, filter_levels, matches_selection};
pub use selection::{DashboardRequest, FilterOptions, FilterSelection, LevelOption};
