use serde::Serialize;
use thiserror::Error;

use crate::analysis::{DashboardRequest, FilterOptions, FilterSelection};
use crate::dashboard::build_dashboard;
use crate::data::DatasetCache;
use crate::error::RequestError;
use crate::table::SalaryTable;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The dataset did not load; carries the load error message.
    #[error("{0}")]
    Unavailable(String),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn loaded_table(cache: &DatasetCache) -> Result<&SalaryTable, ApiError> {
    cache
        .table()
        .map_err(|err| ApiError::Unavailable(format!("Dataset unavailable: {err}")))
}

/// Value of `name` in the query string of `path`, if present.
fn query_param<'a>(path: &'a str, name: &str) -> Option<&'a str> {
    let query = path.split('?').nth(1)?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key.trim() == name).then(|| value.trim())
    })
}

fn query_flag(path: &str, name: &str, default: bool) -> bool {
    match query_param(path, name) {
        Some(value) => !(value == "0" || value.eq_ignore_ascii_case("false")),
        None => default,
    }
}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "salary-insights-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Clone, Serialize)]
pub struct FiltersResponse {
    pub options: FilterOptions,
    pub defaults: FilterSelection,
}

pub fn filters_payload(cache: &DatasetCache) -> Result<String, ApiError> {
    let options = FilterOptions::from_table(loaded_table(cache)?);
    let defaults = options.default_selection();
    Ok(serde_json::to_string_pretty(&FiltersResponse { options, defaults })?)
}

/// `GET /api/dashboard[?year=Y][&svg=0]`: the defaults, optionally for one year.
pub fn dashboard_get_payload(cache: &DatasetCache, path: &str) -> Result<String, ApiError> {
    let table = loaded_table(cache)?;
    let year = match query_param(path, "year") {
        Some(raw) => Some(raw.parse::<i32>().map_err(|_| RequestError::Query {
            name: "year",
            value: raw.to_string(),
        })?),
        None => None,
    };
    let request = DashboardRequest {
        year,
        ..DashboardRequest::default()
    };
    let selection = FilterOptions::from_table(table).resolve(&request);
    let view = build_dashboard(table, &selection, query_flag(path, "svg", true));
    Ok(serde_json::to_string_pretty(&view)?)
}

/// `POST /api/dashboard` with a [`DashboardRequest`] body.
pub fn dashboard_post_payload(cache: &DatasetCache, path: &str, body: &str) -> Result<String, ApiError> {
    let table = loaded_table(cache)?;
    let request: DashboardRequest = if body.trim().is_empty() {
        DashboardRequest::default()
    } else {
        serde_json::from_str(body).map_err(RequestError::from)?
    };
    let selection = FilterOptions::from_table(table).resolve(&request);
    let view = build_dashboard(table, &selection, query_flag(path, "svg", true));
    Ok(serde_json::to_string_pretty(&view)?)
}

#[derive(Debug, Clone, Serialize)]
pub struct DataVersionResponse {
    pub path: String,
    pub rows: usize,
    pub years: Vec<i32>,
    pub countries: usize,
    pub unresolved_country_codes: Vec<String>,
    pub loaded_at: String,
}

pub fn data_version_payload(cache: &DatasetCache) -> Result<String, ApiError> {
    let loaded = cache
        .get()
        .map_err(|err| ApiError::Unavailable(format!("Dataset unavailable: {err}")))?;
    let response = DataVersionResponse {
        path: cache.path().display().to_string(),
        rows: loaded.table.len(),
        years: loaded.table.distinct_years(),
        countries: loaded.table.distinct_countries().len(),
        unresolved_country_codes: loaded.table.unresolved_codes().to_vec(),
        loaded_at: loaded.loaded_at.to_rfc3339(),
    };
    Ok(serde_json::to_string_pretty(&response)?)
}
