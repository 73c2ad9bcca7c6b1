//! Load the salary CSV and enrich each row with its country name.
//! A load either yields the whole table or fails; there is no partial load.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::data::country::{country_name_or_code, CountryLookup};
use crate::data::record::{ExperienceLevel, SalaryRecord};
use crate::error::DataLoadError;
use crate::table::SalaryTable;

pub const DEFAULT_DATASET_PATH: &str = "salaries.csv";

pub const REQUIRED_COLUMNS: [&str; 5] = [
    "work_year",
    "experience_level",
    "employee_residence",
    "job_title",
    "salary_in_usd",
];

/// Raw CSV row; columns beyond these are ignored.
#[derive(Debug, Deserialize)]
struct SalaryRow {
    work_year: i32,
    experience_level: ExperienceLevel,
    employee_residence: String,
    job_title: String,
    salary_in_usd: f64,
}

pub fn load_salaries(
    path: impl AsRef<Path>,
    lookup: &dyn CountryLookup,
) -> Result<SalaryTable, DataLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_salaries_from_reader(file, path, lookup)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        unresolved_codes = table.unresolved_codes().len(),
        "salary dataset loaded"
    );
    Ok(table)
}

/// Same as [`load_salaries`] over any reader; `origin` only labels errors.
pub fn load_salaries_from_reader<R: Read>(
    reader: R,
    origin: &Path,
    lookup: &dyn CountryLookup,
) -> Result<SalaryTable, DataLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers().map_err(|err| csv_error(origin, err))?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                path: origin.to_path_buf(),
                column,
            });
        }
    }

    let mut names: HashMap<String, String> = HashMap::new();
    let mut unresolved = BTreeSet::new();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let record = result.map_err(|err| csv_error(origin, err))?;
        let row: SalaryRow = record
            .deserialize(Some(&headers))
            .map_err(|err| csv_error(origin, err))?;
        if !row.salary_in_usd.is_finite() {
            return Err(DataLoadError::Parse {
                path: origin.to_path_buf(),
                line: record.position().map_or(0, |position| position.line()),
                message: format!("salary_in_usd must be a finite number, got {}", row.salary_in_usd),
            });
        }
        let country_name = names
            .entry(row.employee_residence.clone())
            .or_insert_with(|| {
                if lookup.name_for_alpha2(&row.employee_residence).is_none() {
                    unresolved.insert(row.employee_residence.clone());
                }
                country_name_or_code(lookup, &row.employee_residence)
            })
            .clone();
        records.push(SalaryRecord {
            work_year: row.work_year,
            experience_level: row.experience_level,
            employee_residence: row.employee_residence,
            job_title: row.job_title,
            salary_in_usd: row.salary_in_usd,
            country_name,
        });
    }

    if records.is_empty() {
        return Err(DataLoadError::Empty {
            path: origin.to_path_buf(),
        });
    }

    Ok(SalaryTable::from_records(records).with_unresolved_codes(unresolved))
}

fn csv_error(origin: &Path, err: csv::Error) -> DataLoadError {
    match err.position() {
        Some(position) => DataLoadError::Parse {
            path: origin.to_path_buf(),
            line: position.line(),
            message: err.to_string(),
        },
        None => DataLoadError::Csv {
            path: origin.to_path_buf(),
            source: err,
        },
    }
}
