//! Immutable in-memory salary table and the row views derived from it.
//!
//! `SalaryTable` is a cheap-to-clone handle over an `Arc`'d record slice. Every
//! operation (filter, group-by median, rank, head) returns new values and never
//! touches the underlying records.

pub mod stats;

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;
use std::sync::Arc;

use serde::Serialize;

use crate::data::record::{ExperienceLevel, SalaryRecord};

pub use stats::median;

#[derive(Debug, Clone)]
pub struct SalaryTable {
    records: Arc<[SalaryRecord]>,
    unresolved_codes: Arc<[String]>,
}

impl SalaryTable {
    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        Self {
            records: records.into(),
            unresolved_codes: Arc::from(Vec::new()),
        }
    }

    pub(crate) fn with_unresolved_codes(mut self, codes: BTreeSet<String>) -> Self {
        self.unresolved_codes = codes.into_iter().collect::<Vec<_>>().into();
        self
    }

    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Residence codes that missed the country registry during enrichment, sorted.
    pub fn unresolved_codes(&self) -> &[String] {
        &self.unresolved_codes
    }

    /// View over every row.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            rows: self.records.iter().collect(),
        }
    }

    pub fn filter<F>(&self, predicate: F) -> TableView<'_>
    where
        F: Fn(&SalaryRecord) -> bool,
    {
        self.view().filter(predicate)
    }

    pub fn distinct_years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.records.iter().map(|r| r.work_year).collect();
        years.into_iter().collect()
    }

    pub fn distinct_countries(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self.records.iter().map(|r| r.country_name.as_str()).collect();
        names.into_iter().map(str::to_string).collect()
    }

    pub fn distinct_levels(&self) -> Vec<ExperienceLevel> {
        let levels: BTreeSet<ExperienceLevel> =
            self.records.iter().map(|r| r.experience_level).collect();
        levels.into_iter().collect()
    }
}

/// Borrowed subset of a table's rows, in table order.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    rows: Vec<&'a SalaryRecord>,
}

impl<'a> TableView<'a> {
    pub fn filter<F>(self, predicate: F) -> TableView<'a>
    where
        F: Fn(&SalaryRecord) -> bool,
    {
        TableView {
            rows: self.rows.into_iter().filter(|row| predicate(row)).collect(),
        }
    }

    pub fn rows(&self) -> &[&'a SalaryRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Group rows by `key` and take the median `salary_in_usd` of each group.
    /// Groups come back in first-encounter order.
    pub fn group_median<K, F>(&self, key: F) -> Vec<GroupMedian<K>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&SalaryRecord) -> K,
    {
        let mut order: Vec<K> = Vec::new();
        let mut salaries: HashMap<K, Vec<f64>> = HashMap::new();
        for row in &self.rows {
            let k = key(row);
            salaries
                .entry(k.clone())
                .or_insert_with(|| {
                    order.push(k);
                    Vec::new()
                })
                .push(row.salary_in_usd);
        }

        order
            .into_iter()
            .filter_map(|k| {
                let values = salaries.remove(&k)?;
                let median = median(&values)?;
                Some(GroupMedian {
                    key: k,
                    median,
                    count: values.len(),
                })
            })
            .collect()
    }
}

/// One aggregated group: its key, median salary and number of observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMedian<K> {
    pub key: K,
    pub median: f64,
    pub count: usize,
}

/// Sort by median descending. Stable: equal medians keep their incoming order.
pub fn rank_descending<K>(mut groups: Vec<GroupMedian<K>>) -> Vec<GroupMedian<K>> {
    groups.sort_by(|left, right| right.median.total_cmp(&left.median));
    groups
}

/// First `n` groups; shorter inputs are returned whole.
pub fn head<K>(mut groups: Vec<GroupMedian<K>>, n: usize) -> Vec<GroupMedian<K>> {
    groups.truncate(n);
    groups
}
