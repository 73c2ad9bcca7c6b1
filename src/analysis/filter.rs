use std::collections::BTreeSet;

use crate::analysis::selection::FilterSelection;
use crate::data::record::{ExperienceLevel, SalaryRecord};
use crate::table::{SalaryTable, TableView};

/// Conjunction of the three predicates: year equality, country membership,
/// level membership. Empty sets select nothing.
pub fn matches_selection(record: &SalaryRecord, selection: &FilterSelection) -> bool {
    record.work_year == selection.year
        && selection.countries.contains(&record.country_name)
        && selection.levels.contains(&record.experience_level)
}

pub fn apply_selection<'a>(table: &'a SalaryTable, selection: &FilterSelection) -> TableView<'a> {
    table.filter(|record| matches_selection(record, selection))
}

/// Level predicate alone; the trend chart spans every year and country.
pub fn filter_levels<'a>(table: &'a SalaryTable, levels: &BTreeSet<ExperienceLevel>) -> TableView<'a> {
    table.filter(|record| levels.contains(&record.experience_level))
}
