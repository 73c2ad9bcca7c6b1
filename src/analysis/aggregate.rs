//! The three dashboard projections: salary trend, top job titles, country ranking.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::analysis::filter::filter_levels;
use crate::data::record::ExperienceLevel;
use crate::table::{head, rank_descending, GroupMedian, SalaryTable, TableView};

pub const TOP_JOB_TITLES: usize = 10;
pub const TOP_COUNTRIES: usize = 20;

/// Median salary for one (year, level) cell of the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub work_year: i32,
    pub experience_level: ExperienceLevel,
    pub median_salary: f64,
    pub count: usize,
}

/// Median salary per (work_year, experience_level) over every year and country,
/// restricted only by `levels`. Ordered by year, then level.
pub fn salary_trend(table: &SalaryTable, levels: &BTreeSet<ExperienceLevel>) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = filter_levels(table, levels)
        .group_median(|r| (r.work_year, r.experience_level))
        .into_iter()
        .map(|group| TrendPoint {
            work_year: group.key.0,
            experience_level: group.key.1,
            median_salary: group.median,
            count: group.count,
        })
        .collect();
    points.sort_by_key(|p| (p.work_year, p.experience_level));
    points
}

/// Highest median salaries by job title, at most ten.
pub fn top_job_titles(view: &TableView<'_>) -> Vec<GroupMedian<String>> {
    head(
        rank_descending(view.group_median(|r| r.job_title.clone())),
        TOP_JOB_TITLES,
    )
}

/// Highest median salaries by country name, at most twenty.
pub fn country_ranking(view: &TableView<'_>) -> Vec<GroupMedian<String>> {
    head(
        rank_descending(view.group_median(|r| r.country_name.clone())),
        TOP_COUNTRIES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filter::apply_selection;
    use crate::analysis::selection::FilterSelection;
    use crate::data::record::SalaryRecord;

    fn record(year: i32, level: ExperienceLevel, country: &str, title: &str, salary: f64) -> SalaryRecord {
        SalaryRecord {
            work_year: year,
            experience_level: level,
            employee_residence: country.to_string(),
            job_title: title.to_string(),
            salary_in_usd: salary,
            country_name: country.to_string(),
        }
    }

    #[test]
    fn scenario_ranks_job_titles_by_median() {
        let table = SalaryTable::from_records(vec![
            record(2023, ExperienceLevel::Senior, "US", "Data Scientist", 150_000.0),
            record(2023, ExperienceLevel::Senior, "US", "Data Scientist", 170_000.0),
            record(2023, ExperienceLevel::Entry, "DE", "Analyst", 50_000.0),
        ]);
        let selection = FilterSelection {
            year: 2023,
            countries: BTreeSet::from(["US".to_string(), "DE".to_string()]),
            levels: BTreeSet::from([ExperienceLevel::Senior, ExperienceLevel::Entry]),
        };
        let jobs = top_job_titles(&apply_selection(&table, &selection));
        let pairs: Vec<_> = jobs.iter().map(|g| (g.key.as_str(), g.median)).collect();
        assert_eq!(pairs, vec![("Data Scientist", 160_000.0), ("Analyst", 50_000.0)]);
    }

    #[test]
    fn top_jobs_truncate_to_ten() {
        let records = (0..15)
            .map(|i| record(2023, ExperienceLevel::Mid, "US", &format!("Role {i}"), 1000.0 * i as f64))
            .collect();
        let table = SalaryTable::from_records(records);
        let jobs = top_job_titles(&table.view());
        assert_eq!(jobs.len(), TOP_JOB_TITLES);
        assert_eq!(jobs[0].key, "Role 14");
        assert_eq!(jobs[9].key, "Role 5");
    }

    #[test]
    fn country_ranking_truncates_to_twenty_without_padding() {
        let many = (0..25)
            .map(|i| record(2023, ExperienceLevel::Mid, &format!("C{i:02}"), "Dev", 10.0 + i as f64))
            .collect();
        let table = SalaryTable::from_records(many);
        let ranked = country_ranking(&table.view());
        assert_eq!(ranked.len(), TOP_COUNTRIES);
        assert_eq!(ranked[0].key, "C24");

        let few = SalaryTable::from_records(vec![
            record(2023, ExperienceLevel::Mid, "US", "Dev", 10.0),
            record(2023, ExperienceLevel::Mid, "DE", "Dev", 20.0),
        ]);
        assert_eq!(country_ranking(&few.view()).len(), 2);
    }

    #[test]
    fn trend_spans_all_years_and_sorts_by_year() {
        let table = SalaryTable::from_records(vec![
            record(2024, ExperienceLevel::Senior, "US", "Dev", 300.0),
            record(2022, ExperienceLevel::Senior, "DE", "Dev", 100.0),
            record(2022, ExperienceLevel::Senior, "US", "Dev", 200.0),
            record(2023, ExperienceLevel::Entry, "US", "Dev", 50.0),
            record(2022, ExperienceLevel::Entry, "US", "Dev", 40.0),
        ]);
        let levels = BTreeSet::from([ExperienceLevel::Senior, ExperienceLevel::Entry]);
        let trend = salary_trend(&table, &levels);
        let cells: Vec<_> = trend
            .iter()
            .map(|p| (p.work_year, p.experience_level, p.median_salary))
            .collect();
        assert_eq!(
            cells,
            vec![
                (2022, ExperienceLevel::Entry, 40.0),
                (2022, ExperienceLevel::Senior, 150.0),
                (2023, ExperienceLevel::Entry, 50.0),
                (2024, ExperienceLevel::Senior, 300.0),
            ]
        );
    }

    #[test]
    fn trend_respects_level_filter_only() {
        let table = SalaryTable::from_records(vec![
            record(2022, ExperienceLevel::Senior, "US", "Dev", 100.0),
            record(2023, ExperienceLevel::Mid, "US", "Dev", 100.0),
        ]);
        let trend = salary_trend(&table, &BTreeSet::from([ExperienceLevel::Mid]));
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].experience_level, ExperienceLevel::Mid);
    }

    #[test]
    fn level_without_rows_gives_empty_aggregates() {
        let table = SalaryTable::from_records(vec![record(2023, ExperienceLevel::Senior, "US", "Dev", 1.0)]);
        let levels = BTreeSet::from([ExperienceLevel::Executive]);
        assert!(salary_trend(&table, &levels).is_empty());
        let selection = FilterSelection {
            year: 2023,
            countries: BTreeSet::from(["US".to_string()]),
            levels,
        };
        let view = apply_selection(&table, &selection);
        assert!(top_job_titles(&view).is_empty());
        assert!(country_ranking(&view).is_empty());
    }
}
