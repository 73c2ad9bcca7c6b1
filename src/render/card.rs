use serde::Serialize;

use crate::render::format::format_usd;
use crate::table::GroupMedian;

/// "Highest Paid Job" summary: the first row of the top-job aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighestPaidCard {
    pub job_title: String,
    pub median_salary: f64,
    pub formatted_salary: String,
    pub caption: &'static str,
}

pub fn highest_paid_card(top_jobs: &[GroupMedian<String>]) -> Option<HighestPaidCard> {
    let top = top_jobs.first()?;
    Some(HighestPaidCard {
        job_title: top.key.clone(),
        median_salary: top.median,
        formatted_salary: format_usd(top.median),
        caption: "Median Salary (USD)",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_reflects_first_ranked_job() {
        let jobs = vec![
            GroupMedian {
                key: "Data Scientist".to_string(),
                median: 160_000.0,
                count: 2,
            },
            GroupMedian {
                key: "Analyst".to_string(),
                median: 50_000.0,
                count: 1,
            },
        ];
        let card = highest_paid_card(&jobs).expect("card for non-empty ranking");
        assert_eq!(card.job_title, "Data Scientist");
        assert_eq!(card.formatted_salary, "$160,000");
    }

    #[test]
    fn no_card_without_jobs() {
        assert!(highest_paid_card(&[]).is_none());
    }
}
