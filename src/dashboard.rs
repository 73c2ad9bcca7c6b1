//! One dashboard interaction: selection in, every chart and the summary card out.

use serde::Serialize;

use crate::analysis::{
    apply_selection, country_ranking, salary_trend, top_job_titles, FilterSelection, TrendPoint,
};
use crate::render::{
    country_chart, highest_paid_card, job_title_chart, trend_chart, BarChart, Chart,
    HighestPaidCard, LineChart,
};
use crate::table::{GroupMedian, SalaryTable};

/// A chart description plus, optionally, its SVG rendering.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedChart<C> {
    #[serde(flatten)]
    pub chart: C,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

impl<C: Chart> RenderedChart<C> {
    fn new(chart: C, with_svg: bool) -> Self {
        let svg = with_svg.then(|| chart.to_svg());
        Self {
            empty: chart.is_empty(),
            chart,
            svg,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardAggregates {
    pub trend: Vec<TrendPoint>,
    pub top_jobs: Vec<GroupMedian<String>>,
    pub countries: Vec<GroupMedian<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub total_rows: usize,
    pub filtered_rows: usize,
    pub aggregates: DashboardAggregates,
    pub trend_chart: RenderedChart<LineChart>,
    pub job_title_chart: RenderedChart<BarChart>,
    pub country_chart: RenderedChart<BarChart>,
    pub highest_paid: Option<HighestPaidCard>,
}

/// Filter, aggregate and render. The trend uses only the level filter; the other
/// two projections use the full selection.
pub fn build_dashboard(table: &SalaryTable, selection: &FilterSelection, with_svg: bool) -> DashboardView {
    let filtered = apply_selection(table, selection);

    let trend = salary_trend(table, &selection.levels);
    let top_jobs = top_job_titles(&filtered);
    let countries = country_ranking(&filtered);

    tracing::debug!(
        year = selection.year,
        countries = selection.countries.len(),
        levels = selection.levels.len(),
        filtered_rows = filtered.len(),
        "dashboard computed"
    );

    DashboardView {
        selection: selection.clone(),
        total_rows: table.len(),
        filtered_rows: filtered.len(),
        trend_chart: RenderedChart::new(trend_chart(&trend), with_svg),
        job_title_chart: RenderedChart::new(job_title_chart(&top_jobs), with_svg),
        country_chart: RenderedChart::new(country_chart(&countries), with_svg),
        highest_paid: highest_paid_card(&top_jobs),
        aggregates: DashboardAggregates {
            trend,
            top_jobs,
            countries,
        },
    }
}
