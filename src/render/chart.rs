//! Chart descriptions built from aggregates. A chart is plain data; SVG output
//! lives in `render::svg`.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::analysis::aggregate::TrendPoint;
use crate::data::record::ExperienceLevel;
use crate::render::svg;
use crate::table::GroupMedian;

pub const TOP_BAR_COLOR: &str = "#2E86C1";
pub const OTHER_BAR_COLOR: &str = "#AED6F1";
pub const DEFAULT_BAR_COLOR: &str = "#636EFA";
pub const TREND_LINE_WIDTH: u32 = 3;

pub trait Chart {
    fn to_svg(&self) -> String;
    fn is_empty(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: i32,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub level: ExperienceLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub line_width: u32,
    pub markers: bool,
    pub series: Vec<LineSeries>,
}

impl LineChart {
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.x));
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }

    /// Years that carry at least one point, ascending.
    pub fn years(&self) -> BTreeSet<i32> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.x))
            .collect()
    }

    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.y))
            .fold(0.0, f64::max)
    }
}

impl Chart for LineChart {
    fn to_svg(&self) -> String {
        svg::line_chart(self)
    }

    fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub orientation: Orientation,
    pub show_legend: bool,
    /// Ranking order: for horizontal charts the first bar is drawn on top,
    /// for vertical charts it is drawn leftmost.
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

impl Chart for BarChart {
    fn to_svg(&self) -> String {
        svg::bar_chart(self)
    }

    fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Salary trend: one line per experience level, points by ascending year.
pub fn trend_chart(points: &[TrendPoint]) -> LineChart {
    let series = ExperienceLevel::ALL
        .into_iter()
        .filter_map(|level| {
            let mut line: Vec<LinePoint> = points
                .iter()
                .filter(|p| p.experience_level == level)
                .map(|p| LinePoint {
                    x: p.work_year,
                    y: p.median_salary,
                })
                .collect();
            if line.is_empty() {
                return None;
            }
            line.sort_by_key(|p| p.x);
            Some(LineSeries {
                level,
                label: level.label(),
                color: level.color(),
                points: line,
            })
        })
        .collect();

    LineChart {
        title: "Salary Trend by Experience Level".to_string(),
        x_label: "work_year".to_string(),
        y_label: "salary_in_usd".to_string(),
        legend_title: "Experience".to_string(),
        line_width: TREND_LINE_WIDTH,
        markers: true,
        series,
    }
}

/// Top job titles as horizontal bars; the top-ranked title is highlighted.
pub fn job_title_chart(jobs: &[GroupMedian<String>]) -> BarChart {
    let bars = jobs
        .iter()
        .enumerate()
        .map(|(rank, job)| Bar {
            label: job.key.clone(),
            value: job.median,
            color: if rank == 0 { TOP_BAR_COLOR } else { OTHER_BAR_COLOR },
        })
        .collect();

    BarChart {
        title: "Top 10 Highest Paying Job Titles".to_string(),
        category_label: "job_title".to_string(),
        value_label: "salary_in_usd".to_string(),
        orientation: Orientation::Horizontal,
        show_legend: false,
        bars,
    }
}

/// Country ranking as vertical bars in ranking order.
pub fn country_chart(countries: &[GroupMedian<String>]) -> BarChart {
    BarChart {
        title: "Country-wise Median Salary".to_string(),
        category_label: "country_name".to_string(),
        value_label: "salary_in_usd".to_string(),
        orientation: Orientation::Vertical,
        show_legend: false,
        bars: countries
            .iter()
            .map(|country| Bar {
                label: country.key.clone(),
                value: country.median,
                color: DEFAULT_BAR_COLOR,
            })
            .collect(),
    }
}
