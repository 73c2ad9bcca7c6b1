//! Standalone SVG output for line and bar charts.

use std::fmt::Write as _;

use crate::render::chart::{BarChart, LineChart, Orientation};
use crate::render::format::{escape_xml, format_axis_value, format_usd, nice_ceiling};

const WIDTH: f64 = 860.0;
const HEIGHT: f64 = 440.0;
const Y_TICKS: u32 = 5;
const AXIS_COLOR: &str = "#444444";
const GRID_COLOR: &str = "#E5ECF6";
const FONT: &str = "font-family=\"Arial, sans-serif\" font-size=\"12\"";

pub const EMPTY_MESSAGE: &str = "No data for the current filters";

struct Frame {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Frame {
    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

fn open(out: &mut String, title: &str) {
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" width=\"100%\" role=\"img\">"
    );
    let _ = write!(out, "<title>{}</title>", escape_xml(title));
    let _ = write!(out, "<rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"#FFFFFF\"/>");
}

fn placeholder(out: &mut String, frame: &Frame) {
    let _ = write!(
        out,
        "<text class=\"empty\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"#888888\" {FONT}>{EMPTY_MESSAGE}</text>",
        frame.left + frame.width() / 2.0,
        frame.top + frame.height() / 2.0
    );
}

/// Horizontal grid lines and labels for a value axis running bottom to top.
fn value_axis_y(out: &mut String, frame: &Frame, max: f64) {
    for tick in 0..=Y_TICKS {
        let value = max * f64::from(tick) / f64::from(Y_TICKS);
        let y = frame.bottom - frame.height() * f64::from(tick) / f64::from(Y_TICKS);
        let _ = write!(
            out,
            "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{GRID_COLOR}\"/>",
            frame.left, frame.right
        );
        let _ = write!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" {FONT}>{}</text>",
            frame.left - 8.0,
            y + 4.0,
            format_axis_value(value)
        );
    }
}

fn axes(out: &mut String, frame: &Frame) {
    let _ = write!(
        out,
        "<line x1=\"{l:.1}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\" stroke=\"{AXIS_COLOR}\"/>\
         <line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\" stroke=\"{AXIS_COLOR}\"/>",
        l = frame.left,
        r = frame.right,
        t = frame.top,
        b = frame.bottom
    );
}

pub fn line_chart(chart: &LineChart) -> String {
    let frame = Frame {
        left: 80.0,
        right: WIDTH - 170.0,
        top: 30.0,
        bottom: HEIGHT - 50.0,
    };
    let mut out = String::new();
    open(&mut out, &chart.title);
    axes(&mut out, &frame);

    let Some((first_year, last_year)) = chart.year_bounds() else {
        placeholder(&mut out, &frame);
        out.push_str("</svg>");
        return out;
    };

    let max = nice_ceiling(chart.max_value());
    value_axis_y(&mut out, &frame, max);

    // i32 subtraction can overflow for far-apart years.
    let span = f64::from(last_year) - f64::from(first_year);
    let x_of = |year: i32| {
        if span <= 0.0 {
            frame.left + frame.width() / 2.0
        } else {
            frame.left + frame.width() * (f64::from(year) - f64::from(first_year)) / span
        }
    };
    let y_of = |value: f64| frame.bottom - frame.height() * value / max;

    for year in chart.years() {
        let _ = write!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" {FONT}>{year}</text>",
            x_of(year),
            frame.bottom + 20.0
        );
    }
    let _ = write!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" {FONT}>{}</text>",
        frame.left + frame.width() / 2.0,
        HEIGHT - 10.0,
        escape_xml(&chart.x_label)
    );

    for series in &chart.series {
        let path: Vec<String> = series
            .points
            .iter()
            .map(|p| format!("{:.1},{:.1}", x_of(p.x), y_of(p.y)))
            .collect();
        let _ = write!(
            out,
            "<polyline class=\"series\" data-level=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" points=\"{}\"/>",
            series.level.code(),
            series.color,
            chart.line_width,
            path.join(" ")
        );
        if chart.markers {
            for p in &series.points {
                let _ = write!(
                    out,
                    "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"><title>{} {}: {}</title></circle>",
                    x_of(p.x),
                    y_of(p.y),
                    series.color,
                    series.label,
                    p.x,
                    format_usd(p.y)
                );
            }
        }
    }

    let legend_x = frame.right + 20.0;
    let _ = write!(
        out,
        "<text x=\"{legend_x:.1}\" y=\"{:.1}\" font-weight=\"bold\" {FONT}>{}</text>",
        frame.top + 10.0,
        escape_xml(&chart.legend_title)
    );
    for (i, series) in chart.series.iter().enumerate() {
        let y = frame.top + 32.0 + 22.0 * i as f64;
        let _ = write!(
            out,
            "<line x1=\"{legend_x:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-width=\"{}\"/>\
             <text x=\"{:.1}\" y=\"{:.1}\" {FONT}>{}</text>",
            legend_x + 24.0,
            series.color,
            chart.line_width,
            legend_x + 30.0,
            y + 4.0,
            series.label
        );
    }

    out.push_str("</svg>");
    out
}

pub fn bar_chart(chart: &BarChart) -> String {
    match chart.orientation {
        Orientation::Horizontal => horizontal_bars(chart),
        Orientation::Vertical => vertical_bars(chart),
    }
}

fn horizontal_bars(chart: &BarChart) -> String {
    let frame = Frame {
        left: 240.0,
        right: WIDTH - 90.0,
        top: 20.0,
        bottom: HEIGHT - 40.0,
    };
    let mut out = String::new();
    open(&mut out, &chart.title);
    axes(&mut out, &frame);
    if chart.bars.is_empty() {
        placeholder(&mut out, &frame);
        out.push_str("</svg>");
        return out;
    }

    let max = nice_ceiling(chart.max_value());
    for tick in 0..=Y_TICKS {
        let value = max * f64::from(tick) / f64::from(Y_TICKS);
        let x = frame.left + frame.width() * f64::from(tick) / f64::from(Y_TICKS);
        let _ = write!(
            out,
            "<line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" stroke=\"{GRID_COLOR}\"/>\
             <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" {FONT}>{}</text>",
            frame.top,
            frame.bottom,
            frame.bottom + 18.0,
            format_axis_value(value)
        );
    }

    let slot = frame.height() / chart.bars.len() as f64;
    let thickness = slot * 0.7;
    for (i, bar) in chart.bars.iter().enumerate() {
        let y = frame.top + slot * i as f64 + (slot - thickness) / 2.0;
        let length = frame.width() * bar.value / max;
        let _ = write!(
            out,
            "<rect class=\"bar\" x=\"{:.1}\" y=\"{y:.1}\" width=\"{length:.1}\" height=\"{thickness:.1}\" fill=\"{}\"><title>{}: {}</title></rect>",
            frame.left,
            bar.color,
            escape_xml(&bar.label),
            format_usd(bar.value)
        );
        let _ = write!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" {FONT}>{}</text>",
            frame.left - 8.0,
            y + thickness / 2.0 + 4.0,
            escape_xml(&bar.label)
        );
    }

    out.push_str("</svg>");
    out
}

fn vertical_bars(chart: &BarChart) -> String {
    let frame = Frame {
        left: 80.0,
        right: WIDTH - 20.0,
        top: 20.0,
        bottom: HEIGHT - 120.0,
    };
    let mut out = String::new();
    open(&mut out, &chart.title);
    axes(&mut out, &frame);
    if chart.bars.is_empty() {
        placeholder(&mut out, &frame);
        out.push_str("</svg>");
        return out;
    }

    let max = nice_ceiling(chart.max_value());
    value_axis_y(&mut out, &frame, max);

    let slot = frame.width() / chart.bars.len() as f64;
    let thickness = slot * 0.7;
    for (i, bar) in chart.bars.iter().enumerate() {
        let x = frame.left + slot * i as f64 + (slot - thickness) / 2.0;
        let height = frame.height() * bar.value / max;
        let label_x = x + thickness / 2.0;
        let label_y = frame.bottom + 14.0;
        let _ = write!(
            out,
            "<rect class=\"bar\" x=\"{x:.1}\" y=\"{:.1}\" width=\"{thickness:.1}\" height=\"{height:.1}\" fill=\"{}\"><title>{}: {}</title></rect>",
            frame.bottom - height,
            bar.color,
            escape_xml(&bar.label),
            format_usd(bar.value)
        );
        let _ = write!(
            out,
            "<text x=\"{label_x:.1}\" y=\"{label_y:.1}\" text-anchor=\"end\" transform=\"rotate(-35 {label_x:.1} {label_y:.1})\" {FONT}>{}</text>",
            escape_xml(&bar.label)
        );
    }

    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate::TrendPoint;
    use crate::data::record::ExperienceLevel;
    use crate::render::chart::{country_chart, job_title_chart, trend_chart, Chart};
    use crate::table::GroupMedian;

    fn group(key: &str, median: f64) -> GroupMedian<String> {
        GroupMedian {
            key: key.to_string(),
            median,
            count: 1,
        }
    }

    #[test]
    fn empty_charts_render_placeholder_without_marks() {
        for svg in [
            trend_chart(&[]).to_svg(),
            job_title_chart(&[]).to_svg(),
            country_chart(&[]).to_svg(),
        ] {
            assert!(svg.starts_with("<svg"));
            assert!(svg.ends_with("</svg>"));
            assert!(svg.contains(EMPTY_MESSAGE));
            assert!(!svg.contains("class=\"bar\""));
            assert!(!svg.contains("<polyline"));
        }
    }

    #[test]
    fn bars_render_one_rect_each_with_colors() {
        let svg = job_title_chart(&[group("ML Lead", 300_000.0), group("R&D Analyst", 100_000.0)]).to_svg();
        assert_eq!(svg.matches("class=\"bar\"").count(), 2);
        assert!(svg.contains("fill=\"#2E86C1\""));
        assert!(svg.contains("fill=\"#AED6F1\""));
        assert!(svg.contains("R&amp;D Analyst"));
        assert!(svg.contains("$300,000"));
        assert!(!svg.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn vertical_bars_label_categories() {
        let svg = country_chart(&[group("United States", 150_000.0), group("Germany", 90_000.0)]).to_svg();
        assert_eq!(svg.matches("class=\"bar\"").count(), 2);
        assert!(svg.contains(">United States</text>"));
        assert!(svg.contains("rotate(-35"));
    }

    #[test]
    fn line_chart_draws_series_and_legend() {
        let svg = trend_chart(&[
            TrendPoint {
                work_year: 2022,
                experience_level: ExperienceLevel::Mid,
                median_salary: 100_000.0,
                count: 1,
            },
            TrendPoint {
                work_year: 2023,
                experience_level: ExperienceLevel::Mid,
                median_salary: 120_000.0,
                count: 1,
            },
        ])
        .to_svg();
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("stroke=\"#2E86C1\""));
        assert!(svg.contains("Mid-level"));
        assert!(svg.contains(">Experience</text>"));
    }

    #[test]
    fn single_year_trend_is_centered() {
        let svg = trend_chart(&[TrendPoint {
            work_year: 2024,
            experience_level: ExperienceLevel::Senior,
            median_salary: 10.0,
            count: 1,
        }])
        .to_svg();
        assert!(svg.contains(">2024</text>"));
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    fn trend_at(years: &[i32]) -> Vec<TrendPoint> {
        years
            .iter()
            .map(|&work_year| TrendPoint {
                work_year,
                experience_level: ExperienceLevel::Senior,
                median_salary: 100_000.0,
                count: 1,
            })
            .collect()
    }

    #[test]
    fn sparse_years_label_only_years_with_data() {
        let svg = trend_chart(&trend_at(&[0, 2023])).to_svg();
        assert!(svg.contains(">0</text>"));
        assert!(svg.contains(">2023</text>"));
        assert!(!svg.contains(">1</text>"));
        assert!(!svg.contains(">2022</text>"));
        assert_eq!(svg.matches("text-anchor=\"middle\"").count(), 3);
    }

    #[test]
    fn extreme_years_render_without_overflow() {
        let svg = trend_chart(&trend_at(&[i32::MIN, i32::MAX])).to_svg();
        assert!(svg.contains(&format!(">{}</text>", i32::MIN)));
        assert!(svg.contains(&format!(">{}</text>", i32::MAX)));
        assert_eq!(svg.matches("<circle").count(), 2);
    }
}
