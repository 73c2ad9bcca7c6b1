pub mod card;
pub mod chart;
pub mod format;
pub mod svg;

pub use card::{highest_paid_card, HighestPaidCard};
pub use chart::{
    country_chart, job_title_chart, trend_chart, Bar, BarChart, Chart, LineChart, LinePoint,
    LineSeries, Orientation,
};
pub use format::format_usd;
