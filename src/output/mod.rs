// Output module
pub mod chart;
pub mod format;
pub mod summary;
pub mod table;

pub use chart::{ChartPoint, chart_data, render_text_chart};
pub use format::{FormattedResults, Precision, format_currency};
pub use summary::render_summary;
pub use table::{OutputFormat, RoiReport, apply_table_style};
