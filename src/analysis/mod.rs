pub mod chart_series;

pub use chart_series::{append_forecast, build_series, synthesize_history};
