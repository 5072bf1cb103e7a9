mod chart_view;
mod dashboard;
mod disclaimer;
pub(crate) mod format;
mod styles;
mod ticker_input;
mod ui_config;
mod ui_text;

pub(crate) use chart_view::render_chart;
pub(crate) use dashboard::{render_dashboard, render_empty, render_loading};
pub(crate) use disclaimer::render_disclaimer;
pub(crate) use styles::{UiStyleExt, error_frame};
pub(crate) use ticker_input::TickerInputState;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
