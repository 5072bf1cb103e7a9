//! Configuration module for the dashboard.

mod backend;
mod chart;
mod debug;

// Can't be private because we don't re-export it
pub mod plot;

pub use backend::{BACKEND, BackendConfig};
pub use chart::{CHART, ChartConfig};
pub use debug::DF;
pub use plot::PLOT_CONFIG;
