#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;
pub use data::{AnalysisError, AnalysisProvider, BackendClient};
pub use domain::Ticker;
pub use models::AnalysisResult;

// CLI argument parsing
use clap::Parser;

use crate::config::BACKEND;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the analysis backend
    #[arg(long, default_value_t = BACKEND.base_url.to_string())]
    pub backend_url: String,

    /// Analyze this ticker as soon as the window opens
    #[arg(long)]
    pub ticker: Option<String>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            backend_url: BACKEND.base_url.to_string(),
            ticker: None,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_compiled_backend() {
        let cli = Cli::try_parse_from(["traderblock"]).unwrap();
        assert_eq!(cli.backend_url, BACKEND.base_url);
        assert!(cli.ticker.is_none());
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::try_parse_from([
            "traderblock",
            "--backend-url",
            "http://localhost:8000",
            "--ticker",
            "msft",
        ])
        .unwrap();
        assert_eq!(cli.backend_url, "http://localhost:8000");
        assert_eq!(cli.ticker.as_deref(), Some("msft"));
    }
}
