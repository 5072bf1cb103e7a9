use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day on the price chart.
/// Historical points carry no forecast; appended forecast points always do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub sma20: f64,
    pub sma50: f64,
    pub forecast: Option<f64>,
}

impl ChartPoint {
    pub fn is_forecast(&self) -> bool {
        self.forecast.is_some()
    }
}
