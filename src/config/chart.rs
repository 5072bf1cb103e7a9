//! Chart series synthesis settings

pub struct ChartConfig {
    /// Number of calendar days of synthesized history (today included)
    pub history_days: u32,
    /// Forecast points appended after the last historical date
    pub forecast_days: u32,
    /// Price jitter: two uniform terms around the current price, +/- half these widths
    pub price_jitter_wide: f64,
    pub price_jitter_narrow: f64,
    /// Synthesized prices never drop below this floor
    pub price_floor: f64,
    pub sma20_jitter: f64,
    pub sma50_jitter: f64,
    /// Absolute padding added above and below the data on the y axis
    pub y_padding: f64,
    /// Plot height in points
    pub plot_height: f32,
}

pub const CHART: ChartConfig = ChartConfig {
    history_days: 30,
    forecast_days: 3,
    price_jitter_wide: 10.0,
    price_jitter_narrow: 5.0,
    price_floor: 1.0,
    sma20_jitter: 8.0,
    sma50_jitter: 12.0,
    y_padding: 5.0,
    plot_height: 320.0,
};
