//! Plot and semantic color configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- SERIES ---
    pub color_price: Color32,
    pub color_sma20: Color32,
    pub color_sma50: Color32,
    pub color_forecast: Color32,
    pub price_line_width: f32,
    pub sma_line_width: f32,
    pub forecast_line_width: f32,
    pub sma_dash_length: f32,
    pub forecast_dash_length: f32,

    // --- SEMANTIC COLORS ---
    pub color_positive: Color32,
    pub color_negative: Color32,
    pub color_caution: Color32,
    pub color_muted: Color32,

    pub color_warning: Color32,
    pub color_error_bg: Color32,
    pub color_error_fg: Color32,

    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    // Skeleton placeholders while loading
    pub color_skeleton: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    color_price: Color32::from_rgb(37, 99, 235),    // Blue
    color_sma20: Color32::from_rgb(245, 158, 11),   // Amber
    color_sma50: Color32::from_rgb(239, 68, 68),    // Red
    color_forecast: Color32::from_rgb(16, 185, 129), // Emerald
    price_line_width: 2.0,
    sma_line_width: 1.0,
    forecast_line_width: 2.0,
    sma_dash_length: 5.0,
    forecast_dash_length: 10.0,

    color_positive: Color32::from_rgb(22, 163, 74),
    color_negative: Color32::from_rgb(220, 38, 38),
    color_caution: Color32::from_rgb(202, 138, 4),
    color_muted: Color32::from_rgb(75, 85, 99),

    color_warning: Color32::from_rgb(234, 88, 12), // Orange
    color_error_bg: Color32::from_rgb(69, 10, 10),
    color_error_fg: Color32::from_rgb(252, 165, 165),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_skeleton: Color32::from_gray(60),
};
