use std::sync::LazyLock;

// Glyphs available in egui's bundled emoji font
pub const ICON_TREND_UP: &str = "\u{2B08}"; // ⬈
pub const ICON_TREND_DOWN: &str = "\u{2B0A}"; // ⬊
pub const ICON_TREND_FLAT: &str = "\u{27A1}"; // ➡
pub const ICON_WARNING: &str = "\u{26A0}";
pub const ICON_CHART: &str = "\u{1F4C8}";
pub const ICON_BOOK: &str = "\u{1F4D6}";
pub const ICON_SEARCH: &str = "\u{1F50D}";
pub const ICON_CLOSE: &str = "\u{274C}";

pub struct UiText {
    pub icon_trend_up: String,
    pub icon_trend_down: String,
    pub icon_trend_flat: String,
    pub icon_close: String,

    // --- HEADER / FOOTER ---
    pub app_title: String,
    pub app_subtitle: String,
    pub footer: String,

    // --- TICKER INPUT ---
    pub input_label: String,
    pub input_placeholder: String,
    pub input_button: String,
    pub input_button_busy: String,

    // --- ANALYSIS CARD ---
    pub analysis_title_prefix: String,
    pub label_current_price: String,
    pub label_confidence: String,
    pub label_trend: String,
    pub label_momentum: String,
    pub label_volatility: String,
    pub tip_trend: String,
    pub tip_momentum: String,
    pub tip_volatility: String,
    pub tip_confidence: String,

    pub indicators_heading: String,
    pub label_sma20: String,
    pub label_sma50: String,
    pub label_rsi: String,
    pub label_macd: String,

    pub risk_heading: String,
    pub label_var: String,
    pub label_sharpe: String,
    pub label_beta: String,
    pub tip_var: String,
    pub tip_sharpe: String,
    pub tip_beta: String,

    pub learning_heading: String,

    // --- CHART ---
    pub chart_heading: String,
    pub chart_description: String,
    pub chart_series_price: String,
    pub chart_series_sma20: String,
    pub chart_series_sma50: String,
    pub chart_series_forecast: String,
    pub chart_x_axis: String,
    pub chart_y_axis: String,
    pub chart_summary_current: String,
    pub chart_summary_day_prefix: String,
    pub chart_summary_day_suffix: String,

    // --- EMPTY / LOADING ---
    pub empty_heading: String,
    pub empty_title: String,
    pub empty_body: String,
    pub empty_learning: String,
    pub loading_prefix: String,

    // --- DISCLAIMER ---
    pub disclaimer_heading: String,
    pub disclaimer_notice: String,
    pub disclaimer_body: String,
    pub disclaimer_not_advice: String,
    pub disclaimer_footer: String,

    // --- ERRORS ---
    pub error_startup: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    icon_trend_up: ICON_TREND_UP.to_string(),
    icon_trend_down: ICON_TREND_DOWN.to_string(),
    icon_trend_flat: ICON_TREND_FLAT.to_string(),
    icon_close: ICON_CLOSE.to_string(),

    app_title: "TraderBlockAI".to_string(),
    app_subtitle: "AI-Powered Stock Analysis for Educational Purposes".to_string(),
    footer: "TraderBlockAI - Educational Stock Analysis Tool | Not Financial Advice".to_string(),

    input_label: "Stock ticker".to_string(),
    input_placeholder: "e.g., AAPL, MSFT, GOOGL".to_string(),
    input_button: format!("{} Analyze", ICON_SEARCH),
    input_button_busy: "Analyzing...".to_string(),

    analysis_title_prefix: "AI Analysis for".to_string(),
    label_current_price: "Current Price".to_string(),
    label_confidence: "Confidence".to_string(),
    label_trend: "Trend".to_string(),
    label_momentum: "Momentum".to_string(),
    label_volatility: "Volatility".to_string(),
    tip_trend: "Overall price direction based on moving averages and price action".to_string(),
    tip_momentum: "Price momentum based on RSI and MACD indicators".to_string(),
    tip_volatility: "Price volatility based on historical price movements".to_string(),
    tip_confidence: "Model confidence in the combined signals".to_string(),

    indicators_heading: "Technical Indicators".to_string(),
    label_sma20: "SMA 20".to_string(),
    label_sma50: "SMA 50".to_string(),
    label_rsi: "RSI".to_string(),
    label_macd: "MACD".to_string(),

    risk_heading: "Professional Risk Metrics".to_string(),
    label_var: "VaR (99%)".to_string(),
    label_sharpe: "Sharpe Ratio".to_string(),
    label_beta: "Beta".to_string(),
    tip_var: "Value at Risk - potential worst-case daily loss".to_string(),
    tip_sharpe: "Risk-adjusted return measure".to_string(),
    tip_beta: "Market correlation - how stock moves vs S&P 500".to_string(),

    learning_heading: format!("{} Learning Corner", ICON_BOOK),

    chart_heading: format!("{} Price Chart with AI Forecast", ICON_CHART),
    chart_description: "Historical prices with 20-day and 50-day moving averages, plus 3-day AI forecast"
        .to_string(),
    chart_series_price: "Price".to_string(),
    chart_series_sma20: "SMA 20".to_string(),
    chart_series_sma50: "SMA 50".to_string(),
    chart_series_forecast: "AI Forecast".to_string(),
    chart_x_axis: "Date".to_string(),
    chart_y_axis: "Price ($)".to_string(),
    chart_summary_current: "Current Price".to_string(),
    chart_summary_day_prefix: "Day".to_string(),
    chart_summary_day_suffix: "Forecast".to_string(),

    empty_heading: "AI Analysis".to_string(),
    empty_title: "No analysis data available".to_string(),
    empty_body: "Enter a ticker symbol to get AI-powered analysis".to_string(),
    empty_learning: "Analysis explanation will be displayed here".to_string(),
    loading_prefix: "Analyzing".to_string(),

    disclaimer_heading: format!("{} Disclaimer", ICON_WARNING),
    disclaimer_notice: "Important Legal Notice:".to_string(),
    disclaimer_body: "This is a technology demonstration using statistical modeling and is \
                      for educational purposes only."
        .to_string(),
    disclaimer_not_advice: "This is not financial advice.".to_string(),
    disclaimer_footer: "All investment decisions should be made with the help of a \
                        qualified financial professional."
        .to_string(),

    error_startup: "Could not start the analysis client".to_string(),
});
