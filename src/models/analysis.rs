use serde::{Deserialize, Serialize};

use crate::models::{Momentum, Trend, Volatility};

/// Three-day price forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub day_1: f64,
    pub day_2: f64,
    pub day_3: f64,
}

impl Forecast {
    /// Day 1 first.
    pub fn values(&self) -> [f64; 3] {
        [self.day_1, self.day_2, self.day_3]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremeRisk {
    /// Expected to be negative (a loss)
    pub max_expected_loss_usd: f64,
    #[serde(default)]
    pub var_99_percent: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAdjustedReturn {
    pub sharpe_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketCorrelation {
    pub beta: f64,
}

/// Analysis payload returned by the backend for one ticker.
///
/// Every field except `extreme_risk.var_99_percent` is required, so a partial
/// payload fails to deserialize instead of reaching the renderer.
/// Numbers are display-only and are not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ticker: String,
    pub current_price: f64,
    pub trend: String,
    pub momentum: String,
    pub volatility: String,
    pub confidence: f64,
    pub forecast: Forecast,
    pub sma_20: f64,
    pub sma_50: f64,
    pub rsi: f64,
    pub macd: f64,
    pub extreme_risk: ExtremeRisk,
    pub risk_adjusted_return: RiskAdjustedReturn,
    pub market_correlation: MarketCorrelation,
    pub educational_explanation: String,
}

impl AnalysisResult {
    pub fn trend_kind(&self) -> Trend {
        Trend::classify(&self.trend)
    }

    pub fn momentum_kind(&self) -> Momentum {
        Momentum::classify(&self.momentum)
    }

    pub fn volatility_kind(&self) -> Volatility {
        Volatility::classify(&self.volatility)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) const SAMPLE_JSON: &str = r#"{
        "ticker": "AAPL",
        "current_price": 189.43,
        "trend": "Bullish",
        "momentum": "Positive",
        "volatility": "Medium",
        "confidence": 0.82,
        "forecast": { "day_1": 190.1, "day_2": 191.25, "day_3": 190.8 },
        "sma_20": 186.2,
        "sma_50": 181.7,
        "rsi": 58.31,
        "macd": 1.2345,
        "extreme_risk": { "var_99_percent": -0.041, "max_expected_loss_usd": -7.77 },
        "risk_adjusted_return": { "sharpe_ratio": 1.18 },
        "market_correlation": { "beta": 1.07 },
        "educational_explanation": "Price is above both moving averages."
    }"#;

    pub(crate) fn sample() -> AnalysisResult {
        serde_json::from_str(SAMPLE_JSON).expect("fixture must parse")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{SAMPLE_JSON, sample};
    use super::*;

    #[test]
    fn full_payload_deserializes() {
        let result = sample();
        assert_eq!(result.ticker, "AAPL");
        assert_eq!(result.forecast.values(), [190.1, 191.25, 190.8]);
        assert_eq!(result.extreme_risk.var_99_percent, Some(-0.041));
        assert_eq!(result.trend_kind(), Trend::Bullish);
        assert_eq!(result.momentum_kind(), Momentum::Positive);
        assert_eq!(result.volatility_kind(), Volatility::Medium);
    }

    #[test]
    fn var_99_percent_is_optional() {
        let json = SAMPLE_JSON.replace(r#""var_99_percent": -0.041, "#, "");
        let result: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.extreme_risk.var_99_percent, None);
        assert_eq!(result.extreme_risk.max_expected_loss_usd, -7.77);
    }

    #[test]
    fn missing_nested_field_is_rejected() {
        let json = SAMPLE_JSON.replace(r#", "max_expected_loss_usd": -7.77"#, "");
        let err = serde_json::from_str::<AnalysisResult>(&json).unwrap_err();
        assert!(err.to_string().contains("max_expected_loss_usd"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = SAMPLE_JSON.replacen('{', r#"{ "model_version": "lstm-1", "#, 1);
        assert!(serde_json::from_str::<AnalysisResult>(&json).is_ok());
    }
}
