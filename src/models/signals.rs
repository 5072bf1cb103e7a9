use strum_macros::{Display, EnumString};

/// Direction of the price trend, as labelled by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl Trend {
    /// Case-insensitive exact match; unrecognised or padded labels fall back
    /// to `Neutral`.
    pub fn classify(label: &str) -> Self {
        label.parse().unwrap_or(Self::Neutral)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Momentum {
    Overbought,
    Oversold,
    Positive,
    Negative,
    Other,
}

impl Momentum {
    pub fn classify(label: &str) -> Self {
        label.parse().unwrap_or(Self::Other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Volatility {
    High,
    Medium,
    Low,
    Other,
}

impl Volatility {
    pub fn classify(label: &str) -> Self {
        label.parse().unwrap_or(Self::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_is_case_insensitive() {
        assert_eq!(Trend::classify("Bullish"), Trend::Bullish);
        assert_eq!(Trend::classify("BEARISH"), Trend::Bearish);
        assert_eq!(Trend::classify("neutral"), Trend::Neutral);
    }

    #[test]
    fn unknown_trend_is_neutral() {
        assert_eq!(Trend::classify("Sideways"), Trend::Neutral);
        assert_eq!(Trend::classify(""), Trend::Neutral);
    }

    #[test]
    fn momentum_and_volatility_fall_back_to_other() {
        assert_eq!(Momentum::classify("oversold"), Momentum::Oversold);
        assert_eq!(Momentum::classify("Flat"), Momentum::Other);
        assert_eq!(Volatility::classify("MEDIUM"), Volatility::Medium);
        assert_eq!(Volatility::classify("extreme"), Volatility::Other);
    }

    #[test]
    fn padded_labels_are_not_recognised() {
        assert_eq!(Trend::classify(" bullish "), Trend::Neutral);
        assert_eq!(Momentum::classify("positive "), Momentum::Other);
        assert_eq!(Volatility::classify(" low"), Volatility::Other);
    }
}
