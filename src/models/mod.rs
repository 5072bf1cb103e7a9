mod analysis;
mod chart_point;
mod signals;

pub use analysis::{
    AnalysisResult, ExtremeRisk, Forecast, MarketCorrelation, RiskAdjustedReturn,
};
pub use chart_point::ChartPoint;
pub use signals::{Momentum, Trend, Volatility};

#[cfg(test)]
pub(crate) use analysis::fixtures;
