//! Builds the chart series from an analysis payload.
//!
//! The backend only returns a current price and two moving-average values, so
//! the history is synthesized client-side with random jitter around them.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::config::CHART;
use crate::models::{AnalysisResult, ChartPoint, Forecast};

/// Uniform sample in `[-width/2, width/2)`.
fn jitter<R: Rng>(rng: &mut R, width: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * width
}

/// `CHART.history_days` points ending on `today`, oldest first.
pub fn synthesize_history<R: Rng>(
    result: &AnalysisResult,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<ChartPoint> {
    let days = CHART.history_days as u64;
    let mut points = Vec::with_capacity(days as usize);

    for back in (0..days).rev() {
        let Some(date) = today.checked_sub_days(Days::new(back)) else {
            continue;
        };
        let price = result.current_price
            + jitter(rng, CHART.price_jitter_wide)
            + jitter(rng, CHART.price_jitter_narrow);

        points.push(ChartPoint {
            date,
            price: price.max(CHART.price_floor),
            sma20: result.sma_20 + jitter(rng, CHART.sma20_jitter),
            sma50: result.sma_50 + jitter(rng, CHART.sma50_jitter),
            forecast: None,
        });
    }
    points
}

/// Copy `history` and append one point per forecast day, dated the days after
/// the last historical point (after `today` when the history is empty).
///
/// Forecast points reuse the final moving-average values so the overlays do not
/// drop to zero at the right edge.
pub fn append_forecast(history: &[ChartPoint], forecast: &Forecast, today: NaiveDate) -> Vec<ChartPoint> {
    let (anchor, sma20, sma50) = match history.last() {
        Some(last) => (last.date, last.sma20, last.sma50),
        None => (today, 0.0, 0.0),
    };

    let mut series = Vec::with_capacity(history.len() + CHART.forecast_days as usize);
    series.extend(history.iter().cloned());

    for (offset, value) in (1u64..).zip(forecast.values()) {
        let Some(date) = anchor.checked_add_days(Days::new(offset)) else {
            break;
        };
        series.push(ChartPoint {
            date,
            price: value,
            sma20,
            sma50,
            forecast: Some(value),
        });
    }
    series
}

/// History plus forecast, ready for the chart renderer.
pub fn build_series<R: Rng>(
    result: &AnalysisResult,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<ChartPoint> {
    let history = synthesize_history(result, today, rng);
    let series = append_forecast(&history, &result.forecast, today);

    #[cfg(debug_assertions)]
    if crate::config::DF.log_chart {
        if let (Some(first), Some(last)) = (series.first(), series.last()) {
            log::info!(
                "Chart series for {}: {} points ({} .. {})",
                result.ticker,
                series.len(),
                first.date,
                last.date
            );
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
    }

    #[test]
    fn history_spans_thirty_days_ending_today() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = synthesize_history(&sample(), today(), &mut rng);

        assert_eq!(history.len(), 30);
        assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
        assert_eq!(history[29].date, today());
        assert!(history.windows(2).all(|w| w[0].date < w[1].date));
        assert!(history.iter().all(|p| p.forecast.is_none()));
    }

    #[test]
    fn history_jitter_stays_within_bounds() {
        let result = sample();
        let mut rng = StdRng::seed_from_u64(42);
        let history = synthesize_history(&result, today(), &mut rng);

        let price_span = (CHART.price_jitter_wide + CHART.price_jitter_narrow) / 2.0;
        for p in &history {
            assert!((p.price - result.current_price).abs() <= price_span);
            assert!((p.sma20 - result.sma_20).abs() <= CHART.sma20_jitter / 2.0);
            assert!((p.sma50 - result.sma_50).abs() <= CHART.sma50_jitter / 2.0);
        }
    }

    #[test]
    fn synthesized_prices_respect_floor() {
        let mut result = sample();
        result.current_price = 0.5;
        let mut rng = StdRng::seed_from_u64(3);
        let history = synthesize_history(&result, today(), &mut rng);
        assert!(history.iter().all(|p| p.price >= CHART.price_floor));
    }

    #[test]
    fn forecast_points_follow_last_historical_date() {
        let result = sample();
        let mut rng = StdRng::seed_from_u64(11);
        let history = synthesize_history(&result, today(), &mut rng);
        let series = append_forecast(&history, &result.forecast, today());

        assert_eq!(series.len(), history.len() + 3);
        let tail = &series[history.len()..];
        let last = history.last().unwrap();
        for (i, point) in tail.iter().enumerate() {
            assert_eq!(point.date, last.date + Days::new(i as u64 + 1));
            assert_eq!(point.forecast, Some(result.forecast.values()[i]));
            assert_eq!(point.price, result.forecast.values()[i]);
            assert_eq!(point.sma20, last.sma20);
            assert_eq!(point.sma50, last.sma50);
        }
        assert!(series[..history.len()].iter().all(|p| !p.is_forecast()));
    }

    #[test]
    fn forecast_crosses_month_boundary() {
        let result = sample();
        let history = vec![ChartPoint {
            date: today(),
            price: 100.0,
            sma20: 99.0,
            sma50: 98.0,
            forecast: None,
        }];
        let series = append_forecast(&history, &result.forecast, today());
        let dates: Vec<String> = series.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn empty_history_anchors_forecast_on_today() {
        let result = sample();
        let series = append_forecast(&[], &result.forecast, today());
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert!(series.iter().all(|p| p.sma20 == 0.0 && p.is_forecast()));
    }

    #[test]
    fn same_seed_builds_same_series() {
        let result = sample();
        let a = build_series(&result, today(), &mut StdRng::seed_from_u64(99));
        let b = build_series(&result, today(), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
        assert_eq!(a.len(), 33);
    }
}
