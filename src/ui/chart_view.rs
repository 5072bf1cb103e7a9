use std::ops::RangeInclusive;

use eframe::egui::{RichText, Ui};
use egui_plot::{Axis, AxisHints, HPlacement, Legend, Line, LineStyle, Plot, PlotPoints, PlotUi};

use crate::config::{CHART, PLOT_CONFIG};
use crate::models::{ChartPoint, Forecast};
use crate::ui::format::format_usd;
use crate::ui::{UI_TEXT, UiStyleExt};
use crate::utils::TimeUtils;

/// Data shared by every layer for one frame.
pub(crate) struct LayerContext<'a> {
    pub series: &'a [ChartPoint],
}

/// One visual element of the price chart.
pub(crate) trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

pub(crate) struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points: Vec<[f64; 2]> = ctx.series.iter().map(|p| [plot_x(p), p.price]).collect();
        plot_ui.line(
            Line::new(UI_TEXT.chart_series_price.as_str(), PlotPoints::new(points))
                .color(PLOT_CONFIG.color_price)
                .width(PLOT_CONFIG.price_line_width),
        );
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum MovingAverage {
    Sma20,
    Sma50,
}

pub(crate) struct MovingAverageLayer(pub MovingAverage);

impl PlotLayer for MovingAverageLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let (name, color) = match self.0 {
            MovingAverage::Sma20 => (UI_TEXT.chart_series_sma20.as_str(), PLOT_CONFIG.color_sma20),
            MovingAverage::Sma50 => (UI_TEXT.chart_series_sma50.as_str(), PLOT_CONFIG.color_sma50),
        };
        let points: Vec<[f64; 2]> = ctx
            .series
            .iter()
            .map(|p| {
                let y = match self.0 {
                    MovingAverage::Sma20 => p.sma20,
                    MovingAverage::Sma50 => p.sma50,
                };
                [plot_x(p), y]
            })
            .collect();
        plot_ui.line(
            Line::new(name, PlotPoints::new(points))
                .color(color)
                .width(PLOT_CONFIG.sma_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.sma_dash_length,
                }),
        );
    }
}

/// Only the appended forecast points.
pub(crate) struct ForecastLayer;

impl PlotLayer for ForecastLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points: Vec<[f64; 2]> = ctx
            .series
            .iter()
            .filter_map(|p| p.forecast.map(|f| [plot_x(p), f]))
            .collect();
        if points.is_empty() {
            return;
        }
        plot_ui.line(
            Line::new(UI_TEXT.chart_series_forecast.as_str(), PlotPoints::new(points))
                .color(PLOT_CONFIG.color_forecast)
                .width(PLOT_CONFIG.forecast_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.forecast_dash_length,
                }),
        );
    }
}

fn plot_x(point: &ChartPoint) -> f64 {
    TimeUtils::date_to_plot_x(point.date)
}

/// Min/max over every plotted value, padded by `padding` on both sides.
pub(crate) fn y_bounds(series: &[ChartPoint], padding: f64) -> Option<RangeInclusive<f64>> {
    let values = series
        .iter()
        .flat_map(|p| [Some(p.price), Some(p.sma20), Some(p.sma50), p.forecast])
        .flatten()
        .filter(|v| v.is_finite());

    let (min, max) = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })?;
    Some((min - padding)..=(max + padding))
}

/// Half a day of slack either side so the end points are not clipped.
pub(crate) fn x_bounds(series: &[ChartPoint]) -> Option<RangeInclusive<f64>> {
    let first = series.first()?;
    let last = series.last()?;
    Some((plot_x(first) - 0.5)..=(plot_x(last) + 0.5))
}

fn create_date_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.chart_x_axis.as_str())
        .formatter(|mark, _range| {
            let whole_day = mark.value.round();
            if (mark.value - whole_day).abs() > 1e-6 {
                return String::new();
            }
            TimeUtils::plot_x_to_date(whole_day)
                .map(TimeUtils::format_axis_date)
                .unwrap_or_default()
        })
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.chart_y_axis.as_str())
        .formatter(|mark, _range| format!("{:.0}", mark.value))
        .placement(HPlacement::Left)
}

/// Price chart card: history, moving averages, forecast and the summary row.
pub(crate) fn render_chart(ui: &mut Ui, series: &[ChartPoint], current_price: f64, forecast: &Forecast) {
    ui.card(|ui| {
        ui.label_subheader(UI_TEXT.chart_heading.as_str());
        ui.label_subdued(UI_TEXT.chart_description.as_str());
        ui.add_space(8.0);

        let ctx = LayerContext { series };
        let layers: [&dyn PlotLayer; 4] = [
            &PriceLineLayer,
            &MovingAverageLayer(MovingAverage::Sma20),
            &MovingAverageLayer(MovingAverage::Sma50),
            &ForecastLayer,
        ];
        let y_range = y_bounds(series, CHART.y_padding);
        let x_range = x_bounds(series);

        Plot::new("price_forecast_plot")
            .height(CHART.plot_height)
            .legend(Legend::default())
            .custom_x_axes(vec![create_date_axis()])
            .custom_y_axes(vec![create_price_axis()])
            .label_formatter(|name, value| {
                if name.is_empty() {
                    return String::new();
                }
                let date = TimeUtils::plot_x_to_date(value.x.round())
                    .map(TimeUtils::format_date)
                    .unwrap_or_default();
                format!("{}\n{}\n{}", name, date, format_usd(value.y))
            })
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                if let Some(x) = x_range {
                    plot_ui.set_plot_bounds_x(x);
                }
                if let Some(y) = y_range {
                    plot_ui.set_plot_bounds_y(y);
                }
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });

        ui.add_space(8.0);
        render_forecast_summary(ui, current_price, forecast);
    });
}

fn render_forecast_summary(ui: &mut Ui, current_price: f64, forecast: &Forecast) {
    let mut cells = vec![(UI_TEXT.chart_summary_current.clone(), current_price)];
    for (i, value) in forecast.values().into_iter().enumerate() {
        cells.push((
            format!(
                "{} {} {}",
                UI_TEXT.chart_summary_day_prefix,
                i + 1,
                UI_TEXT.chart_summary_day_suffix
            ),
            value,
        ));
    }

    ui.columns(cells.len(), |columns| {
        for (col, (label, value)) in columns.iter_mut().zip(cells) {
            col.label_subdued(format!("{}:", label));
            col.label(RichText::new(format_usd(value)).strong());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, price: f64, forecast: Option<f64>) -> ChartPoint {
        ChartPoint {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            price,
            sma20: 100.0,
            sma50: 95.0,
            forecast,
        }
    }

    #[test]
    fn y_bounds_pad_all_series() {
        let series = vec![point(1, 110.0, None), point(2, 120.0, Some(120.0))];
        let range = y_bounds(&series, 5.0).unwrap();
        assert_eq!(*range.start(), 90.0);
        assert_eq!(*range.end(), 125.0);
    }

    #[test]
    fn bounds_of_empty_series() {
        assert!(y_bounds(&[], 5.0).is_none());
        assert!(x_bounds(&[]).is_none());
    }

    #[test]
    fn x_bounds_cover_first_and_last_day() {
        let series = vec![point(1, 1.0, None), point(4, 1.0, None)];
        let range = x_bounds(&series).unwrap();
        assert_eq!(range.end() - range.start(), 4.0);
        assert_eq!(
            TimeUtils::plot_x_to_date(range.start() + 0.5),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }
}
