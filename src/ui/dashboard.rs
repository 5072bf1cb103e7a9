use eframe::egui::{Grid, RichText, Spinner, Ui};

use crate::config::PLOT_CONFIG;
use crate::domain::Ticker;
use crate::models::AnalysisResult;
use crate::ui::format::{format_macd, format_percent, format_ratio, format_rsi, format_usd};
use crate::ui::styles::{
    Tone, beta_tone, momentum_tone, sharpe_tone, trend_style, var_display, volatility_tone,
};
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

/// Analysis card and Learning Corner, side by side.
pub(crate) fn render_dashboard(ui: &mut Ui, result: &AnalysisResult) {
    ui.columns(2, |cols| {
        render_analysis_card(&mut cols[0], result);
        render_learning_corner(&mut cols[1], &result.educational_explanation);
    });
}

fn render_analysis_card(ui: &mut Ui, result: &AnalysisResult) {
    ui.card(|ui| {
        ui.label_subheader(format!("{} {}", UI_TEXT.analysis_title_prefix, result.ticker));
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.label_current_price.as_str());
            ui.label(
                RichText::new(format_usd(result.current_price))
                    .size(22.0)
                    .strong()
                    .color(PLOT_CONFIG.color_text_primary),
            );
        });
        ui.metric(
            &UI_TEXT.label_confidence,
            &format_percent(result.confidence),
            Tone::Muted,
        )
        .on_hover_text(UI_TEXT.tip_confidence.as_str());
        ui.separator();

        let (trend_tone, icon) = trend_style(result.trend_kind());
        ui.metric(
            &UI_TEXT.label_trend,
            &format!("{} {}", icon.glyph(), result.trend),
            trend_tone,
        )
        .on_hover_text(UI_TEXT.tip_trend.as_str());
        ui.metric(
            &UI_TEXT.label_momentum,
            &result.momentum,
            momentum_tone(result.momentum_kind()),
        )
        .on_hover_text(UI_TEXT.tip_momentum.as_str());
        ui.metric(
            &UI_TEXT.label_volatility,
            &result.volatility,
            volatility_tone(result.volatility_kind()),
        )
        .on_hover_text(UI_TEXT.tip_volatility.as_str());

        ui.add_space(UI_CONFIG.card_spacing);
        ui.label_subheader(UI_TEXT.indicators_heading.as_str());
        Grid::new("technical_indicators")
            .num_columns(4)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                indicator_cell(ui, &UI_TEXT.label_sma20, format_usd(result.sma_20));
                indicator_cell(ui, &UI_TEXT.label_sma50, format_usd(result.sma_50));
                ui.end_row();
                indicator_cell(ui, &UI_TEXT.label_rsi, format_rsi(result.rsi));
                indicator_cell(ui, &UI_TEXT.label_macd, format_macd(result.macd));
                ui.end_row();
            });

        ui.add_space(UI_CONFIG.card_spacing);
        ui.label_subheader(UI_TEXT.risk_heading.as_str());
        let (var_tone, loss) = var_display(result.extreme_risk.max_expected_loss_usd);
        ui.metric(&UI_TEXT.label_var, &format_usd(loss), var_tone)
            .on_hover_text(UI_TEXT.tip_var.as_str());
        let sharpe = result.risk_adjusted_return.sharpe_ratio;
        ui.metric(&UI_TEXT.label_sharpe, &format_ratio(sharpe), sharpe_tone(sharpe))
            .on_hover_text(UI_TEXT.tip_sharpe.as_str());
        let beta = result.market_correlation.beta;
        ui.metric(&UI_TEXT.label_beta, &format_ratio(beta), beta_tone(beta))
            .on_hover_text(UI_TEXT.tip_beta.as_str());
    });
}

fn indicator_cell(ui: &mut Ui, label: &str, value: String) {
    ui.label_subdued(format!("{}:", label));
    ui.label(RichText::new(value).strong().color(PLOT_CONFIG.color_text_primary));
}

fn render_learning_corner(ui: &mut Ui, explanation: &str) {
    ui.card(|ui| {
        ui.label_subheader(UI_TEXT.learning_heading.as_str());
        ui.add_space(6.0);
        ui.label(RichText::new(explanation).color(PLOT_CONFIG.color_text_neutral));
    });
}

/// Placeholder cards while a request is in flight.
pub(crate) fn render_loading(ui: &mut Ui, ticker: Option<&Ticker>) {
    ui.card(|ui| {
        ui.horizontal(|ui| {
            ui.add(Spinner::new());
            let text = match ticker {
                Some(t) => format!("{} {}...", UI_TEXT.loading_prefix, t),
                None => format!("{}...", UI_TEXT.loading_prefix),
            };
            ui.label_subdued(text);
        });
        ui.add_space(8.0);
        let width = ui.available_width();
        ui.skeleton_bar(width, 220.0);
    });
    ui.add_space(UI_CONFIG.card_spacing);

    ui.columns(2, |cols| {
        for col in cols.iter_mut() {
            col.card(|ui| {
                let width = ui.available_width();
                ui.skeleton_bar(width * 0.5, 18.0);
                ui.add_space(10.0);
                for fraction in [0.9, 0.75, 0.8, 0.6] {
                    ui.skeleton_bar(width * fraction, 12.0);
                    ui.add_space(6.0);
                }
            });
        }
    });
}

/// Prompt cards shown before the first analysis.
pub(crate) fn render_empty(ui: &mut Ui) {
    ui.columns(2, |cols| {
        cols[0].card(|ui| {
            ui.label_subheader(UI_TEXT.empty_heading.as_str());
            ui.label_subdued(UI_TEXT.empty_title.as_str());
            ui.add_space(6.0);
            ui.label(RichText::new(UI_TEXT.empty_body.as_str()).color(PLOT_CONFIG.color_text_subdued));
        });
        cols[1].card(|ui| {
            ui.label_subheader(UI_TEXT.learning_heading.as_str());
            ui.add_space(6.0);
            ui.label(
                RichText::new(UI_TEXT.empty_learning.as_str()).color(PLOT_CONFIG.color_text_subdued),
            );
        });
    });
}
