use {
    crate::{
        config::PLOT_CONFIG,
        models::{Momentum, Trend, Volatility},
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{Color32, CornerRadius, Frame, Response, RichText, Sense, Ui, Vec2},
};

/// Semantic coloring of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Positive,
    Negative,
    Caution,
    Muted,
}

impl Tone {
    pub(crate) fn color(self) -> Color32 {
        match self {
            Self::Positive => PLOT_CONFIG.color_positive,
            Self::Negative => PLOT_CONFIG.color_negative,
            Self::Caution => PLOT_CONFIG.color_caution,
            Self::Muted => PLOT_CONFIG.color_muted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrendIcon {
    Up,
    Down,
    Flat,
}

impl TrendIcon {
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            Self::Up => &UI_TEXT.icon_trend_up,
            Self::Down => &UI_TEXT.icon_trend_down,
            Self::Flat => &UI_TEXT.icon_trend_flat,
        }
    }
}

pub(crate) fn trend_style(trend: Trend) -> (Tone, TrendIcon) {
    match trend {
        Trend::Bullish => (Tone::Positive, TrendIcon::Up),
        Trend::Bearish => (Tone::Negative, TrendIcon::Down),
        Trend::Neutral => (Tone::Caution, TrendIcon::Flat),
    }
}

pub(crate) fn momentum_tone(momentum: Momentum) -> Tone {
    match momentum {
        Momentum::Overbought | Momentum::Positive => Tone::Positive,
        Momentum::Oversold | Momentum::Negative => Tone::Negative,
        Momentum::Other => Tone::Caution,
    }
}

pub(crate) fn volatility_tone(volatility: Volatility) -> Tone {
    match volatility {
        Volatility::High => Tone::Negative,
        Volatility::Medium => Tone::Caution,
        Volatility::Low => Tone::Positive,
        Volatility::Other => Tone::Muted,
    }
}

pub(crate) fn sharpe_tone(sharpe: f64) -> Tone {
    if sharpe > 1.0 {
        Tone::Positive
    } else if sharpe > 0.0 {
        Tone::Caution
    } else {
        Tone::Negative
    }
}

/// Above 1 moves more than the market.
pub(crate) fn beta_tone(beta: f64) -> Tone {
    if beta > 1.0 {
        Tone::Negative
    } else if beta < 1.0 {
        Tone::Positive
    } else {
        Tone::Caution
    }
}

/// VaR is always shown as a loss magnitude.
pub(crate) fn var_display(max_expected_loss_usd: f64) -> (Tone, f64) {
    (Tone::Negative, max_expected_loss_usd.abs())
}

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    /// "Label:  value" on one row, value colored by tone.
    fn metric(&mut self, label: &str, value: &str, tone: Tone) -> Response;
    fn label_subheader(&mut self, text: impl Into<String>);
    fn card(&mut self, add_contents: impl FnOnce(&mut Ui));
    /// Gray placeholder bar shown while a request is in flight.
    fn skeleton_bar(&mut self, width: f32, height: f32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, tone: Tone) -> Response {
        self.horizontal(|ui| {
            ui.label(RichText::new(label).color(PLOT_CONFIG.color_text_neutral));
            ui.label(RichText::new(value).strong().color(tone.color()));
        })
        .response
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text).strong());
    }

    fn card(&mut self, add_contents: impl FnOnce(&mut Ui)) {
        UI_CONFIG.card_frame().show(self, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
    }

    fn skeleton_bar(&mut self, width: f32, height: f32) {
        let (rect, _) = self.allocate_exact_size(Vec2::new(width, height), Sense::hover());
        if self.is_rect_visible(rect) {
            self.painter()
                .rect_filled(rect, CornerRadius::same(4), PLOT_CONFIG.color_skeleton);
        }
    }
}

/// Frame used for the error banner.
pub(crate) fn error_frame() -> Frame {
    UI_CONFIG.banner_frame(PLOT_CONFIG.color_error_bg)
}
