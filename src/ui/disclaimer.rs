use eframe::egui::{RichText, Ui};

use crate::config::PLOT_CONFIG;
use crate::ui::{UI_CONFIG, UI_TEXT};

/// Legal notice, shown on every screen regardless of state.
pub(crate) fn render_disclaimer(ui: &mut Ui) {
    UI_CONFIG
        .banner_frame(PLOT_CONFIG.color_warning.gamma_multiply(0.15))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(UI_TEXT.disclaimer_heading.as_str())
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.disclaimer_notice.as_str())
                        .strong()
                        .color(PLOT_CONFIG.color_text_primary),
                );
                ui.label(RichText::new(UI_TEXT.disclaimer_body.as_str()).color(PLOT_CONFIG.color_text_neutral));
                ui.label(
                    RichText::new(UI_TEXT.disclaimer_not_advice.as_str())
                        .strong()
                        .color(PLOT_CONFIG.color_negative),
                );
                ui.label(RichText::new(UI_TEXT.disclaimer_footer.as_str()).color(PLOT_CONFIG.color_text_neutral));
            });
        });
}
