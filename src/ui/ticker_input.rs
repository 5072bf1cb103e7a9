use eframe::egui::{Button, Key, RichText, TextEdit, Ui};

use crate::domain::Ticker;
use crate::ui::{UI_TEXT, UiStyleExt};

/// Text box plus submit button.
#[derive(Debug, Default)]
pub(crate) struct TickerInputState {
    text: String,
}

impl TickerInputState {
    pub(crate) fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Normalized ticker if the box holds anything but whitespace.
    pub(crate) fn parsed(&self) -> Option<Ticker> {
        Ticker::parse(&self.text)
    }

    /// The button is only live when a client exists, no request is in flight
    /// and the box is non-blank.
    pub(crate) fn can_submit(&self, is_loading: bool, client_ready: bool) -> bool {
        client_ready && !is_loading && self.parsed().is_some()
    }

    /// Draws the form. Returns a ticker when the user submitted one this frame.
    pub(crate) fn show(
        &mut self,
        ui: &mut Ui,
        is_loading: bool,
        client_ready: bool,
    ) -> Option<Ticker> {
        let mut submitted = false;

        ui.vertical_centered(|ui| {
            ui.label_subdued(UI_TEXT.input_label.as_str());
            ui.horizontal(|ui| {
                let edit = ui.add(
                    TextEdit::singleline(&mut self.text)
                        .hint_text(UI_TEXT.input_placeholder.as_str())
                        .desired_width(260.0),
                );
                if edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submitted = true;
                }

                let button = Button::new(RichText::new(button_label(is_loading)).strong());
                if ui
                    .add_enabled(self.can_submit(is_loading, client_ready), button)
                    .clicked()
                {
                    submitted = true;
                }
            });
        });

        if submitted && self.can_submit(is_loading, client_ready) {
            self.parsed()
        } else {
            None
        }
    }
}

/// "Analyzing..." only while a request is actually in flight.
pub(crate) fn button_label(is_loading: bool) -> &'static str {
    if is_loading {
        UI_TEXT.input_button_busy.as_str()
    } else {
        UI_TEXT.input_button.as_str()
    }
}
