use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Cards stop growing past this width on wide windows
    pub max_content_width: f32,
    pub card_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY, // This sets every label globally to this color
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(96, 165, 250),
        central_panel: Color32::from_rgb(17, 24, 39),
        side_panel: Color32::from_rgb(31, 41, 55),
        card: Color32::from_rgb(31, 41, 55),
        card_border: Color32::from_rgb(55, 65, 81),
    },
    max_content_width: 1100.0,
    card_spacing: 12.0,
};

impl UiConfig {
    /// Frame for the header bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }

    /// Frame for the footer (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(14),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }

    /// Full-width strip (error banner, disclaimer)
    pub fn banner_frame(&self, fill: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
