use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(182, 206, 180),
        heading: Color32::from_rgb(107, 170, 117),
        central_panel: Color32::from_rgb(18, 22, 18),
        side_panel: Color32::from_rgb(28, 34, 28),
    },
};

impl UiConfig {
    /// Frame for the top controls bar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the bottom table panel (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for the plot area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(4),
            ..Default::default()
        }
    }
}
