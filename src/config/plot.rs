//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Predicted price line.
    pub predicted_line_color: Color32,
    pub predicted_line_width: f32,
    pub predicted_point_radius: f32,
    /// Confidence band between yhat_lower and yhat_upper.
    pub band_fill_color: Color32,
    /// Y-Axis padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
    /// X-Axis padding in whole days added on each side
    pub plot_x_padding_days: f64,
    /// Target number of date labels along the X axis
    pub x_label_target_count: f64,

    // --- SEMANTIC COLORS ---
    pub color_loss: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    // Palette lifted from the service's reference frontend
    predicted_line_color: Color32::from_rgb(107, 170, 117),
    predicted_line_width: 1.5,
    predicted_point_radius: 3.0,
    band_fill_color: Color32::from_rgba_premultiplied(46, 52, 46, 60),

    plot_y_padding_pct: 0.05,
    plot_x_padding_days: 0.5,
    x_label_target_count: 8.0,

    color_loss: Color32::from_rgb(255, 80, 80),
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
