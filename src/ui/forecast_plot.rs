use eframe::egui::{Stroke, Ui, Vec2b};
use egui_plot::{
    Axis, AxisHints, GridMark, HPlacement, Legend, Line, Plot, PlotPoints, Points, Polygon,
    VPlacement,
};

use crate::config::PLOT_CONFIG;
use crate::models::ForecastSeries;
use crate::ui::UI_TEXT;

// Helper: snap the label spacing to a human-friendly step (1, 2, 5, 10, 20...),
// never below one day so every mark lands on a real point index.
fn label_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 1.0 {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    (nice_step * mag).max(1.0)
}

// X axis ticks through the date labels; points are plotted at their index.
fn create_date_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.clone())
        .formatter(move |mark, _range| {
            let nearest = mark.value.round();
            if (mark.value - nearest).abs() > 1e-6 || nearest < 0.0 {
                return String::new();
            }
            labels.get(nearest as usize).cloned().unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.clone())
        .formatter(|mark, _range| format!("{:.2}", mark.value))
        .placement(HPlacement::Right)
}

/// Predicted-price line over the confidence band. The caller only invokes
/// this with a non-empty series.
pub(crate) fn show_forecast_plot(ui: &mut Ui, series: &ForecastSeries) {
    let points = series.points();

    let predicted: Vec<[f64; 2]> = points
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.yhat])
        .collect();

    // Band outline: lower bound left-to-right, then upper bound back.
    let mut band: Vec<[f64; 2]> = Vec::with_capacity(points.len() * 2);
    for (i, p) in points.iter().enumerate() {
        band.push([i as f64, p.yhat_lower]);
    }
    for (i, p) in points.iter().enumerate().rev() {
        band.push([i as f64, p.yhat_upper]);
    }

    let (y_min, y_max) = series.value_range().unwrap_or((0.0, 1.0));
    let y_pad = (y_max - y_min).max(f64::EPSILON) * PLOT_CONFIG.plot_y_padding_pct;
    let x_pad = PLOT_CONFIG.plot_x_padding_days;
    let x_max = series.len().saturating_sub(1) as f64;

    let date_axis = create_date_axis(series.labels());

    Plot::new("forecast_plot")
        .legend(Legend::default())
        .custom_x_axes(vec![date_axis])
        .custom_y_axes(vec![create_price_axis()])
        .x_grid_spacer(move |input| {
            let (min, max) = input.bounds;
            let step = label_step(max - min, PLOT_CONFIG.x_label_target_count);
            let start = (min / step).ceil() as i64;
            let end = (max / step).floor() as i64;
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64 * step,
                    step_size: step,
                })
                .collect()
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: true })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(-x_pad..=x_max + x_pad);
            plot_ui.set_plot_bounds_y(y_min - y_pad..=y_max + y_pad);

            plot_ui.polygon(
                Polygon::new(UI_TEXT.legend_band.as_str(), PlotPoints::new(band))
                    .fill_color(PLOT_CONFIG.band_fill_color)
                    .stroke(Stroke::NONE),
            );
            plot_ui.line(
                Line::new(
                    UI_TEXT.legend_predicted.as_str(),
                    PlotPoints::new(predicted.clone()),
                )
                .color(PLOT_CONFIG.predicted_line_color)
                .width(PLOT_CONFIG.predicted_line_width),
            );
            plot_ui.points(
                Points::new("", PlotPoints::new(predicted))
                    .color(PLOT_CONFIG.predicted_line_color)
                    .radius(PLOT_CONFIG.predicted_point_radius),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ranges_label_every_day() {
        assert_eq!(label_step(5.0, 8.0), 1.0);
        assert_eq!(label_step(8.0, 8.0), 1.0);
    }

    #[test]
    fn long_ranges_snap_to_nice_steps() {
        assert_eq!(label_step(30.0, 8.0), 5.0);
        assert_eq!(label_step(90.0, 8.0), 10.0);
        assert_eq!(label_step(365.0, 8.0), 50.0);
    }
}
