use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::models::ForecastSeries;
use crate::ui::UI_TEXT;

/// Every numeric cell is shown with exactly two decimal places.
pub(crate) fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

pub(crate) fn show_forecast_table(ui: &mut Ui, series: &ForecastSeries) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(96.0))
        .columns(Column::remainder(), 3)
        .header(20.0, |mut header| {
            for title in [
                &UI_TEXT.th_date,
                &UI_TEXT.th_predicted,
                &UI_TEXT.th_lower,
                &UI_TEXT.th_upper,
            ] {
                header.col(|ui| {
                    ui.strong(title.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, series.len(), |mut row| {
                let point = &series.points()[row.index()];
                row.col(|ui| {
                    ui.label(&point.ds);
                });
                row.col(|ui| {
                    ui.label(format_value(point.yhat));
                });
                row.col(|ui| {
                    ui.label(format_value(point.yhat_lower));
                });
                row.col(|ui| {
                    ui.label(format_value(point.yhat_upper));
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_whole_numbers_to_two_decimals() {
        assert_eq!(format_value(12.0), "12.00");
        assert_eq!(format_value(0.0), "0.00");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_value(12.345), "12.35");
        assert_eq!(format_value(9.999), "10.00");
        assert_eq!(format_value(-1.234), "-1.23");
    }
}
