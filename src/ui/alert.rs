use eframe::egui::{Align2, Context, RichText, Vec2, Window};

use crate::app::App;
use crate::config::PLOT_CONFIG;
use crate::ui::UI_TEXT;

impl App {
    /// Modal failure dialog. Exactly one per failed fetch; stays up until
    /// the user dismisses it.
    pub(crate) fn render_alert(&mut self, ctx: &Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        Window::new(UI_TEXT.alert_title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new(message).color(PLOT_CONFIG.color_loss));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button(&UI_TEXT.btn_dismiss).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.alert = None;
        }
    }
}
