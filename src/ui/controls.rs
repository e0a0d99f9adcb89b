use eframe::egui::{Button, Context, Key, RichText, TextEdit, TopBottomPanel};

use crate::app::App;
use crate::ui::{UI_CONFIG, UI_TEXT};

impl App {
    pub(crate) fn render_controls_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("controls_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                    ui.separator();

                    ui.label(&UI_TEXT.label_horizon);
                    let field = ui.add(
                        TextEdit::singleline(&mut self.horizon_text)
                            .desired_width(56.0)
                            .hint_text(&UI_TEXT.hint_horizon),
                    );

                    let in_flight = self.request.is_in_flight();
                    let caption = if in_flight {
                        &UI_TEXT.btn_loading
                    } else {
                        &UI_TEXT.btn_get_forecast
                    };
                    let clicked = ui.add_enabled(!in_flight, Button::new(caption)).clicked();
                    let entered =
                        field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                    if clicked || entered {
                        self.trigger_forecast();
                    }

                    if in_flight {
                        ui.spinner();
                    }
                });
            });
    }
}
