use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, RichText, TopBottomPanel, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::sync::{
        mpsc,
        mpsc::{Receiver, Sender},
    },
};

use crate::{
    Cli,
    app::{FetchOutcome, RequestState},
    config::{FORECAST_API, PLOT_CONFIG},
    data::{HttpForecastSource, spawn_fetch},
    models::{ForecastSeries, parse_horizon},
    ui::{UI_CONFIG, UI_TEXT, show_forecast_plot, show_forecast_table},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    /// Raw horizon input, persisted across sessions.
    pub(crate) horizon_text: String,
    #[serde(skip)]
    pub(crate) series: ForecastSeries,
    #[serde(skip)]
    pub(crate) request: RequestState,
    /// Pending failure message; shown as a modal alert until dismissed.
    #[serde(skip)]
    pub(crate) alert: Option<String>,
    #[serde(skip)]
    pub(crate) endpoint: String,
    #[serde(skip)]
    outcome_tx: Option<Sender<FetchOutcome>>,
    #[serde(skip)]
    outcome_rx: Option<Receiver<FetchOutcome>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            horizon_text: "30".to_string(),
            series: ForecastSeries::default(),
            request: RequestState::default(),
            alert: None,
            endpoint: FORECAST_API.endpoint.to_string(),
            outcome_tx: None,
            outcome_rx: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.endpoint = args.endpoint;

        let (outcome_tx, outcome_rx) = mpsc::channel();
        app.outcome_tx = Some(outcome_tx);
        app.outcome_rx = Some(outcome_rx);

        app
    }

    /// Validate the horizon and start a background fetch. A trigger while a
    /// request is outstanding is ignored; the button is disabled anyway, but
    /// the Enter key path lands here too.
    pub(crate) fn trigger_forecast(&mut self) {
        if self.request.is_in_flight() {
            return;
        }

        let horizon_days = match parse_horizon(&self.horizon_text) {
            Ok(days) => days,
            Err(err) => {
                log::warn!("rejected horizon input: {err}");
                self.alert = Some(err.to_string());
                return;
            }
        };

        let Some(tx) = self.outcome_tx.clone() else {
            log::error!("fetch channel not initialized; cannot request forecast");
            return;
        };

        let generation = self.request.begin();
        let source = HttpForecastSource::new(self.endpoint.clone());
        spawn_fetch(source, generation, horizon_days, tx);
    }

    /// Drain settled fetches delivered since the last frame.
    fn poll_outcomes(&mut self) {
        loop {
            let outcome = match &self.outcome_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(outcome) => outcome,
                    Err(_) => return,
                },
                None => return,
            };
            self.apply_outcome(outcome);
        }
    }

    pub(crate) fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if !self.request.try_settle(outcome.generation) {
            log::info!("dropping forecast response from superseded request");
            return;
        }
        match outcome.result {
            Ok(points) => {
                log::info!("forecast updated: {} points", points.len());
                self.series.replace(points);
            }
            Err(err) => {
                // Prior series stays on screen untouched.
                log::warn!("forecast fetch failed: {err}");
                self.alert = Some(err.to_string());
            }
        }
    }

    fn render_results(&mut self, ctx: &Context) {
        if !self.series.is_empty() {
            TopBottomPanel::bottom("forecast_table_panel")
                .frame(UI_CONFIG.bottom_panel_frame())
                .resizable(true)
                .default_height(240.0)
                .show(ctx, |ui| {
                    show_forecast_table(ui, &self.series);
                });
        }

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                if self.series.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new(&UI_TEXT.hint_no_data)
                                .color(PLOT_CONFIG.color_text_subdued),
                        );
                    });
                } else {
                    show_forecast_plot(ui, &self.series);
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.poll_outcomes();
        self.render_controls_panel(ctx);
        self.render_results(ctx);
        self.render_alert(ctx);
        if self.request.is_in_flight() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
