mod alert;
mod controls;
mod forecast_plot;
mod forecast_table;
mod ui_config;
mod ui_text;

pub(crate) use forecast_plot::show_forecast_plot;
pub(crate) use forecast_table::show_forecast_table;
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
