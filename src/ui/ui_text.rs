use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,
    pub label_horizon: String,
    pub hint_horizon: String,
    pub btn_get_forecast: String,
    pub btn_loading: String,
    pub btn_dismiss: String,
    pub alert_title: String,
    pub hint_no_data: String,

    // --- TABLE HEADERS ---
    pub th_date: String,
    pub th_predicted: String,
    pub th_lower: String,
    pub th_upper: String,

    // --- PLOT LABELS ---
    pub legend_predicted: String,
    pub legend_band: String,
    pub plot_x_axis: String,
    pub plot_y_axis: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Potato Price Forecast".to_string(),
    label_horizon: "Days to predict:".to_string(),
    hint_horizon: "e.g. 30".to_string(),
    btn_get_forecast: "Get Forecast".to_string(),
    btn_loading: "Loading...".to_string(),
    btn_dismiss: "Dismiss".to_string(),
    alert_title: "Forecast failed".to_string(),
    hint_no_data: "No forecast yet. Enter a horizon and press Get Forecast.".to_string(),

    th_date: "Date".to_string(),
    th_predicted: "Predicted".to_string(),
    th_lower: "Lower".to_string(),
    th_upper: "Upper".to_string(),

    legend_predicted: "Predicted Price".to_string(),
    legend_band: "Confidence Band".to_string(),
    plot_x_axis: "Date".to_string(),
    plot_y_axis: "Price".to_string(),
});
