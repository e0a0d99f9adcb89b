use serde::Deserialize;
use serde_json::Value;

use crate::config::FORECAST_API;
use crate::error::ForecastError;

/// One predicted day as the service reports it: a date label plus the
/// predicted value bracketed by its confidence bounds. The service does not
/// guarantee lower <= yhat <= upper and we do not check it.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub ds: String,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
}

/// Wire shape of one point. The numeric fields arrive either as JSON numbers
/// or as numeric strings depending on how the service serialized its frame,
/// so they are taken as raw values and coerced once, here.
#[derive(Deserialize)]
struct RawForecastPoint {
    ds: String,
    yhat: Value,
    yhat_lower: Value,
    yhat_upper: Value,
}

fn numeric_field(value: &Value, index: usize, field: &'static str) -> Result<f64, ForecastError> {
    let malformed = |reason: String| ForecastError::MalformedPoint {
        index,
        field,
        reason,
    };
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| malformed(format!("number {n} does not fit in f64"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| malformed(format!("'{s}': {e}"))),
        other => Err(malformed(format!("unexpected JSON type {other}"))),
    }
}

impl ForecastPoint {
    fn from_raw(raw: &RawForecastPoint, index: usize) -> Result<Self, ForecastError> {
        Ok(ForecastPoint {
            ds: raw.ds.clone(),
            yhat: numeric_field(&raw.yhat, index, "yhat")?,
            yhat_lower: numeric_field(&raw.yhat_lower, index, "yhat_lower")?,
            yhat_upper: numeric_field(&raw.yhat_upper, index, "yhat_upper")?,
        })
    }
}

/// Parse a raw response body into points, in the order the service sent them.
pub fn parse_forecast_body(body: &str) -> Result<Vec<ForecastPoint>, ForecastError> {
    let raw: Vec<RawForecastPoint> =
        serde_json::from_str(body).map_err(|e| ForecastError::MalformedBody {
            reason: e.to_string(),
        })?;
    raw.iter()
        .enumerate()
        .map(|(index, point)| ForecastPoint::from_raw(point, index))
        .collect()
}

/// Validate the user-entered horizon before anything hits the wire.
pub fn parse_horizon(input: &str) -> Result<u32, ForecastError> {
    let invalid = || ForecastError::InvalidHorizon {
        input: input.trim().to_string(),
    };
    let days = input.trim().parse::<u32>().map_err(|_| invalid())?;
    if days < FORECAST_API.horizon.min_days || days > FORECAST_API.horizon.max_days {
        return Err(invalid());
    }
    Ok(days)
}

/// The ordered forecast currently on screen. Replaced wholesale on every
/// successful fetch, never partially updated.
#[derive(Debug, Clone, Default)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn replace(&mut self, points: Vec<ForecastPoint>) {
        self.points = points;
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.ds.clone()).collect()
    }

    /// Min/max across all three value series, for plot bounds.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for p in &self.points {
            for v in [p.yhat, p.yhat_lower, p.yhat_upper] {
                range = Some(match range {
                    None => (v, v),
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                });
            }
        }
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_fields_given_as_numbers() {
        let body = r#"[{"ds":"2025-10-05","yhat":12.3,"yhat_lower":10.0,"yhat_upper":14.5}]"#;
        let points = parse_forecast_body(body).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].ds, "2025-10-05");
        assert_eq!(points[0].yhat, 12.3);
        assert_eq!(points[0].yhat_lower, 10.0);
        assert_eq!(points[0].yhat_upper, 14.5);
    }

    #[test]
    fn parses_numeric_fields_given_as_strings() {
        let body =
            r#"[{"ds":"2025-10-05","yhat":"12.30","yhat_lower":" 10 ","yhat_upper":"14.5"}]"#;
        let points = parse_forecast_body(body).unwrap();
        assert_eq!(points[0].yhat, 12.3);
        assert_eq!(points[0].yhat_lower, 10.0);
        assert_eq!(points[0].yhat_upper, 14.5);
    }

    #[test]
    fn preserves_source_order() {
        let body = r#"[
            {"ds":"2025-10-05","yhat":1,"yhat_lower":0,"yhat_upper":2},
            {"ds":"2025-10-06","yhat":2,"yhat_lower":1,"yhat_upper":3},
            {"ds":"2025-10-07","yhat":3,"yhat_lower":2,"yhat_upper":4}
        ]"#;
        let points = parse_forecast_body(body).unwrap();
        let labels: Vec<&str> = points.iter().map(|p| p.ds.as_str()).collect();
        assert_eq!(labels, ["2025-10-05", "2025-10-06", "2025-10-07"]);
    }

    #[test]
    fn empty_array_is_an_empty_forecast() {
        assert!(parse_forecast_body("[]").unwrap().is_empty());
    }

    #[test]
    fn non_numeric_string_reports_point_index_and_field() {
        let body = r#"[
            {"ds":"2025-10-05","yhat":1,"yhat_lower":0,"yhat_upper":2},
            {"ds":"2025-10-06","yhat":"soon","yhat_lower":1,"yhat_upper":3}
        ]"#;
        match parse_forecast_body(body) {
            Err(ForecastError::MalformedPoint { index, field, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "yhat");
            }
            other => panic!("expected MalformedPoint, got {other:?}"),
        }
    }

    #[test]
    fn wrong_json_type_is_a_malformed_point() {
        let body = r#"[{"ds":"2025-10-05","yhat":true,"yhat_lower":0,"yhat_upper":2}]"#;
        assert!(matches!(
            parse_forecast_body(body),
            Err(ForecastError::MalformedPoint { index: 0, field: "yhat", .. })
        ));
    }

    #[test]
    fn missing_field_is_a_malformed_body() {
        let body = r#"[{"ds":"2025-10-05","yhat":1.0}]"#;
        assert!(matches!(
            parse_forecast_body(body),
            Err(ForecastError::MalformedBody { .. })
        ));
    }

    #[test]
    fn non_array_body_is_malformed() {
        assert!(matches!(
            parse_forecast_body(r#"{"error":"Model not loaded on server"}"#),
            Err(ForecastError::MalformedBody { .. })
        ));
    }

    #[test]
    fn horizon_accepts_plain_positive_integers() {
        assert_eq!(parse_horizon("30").unwrap(), 30);
        assert_eq!(parse_horizon(" 1 ").unwrap(), 1);
        assert_eq!(parse_horizon("365").unwrap(), 365);
    }

    #[test]
    fn horizon_rejects_everything_else() {
        for bad in ["", "0", "-3", "abc", "3.5", "366", "30 days"] {
            assert!(
                matches!(parse_horizon(bad), Err(ForecastError::InvalidHorizon { .. })),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn value_range_spans_all_three_series() {
        let mut series = ForecastSeries::default();
        series.replace(vec![
            ForecastPoint {
                ds: "2025-10-05".into(),
                yhat: 12.0,
                yhat_lower: 9.5,
                yhat_upper: 14.0,
            },
            ForecastPoint {
                ds: "2025-10-06".into(),
                yhat: 13.0,
                yhat_lower: 11.0,
                yhat_upper: 16.5,
            },
        ]);
        assert_eq!(series.value_range(), Some((9.5, 16.5)));
    }

    #[test]
    fn value_range_of_empty_series_is_none() {
        assert_eq!(ForecastSeries::default().value_range(), None);
    }
}
