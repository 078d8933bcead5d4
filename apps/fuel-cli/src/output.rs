//! Turning API replies into terminal output.
//!
//! ```text
//! action (add/update/delete)   list/get            stats
//! ──────────────────────────   ────────            ─────
//! SUCCESS: <message>           pretty JSON of      Total fuel: 70.5 L
//! ERROR: <message>             the `data` field    Total cost: 116.33
//!                                                  Average consumption: 7.8 L/100km
//! ```
//!
//! Failures always render as `ERROR: <message>`, falling back to
//! `ERROR: HTTP <status>` when the body carries no message.

use fuel_core::FuelStats;
use serde_json::Value;

use crate::client::Reply;

/// Rendered output: stdout text on success, stderr text on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Success(String),
    Failure(String),
}

impl Output {
    pub fn print(&self) {
        match self {
            Output::Success(text) => println!("{}", text),
            Output::Failure(text) => eprintln!("{}", text),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Output::Failure(_))
    }
}

/// Create, update and delete results.
pub fn render_action(reply: &Reply) -> Output {
    if !reply.is_success() {
        return failure(reply);
    }
    match reply.body.get("message").and_then(Value::as_str) {
        Some(message) if !message.trim().is_empty() => {
            Output::Success(format!("SUCCESS: {}", message))
        }
        _ => Output::Success("SUCCESS".to_string()),
    }
}

/// List and get results: the `data` field, pretty-printed.
pub fn render_data(reply: &Reply) -> Output {
    if !reply.is_success() {
        return failure(reply);
    }
    let data = reply.body.get("data").unwrap_or(&reply.body);
    match serde_json::to_string_pretty(data) {
        Ok(text) => Output::Success(text),
        Err(e) => Output::Failure(format!("ERROR: {}", e)),
    }
}

/// Consumption statistics as three text lines.
pub fn render_stats(reply: &Reply) -> Output {
    if !reply.is_success() {
        return failure(reply);
    }
    let stats = reply
        .body
        .get("data")
        .cloned()
        .and_then(|data| serde_json::from_value::<FuelStats>(data).ok());

    match stats {
        Some(stats) => Output::Success(format!(
            "Total fuel: {} L\nTotal cost: {:.2}\nAverage consumption: {:.1} L/100km",
            format_liters(stats.total_liters),
            stats.total_price,
            stats.avg_per_100km
        )),
        None => render_data(reply),
    }
}

/// Liters without trailing zeros: `70`, `70.5`, `70.25`.
pub fn format_liters(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        return format!("{:.0}", value);
    }
    let text = format!("{:.10}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn failure(reply: &Reply) -> Output {
    let message = reply
        .body
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str);

    match message {
        Some(message) => Output::Failure(format!("ERROR: {}", message)),
        None => Output::Failure(format!("ERROR: HTTP {}", reply.status.as_u16())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    fn reply(status: StatusCode, body: Value) -> Reply {
        Reply { status, body }
    }

    #[test]
    fn test_action_output() {
        let ok = reply(
            StatusCode::OK,
            json!({ "success": true, "message": "Vehicle with ID 3 has been successfully deleted" }),
        );
        assert_eq!(
            render_action(&ok),
            Output::Success("SUCCESS: Vehicle with ID 3 has been successfully deleted".into())
        );

        let bare = reply(StatusCode::CREATED, json!({ "success": true, "data": {} }));
        assert_eq!(render_action(&bare), Output::Success("SUCCESS".into()));

        let err = reply(
            StatusCode::BAD_REQUEST,
            json!({ "success": false, "error": { "code": "INVALID_ODOMETER",
                "message": "Odometer cannot decrease. Maximum odometer: 500, New: 400" } }),
        );
        let out = render_action(&err);
        assert!(out.is_failure());
        assert_eq!(
            out,
            Output::Failure(
                "ERROR: Odometer cannot decrease. Maximum odometer: 500, New: 400".into()
            )
        );

        let opaque = reply(StatusCode::BAD_GATEWAY, Value::Null);
        assert_eq!(render_action(&opaque), Output::Failure("ERROR: HTTP 502".into()));
    }

    #[test]
    fn test_data_output_unwraps_envelope() {
        let ok = reply(
            StatusCode::OK,
            json!({ "success": true, "data": [{ "id": 1, "brand": "Toyota" }] }),
        );
        let Output::Success(text) = render_data(&ok) else {
            panic!("expected success");
        };
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, json!([{ "id": 1, "brand": "Toyota" }]));
    }

    #[test]
    fn test_stats_output() {
        let ok = reply(
            StatusCode::OK,
            json!({ "success": true,
                "data": { "totalLiters": 70.5, "totalPrice": 116.326, "avgPer100km": 7.84 } }),
        );
        assert_eq!(
            render_stats(&ok),
            Output::Success(
                "Total fuel: 70.5 L\nTotal cost: 116.33\nAverage consumption: 7.8 L/100km".into()
            )
        );

        let missing = reply(
            StatusCode::NOT_FOUND,
            json!({ "success": false, "error": { "code": "NOT_FOUND",
                "message": "Vehicle with ID 9 not found" } }),
        );
        assert_eq!(
            render_stats(&missing),
            Output::Failure("ERROR: Vehicle with ID 9 not found".into())
        );
    }

    #[test]
    fn test_format_liters() {
        assert_eq!(format_liters(70.0), "70");
        assert_eq!(format_liters(0.0), "0");
        assert_eq!(format_liters(70.5), "70.5");
        assert_eq!(format_liters(12.25), "12.25");
        assert_eq!(format_liters(1e20), "100000000000000000000");
    }
}
