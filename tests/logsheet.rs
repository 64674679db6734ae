use axum::{body::to_bytes, http::Request, Router};
use chrono::NaiveDateTime;
use serde_json::Value;
use tower::ServiceExt;
use triplog_rs::{
    config::Config,
    routes,
    state::AppState,
    types::trip::{DutyStatusEntry, LocationInfo, TripResult},
};

fn entry(status: &str, start: &str, end: &str, mile_marker: Option<f64>, is_driving: bool) -> DutyStatusEntry {
    let start: NaiveDateTime = start.parse().expect("start");
    let end: NaiveDateTime = end.parse().expect("end");
    DutyStatusEntry {
        status: status.to_string(),
        start,
        end,
        duration_minutes: (end - start).num_seconds() as f64 / 60.0,
        mile_marker,
        is_driving,
    }
}

fn sample_trip() -> TripResult {
    TripResult {
        timeline: vec![
            entry("On-Duty (Pickup)", "2025-03-01T08:00:00", "2025-03-01T09:00:00", Some(0.0), false),
            entry("Driving", "2025-03-01T09:00:00", "2025-03-01T17:00:00", Some(0.0), true),
            entry("Off-Duty (30min Break)", "2025-03-01T17:00:00", "2025-03-01T17:30:00", Some(440.0), false),
            entry("Driving", "2025-03-01T17:30:00", "2025-03-01T20:30:00", Some(440.0), true),
            entry("Off-Duty (10hr Rest)", "2025-03-01T20:30:00", "2025-03-02T06:30:00", Some(605.0), false),
            entry("Driving", "2025-03-02T06:30:00", "2025-03-02T09:30:00", Some(605.0), true),
            entry("On-Duty (Drop-off)", "2025-03-02T09:30:00", "2025-03-02T10:30:00", Some(770.0), false),
        ],
        distance_miles: 770.0,
        polyline: vec![(41.88, -87.63), (38.63, -90.20), (32.78, -96.80)],
        origin: LocationInfo { lat: 41.88, lon: -87.63, label: "Chicago, IL".to_string() },
        pickup: LocationInfo { lat: 38.63, lon: -90.20, label: "St. Louis, MO".to_string() },
        dropoff: LocationInfo { lat: 32.78, lon: -96.80, label: "Dallas, TX".to_string() },
    }
}

fn app_with_trip(trip_id: &str) -> Router {
    let config = Config::from_env();
    let state = AppState::new(&config);
    state.insert(trip_id.to_string(), sample_trip());
    Router::new()
        .merge(routes::health::router())
        .merge(routes::trip::router())
        .merge(routes::logsheet::router())
        .with_state(state)
}

async fn get(app: Router, uri: &str) -> axum::http::Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .method("GET")
            .body(axum::body::Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

#[tokio::test]
async fn logsheet_returns_named_png() {
    let response = get(app_with_trip("t1"), "/api/trip/t1/logsheet/2025-03-01").await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(content_type, "image/png");

    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(disposition.contains("2025-03-01-Sheet1.png"));

    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn second_day_gets_second_sheet_number() {
    let response = get(app_with_trip("t1"), "/api/trip/t1/logsheet/2025-03-02").await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(disposition.contains("2025-03-02-Sheet2.png"));
}

#[tokio::test]
async fn identical_requests_produce_identical_bytes() {
    let first = get(app_with_trip("t1"), "/api/trip/t1/logsheet/2025-03-01").await;
    let second = get(app_with_trip("t1"), "/api/trip/t1/logsheet/2025-03-01").await;
    let first_bytes = to_bytes(first.into_body(), usize::MAX).await.expect("first");
    let second_bytes = to_bytes(second.into_body(), usize::MAX).await.expect("second");
    assert_eq!(first_bytes, second_bytes);
}

#[tokio::test]
async fn date_outside_trip_is_rejected() {
    let response = get(app_with_trip("t1"), "/api/trip/t1/logsheet/2025-04-01").await;
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_trip_is_not_found() {
    let response = get(app_with_trip("t1"), "/api/trip/nope/logsheet/2025-03-01").await;
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn markers_are_interpolated_for_stop_events() {
    let response = get(app_with_trip("t1"), "/api/trip/t1/markers").await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let markers: Value = serde_json::from_slice(&body).expect("json");
    let markers = markers.as_array().expect("array");

    // Only the break and the rest qualify as map markers.
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0]["kind"], "break");
    assert_eq!(markers[1]["kind"], "rest");
    for marker in markers {
        assert!(marker["lat"].as_f64().is_some());
        assert!(marker["lon"].as_f64().is_some());
    }
}

#[tokio::test]
async fn trip_lookup_reports_log_days_and_day_miles() {
    let response = get(app_with_trip("t1"), "/api/trip/t1").await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json");

    let log_days = json["log_days"].as_array().expect("log_days");
    assert_eq!(log_days.len(), 2);
    assert_eq!(log_days[0], "2025-03-01");
    assert_eq!(log_days[1], "2025-03-02");

    let day_miles = json["day_miles"].as_array().expect("day_miles");
    let total: f64 = day_miles.iter().filter_map(Value::as_f64).sum();
    assert!((total - 770.0).abs() < 1e-6);
}
