use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::NaiveDate;

use crate::error::AppError;
use crate::pipeline::{days, mileage, rasterize, render};
use crate::state::AppState;
use crate::types::log::{LogSheet, OutputConfig};

// Carrier metadata printed on every sheet. The trip service has no notion
// of carrier identity, so these stand in for a driver profile.
const CARRIER: &str = "Spotter Logistics Inc.";
const MAIN_OFFICE: &str = "123 Logistics Blvd, Chicago, IL 60601";
const HOME_TERMINAL: &str = "456 Depot St, Chicago, IL 60602";
const TRUCK_NUMBER: &str = "TRK-2026-001";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/trip/:trip_id/logsheet/:date", get(logsheet))
}

async fn logsheet(
    State(state): State<AppState>,
    Path((trip_id, date)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let trip = state
        .get(&trip_id)
        .ok_or_else(|| AppError::NotFound(trip_id.clone()))?;

    let date: NaiveDate = date
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {}", date)))?;

    let log_days = days::unique_dates(&trip.timeline);
    let sheet_index = log_days
        .iter()
        .position(|&d| d == date)
        .ok_or_else(|| {
            AppError::BadRequest(format!("Date {} is not part of trip {}", date, trip_id))
        })?;

    let sheet = LogSheet {
        date,
        timeline: &trip.timeline,
        total_miles: trip.distance_miles,
        day_miles: mileage::day_miles(&trip.timeline, date, trip.distance_miles),
        carrier: CARRIER,
        main_office: MAIN_OFFICE,
        home_terminal: HOME_TERMINAL,
        truck_number: TRUCK_NUMBER,
        from_location: &trip.origin.label,
        to_location: &trip.dropoff.label,
        sheet_number: sheet_index + 1,
        total_sheets: log_days.len(),
    };

    tracing::info!(
        "Rendering log sheet {}/{} for trip {} ({})",
        sheet.sheet_number,
        sheet.total_sheets,
        trip_id,
        date
    );

    let svg = render::log_sheet_svg(&sheet)?;
    let png = rasterize::rasterize(
        &svg,
        &OutputConfig {
            width: render::SHEET_WIDTH,
            height: render::SHEET_HEIGHT,
            background: Some((255, 255, 255, 255)),
        },
    )?;

    let filename = format!("{}-Sheet{}.png", date, sheet.sheet_number);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", filename),
            ),
        ],
        png,
    ))
}
