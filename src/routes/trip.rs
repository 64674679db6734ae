use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::pipeline::{days, interpolate, mileage};
use crate::state::AppState;
use crate::trip_service;
use crate::types::trip::{TripRequest, TripResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/trip", post(plan_trip))
        .route("/api/trip/:trip_id", get(get_trip))
        .route("/api/trip/:trip_id/markers", get(get_markers))
}

#[derive(Serialize, Deserialize)]
pub struct TripResponse {
    pub trip_id: String,
    pub log_days: Vec<NaiveDate>,
    pub day_miles: Vec<f64>,
    pub trip: TripResult,
}

fn trip_response(trip_id: String, trip: TripResult) -> TripResponse {
    let log_days = days::unique_dates(&trip.timeline);
    let day_miles = log_days
        .iter()
        .map(|&day| mileage::day_miles(&trip.timeline, day, trip.distance_miles))
        .collect();
    TripResponse {
        trip_id,
        log_days,
        day_miles,
        trip,
    }
}

async fn plan_trip(
    State(state): State<AppState>,
    Json(req): Json<TripRequest>,
) -> Result<Json<TripResponse>, AppError> {
    for (field, value) in [
        ("current_location", &req.current_location),
        ("pickup_location", &req.pickup_location),
        ("dropoff_location", &req.dropoff_location),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }
    }
    if !req.current_cycle_used.is_finite() || req.current_cycle_used < 0.0 {
        return Err(AppError::BadRequest(
            "current_cycle_used must be a non-negative number".to_string(),
        ));
    }

    tracing::info!(
        "Planning trip {} -> {} -> {}",
        req.current_location,
        req.pickup_location,
        req.dropoff_location
    );

    let trip = trip_service::calculate_trip(&state.http, &state.trip_service_url, &req).await?;

    let trip_id = Uuid::new_v4().to_string();
    state.insert(trip_id.clone(), trip.clone());

    tracing::info!(
        "Cached trip {} ({:.1} mi, {} timeline entries)",
        trip_id,
        trip.distance_miles,
        trip.timeline.len()
    );

    Ok(Json(trip_response(trip_id, trip)))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<TripResponse>, AppError> {
    let trip = state
        .get(&trip_id)
        .ok_or_else(|| AppError::NotFound(trip_id.clone()))?;
    Ok(Json(trip_response(trip_id, trip)))
}

#[derive(Serialize, Deserialize)]
pub struct StopMarker {
    pub kind: String,
    pub status: String,
    pub lat: f64,
    pub lon: f64,
    pub mile_marker: f64,
    pub duration_minutes: f64,
}

fn marker_kind(status: &str) -> Option<&'static str> {
    if status.contains("10hr Rest") || status.contains("34hr Restart") {
        Some("rest")
    } else if status.contains("Fueling") {
        Some("fuel")
    } else if status.contains("30min Break") {
        Some("break")
    } else {
        None
    }
}

/// Geographic positions for the trip's rest/fuel/break events, interpolated
/// along the route polyline from their mile markers. Events the interpolator
/// declines (empty polyline, zero distance) are omitted rather than placed
/// at an undefined position.
async fn get_markers(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<StopMarker>>, AppError> {
    let trip = state
        .get(&trip_id)
        .ok_or_else(|| AppError::NotFound(trip_id.clone()))?;

    let markers = trip
        .timeline
        .iter()
        .filter_map(|entry| {
            let mile = entry.mile_marker?;
            let kind = marker_kind(&entry.status)?;
            let (lat, lon) =
                interpolate::point_at_mile(&trip.polyline, trip.distance_miles, mile)?;
            Some(StopMarker {
                kind: kind.to_string(),
                status: entry.status.clone(),
                lat,
                lon,
                mile_marker: mile,
                duration_minutes: entry.duration_minutes,
            })
        })
        .collect();

    Ok(Json(markers))
}
