use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One interval of the externally computed duty schedule. Timestamps are
/// naive local ISO-8601 as the trip service emits them; `duration_minutes`
/// is informational and is not re-derived here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyStatusEntry {
    pub status: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: f64,
    #[serde(default)]
    pub mile_marker: Option<f64>,
    #[serde(default)]
    pub is_driving: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

/// Full response of the trip computation service: the duty timeline, the
/// authoritative route distance and the route polyline as (lat, lon) pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripResult {
    pub timeline: Vec<DutyStatusEntry>,
    pub distance_miles: f64,
    pub polyline: Vec<(f64, f64)>,
    pub origin: LocationInfo,
    pub pickup: LocationInfo,
    pub dropoff: LocationInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    #[serde(default)]
    pub current_cycle_used: f64,
}
