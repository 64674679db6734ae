use crate::types::trip::TripResult;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct AppState {
    trips: Arc<DashMap<String, CachedTrip>>,
    pub http: reqwest::Client,
    pub trip_service_url: Arc<str>,
}

struct CachedTrip {
    trip: TripResult,
    inserted_at: Instant,
}

impl AppState {
    pub fn new(config: &crate::config::Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.trip_service_timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            trips: Arc::new(DashMap::new()),
            http,
            trip_service_url: Arc::from(config.trip_service_url.as_str()),
        }
    }

    pub fn insert(&self, trip_id: String, trip: TripResult) {
        self.trips.insert(
            trip_id,
            CachedTrip {
                trip,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn get(&self, trip_id: &str) -> Option<TripResult> {
        self.trips.get(trip_id).map(|entry| entry.trip.clone())
    }

    pub fn evict_expired(&self, ttl: Duration) {
        let now = Instant::now();
        self.trips
            .retain(|_, cached| now.duration_since(cached.inserted_at) < ttl);
        tracing::info!("Trip cache eviction complete. Current size: {}", self.trips.len());
    }
}
