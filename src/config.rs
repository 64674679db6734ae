use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub trip_service_url: String,
    pub trip_service_timeout: Duration,
    pub cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let trip_service_url = std::env::var("TRIP_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let trip_service_timeout_seconds = std::env::var("TRIP_SERVICE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(45);

        let cache_ttl_seconds = std::env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600);

        Self {
            port,
            trip_service_url,
            trip_service_timeout: Duration::from_secs(trip_service_timeout_seconds),
            cache_ttl: Duration::from_secs(cache_ttl_seconds),
        }
    }
}
