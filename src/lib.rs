pub mod config;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod trip_service;
pub mod types;
