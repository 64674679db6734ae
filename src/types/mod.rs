pub mod log;
pub mod trip;
