pub mod days;
pub mod interpolate;
pub mod mileage;
pub mod rasterize;
pub mod render;
pub mod segment;
