pub mod api;
pub mod satellite;
pub mod telemetry;
