//! Satellite telemetry domain: records, the insert-time health rule,
//! health classification of the latest reading and per-satellite statistics.

pub mod health;
pub mod record;
pub mod stats;

pub use health::{HealthReport, HealthStatus, Issue, classify, detected_issues, is_nominal};
pub use record::{NewTelemetry, TelemetryRecord};
pub use stats::{Aggregate, SatelliteStats};
