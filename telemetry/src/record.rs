use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::health::is_nominal;

/// A validated reading that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTelemetry {
    pub satellite_id: String,
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,  // degrees, [-90, 90]
    pub longitude: f64, // degrees, [-180, 180]
    pub altitude: f64,  // km, > 0
    pub battery_level: f64,   // percentage
    pub temperature: f64,     // degrees Celsius
    pub signal_strength: f64, // dBm
}

impl NewTelemetry {
    /// Health flag stored alongside the reading. Computed once, at insert,
    /// and never re-evaluated on read.
    pub fn is_healthy(&self) -> bool {
        is_nominal(self.battery_level, self.temperature, self.signal_strength)
    }
}

/// One stored telemetry snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub id: i64,
    pub satellite_id: String,
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub battery_level: f64,
    pub temperature: f64,
    pub signal_strength: f64,
    pub is_healthy: bool,
}
