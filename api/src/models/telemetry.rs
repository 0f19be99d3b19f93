use chrono::{DateTime, Utc};
use sqlx::FromRow;
use telemetry::TelemetryRecord;

/// Row of the `telemetry` table.
#[derive(Debug, Clone, FromRow)]
pub struct TelemetryRow {
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

impl From<TelemetryRow> for TelemetryRecord {
    fn from(row: TelemetryRow) -> Self {
        TelemetryRecord {
            id: row.id,
            satellite_id: row.satellite_id,
            timestamp: row.timestamp,
            latitude: row.latitude,
            longitude: row.longitude,
            altitude: row.altitude,
            battery_level: row.battery_level,
            temperature: row.temperature,
            signal_strength: row.signal_strength,
            is_healthy: row.is_healthy,
        }
    }
}

/// Result row of the per-satellite aggregate query.
#[derive(Debug, Clone, FromRow)]
pub struct AggregateRow {
    pub total_records: Option<i64>,
    pub avg_battery: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub min_altitude: Option<f64>,
    pub max_altitude: Option<f64>,
}

impl From<AggregateRow> for telemetry::Aggregate {
    fn from(row: AggregateRow) -> Self {
        telemetry::Aggregate {
            total_records: row.total_records,
            avg_battery: row.avg_battery,
            avg_temperature: row.avg_temperature,
            min_altitude: row.min_altitude,
            max_altitude: row.max_altitude,
        }
    }
}
