use chrono::{DateTime, Utc};
use serde::Serialize;
use telemetry::{HealthReport, HealthStatus, SatelliteStats, TelemetryRecord};
use utoipa::ToSchema;

#[derive(ToSchema, Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryResponse {
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

impl From<TelemetryRecord> for TelemetryResponse {
    fn from(record: TelemetryRecord) -> Self {
        TelemetryResponse {
            id: record.id,
            satellite_id: record.satellite_id,
            timestamp: record.timestamp,
            latitude: record.latitude,
            longitude: record.longitude,
            altitude: record.altitude,
            battery_level: record.battery_level,
            temperature: record.temperature,
            signal_strength: record.signal_strength,
            is_healthy: record.is_healthy,
        }
    }
}

#[derive(ToSchema, Debug, Serialize)]
pub struct HealthStatusResponse {
    pub satellite_id: String,
    /// One of `unknown`, `stale`, `healthy`, `warning`.
    #[schema(value_type = String, example = "healthy")]
    pub status: HealthStatus,
    pub latest_telemetry: Option<TelemetryResponse>,
    pub message: String,
}

impl HealthStatusResponse {
    pub fn new(satellite_id: String, report: HealthReport, latest: Option<TelemetryRecord>) -> Self {
        HealthStatusResponse {
            satellite_id,
            status: report.status,
            latest_telemetry: latest.map(TelemetryResponse::from),
            message: report.message,
        }
    }
}

#[derive(ToSchema, Debug, Serialize)]
pub struct StatsResponse {
    pub satellite_id: String,
    pub total_records: i64,
    pub avg_battery: f64,
    pub avg_temperature: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
}

impl From<SatelliteStats> for StatsResponse {
    fn from(stats: SatelliteStats) -> Self {
        StatsResponse {
            satellite_id: stats.satellite_id,
            total_records: stats.total_records,
            avg_battery: stats.avg_battery,
            avg_temperature: stats.avg_temperature,
            min_altitude: stats.min_altitude,
            max_altitude: stats.max_altitude,
        }
    }
}

#[derive(ToSchema, Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub docs: String,
    pub version: String,
}

#[derive(ToSchema, Debug, Serialize)]
pub struct LivenessResponse {
    pub status: String,
    pub service: String,
}
