use serde::{Deserialize, Serialize};

/// Raw aggregate over one satellite's rows. Averages and extremes are
/// `None` when the satellite has no rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    pub total_records: Option<i64>,
    pub avg_battery: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub min_altitude: Option<f64>,
    pub max_altitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteStats {
    pub satellite_id: String,
    pub total_records: i64,
    pub avg_battery: f64,
    pub avg_temperature: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
}

impl SatelliteStats {
    /// Rounds every figure to two decimals and reports missing values as 0.
    pub fn from_aggregate(satellite_id: impl Into<String>, aggregate: Aggregate) -> Self {
        Self {
            satellite_id: satellite_id.into(),
            total_records: aggregate.total_records.unwrap_or(0),
            avg_battery: round_or_zero(aggregate.avg_battery),
            avg_temperature: round_or_zero(aggregate.avg_temperature),
            min_altitude: round_or_zero(aggregate.min_altitude),
            max_altitude: round_or_zero(aggregate.max_altitude),
        }
    }
}

fn round_or_zero(value: Option<f64>) -> f64 {
    value.map(round2).unwrap_or(0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
