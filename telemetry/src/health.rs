use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::record::TelemetryRecord;

/// A satellite whose latest reading is at least this old is reported stale.
pub const STALE_AFTER_MINUTES: i64 = 5;

const MIN_BATTERY_LEVEL: f64 = 20.0;
const MIN_TEMPERATURE: f64 = -10.0;
const MAX_TEMPERATURE: f64 = 50.0;
const MIN_SIGNAL_STRENGTH: f64 = -90.0;

/// Insert-time health rule.
///
/// Battery and signal must be strictly above their floors, temperature must
/// fall inside the closed operating range.
pub fn is_nominal(battery_level: f64, temperature: f64, signal_strength: f64) -> bool {
    battery_level > MIN_BATTERY_LEVEL
        && (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature)
        && signal_strength > MIN_SIGNAL_STRENGTH
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Unknown,
    Stale,
    Healthy,
    Warning,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Unknown => write!(f, "unknown"),
            HealthStatus::Stale => write!(f, "stale"),
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Warning => write!(f, "warning"),
        }
    }
}

/// A threshold violation found on a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    LowBattery,
    TemperatureOutOfRange,
    WeakSignal,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::LowBattery => write!(f, "low battery"),
            Issue::TemperatureOutOfRange => write!(f, "temperature out of range"),
            Issue::WeakSignal => write!(f, "weak signal"),
        }
    }
}

/// Lists the violated thresholds of a reading, in battery, temperature,
/// signal order.
///
/// Battery and signal are checked with `<=` here while [`is_nominal`] uses a
/// strict `>`, so a reading sitting exactly on a floor is flagged by both.
pub fn detected_issues(record: &TelemetryRecord) -> Vec<Issue> {
    let mut issues = Vec::new();

    if record.battery_level <= MIN_BATTERY_LEVEL {
        issues.push(Issue::LowBattery);
    }
    if record.temperature < MIN_TEMPERATURE || record.temperature > MAX_TEMPERATURE {
        issues.push(Issue::TemperatureOutOfRange);
    }
    if record.signal_strength <= MIN_SIGNAL_STRENGTH {
        issues.push(Issue::WeakSignal);
    }

    issues
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub message: String,
}

impl HealthReport {
    fn new(status: HealthStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Classifies a satellite from its most recent reading.
///
/// Age wins over thresholds: a stale reading is reported stale even when it
/// was unhealthy. The stored `is_healthy` flag decides between healthy and
/// warning, it is not recomputed.
pub fn classify(latest: Option<&TelemetryRecord>, now: DateTime<Utc>) -> HealthReport {
    let Some(latest) = latest else {
        return HealthReport::new(HealthStatus::Unknown, "No telemetry data available");
    };

    let elapsed = now - latest.timestamp;
    if elapsed >= Duration::minutes(STALE_AFTER_MINUTES) {
        let minutes = elapsed.num_seconds().div_euclid(60);
        return HealthReport::new(
            HealthStatus::Stale,
            format!("Last contact {} minutes ago", minutes),
        );
    }

    if latest.is_healthy {
        return HealthReport::new(HealthStatus::Healthy, "All systems nominal");
    }

    let issues = detected_issues(latest)
        .iter()
        .map(Issue::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    HealthReport::new(
        HealthStatus::Warning,
        format!("Issues detected: {}", issues),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 19, 12, 0, 0).unwrap()
    }

    fn record_at(
        timestamp: DateTime<Utc>,
        battery_level: f64,
        temperature: f64,
        signal_strength: f64,
    ) -> TelemetryRecord {
        TelemetryRecord {
            id: 1,
            satellite_id: "SAT-001".to_string(),
            timestamp,
            latitude: 43.6532,
            longitude: -79.3832,
            altitude: 550.5,
            battery_level,
            temperature,
            signal_strength,
            is_healthy: is_nominal(battery_level, temperature, signal_strength),
        }
    }

    #[test]
    fn test_no_record_is_unknown() {
        let report = classify(None, now());

        assert_eq!(report.status, HealthStatus::Unknown);
        assert_eq!(report.message, "No telemetry data available");
    }

    #[test]
    fn test_recent_healthy_record() {
        let record = record_at(now() - Duration::seconds(30), 87.5, 22.3, -65.2);
        let report = classify(Some(&record), now());

        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.message, "All systems nominal");
    }

    #[test]
    fn test_low_battery_warning() {
        let record = record_at(now() - Duration::minutes(1), 15.0, 22.3, -65.2);
        let report = classify(Some(&record), now());

        assert_eq!(report.status, HealthStatus::Warning);
        assert_eq!(report.message, "Issues detected: low battery");
    }

    #[test]
    fn test_warning_lists_all_issues_in_order() {
        let record = record_at(now(), 5.0, 71.0, -120.0);
        let report = classify(Some(&record), now());

        assert_eq!(report.status, HealthStatus::Warning);
        assert_eq!(
            report.message,
            "Issues detected: low battery, temperature out of range, weak signal"
        );
    }

    #[test]
    fn test_cold_and_weak_signal_warning() {
        let record = record_at(now(), 60.0, -25.0, -90.0);
        let report = classify(Some(&record), now());

        assert_eq!(
            report.message,
            "Issues detected: temperature out of range, weak signal"
        );
    }

    #[test]
    fn test_stale_at_exactly_five_minutes() {
        let record = record_at(now() - Duration::minutes(5), 87.5, 22.3, -65.2);
        let report = classify(Some(&record), now());

        assert_eq!(report.status, HealthStatus::Stale);
        assert_eq!(report.message, "Last contact 5 minutes ago");
    }

    #[test]
    fn test_just_under_five_minutes_is_not_stale() {
        let record = record_at(
            now() - Duration::minutes(5) + Duration::milliseconds(1),
            87.5,
            22.3,
            -65.2,
        );

        assert_eq!(classify(Some(&record), now()).status, HealthStatus::Healthy);
    }

    #[test]
    fn test_stale_minutes_are_floored() {
        let record = record_at(now() - Duration::seconds(17 * 60 + 59), 15.0, 22.3, -65.2);
        let report = classify(Some(&record), now());

        // age beats thresholds
        assert_eq!(report.status, HealthStatus::Stale);
        assert_eq!(report.message, "Last contact 17 minutes ago");
    }

    #[test]
    fn test_stale_counts_whole_elapsed_time() {
        let record = record_at(now() - Duration::hours(26), 87.5, 22.3, -65.2);
        let report = classify(Some(&record), now());

        assert_eq!(report.message, "Last contact 1560 minutes ago");
    }

    #[test]
    fn test_stored_flag_is_not_recomputed() {
        let mut record = record_at(now(), 87.5, 22.3, -65.2);
        record.is_healthy = false;

        // Flag says unhealthy but no threshold is violated any more.
        let report = classify(Some(&record), now());
        assert_eq!(report.status, HealthStatus::Warning);
        assert_eq!(report.message, "Issues detected: ");
    }

    #[test]
    fn test_status_displays_lowercase() {
        assert_eq!(HealthStatus::Stale.to_string(), "stale");
        assert_eq!(HealthStatus::Warning.to_string(), "warning");
    }
}
