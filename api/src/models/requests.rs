use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use telemetry::NewTelemetry;
use utoipa::{IntoParams, ToSchema};

use crate::error::FieldError;

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 1000;

/// Payload of `POST /telemetry`.
#[derive(ToSchema, Debug, Clone)]
pub struct TelemetryCreateRequest {
    #[schema(example = "SAT-001")]
    pub satellite_id: String,
    /// Reading time. The server's current time is used when omitted.
    #[schema(example = "2025-09-19T12:00:00Z")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Degrees, between -90 and 90.
    #[schema(example = 43.6532)]
    pub latitude: f64,
    /// Degrees, between -180 and 180.
    #[schema(example = json!(-79.3832))]
    pub longitude: f64,
    /// Kilometres above the surface, strictly positive.
    #[schema(example = 550.5)]
    pub altitude: f64,
    /// Percentage, between 0 and 100.
    #[schema(example = 87.5)]
    pub battery_level: f64,
    /// Degrees Celsius.
    #[schema(example = 22.3)]
    pub temperature: f64,
    /// dBm.
    #[schema(example = json!(-65.2))]
    pub signal_strength: f64,
}

impl TelemetryCreateRequest {
    /// Reads a request body field by field. Missing, mistyped and
    /// out-of-range fields are all reported, each under `["body", <field>]`.
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError::new(
                &["body"],
                "Input should be a valid dictionary or object",
                "model_attributes_type",
            )]);
        };
        let mut errors = Vec::new();

        let satellite_id = read_string(object, "satellite_id", &mut errors);
        if let Some(satellite_id) = &satellite_id {
            check_satellite_id(&mut errors, satellite_id);
        }
        let timestamp = read_timestamp(object, &mut errors);
        let latitude = read_number(object, "latitude", &mut errors);
        if let Some(latitude) = latitude {
            check_range(&mut errors, "latitude", latitude, -90.0, 90.0);
        }
        let longitude = read_number(object, "longitude", &mut errors);
        if let Some(longitude) = longitude {
            check_range(&mut errors, "longitude", longitude, -180.0, 180.0);
        }
        let altitude = read_number(object, "altitude", &mut errors);
        if let Some(altitude) = altitude {
            check_altitude(&mut errors, altitude);
        }
        let battery_level = read_number(object, "battery_level", &mut errors);
        if let Some(battery_level) = battery_level {
            check_range(&mut errors, "battery_level", battery_level, 0.0, 100.0);
        }
        let temperature = read_number(object, "temperature", &mut errors);
        let signal_strength = read_number(object, "signal_strength", &mut errors);

        match (
            satellite_id,
            timestamp,
            latitude,
            longitude,
            altitude,
            battery_level,
            temperature,
            signal_strength,
        ) {
            (
                Some(satellite_id),
                Some(timestamp),
                Some(latitude),
                Some(longitude),
                Some(altitude),
                Some(battery_level),
                Some(temperature),
                Some(signal_strength),
            ) if errors.is_empty() => Ok(Self {
                satellite_id,
                timestamp,
                latitude,
                longitude,
                altitude,
                battery_level,
                temperature,
                signal_strength,
            }),
            _ => Err(errors),
        }
    }

    /// Checks every field and collects all violations, so the caller sees
    /// them in a single response.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_satellite_id(&mut errors, &self.satellite_id);
        check_range(&mut errors, "latitude", self.latitude, -90.0, 90.0);
        check_range(&mut errors, "longitude", self.longitude, -180.0, 180.0);
        check_altitude(&mut errors, self.altitude);
        check_range(&mut errors, "battery_level", self.battery_level, 0.0, 100.0);

        errors
    }

    /// Validates and converts into a storable reading, stamping it with
    /// `now` when no timestamp was supplied.
    pub fn into_new_telemetry(self, now: DateTime<Utc>) -> Result<NewTelemetry, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewTelemetry {
            satellite_id: self.satellite_id,
            timestamp: self.timestamp.unwrap_or(now),
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            battery_level: self.battery_level,
            temperature: self.temperature,
            signal_strength: self.signal_strength,
        })
    }
}

fn read_field<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Value> {
    let value = object.get(field);
    if value.is_none() {
        errors.push(FieldError::new(&["body", field], "Field required", "missing"));
    }
    value
}

fn read_string(object: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = read_field(object, field, errors)?;
    match value.as_str() {
        Some(text) => Some(text.to_string()),
        None => {
            errors.push(FieldError::new(
                &["body", field],
                "Input should be a valid string",
                "string_type",
            ));
            None
        }
    }
}

fn read_number(object: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    let value = read_field(object, field, errors)?;
    match value.as_f64() {
        Some(number) => Some(number),
        None => {
            errors.push(FieldError::new(
                &["body", field],
                "Input should be a valid number",
                "float_type",
            ));
            None
        }
    }
}

/// Absent or `null` is a valid `Some(None)`; `None` means the field was
/// rejected.
fn read_timestamp(object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<Option<DateTime<Utc>>> {
    match object.get("timestamp") {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(text)) => match DateTime::parse_from_rfc3339(text) {
            Ok(timestamp) => Some(Some(timestamp.with_timezone(&Utc))),
            Err(e) => {
                errors.push(FieldError::new(
                    &["body", "timestamp"],
                    format!("Input should be a valid datetime, {}", e),
                    "datetime_from_date_parsing",
                ));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new(
                &["body", "timestamp"],
                "Input should be a valid datetime",
                "datetime_type",
            ));
            None
        }
    }
}

fn check_satellite_id(errors: &mut Vec<FieldError>, satellite_id: &str) {
    if satellite_id.is_empty() {
        errors.push(FieldError::new(
            &["body", "satellite_id"],
            "String should have at least 1 character",
            "string_too_short",
        ));
    }
}

fn check_altitude(errors: &mut Vec<FieldError>, altitude: f64) {
    if altitude <= 0.0 {
        errors.push(FieldError::new(
            &["body", "altitude"],
            "Input should be greater than 0",
            "greater_than",
        ));
    }
}

fn check_range(errors: &mut Vec<FieldError>, field: &str, value: f64, min: f64, max: f64) {
    if value < min {
        errors.push(FieldError::new(
            &["body", field],
            format!("Input should be greater than or equal to {}", min),
            "greater_than_equal",
        ));
    } else if value > max {
        errors.push(FieldError::new(
            &["body", field],
            format!("Input should be less than or equal to {}", max),
            "less_than_equal",
        ));
    }
}

/// Query string of `GET /telemetry`.
#[derive(IntoParams, Debug, Default)]
#[into_params(style = Form, parameter_in = Query)]
pub struct ListTelemetryRequest {
    /// Number of records to skip, at least 0.
    #[param(example = 0)]
    pub skip: Option<i64>,
    /// Page size, between 1 and 1000.
    #[param(example = 100)]
    pub limit: Option<i64>,
    /// Only return records of this satellite.
    #[param(example = "SAT-001")]
    pub satellite_id: Option<String>,
}

/// Validated pagination and filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter {
    pub skip: i64,
    pub limit: i64,
    pub satellite_id: Option<String>,
}

impl ListTelemetryRequest {
    /// Parses raw query pairs, naming each parameter that is not an integer.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();
        let skip = parse_integer(params, "skip", &mut errors);
        let limit = parse_integer(params, "limit", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            skip,
            limit,
            satellite_id: params.get("satellite_id").cloned(),
        })
    }

    pub fn into_filter(self) -> Result<ListFilter, Vec<FieldError>> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        let mut errors = Vec::new();

        if skip < 0 {
            errors.push(FieldError::new(
                &["query", "skip"],
                "Input should be greater than or equal to 0",
                "greater_than_equal",
            ));
        }
        if limit < 1 {
            errors.push(FieldError::new(
                &["query", "limit"],
                "Input should be greater than or equal to 1",
                "greater_than_equal",
            ));
        } else if limit > MAX_LIMIT {
            errors.push(FieldError::new(
                &["query", "limit"],
                format!("Input should be less than or equal to {}", MAX_LIMIT),
                "less_than_equal",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ListFilter {
            skip,
            limit,
            // an empty id means no filter
            satellite_id: self.satellite_id.filter(|id| !id.is_empty()),
        })
    }
}

fn parse_integer(params: &HashMap<String, String>, name: &str, errors: &mut Vec<FieldError>) -> Option<i64> {
    let raw = params.get(name)?;
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(FieldError::new(
                &["query", name],
                "Input should be a valid integer, unable to parse string as an integer",
                "int_parsing",
            ));
            None
        }
    }
}
