use actix_web::{Responder, Result, get, web};

use crate::models::responses::{LivenessResponse, RootResponse};

pub const SERVICE_NAME: &str = "SatTrack API";

/// Service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Success", body = RootResponse)
    ),
    tag = "Service"
)]
#[get("/")]
pub async fn root() -> Result<impl Responder> {
    let response = RootResponse {
        message: format!("{} - Satellite Telemetry System", SERVICE_NAME),
        docs: "/docs".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Ok(web::Json(response))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = LivenessResponse)
    ),
    tag = "Service"
)]
#[get("/health")]
pub async fn health_check() -> Result<impl Responder> {
    let response = LivenessResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    };
    Ok(web::Json(response))
}
