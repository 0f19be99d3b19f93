use actix_web::{Responder, get, web};

use crate::error::{ApiError, ErrorResponse};
use crate::models::responses::{HealthStatusResponse, StatsResponse, TelemetryResponse};
use crate::services::telemetry_service::TelemetryService;

/// Most recent reading of a satellite
#[utoipa::path(
    get,
    path = "/satellite/{satellite_id}/latest",
    params(
        ("satellite_id" = String, Path, description = "Satellite identifier", example = "SAT-001"),
    ),
    responses(
        (status = 200, description = "Success", body = TelemetryResponse),
        (status = 404, description = "No telemetry for this satellite", body = ErrorResponse)
    ),
    tag = "Satellite"
)]
#[get("/satellite/{satellite_id}/latest")]
pub async fn get_latest_telemetry(
    path: web::Path<String>,
    service: web::Data<TelemetryService>,
) -> Result<impl Responder, ApiError> {
    let telemetry = service.get_latest_telemetry(&path).await?;
    Ok(web::Json(telemetry))
}

/// Health classification from the latest reading
#[utoipa::path(
    get,
    path = "/satellite/{satellite_id}/health",
    params(
        ("satellite_id" = String, Path, description = "Satellite identifier", example = "SAT-001"),
    ),
    responses(
        (status = 200, description = "Success", body = HealthStatusResponse)
    ),
    tag = "Satellite"
)]
#[get("/satellite/{satellite_id}/health")]
pub async fn get_satellite_health(
    path: web::Path<String>,
    service: web::Data<TelemetryService>,
) -> Result<impl Responder, ApiError> {
    let health = service.satellite_health(&path).await?;
    Ok(web::Json(health))
}

/// Aggregate statistics over every reading of a satellite
#[utoipa::path(
    get,
    path = "/satellite/{satellite_id}/stats",
    params(
        ("satellite_id" = String, Path, description = "Satellite identifier", example = "SAT-001"),
    ),
    responses(
        (status = 200, description = "Success", body = StatsResponse)
    ),
    tag = "Satellite"
)]
#[get("/satellite/{satellite_id}/stats")]
pub async fn get_satellite_stats(
    path: web::Path<String>,
    service: web::Data<TelemetryService>,
) -> Result<impl Responder, ApiError> {
    let stats = service.satellite_stats(&path).await?;
    Ok(web::Json(stats))
}
