use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{ApiError, ErrorResponse, ValidationErrorResponse};
use crate::models::requests::{ListTelemetryRequest, TelemetryCreateRequest};
use crate::models::responses::TelemetryResponse;
use crate::services::telemetry_service::TelemetryService;

/// Store a telemetry reading
#[utoipa::path(
    post,
    path = "/telemetry",
    request_body = TelemetryCreateRequest,
    responses(
        (status = 201, description = "Created", body = TelemetryResponse),
        (status = 422, description = "Validation error", body = ValidationErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Telemetry"
)]
#[post("/telemetry")]
pub async fn create_telemetry(
    req_body: web::Json<Value>,
    service: web::Data<TelemetryService>,
) -> Result<impl Responder, ApiError> {
    let request = TelemetryCreateRequest::from_json(&req_body).map_err(ApiError::Validation)?;
    let telemetry = service.create_telemetry(request).await?;
    Ok(HttpResponse::Created().json(telemetry))
}

/// List telemetry, newest first
#[utoipa::path(
    get,
    path = "/telemetry",
    params(ListTelemetryRequest),
    responses(
        (status = 200, description = "Success", body = Vec<TelemetryResponse>),
        (status = 422, description = "Invalid paging", body = ValidationErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Telemetry"
)]
#[get("/telemetry")]
pub async fn list_telemetry(
    req: web::Query<HashMap<String, String>>,
    service: web::Data<TelemetryService>,
) -> Result<impl Responder, ApiError> {
    let request = ListTelemetryRequest::from_query(&req).map_err(ApiError::Validation)?;
    let telemetry = service.list_telemetry(request).await?;
    Ok(web::Json(telemetry))
}

/// Fetch one telemetry record
#[utoipa::path(
    get,
    path = "/telemetry/{telemetry_id}",
    params(
        ("telemetry_id" = i64, Path, description = "Record id", example = 1),
    ),
    responses(
        (status = 200, description = "Success", body = TelemetryResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 422, description = "Malformed id", body = ValidationErrorResponse)
    ),
    tag = "Telemetry"
)]
#[get("/telemetry/{telemetry_id}")]
pub async fn get_telemetry(
    path: web::Path<i64>,
    service: web::Data<TelemetryService>,
) -> Result<impl Responder, ApiError> {
    let telemetry = service.get_telemetry(path.into_inner()).await?;
    Ok(web::Json(telemetry))
}
