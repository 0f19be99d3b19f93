//! SatTrack API: ingests satellite telemetry into SQLite and serves
//! listings, latest readings, health classification and statistics.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

use actix_web::error::JsonPayloadError;
use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::{ApiError, ErrorResponse, FieldError, ValidationErrorResponse};
use crate::models::requests::TelemetryCreateRequest;
use crate::models::responses::{
    HealthStatusResponse, LivenessResponse, RootResponse, StatsResponse, TelemetryResponse,
};

/// # API Documentation
///
/// OpenAPI document of the SatTrack API, served as JSON at
/// `/api-docs/openapi.json` and browsable through Swagger UI at `/docs/`.
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::root,
        routes::api::health_check,
        routes::telemetry::create_telemetry,
        routes::telemetry::list_telemetry,
        routes::telemetry::get_telemetry,
        routes::satellite::get_latest_telemetry,
        routes::satellite::get_satellite_health,
        routes::satellite::get_satellite_stats,
    ),
    components(schemas(
        TelemetryCreateRequest,
        TelemetryResponse,
        HealthStatusResponse,
        StatsResponse,
        RootResponse,
        LivenessResponse,
        ErrorResponse,
        ValidationErrorResponse,
        FieldError,
    )),
    tags(
        (name = "Service", description = "Liveness and service information"),
        (name = "Telemetry", description = "Telemetry ingestion and lookup"),
        (name = "Satellite", description = "Per-satellite views: latest reading, health, statistics")
    ),
    info(
        title = "SatTrack API",
        version = "1.0.0",
        description = "Satellite Telemetry Tracking System"
    )
)]
pub struct ApiDoc;

/// Registers every route, the docs and the extractor error handlers.
///
/// The caller provides the `web::Data<TelemetryService>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(routes::api::root)
        .service(routes::api::health_check)
        .service(routes::telemetry::create_telemetry)
        .service(routes::telemetry::list_telemetry)
        .service(routes::telemetry::get_telemetry)
        .service(routes::satellite::get_latest_telemetry)
        .service(routes::satellite::get_satellite_health)
        .service(routes::satellite::get_satellite_stats)
        .service(web::redirect("/docs", "/docs/"))
        .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
}

// Bodies that are not JSON, undecodable query strings and non-integer path
// ids are reported as 422. Field-level checks live in `models::requests`.

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let field = match &err {
            JsonPayloadError::ContentType => FieldError::new(
                &["body"],
                "Expected an application/json body",
                "model_attributes_type",
            ),
            other => FieldError::new(&["body"], other.to_string(), "json_invalid"),
        };
        log::debug!("Rejected request body: {}", err);
        ApiError::invalid(field).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::invalid(FieldError::new(&["query"], err.to_string(), "parsing")).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        ApiError::invalid(FieldError::new(
            &["path"],
            format!("Input should be a valid integer: {}", err),
            "int_parsing",
        ))
        .into()
    })
}
