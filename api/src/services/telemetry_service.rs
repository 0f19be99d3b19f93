use chrono::{DateTime, Utc};
use std::sync::Arc;
use telemetry::{SatelliteStats, classify};

use crate::error::ApiError;
use crate::models::requests::{ListTelemetryRequest, TelemetryCreateRequest};
use crate::models::responses::{HealthStatusResponse, StatsResponse, TelemetryResponse};
use crate::repository::TelemetryRepository;

pub struct TelemetryService {
    repository: Arc<dyn TelemetryRepository>,
}

impl TelemetryService {
    pub fn new(repository: Arc<dyn TelemetryRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_telemetry(
        &self,
        request: TelemetryCreateRequest,
    ) -> Result<TelemetryResponse, ApiError> {
        let reading = request
            .into_new_telemetry(Utc::now())
            .map_err(ApiError::Validation)?;

        let record = self.repository.create(reading).await?;
        log::info!(
            "Stored telemetry {} for {} (healthy: {})",
            record.id,
            record.satellite_id,
            record.is_healthy
        );

        Ok(record.into())
    }

    pub async fn get_telemetry(&self, id: i64) -> Result<TelemetryResponse, ApiError> {
        self.repository
            .get_by_id(id)
            .await?
            .map(TelemetryResponse::from)
            .ok_or_else(|| ApiError::NotFound("Telemetry not found".to_string()))
    }

    pub async fn list_telemetry(
        &self,
        request: ListTelemetryRequest,
    ) -> Result<Vec<TelemetryResponse>, ApiError> {
        let filter = request.into_filter().map_err(ApiError::Validation)?;

        let records = self
            .repository
            .list(filter.skip, filter.limit, filter.satellite_id.as_deref())
            .await?;

        Ok(records.into_iter().map(TelemetryResponse::from).collect())
    }

    pub async fn get_latest_telemetry(
        &self,
        satellite_id: &str,
    ) -> Result<TelemetryResponse, ApiError> {
        self.repository
            .get_latest(satellite_id)
            .await?
            .map(TelemetryResponse::from)
            .ok_or_else(|| {
                ApiError::NotFound(format!("No telemetry found for satellite {}", satellite_id))
            })
    }

    pub async fn satellite_health(&self, satellite_id: &str) -> Result<HealthStatusResponse, ApiError> {
        self.satellite_health_at(satellite_id, Utc::now()).await
    }

    /// Health of a satellite as seen at `now`.
    pub async fn satellite_health_at(
        &self,
        satellite_id: &str,
        now: DateTime<Utc>,
    ) -> Result<HealthStatusResponse, ApiError> {
        let latest = self.repository.get_latest(satellite_id).await?;
        let report = classify(latest.as_ref(), now);
        log::debug!("Satellite {} classified {}", satellite_id, report.status);

        Ok(HealthStatusResponse::new(
            satellite_id.to_string(),
            report,
            latest,
        ))
    }

    pub async fn satellite_stats(&self, satellite_id: &str) -> Result<StatsResponse, ApiError> {
        let aggregate = self.repository.aggregate(satellite_id).await?;

        Ok(SatelliteStats::from_aggregate(satellite_id, aggregate).into())
    }
}
