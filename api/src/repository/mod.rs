pub mod telemetry;

use async_trait::async_trait;
use ::telemetry::{Aggregate, NewTelemetry, TelemetryRecord};

pub use self::telemetry::SqliteTelemetryRepository;

pub type RepositoryResult<T> = Result<T, sqlx::Error>;

/// Storage of telemetry rows. Rows are insert-only.
#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// Stores a reading with its insert-time health flag and returns the
    /// stored row.
    async fn create(&self, reading: NewTelemetry) -> RepositoryResult<TelemetryRecord>;

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<TelemetryRecord>>;

    /// Newest first.
    async fn list(
        &self,
        skip: i64,
        limit: i64,
        satellite_id: Option<&str>,
    ) -> RepositoryResult<Vec<TelemetryRecord>>;

    async fn get_latest(&self, satellite_id: &str) -> RepositoryResult<Option<TelemetryRecord>>;

    async fn aggregate(&self, satellite_id: &str) -> RepositoryResult<Aggregate>;
}
