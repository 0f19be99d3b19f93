use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use telemetry::{Aggregate, NewTelemetry, TelemetryRecord};

use super::{RepositoryResult, TelemetryRepository};
use crate::models::telemetry::{AggregateRow, TelemetryRow};

const COLUMNS: &str = "id, satellite_id, timestamp, latitude, longitude, altitude, \
                       battery_level, temperature, signal_strength, is_healthy";

pub struct SqliteTelemetryRepository {
    pool: Pool<Sqlite>,
}

impl SqliteTelemetryRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TelemetryRepository for SqliteTelemetryRepository {
    async fn create(&self, reading: NewTelemetry) -> RepositoryResult<TelemetryRecord> {
        let is_healthy = reading.is_healthy();

        let row = sqlx::query_as::<_, TelemetryRow>(&format!(
            r#"
            INSERT INTO telemetry (satellite_id, timestamp, latitude, longitude, altitude,
                                   battery_level, temperature, signal_strength, is_healthy)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&reading.satellite_id)
        .bind(reading.timestamp)
        .bind(reading.latitude)
        .bind(reading.longitude)
        .bind(reading.altitude)
        .bind(reading.battery_level)
        .bind(reading.temperature)
        .bind(reading.signal_strength)
        .bind(is_healthy)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<TelemetryRecord>> {
        let row = sqlx::query_as::<_, TelemetryRow>(&format!(
            "SELECT {COLUMNS} FROM telemetry WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        skip: i64,
        limit: i64,
        satellite_id: Option<&str>,
    ) -> RepositoryResult<Vec<TelemetryRecord>> {
        let rows = match satellite_id {
            Some(satellite_id) => {
                sqlx::query_as::<_, TelemetryRow>(&format!(
                    r#"
                    SELECT {COLUMNS} FROM telemetry
                    WHERE satellite_id = ?
                    ORDER BY timestamp DESC, id DESC
                    LIMIT ? OFFSET ?
                    "#
                ))
                .bind(satellite_id)
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TelemetryRow>(&format!(
                    r#"
                    SELECT {COLUMNS} FROM telemetry
                    ORDER BY timestamp DESC, id DESC
                    LIMIT ? OFFSET ?
                    "#
                ))
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_latest(&self, satellite_id: &str) -> RepositoryResult<Option<TelemetryRecord>> {
        let row = sqlx::query_as::<_, TelemetryRow>(&format!(
            r#"
            SELECT {COLUMNS} FROM telemetry
            WHERE satellite_id = ?
            ORDER BY timestamp DESC, id DESC
            LIMIT 1
            "#
        ))
        .bind(satellite_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn aggregate(&self, satellite_id: &str) -> RepositoryResult<Aggregate> {
        let row = sqlx::query_as::<_, AggregateRow>(
            r#"
            SELECT COUNT(id) AS total_records,
                   AVG(battery_level) AS avg_battery,
                   AVG(temperature) AS avg_temperature,
                   MIN(altitude) AS min_altitude,
                   MAX(altitude) AS max_altitude
            FROM telemetry
            WHERE satellite_id = ?
            "#,
        )
        .bind(satellite_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_pool;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    async fn repository() -> SqliteTelemetryRepository {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        SqliteTelemetryRepository::new(pool)
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 19, 12, 0, 0).unwrap()
    }

    fn reading(satellite_id: &str, timestamp: DateTime<Utc>, altitude: f64, battery_level: f64) -> NewTelemetry {
        NewTelemetry {
            satellite_id: satellite_id.to_string(),
            timestamp,
            latitude: 43.6532,
            longitude: -79.3832,
            altitude,
            battery_level,
            temperature: 22.3,
            signal_strength: -65.2,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_health_flag() {
        let repo = repository().await;

        let first = repo.create(reading("SAT-001", base_time(), 550.5, 15.0)).await.unwrap();
        let second = repo.create(reading("SAT-001", base_time(), 550.5, 87.5)).await.unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert!(!first.is_healthy);
        assert!(second.is_healthy);
        assert_eq!(first.timestamp, base_time());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = repository().await;
        let created = repo.create(reading("SAT-001", base_time(), 550.5, 87.5)).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));

        assert_eq!(repo.get_by_id(9999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_newest_first_with_paging() {
        let repo = repository().await;
        for minutes in 0..5 {
            repo.create(reading("SAT-001", base_time() + Duration::minutes(minutes), 500.0, 80.0))
                .await
                .unwrap();
        }

        let all = repo.list(0, 100, None).await.unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|pair| pair[0].timestamp > pair[1].timestamp));

        let page = repo.list(1, 2, None).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].timestamp, base_time() + Duration::minutes(3));
        assert_eq!(page[1].timestamp, base_time() + Duration::minutes(2));
    }

    #[tokio::test]
    async fn test_list_filters_by_satellite() {
        let repo = repository().await;
        repo.create(reading("SAT-001", base_time(), 500.0, 80.0)).await.unwrap();
        repo.create(reading("SAT-002", base_time(), 500.0, 80.0)).await.unwrap();
        repo.create(reading("SAT-001", base_time(), 500.0, 80.0)).await.unwrap();

        let records = repo.list(0, 100, Some("SAT-001")).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.satellite_id == "SAT-001"));
    }

    #[tokio::test]
    async fn test_latest_returns_newest_reading() {
        let repo = repository().await;
        let later = base_time() + Duration::seconds(90);
        repo.create(reading("SAT-001", later, 551.0, 80.0)).await.unwrap();
        repo.create(reading("SAT-001", base_time(), 550.0, 80.0)).await.unwrap();
        repo.create(reading("SAT-002", later + Duration::hours(1), 400.0, 80.0)).await.unwrap();

        let latest = repo.get_latest("SAT-001").await.unwrap().unwrap();
        assert_eq!(latest.timestamp, later);
        assert_eq!(latest.altitude, 551.0);

        assert_eq!(repo.get_latest("SAT-404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_aggregate() {
        let repo = repository().await;
        repo.create(reading("SAT-001", base_time(), 400.0, 10.0)).await.unwrap();
        repo.create(reading("SAT-001", base_time(), 600.0, 20.0)).await.unwrap();
        repo.create(reading("SAT-001", base_time(), 500.0, 30.0)).await.unwrap();
        repo.create(reading("SAT-002", base_time(), 9000.0, 99.0)).await.unwrap();

        let aggregate = repo.aggregate("SAT-001").await.unwrap();
        assert_eq!(aggregate.total_records, Some(3));
        assert_eq!(aggregate.avg_battery, Some(20.0));
        assert_eq!(aggregate.min_altitude, Some(400.0));
        assert_eq!(aggregate.max_altitude, Some(600.0));
    }

    #[tokio::test]
    async fn test_aggregate_without_rows() {
        let repo = repository().await;

        let aggregate = repo.aggregate("SAT-404").await.unwrap();
        assert_eq!(aggregate.total_records, Some(0));
        assert_eq!(aggregate.avg_battery, None);
        assert_eq!(aggregate.max_altitude, None);
    }
}
