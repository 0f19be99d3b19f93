use api::config::Config;
use api::database::create_pool;
use api::repository::{SqliteTelemetryRepository, TelemetryRepository};
use chrono::{Duration, Utc};
use telemetry::NewTelemetry;

const SATELLITES: [(&str, f64); 3] = [("SAT-001", 550.5), ("SAT-002", 408.0), ("SAT-003", 780.2)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::load()?;
    let pool = create_pool(&config.database.url, config.database.pool_size).await?;
    let repository = SqliteTelemetryRepository::new(pool);

    log::info!("Seeding {} with test telemetry data...", config.database.url);

    // One reading per satellite every 15 minutes over the last 24 hours
    let now = Utc::now();
    let mut current_time = now - Duration::hours(24);
    let mut inserted = 0;

    for i in 0..96 {
        for (n, (satellite_id, altitude)) in SATELLITES.iter().enumerate() {
            let step = i as f64;
            let reading = NewTelemetry {
                satellite_id: satellite_id.to_string(),
                timestamp: current_time,
                latitude: ((step * 3.75 + n as f64 * 40.0) % 180.0) - 90.0,
                longitude: ((step * 7.5 + n as f64 * 90.0) % 360.0) - 180.0,
                altitude: altitude + (step * 0.05).sin() * 2.0,
                battery_level: 95.0 - ((i + n * 30) % 90) as f64, // drains, occasionally below 20
                temperature: 20.0 + (step * 0.2).sin() * 35.0,    // swings out of range now and then
                signal_strength: -60.0 - ((i * 7 + n * 11) % 40) as f64,
            };

            repository.create(reading).await?;
            inserted += 1;
        }

        current_time += Duration::minutes(15);
    }

    log::info!("Successfully seeded database with {} telemetry records!", inserted);
    Ok(())
}
