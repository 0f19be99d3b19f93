use actix_web::{App, HttpServer, middleware::Logger, web};
use api::config::Config;
use api::database::create_pool;
use api::repository::SqliteTelemetryRepository;
use api::services::telemetry_service::TelemetryService;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load configuration
    let config = Config::load()?;
    let server_address = config.server_address();

    let pool = create_pool(&config.database.url, config.database.pool_size).await?;
    let repository = Arc::new(SqliteTelemetryRepository::new(pool));
    let service = web::Data::new(TelemetryService::new(repository));

    log::info!("Starting SatTrack API on {}", server_address);
    log::info!("Swagger UI available at http://{}/docs/", server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(api::configure)
    })
    .bind(server_address)?
    .run()
    .await?;

    Ok(())
}
