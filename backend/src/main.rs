use actix_web::{web, App, HttpServer};
use backend::analytics::InMemoryAnalyticsRepository;
use backend::error::{json_error_handler, query_error_handler};
use log::error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Logging comes up before the rest of the configuration so config loading is visible
    dotenv::dotenv().ok();
    let logging = backend::config::Config::logging_from_env();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(logging.level.as_str()));

    // Load configuration from environment variables
    let config = match backend::config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    let analytics_repo = InMemoryAnalyticsRepository::seeded();
    let cors_config = config.cors.clone();

    log::info!(
        "Starting server on {}:{} with {} workers",
        config.server.host,
        config.server.port,
        config.server.workers
    );

    HttpServer::new(move || {
        App::new()
            .wrap(backend::middleware::Logger)
            .wrap(backend::middleware::cors_middleware(&cors_config))
            .app_data(
                web::JsonConfig::default()
                    .limit(64 * 1024)
                    .error_handler(json_error_handler),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(backend::health::health_check)
            .service(backend::metrics::metrics_handler)
            .service(backend::openapi::openapi_json)
            .configure(|cfg| backend::analytics::configure_routes(cfg, analytics_repo.clone()))
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
