mod api;
mod config;
mod middleware;
mod models;
mod search;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::AppConfig;
use dotenv::dotenv;
use search::{ElasticsearchClient, SearchEngine};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    log::info!("🚀 Starting User Search Service...");

    // Single client for the whole process
    let client = ElasticsearchClient::new(&config.elasticsearch_url, &config.index, config.refresh)
        .expect("Failed to create search engine client");

    log::info!("🔎 Search engine: {} (index '{}')", client.base_url(), config.index);
    log::info!("🔄 Refresh on write: {}", config.refresh.as_param());
    let engine: Arc<dyn SearchEngine> = Arc::new(client);

    search::ensure_index(engine.as_ref())
        .await
        .map_err(std::io::Error::other)?;

    let engine_data = web::Data::from(engine);

    log::info!("🌐 Server listening on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(engine_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind(format!("{}:{}", config.host, config.port))?
    .run()
    .await
}
