use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::search::SearchEngine;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// "up" when the index existence check succeeds
    pub search_engine: String,
    pub index: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(engine: web::Data<dyn SearchEngine>) -> impl Responder {
    let search_engine = match engine.index_exists().await {
        Ok(_) => "up",
        Err(e) => {
            log::warn!("⚠️  Search engine health check failed: {}", e);
            "down"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "user-search-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        search_engine: search_engine.to_string(),
        index: engine.index_name().to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
