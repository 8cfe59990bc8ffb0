pub mod health;
pub mod info;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use crate::utils::AppError;

/// Every failure is a 400 with a short plain-text message.
pub fn error_response(error: &AppError) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type(ContentType::plaintext())
        .body(error.public_message())
}

pub async fn banner() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("User Search API")
}

/// Route table shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(banner))
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // Search engine info (passthrough)
        .route("/info", web::get().to(info::get_info))
        // Users
        .service(
            web::resource("/user")
                .route(web::get().to(users::list_users))
                .route(web::post().to(users::create_user)),
        )
        .service(
            web::resource("/user/{id}")
                .route(web::put().to(users::update_user))
                .route(web::delete().to(users::delete_user)),
        )
        // Empty id: answered by the same handlers with "ID required"
        .service(
            web::resource("/user/")
                .route(web::put().to(users::update_user))
                .route(web::delete().to(users::delete_user)),
        );
}
