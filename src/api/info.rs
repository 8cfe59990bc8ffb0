use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use crate::{api::error_response, search::SearchEngine, services::user_service};

#[utoipa::path(
    get,
    path = "/info",
    tag = "Search Engine",
    responses(
        (status = 200, description = "Search engine info payload, verbatim", body = serde_json::Value),
        (status = 400, description = "Engine unreachable", body = String, content_type = "text/plain")
    )
)]
pub async fn get_info(engine: web::Data<dyn SearchEngine>) -> impl Responder {
    match user_service::engine_info(engine.get_ref()).await {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::json()).body(body),
        Err(e) => {
            log::error!("❌ Error fetching search engine info: {}", e);
            error_response(&e)
        }
    }
}
