use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use serde::Deserialize;
use crate::{
    api::error_response,
    models::User,
    search::SearchEngine,
    services::user_service,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Free text matched fuzzily against first name, last name and email
    pub search: Option<String>,
}

fn confirmation(message: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message)
}

fn path_id(path: Option<web::Path<String>>) -> String {
    path.map(|p| p.into_inner()).unwrap_or_default()
}

#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users in ranking order", body = [User]),
        (status = 400, description = "Search failed", body = String, content_type = "text/plain")
    )
)]
pub async fn list_users(
    engine: web::Data<dyn SearchEngine>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    log::info!("🔍 GET /user - search: {:?}", query.search);

    match user_service::search_users(engine.get_ref(), query.search.as_deref()).await {
        Ok(users) => {
            log::info!("✅ Found {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error searching users: {}", e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "User indexed", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid body or engine error", body = String, content_type = "text/plain")
    )
)]
pub async fn create_user(engine: web::Data<dyn SearchEngine>, body: web::Bytes) -> impl Responder {
    log::info!("📝 POST /user");

    match user_service::create_user(engine.get_ref(), &body).await {
        Ok(_) => confirmation("Success index document"),
        Err(e) => {
            log::error!("❌ Error creating user: {}", e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "Engine-assigned user id")),
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing id, invalid body or engine error", body = String, content_type = "text/plain")
    )
)]
pub async fn update_user(
    engine: web::Data<dyn SearchEngine>,
    path: Option<web::Path<String>>,
    body: web::Bytes,
) -> impl Responder {
    let id = path_id(path);
    log::info!("🔧 PUT /user/{}", id);

    match user_service::update_user(engine.get_ref(), &id, &body).await {
        Ok(_) => confirmation("Success update document"),
        Err(e) => {
            log::error!("❌ Error updating user '{}': {}", id, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "Engine-assigned user id")),
    responses(
        (status = 200, description = "User deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing id or engine error", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_user(
    engine: web::Data<dyn SearchEngine>,
    path: Option<web::Path<String>>,
) -> impl Responder {
    let id = path_id(path);
    log::info!("🗑️  DELETE /user/{}", id);

    match user_service::delete_user(engine.get_ref(), &id).await {
        Ok(_) => confirmation("Success delete document"),
        Err(e) => {
            log::error!("❌ Error deleting user '{}': {}", id, e);
            error_response(&e)
        }
    }
}
