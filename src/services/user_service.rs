// ==================== USER MANAGEMENT ====================
// CRUD over the user index. Nothing is kept between requests.

use crate::{
    models::User,
    search::{SearchEngine, WriteResponse},
    services::user_mapper,
    utils::AppError,
};

/// Blank ids are rejected; anything else is passed to the engine untouched.
fn require_id(id: &str) -> Result<&str, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::MissingId);
    }
    Ok(id)
}

/// GET /user - Lists users, optionally filtered by free text
pub async fn search_users(
    engine: &dyn SearchEngine,
    search: Option<&str>,
) -> Result<Vec<User>, AppError> {
    let query = user_mapper::build_search_query(search);
    let response = engine.search(&query).await?;
    Ok(user_mapper::users_from_hits(response))
}

/// POST /user - Indexes a new user. The engine assigns the id.
pub async fn create_user(engine: &dyn SearchEngine, body: &[u8]) -> Result<WriteResponse, AppError> {
    let user = user_mapper::parse_user(body)?;
    let document = user_mapper::document_body(&user)?;

    let written = engine.index_document(&document).await?;
    log::info!(
        "Indexed document {} ({}) to index {}",
        written.id,
        written.result,
        engine.index_name()
    );
    Ok(written)
}

/// PUT /user/{id} - Partial update. The id is checked before the body is read.
pub async fn update_user(
    engine: &dyn SearchEngine,
    id: &str,
    body: &[u8],
) -> Result<WriteResponse, AppError> {
    let id = require_id(id)?;
    let user = user_mapper::parse_user(body)?;
    let envelope = user_mapper::update_envelope(&user)?;

    let written = engine.update_document(id, &envelope).await?;
    log::info!(
        "Updated document {} ({}) in index {}",
        written.id,
        written.result,
        engine.index_name()
    );
    Ok(written)
}

/// DELETE /user/{id}
pub async fn delete_user(engine: &dyn SearchEngine, id: &str) -> Result<WriteResponse, AppError> {
    let id = require_id(id)?;

    let written = engine.delete_document(id).await?;
    log::info!(
        "Deleted document {} ({}) from index {}",
        written.id,
        written.result,
        engine.index_name()
    );
    Ok(written)
}

/// GET /info - Engine's own info payload, untouched
pub async fn engine_info(engine: &dyn SearchEngine) -> Result<Vec<u8>, AppError> {
    engine.info().await
}
