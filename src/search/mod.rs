// ==================== SEARCH ENGINE ====================
// Boundary to the external Elasticsearch-compatible engine.
// The service never stores users itself: the index is the source of truth.

pub mod bootstrap;
pub mod client;
pub mod types;

#[cfg(test)]
pub mod memory;

pub use bootstrap::*;
pub use client::*;
pub use types::*;

use crate::utils::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Operations the service needs from the search engine, all scoped to the
/// configured index.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    fn index_name(&self) -> &str;

    async fn index_exists(&self) -> Result<IndexStatus, AppError>;

    async fn create_index(&self) -> Result<(), AppError>;

    /// Inserts a new document; the engine assigns its id.
    async fn index_document(&self, document: &Value) -> Result<WriteResponse, AppError>;

    /// Sends a partial-update envelope (`{"doc": ...}`) for `id`.
    async fn update_document(&self, id: &str, envelope: &Value) -> Result<WriteResponse, AppError>;

    async fn delete_document(&self, id: &str) -> Result<WriteResponse, AppError>;

    async fn search(&self, query: &Value) -> Result<SearchResponse, AppError>;

    /// Raw cluster info payload.
    async fn info(&self) -> Result<Vec<u8>, AppError>;
}
