use super::{IndexStatus, SearchEngine};
use crate::utils::AppError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    AlreadyExists,
    Created,
}

#[derive(Debug)]
pub enum BootstrapError {
    /// Existence could not be determined (transport failure or unexpected status)
    CheckFailed(AppError),
    CreateFailed(AppError),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::CheckFailed(e) => write!(f, "Index existence check failed: {}", e),
            BootstrapError::CreateFailed(e) => write!(f, "Index creation failed: {}", e),
        }
    }
}

impl std::error::Error for BootstrapError {}

/// Makes sure the configured index exists, creating it when absent.
///
/// A failed existence check is an error, not a reason to create.
pub async fn ensure_index(engine: &dyn SearchEngine) -> Result<BootstrapOutcome, BootstrapError> {
    let index = engine.index_name();
    log::info!("🔧 Checking index '{}'...", index);

    match engine.index_exists().await.map_err(BootstrapError::CheckFailed)? {
        IndexStatus::Exists => {
            log::info!("   ✅ Index '{}' already exists", index);
            Ok(BootstrapOutcome::AlreadyExists)
        }
        IndexStatus::Absent => {
            log::info!("   ℹ️  Index '{}' not found, creating", index);
            match engine.create_index().await {
                Ok(()) => {
                    log::info!("   ✅ Index created: {}", index);
                    Ok(BootstrapOutcome::Created)
                }
                // Another instance created it between our check and create
                Err(AppError::Engine { ref body, .. })
                    if body.contains("resource_already_exists_exception") =>
                {
                    log::info!("   ✅ Index '{}' created concurrently", index);
                    Ok(BootstrapOutcome::AlreadyExists)
                }
                Err(e) => Err(BootstrapError::CreateFailed(e)),
            }
        }
    }
}
