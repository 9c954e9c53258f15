use crate::domain::errors::ValidationError;

// ============================================================================
// Material Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MaterialError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Transition log must start with MaterialCreated")]
    NotInitialized,

    #[error("Material is already created")]
    AlreadyCreated,
}
