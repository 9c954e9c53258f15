use crate::domain::errors::ValidationError;

// ============================================================================
// Reservoir Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReservoirError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A water source is already attached to this reservoir")]
    WaterSourceAlreadyAttached,
}
