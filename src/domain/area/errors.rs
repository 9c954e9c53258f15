use uuid::Uuid;

use crate::domain::errors::ValidationError;

// ============================================================================
// Area Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AreaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Reservoir {reservoir_id} belongs to farm {owner_id}, not to this area's farm")]
    ForeignReservoir { reservoir_id: Uuid, owner_id: Uuid },
}
