use uuid::Uuid;

use crate::domain::errors::ValidationError;

// ============================================================================
// Farm Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FarmError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Reservoir {0} is already attached to this farm")]
    ReservoirAlreadyAdded(Uuid),

    #[error("Area {0} is already attached to this farm")]
    AreaAlreadyAdded(Uuid),

    #[error("Reservoir {reservoir_id} belongs to farm {owner_id}")]
    ForeignReservoir { reservoir_id: Uuid, owner_id: Uuid },

    #[error("Area {area_id} belongs to farm {owner_id}")]
    ForeignArea { area_id: Uuid, owner_id: Uuid },
}
