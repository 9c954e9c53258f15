// ============================================================================
// Material Domain
// ============================================================================
//
// - Value objects (MaterialType variants, PricePerUnit, MaterialQuantity)
// - Events (one transition record per field change)
// - Commands (field changes + CreateMaterial raw input)
// - Errors (MaterialError)
// - Aggregate (Material, a fold over its transition log)
// - Command Handler (MaterialCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;
