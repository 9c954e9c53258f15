// ============================================================================
// Reservoir Domain
// ============================================================================
//
// - Value objects (WaterSourceType, Bucket, WaterSource)
// - Commands (CreateReservoir raw input)
// - Errors (ReservoirError)
// - Aggregate (Reservoir with notes)
// - Command Handler (ReservoirCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;
