// ============================================================================
// Farm Domain
// ============================================================================
//
// - Value objects (FarmType, GeoLocation, Region, Country)
// - Commands (CreateFarm raw input)
// - Errors (FarmError)
// - Aggregate (Farm with denormalized reservoir/area mirrors)
// - Child sync (mutate child -> sync farm -> persist both)
// - Command Handler (FarmCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod child_sync;
pub mod command_handler;

pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use child_sync::*;
pub use command_handler::*;
