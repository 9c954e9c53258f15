// ============================================================================
// Area Domain
// ============================================================================
//
// - Value objects (AreaType, AreaSize, AreaLocation, AreaPhoto)
// - Commands (CreateArea raw input, PhotoUpload)
// - Errors (AreaError)
// - Aggregate (Area with notes and optional photo)
// - Photo store (collaborator that keeps uploaded files)
// - Command Handler (AreaCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod photo_store;
pub mod command_handler;

pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use photo_store::*;
pub use command_handler::*;
