// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Shared building blocks (validation taxonomy, lookup tables, notes) plus
// one subdirectory per aggregate with:
// - Value objects
// - Commands (raw caller intent)
// - Errors
// - Aggregate implementation
// - Command handler
//
// Material additionally keeps an append-only transition log (events.rs).
//
// ============================================================================

pub mod errors;
pub mod lookup;
pub mod note;

pub mod farm;
pub mod reservoir;
pub mod area;
pub mod material;

pub use errors::{validation_error, ValidationError};
pub use lookup::Lookup;
pub use note::{Note, Notes};
