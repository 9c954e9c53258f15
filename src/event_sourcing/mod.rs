// ============================================================================
// Event Sourcing Infrastructure
// ============================================================================
//
// Generic transition-log infrastructure. Aggregates that keep their history
// as an ordered sequence of facts (Material) build on these types.
// Domain-specific code is in src/domain/
//
// ============================================================================

mod core;

pub use self::core::*;
