// ============================================================================
// Event Sourcing Core - Generic Abstractions
// ============================================================================
//
// Key Principles:
// - No domain-specific code (no Farm, Material, etc.)
// - Generic over aggregate types
// - No storage engine: logs travel inside the aggregate and are persisted
//   through the repository port like any other field
//
// ============================================================================

pub mod aggregate;
pub mod event;

pub use aggregate::Aggregate;
pub use event::{deserialize_event, serialize_event, DomainEvent, EventEnvelope};
