use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Event Envelope - Transition Record Metadata
// ============================================================================
//
// Wraps a transition record with the metadata needed for ordered replay
// and audit. Generic over the record type.
//
// ============================================================================

/// Generic Event Envelope - wraps any transition record with metadata
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventEnvelope<E> {
    // Identity
    pub event_id: Uuid,
    pub aggregate_id: Uuid,
    pub sequence_number: i64,

    // Type Information
    pub event_type: String,
    pub event_version: i32,

    // Payload
    pub event_data: E,

    pub recorded_at: DateTime<Utc>,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        aggregate_id: Uuid,
        sequence_number: i64,
        event_type: impl Into<String>,
        event_data: E,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            aggregate_id,
            sequence_number,
            event_type: event_type.into(),
            event_version: 1,
            event_data,
            recorded_at: Utc::now(),
        }
    }
}

// ============================================================================
// Domain Event Trait
// ============================================================================

/// All transition records implement this to be wrapped in envelopes.
pub trait DomainEvent: Serialize + for<'de> Deserialize<'de> + Clone + Send + Sync {
    /// Name of the concrete record kind, e.g. `MaterialNameChanged`
    fn event_name(&self) -> &'static str;

    fn event_version() -> i32
    where
        Self: Sized,
    {
        1
    }

    /// Wrap this record as the `sequence_number`-th fact of `aggregate_id`
    fn into_envelope(self, aggregate_id: Uuid, sequence_number: i64) -> EventEnvelope<Self>
    where
        Self: Sized,
    {
        let mut envelope = EventEnvelope::new(aggregate_id, sequence_number, self.event_name(), self);
        envelope.event_version = Self::event_version();
        envelope
    }
}

// ============================================================================
// Event Serialization Helpers
// ============================================================================

pub fn serialize_event<E: Serialize>(event: &E) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}

pub fn deserialize_event<E: for<'de> Deserialize<'de>>(json: &str) -> Result<E> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(tag = "type", content = "data")]
    enum TestEvent {
        Planted { bed: String },
        Watered,
    }

    impl DomainEvent for TestEvent {
        fn event_name(&self) -> &'static str {
            match self {
                TestEvent::Planted { .. } => "Planted",
                TestEvent::Watered => "Watered",
            }
        }
    }

    #[test]
    fn test_into_envelope_uses_variant_name() {
        let aggregate_id = Uuid::new_v4();
        let envelope = TestEvent::Watered.into_envelope(aggregate_id, 4);

        assert_eq!(envelope.aggregate_id, aggregate_id);
        assert_eq!(envelope.sequence_number, 4);
        assert_eq!(envelope.event_type, "Watered");
        assert_eq!(envelope.event_version, 1);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = TestEvent::Planted { bed: "north".to_string() };

        let json = serialize_event(&event).unwrap();
        assert!(json.contains("\"type\":\"Planted\""));

        let back: TestEvent = deserialize_event(&json).unwrap();
        assert_eq!(back, event);
    }
}
