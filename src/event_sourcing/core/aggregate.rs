use anyhow::Result;
use uuid::Uuid;

use super::event::EventEnvelope;

// ============================================================================
// Aggregate Root Pattern - Transition Log Core
// ============================================================================
//
// Key Principles:
// 1. State is derived from transition records (a fold in creation order)
// 2. Commands are validated before emitting records
// 3. Records represent facts that have already happened
// 4. A rejected command emits nothing
//
// ============================================================================

/// Generic Aggregate trait - every log-backed aggregate implements this
///
/// Type Parameters:
/// - `Event`: The transition record type for this aggregate
/// - `Command`: The command type for this aggregate
/// - `Error`: The error type for business rule violations
pub trait Aggregate: Sized + Send + Sync {
    type Event;
    type Command;
    type Error;

    /// Create new aggregate from first record
    fn apply_first_event(event: &Self::Event) -> Result<Self, Self::Error>;

    /// Apply subsequent records to update state
    fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error>;

    /// Handle command and emit records (business logic)
    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Get aggregate ID
    fn aggregate_id(&self) -> Uuid;

    /// Get current version (sequence number of the last applied record)
    fn version(&self) -> i64;

    /// Reconstruct an aggregate by replaying its history
    fn load_from_events(events: Vec<EventEnvelope<Self::Event>>) -> Result<Self>
    where
        Self::Error: std::fmt::Display,
    {
        let Some((first, rest)) = events.split_first() else {
            anyhow::bail!("No events to load");
        };

        let mut aggregate = Self::apply_first_event(&first.event_data)
            .map_err(|e| anyhow::anyhow!("Failed to apply first event: {}", e))?;

        for envelope in rest {
            aggregate
                .apply_event(&envelope.event_data)
                .map_err(|e| anyhow::anyhow!("Failed to apply event: {}", e))?;
        }

        Ok(aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Counter {
        id: Uuid,
        total: i64,
        version: i64,
    }

    #[derive(Debug)]
    enum CounterEvent {
        Opened(Uuid),
        Added(i64),
    }

    impl Aggregate for Counter {
        type Event = CounterEvent;
        type Command = i64;
        type Error = String;

        fn apply_first_event(event: &Self::Event) -> Result<Self, Self::Error> {
            match event {
                CounterEvent::Opened(id) => Ok(Self { id: *id, total: 0, version: 1 }),
                _ => Err("counter not opened".to_string()),
            }
        }

        fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error> {
            match event {
                CounterEvent::Opened(_) => return Err("already opened".to_string()),
                CounterEvent::Added(n) => self.total += n,
            }
            self.version += 1;
            Ok(())
        }

        fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
            if *command < 0 {
                return Err("negative".to_string());
            }
            Ok(vec![CounterEvent::Added(*command)])
        }

        fn aggregate_id(&self) -> Uuid {
            self.id
        }

        fn version(&self) -> i64 {
            self.version
        }
    }

    #[test]
    fn test_load_from_events_folds_in_order() {
        let id = Uuid::new_v4();
        let events = vec![
            EventEnvelope::new(id, 1, "Opened", CounterEvent::Opened(id)),
            EventEnvelope::new(id, 2, "Added", CounterEvent::Added(3)),
            EventEnvelope::new(id, 3, "Added", CounterEvent::Added(4)),
        ];

        let counter = Counter::load_from_events(events).unwrap();
        assert_eq!(counter.aggregate_id(), id);
        assert_eq!(counter.total, 7);
        assert_eq!(counter.version(), 3);
    }

    #[test]
    fn test_load_from_empty_history_fails() {
        assert!(Counter::load_from_events(vec![]).is_err());
    }

    #[test]
    fn test_load_rejects_history_not_starting_with_creation() {
        let id = Uuid::new_v4();
        let events = vec![EventEnvelope::new(id, 1, "Added", CounterEvent::Added(1))];
        assert!(Counter::load_from_events(events).is_err());
    }
}
