use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ValidationError;

// ============================================================================
// Note - annotation owned by exactly one parent aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Append/remove-only note collection, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notes(Vec<Note>);

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note. Ids are time-ordered v7 UUIDs, so a removed note's id
    /// is never handed out again.
    pub fn add(&mut self, content: &str) -> Result<&Note, ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::Required("content"));
        }

        self.0.push(Note {
            id: Uuid::now_v7(),
            content: content.to_string(),
            created_at: Utc::now(),
        });

        Ok(&self.0[self.0.len() - 1])
    }

    pub fn remove(&mut self, id: Uuid) -> Result<Note, ValidationError> {
        let position = self
            .0
            .iter()
            .position(|note| note.id == id)
            .ok_or(ValidationError::NotFound("note"))?;

        Ok(self.0.remove(position))
    }

    pub fn get(&self, id: Uuid) -> Option<&Note> {
        self.0.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.0.iter()
    }
}
