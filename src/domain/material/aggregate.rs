use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{require_text, ValidationError};
use crate::event_sourcing::{Aggregate, DomainEvent, EventEnvelope};
use crate::repository::Entity;

use super::commands::MaterialCommand;
use super::errors::MaterialError;
use super::events::*;
use super::value_objects::{MaterialQuantity, MaterialType, PricePerUnit};

// ============================================================================
// Material Aggregate - a fold over its transition log
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    id: Uuid,
    version: i64,
    name: String,
    price_per_unit: PricePerUnit,
    material_type: MaterialType,
    quantity: MaterialQuantity,
    expiration_date: Option<NaiveDate>,
    notes: Option<String>,
    produced_by: Option<String>,
    is_expense: Option<bool>,
    created_at: DateTime<Utc>,
    history: Vec<EventEnvelope<MaterialEvent>>,
}

impl Material {
    pub fn create(
        name: &str,
        price_per_unit: PricePerUnit,
        material_type: MaterialType,
        quantity: MaterialQuantity,
    ) -> Result<Self, MaterialError> {
        let name = require_text(name, "name")?;
        if !material_type.allows(quantity.unit()) {
            return Err(ValidationError::InvalidOption("quantity_unit").into());
        }

        let created = MaterialEvent::Created(MaterialCreated {
            material_id: Uuid::new_v4(),
            name,
            price_per_unit,
            material_type,
            quantity,
            created_at: Utc::now(),
        });

        let mut material = Self::apply_first_event(&created)?;
        material.history.push(created.into_envelope(material.id, material.version));
        Ok(material)
    }

    /// Validate a command, then apply and record what it emits.
    /// A rejected command leaves state and history untouched.
    pub fn execute(&mut self, command: MaterialCommand) -> Result<(), MaterialError> {
        let events = self.handle_command(&command)?;

        for event in events {
            self.apply_event(&event)?;
            self.history.push(event.into_envelope(self.id, self.version));
        }

        Ok(())
    }

    pub fn change_name(&mut self, name: &str) -> Result<(), MaterialError> {
        self.execute(MaterialCommand::ChangeName { name: name.to_string() })
    }

    pub fn change_price(&mut self, price_per_unit: PricePerUnit) -> Result<(), MaterialError> {
        self.execute(MaterialCommand::ChangePrice { price_per_unit })
    }

    pub fn change_quantity(&mut self, quantity: MaterialQuantity) -> Result<(), MaterialError> {
        self.execute(MaterialCommand::ChangeQuantity { quantity })
    }

    pub fn change_type(&mut self, material_type: MaterialType) -> Result<(), MaterialError> {
        self.execute(MaterialCommand::ChangeType { material_type })
    }

    pub fn change_expiration_date(&mut self, expiration_date: NaiveDate) -> Result<(), MaterialError> {
        self.execute(MaterialCommand::ChangeExpirationDate { expiration_date })
    }

    pub fn change_notes(&mut self, notes: &str) -> Result<(), MaterialError> {
        self.execute(MaterialCommand::ChangeNotes { notes: notes.to_string() })
    }

    pub fn change_produced_by(&mut self, produced_by: &str) -> Result<(), MaterialError> {
        self.execute(MaterialCommand::ChangeProducedBy { produced_by: produced_by.to_string() })
    }

    pub fn change_is_expense(&mut self, is_expense: bool) -> Result<(), MaterialError> {
        self.execute(MaterialCommand::ChangeIsExpense { is_expense })
    }

    /// Rebuild a material from its transition log
    pub fn replay(history: Vec<EventEnvelope<MaterialEvent>>) -> Result<Self> {
        Self::load_from_events(history)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_per_unit(&self) -> PricePerUnit {
        self.price_per_unit
    }

    pub fn material_type(&self) -> MaterialType {
        self.material_type
    }

    pub fn quantity(&self) -> MaterialQuantity {
        self.quantity
    }

    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration_date
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn produced_by(&self) -> Option<&str> {
        self.produced_by.as_deref()
    }

    pub fn is_expense(&self) -> Option<bool> {
        self.is_expense
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn history(&self) -> &[EventEnvelope<MaterialEvent>] {
        &self.history
    }
}

impl Aggregate for Material {
    type Event = MaterialEvent;
    type Command = MaterialCommand;
    type Error = MaterialError;

    fn apply_first_event(event: &Self::Event) -> Result<Self, Self::Error> {
        match event {
            MaterialEvent::Created(e) => Ok(Self {
                id: e.material_id,
                version: 1,
                name: e.name.clone(),
                price_per_unit: e.price_per_unit,
                material_type: e.material_type,
                quantity: e.quantity,
                expiration_date: None,
                notes: None,
                produced_by: None,
                is_expense: None,
                created_at: e.created_at,
                history: Vec::new(),
            }),
            _ => Err(MaterialError::NotInitialized),
        }
    }

    fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error> {
        match event {
            MaterialEvent::Created(_) => return Err(MaterialError::AlreadyCreated),
            MaterialEvent::NameChanged(e) => {
                self.name = e.name.clone();
            }
            MaterialEvent::PriceChanged(e) => {
                self.price_per_unit = e.price_per_unit;
            }
            MaterialEvent::QuantityChanged(e) => {
                self.quantity = e.quantity;
            }
            MaterialEvent::TypeChanged(e) => {
                self.material_type = e.material_type;
            }
            MaterialEvent::ExpirationDateChanged(e) => {
                self.expiration_date = Some(e.expiration_date);
            }
            MaterialEvent::NotesChanged(e) => {
                self.notes = Some(e.notes.clone());
            }
            MaterialEvent::ProducedByChanged(e) => {
                self.produced_by = Some(e.produced_by.clone());
            }
            MaterialEvent::IsExpenseChanged(e) => {
                self.is_expense = Some(e.is_expense);
            }
        }

        self.version += 1;
        Ok(())
    }

    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let material_id = self.id;

        let event = match command {
            MaterialCommand::ChangeName { name } => MaterialEvent::NameChanged(MaterialNameChanged {
                material_id,
                name: require_text(name, "name")?,
            }),

            MaterialCommand::ChangePrice { price_per_unit } => {
                MaterialEvent::PriceChanged(MaterialPriceChanged {
                    material_id,
                    price_per_unit: *price_per_unit,
                })
            }

            MaterialCommand::ChangeQuantity { quantity } => {
                if !self.material_type.allows(quantity.unit()) {
                    return Err(ValidationError::InvalidOption("quantity_unit").into());
                }
                MaterialEvent::QuantityChanged(MaterialQuantityChanged {
                    material_id,
                    quantity: *quantity,
                })
            }

            MaterialCommand::ChangeType { material_type } => {
                // The stored quantity must stay expressible in the new type's units
                if !material_type.allows(self.quantity.unit()) {
                    return Err(ValidationError::InvalidOption("quantity_unit").into());
                }
                MaterialEvent::TypeChanged(MaterialTypeChanged {
                    material_id,
                    material_type: *material_type,
                })
            }

            MaterialCommand::ChangeExpirationDate { expiration_date } => {
                MaterialEvent::ExpirationDateChanged(MaterialExpirationDateChanged {
                    material_id,
                    expiration_date: *expiration_date,
                })
            }

            MaterialCommand::ChangeNotes { notes } => MaterialEvent::NotesChanged(MaterialNotesChanged {
                material_id,
                notes: require_text(notes, "notes")?,
            }),

            MaterialCommand::ChangeProducedBy { produced_by } => {
                MaterialEvent::ProducedByChanged(MaterialProducedByChanged {
                    material_id,
                    produced_by: require_text(produced_by, "produced_by")?,
                })
            }

            MaterialCommand::ChangeIsExpense { is_expense } => {
                MaterialEvent::IsExpenseChanged(MaterialIsExpenseChanged {
                    material_id,
                    is_expense: *is_expense,
                })
            }
        };

        Ok(vec![event])
    }

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn load_from_events(events: Vec<EventEnvelope<Self::Event>>) -> Result<Self> {
        let Some(first) = events.first() else {
            anyhow::bail!("No events to load");
        };

        let mut material = Self::apply_first_event(&first.event_data)
            .map_err(|e| anyhow::anyhow!("Failed to apply first event: {}", e))?;

        // Records must form one contiguous run 1..=n for a single material
        for (expected, envelope) in (1_i64..).zip(events.iter()) {
            if envelope.sequence_number != expected {
                anyhow::bail!(
                    "Event {} has sequence number {}, expected {}",
                    envelope.event_id,
                    envelope.sequence_number,
                    expected
                );
            }
            if envelope.aggregate_id != material.id || envelope.event_data.material_id() != material.id {
                anyhow::bail!(
                    "Event {} is recorded for material {} with data for {}, expected {}",
                    envelope.event_id,
                    envelope.aggregate_id,
                    envelope.event_data.material_id(),
                    material.id
                );
            }
            if expected > 1 {
                material
                    .apply_event(&envelope.event_data)
                    .map_err(|e| anyhow::anyhow!("Failed to apply event: {}", e))?;
            }
        }

        material.history = events;
        Ok(material)
    }
}

impl Entity for Material {
    const KIND: &'static str = "material";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
