use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event_sourcing::DomainEvent;

use super::value_objects::{MaterialQuantity, MaterialType, PricePerUnit};

// ============================================================================
// Material Transition Records
// ============================================================================

/// Union type for all material transition records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum MaterialEvent {
    Created(MaterialCreated),
    NameChanged(MaterialNameChanged),
    PriceChanged(MaterialPriceChanged),
    QuantityChanged(MaterialQuantityChanged),
    TypeChanged(MaterialTypeChanged),
    ExpirationDateChanged(MaterialExpirationDateChanged),
    NotesChanged(MaterialNotesChanged),
    ProducedByChanged(MaterialProducedByChanged),
    IsExpenseChanged(MaterialIsExpenseChanged),
}

impl MaterialEvent {
    pub fn material_id(&self) -> Uuid {
        match self {
            MaterialEvent::Created(e) => e.material_id,
            MaterialEvent::NameChanged(e) => e.material_id,
            MaterialEvent::PriceChanged(e) => e.material_id,
            MaterialEvent::QuantityChanged(e) => e.material_id,
            MaterialEvent::TypeChanged(e) => e.material_id,
            MaterialEvent::ExpirationDateChanged(e) => e.material_id,
            MaterialEvent::NotesChanged(e) => e.material_id,
            MaterialEvent::ProducedByChanged(e) => e.material_id,
            MaterialEvent::IsExpenseChanged(e) => e.material_id,
        }
    }
}

impl DomainEvent for MaterialEvent {
    fn event_name(&self) -> &'static str {
        match self {
            MaterialEvent::Created(_) => "MaterialCreated",
            MaterialEvent::NameChanged(_) => "MaterialNameChanged",
            MaterialEvent::PriceChanged(_) => "MaterialPriceChanged",
            MaterialEvent::QuantityChanged(_) => "MaterialQuantityChanged",
            MaterialEvent::TypeChanged(_) => "MaterialTypeChanged",
            MaterialEvent::ExpirationDateChanged(_) => "MaterialExpirationDateChanged",
            MaterialEvent::NotesChanged(_) => "MaterialNotesChanged",
            MaterialEvent::ProducedByChanged(_) => "MaterialProducedByChanged",
            MaterialEvent::IsExpenseChanged(_) => "MaterialIsExpenseChanged",
        }
    }
}

// Individual record types

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCreated {
    pub material_id: Uuid,
    pub name: String,
    pub price_per_unit: PricePerUnit,
    pub material_type: MaterialType,
    pub quantity: MaterialQuantity,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialNameChanged {
    pub material_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPriceChanged {
    pub material_id: Uuid,
    pub price_per_unit: PricePerUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantityChanged {
    pub material_id: Uuid,
    pub quantity: MaterialQuantity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialTypeChanged {
    pub material_id: Uuid,
    pub material_type: MaterialType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialExpirationDateChanged {
    pub material_id: Uuid,
    pub expiration_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialNotesChanged {
    pub material_id: Uuid,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProducedByChanged {
    pub material_id: Uuid,
    pub produced_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialIsExpenseChanged {
    pub material_id: Uuid,
    pub is_expense: bool,
}
