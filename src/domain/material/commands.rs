use chrono::NaiveDate;

use super::value_objects::{MaterialQuantity, MaterialType, PricePerUnit};

// ============================================================================
// Material Commands - Represent user intent
// ============================================================================

/// Field changes on an existing material. Each accepted command yields
/// exactly one transition record.
#[derive(Debug, Clone)]
pub enum MaterialCommand {
    ChangeName { name: String },
    ChangePrice { price_per_unit: PricePerUnit },
    ChangeQuantity { quantity: MaterialQuantity },
    ChangeType { material_type: MaterialType },
    ChangeExpirationDate { expiration_date: NaiveDate },
    ChangeNotes { notes: String },
    ChangeProducedBy { produced_by: String },
    ChangeIsExpense { is_expense: bool },
}

/// Raw material form; the category code travels separately.
#[derive(Debug, Clone, Default)]
pub struct CreateMaterial {
    pub name: String,
    pub plant_type: String,
    pub chemical_type: String,
    pub container_type: String,
    pub price_per_unit: String,
    pub currency_code: String,
    pub quantity: String,
    pub quantity_unit: String,
    /// `YYYY-MM-DD`
    pub expiration_date: String,
    pub notes: String,
    pub produced_by: String,
    /// `true` or `false`
    pub is_expense: String,
}
