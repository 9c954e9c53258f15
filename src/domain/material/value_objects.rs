use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{parse_number, require_text, ValidationError};
use crate::domain::lookup::{lookup_table, Lookup};

// ============================================================================
// Material Value Objects
// ============================================================================

lookup_table! {
    pub enum PlantType {
        Vegetable => ("vegetable", "Vegetable"),
        Fruit => ("fruit", "Fruit"),
        Herb => ("herb", "Herb"),
        Flower => ("flower", "Flower"),
        Tree => ("tree", "Tree"),
    }
}

lookup_table! {
    pub enum ChemicalType {
        Disinfectant => ("disinfectant", "Disinfectant and Sanitizer"),
        Fertilizer => ("fertilizer", "Fertilizer"),
        Hormone => ("hormone", "Hormone and Growth Agent"),
        Manure => ("manure", "Manure"),
        Pesticide => ("pesticide", "Pesticide"),
    }
}

lookup_table! {
    pub enum ContainerType {
        Tray => ("tray", "Tray"),
        Pot => ("pot", "Pot"),
    }
}

lookup_table! {
    pub enum Currency {
        Idr => ("IDR", "Indonesian Rupiah"),
        Usd => ("USD", "US Dollar"),
        Eur => ("EUR", "Euro"),
    }
}

lookup_table! {
    pub enum QuantityUnit {
        Seeds => ("seeds", "Seeds"),
        Packets => ("packets", "Packets"),
        Gram => ("gram", "Gram"),
        Kilogram => ("kilogram", "Kilogram"),
        Bags => ("bags", "Bags"),
        Bottles => ("bottles", "Bottles"),
        CubicMetre => ("cubic_metre", "Cubic metre"),
        Pieces => ("pieces", "Pieces"),
        Boxes => ("boxes", "Boxes"),
    }
}

lookup_table! {
    /// Category code a caller picks a material type by
    pub enum MaterialCategory {
        Seed => ("seed", "Seed"),
        Agrochemical => ("agrochemical", "Agrochemical"),
        GrowingMedium => ("growing_medium", "Growing medium"),
        LabelAndCropSupport => ("label_and_crop_support", "Label and crop support"),
        SeedingContainer => ("seeding_container", "Seeding container"),
        PostHarvestSupply => ("post_harvest_supply", "Post-harvest supply"),
        Other => ("other", "Other"),
    }
}

impl MaterialCategory {
    pub fn allowed_units(&self) -> &'static [QuantityUnit] {
        use QuantityUnit::*;

        match self {
            MaterialCategory::Seed => &[Seeds, Packets, Gram, Kilogram],
            MaterialCategory::Agrochemical => &[Packets, Bottles, Bags],
            MaterialCategory::GrowingMedium => &[Bags, CubicMetre],
            MaterialCategory::LabelAndCropSupport => &[Pieces],
            MaterialCategory::SeedingContainer => &[Pieces],
            MaterialCategory::PostHarvestSupply => &[Pieces, Boxes, Packets, Bags],
            MaterialCategory::Other => &[Pieces, Boxes, Packets, Bags, Bottles],
        }
    }
}

/// Closed set of material types. Categories with a secondary code carry the
/// resolved entry, so a variant always holds a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum MaterialType {
    Seed { plant_type: PlantType },
    Agrochemical { chemical_type: ChemicalType },
    GrowingMedium,
    LabelAndCropSupport,
    SeedingContainer { container_type: ContainerType },
    PostHarvestSupply,
    Other,
}

/// Secondary codes supplied next to a category code; only the one matching
/// the category is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialTypeCodes<'a> {
    pub plant_type: &'a str,
    pub chemical_type: &'a str,
    pub container_type: &'a str,
}

impl MaterialType {
    pub fn resolve(category: &str, codes: &MaterialTypeCodes<'_>) -> Result<Self, ValidationError> {
        let category = MaterialCategory::get(category).ok_or(ValidationError::InvalidOption("type"))?;

        let material_type = match category {
            MaterialCategory::Seed => MaterialType::Seed {
                plant_type: lookup_code(codes.plant_type, "plant_type")?,
            },
            MaterialCategory::Agrochemical => MaterialType::Agrochemical {
                chemical_type: lookup_code(codes.chemical_type, "chemical_type")?,
            },
            MaterialCategory::SeedingContainer => MaterialType::SeedingContainer {
                container_type: lookup_code(codes.container_type, "container_type")?,
            },
            MaterialCategory::GrowingMedium => MaterialType::GrowingMedium,
            MaterialCategory::LabelAndCropSupport => MaterialType::LabelAndCropSupport,
            MaterialCategory::PostHarvestSupply => MaterialType::PostHarvestSupply,
            MaterialCategory::Other => MaterialType::Other,
        };

        Ok(material_type)
    }

    pub fn category(&self) -> MaterialCategory {
        match self {
            MaterialType::Seed { .. } => MaterialCategory::Seed,
            MaterialType::Agrochemical { .. } => MaterialCategory::Agrochemical,
            MaterialType::GrowingMedium => MaterialCategory::GrowingMedium,
            MaterialType::LabelAndCropSupport => MaterialCategory::LabelAndCropSupport,
            MaterialType::SeedingContainer { .. } => MaterialCategory::SeedingContainer,
            MaterialType::PostHarvestSupply => MaterialCategory::PostHarvestSupply,
            MaterialType::Other => MaterialCategory::Other,
        }
    }

    pub fn allows(&self, unit: QuantityUnit) -> bool {
        self.category().allowed_units().contains(&unit)
    }
}

fn lookup_code<T: Lookup>(raw: &str, field: &'static str) -> Result<T, ValidationError> {
    T::get(raw).ok_or(ValidationError::InvalidOption(field))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePerUnit {
    amount: Decimal,
    currency: Currency,
}

impl PricePerUnit {
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::InvalidOption("price_per_unit"));
        }
        Ok(Self { amount, currency })
    }

    pub fn parse(amount: &str, currency_code: &str) -> Result<Self, ValidationError> {
        let amount = require_text(amount, "price_per_unit")?;
        let amount = Decimal::from_str(&amount).map_err(|_| ValidationError::ParseFailed("price_per_unit"))?;

        let currency_code = require_text(currency_code, "currency_code")?;
        let currency = Currency::get(&currency_code).ok_or(ValidationError::InvalidOption("currency_code"))?;

        Self::new(amount, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantity {
    value: f64,
    unit: QuantityUnit,
}

impl MaterialQuantity {
    pub fn new(value: f64, unit: QuantityUnit) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidOption("quantity"));
        }
        Ok(Self { value, unit })
    }

    /// Parse raw quantity text and unit code. Whether the unit suits the
    /// material type is checked by the Material aggregate.
    pub fn parse(value: &str, unit: &str) -> Result<Self, ValidationError> {
        let value = parse_number(value, "quantity")?;
        let unit_code = require_text(unit, "quantity_unit")?;
        let unit = QuantityUnit::get(&unit_code).ok_or(ValidationError::InvalidOption("quantity_unit"))?;
        Self::new(value, unit)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> QuantityUnit {
        self.unit
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
