use serde::{Deserialize, Serialize};

use crate::domain::errors::{parse_number, require_text, ValidationError};
use crate::domain::lookup::{lookup_table, Lookup};

// ============================================================================
// Area Value Objects
// ============================================================================

lookup_table! {
    pub enum AreaType {
        Seeding => ("seeding", "Seeding"),
        Growing => ("growing", "Growing"),
    }
}

lookup_table! {
    pub enum AreaUnit {
        SquareCentimetre => ("cm2", "Square centimetre"),
        SquareMetre => ("m2", "Square metre"),
        Hectare => ("ha", "Hectare"),
    }
}

lookup_table! {
    pub enum AreaLocation {
        Indoor => ("indoor", "Indoor"),
        Outdoor => ("outdoor", "Outdoor"),
    }
}

impl AreaType {
    /// Size units an area of this type may be measured in
    pub fn allowed_units(&self) -> &'static [AreaUnit] {
        match self {
            AreaType::Seeding => &[AreaUnit::SquareCentimetre],
            AreaType::Growing => &[AreaUnit::SquareMetre, AreaUnit::Hectare],
        }
    }

    pub fn allows(&self, unit: AreaUnit) -> bool {
        self.allowed_units().contains(&unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaSize {
    value: f64,
    unit: AreaUnit,
}

impl AreaSize {
    pub fn new(value: f64, unit: AreaUnit) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidOption("size"));
        }
        Ok(Self { value, unit })
    }

    /// Parse raw size text and unit code. Whether the unit suits a given
    /// area type is checked by `Area::change_size`.
    pub fn parse(value: &str, unit: &str) -> Result<Self, ValidationError> {
        let value = parse_number(value, "size")?;
        let unit_code = require_text(unit, "size_unit")?;
        let unit = AreaUnit::get(&unit_code).ok_or(ValidationError::InvalidOption("size_unit"))?;
        Self::new(value, unit)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> AreaUnit {
        self.unit
    }
}

/// Metadata of an uploaded area photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPhoto {
    filename: String,
    mime_type: String,
    /// Size in bytes
    size: u64,
    width: u32,
    height: u32,
}

impl AreaPhoto {
    pub fn new(
        filename: &str,
        mime_type: &str,
        size: u64,
        width: u32,
        height: u32,
    ) -> Result<Self, ValidationError> {
        let filename = require_text(filename, "filename")?;
        if std::path::Path::new(&filename).file_name().is_none() {
            return Err(ValidationError::InvalidOption("filename"));
        }
        let mime_type = require_text(mime_type, "mime_type")?;
        if size == 0 {
            return Err(ValidationError::InvalidOption("photo_size"));
        }
        if width == 0 || height == 0 {
            return Err(ValidationError::InvalidOption("photo_dimension"));
        }

        Ok(Self {
            filename,
            mime_type,
            size,
            width,
            height,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_units_per_type() {
        assert!(AreaType::Seeding.allows(AreaUnit::SquareCentimetre));
        assert!(!AreaType::Seeding.allows(AreaUnit::SquareMetre));
        assert!(AreaType::Growing.allows(AreaUnit::Hectare));
        assert!(!AreaType::Growing.allows(AreaUnit::SquareCentimetre));
    }

    #[test]
    fn test_area_size_parse() {
        let size = AreaSize::parse("10", "m2").unwrap();
        assert_eq!(size.value(), 10.0);
        assert_eq!(size.unit(), AreaUnit::SquareMetre);
    }

    #[test]
    fn test_area_size_parse_failures() {
        assert_eq!(AreaSize::parse("", "m2"), Err(ValidationError::Required("size")));
        assert_eq!(AreaSize::parse("ten", "m2"), Err(ValidationError::ParseFailed("size")));
        assert_eq!(AreaSize::parse("10", "acre"), Err(ValidationError::InvalidOption("size_unit")));
        assert_eq!(AreaSize::parse("10", ""), Err(ValidationError::Required("size_unit")));
        assert_eq!(AreaSize::parse("0", "m2"), Err(ValidationError::InvalidOption("size")));
    }

    #[test]
    fn test_area_photo_validation() {
        assert!(AreaPhoto::new("a.jpg", "image/jpeg", 2048, 640, 480).is_ok());
        assert_eq!(
            AreaPhoto::new("a.jpg", "image/jpeg", 0, 640, 480),
            Err(ValidationError::InvalidOption("photo_size"))
        );
        assert_eq!(
            AreaPhoto::new("a.jpg", "image/jpeg", 2048, 0, 480),
            Err(ValidationError::InvalidOption("photo_dimension"))
        );
        assert_eq!(
            AreaPhoto::new("", "image/jpeg", 2048, 640, 480),
            Err(ValidationError::Required("filename"))
        );
        assert_eq!(
            AreaPhoto::new("..", "image/jpeg", 2048, 640, 480),
            Err(ValidationError::InvalidOption("filename"))
        );
    }
}
