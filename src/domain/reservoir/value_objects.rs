use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;
use crate::domain::lookup::lookup_table;

// ============================================================================
// Reservoir Value Objects
// ============================================================================

lookup_table! {
    pub enum WaterSourceType {
        Bucket => ("bucket", "Bucket"),
        Tap => ("tap", "Tap"),
    }
}

/// Finite water container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    capacity: f64,
    volume: f64,
}

impl Bucket {
    pub fn new(capacity: f64, volume: f64) -> Result<Self, ValidationError> {
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(ValidationError::InvalidOption("capacity"));
        }
        if !volume.is_finite() || volume < 0.0 || volume > capacity {
            return Err(ValidationError::InvalidOption("volume"));
        }
        Ok(Self { capacity, volume })
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WaterSource {
    Bucket(Bucket),
    Tap,
}

impl WaterSource {
    pub fn source_type(&self) -> WaterSourceType {
        match self {
            WaterSource::Bucket(_) => WaterSourceType::Bucket,
            WaterSource::Tap => WaterSourceType::Tap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_creation() {
        let bucket = Bucket::new(10.0, 4.0).unwrap();
        assert_eq!(bucket.capacity(), 10.0);
        assert_eq!(bucket.volume(), 4.0);
    }

    #[test]
    fn test_bucket_rejects_negative_capacity() {
        assert_eq!(Bucket::new(-1.0, 0.0), Err(ValidationError::InvalidOption("capacity")));
    }

    #[test]
    fn test_bucket_rejects_overflowing_volume() {
        assert_eq!(Bucket::new(10.0, 10.5), Err(ValidationError::InvalidOption("volume")));
        assert!(Bucket::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_water_source_json_is_tagged() {
        let json = serde_json::to_string(&WaterSource::Bucket(Bucket::new(5.0, 1.0).unwrap())).unwrap();
        assert!(json.contains("\"type\":\"bucket\""));
        assert_eq!(WaterSource::Tap.source_type(), WaterSourceType::Tap);
    }
}
