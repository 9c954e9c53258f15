use serde::{Deserialize, Serialize};

use crate::domain::errors::{parse_number, ValidationError};
use crate::domain::lookup::{lookup_table, Lookup};

// ============================================================================
// Farm Value Objects
// ============================================================================

lookup_table! {
    /// Kind of farming practiced on a farm
    pub enum FarmType {
        Organic => ("organic", "Organic"),
        Hydroponic => ("hydroponic", "Hydroponic"),
        Aquaponic => ("aquaponic", "Aquaponic"),
        Mushroom => ("mushroom", "Mushroom"),
        Livestock => ("livestock", "Livestock"),
    }
}

lookup_table! {
    pub enum Country {
        Indonesia => ("ID", "Indonesia"),
        Netherlands => ("NL", "Netherlands"),
        UnitedStates => ("US", "United States"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub code: &'static str,
    pub name: &'static str,
}

const INDONESIA_CITIES: &[City] = &[
    City { code: "JK", name: "Jakarta" },
    City { code: "BD", name: "Bandung" },
    City { code: "YO", name: "Yogyakarta" },
    City { code: "SUB", name: "Surabaya" },
];

const NETHERLANDS_CITIES: &[City] = &[
    City { code: "AMS", name: "Amsterdam" },
    City { code: "RTM", name: "Rotterdam" },
    City { code: "UTC", name: "Utrecht" },
];

const UNITED_STATES_CITIES: &[City] = &[
    City { code: "NYC", name: "New York" },
    City { code: "SFO", name: "San Francisco" },
    City { code: "SEA", name: "Seattle" },
];

impl Country {
    pub fn cities(&self) -> &'static [City] {
        match self {
            Country::Indonesia => INDONESIA_CITIES,
            Country::Netherlands => NETHERLANDS_CITIES,
            Country::UnitedStates => UNITED_STATES_CITIES,
        }
    }

    pub fn city(&self, code: &str) -> Option<&'static City> {
        let code = code.trim();
        self.cities().iter().find(|city| city.code.eq_ignore_ascii_case(code))
    }
}

/// Farm coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::InvalidOption("latitude"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::InvalidOption("longitude"));
        }
        Ok(Self { latitude, longitude })
    }

    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, ValidationError> {
        let latitude = parse_number(latitude, "latitude")?;
        let longitude = parse_number(longitude, "longitude")?;
        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Country + city pair resolved against the region tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    country: Country,
    city_code: String,
}

impl Region {
    pub fn resolve(country_code: &str, city_code: &str) -> Result<Self, ValidationError> {
        if country_code.trim().is_empty() {
            return Err(ValidationError::Required("country_code"));
        }
        if city_code.trim().is_empty() {
            return Err(ValidationError::Required("city_code"));
        }

        let country = Country::get(country_code).ok_or(ValidationError::InvalidOption("country_code"))?;
        let city = country.city(city_code).ok_or(ValidationError::InvalidOption("city_code"))?;

        Ok(Self {
            country,
            city_code: city.code.to_string(),
        })
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn country_code(&self) -> &'static str {
        self.country.code()
    }

    pub fn city_code(&self) -> &str {
        &self.city_code
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
