//! User input snapshot and its bounds
//!
//! A `UserInputs` value is taken fresh for every calculation request. The only
//! validation applied is the range each input widget allows.

use serde::{Deserialize, Serialize};

use crate::error::{FootprintError, Result};
use crate::factors::EmissionFactorTable;

/// Inclusive range offered by a slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl InputBounds {
    fn check(&self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(FootprintError::NonFinite(self.field));
        }
        if value < self.min || value > self.max {
            return Err(FootprintError::OutOfRange {
                field: self.field,
                min: self.min,
                max: self.max,
                value,
            });
        }
        Ok(())
    }
}

pub const DISTANCE_BOUNDS: InputBounds = InputBounds { field: "distance", min: 0.0, max: 100.0 };
pub const ELECTRICITY_BOUNDS: InputBounds = InputBounds { field: "electricity", min: 0.0, max: 1000.0 };
pub const WASTE_BOUNDS: InputBounds = InputBounds { field: "waste", min: 0.0, max: 100.0 };

/// Slider step for the float inputs
pub const SLIDER_STEP: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInputs {
    pub country: String,
    pub distance_km_per_day: f64,
    pub electricity_kwh_per_month: f64,
    pub waste_kg_per_week: f64,
    pub meals_per_day: u32,
}

impl UserInputs {
    /// Default inputs: the table's first country and all quantities zero
    pub fn defaults_for(table: &EmissionFactorTable) -> Self {
        Self {
            country: table.default_country().to_string(),
            distance_km_per_day: 0.0,
            electricity_kwh_per_month: 0.0,
            waste_kg_per_week: 0.0,
            meals_per_day: 0,
        }
    }

    /// Check the country is a table key and every float is inside its slider range
    pub fn validate(&self, table: &EmissionFactorTable) -> Result<()> {
        if !table.contains(&self.country) {
            return Err(FootprintError::UnknownCountry(self.country.clone()));
        }
        DISTANCE_BOUNDS.check(self.distance_km_per_day)?;
        ELECTRICITY_BOUNDS.check(self.electricity_kwh_per_month)?;
        WASTE_BOUNDS.check(self.waste_kg_per_week)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(country: &str, distance: f64, electricity: f64, waste: f64, meals: u32) -> UserInputs {
        UserInputs {
            country: country.to_string(),
            distance_km_per_day: distance,
            electricity_kwh_per_month: electricity,
            waste_kg_per_week: waste,
            meals_per_day: meals,
        }
    }

    #[test]
    fn test_defaults() {
        let table = EmissionFactorTable::reference();
        let defaults = UserInputs::defaults_for(&table);
        assert_eq!(defaults, inputs("India", 0.0, 0.0, 0.0, 0));
        assert!(defaults.validate(&table).is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let table = EmissionFactorTable::reference();
        assert!(inputs("Brazil", 100.0, 1000.0, 100.0, 6).validate(&table).is_ok());
        assert!(inputs("Brazil", 0.0, 0.0, 0.0, 0).validate(&table).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let table = EmissionFactorTable::reference();

        let err = inputs("China", 100.5, 0.0, 0.0, 0).validate(&table).unwrap_err();
        assert!(matches!(err, FootprintError::OutOfRange { field: "distance", .. }));

        let err = inputs("China", 0.0, -1.0, 0.0, 0).validate(&table).unwrap_err();
        assert!(matches!(err, FootprintError::OutOfRange { field: "electricity", .. }));

        let err = inputs("China", 0.0, 0.0, 250.0, 0).validate(&table).unwrap_err();
        assert!(matches!(err, FootprintError::OutOfRange { field: "waste", .. }));
    }

    #[test]
    fn test_nan_rejected() {
        let table = EmissionFactorTable::reference();
        let err = inputs("Germany", f64::NAN, 0.0, 0.0, 0).validate(&table).unwrap_err();
        assert!(matches!(err, FootprintError::NonFinite("distance")));
    }

    #[test]
    fn test_unknown_country_rejected() {
        let table = EmissionFactorTable::reference();
        let err = inputs("France", 1.0, 1.0, 1.0, 1).validate(&table).unwrap_err();
        assert!(matches!(err, FootprintError::UnknownCountry(_)));
    }
}
