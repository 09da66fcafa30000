//! Normalization of period-based inputs to annual quantities
//!
//! distance (per day) x 365, electricity (per month) x 12,
//! meals (per day) x 365, waste (per week) x 52.

use serde::Serialize;

use crate::factors::Category;
use crate::inputs::UserInputs;

/// Yearly physical quantities for each category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualQuantities {
    pub distance_km: f64,
    pub electricity_kwh: f64,
    pub meals: u64,
    pub waste_kg: f64,
}

impl AnnualQuantities {
    pub fn quantity(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.distance_km,
            Category::Electricity => self.electricity_kwh,
            Category::Diet => self.meals as f64,
            Category::Waste => self.waste_kg,
        }
    }
}

/// Scale a positive periodic value to a year; zero stays zero
fn annualize_value(value: f64, category: Category) -> f64 {
    if value > 0.0 {
        value * f64::from(category.annual_multiplier())
    } else {
        value
    }
}

pub fn annualize(inputs: &UserInputs) -> AnnualQuantities {
    let meals = if inputs.meals_per_day > 0 {
        u64::from(inputs.meals_per_day) * u64::from(Category::Diet.annual_multiplier())
    } else {
        0
    };

    AnnualQuantities {
        distance_km: annualize_value(inputs.distance_km_per_day, Category::Transportation),
        electricity_kwh: annualize_value(inputs.electricity_kwh_per_month, Category::Electricity),
        meals,
        waste_kg: annualize_value(inputs.waste_kg_per_week, Category::Waste),
    }
}
