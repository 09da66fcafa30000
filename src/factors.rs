//! Emission Factor Table
//!
//! Maps a country to four per-category coefficients (kg CO2 per physical unit):
//! - Transportation: kg CO2 per km travelled
//! - Electricity: kg CO2 per kWh consumed
//! - Diet: kg CO2 per meal
//! - Waste: kg CO2 per kg of waste
//!
//! The built-in reference data covers five countries. Alternative tables can be
//! loaded from JSON with the same shape as `data/emission_factors.json`:
//!
//! ```json
//! { "countries": [
//!     { "country": "India", "transportation": 0.1, "electricity": 0.6, "diet": 1.0, "waste": 0.4 }
//! ] }
//! ```
//!
//! Entry order is the order countries are offered to the user; the first entry
//! is the default selection.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{FootprintError, Result};

/// Footprint contributor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transportation,
    Electricity,
    Diet,
    Waste,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::Electricity,
        Category::Diet,
        Category::Waste,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Electricity => "Electricity",
            Category::Diet => "Diet",
            Category::Waste => "Waste",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Transportation => "🚗",
            Category::Electricity => "💡",
            Category::Diet => "🍽️",
            Category::Waste => "🗑️",
        }
    }

    /// Unit of the raw user input for this category
    pub fn input_unit(&self) -> &'static str {
        match self {
            Category::Transportation => "km/day",
            Category::Electricity => "kWh/month",
            Category::Diet => "meals/day",
            Category::Waste => "kg/week",
        }
    }

    /// Periods per year for the raw input (daily, monthly, daily, weekly)
    pub fn annual_multiplier(&self) -> u32 {
        match self {
            Category::Transportation => 365,
            Category::Electricity => 12,
            Category::Diet => 365,
            Category::Waste => 52,
        }
    }
}

/// Coefficients for one country (kg CO2 per unit)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryFactors {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
}

impl CategoryFactors {
    pub fn factor(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Electricity => self.electricity,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
        }
    }
}

/// One row of the table as it appears on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryFactors {
    pub country: String,
    #[serde(flatten)]
    pub factors: CategoryFactors,
}

#[derive(Debug, Deserialize, Serialize)]
struct TableFile {
    countries: Vec<CountryFactors>,
}

// ============================================================================
// REFERENCE DATA
// ============================================================================

static REFERENCE_JSON: &str = include_str!("../data/emission_factors.json");

static REFERENCE_TABLE: OnceLock<EmissionFactorTable> = OnceLock::new();

/// Immutable country -> coefficients mapping
#[derive(Debug, Clone)]
pub struct EmissionFactorTable {
    entries: Vec<CountryFactors>,
    index: FxHashMap<String, usize>,
}

impl EmissionFactorTable {
    /// Build a table from rows, checking the table invariants
    pub fn new(entries: Vec<CountryFactors>) -> Result<Self> {
        if entries.is_empty() {
            return Err(FootprintError::InvalidTable("table has no countries".to_string()));
        }

        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if entry.country.trim().is_empty() {
                return Err(FootprintError::InvalidTable(format!("entry {} has an empty country name", i)));
            }
            for category in Category::ALL {
                let value = entry.factors.factor(category);
                if !value.is_finite() || value < 0.0 {
                    return Err(FootprintError::InvalidTable(format!(
                        "{} {} coefficient must be a non-negative number, got {}",
                        entry.country,
                        category.label(),
                        value
                    )));
                }
            }
            if index.insert(entry.country.clone(), i).is_some() {
                return Err(FootprintError::InvalidTable(format!("duplicate country '{}'", entry.country)));
            }
        }

        Ok(Self { entries, index })
    }

    /// The built-in five-country table, parsed once from `data/emission_factors.json`
    pub fn reference() -> Self {
        REFERENCE_TABLE
            .get_or_init(|| {
                // Compiled-in data; test_reference_is_parsed_from_bundled_file guards it
                Self::from_json_str(REFERENCE_JSON)
                    .expect("bundled data/emission_factors.json is a valid table")
            })
            .clone()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(json)?;
        Self::new(file.countries)
    }

    /// Load a table from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let table = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} emission factor entries from {:?}", table.len(), path);
        Ok(table)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({ "countries": self.entries })
    }

    pub fn lookup(&self, country: &str) -> Result<&CategoryFactors> {
        self.index
            .get(country)
            .map(|&i| &self.entries[i].factors)
            .ok_or_else(|| FootprintError::UnknownCountry(country.to_string()))
    }

    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    /// Country names in display order
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.country.as_str())
    }

    pub fn entries(&self) -> &[CountryFactors] {
        &self.entries
    }

    pub fn default_country(&self) -> &str {
        // new() rejects empty tables and reference() is non-empty
        &self.entries[0].country
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_has_five_countries_in_display_order() {
        let table = EmissionFactorTable::reference();
        let countries: Vec<&str> = table.countries().collect();
        assert_eq!(countries, vec!["India", "Brazil", "Germany", "China", "United States"]);
        assert_eq!(table.default_country(), "India");
    }

    #[test]
    fn test_reference_values() {
        let table = EmissionFactorTable::reference();

        let us = table.lookup("United States").unwrap();
        assert_relative_eq!(us.transportation, 0.4);
        assert_relative_eq!(us.diet, 2.5);

        let germany = table.lookup("Germany").unwrap();
        assert_relative_eq!(germany.factor(Category::Transportation), 0.15);
        assert_relative_eq!(germany.factor(Category::Electricity), 0.3);
        assert_relative_eq!(germany.factor(Category::Waste), 0.5);
    }

    #[test]
    fn test_lookup_unknown_country() {
        let table = EmissionFactorTable::reference();
        let err = table.lookup("Atlantis").unwrap_err();
        assert!(matches!(err, FootprintError::UnknownCountry(ref c) if c == "Atlantis"));
        // Keys are exact, not case-folded
        assert!(table.lookup("india").is_err());
    }

    #[test]
    fn test_reference_is_parsed_from_bundled_file() {
        let file: serde_json::Value = serde_json::from_str(REFERENCE_JSON).unwrap();
        let reference = EmissionFactorTable::reference();
        assert_eq!(reference.to_json_value(), file);

        let rows = file["countries"].as_array().unwrap();
        assert_eq!(rows.len(), reference.len());
        for (row, country) in rows.iter().zip(reference.countries()) {
            assert_eq!(row["country"].as_str(), Some(country));
        }
    }

    #[test]
    fn test_reference_is_cached() {
        let first = EmissionFactorTable::reference();
        let second = EmissionFactorTable::reference();
        assert!(REFERENCE_TABLE.get().is_some());
        assert_eq!(first.to_json_value(), second.to_json_value());
    }

    #[test]
    fn test_missing_category_rejected() {
        let json = r#"{"countries": [
            {"country": "Nowhere", "transportation": 0.1, "electricity": 0.2, "diet": 0.3}
        ]}"#;
        assert!(matches!(
            EmissionFactorTable::from_json_str(json),
            Err(FootprintError::Json(_))
        ));
    }

    #[test]
    fn test_invalid_tables_rejected() {
        let negative = r#"{"countries": [
            {"country": "A", "transportation": -0.1, "electricity": 0.2, "diet": 0.3, "waste": 0.4}
        ]}"#;
        assert!(matches!(
            EmissionFactorTable::from_json_str(negative),
            Err(FootprintError::InvalidTable(_))
        ));

        let duplicate = r#"{"countries": [
            {"country": "A", "transportation": 0.1, "electricity": 0.2, "diet": 0.3, "waste": 0.4},
            {"country": "A", "transportation": 0.5, "electricity": 0.6, "diet": 0.7, "waste": 0.8}
        ]}"#;
        assert!(matches!(
            EmissionFactorTable::from_json_str(duplicate),
            Err(FootprintError::InvalidTable(_))
        ));

        let empty = r#"{"countries": []}"#;
        assert!(matches!(
            EmissionFactorTable::from_json_str(empty),
            Err(FootprintError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_annual_multipliers() {
        assert_eq!(Category::Transportation.annual_multiplier(), 365);
        assert_eq!(Category::Electricity.annual_multiplier(), 12);
        assert_eq!(Category::Diet.annual_multiplier(), 365);
        assert_eq!(Category::Waste.annual_multiplier(), 52);
    }
}
