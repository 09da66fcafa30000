//! Footprint Calculator
//!
//! For each category: `tonnes = round2(factor * annual_quantity / 1000)`.
//! The total is `round2` of the sum of the already-rounded category values.
//! That double rounding is kept for output compatibility with earlier reports;
//! `EmissionResult::unrounded_total` gives the single-rounding figure for
//! comparison.

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::factors::{Category, CategoryFactors, EmissionFactorTable};
use crate::inputs::UserInputs;
use crate::normalization::{annualize, AnnualQuantities};

pub const KG_PER_TONNE: f64 = 1000.0;

/// Reporting unit shown next to every value
pub const RESULT_UNIT: &str = "tonnes CO2 per year";

/// Round to 2 decimals, halves away from zero.
///
/// Scaling by 100 first means a value written as 0.365 rounds to 0.37 even
/// though its binary form sits just below the midpoint.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Annual emissions in tonnes CO2
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionResult {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    pub total: f64,
    #[serde(skip)]
    raw: [f64; 4],
}

impl EmissionResult {
    pub fn zero() -> Self {
        Self {
            transportation: 0.0,
            electricity: 0.0,
            diet: 0.0,
            waste: 0.0,
            total: 0.0,
            raw: [0.0; 4],
        }
    }

    /// Build from unrounded per-category tonnes, in `Category::ALL` order
    pub fn from_raw_tonnes(raw: [f64; 4]) -> Self {
        let [transportation, electricity, diet, waste] = raw.map(round2);
        let total = round2(transportation + electricity + diet + waste);
        Self {
            transportation,
            electricity,
            diet,
            waste,
            total,
            raw,
        }
    }

    pub fn category(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Electricity => self.electricity,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
        }
    }

    /// Total rounded once from the unrounded category values
    pub fn unrounded_total(&self) -> f64 {
        round2(self.raw.iter().sum())
    }
}

fn category_tonnes(factors: &CategoryFactors, annual: &AnnualQuantities, category: Category) -> f64 {
    factors.factor(category) * annual.quantity(category) / KG_PER_TONNE
}

/// Compute the footprint for one input snapshot.
///
/// Fails only when `inputs.country` is not a key of `table`.
pub fn calculate(table: &EmissionFactorTable, inputs: &UserInputs) -> Result<EmissionResult> {
    let factors = table.lookup(&inputs.country)?;
    let annual = annualize(inputs);
    let raw = Category::ALL.map(|category| category_tonnes(factors, &annual, category));
    Ok(EmissionResult::from_raw_tonnes(raw))
}

/// Inputs, their annual quantities and the resulting emissions
#[derive(Debug, Clone, Serialize)]
pub struct FootprintReport {
    pub inputs: UserInputs,
    pub annual: AnnualQuantities,
    pub result: EmissionResult,
    pub unit: &'static str,
}

/// Calculator bound to one emission factor table
#[derive(Debug, Clone)]
pub struct FootprintCalculator {
    table: Arc<EmissionFactorTable>,
}

impl FootprintCalculator {
    pub fn new(table: Arc<EmissionFactorTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &EmissionFactorTable {
        &self.table
    }

    /// Validate the snapshot against the slider bounds, then calculate
    pub fn calculate(&self, inputs: &UserInputs) -> Result<EmissionResult> {
        inputs.validate(&self.table)?;
        let result = calculate(&self.table, inputs)?;
        tracing::debug!(
            country = %inputs.country,
            total = result.total,
            "Calculated footprint"
        );
        Ok(result)
    }

    pub fn report(&self, inputs: UserInputs) -> Result<FootprintReport> {
        let result = self.calculate(&inputs)?;
        let annual = annualize(&inputs);
        Ok(FootprintReport {
            inputs,
            annual,
            result,
            unit: RESULT_UNIT,
        })
    }
}
