//! Presenter: calculator screen states and display rows
//!
//! The screen is either `Idle` (inputs editable, nothing shown) or
//! `ResultShown` (results for the inputs captured when Calculate was pressed).
//! Results are only produced by `CalculatorView::trigger`; there is no reset,
//! a new trigger simply replaces the shown result.

use serde::Serialize;

use crate::calculator::{EmissionResult, FootprintCalculator, RESULT_UNIT};
use crate::error::Result;
use crate::factors::{Category, EmissionFactorTable};
use crate::inputs::UserInputs;

pub const PAGE_TITLE: &str = "Personal Carbon Calculator";

pub const PER_CAPITA_HEADING: &str = "What is CO2 emissions per capita?";

pub const CO2_DEFINITION: &str = "Carbon dioxide emissions are those stemming from the burning of fossil fuels and the manufacture of cement. They include carbon dioxide produced during consumption of solid, liquid, and gas fuels and gas";

pub const PER_CAPITA_FIGURES: &str = "In 2021, CO2 emissions per capita for India was 1.9 tons, for germany 9.42 tons, for USA 15.32 tons, for brazil 2.24 tons, china 7.42 tons.";

/// Advisory blocks shown with every result, in display order
pub const ADVISORY_TEXT: [&str; 3] = [PER_CAPITA_HEADING, CO2_DEFINITION, PER_CAPITA_FIGURES];

/// Format a tonnes value as shortest decimal with at least one fractional digit
pub fn format_tonnes(value: f64) -> String {
    format!("{:?}", value)
}

/// One rendered result row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultLine {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl ResultLine {
    pub fn text(&self) -> String {
        format!("{} {}: {} {}", self.icon, self.label, self.value, self.unit)
    }
}

/// Per-category rows in display order
pub fn category_lines(result: &EmissionResult) -> Vec<ResultLine> {
    Category::ALL
        .iter()
        .map(|category| ResultLine {
            icon: category.icon(),
            label: category.label(),
            value: format_tonnes(result.category(*category)),
            unit: RESULT_UNIT,
        })
        .collect()
}

pub fn total_line(result: &EmissionResult) -> String {
    format!(
        "🌍 Your total carbon footprint is: {} {}",
        format_tonnes(result.total),
        RESULT_UNIT
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CalculatorView {
    Idle {
        inputs: UserInputs,
    },
    ResultShown {
        inputs: UserInputs,
        result: EmissionResult,
    },
}

impl CalculatorView {
    /// Initial screen: default inputs, no result
    pub fn idle(table: &EmissionFactorTable) -> Self {
        CalculatorView::Idle {
            inputs: UserInputs::defaults_for(table),
        }
    }

    /// Calculate from the snapshot taken at trigger time
    pub fn trigger(calculator: &FootprintCalculator, inputs: UserInputs) -> Result<Self> {
        let result = calculator.calculate(&inputs)?;
        Ok(CalculatorView::ResultShown { inputs, result })
    }

    pub fn inputs(&self) -> &UserInputs {
        match self {
            CalculatorView::Idle { inputs } | CalculatorView::ResultShown { inputs, .. } => inputs,
        }
    }

    pub fn result(&self) -> Option<&EmissionResult> {
        match self {
            CalculatorView::Idle { .. } => None,
            CalculatorView::ResultShown { result, .. } => Some(result),
        }
    }
}

/// Plain-text rendition of the screen
pub fn render_text(view: &CalculatorView) -> String {
    let inputs = view.inputs();
    let mut out = String::new();

    out.push_str(PAGE_TITLE);
    out.push_str("\n\n");
    out.push_str(&format!("🌍 Country: {}\n", inputs.country));
    out.push_str(&format!("🚗 Daily commute distance: {} km\n", inputs.distance_km_per_day));
    out.push_str(&format!("💡 Monthly electricity consumption: {} kWh\n", inputs.electricity_kwh_per_month));
    out.push_str(&format!("🗑️ Waste generated per week: {} kg\n", inputs.waste_kg_per_week));
    out.push_str(&format!("🍽️ Number of meals per day: {}\n", inputs.meals_per_day));

    let Some(result) = view.result() else {
        return out;
    };

    out.push_str("\nResults\n\nCarbon Emissions by Category\n");
    for line in category_lines(result) {
        out.push_str(&line.text());
        out.push('\n');
    }
    out.push_str("\nTotal Carbon Footprint\n");
    out.push_str(&total_line(result));
    out.push('\n');
    for text in ADVISORY_TEXT {
        out.push_str(text);
        out.push('\n');
    }
    out
}
