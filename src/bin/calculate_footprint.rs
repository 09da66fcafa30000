//! Calculate Footprint
//!
//! One calculation from the command line, printed the way the results panel
//! shows it.
//!
//! Run with:
//!   cargo run --bin calculate_footprint -- India 10 100 5 2
//!
//! Arguments: <country> <km per day> <kWh per month> <kg waste per week> <meals per day>
//! Set EMISSION_FACTORS to use a JSON factor table instead of the built-in one.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use carbon_calculator::{render_text, AppConfig, CalculatorView, FootprintCalculator, UserInputs};

const USAGE: &str =
    "usage: calculate_footprint <country> <km/day> <kWh/month> <kg waste/week> <meals/day>";

fn parse_inputs(args: &[String]) -> Result<UserInputs> {
    let [country, distance, electricity, waste, meals] = args else {
        bail!("{}", USAGE);
    };

    Ok(UserInputs {
        country: country.clone(),
        distance_km_per_day: distance
            .parse()
            .with_context(|| format!("Invalid distance: {}", distance))?,
        electricity_kwh_per_month: electricity
            .parse()
            .with_context(|| format!("Invalid electricity: {}", electricity))?,
        waste_kg_per_week: waste
            .parse()
            .with_context(|| format!("Invalid waste: {}", waste))?,
        meals_per_day: meals
            .parse()
            .with_context(|| format!("Invalid meals: {}", meals))?,
    })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs = parse_inputs(&args)?;

    let table = AppConfig::from_env().load_table()?;
    let calculator = FootprintCalculator::new(Arc::new(table));

    let view = CalculatorView::trigger(&calculator, inputs)
        .with_context(|| format!("Supported countries: {}", calculator.table().countries().collect::<Vec<_>>().join(", ")))?;

    print!("{}", render_text(&view));
    Ok(())
}
