//! Carbon Footprint Calculator
//!
//! Estimates a person's annual CO2 footprint from four lifestyle inputs and a
//! country's emission factors.
//!
//! - `factors/`: Emission factor table (country -> four coefficients)
//! - `inputs/`: Input snapshot and slider bounds
//! - `normalization/`: Daily/monthly/weekly inputs to annual quantities
//! - `calculator/`: Tonnes per category and total
//! - `presenter/`: Idle / result screen states and display text
//! - `api_server/`, `web/`: Axum server with Askama pages (feature `api`)

pub mod error;
pub mod config;
pub mod factors;
pub mod inputs;
pub mod normalization;
pub mod calculator;
pub mod presenter;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use error::FootprintError;
pub use config::AppConfig;
pub use factors::{Category, CategoryFactors, CountryFactors, EmissionFactorTable};
pub use inputs::UserInputs;
pub use normalization::{annualize, AnnualQuantities};
pub use calculator::{calculate, round2, EmissionResult, FootprintCalculator, FootprintReport};
pub use presenter::{render_text, CalculatorView};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
