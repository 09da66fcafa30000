// Page handlers for HTML rendering with Askama

use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Response};
use askama::Template;
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::api_server::{AppError, AppState};
use crate::error::FootprintError;
use crate::factors::EmissionFactorTable;
use crate::inputs::{UserInputs, DISTANCE_BOUNDS, ELECTRICITY_BOUNDS, SLIDER_STEP, WASTE_BOUNDS};
use crate::presenter::{
    category_lines, total_line, CalculatorView, ResultLine, ADVISORY_TEXT, PAGE_TITLE,
};

// ============================================================================
// Errors
// ============================================================================

/// Page routes answer errors in plain text rather than the JSON API shape
pub struct PageError(AppError);

impl From<FootprintError> for PageError {
    fn from(err: FootprintError) -> Self {
        PageError(err.into())
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        PageError(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.0.status_and_message().into_response()
    }
}

// ============================================================================
// View data
// ============================================================================

pub struct CountryOption {
    pub name: String,
    pub selected: bool,
}

pub struct SliderView {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

/// Everything the results panel shows
pub struct ResultsView {
    pub lines: Vec<ResultLine>,
    pub total: String,
    pub advisories: Vec<&'static str>,
}

impl ResultsView {
    fn from_view(view: &CalculatorView) -> Option<Self> {
        view.result().map(|result| ResultsView {
            lines: category_lines(result),
            total: total_line(result),
            advisories: ADVISORY_TEXT.to_vec(),
        })
    }
}

// ============================================================================
// Calculator Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/calculator.html")]
pub struct CalculatorTemplate {
    pub title: &'static str,
    pub countries: Vec<CountryOption>,
    pub distance: SliderView,
    pub electricity: SliderView,
    pub waste: SliderView,
    pub meals: u32,
    pub results: Option<ResultsView>,
}

impl CalculatorTemplate {
    fn new(table: &EmissionFactorTable, view: &CalculatorView) -> Self {
        let inputs = view.inputs();
        // Choices come from the table itself, so every option is a valid key
        let countries = table
            .countries()
            .map(|name| CountryOption {
                name: name.to_string(),
                selected: name == inputs.country,
            })
            .collect();

        Self {
            title: PAGE_TITLE,
            countries,
            distance: SliderView {
                name: "distance",
                min: DISTANCE_BOUNDS.min,
                max: DISTANCE_BOUNDS.max,
                step: SLIDER_STEP,
                value: inputs.distance_km_per_day,
            },
            electricity: SliderView {
                name: "electricity",
                min: ELECTRICITY_BOUNDS.min,
                max: ELECTRICITY_BOUNDS.max,
                step: SLIDER_STEP,
                value: inputs.electricity_kwh_per_month,
            },
            waste: SliderView {
                name: "waste",
                min: WASTE_BOUNDS.min,
                max: WASTE_BOUNDS.max,
                step: SLIDER_STEP,
                value: inputs.waste_kg_per_week,
            },
            meals: inputs.meals_per_day,
            results: ResultsView::from_view(view),
        }
    }
}

#[derive(Template)]
#[template(path = "partials/results.html")]
pub struct ResultsTemplate {
    pub view: ResultsView,
}

pub async fn calculator_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let view = CalculatorView::idle(state.table());
    let template = CalculatorTemplate::new(state.table(), &view);
    Ok(Html(template.render()?))
}

// ============================================================================
// Calculate trigger
// ============================================================================

/// Form fields posted by the Calculate button
#[derive(Debug, Deserialize)]
pub struct CalculatorForm {
    pub country: String,
    pub distance: f64,
    pub electricity: f64,
    pub waste: f64,
    pub meals: u32,
}

impl From<CalculatorForm> for UserInputs {
    fn from(form: CalculatorForm) -> Self {
        UserInputs {
            country: form.country,
            distance_km_per_day: form.distance,
            electricity_kwh_per_month: form.electricity,
            waste_kg_per_week: form.waste,
            meals_per_day: form.meals,
        }
    }
}

/// htmx requests get the results panel only; plain form posts get the whole page
pub async fn calculate(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<CalculatorForm>,
) -> Result<impl IntoResponse, PageError> {
    let view = CalculatorView::trigger(&state.calculator, form.into())?;

    let html = match (is_htmx, ResultsView::from_view(&view)) {
        (true, Some(results)) => ResultsTemplate { view: results }.render()?,
        _ => CalculatorTemplate::new(state.table(), &view).render()?,
    };
    Ok(Html(html))
}
