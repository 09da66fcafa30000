// Axum API Server Module
//
// Purpose: serve the calculator page (Askama + htmx) and a JSON API over the
// same footprint calculator. Server state is immutable; every request carries
// its own input snapshot, so sessions never share anything but the table.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::calculator::{FootprintCalculator, FootprintReport};
use crate::config::AppConfig;
use crate::error::FootprintError;
use crate::factors::EmissionFactorTable;
use crate::inputs::UserInputs;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub calculator: FootprintCalculator,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading emission factor table...");
        let table = config.load_table()?;
        tracing::info!(
            "Emission factors ready for {} countries: {}",
            table.len(),
            table.countries().collect::<Vec<_>>().join(", ")
        );
        Ok(Self::with_table(table, config))
    }

    /// State over an explicit table (fixture tables in tests)
    pub fn with_table(table: EmissionFactorTable, config: AppConfig) -> Self {
        Self {
            calculator: FootprintCalculator::new(Arc::new(table)),
            config: Arc::new(config),
        }
    }

    pub fn table(&self) -> &EmissionFactorTable {
        self.calculator.table()
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Calculator page (HTML)
        .route("/", get(pages::calculator_page))
        .route("/calculate", post(pages::calculate))

        // JSON API
        .route("/api/countries", get(list_countries))
        .route("/api/footprint", post(calculate_footprint))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_countries(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut body = state.table().to_json_value();
    body["default"] = serde_json::Value::from(state.table().default_country());
    Json(body)
}

async fn calculate_footprint(
    State(state): State<AppState>,
    Json(inputs): Json<UserInputs>,
) -> Result<Json<FootprintReport>, AppError> {
    let report = state.calculator.report(inputs)?;
    Ok(Json(report))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<FootprintError> for AppError {
    fn from(err: FootprintError) -> Self {
        match err {
            FootprintError::UnknownCountry(_)
            | FootprintError::OutOfRange { .. }
            | FootprintError::NonFinite(_) => AppError::BadRequest(err.to_string()),
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("Template error: {}", err))
    }
}

impl AppError {
    pub fn status_and_message(self) -> (StatusCode, String) {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = self.status_and_message();

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
