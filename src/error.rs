//! Error types for the footprint library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("Invalid emission factor table: {0}")]
    InvalidTable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FootprintError>;
