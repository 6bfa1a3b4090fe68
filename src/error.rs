//! Error type shared by the model and calculator

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    /// A plant lacks a numeric field that the requested calculation needs.
    #[error("plant '{plant}' is missing required field '{field}'")]
    MissingField { plant: String, field: &'static str },

    #[error("invalid environment factors: {0}")]
    InvalidEnvironment(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
