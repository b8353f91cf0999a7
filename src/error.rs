// src/error.rs

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that abort a whole fetch-and-merge request.
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("invalid date format (expected YYYY-MM-DD): {0:?}")]
    BadDateFormat(String),

    #[error("failed to build the result table: {0}")]
    Table(#[from] PolarsError),
}

/// Errors raised by a price provider for a single ticker.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider answered with HTTP {0}")]
    Status(u16),

    #[error("{code}: {description}")]
    Api { code: String, description: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}
