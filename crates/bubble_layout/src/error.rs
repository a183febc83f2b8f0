//! Bubble layout error types

use thiserror::Error;

/// Errors raised while reading a bubble style
#[derive(Error, Debug)]
pub enum StyleError {
    /// The style source is not valid TOML or has mistyped keys
    #[error("Invalid bubble style: {0}")]
    Toml(#[from] toml::de::Error),

    /// A dimension that cannot be turned into whole pixels
    #[error("Invalid dimension for `{key}`: {value}")]
    InvalidDimension { key: &'static str, value: String },

    /// A color that is neither `#RRGGBB`, `#AARRGGBB` nor a known name
    #[error("Invalid color for `{key}`: {value}")]
    InvalidColor { key: &'static str, value: String },

    /// A pointer edge name that is not left, top, right or bottom
    #[error("Invalid pointer edge: {0}")]
    InvalidEdge(String),

    /// Display density must be finite and positive
    #[error("Invalid display density: {0}")]
    InvalidDensity(f32),
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors raised while decoding saved bubble state
#[derive(Error, Debug)]
pub enum StateError {
    /// The saved text is not JSON at all
    #[error("Saved bubble state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for state operations
pub type StateResult<T> = std::result::Result<T, StateError>;
