//! Error types for the navbar widget

use thiserror::Error;

/// Errors raised while building navbar state from external input.
///
/// Rendering itself never fails; these only cover parsing a panel name
/// and decoding the widget configuration.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Menu name must not be empty")]
    EmptyMenuName,

    #[error("Invalid navbar configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for navbar operations
pub type NavResult<T> = Result<T, NavError>;
