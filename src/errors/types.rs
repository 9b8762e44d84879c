//! Error type definitions for the recipe service
//!
//! The resolver itself is infallible; these errors come from the catalog,
//! the calculator, configuration loading and the web layer.

use std::collections::HashMap;
use thiserror::Error;

use crate::calculator::CalculatorError;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation errors, optionally with per-field messages
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: HashMap<String, String>,
    },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Calculator evaluation errors
    #[error("Calculator error: {0}")]
    Calculator(#[from] CalculatorError),
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Create a validation error carrying field level details
    pub fn validation_fields<S: Into<String>>(message: S, fields: HashMap<String, String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields,
        }
    }

    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
