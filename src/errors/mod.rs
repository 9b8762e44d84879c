//! Centralized error handling for the recipe service
//!
//! # Usage
//!
//! ```rust
//! use recipe_presenter::errors::{AppError, AppResult};
//!
//! fn lookup(id: &str) -> AppResult<String> {
//!     Err(AppError::not_found("recipe", id))
//! }
//!
//! assert!(lookup("missing").is_err());
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
