//! Recipe browsing service
//!
//! The [`resolver`] module holds the presentation heuristics: which image a
//! recipe card shows and which diet badge it carries. The remaining modules
//! host those heuristics behind an HTTP API together with the recipe
//! catalog and the kitchen calculator.

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod presentation;
pub mod resolver;
pub mod web;

pub use resolver::{DietClassification, classify_diet, resolve_image};
