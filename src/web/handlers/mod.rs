//! Web handlers module
//!
//! HTTP request handlers organized by domain. Handlers stay thin and
//! delegate to the catalog, presenter and resolver.

pub mod calculator;
pub mod health;
pub mod recipes;
pub mod resolve;
