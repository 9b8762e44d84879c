//! Configuration default values
//!
//! All defaults live here so they can be changed in one place.

// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_REQUEST_SIZE: usize = 1024 * 1024; // 1MB

// Catalog defaults
pub const DEFAULT_SEED_FALLBACK_RECIPES: bool = true;
pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
