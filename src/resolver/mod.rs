//! Recipe presentation resolver
//!
//! Two independent, total functions used by every recipe view:
//! [`resolve_image`] chooses the image URL and [`classify_diet`] chooses the
//! diet badge. Neither can fail.

pub mod cache;
pub mod diet;
pub mod image;
pub mod tables;

pub use cache::{MemoryResolutionCache, NoopResolutionCache, ResolutionCache, ResolutionKey};
pub use diet::{DietCategory, DietClassification, classify_diet};
pub use image::{ImageResolver, ImageSource, resolve_image, resolve_uncached};
