//! In-memory recipe catalog
//!
//! Holds the curated fallback recipes plus anything submitted while the
//! process runs. Listing preserves insertion order.

use std::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeSubmission};

pub mod fallback;

pub use fallback::fallback_recipes;

/// One page of catalog results
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub items: Vec<Recipe>,
    /// Matching recipes across all pages
    pub total: u64,
}

#[derive(Debug, Default)]
pub struct RecipeCatalog {
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }

    /// Catalog seeded with the built-in fallback recipes
    pub fn with_fallback() -> Self {
        let recipes = fallback_recipes();
        info!("Recipe catalog seeded with {} fallback recipes", recipes.len());
        Self::new(recipes)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Recipe>> {
        // Recipes are pushed whole, so a poisoned list is still consistent.
        self.recipes.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// List recipes, optionally restricted to an exact category
    ///
    /// `page` is 1-based; a page past the end is empty.
    pub fn list(&self, category: Option<&str>, page: u32, per_page: u32) -> CatalogPage {
        let recipes = self.read();
        let matching: Vec<&Recipe> = recipes
            .iter()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .collect();

        let offset = page.saturating_sub(1) as usize * per_page as usize;
        let items = matching
            .iter()
            .skip(offset)
            .take(per_page as usize)
            .map(|r| (*r).clone())
            .collect();

        CatalogPage {
            items,
            total: matching.len() as u64,
        }
    }

    pub fn get(&self, id: Uuid) -> AppResult<Recipe> {
        self.read()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found("recipe", id.to_string()))
    }

    /// Case-insensitive search over title, category and description
    pub fn search(&self, query: &str) -> Vec<Recipe> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let results: Vec<Recipe> = self
            .read()
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.category.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        debug!(query = %needle, results = results.len(), "Recipe search");
        results
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for recipe in self.read().iter() {
            if !categories.contains(&recipe.category) {
                categories.push(recipe.category.clone());
            }
        }
        categories
    }

    /// Recipes that carry an instructional video
    pub fn videos(&self) -> Vec<Recipe> {
        self.read()
            .iter()
            .filter(|r| r.video_url.is_some())
            .cloned()
            .collect()
    }

    /// Validate and store a user submitted recipe
    pub fn submit(&self, submission: RecipeSubmission) -> AppResult<Recipe> {
        submission.validate()?;
        let recipe = submission.into_recipe();

        self.recipes
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(recipe.clone());

        info!(
            id = %recipe.id,
            title = %recipe.title,
            category = %recipe.category,
            "Recipe submitted"
        );
        Ok(recipe)
    }
}
