//! View models for recipe cards and detail pages
//!
//! Every view carries the resolved image, a `fallback_image_url` for when
//! that image fails to load in the browser, and the diet badge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Recipe;
use crate::resolver::{DietClassification, ImageResolver, classify_diet};

/// Diet badge: icon, label and color class for one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietBadge {
    pub kind: DietClassification,
    pub label: String,
    pub icon: String,
    pub color_class: String,
}

impl From<DietClassification> for DietBadge {
    fn from(kind: DietClassification) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            icon: kind.icon().to_string(),
            color_class: kind.color_class().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCard {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub image_url: String,
    /// Category level image to swap in when `image_url` fails to load
    pub fallback_image_url: String,
    pub has_video: bool,
    pub diet: DietBadge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub card: RecipeCard,
    pub description: String,
    pub video_url: Option<String>,
    pub prep_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Category summary shown on the browse page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCard {
    pub name: String,
    pub image_url: String,
    pub diet: DietBadge,
}

/// Builds view models using a shared image resolver
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    resolver: ImageResolver,
}

impl Presenter {
    pub fn new(resolver: ImageResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    pub fn card(&self, recipe: &Recipe) -> RecipeCard {
        RecipeCard {
            id: recipe.id,
            title: recipe.title.clone(),
            category: recipe.category.clone(),
            image_url: self.resolver.resolve(
                &recipe.title,
                &recipe.category,
                recipe.image_url.as_deref(),
            ),
            fallback_image_url: self.resolver.resolve_fallback(&recipe.category),
            has_video: recipe.video_url.is_some(),
            diet: classify_diet(&recipe.title, &recipe.category).into(),
        }
    }

    pub fn cards(&self, recipes: &[Recipe]) -> Vec<RecipeCard> {
        recipes.iter().map(|r| self.card(r)).collect()
    }

    pub fn detail(&self, recipe: &Recipe) -> RecipeDetail {
        RecipeDetail {
            card: self.card(recipe),
            description: recipe.description.clone(),
            video_url: recipe.video_url.clone(),
            prep_minutes: recipe.prep_minutes,
            servings: recipe.servings,
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            author: recipe.author.clone(),
            created_at: recipe.created_at,
        }
    }

    /// Category card; the badge is the category's default classification
    pub fn category(&self, name: &str) -> CategoryCard {
        CategoryCard {
            name: name.to_string(),
            image_url: self.resolver.resolve_fallback(name),
            diet: classify_diet("", name).into(),
        }
    }
}
