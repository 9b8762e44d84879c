use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

pub const MAX_TITLE_LENGTH: usize = 120;
pub const MAX_CATEGORY_LENGTH: usize = 60;
pub const MAX_PREP_MINUTES: u32 = 24 * 60;
pub const MAX_SERVINGS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Instructional video, if the recipe has one
    pub video_url: Option<String>,
    pub prep_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User submitted recipe, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeSubmission {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub prep_minutes: u32,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
}

fn default_servings() -> u32 {
    1
}

impl RecipeSubmission {
    /// Check every field, reporting all problems at once
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = HashMap::new();

        check_text(&mut errors, "title", &self.title, MAX_TITLE_LENGTH);
        check_text(&mut errors, "category", &self.category, MAX_CATEGORY_LENGTH);

        if self.ingredients.iter().all(|i| i.trim().is_empty()) {
            errors.insert(
                "ingredients".to_string(),
                "At least one ingredient is required".to_string(),
            );
        }
        if self.instructions.iter().all(|i| i.trim().is_empty()) {
            errors.insert(
                "instructions".to_string(),
                "At least one instruction step is required".to_string(),
            );
        }
        if self.prep_minutes > MAX_PREP_MINUTES {
            errors.insert(
                "prep_minutes".to_string(),
                format!("Preparation time must be at most {MAX_PREP_MINUTES} minutes"),
            );
        }
        if !(1..=MAX_SERVINGS).contains(&self.servings) {
            errors.insert(
                "servings".to_string(),
                format!("Servings must be between 1 and {MAX_SERVINGS}"),
            );
        }

        for (field, value) in [("image_url", &self.image_url), ("video_url", &self.video_url)] {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty())
                && let Err(message) = check_http_url(value)
            {
                errors.insert(field.to_string(), message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation_fields("Invalid recipe submission", errors))
        }
    }

    /// Convert into a stored recipe; call [`validate`](Self::validate) first
    pub fn into_recipe(self) -> Recipe {
        let clean = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect()
        };
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Recipe {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: non_blank(self.image_url),
            video_url: non_blank(self.video_url),
            prep_minutes: self.prep_minutes,
            servings: self.servings,
            ingredients: clean(self.ingredients),
            instructions: clean(self.instructions),
            author: non_blank(self.author),
            created_at: Utc::now(),
        }
    }
}

fn check_text(errors: &mut HashMap<String, String>, field: &str, value: &str, max: usize) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field.to_string(), format!("{field} is required"));
    } else if trimmed.chars().count() > max {
        errors.insert(
            field.to_string(),
            format!("{field} must be at most {max} characters"),
        );
    }
}

fn check_http_url(value: &str) -> Result<(), String> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(format!("Unsupported URL scheme: {}", url.scheme())),
        Err(e) => Err(format!("Invalid URL: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> RecipeSubmission {
        RecipeSubmission {
            title: "  Lemon Rice ".to_string(),
            category: "Indian".to_string(),
            description: "Tangy rice".to_string(),
            image_url: Some(String::new()),
            video_url: Some("https://videos.example/lemon-rice".to_string()),
            prep_minutes: 25,
            servings: 2,
            ingredients: vec!["Rice".to_string(), " ".to_string(), "Lemon".to_string()],
            instructions: vec!["Cook rice".to_string(), "Add lemon".to_string()],
            author: None,
        }
    }

    #[test]
    fn test_valid_submission() {
        let submission = submission();
        assert!(submission.validate().is_ok());

        let recipe = submission.into_recipe();
        assert_eq!(recipe.title, "Lemon Rice");
        assert_eq!(recipe.ingredients, vec!["Rice", "Lemon"]);
        assert!(recipe.image_url.is_none());
        assert!(recipe.video_url.is_some());
    }

    #[test]
    fn test_invalid_submission_reports_every_field() {
        let submission = RecipeSubmission {
            title: "   ".to_string(),
            category: "x".repeat(MAX_CATEGORY_LENGTH + 1),
            image_url: Some("ftp://images.example/a.jpg".to_string()),
            video_url: Some("not a url".to_string()),
            prep_minutes: MAX_PREP_MINUTES + 1,
            servings: 0,
            ..Default::default()
        };

        match submission.validate() {
            Err(AppError::Validation { fields, .. }) => {
                for field in [
                    "title",
                    "category",
                    "ingredients",
                    "instructions",
                    "prep_minutes",
                    "servings",
                    "image_url",
                    "video_url",
                ] {
                    assert!(fields.contains_key(field), "missing error for {field}");
                }
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
