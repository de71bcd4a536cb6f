use serde::{Deserialize, Serialize};

/// One ingredient line broken into quantity, unit and name.
///
/// `count` is `None` only when no quantity could be read from the line.
/// `unit` is a canonical unit or the empty string for "no unit".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// A search hit, and the shape a [`Like`] is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// Raw recipe detail as supplied by the fetch collaborator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub ingredients: Vec<String>,
    /// Servings as published by the source, if it publishes any
    pub servings: Option<u32>,
    /// Preparation time in minutes as published by the source
    pub time: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub source_ingredients: Vec<String>,
    pub ingredients: Vec<IngredientRecord>,
    pub servings: u32,
    pub time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

impl From<&Recipe> for Like {
    fn from(recipe: &Recipe) -> Self {
        Like {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            author: recipe.author.clone(),
            img: recipe.img.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsDirection {
    Inc,
    Dec,
}
