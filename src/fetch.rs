//! Fetch collaborator: where search results and recipe details come from.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{ForkifyError, Result};
use crate::model::{RecipeDetail, RecipeSummary};

#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Search recipes matching `query`, in the source's ranking order.
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>>;

    /// Fetch the full detail of one recipe.
    async fn recipe(&self, id: &str) -> Result<RecipeDetail>;
}

/// JSON recipe API client (`/search?q=` and `/get?rId=`).
pub struct HttpRecipeSource {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiRecipeSummary {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiSearchResponse {
    #[serde(default)]
    recipes: Vec<ApiRecipeSummary>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiRecipe {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
    servings: Option<u32>,
    cooking_time: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiRecipeResponse {
    recipe: Option<ApiRecipe>,
    error: Option<String>,
}

impl From<ApiRecipeSummary> for RecipeSummary {
    fn from(api: ApiRecipeSummary) -> Self {
        RecipeSummary {
            id: api.recipe_id,
            title: api.title,
            author: api.publisher,
            img: api.image_url,
        }
    }
}

impl From<ApiRecipe> for RecipeDetail {
    fn from(api: ApiRecipe) -> Self {
        RecipeDetail {
            id: api.recipe_id,
            title: api.title,
            author: api.publisher,
            img: api.image_url,
            url: api.source_url,
            ingredients: api.ingredients,
            servings: api.servings,
            time: api.cooking_time,
        }
    }
}

impl HttpRecipeSource {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; forkify/0.3)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        let url = format!("{}/search", self.base_url);
        debug!("Searching recipes for '{}'", query);
        let response: ApiSearchResponse = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(ForkifyError::Api(error));
        }
        Ok(response.recipes.into_iter().map(Into::into).collect())
    }

    async fn recipe(&self, id: &str) -> Result<RecipeDetail> {
        let url = format!("{}/get", self.base_url);
        debug!("Fetching recipe {}", id);
        let response: ApiRecipeResponse = self
            .client
            .get(&url)
            .query(&[("rId", id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match (response.recipe, response.error) {
            (Some(recipe), _) => Ok(recipe.into()),
            (None, Some(error)) => Err(ForkifyError::Api(error)),
            (None, None) => Err(ForkifyError::Api(format!("recipe {} not found", id))),
        }
    }
}
