pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod ingredients;
pub mod likes;
pub mod model;
pub mod scaler;
pub mod search;
pub mod shopping_list;
pub mod state;
pub mod storage;

use std::time::Duration;

pub use config::AppConfig;
pub use controller::{Command, Event};
pub use error::{ForkifyError, Result};
pub use fetch::{HttpRecipeSource, RecipeSource};
pub use ingredients::{IngredientParser, ParseOutcome, UnitTable};
pub use likes::LikesStore;
pub use model::{
    IngredientRecord, Like, Recipe, RecipeDetail, RecipeSummary, ServingsDirection,
    ShoppingListItem,
};
pub use scaler::RecipeScaler;
pub use search::{paginate, PageControls, Search};
pub use shopping_list::ShoppingList;
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Parse one ingredient line with the built-in unit table.
///
/// # Example
/// ```
/// let record = forkify::parse_ingredient("1/2 cup sugar");
/// assert_eq!(record.count, Some(0.5));
/// assert_eq!(record.unit, "cup");
/// assert_eq!(record.ingredient, "sugar");
/// ```
pub fn parse_ingredient(line: &str) -> IngredientRecord {
    IngredientParser::default().parse(line)
}

/// Build the application state backed by files under `config.storage_dir`,
/// together with an HTTP recipe source pointed at `config.api_base_url`.
///
/// Persisted likes are not read yet; dispatch [`Command::LoadLikes`] first.
pub fn open(config: AppConfig) -> Result<(AppState<FileStore>, HttpRecipeSource)> {
    let source = HttpRecipeSource::new(
        config.api_base_url.clone(),
        Some(Duration::from_secs(config.timeout)),
    )?;
    let store = FileStore::new(config.storage_dir.clone());
    Ok((AppState::new(config, store), source))
}
