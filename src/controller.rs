//! Controllers: typed commands in, plain-data events out.
//!
//! Input capture turns user actions into [`Command`]s; renderers consume the
//! returned [`Event`]s. Neither side touches component state directly.

use log::{info, warn};

use crate::error::{ForkifyError, Result};
use crate::fetch::RecipeSource;
use crate::model::{
    Like, Recipe, RecipeDetail, RecipeSummary, ServingsDirection, ShoppingListItem,
};
use crate::scaler::RecipeScaler;
use crate::search::{PageControls, Search};
use crate::state::{AppState, RecipeRequest, SearchRequest};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load persisted likes; sent once at startup
    LoadLikes,
    Search { query: String },
    ShowPage { page: usize },
    LoadRecipe { id: String },
    UpdateServings(ServingsDirection),
    /// Add every ingredient of the current recipe to the shopping list
    AddRecipeToList,
    DeleteItem { id: String },
    UpdateCount { id: String, count: f64 },
    /// Like the current recipe, or unlike it if already liked
    ToggleLike,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LoadingStarted,
    LoadingCleared,
    ResultsPage {
        query: String,
        controls: PageControls,
        results: Vec<RecipeSummary>,
    },
    RecipeReady { recipe: Recipe, liked: bool },
    ServingsUpdated(Recipe),
    ListItemAdded(ShoppingListItem),
    ListItemDeleted { id: String },
    ListItemUpdated(ShoppingListItem),
    LikesLoaded(Vec<Like>),
    Liked(Like),
    Unliked { id: String },
    LikesMenuVisible(bool),
    /// Non-blocking message for the user
    Notification(String),
    /// A response arrived for a request that has since been superseded
    StaleResponseDiscarded,
}

impl<S: KeyValueStore> AppState<S> {
    /// Run one command to completion.
    ///
    /// Fetch failures are reported as a [`Event::Notification`], not as an
    /// error; errors are reserved for storage failures and commands that
    /// need a recipe when none is loaded.
    pub async fn dispatch(
        &mut self,
        source: &dyn RecipeSource,
        command: Command,
    ) -> Result<Vec<Event>> {
        match command {
            Command::LoadLikes => Ok(self.load_likes()),
            Command::Search { query } => {
                let Some(request) = self.begin_search(&query) else {
                    return Ok(Vec::new());
                };
                let response = source.search(&request.query).await;
                let mut events = vec![Event::LoadingStarted];
                events.extend(self.complete_search(request, response));
                Ok(events)
            }
            Command::ShowPage { page } => Ok(self.show_page(page).into_iter().collect()),
            Command::LoadRecipe { id } => {
                let request = self.begin_recipe_load(&id);
                let response = source.recipe(&request.id).await;
                let mut events = vec![Event::LoadingStarted];
                events.extend(self.complete_recipe_load(request, response));
                Ok(events)
            }
            Command::UpdateServings(direction) => self.update_servings(direction),
            Command::AddRecipeToList => self.add_recipe_to_list(),
            Command::DeleteItem { id } => Ok(self
                .list
                .delete_item(&id)
                .map(|item| Event::ListItemDeleted { id: item.id })
                .into_iter()
                .collect()),
            Command::UpdateCount { id, count } => {
                if !self.list.update_count(&id, count) {
                    return Ok(Vec::new());
                }
                Ok(self
                    .list
                    .get(&id)
                    .cloned()
                    .map(Event::ListItemUpdated)
                    .into_iter()
                    .collect())
            }
            Command::ToggleLike => self.toggle_like(),
        }
    }

    pub fn load_likes(&mut self) -> Vec<Event> {
        self.likes.read_storage();
        vec![
            Event::LikesLoaded(self.likes.likes().to_vec()),
            Event::LikesMenuVisible(self.likes.num_likes() > 0),
        ]
    }

    /// Register a search for `query`. Blank queries are ignored.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchRequest> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(self.requests.begin_search(query.to_string()))
    }

    /// Apply the response of `request`, unless a newer search was issued
    /// in the meantime. On failure the previous results stay in place.
    pub fn complete_search(
        &mut self,
        request: SearchRequest,
        response: Result<Vec<RecipeSummary>>,
    ) -> Vec<Event> {
        if !self.requests.finish_search(&request) {
            info!("Discarding stale results for '{}'", request.query);
            return vec![Event::StaleResponseDiscarded];
        }

        match response {
            Ok(results) => {
                info!("Search '{}' returned {} recipes", request.query, results.len());
                let mut search = Search::new(request.query);
                search.set_results(results);
                self.search = Some(search);
                let mut events: Vec<Event> = self.show_page(1).into_iter().collect();
                events.push(Event::LoadingCleared);
                events
            }
            Err(e) => {
                warn!("Search '{}' failed: {}", request.query, e);
                vec![
                    Event::Notification(format!(
                        "Something went wrong with the search: {}",
                        e
                    )),
                    Event::LoadingCleared,
                ]
            }
        }
    }

    /// The given page of the current search results.
    pub fn show_page(&self, page: usize) -> Option<Event> {
        let search = self.search.as_ref()?;
        let page_size = self.config.page_size;
        Some(Event::ResultsPage {
            query: search.query().to_string(),
            controls: PageControls::new(page, search.results().len(), page_size),
            results: search.page(page, page_size).to_vec(),
        })
    }

    pub fn begin_recipe_load(&mut self, id: &str) -> RecipeRequest {
        self.requests.begin_recipe(id.to_string())
    }

    /// Install the fetched recipe unless a newer load was issued. The
    /// ingredients are parsed here, exactly once.
    pub fn complete_recipe_load(
        &mut self,
        request: RecipeRequest,
        response: Result<RecipeDetail>,
    ) -> Vec<Event> {
        if !self.requests.finish_recipe(&request) {
            info!("Discarding stale recipe {}", request.id);
            return vec![Event::StaleResponseDiscarded];
        }

        match response {
            Ok(detail) => {
                let mut scaler = RecipeScaler::from_detail(detail, &self.config.scaling);
                scaler.parse_ingredients(&self.parser);
                let recipe = scaler.recipe().clone();
                let liked = self.likes.is_liked(&recipe.id);
                self.recipe = Some(scaler);
                vec![Event::RecipeReady { recipe, liked }, Event::LoadingCleared]
            }
            Err(e) => {
                warn!("Loading recipe {} failed: {}", request.id, e);
                vec![
                    Event::Notification(format!("Error processing recipe: {}", e)),
                    Event::LoadingCleared,
                ]
            }
        }
    }

    fn update_servings(&mut self, direction: ServingsDirection) -> Result<Vec<Event>> {
        let scaler = self.recipe.as_mut().ok_or(ForkifyError::NoActiveRecipe)?;
        if !scaler.update_servings(direction) {
            return Ok(Vec::new());
        }
        Ok(vec![Event::ServingsUpdated(scaler.recipe().clone())])
    }

    fn add_recipe_to_list(&mut self) -> Result<Vec<Event>> {
        let scaler = self.recipe.as_ref().ok_or(ForkifyError::NoActiveRecipe)?;
        Ok(self
            .list
            .add_recipe(scaler.recipe())
            .into_iter()
            .map(Event::ListItemAdded)
            .collect())
    }

    fn toggle_like(&mut self) -> Result<Vec<Event>> {
        let scaler = self.recipe.as_ref().ok_or(ForkifyError::NoActiveRecipe)?;
        let summary = Like::from(scaler.recipe());

        let event = if self.likes.is_liked(&summary.id) {
            self.likes.delete_like(&summary.id)?;
            Event::Unliked { id: summary.id }
        } else {
            let like = self
                .likes
                .add_like(summary.id, summary.title, summary.author, summary.img)?;
            Event::Liked(like)
        };

        Ok(vec![event, Event::LikesMenuVisible(self.likes.num_likes() > 0)])
    }
}
