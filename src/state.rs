use crate::config::AppConfig;
use crate::ingredients::{IngredientParser, UnitTable};
use crate::likes::LikesStore;
use crate::scaler::RecipeScaler;
use crate::search::Search;
use crate::shopping_list::ShoppingList;
use crate::storage::KeyValueStore;

/// Everything the controllers read and mutate. Each component owns its own
/// slice; the state is handed to controllers by `&mut`.
#[derive(Debug)]
pub struct AppState<S> {
    pub config: AppConfig,
    pub parser: IngredientParser,
    pub search: Option<Search>,
    pub recipe: Option<RecipeScaler>,
    pub list: ShoppingList,
    pub likes: LikesStore<S>,
    pub(crate) requests: RequestTracker,
}

impl<S: KeyValueStore> AppState<S> {
    /// Fresh state over `store`. Persisted likes are loaded by the
    /// `LoadLikes` command, not here.
    pub fn new(config: AppConfig, store: S) -> Self {
        let parser = IngredientParser::new(UnitTable::from_config(&config.units));
        Self {
            config,
            parser,
            search: None,
            recipe: None,
            list: ShoppingList::new(),
            likes: LikesStore::new(store),
            requests: RequestTracker::default(),
        }
    }
}

/// Handle for an in-flight search. A response is only applied if its
/// request is still the latest one issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub(crate) ticket: u64,
    pub query: String,
}

/// Handle for an in-flight recipe load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRequest {
    pub(crate) ticket: u64,
    pub id: String,
}

#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
    next: u64,
    search: Option<u64>,
    recipe: Option<u64>,
}

impl RequestTracker {
    fn issue(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    pub(crate) fn begin_search(&mut self, query: String) -> SearchRequest {
        let ticket = self.issue();
        self.search = Some(ticket);
        SearchRequest { ticket, query }
    }

    pub(crate) fn begin_recipe(&mut self, id: String) -> RecipeRequest {
        let ticket = self.issue();
        self.recipe = Some(ticket);
        RecipeRequest { ticket, id }
    }

    /// Consume the pending search slot if `request` still owns it.
    pub(crate) fn finish_search(&mut self, request: &SearchRequest) -> bool {
        if self.search == Some(request.ticket) {
            self.search = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn finish_recipe(&mut self, request: &RecipeRequest) -> bool {
        if self.recipe == Some(request.ticket) {
            self.recipe = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_wins() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin_search("pizza".to_string());
        let second = tracker.begin_search("pasta".to_string());

        assert!(!tracker.finish_search(&first));
        assert!(tracker.finish_search(&second));
        // already consumed
        assert!(!tracker.finish_search(&second));
    }

    #[test]
    fn test_search_and_recipe_are_independent() {
        let mut tracker = RequestTracker::default();
        let search = tracker.begin_search("soup".to_string());
        let recipe = tracker.begin_recipe("123".to_string());

        assert_ne!(search.ticket, recipe.ticket);
        assert!(tracker.finish_recipe(&recipe));
        assert!(tracker.finish_search(&search));
    }
}
