use uuid::Uuid;

use crate::model::{Recipe, ShoppingListItem};

/// Shopping list items in insertion order.
///
/// Items are never merged: adding "2 cup flour" twice gives two items.
#[derive(Debug, Default, Clone)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new item under a freshly generated id and return it.
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> ShoppingListItem {
        let item = ShoppingListItem {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        self.items.push(item.clone());
        item
    }

    /// Add every ingredient of `recipe` at its current scale.
    pub fn add_recipe(&mut self, recipe: &Recipe) -> Vec<ShoppingListItem> {
        recipe
            .ingredients
            .iter()
            .map(|ing| self.add_item(ing.count, ing.unit.clone(), ing.ingredient.clone()))
            .collect()
    }

    /// Remove the item with `id`. Absent ids are ignored.
    pub fn delete_item(&mut self, id: &str) -> Option<ShoppingListItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Overwrite the count of an item. The value is stored as given.
    ///
    /// Returns `false` if no item has `id`.
    pub fn update_count(&mut self, id: &str, count: f64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.count = Some(count);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IngredientRecord;
    use std::collections::HashSet;

    #[test]
    fn test_add_item_generates_unique_ids() {
        let mut list = ShoppingList::new();
        let ids: HashSet<String> = (0..50)
            .map(|_| list.add_item(Some(1.0), "cup", "flour").id)
            .collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(list.len(), 50);
    }

    #[test]
    fn test_identical_items_are_not_merged() {
        let mut list = ShoppingList::new();
        let a = list.add_item(Some(2.0), "tbsp", "olive oil");
        let b = list.add_item(Some(2.0), "tbsp", "olive oil");
        assert_ne!(a.id, b.id);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_item() {
        let mut list = ShoppingList::new();
        let a = list.add_item(Some(1.0), "", "egg");
        let b = list.add_item(None, "", "salt");

        assert_eq!(list.delete_item(&a.id), Some(a.clone()));
        assert!(list.get(&a.id).is_none());
        assert_eq!(list.items(), &[b]);

        // second delete is a no-op
        assert_eq!(list.delete_item(&a.id), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_update_count_in_place() {
        let mut list = ShoppingList::new();
        let first = list.add_item(Some(1.0), "cup", "rice");
        let second = list.add_item(Some(3.0), "", "onions");

        assert!(list.update_count(&first.id, 2.5));
        assert_eq!(list.get(&first.id).unwrap().count, Some(2.5));
        assert_eq!(list.items()[1], second);
        assert!(!list.update_count("missing", 1.0));
    }

    #[test]
    fn test_add_recipe_keeps_order() {
        let recipe = Recipe {
            id: "1".into(),
            title: "Pancakes".into(),
            author: "x".into(),
            img: String::new(),
            url: String::new(),
            source_ingredients: vec![],
            ingredients: vec![
                IngredientRecord {
                    count: Some(1.5),
                    unit: "cup".into(),
                    ingredient: "flour".into(),
                },
                IngredientRecord {
                    count: None,
                    unit: String::new(),
                    ingredient: "a pinch of salt".into(),
                },
            ],
            servings: 4,
            time: 15,
        };

        let mut list = ShoppingList::new();
        let added = list.add_recipe(&recipe);
        assert_eq!(added.len(), 2);
        assert_eq!(list.items()[0].ingredient, "flour");
        assert_eq!(list.items()[0].count, Some(1.5));
        assert_eq!(list.items()[1].count, None);
    }
}
