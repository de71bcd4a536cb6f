use log::{debug, warn};

use crate::config::ScalingConfig;
use crate::ingredients::IngredientParser;
use crate::model::{Recipe, RecipeDetail, ServingsDirection};

/// Owns one fetched recipe and keeps its ingredient quantities in step with
/// the selected number of servings.
#[derive(Debug, Clone)]
pub struct RecipeScaler {
    recipe: Recipe,
    parsed: bool,
}

impl RecipeScaler {
    /// Build the recipe from fetched detail. Servings and preparation time
    /// are derived here, once.
    pub fn from_detail(detail: RecipeDetail, scaling: &ScalingConfig) -> Self {
        let servings = calc_servings(detail.servings, scaling);
        let time = detail
            .time
            .filter(|t| *t > 0)
            .unwrap_or_else(|| calc_time(detail.ingredients.len(), scaling));

        Self {
            recipe: Recipe {
                id: detail.id,
                title: detail.title,
                author: detail.author,
                img: detail.img,
                url: detail.url,
                source_ingredients: detail.ingredients,
                ingredients: Vec::new(),
                servings,
                time,
            },
            parsed: false,
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn id(&self) -> &str {
        &self.recipe.id
    }

    pub fn servings(&self) -> u32 {
        self.recipe.servings
    }

    /// Fill `ingredients` from the source lines. Only the first call parses;
    /// later quantities come from rescaling.
    pub fn parse_ingredients(&mut self, parser: &IngredientParser) {
        if self.parsed {
            warn!(
                "Ingredients of recipe {} already parsed, ignoring",
                self.recipe.id
            );
            return;
        }
        self.recipe.ingredients = parser.parse_ingredients(&self.recipe.source_ingredients);
        self.parsed = true;
    }

    /// Step servings up or down by one and rescale every known count.
    ///
    /// Decreasing below one serving, or increasing past `u32::MAX`, is
    /// refused and returns `false`.
    pub fn update_servings(&mut self, direction: ServingsDirection) -> bool {
        let old = self.recipe.servings;
        let new = match direction {
            ServingsDirection::Inc => match old.checked_add(1) {
                Some(new) => new,
                None => return false,
            },
            ServingsDirection::Dec if old > 1 => old - 1,
            ServingsDirection::Dec => return false,
        };

        let factor_old = f64::from(old);
        let factor_new = f64::from(new);
        for ingredient in &mut self.recipe.ingredients {
            if let Some(count) = ingredient.count.as_mut() {
                *count = *count / factor_old * factor_new;
            }
        }
        self.recipe.servings = new;
        debug!(
            "Recipe {} rescaled from {} to {} servings",
            self.recipe.id, old, new
        );
        true
    }

    pub fn into_recipe(self) -> Recipe {
        self.recipe
    }
}

/// Published servings if usable, otherwise the configured default.
pub fn calc_servings(published: Option<u32>, scaling: &ScalingConfig) -> u32 {
    published
        .filter(|s| *s >= 1)
        .unwrap_or(scaling.default_servings.max(1))
}

/// Estimated preparation time: `minutes_per_period` for every started group
/// of `ingredients_per_period` ingredients.
pub fn calc_time(ingredient_count: usize, scaling: &ScalingConfig) -> u32 {
    let per_period = scaling.ingredients_per_period.max(1) as usize;
    let periods = ingredient_count.div_ceil(per_period) as u32;
    periods * scaling.minutes_per_period
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(lines: &[&str], servings: Option<u32>) -> RecipeDetail {
        RecipeDetail {
            id: "35477".to_string(),
            title: "Pizza Dip".to_string(),
            author: "Closet Cooking".to_string(),
            ingredients: lines.iter().map(|l| l.to_string()).collect(),
            servings,
            ..Default::default()
        }
    }

    fn scaler(lines: &[&str]) -> RecipeScaler {
        let mut scaler =
            RecipeScaler::from_detail(detail(lines, None), &ScalingConfig::default());
        scaler.parse_ingredients(&IngredientParser::default());
        scaler
    }

    #[test]
    fn test_calc_time_steps() {
        let scaling = ScalingConfig::default();
        assert_eq!(calc_time(0, &scaling), 0);
        assert_eq!(calc_time(1, &scaling), 15);
        assert_eq!(calc_time(3, &scaling), 15);
        assert_eq!(calc_time(4, &scaling), 30);
        assert_eq!(calc_time(9, &scaling), 45);
    }

    #[test]
    fn test_calc_servings() {
        let scaling = ScalingConfig::default();
        assert_eq!(calc_servings(None, &scaling), 4);
        assert_eq!(calc_servings(Some(0), &scaling), 4);
        assert_eq!(calc_servings(Some(6), &scaling), 6);
    }

    #[test]
    fn test_published_time_wins() {
        let mut d = detail(&["1 cup rice"], Some(2));
        d.time = Some(40);
        let scaler = RecipeScaler::from_detail(d, &ScalingConfig::default());
        assert_eq!(scaler.recipe().time, 40);
        assert_eq!(scaler.servings(), 2);
    }

    #[test]
    fn test_increment_scales_proportionally() {
        let mut s = scaler(&["2 cups flour", "1/2 tsp salt", "a pinch of pepper"]);
        assert_eq!(s.servings(), 4);

        assert!(s.update_servings(ServingsDirection::Inc));
        let ings = &s.recipe().ingredients;
        assert_eq!(s.servings(), 5);
        assert!((ings[0].count.unwrap() - 2.5).abs() < 1e-9);
        assert!((ings[1].count.unwrap() - 0.625).abs() < 1e-9);
        assert_eq!(ings[2].count, None);
    }

    #[test]
    fn test_increment_then_decrement_is_reversible() {
        let mut s = scaler(&["3 tbsp olive oil", "1 1/3 cups milk", "7 eggs"]);
        let original: Vec<f64> = s
            .recipe()
            .ingredients
            .iter()
            .map(|i| i.count.unwrap())
            .collect();

        for _ in 0..5 {
            s.update_servings(ServingsDirection::Inc);
        }
        for _ in 0..5 {
            s.update_servings(ServingsDirection::Dec);
        }

        assert_eq!(s.servings(), 4);
        for (ing, before) in s.recipe().ingredients.iter().zip(original) {
            assert!((ing.count.unwrap() - before).abs() < 1e-6);
        }
    }

    #[test]
    fn test_increment_is_monotonic() {
        let mut s = scaler(&["1 cup sugar", "0.25 oz yeast"]);
        let mut previous: Vec<f64> = s
            .recipe()
            .ingredients
            .iter()
            .filter_map(|i| i.count)
            .collect();
        for _ in 0..3 {
            s.update_servings(ServingsDirection::Inc);
            let current: Vec<f64> = s
                .recipe()
                .ingredients
                .iter()
                .filter_map(|i| i.count)
                .collect();
            for (now, before) in current.iter().zip(&previous) {
                assert!(now > before);
            }
            previous = current;
        }
    }

    #[test]
    fn test_decrement_floor() {
        let mut s =
            RecipeScaler::from_detail(detail(&["2 eggs"], Some(1)), &ScalingConfig::default());
        s.parse_ingredients(&IngredientParser::default());

        assert!(!s.update_servings(ServingsDirection::Dec));
        assert_eq!(s.servings(), 1);
        assert_eq!(s.recipe().ingredients[0].count, Some(2.0));
    }

    #[test]
    fn test_parse_ingredients_runs_once() {
        let mut s = scaler(&["2 cups flour"]);
        s.update_servings(ServingsDirection::Inc);
        s.parse_ingredients(&IngredientParser::default());
        assert!((s.recipe().ingredients[0].count.unwrap() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_increment_at_max_servings() {
        let mut s = RecipeScaler::from_detail(
            detail(&["2 cups flour"], Some(u32::MAX)),
            &ScalingConfig::default(),
        );
        s.parse_ingredients(&IngredientParser::default());

        assert!(!s.update_servings(ServingsDirection::Inc));
        assert_eq!(s.servings(), u32::MAX);
        assert_eq!(s.recipe().ingredients[0].count, Some(2.0));
    }
}
