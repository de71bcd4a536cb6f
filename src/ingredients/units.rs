use std::collections::{HashMap, HashSet};

use crate::config::UnitsConfig;

/// Built-in synonym -> canonical unit pairs.
const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    // Volume
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tbsps", "tbsp"),
    ("tbsp", "tbsp"),
    ("tbs", "tbsp"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("tsps", "tsp"),
    ("tsp", "tsp"),
    ("cups", "cup"),
    ("cup", "cup"),
    ("pints", "pint"),
    ("pint", "pint"),
    ("quarts", "quart"),
    ("quart", "quart"),
    ("milliliters", "ml"),
    ("millilitres", "ml"),
    ("ml", "ml"),
    ("liters", "l"),
    ("litres", "l"),
    ("liter", "l"),
    ("litre", "l"),
    ("l", "l"),
    // Weight
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("oz", "oz"),
    ("pounds", "lb"),
    ("pound", "lb"),
    ("lbs", "lb"),
    ("lb", "lb"),
    ("grams", "g"),
    ("gram", "g"),
    ("g", "g"),
    ("kilograms", "kg"),
    ("kilogram", "kg"),
    ("kg", "kg"),
    // Count-like
    ("pinches", "pinch"),
    ("pinch", "pinch"),
    ("dashes", "dash"),
    ("dash", "dash"),
    ("cloves", "clove"),
    ("clove", "clove"),
    ("cans", "can"),
    ("can", "can"),
    ("packages", "package"),
    ("package", "package"),
    ("slices", "slice"),
    ("slice", "slice"),
    ("sticks", "stick"),
    ("stick", "stick"),
];

/// Filler words that sit in the unit slot but are not units ("2 large eggs").
const BUILTIN_DROPPED: &[&str] = &[
    "large",
    "medium",
    "small",
    "extra-large",
    "whole",
    "heaping",
];

/// What a unit-slot token resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMatch<'a> {
    Canonical(&'a str),
    Dropped,
}

/// Unit normalization data: synonyms to canonical units, plus filler words
/// that are consumed and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    synonyms: HashMap<String, String>,
    dropped: HashSet<String>,
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl UnitTable {
    /// A table with no units at all. Every unit slot token is left in the name.
    pub fn empty() -> Self {
        Self {
            synonyms: HashMap::new(),
            dropped: HashSet::new(),
        }
    }

    /// The built-in English cooking units.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (synonym, canonical) in BUILTIN_SYNONYMS {
            table.insert_synonym(synonym, canonical);
        }
        for word in BUILTIN_DROPPED {
            table.insert_dropped(word);
        }
        table
    }

    /// The built-in table extended with the configured synonyms and filler words.
    pub fn from_config(config: &UnitsConfig) -> Self {
        let mut table = Self::builtin();
        table.extend(config);
        table
    }

    pub fn extend(&mut self, config: &UnitsConfig) {
        for (synonym, canonical) in &config.synonyms {
            self.insert_synonym(synonym, canonical);
        }
        for word in &config.dropped {
            self.insert_dropped(word);
        }
    }

    /// Register `synonym` as a spelling of `canonical`. The canonical unit
    /// always maps to itself.
    pub fn insert_synonym(&mut self, synonym: &str, canonical: &str) {
        let canonical = canonical.trim().to_lowercase();
        self.synonyms
            .insert(synonym.trim().to_lowercase(), canonical.clone());
        self.synonyms.insert(canonical.clone(), canonical);
    }

    pub fn insert_dropped(&mut self, word: &str) {
        self.dropped.insert(word.trim().to_lowercase());
    }

    /// Resolve a token from the unit slot. Trailing `.` and `,` are ignored
    /// so that "tbsp." and "cups," still match.
    pub fn lookup(&self, token: &str) -> Option<UnitMatch<'_>> {
        let key = token.trim_end_matches(['.', ',']).to_lowercase();
        if let Some(canonical) = self.synonyms.get(&key) {
            return Some(UnitMatch::Canonical(canonical.as_str()));
        }
        if self.dropped.contains(&key) {
            return Some(UnitMatch::Dropped);
        }
        None
    }

    /// Whether `unit` is a value a parsed record may carry.
    pub fn is_canonical(&self, unit: &str) -> bool {
        unit.is_empty() || self.synonyms.values().any(|c| c == unit)
    }
}
