//! Ingredient parsing module.
//!
//! Turns raw ingredient lines (e.g. "2 tablespoons olive oil (extra virgin)")
//! into [`IngredientRecord`]s with a numeric count, a canonical unit and a
//! cleaned ingredient name.

mod quantity;
mod units;

pub use units::{UnitMatch, UnitTable};

use log::debug;

use crate::model::IngredientRecord;

/// How much of a line the parser recognized.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// A leading quantity followed by a unit token. Filler words such as
    /// "large" are consumed here too, leaving the unit empty.
    FullMatch(IngredientRecord),
    /// A leading quantity with no unit token; the unit is the unit-less `""`.
    UnitOnlyMatch(IngredientRecord),
    /// No leading quantity. The whole cleaned line is the ingredient name.
    NoMatch(IngredientRecord),
}

impl ParseOutcome {
    pub fn record(&self) -> &IngredientRecord {
        match self {
            ParseOutcome::FullMatch(r)
            | ParseOutcome::UnitOnlyMatch(r)
            | ParseOutcome::NoMatch(r) => r,
        }
    }

    pub fn into_record(self) -> IngredientRecord {
        match self {
            ParseOutcome::FullMatch(r)
            | ParseOutcome::UnitOnlyMatch(r)
            | ParseOutcome::NoMatch(r) => r,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IngredientParser {
    units: UnitTable,
}

impl IngredientParser {
    pub fn new(units: UnitTable) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    /// Parse a single ingredient line.
    ///
    /// This never fails: a line we cannot read a quantity from comes back
    /// with `count: None` and the cleaned line as its name.
    pub fn parse(&self, line: &str) -> IngredientRecord {
        self.classify(line).into_record()
    }

    pub fn classify(&self, line: &str) -> ParseOutcome {
        let cleaned = clean_line(line);
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        let whole = tokens.join(" ");

        let Some((count, consumed)) = quantity::leading_quantity(&tokens) else {
            return ParseOutcome::NoMatch(IngredientRecord {
                count: None,
                unit: String::new(),
                ingredient: whole,
            });
        };

        let rest = &tokens[consumed..];
        match rest.first().and_then(|t| self.units.lookup(t)) {
            Some(unit_match) => {
                let unit = match unit_match {
                    UnitMatch::Canonical(unit) => unit.to_string(),
                    UnitMatch::Dropped => String::new(),
                };
                let mut name = rest[1..].join(" ");
                if name.is_empty() {
                    name = if unit.is_empty() { whole } else { unit.clone() };
                }
                ParseOutcome::FullMatch(IngredientRecord {
                    count: Some(count),
                    unit,
                    ingredient: name,
                })
            }
            None => {
                let mut name = rest.join(" ");
                if name.is_empty() {
                    name = whole;
                }
                ParseOutcome::UnitOnlyMatch(IngredientRecord {
                    count: Some(count),
                    unit: String::new(),
                    ingredient: name,
                })
            }
        }
    }

    /// Parse every non-blank line, in order.
    pub fn parse_ingredients(&self, lines: &[String]) -> Vec<IngredientRecord> {
        let records: Vec<IngredientRecord> = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.parse(line))
            .collect();
        debug!(
            "Parsed {} ingredient records from {} lines",
            records.len(),
            lines.len()
        );
        records
    }
}

/// Lower-case the line and cut out parenthetical asides. A line that is
/// nothing but an aside is kept as is.
fn clean_line(line: &str) -> String {
    let raw = line.trim().to_lowercase();
    let mut remaining = raw.clone();

    while let Some(start) = remaining.find('(') {
        let Some(len) = remaining[start..].find(')') else {
            break;
        };
        let before = remaining[..start].trim_end();
        let after = remaining[start + len + 1..].trim_start();
        remaining = format!("{} {}", before, after);
    }

    let cleaned = remaining.trim();
    if cleaned.is_empty() {
        raw
    } else {
        cleaned.to_string()
    }
}
