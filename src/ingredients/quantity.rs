//! Leading-quantity recognition for ingredient lines.

const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 1.0 / 2.0),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 1.0 / 4.0),
    ('¾', 3.0 / 4.0),
    ('⅕', 1.0 / 5.0),
    ('⅖', 2.0 / 5.0),
    ('⅗', 3.0 / 5.0),
    ('⅘', 4.0 / 5.0),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 1.0 / 8.0),
    ('⅜', 3.0 / 8.0),
    ('⅝', 5.0 / 8.0),
    ('⅞', 7.0 / 8.0),
];

fn vulgar_value(c: char) -> Option<f64> {
    VULGAR_FRACTIONS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, value)| *value)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Plain integer or decimal ("2", "2.5", ".5").
fn parse_decimal(s: &str) -> Option<f64> {
    if s.is_empty() || s == "." || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Simple fraction "a/b". A zero denominator is not a number.
fn parse_fraction(s: &str) -> Option<f64> {
    let (num, den) = s.split_once('/')?;
    if !is_digits(num) || !is_digits(den) {
        return None;
    }
    let den: f64 = den.parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num.parse::<f64>().ok()? / den)
}

/// A proper fraction that may follow a whole number: "1/2" or a glyph.
fn parse_fractional_part(s: &str) -> Option<f64> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(value) = vulgar_value(c) {
            return Some(value);
        }
    }
    parse_fraction(s)
}

/// One token as a quantity: decimal, fraction, glyph, "1½",
/// hyphenated mixed "1-1/2", or a range "2-3" (lower bound).
fn parse_token(token: &str) -> Option<f64> {
    if let Some(value) = parse_decimal(token).or_else(|| parse_fractional_part(token)) {
        return Some(value);
    }

    // Whole number with a glued glyph
    if let Some(last) = token.chars().last() {
        if let Some(frac) = vulgar_value(last) {
            let whole = &token[..token.len() - last.len_utf8()];
            if is_digits(whole) {
                return Some(whole.parse::<f64>().ok()? + frac);
            }
        }
    }

    let (left, right) = token.split_once('-')?;
    let left_value = parse_decimal(left)?;
    if is_digits(left) {
        if let Some(frac) = parse_fractional_part(right) {
            if frac < 1.0 {
                return Some(left_value + frac);
            }
        }
    }
    parse_decimal(right).map(|_| left_value)
}

/// Read the quantity at the start of `tokens`.
///
/// Returns the value and how many tokens it spans (1, or 2 for a mixed
/// number written "1 1/2" or "1 ½").
pub(crate) fn leading_quantity(tokens: &[&str]) -> Option<(f64, usize)> {
    let first = tokens.first()?;
    let value = parse_token(first)?;

    if is_digits(first) {
        if let Some(frac) = tokens.get(1).and_then(|t| parse_fractional_part(t)) {
            if frac < 1.0 {
                return Some((value + frac, 2));
            }
        }
    }

    Some((value, 1))
}
