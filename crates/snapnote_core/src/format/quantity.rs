//! Fraction/quantity display formatting and parsing.
//!
//! # Responsibility
//! - Format decimal quantities as integers, culinary fraction glyphs, mixed
//!   numbers or a one-decimal fallback.
//! - Parse a leading quantity (glyph, ASCII fraction, whole or mixed number)
//!   off an ingredient-style line.
//!
//! # Invariants
//! - Glyph matching uses tolerance bands, never exact float equality.
//! - `parse_quantity(format_quantity(v))` recovers `v` to within 0.02 for
//!   every recognized fraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Culinary fraction glyphs, ordered by value.
const FRACTION_GLYPHS: &[(char, f64)] = &[
    ('⅛', 0.125),
    ('¼', 0.25),
    ('⅓', 1.0 / 3.0),
    ('⅜', 0.375),
    ('½', 0.5),
    ('⅝', 0.625),
    ('⅔', 2.0 / 3.0),
    ('¾', 0.75),
    ('⅞', 0.875),
];

/// Band width around each glyph value; the closest gap between glyph values
/// is 0.042 (⅓ to ⅜), so 0.02 keeps the bands disjoint.
const GLYPH_TOLERANCE: f64 = 0.02;

/// Fractional parts below this render as a bare integer.
const WHOLE_TOLERANCE: f64 = 0.05;

static ASCII_FRACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*/\s*(\d+)").expect("valid ascii fraction regex"));
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)?").expect("valid number regex"));

/// Formats a decimal quantity for display.
///
/// Rules, in order:
/// - near-integer values render as a bare integer;
/// - a fractional part inside a glyph tolerance band renders as that glyph,
///   prefixed by the whole part when non-zero (`1½`);
/// - anything else falls back to one decimal place.
pub fn format_quantity(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < WHOLE_TOLERANCE {
        return format!("{}", rounded as i64);
    }

    let whole = value.floor();
    let fractional = value - whole;
    for (glyph, glyph_value) in FRACTION_GLYPHS {
        if (fractional - glyph_value).abs() <= GLYPH_TOLERANCE {
            if whole >= 1.0 {
                return format!("{}{glyph}", whole as i64);
            }
            return glyph.to_string();
        }
    }

    format!("{value:.1}")
}

/// Parses a leading quantity off `text`.
///
/// Recognizes, in priority order: a fraction glyph, an ASCII fraction
/// (`1/2`), and a whole/decimal number optionally followed by a glyph or
/// ASCII fraction (mixed number). Returns the quantity and the remaining
/// text; unrecognized input yields `(None, text)` untouched.
pub fn parse_quantity(text: &str) -> (Option<f64>, &str) {
    let trimmed = text.trim_start();

    if let Some(first) = trimmed.chars().next() {
        if let Some(value) = glyph_value(first) {
            return (Some(value), trimmed[first.len_utf8()..].trim_start());
        }
    }

    if let Some(captures) = ASCII_FRACTION_RE.captures(trimmed) {
        if let Some(value) = fraction_value(&captures) {
            let end = captures.get(0).map_or(0, |m| m.end());
            return (Some(value), trimmed[end..].trim_start());
        }
    }

    if let Some(found) = NUMBER_RE.find(trimmed) {
        let Ok(mut value) = found.as_str().parse::<f64>() else {
            return (None, text);
        };
        let mut rest = &trimmed[found.end()..];

        // Mixed numbers only combine with a plain whole part ("1 1/2", "1½").
        if !found.as_str().contains('.') {
            let after = rest.trim_start();
            if let Some(first) = after.chars().next() {
                if let Some(glyph) = glyph_value(first) {
                    value += glyph;
                    rest = &after[first.len_utf8()..];
                } else if rest.len() != after.len() {
                    if let Some(captures) = ASCII_FRACTION_RE.captures(after) {
                        if let Some(fraction) = fraction_value(&captures) {
                            value += fraction;
                            let end = captures.get(0).map_or(0, |m| m.end());
                            rest = &after[end..];
                        }
                    }
                }
            }
        }

        return (Some(value), rest.trim_start());
    }

    (None, text)
}

/// Applies a scale multiplier to a quantity and re-formats the display.
///
/// Scaling always goes through the number; display strings are never edited
/// directly, which keeps repeated scale-then-unscale stable.
pub fn scale_quantity(quantity: f64, multiplier: f64) -> (f64, String) {
    let scaled = quantity * multiplier;
    (scaled, format_quantity(scaled))
}

fn glyph_value(c: char) -> Option<f64> {
    FRACTION_GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, value)| *value)
}

fn fraction_value(captures: &regex::Captures<'_>) -> Option<f64> {
    let numerator: f64 = captures.get(1)?.as_str().parse().ok()?;
    let denominator: f64 = captures.get(2)?.as_str().parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::{format_quantity, parse_quantity, scale_quantity};

    #[test]
    fn formats_integers_glyphs_mixed_and_fallback() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(0.5), "½");
        assert_eq!(format_quantity(0.33), "⅓");
        assert_eq!(format_quantity(1.5), "1½");
        assert_eq!(format_quantity(2.75), "2¾");
        assert_eq!(format_quantity(0.4), "0.4");
    }

    #[test]
    fn near_integer_drift_rounds_to_whole() {
        assert_eq!(format_quantity(2.999), "3");
        assert_eq!(format_quantity(3.001), "3");
    }

    #[test]
    fn parses_glyph_ascii_whole_and_mixed() {
        assert_eq!(parse_quantity("½ cup sugar"), (Some(0.5), "cup sugar"));
        assert_eq!(parse_quantity("3/4 tsp salt"), (Some(0.75), "tsp salt"));
        assert_eq!(parse_quantity("2 eggs"), (Some(2.0), "eggs"));
        let (quantity, rest) = parse_quantity("1 1/2 cups flour");
        assert_eq!(quantity, Some(1.5));
        assert_eq!(rest, "cups flour");
        let (quantity, rest) = parse_quantity("1½ cups flour");
        assert_eq!(quantity, Some(1.5));
        assert_eq!(rest, "cups flour");
    }

    #[test]
    fn decimal_quantity_does_not_absorb_following_fraction() {
        let (quantity, rest) = parse_quantity("1.5 1/2 odd");
        assert_eq!(quantity, Some(1.5));
        assert_eq!(rest, "1/2 odd");
    }

    #[test]
    fn unrecognized_input_is_returned_whole() {
        assert_eq!(parse_quantity("a pinch of salt"), (None, "a pinch of salt"));
        assert_eq!(parse_quantity(""), (None, ""));
    }

    #[test]
    fn round_trip_recovers_known_fractions() {
        for value in [0.0, 0.125, 0.25, 0.33, 0.5, 0.625, 0.67, 0.75, 0.875, 1.5, 2.0] {
            let display = format_quantity(value);
            let (parsed, _) = parse_quantity(&display);
            let parsed = parsed.expect("formatted quantity should parse");
            assert!(
                (parsed - value).abs() < 0.02,
                "value {value} formatted as {display} parsed to {parsed}"
            );
        }
    }

    #[test]
    fn scale_then_unscale_is_stable() {
        let (scaled, _) = scale_quantity(0.75, 3.0);
        let (back, display) = scale_quantity(scaled, 1.0 / 3.0);
        assert!((back - 0.75).abs() < 0.005);
        assert_eq!(display, "¾");
    }
}
