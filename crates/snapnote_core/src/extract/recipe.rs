//! Recipe extraction via a section-scanning state machine.
//!
//! # Responsibility
//! - Walk title → meta → ingredients → steps, advanced by header keywords.
//! - Decompose ingredient lines into quantity + name through the shared
//!   quantity grammar.
//!
//! # Invariants
//! - Header lines switch state and are discarded, never stored as content.
//! - Ingredient/step heuristics apply even before their header is seen.
//! - Steps are stored without leading ordinal markers; the serializer
//!   re-numbers them.

use crate::extract::label_value;
use crate::format::quantity::{format_quantity, parse_quantity};
use crate::model::structured::{ParsedIngredient, ParsedRecipe};
use once_cell::sync::Lazy;
use regex::Regex;

/// Ingredient-shaped lines shorter than this count as "short".
const SHORT_INGREDIENT_LEN: usize = 60;

/// Header lines longer than this are treated as content, not headers.
const MAX_HEADER_LEN: usize = 30;

static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit regex"));
static TIME_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+\s*(?:hours?|hrs?|minutes?|mins?)(?:\s+\d+\s*(?:minutes?|mins?))?")
        .expect("valid time phrase regex")
});
static STEP_ORDINAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:step\s+\d+[:.)]?|\d+[:.)])\s*").expect("valid step ordinal regex")
});

const UNIT_WORDS: &[&str] = &[
    "cup", "cups", "tbsp", "tablespoon", "tablespoons", "tsp", "teaspoon", "teaspoons", "oz",
    "ounce", "ounces", "lb", "lbs", "pound", "pounds", "g", "gram", "grams", "kg", "ml", "l",
    "liter", "liters", "litre", "litres", "pinch", "dash", "clove", "cloves", "slice", "slices",
    "stick", "sticks", "can", "cans",
];

const COOKING_VERBS: &[&str] = &[
    "preheat", "mix", "stir", "add", "combine", "whisk", "pour", "heat", "chop", "dice", "slice",
    "simmer", "boil", "bake", "fold", "season", "serve", "drain", "cool", "knead", "grease",
    "beat", "melt", "sprinkle", "cover", "remove", "let",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Meta,
    Ingredients,
    Steps,
}

/// Extracts a structured recipe from note content. Pure and total.
pub fn extract_recipe(content: &str) -> ParsedRecipe {
    let mut recipe = ParsedRecipe::default();
    let mut section = Section::Title;

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(next) = header_section(line) {
            section = next;
            continue;
        }

        match section {
            Section::Ingredients => recipe.ingredients.push(parse_ingredient(line)),
            Section::Steps => recipe.steps.push(strip_step_ordinal(line)),
            Section::Title | Section::Meta => {
                if looks_like_step(line) {
                    recipe.steps.push(strip_step_ordinal(line));
                } else if looks_like_ingredient(line) {
                    recipe.ingredients.push(parse_ingredient(line));
                } else if section == Section::Title {
                    recipe.title = line.to_string();
                    section = Section::Meta;
                } else {
                    claim_meta_line(&mut recipe, line);
                }
            }
        }
    }

    recipe
}

/// Splits one ingredient line into quantity, display form and name.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let (quantity, name) = parse_quantity(line);
    match quantity {
        Some(value) => ParsedIngredient {
            original_text: line.to_string(),
            quantity: Some(value),
            display_quantity: Some(format_quantity(value)),
            name: name.to_string(),
        },
        None => ParsedIngredient {
            original_text: line.to_string(),
            quantity: None,
            display_quantity: None,
            name: line.to_string(),
        },
    }
}

/// Detects a section header line. Headers are short, keyword-led lines like
/// "Ingredients:" or "Directions"; a step that merely mentions ingredients
/// is not a header.
fn header_section(line: &str) -> Option<Section> {
    let lowered = line.trim_matches(|c: char| c == '#' || c == ':' || c.is_whitespace())
        .to_ascii_lowercase();
    if lowered.len() > MAX_HEADER_LEN {
        return None;
    }
    if lowered.starts_with("ingredient") {
        return Some(Section::Ingredients);
    }
    if lowered.starts_with("instruction")
        || lowered.starts_with("direction")
        || lowered.starts_with("method")
        || lowered == "steps"
    {
        return Some(Section::Steps);
    }
    None
}

fn claim_meta_line(recipe: &mut ParsedRecipe, line: &str) {
    // Canonical labels first, so serialized output re-parses unchanged.
    if let Some(value) = label_value(line, &["servings:", "serves:"]) {
        if recipe.servings.is_empty() && !value.is_empty() {
            recipe.servings = value.to_string();
        }
        return;
    }
    if let Some(value) = label_value(line, &["prep time:", "prep:"]) {
        if recipe.prep_time.is_empty() && !value.is_empty() {
            recipe.prep_time = value.to_string();
        }
        return;
    }
    if let Some(value) = label_value(line, &["cook time:", "cook:", "bake time:"]) {
        if recipe.cook_time.is_empty() && !value.is_empty() {
            recipe.cook_time = value.to_string();
        }
        return;
    }

    let lowered = line.to_ascii_lowercase();
    if recipe.servings.is_empty() && (lowered.contains("serve") || lowered.contains("yield")) {
        if let Some(found) = DIGIT_RUN_RE.find(line) {
            recipe.servings = found.as_str().to_string();
            return;
        }
    }
    if recipe.prep_time.is_empty() && lowered.contains("prep") {
        if let Some(found) = TIME_PHRASE_RE.find(line) {
            recipe.prep_time = found.as_str().to_string();
            return;
        }
    }
    if recipe.cook_time.is_empty() && (lowered.contains("cook") || lowered.contains("bake")) {
        if let Some(found) = TIME_PHRASE_RE.find(line) {
            recipe.cook_time = found.as_str().to_string();
        }
    }
    // Anything else in the meta section is noise between title and sections.
}

/// Ingredient heuristic: starts with a digit or fraction glyph and is either
/// short or mentions a measurement unit.
fn looks_like_ingredient(line: &str) -> bool {
    let starts_numeric = line
        .chars()
        .next()
        .map(|c| c.is_ascii_digit() || "⅛¼⅓⅜½⅝⅔¾⅞".contains(c))
        .unwrap_or(false);
    if !starts_numeric {
        return false;
    }
    line.len() < SHORT_INGREDIENT_LEN || contains_unit_word(line)
}

/// Step heuristic: an ordinal marker or a leading cooking verb.
fn looks_like_step(line: &str) -> bool {
    if STEP_ORDINAL_RE.is_match(line) {
        // "1. Preheat oven" is a step; "1 1/2 cups flour" is not.
        return !contains_unit_word(line);
    }
    line.split_whitespace()
        .next()
        .map(|word| {
            let lowered = word.trim_matches(|c: char| !c.is_alphanumeric()).to_ascii_lowercase();
            COOKING_VERBS.contains(&lowered.as_str())
        })
        .unwrap_or(false)
}

fn contains_unit_word(line: &str) -> bool {
    line.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| {
            let lowered = word.to_ascii_lowercase();
            UNIT_WORDS.contains(&lowered.as_str())
        })
}

/// Removes a leading "1." / "2)" / "Step 3:" marker from a step line.
fn strip_step_ordinal(line: &str) -> String {
    STEP_ORDINAL_RE.replace(line, "").trim().to_string()
}
