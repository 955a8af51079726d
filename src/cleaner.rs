// 🧹 Field Cleaner - Strip parenthetical notes from native names
// "Deutsch (Standard)" → "Deutsch"

use once_cell::sync::Lazy;
use regex::Regex;

// Non-greedy, so each "(" pairs with the nearest following ")". No nesting.
static PARENTHETICAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// Remove every `(...)` span, then trim surrounding whitespace
pub fn strip_parentheticals(value: &str) -> String {
    PARENTHETICAL_PATTERN
        .replace_all(value, "")
        .trim()
        .to_string()
}
