//! Capitalization and SQL `LIKE` helpers.

/// Upper-cases the first character and lower-cases the rest.
///
/// Case mapping is Unicode-aware, so a character whose upper-case form is
/// several characters (`ß` becomes `SS`) expands. Empty input stays empty.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Capitalizes every space-separated word, keeping the spaces as they are.
///
/// Leading and trailing spaces survive: `capitalize_all("a b ")` is `"A B "`.
#[must_use]
pub fn capitalize_all(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Wraps a lower-cased query in `%` wildcards for a `LIKE` clause.
#[must_use]
pub fn format_to_like(query: &str) -> String {
    format!("%{}%", query.to_lowercase())
}

/// Returns the string, or `""` when absent.
#[must_use]
pub fn empty_if_none(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}
