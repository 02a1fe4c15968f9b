//! Display-name helpers.

/// Turn a field name into a human-readable label.
///
/// Strips a trailing `_id`, replaces underscores with spaces and capitalizes
/// the first character: `"created_at"` becomes `"Created at"`,
/// `"category_id"` becomes `"Category"`.
#[must_use]
pub fn humanize(name: &str) -> String {
    let base = match name.strip_suffix("_id") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    };
    let spaced = base.replace('_', " ");
    let trimmed = spaced.trim();

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
