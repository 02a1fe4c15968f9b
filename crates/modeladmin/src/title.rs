//! Title field guessing.
//!
//! Picks the general field that best names a record, in priority order:
//!
//! 1. The first conventional name (`title`, `name`, ...) present in the map.
//! 2. The first text field whose name ends in `_name`, `_title` or `_label`.
//! 3. The first text field.
//!
//! "First" means first in field-name order, which keeps the choice
//! deterministic for a given schema.

use std::sync::OnceLock;

use modeladmin_core::{FieldMap, FieldMetadata};
use regex::Regex;

const TITLE_SUFFIX: &str = r"_(?:name|title|label)$";

/// The compiled suffix pattern. `None` if it failed to compile, in which case
/// no field matches by suffix.
fn title_suffix() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(TITLE_SUFFIX) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(pattern = TITLE_SUFFIX, error = %e, "Invalid title suffix pattern");
                None
            }
        })
        .as_ref()
}

fn has_title_suffix(name: &str) -> bool {
    title_suffix().is_some_and(|re| re.is_match(name))
}

/// Finds the field that best represents a record's display name.
#[derive(Debug, Clone, Copy)]
pub struct TitleFieldFinder<'a> {
    fields: &'a FieldMap,
    candidates: &'a [String],
}

impl<'a> TitleFieldFinder<'a> {
    /// Create a finder over general (non-association) fields.
    pub fn new(fields: &'a FieldMap, candidates: &'a [String]) -> Self {
        Self { fields, candidates }
    }

    /// The chosen field name, or `None` if nothing qualifies.
    #[must_use]
    pub fn find(&self) -> Option<&'a str> {
        let fields = self.fields;

        if let Some(name) = self
            .candidates
            .iter()
            .find(|name| fields.contains_key(name))
        {
            return Some(name.as_str());
        }

        fields
            .values()
            .filter(|f| is_text(f))
            .find(|f| has_title_suffix(&f.name))
            .or_else(|| fields.values().find(|f| is_text(f)))
            .map(|f| f.name.as_str())
    }
}

fn is_text(field: &FieldMetadata) -> bool {
    !field.is_association() && field.column_type().is_some_and(|t| t.is_text_like())
}
