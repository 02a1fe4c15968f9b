//! Validation errors attached to a record.
//!
//! The admin layer never validates records itself; it only reads back the
//! errors a record already carries so forms can render them next to inputs.

use serde::{Deserialize, Serialize};

/// Per-field and record-wide validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    /// Messages keyed by field name, in insertion order.
    fields: Vec<(String, String)>,
    /// Messages not tied to a single field.
    base: Vec<String>,
}

impl FormErrors {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push((field.into(), message.into()));
    }

    /// Record a message against the record as a whole.
    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base.push(message.into());
    }

    /// Messages recorded against `field`.
    pub fn on<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    /// Record-wide messages.
    #[must_use]
    pub fn base(&self) -> &[String] {
        &self.base
    }

    /// True if `field` has at least one message.
    #[must_use]
    pub fn has_error(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field)
    }

    /// Total number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len() + self.base.len()
    }

    /// True if there are no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.base.is_empty()
    }

    /// Drop every message.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.base.clear();
    }

    /// Sentence-style messages: base messages first, then
    /// `"<Field label> <message>"` for each field message.
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.base
            .iter()
            .cloned()
            .chain(
                self.fields
                    .iter()
                    .map(|(field, message)| format!("{} {}", crate::naming::humanize(field), message)),
            )
            .collect()
    }
}
