//! Uniform attribute access on a single record.
//!
//! Provides the `Record` trait consumed by the decorator and `DynamicRecord`,
//! a map-backed implementation for rows whose shape is only known at runtime.

use std::collections::HashMap;

use crate::form_errors::FormErrors;
use crate::value::Value;

/// Read-only view of a record's attributes and validation errors.
pub trait Record {
    /// Read an attribute by name.
    ///
    /// Returns `None` when the record has no such attribute. A present but
    /// unset attribute may be returned as `Some(Value::Null)`.
    fn attribute(&self, name: &str) -> Option<Value>;

    /// The record's own validation errors.
    fn errors(&self) -> &FormErrors;
}

impl<R: Record + ?Sized> Record for &R {
    fn attribute(&self, name: &str) -> Option<Value> {
        (**self).attribute(name)
    }

    fn errors(&self) -> &FormErrors {
        (**self).errors()
    }
}

/// A record stored as a name-to-value map.
///
/// # Example
///
/// ```
/// use modeladmin_core::record::{DynamicRecord, Record};
/// use modeladmin_core::value::Value;
///
/// let post = DynamicRecord::new()
///     .with("id", 1)
///     .with("title", "Alpha");
///
/// assert_eq!(post.attribute("title"), Some(Value::Text("Alpha".to_string())));
/// assert_eq!(post.attribute("body"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynamicRecord {
    values: HashMap<String, Value>,
    errors: FormErrors,
}

impl DynamicRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Remove an attribute, returning it.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Check if an attribute is present.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Mutable access to the validation errors.
    pub fn errors_mut(&mut self) -> &mut FormErrors {
        &mut self.errors
    }
}

impl Record for DynamicRecord {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn errors(&self) -> &FormErrors {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_record_basic() {
        let mut record = DynamicRecord::new().with("title", "Alpha");
        record.set("views", 3);

        assert!(record.has("title"));
        assert!(!record.has("body"));
        assert_eq!(record.attribute("views"), Some(Value::Int(3)));

        assert_eq!(record.remove("views"), Some(Value::Int(3)));
        assert_eq!(record.attribute("views"), None);
    }

    #[test]
    fn test_errors_through_reference() {
        let mut record = DynamicRecord::new();
        record.errors_mut().add("title", "can't be blank");

        let by_ref: &dyn Record = &record;
        assert_eq!(by_ref.errors().len(), 1);
        assert!((&record).errors().has_error("title"));
    }
}
