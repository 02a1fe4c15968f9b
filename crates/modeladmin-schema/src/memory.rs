//! In-memory schema source.
//!
//! Provides `StaticSchema` for models whose columns and associations are
//! declared by hand rather than read from a live database.

use modeladmin_core::{AssociationDescriptor, ColumnDescriptor, Error, ModelSchema, Result};

/// A schema source backed by descriptors held in memory.
///
/// # Example
///
/// ```
/// use modeladmin_core::{AssociationDescriptor, ColumnDescriptor, ColumnType, ModelSchema};
/// use modeladmin_schema::StaticSchema;
///
/// let post = StaticSchema::new("Post")
///     .column(ColumnDescriptor::new("id", ColumnType::BigInt).primary_key())
///     .column(ColumnDescriptor::new("title", ColumnType::Text))
///     .association(AssociationDescriptor::belongs_to("category", "Category"));
///
/// assert_eq!(ModelSchema::primary_key(&post), "id");
/// assert!(post.table_exists().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct StaticSchema {
    model_name: String,
    primary_key: String,
    columns: Vec<ColumnDescriptor>,
    associations: Vec<AssociationDescriptor>,
    provisioned: bool,
    unavailable: Option<String>,
}

impl StaticSchema {
    /// Create a provisioned schema with primary key `"id"` and no fields.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            primary_key: "id".to_string(),
            columns: Vec::new(),
            associations: Vec::new(),
            provisioned: true,
            unavailable: None,
        }
    }

    /// Add a column. A column marked as primary key becomes the model's
    /// primary key.
    #[must_use]
    pub fn column(mut self, column: ColumnDescriptor) -> Self {
        if column.primary_key {
            self.primary_key.clone_from(&column.name);
        }
        self.columns.push(column);
        self
    }

    /// Add an association.
    #[must_use]
    pub fn association(mut self, association: AssociationDescriptor) -> Self {
        self.associations.push(association);
        self
    }

    /// Override the primary key name.
    #[must_use]
    pub fn with_primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key = name.into();
        self
    }

    /// Set whether the backing table exists.
    #[must_use]
    pub fn provisioned(mut self, value: bool) -> Self {
        self.provisioned = value;
        self
    }

    /// Make every lookup fail as if the database were unreachable.
    #[must_use]
    pub fn unavailable(mut self, reason: impl Into<String>) -> Self {
        self.unavailable = Some(reason.into());
        self
    }

    fn reachable(&self) -> Result<()> {
        match &self.unavailable {
            Some(reason) => Err(Error::unavailable(&self.model_name, reason)),
            None => Ok(()),
        }
    }
}

impl ModelSchema for StaticSchema {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn table_exists(&self) -> Result<bool> {
        self.reachable()?;
        Ok(self.provisioned)
    }

    fn primary_key(&self) -> &str {
        &self.primary_key
    }

    fn columns(&self) -> Result<Vec<ColumnDescriptor>> {
        self.reachable()?;
        Ok(self.columns.clone())
    }

    fn associations(&self) -> Result<Vec<AssociationDescriptor>> {
        self.reachable()?;
        Ok(self.associations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modeladmin_core::ColumnType;

    #[test]
    fn test_primary_key_follows_column() {
        let schema = StaticSchema::new("Tag")
            .column(ColumnDescriptor::new("slug", ColumnType::String).primary_key());
        assert_eq!(ModelSchema::primary_key(&schema), "slug");

        let schema = schema.with_primary_key("uuid");
        assert_eq!(ModelSchema::primary_key(&schema), "uuid");
    }

    #[test]
    fn test_unavailable_schema() {
        let schema = StaticSchema::new("Tag").unavailable("timeout");
        assert!(schema.table_exists().unwrap_err().is_unavailable());
        assert!(schema.columns().is_err());
        assert!(schema.associations().is_err());
        assert_eq!(schema.model_name(), "Tag");
    }

    #[test]
    fn test_unprovisioned_schema() {
        let schema = StaticSchema::new("Tag").provisioned(false);
        assert!(!schema.table_exists().unwrap());
    }
}
