//! The schema source contract.
//!
//! A schema source knows how to enumerate a model's raw columns and declared
//! associations. How it does that (ORM registry, catalog query, static table)
//! is the host's business; the metadata builder only needs this trait.

use std::sync::Arc;

use crate::association::AssociationDescriptor;
use crate::error::Result;
use crate::types::ColumnType;

/// A raw column as reported by the schema source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name in the database.
    pub name: String,
    /// Storage type.
    pub column_type: ColumnType,
    /// Whether this column is nullable.
    pub nullable: bool,
    /// Whether this is a primary key column.
    pub primary_key: bool,
}

impl ColumnDescriptor {
    /// Create a new column descriptor.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            primary_key: false,
        }
    }

    /// Mark as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark as primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// Capability surface of a model type, as seen by the admin layer.
pub trait ModelSchema {
    /// The model's type name (e.g. `"Post"`).
    fn model_name(&self) -> &str;

    /// Whether the backing table exists yet.
    ///
    /// Returns `Err(Error::SchemaUnavailable)` when the database cannot be reached.
    fn table_exists(&self) -> Result<bool>;

    /// Name of the declared primary key column.
    fn primary_key(&self) -> &str;

    /// Raw column descriptors.
    fn columns(&self) -> Result<Vec<ColumnDescriptor>>;

    /// Raw association descriptors.
    fn associations(&self) -> Result<Vec<AssociationDescriptor>>;
}

macro_rules! forward_model_schema {
    ($($ptr:ty),*) => {$(
        impl<S: ModelSchema + ?Sized> ModelSchema for $ptr {
            fn model_name(&self) -> &str {
                (**self).model_name()
            }

            fn table_exists(&self) -> Result<bool> {
                (**self).table_exists()
            }

            fn primary_key(&self) -> &str {
                (**self).primary_key()
            }

            fn columns(&self) -> Result<Vec<ColumnDescriptor>> {
                (**self).columns()
            }

            fn associations(&self) -> Result<Vec<AssociationDescriptor>> {
                (**self).associations()
            }
        }
    )*};
}

forward_model_schema!(&S, Box<S>, Arc<S>);
