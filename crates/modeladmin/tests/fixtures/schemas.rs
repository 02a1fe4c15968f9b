//! Schema sources used across integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use modeladmin::prelude::*;

/// `Post` with a primary key, a title, a timestamp and a `category` association
/// materialized through `category_id`.
pub fn post_schema() -> StaticSchema {
    StaticSchema::new("Post")
        .column(ColumnDescriptor::new("id", ColumnType::Integer).primary_key())
        .column(ColumnDescriptor::new("title", ColumnType::Text))
        .column(ColumnDescriptor::new("created_at", ColumnType::Timestamp))
        .column(ColumnDescriptor::new("category_id", ColumnType::Integer))
        .association(AssociationDescriptor::belongs_to("category", "Category"))
}

/// Schema source that counts how often each lookup runs.
pub struct CountingSchema {
    inner: StaticSchema,
    pub table_exists_calls: AtomicUsize,
    pub columns_calls: AtomicUsize,
    pub associations_calls: AtomicUsize,
    pub primary_key_calls: AtomicUsize,
}

impl CountingSchema {
    pub fn new(inner: StaticSchema) -> Self {
        Self {
            inner,
            table_exists_calls: AtomicUsize::new(0),
            columns_calls: AtomicUsize::new(0),
            associations_calls: AtomicUsize::new(0),
            primary_key_calls: AtomicUsize::new(0),
        }
    }

    pub fn columns_calls(&self) -> usize {
        self.columns_calls.load(Ordering::SeqCst)
    }

    pub fn associations_calls(&self) -> usize {
        self.associations_calls.load(Ordering::SeqCst)
    }

    pub fn primary_key_calls(&self) -> usize {
        self.primary_key_calls.load(Ordering::SeqCst)
    }
}

impl ModelSchema for CountingSchema {
    fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    fn table_exists(&self) -> Result<bool> {
        self.table_exists_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.table_exists()
    }

    fn primary_key(&self) -> &str {
        self.primary_key_calls.fetch_add(1, Ordering::SeqCst);
        ModelSchema::primary_key(&self.inner)
    }

    fn columns(&self) -> Result<Vec<ColumnDescriptor>> {
        self.columns_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.columns()
    }

    fn associations(&self) -> Result<Vec<AssociationDescriptor>> {
        self.associations_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.associations()
    }
}

/// Schema source whose table exists but whose column listing reports the
/// database unreachable. Associations still resolve.
pub struct FlakyColumns {
    inner: StaticSchema,
}

impl FlakyColumns {
    pub fn new(inner: StaticSchema) -> Self {
        Self { inner }
    }
}

impl ModelSchema for FlakyColumns {
    fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    fn table_exists(&self) -> Result<bool> {
        Ok(true)
    }

    fn primary_key(&self) -> &str {
        ModelSchema::primary_key(&self.inner)
    }

    fn columns(&self) -> Result<Vec<ColumnDescriptor>> {
        Err(Error::unavailable(self.model_name(), "connection reset while listing columns"))
    }

    fn associations(&self) -> Result<Vec<AssociationDescriptor>> {
        self.inner.associations()
    }
}
