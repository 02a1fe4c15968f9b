//! The model decorator.
//!
//! A `ModelDecorator` wraps one schema source and derives, on first use, the
//! field metadata an admin UI needs to render that model:
//!
//! - `fields()`: the canonical, frozen map of general and association fields,
//!   with columns implied by associations removed.
//! - `index_fields()`, `show_fields()`, `form_fields()`: independent copies of
//!   the canonical map, one per view.
//! - `index_field_names()`, `show_field_names()`, `form_field_names()`: the
//!   names each view actually renders.
//!
//! Every derived value is computed at most once per decorator and cached for
//! its lifetime. Caches are `OnceLock`s, so a decorator can be shared across
//! threads; concurrent first calls may both compute, and the first stored
//! value wins.
//!
//! # Example
//!
//! ```
//! use modeladmin::prelude::*;
//!
//! let post = StaticSchema::new("Post")
//!     .column(ColumnDescriptor::new("id", ColumnType::BigInt).primary_key())
//!     .column(ColumnDescriptor::new("title", ColumnType::Text))
//!     .column(ColumnDescriptor::new("category_id", ColumnType::BigInt))
//!     .association(AssociationDescriptor::belongs_to("category", "Category"));
//!
//! let decorator = ModelDecorator::new(post);
//! let fields = decorator.fields().unwrap();
//! assert!(fields.contains_key("category"));
//! assert!(!fields.contains_key("category_id"));
//!
//! let record = DynamicRecord::new().with("title", "Alpha");
//! assert_eq!(decorator.guess_title(&record), Some(Value::from("Alpha")));
//! ```

use std::collections::BTreeSet;
use std::sync::OnceLock;

use modeladmin_core::{
    FieldMap, FormErrors, FrozenFieldMap, ModelSchema, Record, Result, Value, humanize,
};
use modeladmin_schema::builder;

use crate::config::DecoratorConfig;
use crate::listing::FieldListing;
use crate::title::TitleFieldFinder;

/// Derives and caches admin field metadata for one model.
#[derive(Debug)]
pub struct ModelDecorator<S: ModelSchema> {
    schema: S,
    config: DecoratorConfig,
    general_fields: OnceLock<FrozenFieldMap>,
    unreachable_general: OnceLock<FrozenFieldMap>,
    fields: OnceLock<FrozenFieldMap>,
    index_fields: OnceLock<FieldMap>,
    show_fields: OnceLock<FieldMap>,
    form_fields: OnceLock<FieldMap>,
    index_field_names: OnceLock<BTreeSet<String>>,
    show_field_names: OnceLock<BTreeSet<String>>,
    form_field_names: OnceLock<BTreeSet<String>>,
    primary_key: OnceLock<String>,
    title_field: OnceLock<Option<String>>,
}

/// Return the cached value, or compute and cache it.
///
/// Errors are returned without being cached, so a later call retries.
fn memoize<'a, T>(cell: &'a OnceLock<T>, init: impl FnOnce() -> Result<T>) -> Result<&'a T> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = init()?;
    Ok(cell.get_or_init(|| value))
}

/// Mutable access to a view copy, creating it from `canonical` if needed.
/// Clears the view's cached name list, which no longer reflects the copy.
fn view_mut<'a>(
    cell: &'a mut OnceLock<FieldMap>,
    names: &mut OnceLock<BTreeSet<String>>,
    canonical: &FrozenFieldMap,
) -> &'a mut FieldMap {
    names.take();
    if cell.get().is_none() {
        let _ = cell.set(canonical.to_mutable());
    }
    match cell.get_mut() {
        Some(map) => map,
        None => unreachable!("view copy initialized above"),
    }
}

impl<S: ModelSchema> ModelDecorator<S> {
    /// Create a decorator with the default configuration.
    pub fn new(schema: S) -> Self {
        Self::with_config(schema, DecoratorConfig::default())
    }

    /// Create a decorator with a custom configuration.
    pub fn with_config(schema: S, config: DecoratorConfig) -> Self {
        Self {
            schema,
            config,
            general_fields: OnceLock::new(),
            unreachable_general: OnceLock::new(),
            fields: OnceLock::new(),
            index_fields: OnceLock::new(),
            show_fields: OnceLock::new(),
            form_fields: OnceLock::new(),
            index_field_names: OnceLock::new(),
            show_field_names: OnceLock::new(),
            form_field_names: OnceLock::new(),
            primary_key: OnceLock::new(),
            title_field: OnceLock::new(),
        }
    }

    /// The wrapped schema source.
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// The model's type name.
    pub fn model_name(&self) -> &str {
        self.schema.model_name()
    }

    /// The active configuration.
    pub fn config(&self) -> &DecoratorConfig {
        &self.config
    }

    // ========================================================================
    // Canonical field map
    // ========================================================================

    /// General (column) fields only.
    ///
    /// An unreachable database yields an empty map. That outcome is not
    /// cached, so the next call asks the schema source again.
    pub fn general_fields(&self) -> Result<&FrozenFieldMap> {
        match self.derive_general_fields() {
            Err(e) if e.is_unavailable() => {
                tracing::warn!(model = self.model_name(), error = %e, "Schema unavailable; no general fields");
                Ok(self.unreachable_general.get_or_init(|| FieldMap::new().freeze()))
            }
            other => other,
        }
    }

    /// General fields as reported by the schema source, errors included.
    fn derive_general_fields(&self) -> Result<&FrozenFieldMap> {
        memoize(&self.general_fields, || {
            Ok(builder::general_fields(&self.schema)?.freeze())
        })
    }

    /// The canonical field map shared by every view.
    ///
    /// If the table does not exist yet, or the database cannot be reached,
    /// this is an empty map that answers every lookup with an empty record.
    /// Malformed schema descriptors are returned as errors.
    pub fn fields(&self) -> Result<&FrozenFieldMap> {
        memoize(&self.fields, || match self.build_fields() {
            Ok(map) => Ok(map.freeze()),
            Err(e) if e.is_unavailable() => {
                tracing::warn!(model = self.model_name(), error = %e, "Schema unavailable; using empty field map");
                Ok(FieldMap::default_empty().freeze())
            }
            Err(e) => Err(e),
        })
    }

    #[tracing::instrument(level = "debug", skip(self), fields(model = self.model_name()))]
    fn build_fields(&self) -> Result<FieldMap> {
        if !self.schema.table_exists()? {
            tracing::info!("Table not provisioned yet; using empty field map");
            return Ok(FieldMap::default_empty());
        }

        let mut merged = self.derive_general_fields()?.to_mutable();
        merged.merge(builder::association_fields(&self.schema)?);

        let implied: BTreeSet<String> = merged
            .values()
            .filter(|f| f.is_association())
            .flat_map(|f| f.foreign_key.iter().chain(f.polymorphic_type.iter()))
            .cloned()
            .collect();
        merged.retain(|f| !implied.contains(&f.name));

        tracing::debug!(
            fields = merged.len(),
            suppressed = implied.len(),
            "Built canonical field map"
        );
        Ok(merged)
    }

    /// True if the canonical map was built from an existing table.
    pub fn is_provisioned(&self) -> bool {
        self.fields().is_ok_and(|f| !f.is_default_empty())
    }

    // ========================================================================
    // Per-view copies
    // ========================================================================

    /// The index view's copy of the canonical map.
    pub fn index_fields(&self) -> Result<&FieldMap> {
        memoize(&self.index_fields, || Ok(self.fields()?.to_mutable()))
    }

    /// The show view's copy of the canonical map.
    pub fn show_fields(&self) -> Result<&FieldMap> {
        memoize(&self.show_fields, || Ok(self.fields()?.to_mutable()))
    }

    /// The form view's copy of the canonical map.
    pub fn form_fields(&self) -> Result<&FieldMap> {
        memoize(&self.form_fields, || Ok(self.fields()?.to_mutable()))
    }

    /// Customize the index view's copy. Changes never reach other views or
    /// the canonical map; the index name list is rederived on next access.
    pub fn index_fields_mut(&mut self) -> Result<&mut FieldMap> {
        let canonical = self.fields()?.clone();
        Ok(view_mut(
            &mut self.index_fields,
            &mut self.index_field_names,
            &canonical,
        ))
    }

    /// Customize the show view's copy.
    pub fn show_fields_mut(&mut self) -> Result<&mut FieldMap> {
        let canonical = self.fields()?.clone();
        Ok(view_mut(
            &mut self.show_fields,
            &mut self.show_field_names,
            &canonical,
        ))
    }

    /// Customize the form view's copy.
    pub fn form_fields_mut(&mut self) -> Result<&mut FieldMap> {
        let canonical = self.fields()?.clone();
        Ok(view_mut(
            &mut self.form_fields,
            &mut self.form_field_names,
            &canonical,
        ))
    }

    // ========================================================================
    // Per-view name lists
    // ========================================================================

    /// Fields shown as index table columns: no associations and no bulky
    /// storage types.
    pub fn index_field_names(&self) -> Result<&BTreeSet<String>> {
        memoize(&self.index_field_names, || {
            let names: BTreeSet<String> = self
                .index_fields()?
                .values()
                .filter(|f| !f.is_association())
                .filter(|f| !f.column_type().is_some_and(|t| self.config.is_index_excluded(t)))
                .map(|f| f.name.clone())
                .collect();
            tracing::trace!(model = self.model_name(), ?names, "Derived index field names");
            Ok(names)
        })
    }

    /// Fields shown as show-page rows: everything except associations to
    /// attachment/blob classes.
    pub fn show_field_names(&self) -> Result<&BTreeSet<String>> {
        memoize(&self.show_field_names, || {
            let names: BTreeSet<String> = self
                .show_fields()?
                .values()
                .filter(|f| !f.class.as_deref().is_some_and(|c| self.config.is_show_excluded(c)))
                .map(|f| f.name.clone())
                .collect();
            tracing::trace!(model = self.model_name(), ?names, "Derived show field names");
            Ok(names)
        })
    }

    /// Fields rendered as form controls: everything except the primary key,
    /// auto-managed timestamps, and scoped or through associations.
    pub fn form_field_names(&self) -> Result<&BTreeSet<String>> {
        memoize(&self.form_field_names, || {
            let primary_key = self.primary_key();
            let names: BTreeSet<String> = self
                .form_fields()?
                .values()
                .filter(|f| f.name != primary_key)
                .filter(|f| !self.config.is_form_timestamp(&f.name))
                .filter(|f| !(f.is_association() && (f.has_scope || f.is_through)))
                .map(|f| f.name.clone())
                .collect();
            tracing::trace!(model = self.model_name(), ?names, "Derived form field names");
            Ok(names)
        })
    }

    // ========================================================================
    // Record helpers
    // ========================================================================

    /// The model's primary key column.
    pub fn primary_key(&self) -> &str {
        self.primary_key
            .get_or_init(|| self.schema.primary_key().to_string())
    }

    /// The field used as a record's display name, if any.
    pub fn title_field(&self) -> Result<Option<&str>> {
        let field = memoize(&self.title_field, || {
            let general = self.general_fields()?;
            let found = TitleFieldFinder::new(general, &self.config.title_candidates)
                .find()
                .map(str::to_string);
            tracing::debug!(model = self.model_name(), title_field = ?found, "Resolved title field");
            Ok(found)
        })?;
        Ok(field.as_deref())
    }

    /// The record's display name, read from the title field.
    ///
    /// Returns `None` when no title field exists, when the record lacks the
    /// attribute, or when the attribute is null.
    pub fn guess_title<R: Record + ?Sized>(&self, record: &R) -> Option<Value> {
        let field = match self.title_field() {
            Ok(field) => field?,
            Err(e) => {
                tracing::warn!(model = self.model_name(), error = %e, "Cannot resolve title field");
                return None;
            }
        };
        record.attribute(field).filter(|v| !v.is_null())
    }

    /// The record's own validation errors.
    pub fn form_errors<'r, R: Record + ?Sized>(&self, record: &'r R) -> &'r FormErrors {
        record.errors()
    }

    /// Display label for a field, falling back to a humanized name.
    pub fn label_for(&self, name: &str) -> String {
        self.fields()
            .ok()
            .and_then(|fields| fields.get(name))
            .map(|f| f.label.clone())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| humanize(name))
    }

    /// Snapshot of the derived field lists for a rendering layer.
    pub fn listing(&self) -> Result<FieldListing> {
        Ok(FieldListing {
            model: self.model_name().to_string(),
            primary_key: self.primary_key().to_string(),
            title_field: self.title_field()?.map(str::to_string),
            provisioned: self.is_provisioned(),
            index: self.index_field_names()?.clone(),
            show: self.show_field_names()?.clone(),
            form: self.form_field_names()?.clone(),
        })
    }
}
