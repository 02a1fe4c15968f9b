//! ModelAdmin Rust: schema-derived field metadata for admin interfaces.
//!
//! `modeladmin` is the **primary facade** for the workspace. It wraps a
//! [`ModelSchema`] in a [`ModelDecorator`] that derives, and caches, the field
//! lists an auto-generated admin UI renders for a model.
//!
//! # Role In The Architecture
//!
//! - **Canonical metadata**: general and association fields merged into one
//!   frozen map, without the columns associations already represent.
//! - **View lists**: index, show and form field names, each filtered by its
//!   own rules from an independent copy of the canonical map.
//! - **Record helpers**: title guessing and access to validation errors.
//!
//! Routing, rendering, persistence and validation live in the host application.
//!
//! # Quick Start
//!
//! ```
//! use modeladmin::prelude::*;
//!
//! let post = StaticSchema::new("Post")
//!     .column(ColumnDescriptor::new("id", ColumnType::BigInt).primary_key())
//!     .column(ColumnDescriptor::new("title", ColumnType::Text))
//!     .column(ColumnDescriptor::new("created_at", ColumnType::Timestamp))
//!     .column(ColumnDescriptor::new("category_id", ColumnType::BigInt))
//!     .association(AssociationDescriptor::belongs_to("category", "Category"));
//!
//! let decorator = ModelDecorator::new(post);
//! let form: Vec<_> = decorator.form_field_names().unwrap().iter().cloned().collect();
//! assert_eq!(form, vec!["category".to_string(), "title".to_string()]);
//! ```

pub mod config;
pub mod decorator;
pub mod listing;
pub mod title;

pub use config::DecoratorConfig;
pub use decorator::ModelDecorator;
pub use listing::FieldListing;
pub use title::TitleFieldFinder;

pub use modeladmin_core::{
    AssociationDescriptor, AssociationKind, ColumnDescriptor, ColumnType, DynamicRecord, Error,
    FieldMap, FieldMetadata, FieldType, FormErrors, FrozenFieldMap, ModelSchema, Record, Result,
    Value,
};
pub use modeladmin_schema::StaticSchema;

/// Commonly used items.
pub mod prelude {
    pub use crate::{DecoratorConfig, FieldListing, ModelDecorator, TitleFieldFinder};
    pub use modeladmin_core::{
        AssociationDescriptor, AssociationKind, ColumnDescriptor, ColumnType, DynamicRecord,
        Error, FieldMap, FieldMetadata, FieldType, FormErrors, FrozenFieldMap, ModelSchema,
        Record, Result, Value,
    };
    pub use modeladmin_schema::StaticSchema;
}
