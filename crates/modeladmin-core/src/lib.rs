//! Core types and traits for ModelAdmin Rust.
//!
//! `modeladmin-core` is the **contract layer** for the workspace. It defines the
//! data model that describes a model's fields and the traits that connect the
//! metadata derivation logic to the host application.
//!
//! # Role In The Architecture
//!
//! - **Schema source**: `ModelSchema` is implemented by whatever knows a model's
//!   columns and associations (an ORM registry, a database catalog, a static table).
//! - **Field metadata**: `FieldMetadata`, `FieldMap` and `FrozenFieldMap` carry the
//!   unified per-field description consumed by admin views.
//! - **Records**: `Record` and `Value` give the decorator uniform, reflection-free
//!   access to attributes and validation errors of a single row.
//!
//! # Who Uses This Crate
//!
//! - `modeladmin-schema` turns `ModelSchema` descriptors into `FieldMap`s.
//! - `modeladmin` orchestrates and caches the view-specific field lists.
//!
//! Most applications should use the `modeladmin` facade; reach for
//! `modeladmin-core` directly when implementing a schema source.

pub mod association;
pub mod error;
pub mod field;
pub mod form_errors;
pub mod naming;
pub mod record;
pub mod schema;
pub mod types;
pub mod value;

pub use association::{AssociationDescriptor, AssociationKind};
pub use error::{Error, Result};
pub use field::{FieldMap, FieldMetadata, FieldType, FrozenFieldMap};
pub use form_errors::FormErrors;
pub use naming::humanize;
pub use record::{DynamicRecord, Record};
pub use schema::{ColumnDescriptor, ModelSchema};
pub use types::ColumnType;
pub use value::Value;
