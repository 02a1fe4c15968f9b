//! Field metadata building for ModelAdmin Rust.
//!
//! `modeladmin-schema` turns the raw descriptors reported by a
//! [`ModelSchema`](modeladmin_core::ModelSchema) into field maps:
//!
//! - [`general_fields`] covers storage columns.
//! - [`association_fields`] covers declared associations.
//!
//! Both functions are pure and uncached; the decorator in `modeladmin` owns
//! caching. [`StaticSchema`] is an in-memory schema source for hosts that
//! describe their models by hand.

pub mod builder;
pub mod memory;

pub use builder::{association_fields, general_fields};
pub use memory::StaticSchema;
