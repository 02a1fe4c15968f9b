//! Shared test fixtures.

#![allow(dead_code)]

pub mod schemas;

pub use schemas::{CountingSchema, FlakyColumns, post_schema};
