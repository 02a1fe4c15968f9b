//! Serializable snapshot of a decorator's field lists.

use std::collections::BTreeSet;

use modeladmin_core::Result;
use serde::{Deserialize, Serialize};

/// Everything a rendering layer needs to lay out one model's admin pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldListing {
    /// Model type name.
    pub model: String,
    /// Primary key column.
    pub primary_key: String,
    /// Field used as a record's display name.
    pub title_field: Option<String>,
    /// False until the backing table exists. Renderers should show a
    /// provisioning notice instead of empty pages.
    pub provisioned: bool,
    /// Index table columns.
    pub index: BTreeSet<String>,
    /// Show page rows.
    pub show: BTreeSet<String>,
    /// Form controls.
    pub form: BTreeSet<String>,
}

impl FieldListing {
    /// Render as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render as a `serde_json::Value`.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
