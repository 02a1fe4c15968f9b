//! Field metadata and field maps.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::association::AssociationKind;
use crate::types::ColumnType;

/// Type tag of a field: a storage type or an association kind.
///
/// Serialized as its string tag. Association kind tags take precedence when
/// parsing, so `"has_many"` never reads back as a storage type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FieldType {
    Column(ColumnType),
    Association(AssociationKind),
}

impl FieldType {
    /// String form of the tag (`"integer"`, `"belongs_to"`, ...).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Column(ty) => ty.as_str(),
            FieldType::Association(kind) => kind.as_str(),
        }
    }

    /// The storage type, for general fields.
    #[must_use]
    pub const fn column_type(&self) -> Option<&ColumnType> {
        match self {
            FieldType::Column(ty) => Some(ty),
            FieldType::Association(_) => None,
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Column(ty) => ty.into(),
            FieldType::Association(kind) => kind.as_str().to_string(),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match AssociationKind::from_name(&tag) {
            Some(kind) => FieldType::Association(kind),
            None => FieldType::Column(tag.into()),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata describing one field of a model.
///
/// An entry is either a general field (`field_type` is a `Column`) or an
/// association field, never both. The only entry with no type at all is the
/// empty record handed out by degraded maps.
///
/// The serialized form also carries `is_association`, derived from the type
/// tag. It is ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FieldMetadataRepr", from = "FieldMetadataRepr")]
pub struct FieldMetadata {
    /// Field name, equal to its key in the owning map.
    pub name: String,
    /// Storage type or association kind.
    pub field_type: Option<FieldType>,
    /// Human-readable label.
    pub label: String,
    /// Association reached via another association.
    pub is_through: bool,
    /// Association restricted by an extra condition.
    pub has_scope: bool,
    /// Column materializing the association.
    pub foreign_key: Option<String>,
    /// Discriminator column of a polymorphic association.
    pub polymorphic_type: Option<String>,
    /// Associated model's type name.
    pub class: Option<String>,
}

/// Wire shape of `FieldMetadata`.
#[derive(Serialize, Deserialize)]
struct FieldMetadataRepr {
    name: String,
    #[serde(rename = "type")]
    field_type: Option<FieldType>,
    label: String,
    #[serde(default)]
    is_association: bool,
    #[serde(default)]
    is_through: bool,
    #[serde(default)]
    has_scope: bool,
    #[serde(default)]
    foreign_key: Option<String>,
    #[serde(default)]
    polymorphic_type: Option<String>,
    #[serde(default)]
    class: Option<String>,
}

impl From<FieldMetadata> for FieldMetadataRepr {
    fn from(field: FieldMetadata) -> Self {
        Self {
            is_association: field.is_association(),
            name: field.name,
            field_type: field.field_type,
            label: field.label,
            is_through: field.is_through,
            has_scope: field.has_scope,
            foreign_key: field.foreign_key,
            polymorphic_type: field.polymorphic_type,
            class: field.class,
        }
    }
}

impl From<FieldMetadataRepr> for FieldMetadata {
    fn from(repr: FieldMetadataRepr) -> Self {
        Self {
            name: repr.name,
            field_type: repr.field_type,
            label: repr.label,
            is_through: repr.is_through,
            has_scope: repr.has_scope,
            foreign_key: repr.foreign_key,
            polymorphic_type: repr.polymorphic_type,
            class: repr.class,
        }
    }
}

static EMPTY_FIELD: FieldMetadata = FieldMetadata::empty();

impl FieldMetadata {
    /// The empty metadata record.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            name: String::new(),
            field_type: None,
            label: String::new(),
            is_through: false,
            has_scope: false,
            foreign_key: None,
            polymorphic_type: None,
            class: None,
        }
    }

    /// Metadata for a general (storage) field.
    pub fn column(name: impl Into<String>, column_type: ColumnType, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: Some(FieldType::Column(column_type)),
            label: label.into(),
            ..Self::empty()
        }
    }

    /// Metadata for an association field. Association-only attributes are
    /// set with the chaining setters below.
    pub fn association(
        name: impl Into<String>,
        kind: AssociationKind,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: Some(FieldType::Association(kind)),
            label: label.into(),
            ..Self::empty()
        }
    }

    /// Set the through flag.
    #[must_use]
    pub fn through(mut self, value: bool) -> Self {
        self.is_through = value;
        self
    }

    /// Set the scope flag.
    #[must_use]
    pub fn scoped(mut self, value: bool) -> Self {
        self.has_scope = value;
        self
    }

    /// Set the foreign key column.
    #[must_use]
    pub fn foreign_key(mut self, column: Option<String>) -> Self {
        self.foreign_key = column;
        self
    }

    /// Set the polymorphic discriminator column.
    #[must_use]
    pub fn polymorphic_type(mut self, column: Option<String>) -> Self {
        self.polymorphic_type = column;
        self
    }

    /// Set the associated type name.
    #[must_use]
    pub fn class(mut self, class: Option<String>) -> Self {
        self.class = class;
        self
    }

    /// True for association fields.
    #[must_use]
    pub const fn is_association(&self) -> bool {
        matches!(self.field_type, Some(FieldType::Association(_)))
    }

    /// True for the empty record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_type.is_none() && self.name.is_empty()
    }

    /// The storage type, for general fields.
    #[must_use]
    pub fn column_type(&self) -> Option<&ColumnType> {
        self.field_type.as_ref().and_then(FieldType::column_type)
    }

    /// String form of the type tag, or `""` for the empty record.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.field_type.as_ref().map_or("", FieldType::as_str)
    }
}

impl Default for FieldMetadata {
    fn default() -> Self {
        Self::empty()
    }
}

/// Mapping of field name to metadata for one model.
///
/// A map built in degraded mode answers every lookup, including missing keys,
/// with the empty metadata record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    entries: BTreeMap<String, FieldMetadata>,
    #[serde(skip)]
    default_empty: bool,
}

impl FieldMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map whose lookups always succeed with an empty record.
    #[must_use]
    pub fn default_empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            default_empty: true,
        }
    }

    /// True if missing keys resolve to the empty record.
    #[must_use]
    pub const fn is_default_empty(&self) -> bool {
        self.default_empty
    }

    /// Insert metadata under its own name, replacing any previous entry.
    pub fn insert(&mut self, field: FieldMetadata) -> Option<FieldMetadata> {
        self.entries.insert(field.name.clone(), field)
    }

    /// Look up a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldMetadata> {
        match self.entries.get(name) {
            Some(field) => Some(field),
            None if self.default_empty => Some(&EMPTY_FIELD),
            None => None,
        }
    }

    /// Look up a field for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldMetadata> {
        self.entries.get_mut(name)
    }

    /// Remove a field, returning it.
    pub fn remove(&mut self, name: &str) -> Option<FieldMetadata> {
        self.entries.remove(name)
    }

    /// Keep only the fields matching `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&FieldMetadata) -> bool) {
        self.entries.retain(|_, field| keep(field));
    }

    /// Merge `other` into this map. Entries of `other` win on collision.
    pub fn merge(&mut self, other: FieldMap) {
        self.entries.extend(other.entries);
    }

    /// True if the field is actually present (ignores degraded defaults).
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Field metadata in name order.
    pub fn values(&self) -> impl Iterator<Item = &FieldMetadata> {
        self.entries.values()
    }

    /// `(name, metadata)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMetadata)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All field names as an owned set.
    #[must_use]
    pub fn names(&self) -> BTreeSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// Freeze the map so it can be shared without further mutation.
    #[must_use]
    pub fn freeze(self) -> FrozenFieldMap {
        FrozenFieldMap(Arc::new(self))
    }
}

impl FromIterator<FieldMetadata> for FieldMap {
    fn from_iter<I: IntoIterator<Item = FieldMetadata>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for field in iter {
            map.insert(field);
        }
        map
    }
}

impl Extend<FieldMetadata> for FieldMap {
    fn extend<I: IntoIterator<Item = FieldMetadata>>(&mut self, iter: I) {
        for field in iter {
            self.insert(field);
        }
    }
}

/// An immutable, shareable `FieldMap`.
///
/// Clones share storage. Only read access is exposed; callers that need to
/// filter or edit must take an explicit deep copy with [`FrozenFieldMap::to_mutable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenFieldMap(Arc<FieldMap>);

impl FrozenFieldMap {
    /// Deep-copy into an independently mutable map.
    #[must_use]
    pub fn to_mutable(&self) -> FieldMap {
        FieldMap::clone(&self.0)
    }

    /// True if both handles point at the same frozen storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for FrozenFieldMap {
    type Target = FieldMap;

    fn deref(&self) -> &FieldMap {
        &self.0
    }
}

impl Serialize for FrozenFieldMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
