//! Association descriptors for ModelAdmin Rust.
//!
//! Associations are reported by the schema source as plain descriptors. The
//! field metadata builder turns each one into a single association field and
//! uses the descriptor to work out which columns the association implies.

use serde::{Deserialize, Serialize};

/// The kind of association between two models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    /// Many-to-one: many `Post`s belong to one `Category`.
    #[default]
    BelongsTo,
    /// One-to-one from the side that does not hold the key.
    HasOne,
    /// One-to-many: one `Category` has many `Post`s.
    HasMany,
    /// Many-to-many via a join table.
    HasAndBelongsToMany,
}

impl AssociationKind {
    /// The type tag used in field metadata.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssociationKind::BelongsTo => "belongs_to",
            AssociationKind::HasOne => "has_one",
            AssociationKind::HasMany => "has_many",
            AssociationKind::HasAndBelongsToMany => "has_and_belongs_to_many",
        }
    }

    /// Parse a type tag. Returns `None` for anything that is not an
    /// association kind.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "belongs_to" => Some(AssociationKind::BelongsTo),
            "has_one" => Some(AssociationKind::HasOne),
            "has_many" => Some(AssociationKind::HasMany),
            "has_and_belongs_to_many" => Some(AssociationKind::HasAndBelongsToMany),
            _ => None,
        }
    }

    /// True if the association is stored as a column on the owning table.
    #[must_use]
    pub const fn materializes_column(&self) -> bool {
        matches!(self, AssociationKind::BelongsTo)
    }
}

impl std::fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw metadata about one declared association.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationDescriptor {
    /// Name of the association field.
    pub name: String,

    /// Kind of association.
    pub kind: AssociationKind,

    /// The associated model's type name (absent for polymorphic associations).
    pub class_name: Option<String>,

    /// Explicit foreign key column (for `BelongsTo`).
    /// When absent, `"{name}_id"` is assumed.
    pub foreign_key: Option<String>,

    /// Whether the associated type is stored in a discriminator column.
    pub polymorphic: bool,

    /// The intermediate association for indirect associations.
    pub through: Option<String>,

    /// An extra query condition restricting the associated records.
    pub scope: Option<String>,
}

impl AssociationDescriptor {
    /// Create a new association with required fields.
    pub fn new(name: impl Into<String>, kind: AssociationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    /// Shorthand for a `BelongsTo` association to `class_name`.
    pub fn belongs_to(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::BelongsTo).class_name(class_name)
    }

    /// Shorthand for a `HasMany` association to `class_name`.
    pub fn has_many(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::HasMany).class_name(class_name)
    }

    /// Shorthand for a `HasOne` association to `class_name`.
    pub fn has_one(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::HasOne).class_name(class_name)
    }

    /// Set the associated model's type name.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set an explicit foreign key column.
    #[must_use]
    pub fn foreign_key(mut self, column: impl Into<String>) -> Self {
        self.foreign_key = Some(column.into());
        self
    }

    /// Mark the association as polymorphic.
    #[must_use]
    pub fn polymorphic(mut self, value: bool) -> Self {
        self.polymorphic = value;
        self
    }

    /// Reach the associated records through another association.
    #[must_use]
    pub fn through(mut self, association: impl Into<String>) -> Self {
        self.through = Some(association.into());
        self
    }

    /// Restrict the associated records with an extra condition.
    #[must_use]
    pub fn scope(mut self, condition: impl Into<String>) -> Self {
        self.scope = Some(condition.into());
        self
    }

    /// The column this association materializes as, if any.
    #[must_use]
    pub fn effective_foreign_key(&self) -> Option<String> {
        if !self.kind.materializes_column() {
            return None;
        }
        Some(
            self.foreign_key
                .clone()
                .unwrap_or_else(|| format!("{}_id", self.name)),
        )
    }

    /// The discriminator column of a polymorphic association, if any.
    #[must_use]
    pub fn polymorphic_type_column(&self) -> Option<String> {
        (self.polymorphic && self.kind.materializes_column())
            .then(|| format!("{}_type", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_association_kind_default() {
        assert_eq!(AssociationKind::default(), AssociationKind::BelongsTo);
    }

    #[test]
    fn test_association_kind_from_name() {
        assert_eq!(
            AssociationKind::from_name("has_and_belongs_to_many"),
            Some(AssociationKind::HasAndBelongsToMany)
        );
        assert_eq!(AssociationKind::from_name("integer"), None);
    }

    #[test]
    fn test_association_descriptor_builder_chain() {
        let info = AssociationDescriptor::new("tags", AssociationKind::HasMany)
            .class_name("Tag")
            .through("taggings")
            .scope("active = true");

        assert_eq!(info.name, "tags");
        assert_eq!(info.kind, AssociationKind::HasMany);
        assert_eq!(info.class_name.as_deref(), Some("Tag"));
        assert_eq!(info.through.as_deref(), Some("taggings"));
        assert_eq!(info.scope.as_deref(), Some("active = true"));
        assert!(!info.polymorphic);
    }

    #[test]
    fn test_effective_foreign_key() {
        let assoc = AssociationDescriptor::belongs_to("category", "Category");
        assert_eq!(assoc.effective_foreign_key().as_deref(), Some("category_id"));

        let assoc = AssociationDescriptor::belongs_to("author", "User").foreign_key("writer_id");
        assert_eq!(assoc.effective_foreign_key().as_deref(), Some("writer_id"));

        let assoc = AssociationDescriptor::has_many("comments", "Comment").foreign_key("post_id");
        assert_eq!(assoc.effective_foreign_key(), None);
    }

    #[test]
    fn test_polymorphic_type_column() {
        let assoc =
            AssociationDescriptor::new("commentable", AssociationKind::BelongsTo).polymorphic(true);
        assert_eq!(
            assoc.polymorphic_type_column().as_deref(),
            Some("commentable_type")
        );
        assert_eq!(
            AssociationDescriptor::belongs_to("category", "Category").polymorphic_type_column(),
            None
        );
    }
}
