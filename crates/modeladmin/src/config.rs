//! Decorator configuration.
//!
//! Holds the fixed exclusion sets that shape the index, show and form field
//! lists, plus the conventional names consulted when guessing a title field.

use modeladmin_core::ColumnType;

/// Timestamps the persistence layer always manages. They stay off forms
/// whatever `form_excluded_timestamps` holds.
const MANAGED_TIMESTAMPS: [&str; 2] = ["created_at", "updated_at"];

/// Configuration for `ModelDecorator` behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorConfig {
    /// Storage types too bulky or opaque for a compact index table.
    pub index_excluded_types: Vec<ColumnType>,
    /// Associated class names whose payloads get dedicated widgets on show pages.
    pub show_excluded_classes: Vec<String>,
    /// Auto-managed timestamp columns kept off forms.
    pub form_excluded_timestamps: Vec<String>,
    /// Conventional title field names, highest priority first.
    pub title_candidates: Vec<String>,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            index_excluded_types: vec![
                ColumnType::Binary,
                ColumnType::LongText,
                ColumnType::Json,
                ColumnType::Jsonb,
                ColumnType::Hstore,
                ColumnType::Xml,
                ColumnType::TsVector,
            ],
            show_excluded_classes: to_strings(&["Attachment", "Blob"]),
            form_excluded_timestamps: to_strings(&[
                "created_at",
                "updated_at",
                "created_on",
                "updated_on",
            ]),
            title_candidates: to_strings(&[
                "title",
                "name",
                "display_name",
                "full_name",
                "label",
                "subject",
                "username",
                "email",
            ]),
        }
    }
}

impl DecoratorConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the index exclusion types.
    pub fn index_excluded_types(mut self, types: impl IntoIterator<Item = ColumnType>) -> Self {
        self.index_excluded_types = types.into_iter().collect();
        self
    }

    /// Also keep `column_type` off the index page.
    pub fn exclude_from_index(mut self, column_type: ColumnType) -> Self {
        if !self.index_excluded_types.contains(&column_type) {
            self.index_excluded_types.push(column_type);
        }
        self
    }

    /// Also keep associations to these classes off the show page.
    pub fn exclude_from_show<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.show_excluded_classes, classes);
        self
    }

    /// Also keep these timestamp columns off forms.
    pub fn exclude_from_form<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.form_excluded_timestamps, names);
        self
    }

    /// Replace the conventional title names.
    pub fn title_candidates<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_candidates = names.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn is_index_excluded(&self, column_type: &ColumnType) -> bool {
        self.index_excluded_types.contains(column_type)
    }

    pub(crate) fn is_show_excluded(&self, class: &str) -> bool {
        self.show_excluded_classes.iter().any(|c| c == class)
    }

    pub(crate) fn is_form_timestamp(&self, name: &str) -> bool {
        MANAGED_TIMESTAMPS.contains(&name)
            || self.form_excluded_timestamps.iter().any(|t| t == name)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn extend_unique<I, S>(list: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for item in items {
        let item = item.into();
        if !list.contains(&item) {
            list.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoratorConfig::default();
        assert!(config.is_index_excluded(&ColumnType::Binary));
        assert!(config.is_index_excluded(&ColumnType::Json));
        assert!(config.is_index_excluded(&ColumnType::LongText));
        assert!(config.is_index_excluded(&ColumnType::TsVector));
        assert!(!config.is_index_excluded(&ColumnType::Text));
        assert!(config.is_show_excluded("Blob"));
        assert!(config.is_form_timestamp("updated_at"));
        assert_eq!(config.title_candidates.first().map(String::as_str), Some("title"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = DecoratorConfig::new()
            .exclude_from_index(ColumnType::Text)
            .exclude_from_index(ColumnType::Text)
            .exclude_from_show(["Upload", "Blob"])
            .exclude_from_form(["inserted_at"])
            .title_candidates(["headline"]);

        assert_eq!(
            config
                .index_excluded_types
                .iter()
                .filter(|t| **t == ColumnType::Text)
                .count(),
            1
        );
        assert!(config.is_show_excluded("Upload"));
        assert!(config.is_show_excluded("Attachment"));
        assert_eq!(
            config.show_excluded_classes.iter().filter(|c| *c == "Blob").count(),
            1
        );
        assert!(config.is_form_timestamp("inserted_at"));
        assert!(config.is_form_timestamp("created_at"));
        assert_eq!(config.title_candidates, vec!["headline".to_string()]);
    }

    #[test]
    fn test_managed_timestamps_survive_cleared_list() {
        let mut config = DecoratorConfig::new();
        config.form_excluded_timestamps.clear();

        assert!(config.is_form_timestamp("created_at"));
        assert!(config.is_form_timestamp("updated_at"));
        assert!(!config.is_form_timestamp("created_on"));
    }
}
