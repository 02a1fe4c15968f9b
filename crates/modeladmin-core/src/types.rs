//! Storage types of general (non-association) fields.
//!
//! A `ColumnType` serializes as its string tag (`"bigint"`, `"datetime"`,
//! ...), the same tag `as_str` returns.

use serde::{Deserialize, Serialize};

/// Primitive storage type of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ColumnType {
    Integer,
    BigInt,
    Float,
    Decimal,
    Boolean,
    /// Short, length-limited text (`VARCHAR`).
    String,
    /// Unbounded text.
    Text,
    /// Case-insensitive text (PostgreSQL `citext`).
    Citext,
    /// Large text stored out of row (MySQL `mediumtext`/`longtext`).
    LongText,
    Binary,
    Date,
    Time,
    DateTime,
    Timestamp,
    Json,
    Jsonb,
    Hstore,
    Xml,
    Uuid,
    /// Full-text search document (PostgreSQL `tsvector`).
    TsVector,
    /// Anything the schema source reports that has no dedicated variant.
    Other(String),
}

impl ColumnType {
    /// The type tag used in field metadata and serialized listings.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::BigInt => "bigint",
            ColumnType::Float => "float",
            ColumnType::Decimal => "decimal",
            ColumnType::Boolean => "boolean",
            ColumnType::String => "string",
            ColumnType::Text => "text",
            ColumnType::Citext => "citext",
            ColumnType::LongText => "longtext",
            ColumnType::Binary => "binary",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::DateTime => "datetime",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Json => "json",
            ColumnType::Jsonb => "jsonb",
            ColumnType::Hstore => "hstore",
            ColumnType::Xml => "xml",
            ColumnType::Uuid => "uuid",
            ColumnType::TsVector => "tsvector",
            ColumnType::Other(name) => name,
        }
    }

    /// Parse a type tag (case-insensitive). Unknown tags become `Other`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "integer" | "int" | "smallint" => ColumnType::Integer,
            "bigint" => ColumnType::BigInt,
            "float" | "double" | "real" => ColumnType::Float,
            "decimal" | "numeric" => ColumnType::Decimal,
            "boolean" | "bool" => ColumnType::Boolean,
            "string" | "varchar" => ColumnType::String,
            "text" => ColumnType::Text,
            "citext" => ColumnType::Citext,
            "longtext" | "mediumtext" => ColumnType::LongText,
            "binary" | "blob" | "bytea" | "tinyblob" | "mediumblob" | "longblob" => {
                ColumnType::Binary
            }
            "date" => ColumnType::Date,
            "time" => ColumnType::Time,
            "datetime" => ColumnType::DateTime,
            "timestamp" | "timestamptz" => ColumnType::Timestamp,
            "json" => ColumnType::Json,
            "jsonb" => ColumnType::Jsonb,
            "hstore" => ColumnType::Hstore,
            "xml" => ColumnType::Xml,
            "uuid" => ColumnType::Uuid,
            "tsvector" => ColumnType::TsVector,
            _ => ColumnType::Other(name.to_string()),
        }
    }

    /// True for types that hold human-readable text.
    #[must_use]
    pub const fn is_text_like(&self) -> bool {
        matches!(
            self,
            ColumnType::String | ColumnType::Text | ColumnType::Citext
        )
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        ColumnType::from_name(&name)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
