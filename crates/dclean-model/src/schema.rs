//! Column schemas describing the expected semantic type of each column.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type a column is coerced to during schema enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Whole numbers, stored as Int64.
    Integer,
    /// Floating point numbers, stored as Float64.
    Decimal,
    /// Naive date-times at millisecond precision.
    Timestamp,
    /// Short labels drawn from a small set; trimmed, blanks become null.
    Category,
    /// Free text, kept as-is.
    Text,
}

impl SemanticType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Timestamp => "timestamp",
            Self::Category => "category",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single column expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
        }
    }
}

/// Ordered set of column expectations for one table.
///
/// Column names are unique; declaring a column twice replaces the earlier
/// declaration in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableSchema {
    columns: Vec<ColumnSpec>,
}

impl TableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the expectation for `name`.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, semantic_type: SemanticType) -> Self {
        let spec = ColumnSpec::new(name, semantic_type);
        match self.columns.iter_mut().find(|c| c.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.columns.push(spec),
        }
        self
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_column_replaces_duplicate_in_place() {
        let schema = TableSchema::new()
            .with_column("a", SemanticType::Text)
            .with_column("b", SemanticType::Integer)
            .with_column("a", SemanticType::Decimal);

        assert_eq!(
            schema.columns(),
            &[
                ColumnSpec::new("a", SemanticType::Decimal),
                ColumnSpec::new("b", SemanticType::Integer),
            ]
        );
    }

    #[test]
    fn test_schema_json_shape() {
        let schema = TableSchema::new().with_column("amount", SemanticType::Decimal);
        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(json, r#"[{"name":"amount","type":"decimal"}]"#);

        let parsed: TableSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schema);
    }
}
