//! Expected Column Schema

use serde::{Deserialize, Serialize};

/// Ordered list of feature column names the fitted model was trained
/// against. Loaded once from the columns artifact; inference inputs must
/// match it exactly, in names, order, and count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    /// Create a schema from an ordered list of column names
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column name, if present
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether the schema contains a column name
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Column names in schema order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

impl From<&[&str]> for ColumnSchema {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_and_contains() {
        let schema = ColumnSchema::from(["Age", "Sex_M", "Sex_F"].as_slice());
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.position("Sex_M"), Some(1));
        assert_eq!(schema.position("Sex_X"), None);
        assert!(schema.contains("Age"));
        assert!(!schema.contains("MaxHR"));
    }

    #[test]
    fn test_serde_is_a_plain_list() {
        let schema = ColumnSchema::from(["Age", "MaxHR"].as_slice());
        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(json, r#"["Age","MaxHR"]"#);
        let back: ColumnSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
    }
}
