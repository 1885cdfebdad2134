//! Input boundary: the schema snapshot handed over by the host loader.
//!
//! These types mirror the parsed schema AST one table at a time. The core
//! never reads them back after compilation; each table compiles
//! independently from its own slice.

use crate::types::{TypeClass, TypeKind};
use serde::{Deserialize, Serialize};

/// Fully-qualified table reference. Opaque to the core beyond its rendered
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    #[serde(default)]
    pub catalog: String,
    #[serde(default)]
    pub schema: String,
    pub name: String,
}

impl TableRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            catalog: String::new(),
            schema: String::new(),
            name: name.into(),
        }
    }
}

/// One schema column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Raw schema name, preserved verbatim for SQL emission.
    pub name: String,
    /// Semantic element type, resolved by the external type-mapping lookup.
    pub type_kind: TypeKind,
    #[serde(default)]
    pub not_null: bool,
    /// The column holds a repeated/array value.
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub comment: String,
    /// Embedded composite sub-columns requiring their own scan targets;
    /// empty for scalar columns.
    #[serde(default)]
    pub embed: Vec<Column>,
}

impl Column {
    /// The column's full type classification.
    pub fn type_class(&self) -> TypeClass {
        TypeClass::new(self.type_kind, self.is_array, !self.not_null)
    }
}

/// One table of the schema snapshot, with columns in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rel: TableRef,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullability_maps_to_type_class() {
        let col = Column {
            name: "email".to_string(),
            type_kind: TypeKind::Text,
            not_null: true,
            is_array: false,
            comment: String::new(),
            embed: Vec::new(),
        };
        assert!(!col.type_class().nullable);

        let nullable = Column {
            not_null: false,
            ..col
        };
        assert!(nullable.type_class().nullable);
    }

    #[test]
    fn deserializes_from_schema_json() {
        let raw = r#"{
            "rel": {"schema": "public", "name": "users"},
            "columns": [
                {"name": "id", "type_kind": "int", "not_null": true},
                {"name": "tags", "type_kind": "text", "is_array": true}
            ]
        }"#;
        let table: Table = serde_json::from_str(raw).unwrap();
        assert_eq!(table.rel.name, "users");
        assert_eq!(table.columns.len(), 2);
        assert!(table.columns[1].is_array);
        assert!(table.columns[1].type_class().nullable);
    }
}
