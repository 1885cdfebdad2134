//! Compiled field model.

use crate::case;
use crate::op::OpSet;
use crate::opts::Config;
use crate::schema::Column;
use crate::types::TypeClass;
use heck::ToSnakeCase;
use std::collections::BTreeMap;

/// One compiled column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Target identifier, unique within its owning model.
    pub name: String,
    /// Original schema column name, verbatim.
    pub source_name: String,
    pub type_class: TypeClass,
    /// Tag-key to tag-value; rendered alphabetically by key.
    pub tags: BTreeMap<String, String>,
    pub comment: String,
    /// Flattened embedded sub-fields; empty for scalar fields.
    pub embed_fields: Vec<Field>,
}

impl Field {
    /// Compile a schema column, recursing into embedded sub-columns in
    /// their declared order.
    pub fn from_column(column: &Column, cfg: &Config) -> Field {
        let mut tags = BTreeMap::new();
        tags.insert("db".to_string(), column.name.clone());
        tags.insert("json".to_string(), case::json_tag_name(&column.name, cfg));

        Field {
            name: case::struct_name(&column.name, cfg),
            source_name: column.name.clone(),
            type_class: column.type_class(),
            tags,
            comment: column.comment.clone(),
            embed_fields: column
                .embed
                .iter()
                .map(|c| Field::from_column(c, cfg))
                .collect(),
        }
    }

    /// Predicate operators legal for this field's type classification.
    pub fn capabilities(&self) -> OpSet {
        self.type_class.capabilities()
    }

    /// The field's rendered tag string.
    pub fn tag(&self) -> String {
        tags_to_string(&self.tags)
    }

    /// Statement column name: acronym-aware snake form of the target name.
    pub fn column_name(&self) -> String {
        self.name.to_snake_case()
    }
}

/// Render tags as space-joined `key:"value"` pairs, alphabetical by key.
pub fn tags_to_string(tags: &BTreeMap<String, String>) -> String {
    tags.iter()
        .map(|(key, val)| format!("{key}:{val:?}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::Options;
    use crate::schema::Column;
    use crate::types::TypeKind;

    fn column(name: &str, kind: TypeKind) -> Column {
        Column {
            name: name.to_string(),
            type_kind: kind,
            not_null: true,
            is_array: false,
            comment: String::new(),
            embed: Vec::new(),
        }
    }

    #[test]
    fn compiles_scalar_column() {
        let cfg = Options::default().build().unwrap();
        let f = Field::from_column(&column("first_name", TypeKind::Text), &cfg);
        assert_eq!(f.name, "FirstName");
        assert_eq!(f.source_name, "first_name");
        assert_eq!(f.column_name(), "first_name");
        assert!(f.embed_fields.is_empty());
    }

    #[test]
    fn id_column_gets_canonical_name() {
        let cfg = Options::default().build().unwrap();
        let f = Field::from_column(&column("id", TypeKind::Int), &cfg);
        assert_eq!(f.name, "ID");
        assert_eq!(f.column_name(), "id");
    }

    #[test]
    fn tags_render_alphabetically() {
        let cfg = Options {
            json_tags_case_style: "camel".to_string(),
            json_tags_id_uppercase: true,
            ..Options::default()
        }
        .build()
        .unwrap();
        let f = Field::from_column(&column("user_id", TypeKind::Int), &cfg);
        assert_eq!(f.tag(), r#"db:"user_id" json:"userID""#);
    }

    #[test]
    fn embedded_columns_flatten_in_order() {
        let cfg = Options::default().build().unwrap();
        let mut composite = column("address", TypeKind::Unknown);
        composite.embed = vec![
            column("street", TypeKind::Text),
            column("zip_code", TypeKind::Text),
        ];
        let f = Field::from_column(&composite, &cfg);
        let names: Vec<&str> = f.embed_fields.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Street", "ZipCode"]);
    }

    #[test]
    fn capabilities_follow_type_class() {
        let cfg = Options::default().build().unwrap();
        let f = Field::from_column(&column("active", TypeKind::Bool), &cfg);
        assert_eq!(f.capabilities(), crate::op::OpSet::BOOL);
    }
}
