//! Compiled table model and single-row statement synthesis.
//!
//! All four statements derive from one base insert clause, so column order
//! and placeholder numbering are identical across them. Statement text is
//! byte-exact: two compilations of the same schema with the same
//! configuration must produce identical strings.

use crate::field::Field;
use crate::opts::Config;
use crate::schema::{Table, TableRef};

/// Canonical primary-key field name after transformation.
const PK_NAME: &str = "ID";

/// One compiled table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub table: TableRef,
    /// Target type name.
    pub name: String,
    /// Fields in schema column order. Order is semantically significant:
    /// it fixes statement column order and placeholder numbering.
    pub fields: Vec<Field>,
    pub comment: String,
}

/// Precomputed statement strings for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    pub insert: String,
    pub insert_returning: String,
    pub upsert: String,
    pub upsert_returning: String,
}

impl Model {
    /// Compile one table: transform the table name, compile every column in
    /// order, and report a missing primary key up front.
    pub fn build(table: &Table, cfg: &Config) -> Model {
        let name = crate::case::struct_name(&table.rel.name, cfg);
        let fields = table
            .columns
            .iter()
            .map(|c| Field::from_column(c, cfg))
            .collect::<Vec<_>>();

        let model = Model {
            table: table.rel.clone(),
            name,
            fields,
            comment: table.comment.clone(),
        };

        tracing::debug!(
            table = %model.table.name,
            model = %model.name,
            fields = model.fields.len(),
            "compiled table model"
        );
        if !model.has_pk() {
            tracing::warn!(
                table = %model.table.name,
                "no primary key field; upsert statements will carry an empty SET list"
            );
        }

        model
    }

    /// Whether a field carries the canonical primary-key name.
    pub fn has_pk(&self) -> bool {
        self.fields.iter().any(|f| f.name == PK_NAME)
    }

    /// `INSERT INTO <table> (<cols>) VALUES ($1, ...)` without terminator.
    ///
    /// Placeholders are 1-based sequential positions in field order, with no
    /// gaps even when a field is the primary key.
    fn base_insert(&self) -> String {
        let columns = self
            .fields
            .iter()
            .map(|f| f.column_name())
            .collect::<Vec<_>>();
        let placeholders = (1..=self.fields.len())
            .map(|n| format!("${n}"))
            .collect::<Vec<_>>();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table.name,
            columns.join(", "),
            placeholders.join(", ")
        )
    }

    /// `col = EXCLUDED.col` assignments for every non-primary-key field.
    ///
    /// A table without a primary key yields an empty list; the malformed
    /// statement is surfaced as-is and flagged at build time.
    fn upsert_assignments(&self) -> String {
        self.fields
            .iter()
            .filter(|f| f.name != PK_NAME)
            .map(|f| {
                let col = f.column_name();
                format!("{col} = EXCLUDED.{col}")
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn insert_query(&self) -> String {
        format!("{};", self.base_insert())
    }

    pub fn insert_returning(&self) -> String {
        format!("{} RETURNING *;", self.base_insert())
    }

    pub fn upsert_query(&self) -> String {
        format!(
            "{} ON CONFLICT DO UPDATE SET {};",
            self.base_insert(),
            self.upsert_assignments()
        )
    }

    pub fn upsert_returning(&self) -> String {
        format!(
            "{} ON CONFLICT DO UPDATE SET {} RETURNING *;",
            self.base_insert(),
            self.upsert_assignments()
        )
    }

    /// Bundle the four statement strings for the output boundary.
    pub fn statements(&self) -> Statements {
        Statements {
            insert: self.insert_query(),
            insert_returning: self.insert_returning(),
            upsert: self.upsert_query(),
            upsert_returning: self.upsert_returning(),
        }
    }
}
