//! # ormgen
//!
//! Schema-to-model compilation core for SQL codegen.
//!
//! Given a relational schema snapshot (tables, columns, semantic types) and
//! a validated configuration, the core produces per-table [`Model`] values:
//! typed fields with deterministic names and serialization tags, per-field
//! predicate operator capabilities, and canonical single-row insert/upsert
//! SQL with stable column ordering and numbered placeholders.
//!
//! The host plugin transport, template renderer, and CLI are external
//! collaborators: this crate only turns a schema description into models
//! and statement text. It never executes SQL.
//!
//! ```
//! use ormgen::{compile, Options, Table, TableRef, Column, TypeKind};
//!
//! let tables = vec![Table {
//!     rel: TableRef::named("users"),
//!     columns: vec![Column {
//!         name: "id".to_string(),
//!         type_kind: TypeKind::Int,
//!         not_null: true,
//!         is_array: false,
//!         comment: String::new(),
//!         embed: Vec::new(),
//!     }],
//!     comment: String::new(),
//! }];
//!
//! let models = compile(&tables, Options::default()).unwrap();
//! assert_eq!(models[0].name, "Users");
//! assert_eq!(models[0].insert_query(), "INSERT INTO users (id) VALUES ($1);");
//! ```

pub mod case;
pub mod error;
pub mod field;
pub mod model;
pub mod op;
pub mod opts;
pub mod schema;
pub mod types;

pub use error::{GenError, GenResult};
pub use field::Field;
pub use model::{Model, Statements};
pub use op::{Op, OpSet};
pub use opts::{CaseStyle, Config, Options};
pub use schema::{Column, Table, TableRef};
pub use types::{TypeClass, TypeKind};

/// Compile a schema snapshot into models, one per table in schema order.
///
/// Options are validated once up front; an unrecognized case style aborts
/// the run before any table is compiled. Table compilation itself is pure
/// and shares only the frozen [`Config`], so callers may also split tables
/// across threads and call [`Model::build`] directly.
pub fn compile(tables: &[Table], options: Options) -> GenResult<Vec<Model>> {
    let cfg = options.build()?;
    Ok(tables.iter().map(|t| Model::build(t, &cfg)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_fails_fast_on_bad_style() {
        let tables = vec![Table {
            rel: TableRef::named("users"),
            columns: Vec::new(),
            comment: String::new(),
        }];
        let options = Options {
            json_tags_case_style: "kebab".to_string(),
            ..Options::default()
        };
        assert!(matches!(
            compile(&tables, options),
            Err(GenError::UnsupportedCaseStyle(_))
        ));
    }

    #[test]
    fn compile_preserves_schema_table_order() {
        let table = |name: &str| Table {
            rel: TableRef::named(name),
            columns: Vec::new(),
            comment: String::new(),
        };
        let models = compile(&[table("posts"), table("users")], Options::default()).unwrap();
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Posts", "Users"]);
    }
}
