//! Semantic type classification and operator capability resolution.

use crate::op::OpSet;
use serde::{Deserialize, Serialize};

/// Semantic category of a column's element type.
///
/// The mapping from database column types to these kinds is an external
/// lookup supplied with the schema; the core only classifies and resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Bool,
    Int,
    Float,
    Text,
    /// Dates, times, timestamps.
    Temporal,
    Json,
    /// Raw byte string (`bytea`); opaque, no predicates.
    Bytes,
    /// Unclassifiable type; resolves to no predicates rather than erroring.
    Unknown,
}

/// Full type classification of a field: element kind, repetition, nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeClass {
    pub kind: TypeKind,
    /// The column holds a repeated/array value.
    pub array: bool,
    pub nullable: bool,
}

impl TypeClass {
    pub const fn new(kind: TypeKind, array: bool, nullable: bool) -> Self {
        Self {
            kind,
            array,
            nullable,
        }
    }

    /// Resolve the set of predicate operators legal for this classification.
    ///
    /// Pure function: safe to call from concurrent per-table compilation.
    /// Unknown and raw-bytes kinds resolve to the empty base set; callers
    /// must treat "no operators" as valid, filterable output. Nullability
    /// always unions in the null-test operators.
    pub fn capabilities(self) -> OpSet {
        let base = if self.array {
            match self.kind {
                // A repeated byte string is still opaque.
                TypeKind::Bytes => OpSet::EMPTY,
                _ => OpSet::ARRAY,
            }
        } else {
            match self.kind {
                TypeKind::Bool => OpSet::BOOL,
                TypeKind::Int | TypeKind::Float => OpSet::NUMERIC,
                TypeKind::Text => OpSet::TEXT,
                TypeKind::Temporal => OpSet::TEMPORAL,
                TypeKind::Json => OpSet::JSON,
                TypeKind::Bytes | TypeKind::Unknown => OpSet::EMPTY,
            }
        };

        if self.nullable {
            base.with_null_tests()
        } else {
            base
        }
    }
}
