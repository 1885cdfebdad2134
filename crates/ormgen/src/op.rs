//! Predicate operator flags and capability sets.
//!
//! [`Op`] is a closed set of 28 predicate operators with explicit, stable
//! bit values: generated code may embed the numeric value, so a given
//! operator's bit must never change. [`OpSet`] is the bitwise union used to
//! express per-type-class capability masks.

/// A single predicate operator.
///
/// Discriminants are fixed bit values; declaration order equals ascending
/// bit order and is the canonical iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum Op {
    Eq = 1,
    Neq = 1 << 1,
    Gt = 1 << 2,
    Gte = 1 << 3,
    Lt = 1 << 4,
    Lte = 1 << 5,

    Like = 1 << 6,
    ILike = 1 << 7,
    NotLike = 1 << 8,
    NotILike = 1 << 9,
    Similar = 1 << 10,
    NotSimilar = 1 << 11,

    In = 1 << 12,
    NotIn = 1 << 13,

    IsNull = 1 << 14,
    IsNotNull = 1 << 15,

    Between = 1 << 16,
    NotBetween = 1 << 17,

    Exists = 1 << 18,
    NotExists = 1 << 19,

    ArrayContains = 1 << 20,
    ArrayContainedBy = 1 << 21,
    ArrayOverlap = 1 << 22,

    JsonContains = 1 << 23,
    JsonContainedBy = 1 << 24,
    JsonHasKey = 1 << 25,
    JsonHasAnyKeys = 1 << 26,
    JsonHasAllKeys = 1 << 27,
}

impl Op {
    /// Every operator, in ascending bit order.
    pub const ALL: [Op; 28] = [
        Op::Eq,
        Op::Neq,
        Op::Gt,
        Op::Gte,
        Op::Lt,
        Op::Lte,
        Op::Like,
        Op::ILike,
        Op::NotLike,
        Op::NotILike,
        Op::Similar,
        Op::NotSimilar,
        Op::In,
        Op::NotIn,
        Op::IsNull,
        Op::IsNotNull,
        Op::Between,
        Op::NotBetween,
        Op::Exists,
        Op::NotExists,
        Op::ArrayContains,
        Op::ArrayContainedBy,
        Op::ArrayOverlap,
        Op::JsonContains,
        Op::JsonContainedBy,
        Op::JsonHasKey,
        Op::JsonHasAnyKeys,
        Op::JsonHasAllKeys,
    ];

    /// The operator's stable bit value.
    pub const fn bit(self) -> u64 {
        self as u64
    }

    /// Identifier-style operator name, as embedded in generated code.
    pub const fn name(self) -> &'static str {
        match self {
            Op::Eq => "Eq",
            Op::Neq => "Neq",
            Op::Gt => "Gt",
            Op::Gte => "Gte",
            Op::Lt => "Lt",
            Op::Lte => "Lte",
            Op::Like => "Like",
            Op::ILike => "ILike",
            Op::NotLike => "NotLike",
            Op::NotILike => "NotILike",
            Op::Similar => "Similar",
            Op::NotSimilar => "NotSimilar",
            Op::In => "In",
            Op::NotIn => "NotIn",
            Op::IsNull => "IsNull",
            Op::IsNotNull => "IsNotNull",
            Op::Between => "Between",
            Op::NotBetween => "NotBetween",
            Op::Exists => "Exists",
            Op::NotExists => "NotExists",
            Op::ArrayContains => "ArrayContains",
            Op::ArrayContainedBy => "ArrayContainedBy",
            Op::ArrayOverlap => "ArrayOverlap",
            Op::JsonContains => "JsonContains",
            Op::JsonContainedBy => "JsonContainedBy",
            Op::JsonHasKey => "JsonHasKey",
            Op::JsonHasAnyKeys => "JsonHasAnyKeys",
            Op::JsonHasAllKeys => "JsonHasAllKeys",
        }
    }

    /// Canonical SQL rendering symbol.
    ///
    /// Rendering depends only on operator identity, never on the bound value.
    pub const fn sql(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Neq => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Like => "LIKE",
            Op::ILike => "ILIKE",
            Op::NotLike => "NOT LIKE",
            Op::NotILike => "NOT ILIKE",
            Op::Similar => "SIMILAR TO",
            Op::NotSimilar => "NOT SIMILAR TO",
            Op::In => "IN",
            Op::NotIn => "NOT IN",
            Op::IsNull => "IS NULL",
            Op::IsNotNull => "IS NOT NULL",
            Op::Between => "BETWEEN",
            Op::NotBetween => "NOT BETWEEN",
            Op::Exists => "EXISTS",
            Op::NotExists => "NOT EXISTS",
            Op::ArrayContains => "@>",
            Op::ArrayContainedBy => "<@",
            Op::ArrayOverlap => "&&",
            Op::JsonContains => "@>",
            Op::JsonContainedBy => "<@",
            Op::JsonHasKey => "?",
            Op::JsonHasAnyKeys => "?|",
            Op::JsonHasAllKeys => "?&",
        }
    }
}

/// A set of predicate operators, stored as a bitwise union of [`Op`] bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpSet(u64);

impl OpSet {
    /// The empty set.
    pub const EMPTY: OpSet = OpSet(0);

    /// IS NULL / IS NOT NULL.
    pub const NULL_TESTS: OpSet = OpSet(Op::IsNull.bit() | Op::IsNotNull.bit());

    /// Operators legal on boolean columns.
    pub const BOOL: OpSet = OpSet(Op::Eq.bit() | Op::Neq.bit());

    /// Operators legal on integer and floating-point columns.
    pub const NUMERIC: OpSet = OpSet(
        Op::Eq.bit()
            | Op::Neq.bit()
            | Op::Gt.bit()
            | Op::Gte.bit()
            | Op::Lt.bit()
            | Op::Lte.bit()
            | Op::Between.bit()
            | Op::NotBetween.bit()
            | Op::In.bit()
            | Op::NotIn.bit(),
    );

    /// Operators legal on text columns.
    pub const TEXT: OpSet = OpSet(
        Op::Eq.bit()
            | Op::Neq.bit()
            | Op::Gt.bit()
            | Op::Gte.bit()
            | Op::Lt.bit()
            | Op::Lte.bit()
            | Op::Like.bit()
            | Op::ILike.bit()
            | Op::NotLike.bit()
            | Op::NotILike.bit()
            | Op::Similar.bit()
            | Op::NotSimilar.bit()
            | Op::In.bit()
            | Op::NotIn.bit(),
    );

    /// Operators legal on date/time columns.
    pub const TEMPORAL: OpSet = OpSet(
        Op::Eq.bit()
            | Op::Neq.bit()
            | Op::Gt.bit()
            | Op::Gte.bit()
            | Op::Lt.bit()
            | Op::Lte.bit()
            | Op::Between.bit()
            | Op::NotBetween.bit(),
    );

    /// Operators legal on array columns (raw byte-arrays excluded).
    pub const ARRAY: OpSet = OpSet(
        Op::Eq.bit()
            | Op::Neq.bit()
            | Op::In.bit()
            | Op::NotIn.bit()
            | Op::ArrayContains.bit()
            | Op::ArrayContainedBy.bit()
            | Op::ArrayOverlap.bit(),
    );

    /// Operators legal on JSON columns.
    pub const JSON: OpSet = OpSet(
        Op::Eq.bit()
            | Op::Neq.bit()
            | Op::In.bit()
            | Op::NotIn.bit()
            | Op::JsonContains.bit()
            | Op::JsonContainedBy.bit()
            | Op::JsonHasKey.bit()
            | Op::JsonHasAnyKeys.bit()
            | Op::JsonHasAllKeys.bit(),
    );

    /// Build a set from a raw bit mask. Unknown bits are preserved but never
    /// yielded by [`OpSet::iter`].
    pub const fn from_bits(bits: u64) -> OpSet {
        OpSet(bits)
    }

    /// The raw bit mask.
    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, op: Op) -> bool {
        self.0 & op.bit() != 0
    }

    pub const fn union(self, other: OpSet) -> OpSet {
        OpSet(self.0 | other.0)
    }

    /// This set plus the null-test operators.
    pub const fn with_null_tests(self) -> OpSet {
        self.union(Self::NULL_TESTS)
    }

    /// Number of operators in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the member operators in ascending bit order.
    pub fn iter(self) -> impl Iterator<Item = Op> {
        Op::ALL.into_iter().filter(move |op| self.contains(*op))
    }

    /// Member `(name, sql)` pairs in ascending bit order.
    pub fn renderings(self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.iter().map(|op| (op.name(), op.sql()))
    }
}

impl std::ops::BitOr for OpSet {
    type Output = OpSet;

    fn bitor(self, rhs: OpSet) -> OpSet {
        self.union(rhs)
    }
}

impl From<Op> for OpSet {
    fn from(op: Op) -> Self {
        OpSet(op.bit())
    }
}

impl FromIterator<Op> for OpSet {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        iter.into_iter()
            .fold(OpSet::EMPTY, |set, op| set.union(op.into()))
    }
}
