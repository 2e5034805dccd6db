//! Rule-recognition events emitted by the grammar walker.
//!
//! The builder consumes these as a fold; nothing here depends on pest, so the
//! builder can be driven by hand in tests.

use super::ast::{Operator, Sort, Value};

/// Outcome of one recognised grammar rule.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent {
    /// `FROM <entity>`
    Entity(String),
    /// Projection list, in source order.
    Fields(Vec<String>),
    /// `ORDER BY` items, in source order.
    Sort(Vec<Sort>),
    /// `SKIP n`
    Skip(u64),
    /// `LIMIT n`
    Limit(u64),
    /// One relational predicate.
    Condition {
        /// Field name.
        field: String,
        /// Relational operator.
        operator: Operator,
        /// Scalar operand, or a pair for `BETWEEN`.
        operand: Value,
        /// The predicate was written with a leading `NOT`.
        negated: bool,
    },
}
