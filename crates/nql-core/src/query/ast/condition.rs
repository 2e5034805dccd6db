//! WHERE clause predicate types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::values::Value;

/// Relational operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `=`
    Equals,
    /// `<`
    LesserThan,
    /// `<=`
    LesserEqualsThan,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEqualsThan,
    /// `BETWEEN a AND b`
    Between,
}

impl Operator {
    /// Maps a comparison symbol to its operator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Equals),
            "<" => Some(Self::LesserThan),
            "<=" => Some(Self::LesserEqualsThan),
            ">" => Some(Self::GreaterThan),
            ">=" => Some(Self::GreaterEqualsThan),
            _ => None,
        }
    }

    /// Surface syntax of the operator.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::LesserThan => "<",
            Self::LesserEqualsThan => "<=",
            Self::GreaterThan => ">",
            Self::GreaterEqualsThan => ">=",
            Self::Between => "BETWEEN",
        }
    }

    /// True when the operator takes a `Value::Pair` operand.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Between)
    }
}

/// A single relational predicate: `field operator operand`.
///
/// `BETWEEN` always carries a [`Value::Pair`]; every other operator carries a
/// scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Field the predicate applies to.
    pub field: String,
    /// Relational operator.
    pub operator: Operator,
    /// Value compared against.
    pub operand: Value,
}

impl Condition {
    /// Creates a condition, returning `None` when the operand shape does not
    /// match the operator.
    #[must_use]
    pub fn new(field: impl Into<String>, operator: Operator, operand: Value) -> Option<Self> {
        if operator.is_range() != operand.is_pair() {
            return None;
        }
        Some(Self {
            field: field.into(),
            operator,
            operand,
        })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator.symbol(), self.operand)
    }
}
