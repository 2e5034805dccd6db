//! Literal values used as condition operands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric literal.
///
/// Integral literals that fit in an `i64` stay integral; everything else
/// (decimals, exponents, out-of-range integers) is stored as `f64`. Literals
/// that overflow `f64` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// Integer literal: `21`, `-3`.
    Integer(i64),
    /// Floating point literal: `2.5`, `1e3`.
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            // `{:?}` keeps a fraction or exponent, so the text reads back as a float
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// A literal operand in a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Quoted string literal.
    String(String),
    /// Numeric literal.
    Number(Number),
    /// `true` / `false`.
    Boolean(bool),
    /// `null`.
    Null,
    /// Two values in source order, only produced for `BETWEEN`.
    Pair(Box<Value>, Box<Value>),
}

impl Value {
    /// Classifies a single literal token by its lexical form.
    ///
    /// Quoted tokens become `String` (quotes stripped, escaped quotes
    /// unescaped), numeric tokens become `Number`, `true`/`false` become
    /// `Boolean` and `null` becomes `Null`. Keywords are matched
    /// case-insensitively.
    ///
    /// Returns `None` for any other form; the grammar never hands such a
    /// token to this layer.
    #[must_use]
    pub fn from_literal(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some(inner) = unquote(token) {
            return Some(Self::String(inner));
        }
        if token.eq_ignore_ascii_case("true") {
            return Some(Self::Boolean(true));
        }
        if token.eq_ignore_ascii_case("false") {
            return Some(Self::Boolean(false));
        }
        if token.eq_ignore_ascii_case("null") {
            return Some(Self::Null);
        }
        parse_number(token).map(Self::Number)
    }

    /// Builds a `Pair`, preserving the order the literals appeared in.
    ///
    /// No `low <= high` check is made.
    #[must_use]
    pub fn pair(first: Value, second: Value) -> Self {
        Self::Pair(Box::new(first), Box::new(second))
    }

    /// Returns true for the two-element range operand.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(..))
    }
}

fn unquote(token: &str) -> Option<String> {
    let quote = token.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    if token.len() < 2 || !token.ends_with(quote) {
        return None;
    }
    let inner = &token[1..token.len() - 1];

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) if next == quote || next == '\\' => out.push(next),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

fn parse_number(token: &str) -> Option<Number> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    if let Ok(v) = token.parse::<i64>() {
        return Some(Number::Integer(v));
    }
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Number::Float)
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::Integer(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(Number::Float(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Pair(a, b) => write!(f, "{a} AND {b}"),
        }
    }
}
