//! Compiled statement types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::condition::Condition;

/// Sort direction in an ORDER BY item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// `ASC` (default)
    #[default]
    Ascending,
    /// `DESC`
    Descending,
}

/// One ORDER BY item. A list of sorts is in precedence order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    /// Field to sort by.
    pub field: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl Sort {
    /// Ascending sort on `field`.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `field`.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{} ASC", self.field),
            SortDirection::Descending => write!(f, "{} DESC", self.field),
        }
    }
}

/// A compiled `SELECT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectQuery {
    /// Entity (collection) name.
    pub entity: String,
    /// Projected fields; empty means all fields.
    pub fields: Vec<String>,
    /// Sort keys, primary first.
    pub sorts: Vec<Sort>,
    /// Number of rows to skip.
    pub skip: u64,
    /// Maximum number of rows; `0` means no cap.
    pub limit: u64,
    /// Optional single predicate.
    #[serde(rename = "where")]
    pub where_clause: Option<Condition>,
}

/// A compiled `DELETE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteQuery {
    /// Entity (collection) name.
    pub entity: String,
    /// Optional single predicate.
    #[serde(rename = "where")]
    pub where_clause: Option<Condition>,
}

/// Which statement form a compilation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `SELECT ... FROM ...`
    Select,
    /// `DELETE FROM ...`
    Delete,
}

/// A compiled query of either form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Query {
    /// SELECT statement.
    Select(SelectQuery),
    /// DELETE statement.
    Delete(DeleteQuery),
}

impl Query {
    /// Entity the query targets.
    #[must_use]
    pub fn entity(&self) -> &str {
        match self {
            Self::Select(q) => &q.entity,
            Self::Delete(q) => &q.entity,
        }
    }

    /// The query's predicate, if any.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            Self::Select(q) => q.where_clause.as_ref(),
            Self::Delete(q) => q.where_clause.as_ref(),
        }
    }

    /// Statement form of this query.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::Select(_) => StatementKind::Select,
            Self::Delete(_) => StatementKind::Delete,
        }
    }
}

impl From<SelectQuery> for Query {
    fn from(q: SelectQuery) -> Self {
        Self::Select(q)
    }
}

impl From<DeleteQuery> for Query {
    fn from(q: DeleteQuery) -> Self {
        Self::Delete(q)
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.fields.is_empty() {
            f.write_str("*")?;
        } else {
            f.write_str(&self.fields.join(", "))?;
        }
        write!(f, " FROM {}", self.entity)?;
        if let Some(condition) = &self.where_clause {
            write!(f, " WHERE {condition}")?;
        }
        if !self.sorts.is_empty() {
            let sorts: Vec<String> = self.sorts.iter().map(ToString::to_string).collect();
            write!(f, " ORDER BY {}", sorts.join(", "))?;
        }
        if self.skip > 0 {
            write!(f, " SKIP {}", self.skip)?;
        }
        if self.limit > 0 {
            write!(f, " LIMIT {}", self.limit)?;
        }
        Ok(())
    }
}

impl fmt::Display for DeleteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}", self.entity)?;
        if let Some(condition) = &self.where_clause {
            write!(f, " WHERE {condition}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(q) => q.fmt(f),
            Self::Delete(q) => q.fmt(f),
        }
    }
}
