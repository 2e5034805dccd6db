//! Query model produced by the compiler.
//!
//! All types are plain immutable values compared by structural equality.

mod condition;
mod statement;
mod values;

pub use condition::{Condition, Operator};
pub use statement::{DeleteQuery, Query, SelectQuery, Sort, SortDirection, StatementKind};
pub use values::{Number, Value};
