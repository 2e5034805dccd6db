//! NQL - a small SELECT / DELETE language over a NoSQL abstraction.
//!
//! Text is recognised by a pest grammar, which emits one [`QueryEvent`] per
//! clause. A fresh [`QueryBuilder`] folds those events into an immutable
//! [`Query`]. [`TtlCache`] memoizes the whole pipeline per query string.
//!
//! # Example
//!
//! ```
//! use nql_core::query::{CachedCompiler, Compiler, Operator, Value};
//!
//! // Direct compilation
//! let query = Compiler::compile_select("SELECT name, age FROM Person WHERE age > 21")?;
//! let condition = query.where_clause.unwrap();
//! assert_eq!(condition.operator, Operator::GreaterThan);
//! assert_eq!(condition.operand, Value::from(21));
//!
//! // Cached compilation (five minute TTL)
//! let compiler = CachedCompiler::delete();
//! let delete = compiler.compile("DELETE FROM Person WHERE id = 5")?;
//! assert_eq!(delete.entity, "Person");
//! # Ok::<(), nql_core::query::CompileError>(())
//! ```

mod ast;
mod builder;
mod cache;
mod cached;
mod compiler;
mod error;
mod events;
mod parser;

pub use ast::*;
pub use builder::QueryBuilder;
pub use cache::{CacheEntry, CacheStats, Clock, SystemClock, TtlCache, DEFAULT_TTL};
pub use cached::{CachedCompiler, CompileFn};
pub use compiler::Compiler;
pub use error::{CompileError, CompileErrorKind};
pub use events::QueryEvent;
pub use parser::{ErrorSink, EventSource};

#[cfg(test)]
mod compiler_tests;
