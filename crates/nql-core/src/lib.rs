//! # `nql-core`
//!
//! Compiles NQL, a small SELECT / DELETE query language over a NoSQL-style
//! abstraction, into immutable query values for execution engines to
//! consume, with a time-bounded cache in front of the compiler.
//!
//! ## Quick Start
//!
//! ```rust
//! use nql_core::query::{CachedCompiler, Sort};
//!
//! let compiler = CachedCompiler::select();
//! let query = compiler.compile("SELECT name, age FROM Person ORDER BY name SKIP 5 LIMIT 10")?;
//!
//! assert_eq!(query.entity, "Person");
//! assert_eq!(query.fields, vec!["name", "age"]);
//! assert_eq!(query.sorts, vec![Sort::asc("name")]);
//! assert_eq!((query.skip, query.limit), (5, 10));
//! # Ok::<(), nql_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod query;

pub use config::{CacheConfig, ConfigError, NqlConfig};
pub use error::{Error, Result};
pub use query::{
    CachedCompiler, CompileError, CompileErrorKind, Compiler, Condition, DeleteQuery, Operator,
    Query, SelectQuery, Sort, SortDirection, TtlCache, Value,
};
