//! Text to query compilation.

use super::ast::{DeleteQuery, Query, SelectQuery, StatementKind};
use super::builder::QueryBuilder;
use super::error::CompileError;
use super::parser::{ErrorSink, EventSource};

/// Compiles NQL text into immutable query values.
///
/// Compilation is pure: the same text always yields an equal query, which is
/// what lets [`TtlCache`](super::TtlCache) memoize it.
pub struct Compiler;

impl Compiler {
    /// Compiles a `SELECT` or `DELETE` statement.
    ///
    /// # Errors
    ///
    /// Returns a `NullInput` error for `None`, a `Syntax` error for malformed
    /// input.
    ///
    /// # Example
    ///
    /// ```
    /// use nql_core::query::{Compiler, Query};
    ///
    /// let query = Compiler::compile("DELETE FROM Person WHERE id = 5").unwrap();
    /// assert!(matches!(query, Query::Delete(_)));
    /// ```
    pub fn compile<'a>(input: impl Into<Option<&'a str>>) -> Result<Query, CompileError> {
        let text = input.into().ok_or_else(CompileError::null_input)?;
        Self::run(text, None)
    }

    /// Compiles a `SELECT` statement; any other form is a syntax error.
    ///
    /// # Errors
    ///
    /// Returns a `NullInput` error for `None`, a `Syntax` error for malformed
    /// input.
    pub fn compile_select<'a>(
        input: impl Into<Option<&'a str>>,
    ) -> Result<SelectQuery, CompileError> {
        let text = input.into().ok_or_else(CompileError::null_input)?;
        match Self::run(text, Some(StatementKind::Select))? {
            Query::Select(q) => Ok(q),
            Query::Delete(_) => Err(CompileError::syntax(text, 0, "Expected SELECT statement")),
        }
    }

    /// Compiles a `DELETE` statement; any other form is a syntax error.
    ///
    /// # Errors
    ///
    /// Returns a `NullInput` error for `None`, a `Syntax` error for malformed
    /// input.
    pub fn compile_delete<'a>(
        input: impl Into<Option<&'a str>>,
    ) -> Result<DeleteQuery, CompileError> {
        let text = input.into().ok_or_else(CompileError::null_input)?;
        match Self::run(text, Some(StatementKind::Delete))? {
            Query::Delete(q) => Ok(q),
            Query::Select(_) => Err(CompileError::syntax(text, 0, "Expected DELETE statement")),
        }
    }

    fn run(text: &str, expected: Option<StatementKind>) -> Result<Query, CompileError> {
        let mut sink = ErrorSink::new();
        let mut builder = QueryBuilder::new();

        let kind = EventSource::walk(text, expected, &mut sink, |event| builder.apply(event));

        match (kind, sink.into_first()) {
            (_, Some(error)) => {
                tracing::debug!(%error, "query compilation failed");
                Err(error)
            }
            (Some(kind), None) => builder
                .finalize(kind)
                .map_err(|e| CompileError::syntax(text, e.position, e.message)),
            (None, None) => Err(CompileError::syntax(text, 0, "Empty query")),
        }
    }
}
