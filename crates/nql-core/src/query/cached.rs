//! Cache-fronted compilers.

use std::time::Duration;

use super::ast::{DeleteQuery, Query, SelectQuery};
use super::cache::{CacheStats, TtlCache, DEFAULT_TTL};
use super::compiler::Compiler;
use super::error::CompileError;
use crate::config::NqlConfig;

/// Signature of the built-in compile functions.
pub type CompileFn<Q> = fn(&str) -> Result<Q, CompileError>;

/// A compiler whose successful results are memoized for a fixed TTL.
///
/// Absent input is rejected before the cache is consulted; failures are
/// never cached, so malformed text fails again on every call.
///
/// # Example
///
/// ```
/// use nql_core::query::CachedCompiler;
///
/// let compiler = CachedCompiler::select();
/// let query = compiler.compile("SELECT name FROM Person LIMIT 10").unwrap();
/// assert_eq!(query.limit, 10);
/// assert!(compiler.compile(None).unwrap_err().is_null_input());
/// ```
pub struct CachedCompiler<Q, F = CompileFn<Q>> {
    cache: TtlCache<Q, CompileError, F>,
}

fn select_text(text: &str) -> Result<SelectQuery, CompileError> {
    Compiler::compile_select(text)
}

fn delete_text(text: &str) -> Result<DeleteQuery, CompileError> {
    Compiler::compile_delete(text)
}

fn any_text(text: &str) -> Result<Query, CompileError> {
    Compiler::compile(text)
}

impl CachedCompiler<SelectQuery> {
    /// `SELECT` compiler with the default five minute TTL.
    #[must_use]
    pub fn select() -> Self {
        Self::select_with_ttl(DEFAULT_TTL)
    }

    /// `SELECT` compiler with a custom TTL.
    #[must_use]
    pub fn select_with_ttl(ttl: Duration) -> Self {
        Self::with_compiler(ttl, select_text as CompileFn<SelectQuery>)
    }
}

impl CachedCompiler<DeleteQuery> {
    /// `DELETE` compiler with the default five minute TTL.
    #[must_use]
    pub fn delete() -> Self {
        Self::delete_with_ttl(DEFAULT_TTL)
    }

    /// `DELETE` compiler with a custom TTL.
    #[must_use]
    pub fn delete_with_ttl(ttl: Duration) -> Self {
        Self::with_compiler(ttl, delete_text as CompileFn<DeleteQuery>)
    }
}

impl CachedCompiler<Query> {
    /// Compiler for either statement form with the default TTL.
    #[must_use]
    pub fn any() -> Self {
        Self::any_with_ttl(DEFAULT_TTL)
    }

    /// Compiler for either statement form with a custom TTL.
    #[must_use]
    pub fn any_with_ttl(ttl: Duration) -> Self {
        Self::with_compiler(ttl, any_text as CompileFn<Query>)
    }

    /// Builds the compiler from configuration. A disabled cache gets a zero
    /// TTL, so every call recompiles and nothing is stored.
    #[must_use]
    pub fn from_config(config: &NqlConfig) -> Self {
        Self::any_with_ttl(config.cache.effective_ttl())
    }
}

impl<Q, F> CachedCompiler<Q, F>
where
    Q: Clone,
    F: Fn(&str) -> Result<Q, CompileError>,
{
    /// Wraps an arbitrary compile function.
    #[must_use]
    pub fn with_compiler(ttl: Duration, compile: F) -> Self {
        Self {
            cache: TtlCache::new(ttl, compile),
        }
    }

    /// Compiles `input`, returning a cached query when one is fresh.
    ///
    /// # Errors
    ///
    /// `NullInput` for `None`; whatever the wrapped compiler returns
    /// otherwise.
    pub fn compile<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<Q, CompileError> {
        let text = input.into().ok_or_else(CompileError::null_input)?;
        self.cache.get(text)
    }

    /// Configured time-to-live.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Number of cached queries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if no queries are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops expired queries.
    pub fn purge_expired(&self) -> usize {
        self.cache.purge_expired()
    }

    /// Drops every cached query and resets statistics.
    pub fn clear(&self) {
        self.cache.clear();
    }
}
