//! Single-use accumulator that turns rule events into a query.

use super::ast::{
    Condition, DeleteQuery, Operator, Query, SelectQuery, Sort, StatementKind, Value,
};
use super::error::CompileError;
use super::events::QueryEvent;

/// Accumulates the clauses of one statement.
///
/// Create one per compilation. `finalize` consumes the builder, so it cannot
/// be mutated or finalized twice.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    entity: Option<String>,
    fields: Vec<String>,
    sorts: Vec<Sort>,
    skip: u64,
    limit: u64,
    condition: Option<Condition>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the entity name.
    pub fn on_entity(&mut self, name: impl Into<String>) {
        self.entity = Some(name.into());
    }

    /// Records the projection list.
    pub fn on_fields(&mut self, names: Vec<String>) {
        self.fields = names;
    }

    /// Records the sort keys.
    pub fn on_sort(&mut self, sorts: Vec<Sort>) {
        self.sorts = sorts;
    }

    /// Records the number of rows to skip.
    pub fn on_skip(&mut self, n: u64) {
        self.skip = n;
    }

    /// Records the row cap.
    pub fn on_limit(&mut self, n: u64) {
        self.limit = n;
    }

    /// Records the predicate, replacing any earlier one.
    ///
    /// `negated` is accepted but not applied: `NOT x = 5` yields the same
    /// condition as `x = 5`. An operand whose shape does not match the
    /// operator is dropped.
    pub fn on_condition(
        &mut self,
        field: impl Into<String>,
        operator: Operator,
        operand: Value,
        negated: bool,
    ) {
        let field = field.into();
        if negated {
            tracing::debug!(%field, "negation marker ignored on condition");
        }
        match Condition::new(field, operator, operand) {
            Some(condition) => self.condition = Some(condition),
            None => tracing::warn!(?operator, "operand shape does not match operator"),
        }
    }

    /// Applies one event; the step function of the fold.
    pub fn apply(&mut self, event: QueryEvent) {
        match event {
            QueryEvent::Entity(name) => self.on_entity(name),
            QueryEvent::Fields(names) => self.on_fields(names),
            QueryEvent::Sort(sorts) => self.on_sort(sorts),
            QueryEvent::Skip(n) => self.on_skip(n),
            QueryEvent::Limit(n) => self.on_limit(n),
            QueryEvent::Condition {
                field,
                operator,
                operand,
                negated,
            } => self.on_condition(field, operator, operand, negated),
        }
    }

    /// Folds a sequence of events into a fresh builder.
    #[must_use]
    pub fn fold<I>(events: I) -> Self
    where
        I: IntoIterator<Item = QueryEvent>,
    {
        events.into_iter().fold(Self::new(), |mut builder, event| {
            builder.apply(event);
            builder
        })
    }

    /// Assembles the accumulated clauses into a query of the given form.
    ///
    /// # Errors
    ///
    /// Returns a syntax error when no entity was recorded.
    pub fn finalize(self, kind: StatementKind) -> Result<Query, CompileError> {
        match kind {
            StatementKind::Select => self.finalize_select().map(Query::Select),
            StatementKind::Delete => self.finalize_delete().map(Query::Delete),
        }
    }

    /// Assembles a `SelectQuery`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error when no entity was recorded.
    pub fn finalize_select(self) -> Result<SelectQuery, CompileError> {
        let entity = Self::require_entity(self.entity)?;
        Ok(SelectQuery {
            entity,
            fields: self.fields,
            sorts: self.sorts,
            skip: self.skip,
            limit: self.limit,
            where_clause: self.condition,
        })
    }

    /// Assembles a `DeleteQuery`. Projection, sort and pagination are
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns a syntax error when no entity was recorded.
    pub fn finalize_delete(self) -> Result<DeleteQuery, CompileError> {
        let entity = Self::require_entity(self.entity)?;
        Ok(DeleteQuery {
            entity,
            where_clause: self.condition,
        })
    }

    fn require_entity(entity: Option<String>) -> Result<String, CompileError> {
        entity
            .filter(|e| !e.is_empty())
            .ok_or_else(|| CompileError::syntax("", 0, "Expected entity name"))
    }
}
