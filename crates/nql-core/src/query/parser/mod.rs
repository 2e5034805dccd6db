//! Grammar recognition using pest.
//!
//! [`EventSource`] parses the input against the grammar and walks the parse
//! tree, emitting one [`QueryEvent`] per recognised rule. Syntax violations
//! are reported into an [`ErrorSink`] supplied by the caller, never into
//! shared state.

mod clauses;
mod conditions;

use pest::error::InputLocation;
use pest::iterators::Pair;
use pest::Parser as PestParser;
use pest_derive::Parser;

use super::ast::StatementKind;
use super::error::CompileError;
use super::events::QueryEvent;

#[derive(Parser)]
#[grammar = "query/grammar.pest"]
pub(crate) struct NqlParser;

/// Collects syntax violations for one compilation.
#[derive(Debug, Default)]
pub struct ErrorSink {
    errors: Vec<CompileError>,
}

impl ErrorSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn report(&mut self, error: CompileError) {
        self.errors.push(error);
    }

    /// True once any violation has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All recorded violations, in detection order.
    #[must_use]
    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    /// The first recorded violation, if any.
    #[must_use]
    pub fn into_first(self) -> Option<CompileError> {
        self.errors.into_iter().next()
    }
}

/// Syntax-event source for NQL text.
pub struct EventSource;

impl EventSource {
    /// Recognises `input` and feeds each rule event to `on_event` in source
    /// order.
    ///
    /// `expected` restricts the accepted statement form; `None` accepts
    /// either. Returns the recognised form, or `None` when the input did not
    /// match the grammar (the violation is in `sink`). Events may still have
    /// been emitted when a literal inside an otherwise valid statement is
    /// rejected; callers must check `sink` before using them.
    pub fn walk<F>(
        input: &str,
        expected: Option<StatementKind>,
        sink: &mut ErrorSink,
        mut on_event: F,
    ) -> Option<StatementKind>
    where
        F: FnMut(QueryEvent),
    {
        let rule = match expected {
            None => Rule::query,
            Some(StatementKind::Select) => Rule::select_query,
            Some(StatementKind::Delete) => Rule::delete_query,
        };

        let mut pairs = match NqlParser::parse(rule, input) {
            Ok(pairs) => pairs,
            Err(e) => {
                let position = match e.location {
                    InputLocation::Pos(p) => p,
                    InputLocation::Span((s, _)) => s,
                };
                sink.report(CompileError::syntax(input, position, e.variant.message()));
                return None;
            }
        };

        let Some(statement) = pairs
            .next()
            .and_then(|top| top.into_inner().find(is_statement))
        else {
            sink.report(CompileError::syntax(input, 0, "Empty query"));
            return None;
        };

        let mut walker = Walker {
            input,
            sink,
            emit: &mut on_event,
        };
        match statement.as_rule() {
            Rule::select_stmt => {
                walker.select_stmt(statement);
                Some(StatementKind::Select)
            }
            _ => {
                walker.delete_stmt(statement);
                Some(StatementKind::Delete)
            }
        }
    }

    /// Collects the events of `input` into a vector.
    pub fn events(
        input: &str,
        expected: Option<StatementKind>,
        sink: &mut ErrorSink,
    ) -> (Option<StatementKind>, Vec<QueryEvent>) {
        let mut events = Vec::new();
        let kind = Self::walk(input, expected, sink, |e| events.push(e));
        (kind, events)
    }
}

fn is_statement(pair: &Pair<'_, Rule>) -> bool {
    matches!(pair.as_rule(), Rule::select_stmt | Rule::delete_stmt)
}

/// Parse-tree walker state for a single statement.
pub(crate) struct Walker<'a, 's, F> {
    input: &'a str,
    sink: &'s mut ErrorSink,
    emit: &'s mut F,
}

impl<F> Walker<'_, '_, F>
where
    F: FnMut(QueryEvent),
{
    fn report(&mut self, pair: &Pair<'_, Rule>, message: impl Into<String>) {
        let error = CompileError::syntax(self.input, pair.as_span().start(), message);
        self.sink.report(error);
    }
}

#[cfg(test)]
mod tests;
