//! Statement-level clauses: projection, entity, ordering, pagination.

use pest::iterators::Pair;

use super::{Rule, Walker};
use crate::query::ast::{Sort, SortDirection};
use crate::query::events::QueryEvent;

impl<F> Walker<'_, '_, F>
where
    F: FnMut(QueryEvent),
{
    pub(crate) fn select_stmt(&mut self, pair: Pair<'_, Rule>) {
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::fields => {
                    let names = Self::fields(inner);
                    (self.emit)(QueryEvent::Fields(names));
                }
                Rule::entity => self.entity(&inner),
                Rule::where_clause => self.where_clause(inner),
                Rule::order_clause => {
                    let sorts = Self::order_clause(inner);
                    (self.emit)(QueryEvent::Sort(sorts));
                }
                Rule::skip_clause => {
                    if let Some(n) = self.integer_clause(inner) {
                        (self.emit)(QueryEvent::Skip(n));
                    }
                }
                Rule::limit_clause => {
                    if let Some(n) = self.integer_clause(inner) {
                        (self.emit)(QueryEvent::Limit(n));
                    }
                }
                _ => {}
            }
        }
    }

    pub(crate) fn delete_stmt(&mut self, pair: Pair<'_, Rule>) {
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::entity => self.entity(&inner),
                Rule::where_clause => self.where_clause(inner),
                _ => {}
            }
        }
    }

    fn entity(&mut self, pair: &Pair<'_, Rule>) {
        // entity wraps a single name; the name text is the whole span
        (self.emit)(QueryEvent::Entity(pair.as_str().trim().to_string()));
    }

    /// `*` yields an empty list.
    fn fields(pair: Pair<'_, Rule>) -> Vec<String> {
        pair.into_inner()
            .filter(|p| p.as_rule() == Rule::name)
            .map(|p| p.as_str().to_string())
            .collect()
    }

    fn order_clause(pair: Pair<'_, Rule>) -> Vec<Sort> {
        pair.into_inner()
            .filter(|p| p.as_rule() == Rule::order_item)
            .filter_map(|item| {
                let mut field = None;
                let mut direction = SortDirection::default();
                for part in item.into_inner() {
                    match part.as_rule() {
                        Rule::name => field = Some(part.as_str().to_string()),
                        Rule::direction => {
                            if part.into_inner().any(|d| d.as_rule() == Rule::kw_desc) {
                                direction = SortDirection::Descending;
                            }
                        }
                        _ => {}
                    }
                }
                field.map(|field| Sort { field, direction })
            })
            .collect()
    }

    fn integer_clause(&mut self, pair: Pair<'_, Rule>) -> Option<u64> {
        let integer = pair.into_inner().find(|p| p.as_rule() == Rule::integer)?;
        match integer.as_str().parse::<u64>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.report(&integer, format!("Integer out of range: {}", integer.as_str()));
                None
            }
        }
    }
}
