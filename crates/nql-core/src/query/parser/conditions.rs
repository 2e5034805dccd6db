//! WHERE clause and literal handling.

use pest::iterators::Pair;

use super::{Rule, Walker};
use crate::query::ast::{Operator, Value};
use crate::query::events::QueryEvent;

impl<F> Walker<'_, '_, F>
where
    F: FnMut(QueryEvent),
{
    pub(crate) fn where_clause(&mut self, pair: Pair<'_, Rule>) {
        if let Some(condition) = pair.into_inner().find(|p| p.as_rule() == Rule::condition) {
            self.condition(condition);
        }
    }

    fn condition(&mut self, pair: Pair<'_, Rule>) {
        let mut negated = false;
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::negation => negated = true,
                Rule::compare_expr => self.compare_expr(inner, negated),
                Rule::between_expr => self.between_expr(inner, negated),
                _ => {}
            }
        }
    }

    fn compare_expr(&mut self, pair: Pair<'_, Rule>, negated: bool) {
        let mut field = None;
        let mut operator = None;
        let mut operand = None;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::name => field = Some(inner.as_str().to_string()),
                Rule::compare_op => {
                    operator = Operator::from_symbol(inner.as_str());
                    if operator.is_none() {
                        self.report(&inner, "Unknown comparison operator");
                    }
                }
                Rule::value => operand = self.value(&inner),
                _ => {}
            }
        }

        if let (Some(field), Some(operator), Some(operand)) = (field, operator, operand) {
            (self.emit)(QueryEvent::Condition {
                field,
                operator,
                operand,
                negated,
            });
        }
    }

    fn between_expr(&mut self, pair: Pair<'_, Rule>, negated: bool) {
        let mut field = None;
        let mut bounds = Vec::with_capacity(2);

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::name => field = Some(inner.as_str().to_string()),
                Rule::value => {
                    if let Some(v) = self.value(&inner) {
                        bounds.push(v);
                    }
                }
                _ => {}
            }
        }

        let mut bounds = bounds.into_iter();
        if let (Some(field), Some(low), Some(high)) = (field, bounds.next(), bounds.next()) {
            (self.emit)(QueryEvent::Condition {
                field,
                operator: Operator::Between,
                operand: Value::pair(low, high),
                negated,
            });
        }
    }

    fn value(&mut self, pair: &Pair<'_, Rule>) -> Option<Value> {
        let value = Value::from_literal(pair.as_str());
        if value.is_none() {
            self.report(pair, format!("Unrecognized literal: {}", pair.as_str()));
        }
        value
    }
}
