//! Tests for the grammar event source.

use super::*;
use crate::query::ast::{Operator, Sort, Value};

fn events_of(input: &str) -> (Option<StatementKind>, Vec<QueryEvent>, ErrorSink) {
    let mut sink = ErrorSink::new();
    let (kind, events) = EventSource::events(input, None, &mut sink);
    (kind, events, sink)
}

#[test]
fn test_select_events_in_source_order() {
    let (kind, events, sink) =
        events_of("SELECT name, age FROM Person WHERE age > 21 ORDER BY name LIMIT 10 SKIP 0");

    assert!(!sink.has_errors());
    assert_eq!(kind, Some(StatementKind::Select));
    assert_eq!(
        events,
        vec![
            QueryEvent::Fields(vec!["name".to_string(), "age".to_string()]),
            QueryEvent::Entity("Person".to_string()),
            QueryEvent::Condition {
                field: "age".to_string(),
                operator: Operator::GreaterThan,
                operand: Value::from(21),
                negated: false,
            },
            QueryEvent::Sort(vec![Sort::asc("name")]),
            QueryEvent::Limit(10),
            QueryEvent::Skip(0),
        ]
    );
}

#[test]
fn test_star_emits_empty_fields() {
    let (_, events, _) = events_of("SELECT * FROM X");
    assert_eq!(
        events,
        vec![
            QueryEvent::Fields(Vec::new()),
            QueryEvent::Entity("X".to_string()),
        ]
    );
}

#[test]
fn test_negation_is_reported_in_event() {
    let (_, events, _) = events_of("DELETE FROM X WHERE NOT age = 5");
    assert!(events.contains(&QueryEvent::Condition {
        field: "age".to_string(),
        operator: Operator::Equals,
        operand: Value::from(5),
        negated: true,
    }));
}

#[test]
fn test_between_event_carries_pair() {
    let (_, events, _) = events_of("SELECT * FROM X WHERE d BETWEEN 'a' AND 'b'");
    assert_eq!(
        events.last(),
        Some(&QueryEvent::Condition {
            field: "d".to_string(),
            operator: Operator::Between,
            operand: Value::pair(Value::from("a"), Value::from("b")),
            negated: false,
        })
    );
}

#[test]
fn test_delete_emits_no_projection() {
    let (kind, events, _) = events_of("DELETE FROM Person");
    assert_eq!(kind, Some(StatementKind::Delete));
    assert_eq!(events, vec![QueryEvent::Entity("Person".to_string())]);
}

#[test]
fn test_repeated_clause_emits_twice() {
    let (_, events, _) = events_of("SELECT * FROM X LIMIT 1 LIMIT 2");
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, QueryEvent::Limit(_)))
            .count(),
        2
    );
    assert_eq!(events.last(), Some(&QueryEvent::Limit(2)));
}

#[test]
fn test_syntax_error_goes_to_sink() {
    let (kind, events, sink) = events_of("SELECT FROM WHERE");
    assert!(kind.is_none());
    assert!(events.is_empty());
    assert!(sink.has_errors());
    assert_eq!(sink.errors().len(), 1);
    assert!(sink.into_first().unwrap().is_syntax());
}

#[test]
fn test_expected_form_restricts_grammar() {
    let mut sink = ErrorSink::new();
    let (kind, _) = EventSource::events("SELECT * FROM X", Some(StatementKind::Delete), &mut sink);
    assert!(kind.is_none());
    assert!(sink.has_errors());
}

#[test]
fn test_out_of_range_integer_reported_but_walk_continues() {
    let (kind, events, sink) = events_of("SELECT * FROM X SKIP 99999999999999999999 LIMIT 3");
    assert_eq!(kind, Some(StatementKind::Select));
    assert!(sink.has_errors());
    assert!(!events.iter().any(|e| matches!(e, QueryEvent::Skip(_))));
    assert_eq!(events.last(), Some(&QueryEvent::Limit(3)));
}

#[test]
fn test_sinks_are_independent() {
    let mut bad = ErrorSink::new();
    let mut good = ErrorSink::new();

    EventSource::events("SELECT", None, &mut bad);
    EventSource::events("SELECT * FROM X", None, &mut good);

    assert!(bad.has_errors());
    assert!(!good.has_errors());
}
