//! Tests for `compiler` module

use super::*;

// ========== SELECT ==========

#[test]
fn test_compile_select_full() {
    let query = Compiler::compile_select(
        "SELECT name, age FROM Person WHERE age > 21 ORDER BY name LIMIT 10 SKIP 0",
    )
    .unwrap();

    assert_eq!(query.entity, "Person");
    assert_eq!(query.fields, vec!["name", "age"]);
    assert_eq!(query.sorts, vec![Sort::asc("name")]);
    assert_eq!(query.limit, 10);
    assert_eq!(query.skip, 0);
    assert_eq!(
        query.where_clause,
        Condition::new("age", Operator::GreaterThan, Value::from(21))
    );
}

#[test]
fn test_field_order_preserved() {
    let query = Compiler::compile_select("SELECT a, b, c FROM X").unwrap();
    assert_eq!(query.fields, vec!["a", "b", "c"]);
}

#[test]
fn test_star_means_all_fields() {
    let query = Compiler::compile_select("SELECT * FROM X").unwrap();
    assert!(query.fields.is_empty());
}

#[test]
fn test_defaults() {
    let query = Compiler::compile_select("SELECT * FROM X").unwrap();
    assert_eq!(query.skip, 0);
    assert_eq!(query.limit, 0);
    assert!(query.sorts.is_empty());
    assert!(query.where_clause.is_none());
}

#[test]
fn test_pagination() {
    let query = Compiler::compile_select("SELECT * FROM X SKIP 5 LIMIT 10").unwrap();
    assert_eq!(query.skip, 5);
    assert_eq!(query.limit, 10);
}

#[test]
fn test_sort_precedence() {
    let query = Compiler::compile_select("SELECT * FROM X ORDER BY a, b").unwrap();
    assert_eq!(query.sorts, vec![Sort::asc("a"), Sort::asc("b")]);
}

#[test]
fn test_sort_directions() {
    let query = Compiler::compile_select("SELECT * FROM X ORDER BY a DESC, b ASC, c").unwrap();
    assert_eq!(
        query.sorts,
        vec![Sort::desc("a"), Sort::asc("b"), Sort::asc("c")]
    );
}

#[test]
fn test_keywords_case_insensitive() {
    let upper = Compiler::compile_select("SELECT name FROM Person WHERE age >= 3").unwrap();
    let lower = Compiler::compile_select("select name from Person where age >= 3").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_relational_operators() {
    let cases = [
        ("=", Operator::Equals),
        ("<", Operator::LesserThan),
        ("<=", Operator::LesserEqualsThan),
        (">", Operator::GreaterThan),
        (">=", Operator::GreaterEqualsThan),
    ];
    for (symbol, expected) in cases {
        let text = format!("SELECT * FROM X WHERE age {symbol} 21");
        let condition = Compiler::compile_select(text.as_str())
            .unwrap()
            .where_clause
            .unwrap();
        assert_eq!(condition.operator, expected, "operator {symbol}");
        assert_eq!(condition.operand, Value::from(21));
    }
}

#[test]
fn test_range_condition() {
    let query = Compiler::compile_select("SELECT * FROM X WHERE age BETWEEN 10 AND 20").unwrap();
    let condition = query.where_clause.unwrap();
    assert_eq!(condition.field, "age");
    assert_eq!(condition.operator, Operator::Between);
    assert_eq!(
        condition.operand,
        Value::pair(Value::from(10), Value::from(20))
    );
}

#[test]
fn test_range_condition_keeps_source_order() {
    let query = Compiler::compile_select("SELECT * FROM X WHERE age BETWEEN 20 AND 10").unwrap();
    assert_eq!(
        query.where_clause.unwrap().operand,
        Value::pair(Value::from(20), Value::from(10))
    );
}

#[test]
fn test_literal_kinds() {
    let cases = [
        ("'Ada'", Value::from("Ada")),
        ("\"Ada\"", Value::from("Ada")),
        ("2.5", Value::from(2.5)),
        ("-3", Value::from(-3)),
        ("true", Value::Boolean(true)),
        ("null", Value::Null),
    ];
    for (literal, expected) in cases {
        let text = format!("SELECT * FROM X WHERE v = {literal}");
        let condition = Compiler::compile_select(text.as_str())
            .unwrap()
            .where_clause
            .unwrap();
        assert_eq!(condition.operand, expected, "literal {literal}");
    }
}

#[test]
fn test_negation_currently_ignored() {
    // NOT is recognised but not applied: pinned current behavior, under review.
    let negated = Compiler::compile_select("SELECT * FROM X WHERE NOT age = 5").unwrap();
    let plain = Compiler::compile_select("SELECT * FROM X WHERE age = 5").unwrap();
    assert_eq!(negated, plain);
}

#[test]
fn test_dotted_field_names() {
    let query = Compiler::compile_select("SELECT address.city FROM Person").unwrap();
    assert_eq!(query.fields, vec!["address.city"]);
}

#[test]
fn test_keyword_prefixed_identifiers() {
    let query = Compiler::compile_select("SELECT order_id FROM Orders ORDER BY order_id").unwrap();
    assert_eq!(query.entity, "Orders");
    assert_eq!(query.fields, vec!["order_id"]);
    assert_eq!(query.sorts, vec![Sort::asc("order_id")]);
}

// ========== DELETE ==========

#[test]
fn test_compile_delete() {
    let query = Compiler::compile_delete("DELETE FROM Person WHERE id = 5").unwrap();
    assert_eq!(query.entity, "Person");
    assert_eq!(
        query.where_clause,
        Condition::new("id", Operator::Equals, Value::from(5))
    );
}

#[test]
fn test_compile_delete_without_where() {
    let query = Compiler::compile_delete("DELETE FROM Person").unwrap();
    assert!(query.where_clause.is_none());
}

#[test]
fn test_compile_dispatches_on_form() {
    assert!(matches!(
        Compiler::compile("SELECT * FROM X").unwrap(),
        Query::Select(_)
    ));
    assert!(matches!(
        Compiler::compile("DELETE FROM X").unwrap(),
        Query::Delete(_)
    ));
}

#[test]
fn test_wrong_form_is_syntax_error() {
    assert!(Compiler::compile_select("DELETE FROM X").unwrap_err().is_syntax());
    assert!(Compiler::compile_delete("SELECT * FROM X").unwrap_err().is_syntax());
}

// ========== Errors ==========

#[test]
fn test_null_input_select_and_delete() {
    let select = Compiler::compile_select(None).unwrap_err();
    let delete = Compiler::compile_delete(None).unwrap_err();
    let any = Compiler::compile(None).unwrap_err();

    assert_eq!(select.kind, CompileErrorKind::NullInput);
    assert_eq!(delete.kind, CompileErrorKind::NullInput);
    assert_eq!(any.kind, CompileErrorKind::NullInput);
}

#[test]
fn test_malformed_input_is_syntax_error() {
    let err = Compiler::compile_select("SELECT FROM WHERE").unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::Syntax);
    assert_eq!(err.line, 1);
    assert_eq!(err.position, 7);
    assert!(err.fragment.starts_with("FROM"));
}

#[test]
fn test_malformed_inputs() {
    let inputs = [
        "",
        "SELECT",
        "SELECT * FROM",
        "SELECT * Person",
        "SELECT * FROM X WHERE",
        "SELECT * FROM X WHERE age",
        "SELECT * FROM X WHERE age > ",
        "SELECT * FROM X WHERE age BETWEEN 1",
        "SELECT * FROM X LIMIT",
        "SELECT * FROM X LIMIT -1",
        "SELECT * FROM X LIMIT 10abc",
        "SELECT * FROM X LIMIT 10SKIP 5",
        "SELECT * FROM X SKIP 5LIMIT 10",
        "SELECT * FROM X WHERE v = 1e400",
        "SELECT * FROM X ORDER name",
        "SELECT * FROM X WHERE name = 'unterminated",
        "DELETE Person",
        "UPDATE Person SET a = 1",
    ];
    for input in inputs {
        let err = Compiler::compile(input).unwrap_err();
        assert!(err.is_syntax(), "expected syntax error for {input:?}");
    }
}

#[test]
fn test_limit_overflow_is_syntax_error() {
    let err = Compiler::compile_select("SELECT * FROM X LIMIT 99999999999999999999").unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.position, 22);
}

#[test]
fn test_error_position_on_second_line() {
    let err = Compiler::compile_select("SELECT *\nFROM X WHERE ? = 1").unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.column > 1);
}

// ========== Determinism & display ==========

#[test]
fn test_determinism() {
    let text = "SELECT name FROM Person WHERE age BETWEEN 1 AND 9 ORDER BY name DESC SKIP 2 LIMIT 3";
    assert_eq!(
        Compiler::compile(text).unwrap(),
        Compiler::compile(text).unwrap()
    );
}

#[test]
fn test_display_recompiles_to_same_query() {
    let texts = [
        "SELECT name, age FROM Person WHERE age > 21 ORDER BY name DESC SKIP 5 LIMIT 10",
        "SELECT * FROM X WHERE v BETWEEN 'a' AND 'z'",
        "DELETE FROM Person WHERE name = 'O\\'Brien'",
        "SELECT * FROM X WHERE v = 2.0",
        "SELECT * FROM X WHERE v = -0.5",
        "SELECT * FROM X WHERE v = 1e300",
        "SELECT * FROM X WHERE v = 99999999999999999999",
        "DELETE FROM X WHERE v = 'a\\\\'",
        "DELETE FROM X WHERE v = 'C:\\\\dir\\\\'",
        "SELECT * FROM X WHERE v BETWEEN 1.0 AND 'x\\\\'",
    ];
    for text in texts {
        let query = Compiler::compile(text).unwrap();
        let rendered = query.to_string();
        assert_eq!(Compiler::compile(rendered.as_str()).unwrap(), query, "{rendered}");
    }
}
