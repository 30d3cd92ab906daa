use super::*;
use crate::interpreter::lexer::Lexer;
use crate::interpreter::parser::Parser;

fn parse(source: &str) -> Node {
    let mut out = Vec::new();
    let mut console = Console::new(None, &mut out);

    Parser::new(Lexer::new(source), &mut console).parse()
        .unwrap_or_else(|| panic!("Failed to parse {:?}", source))
}

/// Evaluates `source` without a semantic check, returning the result, the
/// console output and the final variable bindings.
fn evaluate(source: &str) -> (Value, String, ValueEnvironment) {
    let tree = parse(source);
    let mut environment = ValueEnvironment::new();
    let mut out = Vec::new();
    let mut console = Console::new(None, &mut out);

    let result = Evaluator::new(&mut environment, &mut console).evaluate(&tree);

    console.finish().unwrap();
    (result, String::from_utf8(out).unwrap(), environment)
}

#[test]
fn test_print() {
    let (result, output, _) = evaluate("print 1; print \" \"; println \"two\"; println 3;");

    assert_eq!(result, Value::Empty);
    assert_eq!(output, "1 two\n3\n");
}

#[test]
fn test_declaration_defaults() {
    let (_, output, environment) = evaluate("int x; string s; println x; println s;");

    assert_eq!(output, "0\n\n");
    assert_eq!(environment.get("x"), Some(&Value::Integer(0)));
    assert_eq!(environment.get("s"), Some(&Value::String(String::new())));
}

#[test]
fn test_assignment() {
    let (_, output, environment) = evaluate("int x; set x 5; set x x * x + 1; println x;");

    assert_eq!(output, "26\n");
    assert_eq!(environment.get("x"), Some(&Value::Integer(26)));
}

#[test]
fn test_string_expressions() {
    let (_, output, _) = evaluate("string s; set s \"ab\"; println 3*s; println s * 2 + \"!\";");
    assert_eq!(output, "ababab\nabab!\n");

    let (_, output, _) = evaluate("string s; set s \"hello world\"; println s/\"world\"; println s/\"moon\";");
    assert_eq!(output, "hello \nhello world\n");
}

#[test]
fn test_divide_by_zero_stops_execution() {
    let (result, output, environment) = evaluate("int x;\nset x 6;\nset x x/0;\nprintln x;");

    assert_eq!(result, Value::Error(None));
    assert_eq!(output, "3:DIVIDE BY ZERO\n");
    assert_eq!(environment.get("x"), Some(&Value::Integer(6)));
}

#[test]
fn test_runtime_error_reported_once() {
    let (_, output, _) = evaluate("print 1;\nprint (7\n/ 0) / 2 + 1;\nprint 2;");

    assert_eq!(output, "13:DIVIDE BY ZERO\n");
}

#[test]
fn test_failed_print_writes_nothing() {
    let (result, output, _) = evaluate("print 4 - \"a\"; print 1;");

    assert_eq!(result, Value::Error(None));
    assert_eq!(output, "");
}

#[test]
fn test_both_operands_are_evaluated() {
    let (_, output, _) = evaluate("print (1/0) + (2/0);");

    assert_eq!(output, "1:DIVIDE BY ZERO\n1:DIVIDE BY ZERO\n");
}

#[test]
fn test_empty_program() {
    let (result, output, _) = evaluate("");

    assert_eq!(result, Value::Empty);
    assert_eq!(output, "");
}
