use typed_script_lang::interpreter::console::Console;
use typed_script_lang::interpreter::value::Value;
use typed_script_lang::{run_source, Error, Interpreter, Outcome};

fn run(source: &str) -> (Result<Outcome, Error>, String) {
    run_named(None, source)
}

fn run_named(file_name: Option<&str>, source: &str) -> (Result<Outcome, Error>, String) {
    let mut out = Vec::new();
    let mut console = Console::new(file_name.map(str::to_owned), &mut out);

    let result = run_source(source, &mut console);
    console.finish().unwrap();

    (result, String::from_utf8(out).unwrap())
}

fn assert_output(source: &str, expected: &str) {
    let (result, output) = run(source);

    assert!(matches!(result, Ok(Outcome::Completed)), "Running {:?} gave {:?}", source, result);
    assert_eq!(output, expected, "Unexpected output for {:?}", source);
}

fn assert_rejected(source: &str, expected: &str) {
    let (result, output) = run(source);

    assert!(matches!(result, Ok(Outcome::Rejected)), "Running {:?} gave {:?}", source, result);
    assert_eq!(output, expected, "Unexpected diagnostics for {:?}", source);
}

#[test]
fn test_assign_and_print() {
    assert_output("int x; set x 5; println x;", "5\n");
}

#[test]
fn test_string_repetition() {
    assert_output("string s; set s \"ab\"; println 3*s;", "ababab\n");
}

#[test]
fn test_string_removal() {
    assert_output("string s; set s \"hello world\"; println s/\"world\";", "hello \n");
}

#[test]
fn test_larger_program() {
    assert_output(concat!(
        "// squares and greetings\n",
        "int n;\n",
        "string greeting;\n",
        "set n 7;\n",
        "set greeting \"hi \" + \"there\"; // trailing comment\n",
        "print n * n - 1; print \" \"; println (n + 1) / 2;\n",
        "println greeting / \"there\" + \"you\";\n",
        "println 2 * \"-\" + \"|\" + \"-\" * 2;\n",
    ), "48 4\nhi you\n--|--\n");
}

#[test]
fn test_empty_program() {
    assert_output("", "");
    assert_output("// only a comment", "");
}

#[test]
fn test_already_declared() {
    assert_rejected("int x; int x;", "1:variable x was already declared\n");
}

#[test]
fn test_used_before_declared() {
    assert_rejected("set y 1;", "1:variable y is used before being declared\n");
}

#[test]
fn test_type_error() {
    assert_rejected("int x; set x \"hi\";", "1:type error\n");
}

#[test]
fn test_semantic_errors_block_all_output() {
    assert_rejected("println 1;\nint x;\nset x \"a\" - \"b\";", "3:type error\n3:type error\n");
}

#[test]
fn test_divide_by_zero() {
    let mut out = Vec::new();
    let mut console = Console::new(None, &mut out);
    let mut interpreter = Interpreter::new();

    let result = interpreter.run("int x;\nset x 6;\nset x x/0;\nprintln x;", &mut console);
    console.finish().unwrap();

    assert!(matches!(result, Ok(Outcome::Aborted)));
    assert_eq!(String::from_utf8(out).unwrap(), "3:DIVIDE BY ZERO\n");
    assert_eq!(interpreter.environment().values.get("x"), Some(&Value::Integer(6)));
}

#[test]
fn test_output_before_runtime_error_is_kept() {
    let (result, output) = run("println \"before\";\nprintln 1 / (2 - 2);\nprintln \"after\";");

    assert!(matches!(result, Ok(Outcome::Aborted)));
    assert_eq!(output, "before\n2:DIVIDE BY ZERO\n");
}

#[test]
fn test_syntax_error() {
    let (result, output) = run("int x;\nset x 5\nprintln x;");

    assert!(matches!(result, Err(Error::Parse)));
    assert_eq!(output, "3:Syntax error semicolon required\n");
}

#[test]
fn test_lexical_error() {
    let (result, output) = run("int 3a;");

    assert!(matches!(result, Err(Error::Parse)));
    assert_eq!(output, "1:Syntax error invalid token 3a\n");
}

#[test]
fn test_file_name_prefix() {
    let (_, output) = run_named(Some("prog.txt"), "int x;\nint x;");
    assert_eq!(output, "prog.txt:2:variable x was already declared\n");

    let (_, output) = run_named(Some("prog.txt"), "print 1/0;");
    assert_eq!(output, "prog.txt:1:DIVIDE BY ZERO\n");
}

#[test]
fn test_interpreter_keeps_declarations() {
    let mut out = Vec::new();
    let mut console = Console::new(None, &mut out);
    let mut interpreter = Interpreter::new();

    let first = interpreter.run("int x;", &mut console);
    let second = interpreter.run("int x;", &mut console);
    console.finish().unwrap();

    assert!(matches!(first, Ok(Outcome::Completed)));
    assert!(matches!(second, Ok(Outcome::Rejected)));
    assert_eq!(String::from_utf8(out).unwrap(), "1:variable x was already declared\n");
}
