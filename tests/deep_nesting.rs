use pretty_assertions::assert_eq;

fn output(source: &str) -> String {
    let mut out = Vec::new();
    bx0::interpret(source, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn long_operator_chain() {
    let terms = 200_000;
    let source = format!("print(1{});", " + 1".repeat(terms - 1));
    assert_eq!(output(&source), format!("{}\n", terms));
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 100_000;
    let source = format!("print({}1{});", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(output(&source), "1\n");
}

#[test]
fn long_unary_chain() {
    let source = format!("x = 5; print({}x);", "- ".repeat(100_000));
    assert_eq!(output(&source), "5\n");
}

#[test]
fn deep_tree_can_be_parsed_and_dropped() {
    let depth = 100_000;
    let source = format!("x = {}1{};", "(2 * ".repeat(depth), ")".repeat(depth));
    let program = bx0::parse(&source).unwrap();
    assert_eq!(program.statements.len(), 1);
    drop(program);
}

#[test]
fn deep_tree_renders_as_s_expression() {
    let source = format!("print(1{});", " - 1".repeat(50_000));
    let program = bx0::parse(&source).unwrap();
    let rendered = program.to_string();
    assert!(rendered.starts_with("(print (binop - (binop - "));
    assert_eq!(rendered.matches("(num 1)").count(), 50_001);
}
