use super::*;
use crate::context::EmitContext;
use crate::options::FormatOptions;
use crate::printer::{PrintCallback, Printer, print_node};

fn print(node: &Node) -> String {
    print_node(node, FormatOptions::default()).expect("printable")
}

fn print_with(node: &Node, options: FormatOptions) -> String {
    print_node(node, options).expect("printable")
}

// =========================================================================
// Unary / update
// =========================================================================

#[test]
fn test_word_unary_operator_takes_a_space() {
    assert_eq!(print(&Node::unary("typeof", Node::id("x"))), "typeof x");
    assert_eq!(print(&Node::unary("void", Node::number(0.0))), "void 0");
    assert_eq!(
        print(&Node::unary("delete", Node::prop(Node::id("o"), "k"))),
        "delete o.k"
    );
}

#[test]
fn test_symbolic_unary_operator_is_tight() {
    assert_eq!(print(&Node::unary("-", Node::id("x"))), "-x");
    assert_eq!(print(&Node::unary("!", Node::id("x"))), "!x");
    assert_eq!(print(&Node::unary("~", Node::id("x"))), "~x");
}

#[test]
fn test_unary_over_update_is_spaced() {
    let node = Node::unary("-", Node::update("++", Node::id("x"), true));
    assert_eq!(print(&node), "- ++x");
}

#[test]
fn test_unary_over_unary_is_spaced() {
    assert_eq!(
        print(&Node::unary("-", Node::unary("-", Node::id("x")))),
        "- -x"
    );
    assert_eq!(
        print(&Node::unary("+", Node::unary("~", Node::id("x")))),
        "+ ~x"
    );
}

#[test]
fn test_double_negation_is_tight() {
    let node = Node::unary("!", Node::unary("!", Node::id("x")));
    assert_eq!(print(&node), "!!x");

    // The `!` override applies to any outer operator.
    let node = Node::unary("-", Node::unary("!", Node::id("x")));
    assert_eq!(print(&node), "-!x");
    let node = Node::unary("typeof", Node::unary("!", Node::id("x")));
    assert_eq!(print(&node), "typeof!x");
}

#[test]
fn test_unary_needs_space_rules() {
    assert!(unary_needs_space("typeof", &Node::id("x")));
    assert!(!unary_needs_space("-", &Node::id("x")));
    assert!(unary_needs_space("-", &Node::update("--", Node::id("x"), false)));
    assert!(!unary_needs_space("!", &Node::unary("!", Node::id("x"))));
    assert!(!unary_needs_space("", &Node::id("x")));
}

#[test]
fn test_update_prefix_and_postfix() {
    assert_eq!(print(&Node::update("++", Node::id("i"), true)), "++i");
    assert_eq!(print(&Node::update("--", Node::id("i"), false)), "i--");
}

// =========================================================================
// Yield / await
// =========================================================================

#[test]
fn test_yield_forms() {
    let delegate = Node::yield_expr(Some(Node::call(Node::id("gen"), vec![])), true);
    assert_eq!(print(&delegate), "yield* gen()");
    assert_eq!(print(&Node::yield_expr(Some(Node::id("v")), false)), "yield v");
    assert_eq!(print(&Node::yield_expr(None, false)), "yield");
    assert_eq!(print(&Node::yield_expr(None, true)), "yield*");
}

#[test]
fn test_await_forms() {
    assert_eq!(print(&Node::await_expr(None, false)), "await");
    assert_eq!(print(&Node::await_expr(Some(Node::id("p")), false)), "await p");
    assert_eq!(print(&Node::await_expr(Some(Node::id("ps")), true)), "await* ps");
}

#[test]
fn test_keyword_handler_rejects_other_shapes() {
    let handler = keyword_handler("yield");
    let table = DispatchTable::new();
    let mut ctx = EmitContext::default();
    let mut printer = Printer::new(&table);
    let err = handler(&mut ctx, &Node::id("x"), &mut printer).expect_err("wrong shape");
    assert_eq!(
        err,
        PrintError::UnexpectedNode {
            handler: "yield",
            found: NodeKind::Identifier
        }
    );
}

// =========================================================================
// Conditional / operator family
// =========================================================================

#[test]
fn test_conditional_is_fully_spaced() {
    let node = Node::conditional(Node::id("a"), Node::id("b"), Node::id("c"));
    assert_eq!(print(&node), "a ? b : c");
    assert_eq!(print_with(&node, FormatOptions::compact()), "a ? b : c");
}

#[test]
fn test_operator_family_renders_identically() {
    let nodes = [
        Node::assign_with(Node::id("x"), "+", Node::id("y")),
        Node::binary(Node::id("x"), "+", Node::id("y")),
        Node::logical(Node::id("x"), "+", Node::id("y")),
        Node::AssignmentPattern(esprint_ast::OperatorExpression {
            left: Box::new(Node::id("x")),
            operator: "+".to_string(),
            right: Box::new(Node::id("y")),
        }),
    ];
    for node in &nodes {
        assert_eq!(print(node), "x + y", "{}", node.kind());
    }
}

#[test]
fn test_operator_family_keeps_spaces_when_compact() {
    let node = Node::assign(Node::id("a"), Node::logical(Node::id("b"), "||", Node::id("c")));
    assert_eq!(print_with(&node, FormatOptions::compact()), "a = b || c");
    assert_eq!(
        print(&Node::assignment_pattern(Node::id("a"), Node::number(1.0))),
        "a = 1"
    );
}

// =========================================================================
// New / call
// =========================================================================

#[test]
fn test_new_expression() {
    assert_eq!(print(&Node::new_expr(Node::id("Foo"), vec![])), "new Foo()");
    assert_eq!(
        print(&Node::new_expr(
            Node::id("Foo"),
            vec![Node::id("a"), Node::number(2.0)]
        )),
        "new Foo(a, 2)"
    );
}

#[test]
fn test_call_expression_inline() {
    assert_eq!(print(&Node::call(Node::id("f"), vec![])), "f()");
    assert_eq!(
        print(&Node::call(Node::id("f"), vec![Node::id("a"), Node::id("b")])),
        "f(a, b)"
    );
}

#[test]
fn test_pretty_call_expands_one_argument_per_line() {
    let node = Node::pretty_call(Node::id("f"), vec![Node::id("a"), Node::id("b")]);
    assert_eq!(print(&node), "f(\n  a,\n  b\n)");
}

#[test]
fn test_pretty_call_stays_inline_when_retaining_lines() {
    let node = Node::pretty_call(Node::id("f"), vec![Node::id("a"), Node::id("b")]);
    assert_eq!(print_with(&node, FormatOptions::retain_lines()), "f(a, b)");
}

#[test]
fn test_nested_pretty_calls_indent_per_level() {
    let inner = Node::pretty_call(Node::id("g"), vec![Node::id("x")]);
    let node = Node::pretty_call(Node::id("f"), vec![inner, Node::id("y")]);
    assert_eq!(print(&node), "f(\n  g(\n    x\n  ),\n  y\n)");
}

#[test]
fn test_pretty_call_uses_configured_indent() {
    let node = Node::pretty_call(Node::id("f"), vec![Node::id("a")]);
    let options = FormatOptions {
        indent: "\t".to_string(),
        ..FormatOptions::default()
    };
    assert_eq!(print_with(&node, options), "f(\n\ta\n)");
}

// =========================================================================
// Member access
// =========================================================================

#[test]
fn test_member_dot_and_bracket() {
    assert_eq!(print(&Node::prop(Node::id("a"), "b")), "a.b");
    assert_eq!(
        print(&Node::member(Node::id("a"), Node::id("k"), true)),
        "a[k]"
    );
    assert_eq!(
        print(&Node::member(Node::id("a"), Node::string("k"), true)),
        "a[\"k\"]"
    );
}

#[test]
fn test_numeric_property_forces_brackets() {
    let node = Node::member(Node::id("foo"), Node::number(0.0), false);
    assert_eq!(print(&node), "foo[0]");
}

#[test]
fn test_string_property_does_not_force_brackets() {
    let node = Node::member(Node::id("foo"), Node::string("0"), false);
    assert_eq!(print(&node), "foo.\"0\"");
}

#[test]
fn test_member_property_must_be_computed() {
    let node = Node::member(
        Node::id("a"),
        Node::prop(Node::id("b"), "c"),
        false,
    );
    assert_eq!(
        print_node(&node, FormatOptions::default()),
        Err(PrintError::MemberExpressionProperty)
    );

    let computed = Node::member(Node::id("a"), Node::prop(Node::id("b"), "c"), true);
    assert_eq!(print(&computed), "a[b.c]");
}

#[test]
fn test_meta_property_is_always_dotted() {
    assert_eq!(print(&Node::meta_property("new", "target")), "new.target");
    assert_eq!(print(&Node::meta_property("import", "meta")), "import.meta");
}

// =========================================================================
// Trivial leaves and wrappers
// =========================================================================

#[test]
fn test_keywords() {
    assert_eq!(print(&Node::this()), "this");
    assert_eq!(print(&Node::super_keyword()), "super");
    assert_eq!(
        print(&Node::call(Node::prop(Node::super_keyword(), "m"), vec![])),
        "super.m()"
    );
}

#[test]
fn test_statements() {
    assert_eq!(print(&Node::empty_stmt()), ";");
    assert_eq!(
        print(&Node::expr_stmt(Node::assign(Node::id("x"), Node::number(1.0)))),
        "x = 1;"
    );
}

#[test]
fn test_sequence_expression() {
    let node = Node::sequence(vec![Node::id("a"), Node::id("b"), Node::id("c")]);
    assert_eq!(print(&node), "a, b, c");
    assert_eq!(print(&node.paren()), "(a, b, c)");
}

#[test]
fn test_do_expression() {
    assert_eq!(print(&Node::do_expr(Node::block(vec![]))), "do {}");
    let body = Node::block(vec![Node::expr_stmt(Node::id("x"))]);
    assert_eq!(print(&Node::do_expr(body)), "do {\n  x;\n}");
}

#[test]
fn test_decorator_ends_the_line() {
    let node = Node::decorator(Node::call(Node::id("dec"), vec![]));
    assert_eq!(print(&node), "@dec()\n");
    assert_eq!(print_with(&node, FormatOptions::compact()), "@dec()");
}

#[test]
fn test_bind_expression() {
    let node = Node::bind(Some(Node::id("obj")), Node::id("fn"));
    assert_eq!(print(&node), "obj::fn");
    let node = Node::bind(None, Node::prop(Node::id("obj"), "fn"));
    assert_eq!(print(&node), "::obj.fn");
}

#[test]
fn test_parenthesized_precedence_from_upstream() {
    let sum = Node::binary(Node::id("a"), "+", Node::id("b")).paren();
    let node = Node::binary(sum, "*", Node::id("c"));
    assert_eq!(print(&node), "(a + b) * c");
}

// =========================================================================
// Literals
// =========================================================================

#[test]
fn test_literal_values() {
    assert_eq!(print(&Node::null()), "null");
    assert_eq!(print(&Node::boolean(true)), "true");
    assert_eq!(print(&Node::boolean(false)), "false");
    assert_eq!(print(&Node::number(42.0)), "42");
    assert_eq!(print(&Node::number(1.5)), "1.5");
    assert_eq!(print(&Node::string("a\"b\\c\n")), "\"a\\\"b\\\\c\\n\"");
}

#[test]
fn test_literal_prefers_raw_text() {
    let node = Node::Literal(esprint_ast::Literal {
        value: esprint_ast::LiteralValue::Number(255.0),
        raw: Some("0xff".to_string()),
    });
    assert_eq!(print(&node), "0xff");
}

#[test]
fn test_format_number_special_values() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(-3.25), "-3.25");
}

// =========================================================================
// Shape checks
// =========================================================================

#[test]
fn test_handler_rejects_mismatched_node() {
    let table = DispatchTable::new();
    let mut ctx = EmitContext::default();
    let mut printer = Printer::new(&table);
    let err = emit_call_expression(&mut ctx, &Node::this(), &mut printer).expect_err("wrong shape");
    assert_eq!(
        err,
        PrintError::UnexpectedNode {
            handler: "CallExpression",
            found: NodeKind::ThisExpression
        }
    );
    assert!(printer.print(&mut ctx, &Node::id("ok")).is_ok());
}
