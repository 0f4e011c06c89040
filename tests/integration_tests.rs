//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API the way an embedding program would:
//! source text in, a program plus diagnostics out.

use pratt::{
    ast::ast::{Expr, Stmt},
    lexer::{lexer::Lexer, lexer::tokenize, source::TokenStream},
    parse, render_diagnostic, Parser, ParserConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

const PROGRAM: &str = "
let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);

let max = fn(a, b) {
  if (a > b) { return a; } else { return b; }
};

!-5 * 10 == -50;
max(result, 0x20)
";

#[test]
fn test_parse_full_program() {
    init_tracing();

    let (parser, program) = parse(PROGRAM.to_string(), Some("program.pratt".to_string()));

    assert!(parser.errors().is_empty(), "{:?}", parser.errors());
    assert_eq!(program.len(), 7);

    let names: Vec<&str> = program
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::Let(stmt) => Some(stmt.name.value.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["five", "ten", "add", "result", "max"]);

    assert_eq!(
        program.statements[5].to_string(),
        "(((!(-5)) * 10) == (-50));"
    );
    assert_eq!(program.statements[6].to_string(), "max(result, 32);");
}

#[test]
fn test_function_body_statements() {
    let (parser, program) = parse(PROGRAM.to_string(), None);
    assert!(parser.errors().is_empty());

    let Stmt::Let(max) = &program.statements[4] else {
        panic!("expected let statement");
    };
    let Expr::Function(function) = &max.value else {
        panic!("expected function literal");
    };
    assert_eq!(function.parameters.len(), 2);

    let Stmt::Expression(body) = &function.body.body[0] else {
        panic!("expected expression statement");
    };
    let Expr::If(branch) = &body.expression else {
        panic!("expected if expression");
    };
    assert_eq!(branch.consequence.to_string(), "{ return a; }");
    assert_eq!(
        branch.alternative.as_ref().map(|b| b.to_string()),
        Some("{ return b; }".to_string())
    );
}

#[test]
fn test_rendered_program_reparses() {
    let (_, program) = parse(PROGRAM.to_string(), None);
    let rendered = program.to_string();

    let (parser, reparsed) = parse(rendered.clone(), None);

    assert!(parser.errors().is_empty(), "{:?}", parser.errors());
    assert_eq!(reparsed.to_string(), rendered);
}

#[test]
fn test_reports_every_bad_statement() {
    init_tracing();

    let source = "
let x 5;
let = 10;
let 838383;
let ok = 1;
return;
let big = 99999999999999999999;
";

    let (parser, program) = parse(source.to_string(), Some("bad.pratt".to_string()));

    assert_eq!(
        parser.errors(),
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "expected next token to be IDENT, got INT instead",
            "no prefix parse function for ; found",
            "could not parse \"99999999999999999999\" as integer",
        ]
    );
    assert_eq!(program.to_string(), "let ok = 1;");
}

#[test]
fn test_render_diagnostic_points_at_token() {
    let source = "let ok = 1;\n  let x 5;\n";
    let (parser, _) = parse(source.to_string(), Some("caret.pratt".to_string()));

    let rendered = render_diagnostic(&parser.diagnostics()[0], source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Error: UnexpectedToken (expected `=`, found `INT`)");
    assert_eq!(lines[1], "-> caret.pratt");
    assert_eq!(lines[3], "2 | let x 5;");
    assert_eq!(lines[4], "  | ------^");
}

#[test]
fn test_render_diagnostic_after_multibyte_text() {
    let source = "é; let x 5;";
    let (parser, _) = parse(source.to_string(), Some("caret.pratt".to_string()));

    assert_eq!(
        parser.errors(),
        vec![
            "no prefix parse function for ILLEGAL found",
            "expected next token to be =, got INT instead",
        ]
    );

    let rendered = render_diagnostic(&parser.diagnostics()[1], source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[3], "1 | é; let x 5;");
    assert_eq!(lines[4], "  | ---------^");
}

#[test]
fn test_recovery_inside_function_body() {
    let source = "
let f = fn(x) {
  let = x;
  return x;
};
let z = f(3);
";

    let (parser, program) = parse(source.to_string(), None);

    assert_eq!(parser.errors(), vec!["expected next token to be IDENT, got = instead"]);
    assert_eq!(program.to_string(), "let z = f(3);");
}

#[test]
fn test_parse_prescanned_tokens() {
    let tokens = tokenize("let y = (1 + 2) * 3;".to_string(), None);

    let mut parser = Parser::new(TokenStream::from(tokens));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "let y = ((1 + 2) * 3);");
}

#[test]
fn test_deeply_nested_input_is_bounded() {
    let depth = 64;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));

    let mut parser = Parser::with_config(
        Lexer::new(source.clone(), None),
        ParserConfig::default().with_max_depth(32),
    );
    let program = parser.parse_program();

    assert!(program.is_empty());
    assert_eq!(parser.errors(), vec!["expression nesting exceeds limit of 32"]);

    let (parser, program) = parse(source, None);
    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "1;");
}

#[test]
fn test_independent_parsers_agree() {
    let first = parse(PROGRAM.to_string(), None);
    let second = parse(PROGRAM.to_string(), None);

    assert_eq!(first.1, second.1);
    assert_eq!(first.0.errors(), second.0.errors());
}
