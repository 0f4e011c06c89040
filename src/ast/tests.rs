//! Unit tests for AST rendering.

use crate::Span;

use super::{
    ast::{Expr, Program, Stmt},
    expressions::{CallExpr, Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

fn span() -> Span {
    Span {
        start: crate::Position::null(),
        end: crate::Position::null(),
    }
}

fn ident(name: &str) -> Identifier {
    Identifier {
        value: name.to_string(),
        span: span(),
    }
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerLiteral {
        value,
        span: span(),
    })
}

#[test]
fn test_let_statement_display() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
            span: span(),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_operator_display_is_parenthesized() {
    let expr = Expr::Infix(InfixExpr {
        left: Box::new(Expr::Prefix(PrefixExpr {
            operator: "-".to_string(),
            right: Box::new(Expr::Identifier(ident("a"))),
            span: span(),
        })),
        operator: "*".to_string(),
        right: Box::new(int(2)),
        span: span(),
    });

    assert_eq!(expr.to_string(), "((-a) * 2)");
}

#[test]
fn test_program_display_concatenates_statements() {
    let call = Expr::Call(CallExpr {
        callee: Box::new(Expr::Identifier(ident("add"))),
        arguments: vec![int(1), int(2)],
        span: span(),
    });

    let program = Program {
        statements: vec![
            Stmt::Return(ReturnStmt {
                value: int(10),
                span: span(),
            }),
            Stmt::Expression(ExpressionStmt {
                expression: call,
                span: span(),
            }),
        ],
    };

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "return 10;add(1, 2);");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
}
