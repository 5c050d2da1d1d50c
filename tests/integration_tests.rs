//! Integration tests for end-to-end parsing.
//!
//! These tests verify that the complete pipeline works correctly from an
//! expression string through tokenization and parsing to the rendered tree,
//! including the error-recovery behaviour the shell relies on.

use exparse::{
    ast::ast::{Expr, ExprType},
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::{parse, Parser},
};

#[test]
fn test_parse_simple_expression() {
    let (parser, expr) = parse("1+2".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(+ 1 2)");
}

#[test]
fn test_parse_mixed_precedence() {
    let (parser, expr) = parse(
        "1+2*3-4/2".to_string(),
        Some("test.expr".to_string()),
    );

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(- (+ 1 (* 2 3)) (/ 4 2))");
}

#[test]
fn test_parse_ternary_over_arithmetic() {
    let (parser, expr) = parse(
        "1+1?2*3:4-5".to_string(),
        Some("test.expr".to_string()),
    );

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(? (+ 1 1) (* 2 3) (- 4 5))");
}

#[test]
fn test_parse_unary_chain() {
    let (parser, expr) = parse("-!-1".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(- (! (- 1)))");
}

#[test]
fn test_tokenize_then_parse_agree_on_errors() {
    let source = "1@2";

    let tokens = tokenize(source.to_string(), Some("test.expr".to_string()));
    assert!(tokens.iter().any(|token| token.kind == TokenKind::Error));

    let (parser, _) = parse(source.to_string(), Some("test.expr".to_string()));
    assert!(parser.had_error());
}

#[test]
fn test_malformed_input_still_yields_tree() {
    let (parser, expr) = parse("1?2".to_string(), Some("test.expr".to_string()));

    assert!(parser.had_error());
    assert!(!parser.diagnostics().is_empty());
    assert_eq!(expr.get_expr_type(), ExprType::Ternary);
}

#[test]
fn test_parser_instances_are_independent() {
    // One bad parse must not poison a later one
    let (bad, _) = parse("@".to_string(), Some("test.expr".to_string()));
    assert!(bad.had_error());

    let (good, expr) = parse("2*2".to_string(), Some("test.expr".to_string()));
    assert!(!good.had_error());
    assert_eq!(expr.to_sexpr(), "(* 2 2)");
}

#[test]
fn test_expression_method_on_fresh_parser() {
    let mut parser = Parser::new("7*8".to_string(), Some("test.expr".to_string()));
    let expr = parser.expression();

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(* 7 8)");
}

#[test]
fn test_diagnostics_carry_positions() {
    let (parser, _) = parse("1 2".to_string(), Some("test.expr".to_string()));

    assert!(parser.had_error());
    let error = &parser.diagnostics()[0];
    assert_eq!(error.get_position().0, 2);
    assert_eq!(*error.get_position().1, "test.expr");
}
