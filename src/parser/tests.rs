//! Unit tests for the parser module.
//!
//! This module contains tests for parsing expressions including:
//! - Literals and prefix operators
//! - Precedence and associativity
//! - The ternary conditional
//! - Error recovery and diagnostics

use crate::ast::ast::{Expr, ExprType};
use crate::ast::expressions::{BinaryExpr, NumberExpr, TernaryExpr};
use crate::lexer::tokens::TokenKind;

use super::parser::parse;

#[test]
fn test_parse_number_literal() {
    let (parser, expr) = parse("42".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.get_expr_type(), ExprType::Number);
    assert_eq!(expr.as_any().downcast_ref::<NumberExpr>().unwrap().value, 42);
}

#[test]
fn test_parse_precedence() {
    // Multiplication binds tighter than addition
    let (parser, expr) = parse("1+2*3".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(+ 1 (* 2 3))");

    let binary = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(binary.operator.kind, TokenKind::Plus);
    assert_eq!(binary.left.get_expr_type(), ExprType::Number);

    let right = binary.right.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(right.operator.kind, TokenKind::Star);
}

#[test]
fn test_parse_left_associativity() {
    let (parser, expr) = parse("1-2-3".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(- (- 1 2) 3)");
}

#[test]
fn test_parse_division_and_multiplication_left_associative() {
    let (parser, expr) = parse("8/4*2".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(* (/ 8 4) 2)");
}

#[test]
fn test_parse_ternary() {
    let (parser, expr) = parse("1?2:3".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(? 1 2 3)");
}

#[test]
fn test_parse_ternary_nesting() {
    // The else branch may itself be a ternary
    let (parser, expr) = parse("1?2:3?4:5".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(? 1 2 (? 3 4 5))");

    let ternary = expr.as_any().downcast_ref::<TernaryExpr>().unwrap();
    assert_eq!(ternary.else_branch.get_expr_type(), ExprType::Ternary);
}

#[test]
fn test_parse_ternary_with_binary_condition() {
    let (parser, expr) = parse("1+2?3:4".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(? (+ 1 2) 3 4)");
}

#[test]
fn test_parse_unary_binds_tighter_than_factor() {
    let (parser, expr) = parse("-1*2".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(* (- 1) 2)");
}

#[test]
fn test_parse_nested_unary() {
    let (parser, expr) = parse("!!1".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(! (! 1))");
}

#[test]
fn test_parse_unary_not_with_ternary() {
    let (parser, expr) = parse("!1?2:3".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());
    assert_eq!(expr.to_sexpr(), "(? (! 1) 2 3)");
}

#[test]
fn test_parse_lexical_error_recovers() {
    let (parser, expr) = parse("1@2".to_string(), Some("test.expr".to_string()));

    assert!(parser.had_error());
    assert_eq!(parser.diagnostics()[0].get_error_name(), "LexicalError");
    // The tree built before the bad character is still returned
    assert_eq!(expr.get_expr_type(), ExprType::Number);
}

#[test]
fn test_parse_contiguous_bad_region_reports_once() {
    let (parser, _) = parse("@@@".to_string(), Some("test.expr".to_string()));

    assert!(parser.had_error());
    // One report for the region, one for the missing expression after it
    assert_eq!(parser.diagnostics().len(), 2);
    assert_eq!(parser.diagnostics()[0].get_error_name(), "LexicalError");
    assert_eq!(
        parser.diagnostics()[1].get_error_name(),
        "ExpectedExpression"
    );
}

#[test]
fn test_parse_missing_colon() {
    let (parser, expr) = parse("1?2".to_string(), Some("test.expr".to_string()));

    assert!(parser.had_error());
    assert_eq!(parser.diagnostics()[0].get_error_name(), "ExpectedColon");

    // A best-effort ternary is still produced, with a placeholder else branch
    assert_eq!(expr.get_expr_type(), ExprType::Ternary);
    let ternary = expr.as_any().downcast_ref::<TernaryExpr>().unwrap();
    assert_eq!(ternary.else_branch.get_expr_type(), ExprType::Error);
}

#[test]
fn test_parse_trailing_tokens() {
    let (parser, expr) = parse("1 2".to_string(), Some("test.expr".to_string()));

    assert!(parser.had_error());
    assert_eq!(parser.diagnostics().len(), 1);
    assert_eq!(
        parser.diagnostics()[0].get_error_name(),
        "ExpectedEndOfExpression"
    );
    assert_eq!(expr.to_sexpr(), "1");
}

#[test]
fn test_parse_missing_prefix() {
    let (parser, expr) = parse("*3".to_string(), Some("test.expr".to_string()));

    assert!(parser.had_error());
    assert_eq!(
        parser.diagnostics()[0].get_error_name(),
        "ExpectedExpression"
    );
    assert_eq!(expr.get_expr_type(), ExprType::Error);
}

#[test]
fn test_parse_empty_input() {
    let (parser, expr) = parse("".to_string(), Some("test.expr".to_string()));

    assert!(parser.had_error());
    assert_eq!(expr.get_expr_type(), ExprType::Error);
}

#[test]
fn test_parse_number_out_of_range() {
    let (parser, expr) = parse(
        "99999999999999999999999999".to_string(),
        Some("test.expr".to_string()),
    );

    assert!(parser.had_error());
    assert_eq!(parser.diagnostics()[0].get_error_name(), "NumberParseError");
    assert_eq!(expr.get_expr_type(), ExprType::Error);
}

#[test]
fn test_parse_largest_i64() {
    let (parser, expr) = parse(
        "9223372036854775807".to_string(),
        Some("test.expr".to_string()),
    );

    assert!(!parser.had_error());
    assert_eq!(
        expr.as_any().downcast_ref::<NumberExpr>().unwrap().value,
        i64::MAX
    );
}

#[test]
fn test_parse_whitespace_only_input() {
    let (parser, expr) = parse("   \t ".to_string(), Some("test.expr".to_string()));

    assert!(parser.had_error());
    assert_eq!(expr.get_expr_type(), ExprType::Error);
}

#[test]
fn test_cloned_tree_is_independent() {
    let (parser, expr) = parse("1?2:3*4".to_string(), Some("test.expr".to_string()));

    assert!(!parser.had_error());

    let cloned = expr.clone();
    drop(expr);
    assert_eq!(cloned.to_sexpr(), "(? 1 2 (* 3 4))");
}
