use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{BinaryExpr, ErrorExpr, NumberExpr, PrefixExpr, TernaryExpr},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{binding_power, led_handler, nud_handler, BindingPower},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> ExprWrapper {
    // First parse NUD
    parser.advance();
    let token = parser.previous_token().clone();

    let nud_fn = match nud_handler(token.kind) {
        Some(nud_fn) => nud_fn,
        None => {
            parser.report(
                ErrorImpl::ExpectedExpression {
                    token: token.describe(),
                },
                token.span.start.clone(),
            );
            return ExprWrapper::new(ErrorExpr { span: token.span });
        }
    };

    let mut left = nud_fn(parser);

    // While the current token binds tighter than `bp`, continue extending lhs
    while binding_power(parser.current_token_kind()) > bp {
        let led_fn = match led_handler(parser.current_token_kind()) {
            Some(led_fn) => led_fn,
            None => break,
        };

        left = led_fn(parser, left, binding_power(parser.current_token_kind()));
    }

    left
}

pub fn parse_primary_expr(parser: &mut Parser) -> ExprWrapper {
    let token = parser.previous_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => ExprWrapper::new(NumberExpr {
            value,
            span: token.span,
        }),
        Err(_) => {
            parser.report(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            );
            ExprWrapper::new(ErrorExpr { span: token.span })
        }
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> ExprWrapper {
    let operator_token = parser.previous_token().clone();
    let rhs = parse_expr(parser, BindingPower::Unary);

    ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right_expr: rhs,
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: ExprWrapper, bp: BindingPower) -> ExprWrapper {
    let operator_token = parser.advance().clone();

    // The right operand parses at the operator's own binding power; the
    // strict inequality in the parse_expr loop makes `+ - * /` left
    // associative.
    let right = parse_expr(parser, bp);

    ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    })
}

pub fn parse_ternary_expr(
    parser: &mut Parser,
    condition: ExprWrapper,
    _bp: BindingPower,
) -> ExprWrapper {
    parser.advance(); // past the `?`

    // Both branches parse at the lowest binding power, so the else branch
    // may itself be a ternary.
    let then_branch = parse_expr(parser, BindingPower::Default);

    let colon_token = parser.current_token().describe();
    parser.consume(TokenKind::Colon, ErrorImpl::ExpectedColon { token: colon_token });

    let else_branch = parse_expr(parser, BindingPower::Default);

    ExprWrapper::new(TernaryExpr {
        span: Span {
            start: condition.get_span().start.clone(),
            end: else_branch.get_span().end.clone(),
        },
        condition,
        then_branch,
        else_branch,
    })
}
