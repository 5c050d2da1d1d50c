use crate::{ast::ast::ExprWrapper, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Ternary,
    Term,
    Factor,
    Unary,
}

pub type NudHandler = fn(&mut Parser) -> ExprWrapper;
pub type LedHandler = fn(&mut Parser, ExprWrapper, BindingPower) -> ExprWrapper;

// The token-kind set is closed, so handler dispatch is a match rather
// than a runtime lookup table.

pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Question => BindingPower::Ternary,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Term,
        TokenKind::Star | TokenKind::Slash => BindingPower::Factor,
        _ => BindingPower::Default,
    }
}

pub fn nud_handler(kind: TokenKind) -> Option<NudHandler> {
    match kind {
        TokenKind::Number => Some(parse_primary_expr),
        TokenKind::Dash | TokenKind::Not => Some(parse_prefix_expr),
        _ => None,
    }
}

pub fn led_handler(kind: TokenKind) -> Option<LedHandler> {
    match kind {
        TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash => {
            Some(parse_binary_expr)
        }
        TokenKind::Question => Some(parse_ternary_expr),
        _ => None,
    }
}
