//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser uses a Pratt
//! approach with NUD/LED handlers for expression parsing, pulling tokens
//! from the lexer one lookahead token at a time.
//!
//! Errors never abort a parse. Diagnostics are recorded on the parser and
//! an error placeholder node is substituted where no expression could be
//! built; the caller inspects `had_error` to decide whether to trust the
//! tree.

use crate::{
    ast::ast::ExprWrapper,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::{expr::parse_expr, lookups::BindingPower};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and keeps exactly two tokens alive: the
/// most recently consumed token and the single lookahead token. The error
/// flags implement panic-mode recovery.
pub struct Parser {
    /// The lexer tokens are pulled from on demand
    lexer: Lexer,
    /// The most recently consumed token
    previous: Token,
    /// The lookahead token, not yet consumed
    current: Token,
    /// Sticky flag, set by the first recorded diagnostic of a parse
    had_error: bool,
    /// Transient flag suppressing cascading diagnostics until the next
    /// token is accepted
    panic_mode: bool,
    /// Every diagnostic recorded during the parse, in source order
    diagnostics: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser instance over one input string.
    ///
    /// Constructs the lexer and primes the first lookahead token, so
    /// `expression` can be called immediately.
    ///
    /// # Arguments
    ///
    /// * `source` - The expression text to parse
    /// * `file` - Optional source label for diagnostics (defaults to "shell")
    pub fn new(source: String, file: Option<String>) -> Self {
        let lexer = Lexer::new(source, file);
        let placeholder = MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span {
                start: Position::null(),
                end: Position::null(),
            }
        );

        let mut parser = Parser {
            lexer,
            previous: placeholder.clone(),
            current: placeholder,
            had_error: false,
            panic_mode: false,
            diagnostics: vec![],
        };

        parser.advance();
        parser
    }

    /// Returns the lookahead token without consuming it.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the most recently consumed token.
    pub fn previous_token(&self) -> &Token {
        &self.previous
    }

    /// Consumes the lookahead token and returns it.
    ///
    /// `Error`-kind tokens coming out of the lexer are reported here and
    /// skipped, so the rest of the parser only ever sees well-formed
    /// tokens. Accepting a token clears `panic_mode`: this is the
    /// resynchronization point, giving one report per contiguous region
    /// of bad input.
    pub fn advance(&mut self) -> &Token {
        let mut next = self.lexer.scan_token();

        while next.kind == TokenKind::Error {
            let position = next.span.start.clone();
            self.report(
                ErrorImpl::LexicalError {
                    message: next.value.clone(),
                },
                position,
            );
            next = self.lexer.scan_token();
        }

        self.previous = std::mem::replace(&mut self.current, next);
        self.panic_mode = false;

        &self.previous
    }

    /// Consumes a token of the expected kind, recording `error` if the
    /// lookahead token does not match.
    ///
    /// On a mismatch the lookahead token is left in place and parsing
    /// proceeds on a best-effort basis.
    pub fn consume(&mut self, expected_kind: TokenKind, error: ErrorImpl) {
        if self.current.kind == expected_kind {
            self.advance();
            return;
        }

        let position = self.current.span.start.clone();
        self.report(error, position);
    }

    /// Records a diagnostic, subject to panic-mode suppression.
    ///
    /// `had_error` is sticky for the lifetime of the parse; `panic_mode`
    /// swallows follow-on reports until `advance` accepts a new token.
    pub fn report(&mut self, error: ErrorImpl, position: Position) {
        if self.panic_mode {
            return;
        }

        self.panic_mode = true;
        self.had_error = true;
        self.diagnostics.push(Error::new(error, position));
    }

    /// Parses one complete expression and requires the input to end there.
    ///
    /// Trailing tokens are reported but the already-built tree is still
    /// returned. This never fails: malformed input yields a tree containing
    /// error placeholder nodes, with `had_error` set.
    pub fn expression(&mut self) -> ExprWrapper {
        let expr = parse_expr(self, BindingPower::Default);

        let trailing = self.current.describe();
        self.consume(
            TokenKind::EOF,
            ErrorImpl::ExpectedEndOfExpression { token: trailing },
        );

        expr
    }

    /// Returns whether any diagnostic fired during the parse.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Returns the recorded diagnostics, in source order.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }
}

/// Parses one expression from a source string.
///
/// This is the main entry point. It builds a parser, parses a single
/// complete expression and hands back both so the caller can inspect
/// `had_error` and the diagnostics alongside the tree.
///
/// # Arguments
///
/// * `source` - The expression text to parse
/// * `file` - Optional source label for diagnostics
pub fn parse(source: String, file: Option<String>) -> (Parser, ExprWrapper) {
    let mut parser = Parser::new(source, file);
    let expr = parser.expression();

    (parser, expr)
}
