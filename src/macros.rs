//! Utility macros for the parser crate.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_OPERATOR_HANDLER!` - Creates a lexer handler for single-character operators
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a fixed single-character operator.
///
/// Generates a handler function that builds a token with the given kind
/// and advances the lexer position past the operator.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal operator text
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r"^\+").unwrap(),
///     handler: MK_OPERATOR_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_OPERATOR_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let span = Span {
                start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
                end: Position((lexer.pos + $value.len()) as u32, Rc::clone(&lexer.file)),
            };
            lexer.advance_n($value.len());
            MK_TOKEN!($kind, String::from($value), span)
        }
    };
}
