use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,
    Number,

    Question,
    Colon,
    Not, // !

    Plus,
    Dash,
    Slash,
    Star,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// Text shown in diagnostics: the lexeme, or the kind name for tokens
    /// without one (EOF).
    pub fn describe(&self) -> String {
        if self.value.is_empty() {
            self.kind.to_string()
        } else {
            self.value.clone()
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            write!(f, "{} ()", self.kind)
        } else {
            write!(f, "{} ({})", self.kind, self.value)
        }
    }
}
