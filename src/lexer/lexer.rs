use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_OPERATOR_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\r\n]+").unwrap();
    static ref TOKEN_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^\\?").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Question, "?") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_OPERATOR_HANDLER!(TokenKind::Colon, ":") },
    ];
}

pub struct Lexer {
    source: String,
    start: usize,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            start: 0,
            pos: 0,
            file: file_name,
        }
    }

    /// Returns the next token and advances the cursor. Callable repeatedly;
    /// once the input is exhausted every further call yields `EOF`.
    /// Unrecognised input becomes an `Error` token, never a failure.
    pub fn scan_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        if self.at_eof() {
            let span = Span {
                start: Position(self.start as u32, Rc::clone(&self.file)),
                end: Position(self.start as u32, Rc::clone(&self.file)),
            };
            return MK_TOKEN!(TokenKind::EOF, String::new(), span);
        }

        for pattern in TOKEN_PATTERNS.iter() {
            if pattern.regex.is_match(self.remainder()) {
                return (pattern.handler)(self, &pattern.regex);
            }
        }

        // The offending character is still consumed, guaranteeing forward
        // progress. Multi-byte characters are consumed whole.
        let offending = self.at();
        let span = Span {
            start: Position(self.start as u32, Rc::clone(&self.file)),
            end: Position((self.start + offending.len_utf8()) as u32, Rc::clone(&self.file)),
        };
        self.advance_n(offending.len_utf8());

        MK_TOKEN!(TokenKind::Error, String::from("Unexpected character"), span)
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            let end = matched.end();
            self.advance_n(end);
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.remainder()
            .chars()
            .next()
            .expect("at() called past end of input")
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let span = Span {
        start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        end: Position((lexer.pos + matched.len()) as u32, Rc::clone(&lexer.file)),
    };
    lexer.advance_n(matched.len());

    MK_TOKEN!(TokenKind::Number, matched, span)
}

/// Scans the whole input eagerly. The stream always ends with an `EOF`
/// token; `Error` tokens appear inline, so this cannot fail.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.scan_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
