use crate::ast::{Token, TokenKind};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::warn;

/// Characters that end a plain run inside a string literal.
static STRING_SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['\\]").expect("string special pattern is valid"));

/// Problem found while tokenizing. The lexer records it and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Illegal character '{character}' at line {line}")]
    IllegalCharacter { character: char, line: usize },

    #[error("Unterminated string literal at line {line}")]
    UnterminatedString { line: usize },

    #[error("Invalid escape '\\{escape}' in string literal at line {line}")]
    InvalidEscape { escape: char, line: usize },

    #[error("Integer literal {literal} out of range at line {line}")]
    NumberOutOfRange { literal: String, line: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::IllegalCharacter { line, .. }
            | LexError::UnterminatedString { line }
            | LexError::InvalidEscape { line, .. }
            | LexError::NumberOutOfRange { line, .. } => *line,
        }
    }
}

/// Pull-based tokenizer. Each call to [`Lexer::next_token`] scans just far
/// enough to produce one token; the stream ends with a single `End`.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    errors: Vec<LexError>,
    finished: bool,

    /// Offset of a quote already known to have no closing quote. Every later
    /// quote fails the same way, so it is not rescanned.
    unterminated_from: Option<usize>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            line: 1,
            errors: Vec::new(),
            finished: false,
            unterminated_from: None,
        }
    }

    /// Tokenizes the whole input, `End` included.
    pub fn tokenize(input: &str) -> (Vec<Token>, Vec<LexError>) {
        let mut lexer = Lexer::new(input);
        let tokens: Vec<Token> = lexer.by_ref().collect();
        (tokens, lexer.take_errors())
    }

    /// Diagnostics recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            if ch == '\n' {
                self.line += 1;
            }
            self.position += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let input = self.input;
        let start = self.position;
        while let Some(ch) = self.current_char() {
            if accept(ch) {
                self.advance();
            } else {
                break;
            }
        }
        &input[start..self.position]
    }

    fn read_identifier(&mut self) -> TokenKind {
        let ident = self.read_while(|c| c.is_ascii_alphanumeric() || c == '_');
        TokenKind::keyword(ident).unwrap_or_else(|| TokenKind::Name(ident.to_string()))
    }

    fn read_number(&mut self) -> Option<TokenKind> {
        let line = self.line;
        let digits = self.read_while(|c| c.is_ascii_digit());
        match digits.parse::<i64>() {
            Ok(n) => Some(TokenKind::Number(n)),
            Err(_) => {
                self.report(LexError::NumberOutOfRange {
                    literal: digits.to_string(),
                    line,
                });
                None
            }
        }
    }

    /// Reads a quoted string. Only `\'` and `\\` are valid escapes; a literal
    /// containing any other escape is consumed whole and reported.
    fn read_string(&mut self) -> Option<TokenKind> {
        let input = self.input;
        let start = self.position;
        if self.unterminated_from.is_some_and(|from| from < start) {
            return self.unterminated();
        }

        let mut result = String::new();
        let mut invalid = vec![];
        let mut cursor = start + 1;
        let end = loop {
            let Some(special) = STRING_SPECIAL.find_at(input, cursor) else {
                self.unterminated_from = Some(start);
                return self.unterminated();
            };
            result.push_str(&input[cursor..special.start()]);
            if special.as_str() == "'" {
                break special.end();
            }

            let Some(escaped) = input[special.end()..].chars().next() else {
                self.unterminated_from = Some(start);
                return self.unterminated();
            };
            match escaped {
                '\'' | '\\' => result.push(escaped),
                other => invalid.push((other, special.start())),
            }
            cursor = special.end() + escaped.len_utf8();
        };

        let (mut line, mut counted) = (self.line, start);
        for &(escape, offset) in &invalid {
            line += input[counted..offset].matches('\n').count();
            counted = offset;
            self.report(LexError::InvalidEscape { escape, line });
        }
        while self.position < end {
            self.advance();
        }
        invalid.is_empty().then_some(TokenKind::String(result))
    }

    fn unterminated(&mut self) -> Option<TokenKind> {
        self.report(LexError::UnterminatedString { line: self.line });
        self.advance(); // skip the opening quote only
        None
    }

    fn report(&mut self, error: LexError) {
        warn!(target: "selectql::lexer", %error, "lex error");
        self.errors.push(error);
    }

    /// Scans the next token, recording and skipping anything illegal.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            let line = self.line;

            let kind = match self.current_char() {
                None => Some(TokenKind::End),
                Some('=') => {
                    self.advance();
                    Some(TokenKind::Equals)
                }
                Some('(') => {
                    self.advance();
                    Some(TokenKind::LParen)
                }
                Some(')') => {
                    self.advance();
                    Some(TokenKind::RParen)
                }
                Some('*') => {
                    self.advance();
                    Some(TokenKind::Star)
                }
                Some(',') => {
                    self.advance();
                    Some(TokenKind::Comma)
                }
                Some('\'') => self.read_string(),
                Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => Some(self.read_identifier()),
                Some(ch) if ch.is_ascii_digit() => self.read_number(),
                Some(ch) => {
                    self.report(LexError::IllegalCharacter {
                        character: ch,
                        line,
                    });
                    self.advance();
                    None
                }
            };

            if let Some(kind) = kind {
                return Token::new(kind, line);
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_end();
        Some(token)
    }
}
