//! Token dump for debugging queries

use crate::ast::{Token, TokenKind};
use crate::lexer::{LexError, Lexer};

/// Every token of a query plus whatever the lexer had to skip
#[derive(Debug, Clone, PartialEq)]
pub struct TokenListing {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl TokenListing {
    /// One line per token (`line KIND value`), then one per diagnostic.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.tokens.iter().map(format_token).collect();
        lines.extend(self.errors.iter().map(|e| format!("error: {}", e)));
        lines
    }
}

fn format_token(token: &Token) -> String {
    let kind = token.kind.name();
    match &token.kind {
        TokenKind::Name(name) => format!("{:>4} {} {}", token.line, kind, name),
        TokenKind::Number(n) => format!("{:>4} {} {}", token.line, kind, n),
        TokenKind::String(s) => format!("{:>4} {} {:?}", token.line, kind, s),
        _ => format!("{:>4} {}", token.line, kind),
    }
}

pub fn list_tokens(query: &str) -> TokenListing {
    let (tokens, errors) = Lexer::tokenize(query);
    TokenListing { tokens, errors }
}
