use std::fmt;

/// A classified lexical unit together with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /// 1-based line number, used only for diagnostics
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Token { kind, line }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    /// `SELECT`, matched case-insensitively like every keyword
    Select,

    /// `FROM`
    From,

    /// `WHERE`
    Where,

    /// `LIMIT`
    Limit,

    /// Logical conjunction
    ///
    /// # Examples
    /// ```text
    /// a = 1 and b = 2
    /// ```
    And,

    /// Logical disjunction
    ///
    /// # Examples
    /// ```text
    /// a = 1 OR b = 2
    /// ```
    Or,

    /// `ORDER`, only meaningful when followed by `BY`
    Order,

    /// `BY`
    By,

    // Literals and identifiers
    /// Identifier that is not a reserved word, original case preserved
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores.
    ///
    /// # Examples
    /// ```text
    /// users
    /// CreatedAt
    /// _hidden
    /// ```
    Name(String),

    /// Unsigned integer literal
    ///
    /// # Examples
    /// ```text
    /// 0
    /// 42
    /// ```
    Number(i64),

    /// Single-quoted string literal with `\'` and `\\` already resolved
    ///
    /// # Examples
    /// ```text
    /// 'hello'
    /// 'it\'s'
    /// ```
    String(String),

    // Punctuation
    /// Equality operator `=`
    Equals,

    /// Left parenthesis for grouping or function application
    LParen,

    /// Right parenthesis
    RParen,

    /// `*` in a column list
    Star,

    /// Separator between column specifications
    Comma,

    /// End of input
    End,
}

impl TokenKind {
    /// Looks up a reserved word. The caller passes the identifier as written;
    /// matching is case-insensitive.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        let kind = match ident.to_ascii_uppercase().as_str() {
            "SELECT" => TokenKind::Select,
            "FROM" => TokenKind::From,
            "WHERE" => TokenKind::Where,
            "LIMIT" => TokenKind::Limit,
            "AND" => TokenKind::And,
            "OR" => TokenKind::Or,
            "ORDER" => TokenKind::Order,
            "BY" => TokenKind::By,
            _ => return None,
        };
        Some(kind)
    }

    /// Upper-case kind name, e.g. `SELECT`, `NAME`, `END`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::Limit => "LIMIT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Order => "ORDER",
            TokenKind::By => "BY",
            TokenKind::Name(_) => "NAME",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::String(_) => "STRING",
            TokenKind::Equals => "EQUALS",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Star => "STAR",
            TokenKind::Comma => "COMMA",
            TokenKind::End => "END",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Select
                | TokenKind::From
                | TokenKind::Where
                | TokenKind::Limit
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Order
                | TokenKind::By
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name(name) => write!(f, "NAME({})", name),
            TokenKind::Number(n) => write!(f, "NUMBER({})", n),
            TokenKind::String(s) => write!(f, "STRING({:?})", s),
            other => f.write_str(other.name()),
        }
    }
}
