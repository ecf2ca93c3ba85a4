use crate::{
    ast::{
        BinOp, ColumnSpec, ConditionExpr, Literal, Postposition, QueryStatement, Token,
        TokenKind, ValueExpr,
    },
    lexer::{LexError, Lexer},
};
use std::mem;
use thiserror::Error;
use tracing::debug;

/// Failure of a parse call. Every variant is fatal; nothing partial is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained characters the lexer could not classify
    #[error("Lexical error: {}", summarize(.0))]
    Lex(Vec<LexError>),

    /// The token stream does not match the grammar at this point
    #[error("Syntax error at line {line}: expected {expected}, got {found}")]
    Syntax {
        expected: String,
        found: String,
        line: usize,
    },

    /// `SELECT` followed directly by something that cannot start a column
    #[error("Syntax error at line {line}: empty column list before {found}")]
    EmptyColumnList { found: String, line: usize },
}

fn summarize(errors: &[LexError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::End => "end of input".to_string(),
        kind => kind.to_string(),
    }
}

impl ParseError {
    /// Line of the first problem, when one is known.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Lex(errors) => errors.first().map(LexError::line),
            ParseError::Syntax { line, .. } | ParseError::EmptyColumnList { line, .. } => {
                Some(*line)
            }
        }
    }

    /// True for grammar failures, including the empty column list.
    pub fn is_syntax(&self) -> bool {
        !matches!(self, ParseError::Lex(_))
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
        }
    }

    /// Moves to the next token and hands back the one that was current.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current_token, next)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        mem::discriminant(&self.current_token.kind) == mem::discriminant(kind)
    }

    fn expect(&mut self, expected: TokenKind, description: &str) -> Result<Token, ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected(description));
        }
        Ok(self.advance())
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let found = describe(&self.current_token.kind);
        debug!(
            target: "selectql::parser",
            expected,
            %found,
            line = self.current_token.line,
            "syntax error"
        );
        ParseError::Syntax {
            expected: expected.to_string(),
            found,
            line: self.current_token.line,
        }
    }

    fn expect_name(&mut self, description: &str) -> Result<String, ParseError> {
        match self.expect(TokenKind::Name(String::new()), description)?.kind {
            TokenKind::Name(name) => Ok(name),
            _ => unreachable!("expect checked the token kind"),
        }
    }

    /// Parses one statement and requires the input to end right after it.
    ///
    /// Nesting of parentheses is limited only by the call stack.
    pub fn parse(&mut self) -> Result<QueryStatement, ParseError> {
        let result = self
            .parse_statement()
            .and_then(|statement| {
                self.expect(TokenKind::End, "end of input")?;
                Ok(statement)
            });

        // Illegal input is the root cause of whatever the grammar made of it
        if !self.lexer.errors().is_empty() {
            return Err(ParseError::Lex(self.lexer.take_errors()));
        }
        result
    }

    /// `SELECT colspec FROM NAME condition postpositions`
    pub fn parse_statement(&mut self) -> Result<QueryStatement, ParseError> {
        self.expect(TokenKind::Select, "SELECT")?;

        let columns = self.parse_colspec()?;

        self.expect(TokenKind::From, "FROM")?;
        let table = self.expect_name("table name")?;

        let mut statement = QueryStatement::new(columns, table);
        statement.condition = self.parse_condition()?;

        while let Some(postposition) = self.parse_postposition()? {
            statement.apply(postposition);
        }

        Ok(statement)
    }

    /// One or more column specifications separated by commas.
    fn parse_colspec(&mut self) -> Result<Vec<ColumnSpec>, ParseError> {
        if !self.check(&TokenKind::Star) && !self.check(&TokenKind::Name(String::new())) {
            return Err(ParseError::EmptyColumnList {
                found: describe(&self.current_token.kind),
                line: self.current_token.line,
            });
        }

        let mut columns = vec![self.parse_column()?];
        while self.check(&TokenKind::Comma) {
            self.advance();
            columns.push(self.parse_column()?);
        }
        Ok(columns)
    }

    /// `*`, `name` or `name(name)`
    fn parse_column(&mut self) -> Result<ColumnSpec, ParseError> {
        if self.check(&TokenKind::Star) {
            self.advance();
            return Ok(ColumnSpec::Star);
        }

        let name = self.expect_name("column specification")?;

        if self.check(&TokenKind::LParen) {
            self.advance();
            let argument = self.expect_name("function argument")?;
            self.expect(TokenKind::RParen, "')'")?;
            return Ok(ColumnSpec::Call {
                function: name,
                argument,
            });
        }

        Ok(ColumnSpec::Name(name))
    }

    fn parse_condition(&mut self) -> Result<Option<ConditionExpr>, ParseError> {
        if !self.check(&TokenKind::Where) {
            return Ok(None);
        }
        self.advance();
        self.parse_expression().map(Some)
    }

    /// `LIMIT n` or `ORDER BY colspec`, or `None` when neither follows.
    fn parse_postposition(&mut self) -> Result<Option<Postposition>, ParseError> {
        match self.current_token.kind {
            TokenKind::Limit => {
                self.advance();
                match self.expect(TokenKind::Number(0), "integer after LIMIT")?.kind {
                    TokenKind::Number(n) => Ok(Some(Postposition::Limit(n))),
                    _ => unreachable!("expect checked the token kind"),
                }
            }
            TokenKind::Order => {
                self.advance();
                self.expect(TokenKind::By, "BY")?;
                let columns = self.parse_colspec()?;
                Ok(Some(Postposition::OrderBy(columns)))
            }
            _ => Ok(None),
        }
    }

    pub fn parse_expression(&mut self) -> Result<ConditionExpr, ParseError> {
        self.parse_binary(0)
    }

    /// Precedence climbing: folds operators binding at least as tightly as
    /// `min_precedence` into `left`.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<ConditionExpr, ParseError> {
        let mut left = self.parse_primary()?;

        while let Some(op) = BinOp::from_token(&self.current_token.kind) {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.advance();

            // Left-associative: the right operand only takes tighter operators
            let right = self.parse_binary(precedence + 1)?;

            left = ConditionExpr::binary(op, left, right);
        }
        Ok(left)
    }

    /// Values and parenthesized sub-expressions
    fn parse_primary(&mut self) -> Result<ConditionExpr, ParseError> {
        let value = match &self.current_token.kind {
            TokenKind::Number(_) | TokenKind::String(_) | TokenKind::Name(_) => {
                match self.advance().kind {
                    TokenKind::Number(n) => ValueExpr::Literal(Literal::Number(n)),
                    TokenKind::String(s) => ValueExpr::Literal(Literal::String(s)),
                    TokenKind::Name(name) => ValueExpr::NameRef(name),
                    _ => unreachable!("matched on a value token"),
                }
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_binary(0)?;
                self.expect(TokenKind::RParen, "')'")?;
                return Ok(expr);
            }
            _ => return Err(self.unexpected("value or '('")),
        };
        Ok(ConditionExpr::Value(value))
    }
}

/// Parses a single `SELECT` statement.
///
/// ```
/// let query = selectql::parse("select foo, bar from baz limit 5").unwrap();
/// assert_eq!(query.columns.len(), 2);
/// assert_eq!(query.table(), "baz");
/// assert_eq!(query.limit, Some(5));
/// assert!(query.condition.is_none());
/// ```
pub fn parse(input: &str) -> Result<QueryStatement, ParseError> {
    debug!(target: "selectql::parser", len = input.len(), "parsing query");
    let statement = Parser::new(Lexer::new(input)).parse()?;
    debug!(
        target: "selectql::parser",
        columns = statement.columns.len(),
        condition = statement.condition.is_some(),
        limit = ?statement.limit,
        order_by = statement.order_by.is_some(),
        "parsed query"
    );
    Ok(statement)
}
