use crate::ast::TokenKind;
use std::fmt;

/// Binary operators allowed in a `WHERE` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// Equality (`=`)
    Equals,
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,
}

/// Operator table, loosest binding first. Every operator is left-associative.
const PRECEDENCE: [(BinOp, u8); 3] = [(BinOp::Or, 1), (BinOp::And, 2), (BinOp::Equals, 3)];

impl BinOp {
    /// Maps an infix token to its operator, if it is one.
    pub fn from_token(kind: &TokenKind) -> Option<BinOp> {
        match kind {
            TokenKind::Equals => Some(BinOp::Equals),
            TokenKind::And => Some(BinOp::And),
            TokenKind::Or => Some(BinOp::Or),
            _ => None,
        }
    }

    /// Binding strength; a higher number binds tighter.
    pub fn precedence(self) -> u8 {
        PRECEDENCE[self.level()].1
    }

    /// Name used in the rendered tree: `=`, `and` or `or`.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Equals => "=",
            BinOp::And => "and",
            BinOp::Or => "or",
        }
    }

    /// Row of this operator in [`PRECEDENCE`].
    fn level(self) -> usize {
        match self {
            BinOp::Or => 0,
            BinOp::And => 1,
            BinOp::Equals => 2,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::Equals => f.write_str("="),
            BinOp::And => f.write_str("AND"),
            BinOp::Or => f.write_str("OR"),
        }
    }
}
