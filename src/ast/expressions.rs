use crate::ast::BinOp;
use std::fmt;

/// Literal constant appearing in a condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Integer literal
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Number(i64),

    /// String literal, stored unescaped
    ///
    /// # Example
    /// ```text
    /// 'Oslo'
    /// ```
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => {
                f.write_str("'")?;
                for ch in s.chars() {
                    match ch {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("'")
            }
        }
    }
}

/// Leaf of a condition tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueExpr {
    /// A number or string constant
    Literal(Literal),

    /// A reference to a column (or, after `FROM`, a table) by name
    NameRef(String),
}

impl ValueExpr {
    pub fn name(name: impl Into<String>) -> Self {
        ValueExpr::NameRef(name.into())
    }

    pub fn number(n: i64) -> Self {
        ValueExpr::Literal(Literal::Number(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        ValueExpr::Literal(Literal::String(s.into()))
    }
}

impl fmt::Display for ValueExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueExpr::Literal(literal) => write!(f, "{}", literal),
            ValueExpr::NameRef(name) => f.write_str(name),
        }
    }
}

/// Boolean filter tree following `WHERE`.
///
/// Parenthesized input has no node of its own: `(a = 1)` and `a = 1` build
/// the same tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConditionExpr {
    /// A single value
    Value(ValueExpr),

    /// Binary operation
    ///
    /// # Examples
    /// ```text
    /// a = 3
    /// a = 3 and b = 2
    /// ```
    BinaryOp {
        op: BinOp,
        left: Box<ConditionExpr>,
        right: Box<ConditionExpr>,
    },
}

impl ConditionExpr {
    pub fn binary(op: BinOp, left: ConditionExpr, right: ConditionExpr) -> Self {
        ConditionExpr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Operands in source order, empty for a leaf.
    pub fn args(&self) -> Vec<&ConditionExpr> {
        match self {
            ConditionExpr::Value(_) => vec![],
            ConditionExpr::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Number of binary operations in the tree.
    pub fn depth(&self) -> usize {
        match self {
            ConditionExpr::Value(_) => 0,
            ConditionExpr::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Calls `visit` for every leaf, left to right.
    pub fn for_each_value<'a>(&'a self, visit: &mut impl FnMut(&'a ValueExpr)) {
        match self {
            ConditionExpr::Value(value) => visit(value),
            ConditionExpr::BinaryOp { left, right, .. } => {
                left.for_each_value(visit);
                right.for_each_value(visit);
            }
        }
    }

    fn write_operand(
        &self,
        f: &mut fmt::Formatter<'_>,
        parent: BinOp,
        right_side: bool,
    ) -> fmt::Result {
        let needs_parens = match self {
            ConditionExpr::BinaryOp { op, .. } => {
                op.precedence() < parent.precedence()
                    || (right_side && op.precedence() == parent.precedence())
            }
            ConditionExpr::Value(_) => false,
        };
        if needs_parens {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl From<ValueExpr> for ConditionExpr {
    fn from(value: ValueExpr) -> Self {
        ConditionExpr::Value(value)
    }
}

impl fmt::Display for ConditionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionExpr::Value(value) => write!(f, "{}", value),
            ConditionExpr::BinaryOp { op, left, right } => {
                left.write_operand(f, *op, false)?;
                match op {
                    BinOp::Equals => f.write_str(" = ")?,
                    _ => write!(f, " {} ", op)?,
                }
                right.write_operand(f, *op, true)
            }
        }
    }
}
