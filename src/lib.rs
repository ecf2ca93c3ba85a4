pub mod ast;
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{BinOp, ColumnSpec, ConditionExpr, Literal, QueryStatement, Token, TokenKind, ValueExpr};
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty, to_value};
pub use parser::{ParseError, Parser, parse};
