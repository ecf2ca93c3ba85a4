//! # selectql - Abstract Syntax Tree
//!
//! This module defines the tokens and syntax tree for a small `SELECT`-only
//! dialect of SQL. The tree is what the parser hands to an external query
//! engine; nothing here evaluates anything.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Binary condition operators and their precedence table
//! - **[columns]** - Column specifications of a projection list
//! - **[expressions]** - Values and condition trees following `WHERE`
//! - **[query]** - The complete `SELECT` statement and its trailing clauses
//!
//! ## Quick Start
//!
//! ```text
//! SELECT name, upper(city) FROM people WHERE age = 30 AND city = 'Oslo' LIMIT 10
//! ```
//!
//! parses to a [`QueryStatement`] with two columns, the table reference
//! `people`, a condition tree rooted at `and`, and a limit of 10.
//!
//! ## Core Concepts
//!
//! ### Statement Shape
//!
//! ```text
//! SELECT colspec FROM table [WHERE condition] [LIMIT n | ORDER BY colspec]...
//! ```
//!
//! Trailing clauses may appear in any order and may repeat. A repeated clause
//! overwrites the earlier one, so `LIMIT 1 LIMIT 2` yields a limit of 2.
//!
//! ### Operator Precedence
//!
//! From loosest to tightest: `OR`, `AND`, `=`. All three group left to right.
//! Parentheses only change the shape of the tree; they never produce a node
//! of their own.
//!
//! ## Examples
//!
//! ```
//! use selectql::ast::{BinOp, ConditionExpr};
//!
//! let query = selectql::parse("select * from bar where a=3 and b=2 or c=1").unwrap();
//! match query.condition {
//!     Some(ConditionExpr::BinaryOp { op: BinOp::Or, left, .. }) => {
//!         assert!(matches!(*left, ConditionExpr::BinaryOp { op: BinOp::And, .. }));
//!     }
//!     other => panic!("unexpected condition {:?}", other),
//! }
//! ```
pub mod tokens;
pub mod operators;
pub mod columns;
pub mod expressions;
pub mod query;

pub use tokens::{Token, TokenKind};
pub use operators::BinOp;
pub use columns::ColumnSpec;
pub use expressions::{ConditionExpr, Literal, ValueExpr};
pub use query::{Postposition, QueryStatement};
