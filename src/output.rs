//! Rendering of parsed statements as plain nested JSON values.
//!
//! Query engines consume the tree in this shape rather than the Rust types:
//!
//! ```text
//! { "type": "select",
//!   "columns": [ {"type": "star"} | {"type": "name", "value": id}
//!              | {"type": "call", "name": id, "arg": {"type": "name", "value": id}} ],
//!   "index": {"type": "name", "value": id},
//!   "condition": {"op": "=" | "and" | "or", "args": [c, c]} | {"type": "literal" | "name", "value": v},
//!   "limit": n,
//!   "order_by": [column, ...] }
//! ```
//!
//! `condition`, `limit` and `order_by` appear only when the clause was present.
//!
//! # Examples
//!
//! ```
//! use selectql::output::to_json;
//!
//! let query = selectql::parse("select * from bar where a=3").unwrap();
//! assert_eq!(
//!     to_json(&query),
//!     r#"{"columns":[{"type":"star"}],"condition":{"args":[{"type":"name","value":"a"},{"type":"literal","value":3}],"op":"="},"index":{"type":"name","value":"bar"},"type":"select"}"#
//! );
//! ```

use crate::ast::{ColumnSpec, ConditionExpr, Literal, QueryStatement, ValueExpr};
use serde_json::{Map, Value, json};

/// Converts a statement to its nested-mapping form.
pub fn to_value(statement: &QueryStatement) -> Value {
    let mut object = Map::new();
    object.insert("type".to_string(), json!("select"));
    object.insert("columns".to_string(), columns_to_value(&statement.columns));
    object.insert("index".to_string(), json!({ "type": "name", "value": statement.index }));

    if let Some(condition) = &statement.condition {
        object.insert("condition".to_string(), condition_to_value(condition));
    }
    if let Some(limit) = statement.limit {
        object.insert("limit".to_string(), json!(limit));
    }
    if let Some(order_by) = &statement.order_by {
        object.insert("order_by".to_string(), columns_to_value(order_by));
    }

    Value::Object(object)
}

pub fn columns_to_value(columns: &[ColumnSpec]) -> Value {
    Value::Array(columns.iter().map(column_to_value).collect())
}

pub fn column_to_value(column: &ColumnSpec) -> Value {
    match column {
        ColumnSpec::Star => json!({ "type": "star" }),
        ColumnSpec::Name(name) => json!({ "type": "name", "value": name }),
        ColumnSpec::Call { function, argument } => json!({
            "type": "call",
            "name": function,
            "arg": { "type": "name", "value": argument },
        }),
    }
}

pub fn condition_to_value(condition: &ConditionExpr) -> Value {
    match condition {
        ConditionExpr::Value(value) => value_to_value(value),
        ConditionExpr::BinaryOp { op, left, right } => json!({
            "op": op.symbol(),
            "args": [condition_to_value(left), condition_to_value(right)],
        }),
    }
}

pub fn value_to_value(value: &ValueExpr) -> Value {
    match value {
        ValueExpr::Literal(Literal::Number(n)) => json!({ "type": "literal", "value": n }),
        ValueExpr::Literal(Literal::String(s)) => json!({ "type": "literal", "value": s }),
        ValueExpr::NameRef(name) => json!({ "type": "name", "value": name }),
    }
}

/// Compact JSON text of a statement. Object keys come out sorted.
pub fn to_json(statement: &QueryStatement) -> String {
    to_value(statement).to_string()
}

/// Pretty-printed JSON text of a statement, two-space indentation.
pub fn to_json_pretty(statement: &QueryStatement) -> String {
    format!("{:#}", to_value(statement))
}
