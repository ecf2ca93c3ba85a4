use crate::ast::columns::write_list;
use crate::ast::{ColumnSpec, ConditionExpr, ValueExpr};
use std::fmt;

/// A complete `SELECT` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStatement {
    /// Projection list, never empty
    pub columns: Vec<ColumnSpec>,

    /// Table named after `FROM`
    pub index: String,

    /// Filter following `WHERE`; `None` when the clause is absent
    pub condition: Option<ConditionExpr>,

    /// Value of the last `LIMIT` clause
    pub limit: Option<i64>,

    /// Columns of the last `ORDER BY` clause
    pub order_by: Option<Vec<ColumnSpec>>,
}

/// Trailing clause after the `SELECT ... FROM ... WHERE ...` core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Postposition {
    /// `LIMIT n`
    Limit(i64),

    /// `ORDER BY colspec`
    OrderBy(Vec<ColumnSpec>),
}

impl QueryStatement {
    pub fn new(columns: Vec<ColumnSpec>, table: impl Into<String>) -> Self {
        QueryStatement {
            columns,
            index: table.into(),
            condition: None,
            limit: None,
            order_by: None,
        }
    }

    /// Merges a trailing clause into the statement. A clause that is already
    /// set is overwritten.
    pub fn apply(&mut self, postposition: Postposition) {
        match postposition {
            Postposition::Limit(n) => self.limit = Some(n),
            Postposition::OrderBy(columns) => self.order_by = Some(columns),
        }
    }

    /// Table name after `FROM`.
    pub fn table(&self) -> &str {
        &self.index
    }

    pub fn has_condition(&self) -> bool {
        self.condition.is_some()
    }

    /// Every identifier the statement refers to, in source order, excluding
    /// the table and function names. Duplicates are kept.
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names = vec![];
        collect_column_names(&self.columns, &mut names);
        if let Some(condition) = &self.condition {
            condition.for_each_value(&mut |value| {
                if let ValueExpr::NameRef(name) = value {
                    names.push(name.as_str());
                }
            });
        }
        if let Some(order_by) = &self.order_by {
            collect_column_names(order_by, &mut names);
        }
        names
    }
}

fn collect_column_names<'a>(columns: &'a [ColumnSpec], names: &mut Vec<&'a str>) {
    for column in columns {
        match column {
            ColumnSpec::Star => {}
            ColumnSpec::Name(name) => names.push(name),
            ColumnSpec::Call { argument, .. } => names.push(argument),
        }
    }
}

impl fmt::Display for QueryStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        write_list(f, &self.columns)?;
        write!(f, " FROM {}", self.index)?;
        if let Some(condition) = &self.condition {
            write!(f, " WHERE {}", condition)?;
        }
        if let Some(order_by) = &self.order_by {
            f.write_str(" ORDER BY ")?;
            write_list(f, order_by)?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {}", limit)?;
        }
        Ok(())
    }
}
