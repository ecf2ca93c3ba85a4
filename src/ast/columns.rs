use std::fmt;

/// One entry of a projection list or an `ORDER BY` list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnSpec {
    /// Every column (`*`)
    Star,

    /// A bare column name
    ///
    /// # Example
    /// ```text
    /// SELECT name FROM people
    /// ```
    Name(String),

    /// Single-argument function application
    ///
    /// # Example
    /// ```text
    /// SELECT upper(name) FROM people
    /// ```
    Call { function: String, argument: String },
}

impl ColumnSpec {
    pub fn name(name: impl Into<String>) -> Self {
        ColumnSpec::Name(name.into())
    }

    pub fn call(function: impl Into<String>, argument: impl Into<String>) -> Self {
        ColumnSpec::Call {
            function: function.into(),
            argument: argument.into(),
        }
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSpec::Star => f.write_str("*"),
            ColumnSpec::Name(name) => f.write_str(name),
            ColumnSpec::Call { function, argument } => write!(f, "{}({})", function, argument),
        }
    }
}

/// Writes a comma-separated column list.
pub(crate) fn write_list(f: &mut fmt::Formatter<'_>, columns: &[ColumnSpec]) -> fmt::Result {
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", column)?;
    }
    Ok(())
}
