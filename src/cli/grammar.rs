//! Grammar reference shown by `selectql grammar`

/// Get the grammar reference text
pub fn get_grammar_reference() -> &'static str {
    r#"SELECTQL GRAMMAR

A single SELECT statement per query. Keywords are case-insensitive.

STATEMENT

  SELECT colspec FROM table [WHERE condition] [LIMIT n | ORDER BY colspec]...

  Trailing clauses may appear in any order and may repeat; the last LIMIT and
  the last ORDER BY win.

COLUMNS

  *                 Every column
  name              A column by name
  fn(name)          Single-argument function application
  a, b, fn(c)       Comma-separated list, order preserved

CONDITIONS

  a = 3             Equality
  x AND y           Conjunction
  x OR y            Disjunction
  ( x )             Grouping

  Precedence, loosest first: OR, AND, =. All group left to right, so
  a=1 AND b=2 OR c=3 means (a=1 AND b=2) OR c=3.

VALUES

  42                Integer literal
  'text'            String literal; \' and \\ are the only escapes
  name              Column reference

OUTPUT

  selectql parse prints the tree as JSON:

  {"type": "select", "columns": [...], "index": {"type": "name", "value": ...},
   "condition": {...}, "limit": n, "order_by": [...]}
"#
}
