// tests/cli_tests.rs

use selectql::cli::{CheckOptions, CheckResult, CliError, execute_check, get_grammar_reference, list_tokens};
use selectql::ParseError;
use serde_json::json;

#[test]
fn test_check_renders_tree() {
    let options = CheckOptions {
        query: "select * from bar limit 1".to_string(),
        syntax_only: false,
    };
    match execute_check(&options).unwrap() {
        CheckResult::Success(value) => assert_eq!(value["limit"], json!(1)),
        other => panic!("expected tree, got {:?}", other),
    }
}

#[test]
fn test_syntax_only() {
    let options = CheckOptions {
        query: "select a from b".to_string(),
        syntax_only: true,
    };
    assert!(matches!(execute_check(&options).unwrap(), CheckResult::SyntaxValid));
}

#[test]
fn test_check_reports_parse_error() {
    let options = CheckOptions {
        query: "select from foo".to_string(),
        syntax_only: true,
    };
    let err = execute_check(&options).unwrap_err();
    assert!(matches!(err, CliError::Parse(ParseError::EmptyColumnList { .. })));
    assert_eq!(
        err.to_string(),
        "Parse error: Syntax error at line 1: empty column list before FROM"
    );
}

#[test]
fn test_error_source_chain() {
    use std::error::Error;

    let err = execute_check(&CheckOptions::default()).unwrap_err();
    assert!(err.source().is_some());
}

#[test]
fn test_token_listing() {
    let listing = list_tokens("select 'a' from t limit 3");
    assert!(listing.errors.is_empty());
    assert_eq!(
        listing.lines(),
        vec![
            "   1 SELECT",
            "   1 STRING \"a\"",
            "   1 FROM",
            "   1 NAME t",
            "   1 LIMIT",
            "   1 NUMBER 3",
            "   1 END",
        ]
    );
}

#[test]
fn test_grammar_reference_mentions_precedence() {
    assert!(get_grammar_reference().contains("Precedence, loosest first: OR, AND, ="));
}
