// tests/lexer_tests.rs

use selectql::ast::{Token, TokenKind};
use selectql::lexer::{LexError, Lexer};
use std::time::{Duration, Instant};

fn kinds(input: &str) -> Vec<TokenKind> {
    let (tokens, errors) = Lexer::tokenize(input);
    assert!(errors.is_empty(), "unexpected lex errors: {:?}", errors);
    tokens.into_iter().map(|t| t.kind).collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("=", TokenKind::Equals),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("*", TokenKind::Star),
        (",", TokenKind::Comma),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token().kind, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().kind, TokenKind::End);
    }
}

// ============================================================================
// Keywords and Identifiers
// ============================================================================

#[test]
fn test_keywords_case_insensitive() {
    for input in ["select", "SELECT", "Select", "sElEcT"] {
        assert_eq!(kinds(input), vec![TokenKind::Select, TokenKind::End]);
    }
    assert_eq!(kinds("order BY"), vec![TokenKind::Order, TokenKind::By, TokenKind::End]);
}

#[test]
fn test_identifier_preserves_case() {
    assert_eq!(
        kinds("CreatedAt _hidden col_2"),
        vec![
            TokenKind::Name("CreatedAt".to_string()),
            TokenKind::Name("_hidden".to_string()),
            TokenKind::Name("col_2".to_string()),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    // Longest match: "selection" is one identifier, not SELECT + "ion"
    assert_eq!(
        kinds("selection ordering byte"),
        vec![
            TokenKind::Name("selection".to_string()),
            TokenKind::Name("ordering".to_string()),
            TokenKind::Name("byte".to_string()),
            TokenKind::End,
        ]
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_numbers() {
    assert_eq!(
        kinds("0 42 007"),
        vec![
            TokenKind::Number(0),
            TokenKind::Number(42),
            TokenKind::Number(7),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_number_then_identifier() {
    assert_eq!(
        kinds("3abc"),
        vec![
            TokenKind::Number(3),
            TokenKind::Name("abc".to_string()),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_number_out_of_range() {
    let (tokens, errors) = Lexer::tokenize("99999999999999999999 1");
    assert_eq!(
        errors,
        vec![LexError::NumberOutOfRange {
            literal: "99999999999999999999".to_string(),
            line: 1,
        }]
    );
    assert_eq!(tokens[0].kind, TokenKind::Number(1));
}

#[test]
fn test_string_literal() {
    assert_eq!(
        kinds("'hello world'"),
        vec![TokenKind::String("hello world".to_string()), TokenKind::End]
    );
}

#[test]
fn test_empty_string_literal() {
    assert_eq!(kinds("''"), vec![TokenKind::String(String::new()), TokenKind::End]);
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        kinds(r"'it\'s' 'back\\slash' '\\\''"),
        vec![
            TokenKind::String("it's".to_string()),
            TokenKind::String(r"back\slash".to_string()),
            TokenKind::String(r"\'".to_string()),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_string_keeps_keywords_verbatim() {
    assert_eq!(
        kinds("'select * from t'"),
        vec![TokenKind::String("select * from t".to_string()), TokenKind::End]
    );
}

#[test]
fn test_unterminated_string() {
    let (tokens, errors) = Lexer::tokenize("'abc");
    assert_eq!(errors, vec![LexError::UnterminatedString { line: 1 }]);
    // Only the quote is skipped; the rest lexes normally
    assert_eq!(
        tokens.into_iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Name("abc".to_string()), TokenKind::End]
    );
}

#[test]
fn test_unknown_escape_is_invalid() {
    let (tokens, errors) = Lexer::tokenize(r"'x\q' y");
    assert_eq!(errors, vec![LexError::InvalidEscape { escape: 'q', line: 1 }]);
    // The whole literal is consumed without producing a token
    assert_eq!(
        tokens.into_iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Name("y".to_string()), TokenKind::End]
    );
}

#[test]
fn test_invalid_escape_reports_its_own_line() {
    let (_, errors) = Lexer::tokenize("'a\\n\nb\\t'");
    assert_eq!(
        errors,
        vec![
            LexError::InvalidEscape { escape: 'n', line: 1 },
            LexError::InvalidEscape { escape: 't', line: 2 },
        ]
    );
}

#[test]
fn test_trailing_backslash_is_unterminated() {
    let (_, errors) = Lexer::tokenize(r"'abc\");
    assert_eq!(
        errors,
        vec![
            LexError::UnterminatedString { line: 1 },
            LexError::IllegalCharacter { character: '\\', line: 1 },
        ]
    );
}

#[test]
fn test_many_unterminated_quotes_lex_in_linear_time() {
    let input = r"'\".repeat(20_000);
    let started = Instant::now();
    let (tokens, errors) = Lexer::tokenize(&input);

    assert!(started.elapsed() < Duration::from_secs(5), "took {:?}", started.elapsed());
    assert_eq!(tokens.len(), 1);
    assert_eq!(errors.len(), 40_000);
    assert_eq!(errors[0], LexError::UnterminatedString { line: 1 });
    assert_eq!(errors[1], LexError::IllegalCharacter { character: '\\', line: 1 });
    assert_eq!(errors[39_998], LexError::UnterminatedString { line: 1 });
}

// ============================================================================
// Whitespace, Lines and Illegal Characters
// ============================================================================

#[test]
fn test_whitespace_ignored() {
    assert_eq!(
        kinds(" \t select\n\n*\r\n"),
        vec![TokenKind::Select, TokenKind::Star, TokenKind::End]
    );
}

#[test]
fn test_line_numbers() {
    let (tokens, _) = Lexer::tokenize("select a\nfrom b\n\nwhere c = 1");
    let lines: Vec<(TokenKind, usize)> = tokens.into_iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        lines,
        vec![
            (TokenKind::Select, 1),
            (TokenKind::Name("a".to_string()), 1),
            (TokenKind::From, 2),
            (TokenKind::Name("b".to_string()), 2),
            (TokenKind::Where, 4),
            (TokenKind::Name("c".to_string()), 4),
            (TokenKind::Equals, 4),
            (TokenKind::Number(1), 4),
            (TokenKind::End, 4),
        ]
    );
}

#[test]
fn test_multiline_string_advances_line() {
    let (tokens, _) = Lexer::tokenize("'a\nb' c");
    assert_eq!(tokens[0], Token::new(TokenKind::String("a\nb".to_string()), 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Name("c".to_string()), 2));
}

#[test]
fn test_illegal_characters_skipped_one_at_a_time() {
    let (tokens, errors) = Lexer::tokenize("a ;; b\n# c");
    assert_eq!(
        tokens.into_iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Name("a".to_string()),
            TokenKind::Name("b".to_string()),
            TokenKind::Name("c".to_string()),
            TokenKind::End,
        ]
    );
    assert_eq!(
        errors,
        vec![
            LexError::IllegalCharacter { character: ';', line: 1 },
            LexError::IllegalCharacter { character: ';', line: 1 },
            LexError::IllegalCharacter { character: '#', line: 2 },
        ]
    );
}

#[test]
fn test_non_ascii_is_illegal() {
    let (_, errors) = Lexer::tokenize("é");
    assert_eq!(errors, vec![LexError::IllegalCharacter { character: 'é', line: 1 }]);
}

#[test]
fn test_double_quotes_are_illegal() {
    let (_, errors) = Lexer::tokenize("\"x\"");
    assert_eq!(errors.len(), 2);
}

// ============================================================================
// Streaming
// ============================================================================

#[test]
fn test_iterator_ends_after_end_token() {
    let tokens: Vec<Token> = Lexer::new("select *").collect();
    assert_eq!(tokens.len(), 3);
    assert!(tokens[2].is_end());
}

#[test]
fn test_restart_by_new_lexer() {
    let input = "select foo from bar";
    let first: Vec<Token> = Lexer::new(input).collect();
    let second: Vec<Token> = Lexer::new(input).collect();
    assert_eq!(first, second);
}

#[test]
fn test_token_display() {
    assert_eq!(TokenKind::Select.to_string(), "SELECT");
    assert_eq!(TokenKind::Name("x".to_string()).to_string(), "NAME(x)");
    assert_eq!(TokenKind::Number(3).to_string(), "NUMBER(3)");
    assert_eq!(TokenKind::String("a".to_string()).to_string(), "STRING(\"a\")");
    assert!(TokenKind::Order.is_keyword());
    assert!(!TokenKind::Name("order_id".to_string()).is_keyword());
}
