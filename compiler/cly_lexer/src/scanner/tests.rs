use pretty_assertions::assert_eq;
use proptest::prelude::*;

use cly_diagnostic::{ErrorCode, Severity};
use cly_ir::Keyword;

use super::*;
use crate::lex;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).0.into_iter().map(|t| t.kind).collect()
}

fn lexemes(source: &str) -> Vec<String> {
    lex(source).0.into_iter().map(|t| t.lexeme).collect()
}

/// Trivia before each token plus its lexeme, concatenated.
fn reconstruct(source: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&source[token.trivia_start() as usize..token.span.start as usize]);
        out.push_str(&token.lexeme);
    }
    out
}

// ─── Token classes ─────────────────────────────────────────────

#[test]
fn maximal_munch_on_double_equals() {
    assert_eq!(
        kinds("=="),
        vec![TokenKind::Operator(Op::Equal), TokenKind::Eof]
    );
}

#[test]
fn simple_assignment_token_stream() {
    assert_eq!(
        kinds("x = 1 + 2"),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator(Op::Assign),
            TokenKind::Number,
            TokenKind::Operator(Op::Plus),
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
    assert!(lex("x = 1 + 2").1.is_empty());
}

#[test]
fn every_operator() {
    let source = "= == != < <= > >= + - * / % ^ ! && ||";
    let ops: Vec<Op> = lex(source)
        .0
        .into_iter()
        .filter_map(|t| match t.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        })
        .collect();
    assert_eq!(
        ops,
        vec![
            Op::Assign,
            Op::Equal,
            Op::NotEqual,
            Op::Less,
            Op::LessEqual,
            Op::Greater,
            Op::GreaterEqual,
            Op::Plus,
            Op::Minus,
            Op::Star,
            Op::Slash,
            Op::Percent,
            Op::Caret,
            Op::Bang,
            Op::AndAnd,
            Op::OrOr,
        ]
    );
}

#[test]
fn operators_without_spaces_munch_longest_first() {
    assert_eq!(lexemes("a<=b!=!c"), vec!["a", "<=", "b", "!=", "!", "c", ""]);
    assert_eq!(lexemes("==="), vec!["==", "=", ""]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("let print true false nil letter _x9"),
        vec![
            TokenKind::Keyword(Keyword::Let),
            TokenKind::Keyword(Keyword::Print),
            TokenKind::Keyword(Keyword::True),
            TokenKind::Keyword(Keyword::False),
            TokenKind::Keyword(Keyword::Nil),
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("(a, b);"),
        vec![
            TokenKind::Punctuation(Punct::LParen),
            TokenKind::Identifier,
            TokenKind::Punctuation(Punct::Comma),
            TokenKind::Identifier,
            TokenKind::Punctuation(Punct::RParen),
            TokenKind::Punctuation(Punct::Semicolon),
            TokenKind::Eof,
        ]
    );
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn integers_and_decimals() {
    assert_eq!(lexemes("42 3.14 0.5"), vec!["42", "3.14", "0.5", ""]);
    assert!(kinds("42 3.14").iter().all(|k| *k != TokenKind::Error));
}

#[test]
fn second_dot_makes_number_malformed() {
    let (tokens, diags) = lex("1.2.3 + 1");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].lexeme, "1.2.3");
    assert_eq!(tokens[1].kind, TokenKind::Operator(Op::Plus));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0003);
    assert_eq!(diags[0].message, "malformed number literal `1.2.3`");
    assert_eq!(diags[0].span, Span::new(0, 5, 1, 1));
}

#[test]
fn dot_without_digit_swallows_trailing_identifier_chars() {
    let (tokens, diags) = lex("1.x");
    assert_eq!(tokens[0].lexeme, "1.x");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(diags.len(), 1);

    let (tokens, _) = lex("7.");
    assert_eq!(tokens[0].lexeme, "7.");
    assert_eq!(tokens[0].kind, TokenKind::Error);
}

#[test]
fn number_followed_by_letters_is_two_tokens() {
    assert_eq!(
        kinds("12ab"),
        vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]
    );
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn string_lexeme_keeps_quotes_and_escapes() {
    let (tokens, diags) = lex(r#""a\"b\n""#);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#""a\"b\n""#);
    assert!(diags.is_empty());
}

#[test]
fn unterminated_string_is_one_error_at_the_quote() {
    let (tokens, diags) = lex("x = \"abc");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator(Op::Assign),
            TokenKind::Error,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[2].lexeme, "\"abc");
    assert!(tokens[2].flags.contains(TokenFlags::HAS_ERROR));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "unterminated string literal");
    assert_eq!(diags[0].code, ErrorCode::E0001);
    assert_eq!(diags[0].span, Span::new(4, 1, 1, 5));
}

#[test]
fn unknown_escape_warns_but_keeps_string() {
    let (tokens, diags) = lex(r#""a\qb""#);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Warning);
    assert_eq!(diags[0].code, ErrorCode::E0005);
    assert_eq!(diags[0].span, Span::new(2, 2, 1, 3));
}

#[test]
fn escaped_quote_at_end_leaves_string_open() {
    let (tokens, diags) = lex(r#""abc\""#);
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(diags[0].code, ErrorCode::E0001);
}

// ─── Unexpected characters ─────────────────────────────────────

#[test]
fn unexpected_character_advances_one_char() {
    let (tokens, diags) = lex("a @ b");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].lexeme, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "unexpected character `@`");
    assert_eq!(diags[0].span, Span::new(2, 1, 1, 3));
}

#[test]
fn non_ascii_character_spans_its_utf8_bytes() {
    let (tokens, diags) = lex("é1");
    assert_eq!(tokens[0].lexeme, "é");
    assert_eq!(tokens[0].span, Span::new(0, 2, 1, 1));
    assert_eq!(tokens[1].span, Span::new(2, 1, 1, 2));
    assert_eq!(diags[0].code, ErrorCode::E0002);
}

#[test]
fn lone_ampersand_and_pipe_are_not_operators() {
    let (tokens, diags) = lex("a & b | c");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[3].kind, TokenKind::Error);
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[1].message, "unexpected character `|`");
}

// ─── Trivia ────────────────────────────────────────────────────

#[test]
fn comments_are_skipped() {
    let (tokens, diags) = lex("a // note\n/* block\n */ b");
    assert!(diags.is_empty());
    assert_eq!(lexemes("a // note\n/* block\n */ b"), vec!["a", "b", ""]);
    assert!(tokens[1].flags.contains(TokenFlags::COMMENT_BEFORE));
    assert!(tokens[1].starts_line());
    assert_eq!(tokens[1].span.line, 3);
}

#[test]
fn slash_alone_is_division() {
    assert_eq!(
        kinds("a / b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator(Op::Slash),
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_block_comment() {
    let mut scanner = Scanner::new("x /* never closed");
    scanner.next_token();
    let tok = scanner.next_token();
    assert_eq!(tok.kind, TokenKind::Error);
    assert_eq!(tok.lexeme, "/* never closed");
    assert_eq!(scanner.mode(), LexMode::InComment);
    assert!(scanner.next_token().is_eof());

    let diags = scanner.diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0004);
    assert_eq!(diags[0].span, Span::new(2, 2, 1, 3));
}

#[test]
fn line_flags() {
    let (tokens, _) = lex("a b\n  c");
    assert!(tokens[0].flags.contains(TokenFlags::LINE_START));
    assert!(!tokens[0].starts_line());
    assert!(tokens[1].flags.contains(TokenFlags::SPACE_BEFORE));
    assert!(!tokens[1].flags.contains(TokenFlags::LINE_START));
    assert!(tokens[2].starts_line());
    assert_eq!(tokens[2].span, Span::new(6, 1, 2, 3));
    assert_eq!(tokens[2].leading_trivia, 3);
}

// ─── Scanner contract ──────────────────────────────────────────

#[test]
fn eof_repeats_forever() {
    let mut scanner = Scanner::new("x");
    scanner.next_token();
    let eof = scanner.next_token();
    assert!(eof.is_eof());
    for _ in 0..3 {
        assert_eq!(scanner.next_token(), eof);
    }
}

#[test]
fn empty_unit_is_just_eof() {
    let (tokens, diags) = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].span, Span::point(0, 1, 1));
    assert!(diags.is_empty());
}

#[test]
fn peek_does_not_consume_or_duplicate_diagnostics() {
    let mut scanner = Scanner::new("@ x");
    let peeked = scanner.peek_token();
    assert_eq!(scanner.peek_token(), peeked);
    assert_eq!(scanner.diagnostics().len(), 1);
    assert_eq!(scanner.next_token(), peeked);
    assert_eq!(scanner.diagnostics().len(), 1);
    assert_eq!(scanner.next_token().lexeme, "x");
}

#[test]
fn reset_discards_previous_unit() {
    let mut scanner = Scanner::new("\"open");
    scanner.peek_token();
    assert_eq!(scanner.diagnostics().len(), 1);
    assert_eq!(scanner.mode(), LexMode::InString);

    scanner.reset("y");
    assert!(scanner.diagnostics().is_empty());
    assert_eq!(scanner.mode(), LexMode::Default);
    assert_eq!(scanner.source(), "y");
    let tok = scanner.next_token();
    assert_eq!(tok.lexeme, "y");
    assert_eq!(tok.span, Span::new(0, 1, 1, 1));
    assert!(tok.flags.contains(TokenFlags::LINE_START));
    assert!(scanner.next_token().is_eof());
    assert!(scanner.take_diagnostics().is_empty());
}

#[test]
fn iterator_stops_after_eof() {
    let tokens: Vec<Token> = Scanner::new("a b").collect();
    assert_eq!(tokens.len(), 3);
    assert!(tokens.last().unwrap().is_eof());
}

#[test]
fn spans_strictly_increase() {
    let (tokens, _) = lex("let x = (1 + \"s\") // c\nprint x, 2.5; @");
    for pair in tokens.windows(2) {
        assert!(pair[0].span.end() <= pair[1].span.start, "{pair:?}");
    }
}

// ─── Property Tests ────────────────────────────────────────────

proptest! {
    #[test]
    fn reaches_eof_within_len_plus_one(source in "[a-z0-9 \t\n\"\\\\/*.=!<>&|;,()@é_+-]{0,64}") {
        let mut scanner = Scanner::new(source.as_str());
        let mut calls = 0;
        loop {
            calls += 1;
            prop_assert!(calls <= source.len() + 1, "no EOF after {} calls", calls);
            if scanner.next_token().is_eof() {
                break;
            }
        }
    }

    #[test]
    fn trivia_and_lexemes_tile_the_input(source in "[a-z0-9 \t\n\"\\\\/*.=!<>&|;,()@é_+-]{0,64}") {
        let (tokens, _) = lex(&source);
        prop_assert_eq!(reconstruct(&source, &tokens), source);
    }

    #[test]
    fn arbitrary_text_round_trips(source in "\\PC{0,48}") {
        let (tokens, _) = lex(&source);
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        prop_assert_eq!(reconstruct(&source, &tokens), source);
    }
}
