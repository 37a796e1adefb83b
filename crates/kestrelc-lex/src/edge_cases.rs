//! Property- and scenario-style tests drawn from SPEC_FULL.md §8.

use crate::token::TokenKind;
use crate::tokenize;

#[test]
fn property_no_comment_tokens_in_returned_stream() {
    let tokens = tokenize("x = 1 # trailing note\ny = 2").unwrap();
    assert!(tokens.iter().all(|t| t.kind != TokenKind::CommentConstant));
}

#[test]
fn property_reserved_lexemes_are_always_keywords() {
    for word in kestrelc_util_reserved_words() {
        let tokens = tokenize(word).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Keyword, "{word} should lex as Keyword");
    }
}

fn kestrelc_util_reserved_words() -> Vec<&'static str> {
    let mut words = crate::token::RESERVED_TYPES.to_vec();
    words.extend_from_slice(crate::token::RESERVED_STATEMENTS);
    words
}

#[test]
fn property_float_constants_contain_exactly_one_dot() {
    for source in ["3.14", "3.", "0.0", "10.250"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::FloatConstant);
        assert_eq!(tokens[0].text().matches('.').count(), 1);
    }
}

#[test]
fn scenario_s1_tokenizes_conditional_expression_source() {
    let tokens = tokenize("example t = t > 6 ? t + 5 : t").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Symbol,
            TokenKind::Identifier,
            TokenKind::Symbol,
            TokenKind::IntConstant,
            TokenKind::Symbol,
            TokenKind::Identifier,
            TokenKind::Symbol,
            TokenKind::IntConstant,
            TokenKind::Symbol,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(texts[2], "=");
    assert_eq!(texts[4], ">");
    assert_eq!(texts[6], "+");
    assert_eq!(texts[8], "?");
    assert_eq!(texts[10], ":");
}

#[test]
fn scenario_s6_datatype_declaration_tokens() {
    let tokens = tokenize("datatype Shape = Circle Float or Rectangle Float Float").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].text(), "datatype");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "Shape");
}

#[test]
fn digits_never_continue_an_identifier() {
    let tokens = tokenize("x1 y22z").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["x", "1", "y", "22", "z"]);
}

#[test]
fn keyword_prefixed_identifiers_stay_identifiers() {
    // "moduleName" is not the keyword "module": the whole alpha run is one
    // lexeme, and only an exact reserved-word match reclassifies it.
    let tokens = tokenize("moduleName").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
}

// ----------------------------------------------------------------------
// PROPERTY-BASED TESTS - arbitrary inputs via proptest (§8 properties 1, 4, 5)
// ----------------------------------------------------------------------

#[test]
fn property_arbitrary_alpha_runs_tokenize_to_one_identifier_or_keyword() {
    use proptest::prelude::*;

    proptest!(|(input in "[a-zA-Z]{1,16}")| {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        let expected = if crate::token::is_reserved_word(&input) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        prop_assert_eq!(tokens[0].kind, expected);
        prop_assert_eq!(tokens[0].text(), input.as_str());
    });
}

#[test]
fn property_tokenize_is_deterministic_for_arbitrary_source() {
    use proptest::prelude::*;

    proptest!(|(input in "[a-zA-Z0-9_ =+*/<>.,()\\[\\]?:!-]{0,60}")| {
        let first = tokenize(&input);
        let second = tokenize(&input);
        prop_assert_eq!(first.is_ok(), second.is_ok());
        if let (Ok(a), Ok(b)) = (first, second) {
            prop_assert_eq!(a, b);
        }
    });
}

#[test]
fn property_arbitrary_decimal_literals_are_a_single_float_with_one_dot() {
    use proptest::prelude::*;

    proptest!(|(int_part in "[0-9]{1,8}", frac_part in "[0-9]{0,8}")| {
        let source = format!("{int_part}.{frac_part}");
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::FloatConstant);
        prop_assert_eq!(tokens[0].text().matches('.').count(), 1);
    });
}

#[test]
fn property_arbitrary_string_literal_bodies_lex_to_one_string_constant() {
    use proptest::prelude::*;

    proptest!(|(body in "[a-zA-Z0-9 ]{0,40}")| {
        let source = format!("\"{body}\"");
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::StringConstant);
        prop_assert_eq!(tokens[0].text(), body.as_str());
    });
}

#[test]
fn property_arbitrary_trailing_comment_text_never_survives_tokenize() {
    use proptest::prelude::*;

    proptest!(|(note in "[a-zA-Z0-9 ]{0,40}")| {
        let source = format!("x = 1 # {note}\ny = 2");
        let tokens = tokenize(&source).unwrap();
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::CommentConstant));
        prop_assert_eq!(tokens.last().unwrap().text(), "2");
    });
}

#[test]
fn where_bound_helper_is_scoped_to_a_single_call() {
    // Token-level check that the "where" keyword lexes as a keyword and not
    // an identifier, since the parser-level scoping test lives in
    // kestrelc-par's own edge_cases.rs.
    let tokens = tokenize("f x = g(x) where g y = y + 1").unwrap();
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Keyword && t.text() == "where"));
}
