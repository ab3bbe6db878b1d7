//! Integration tests for the CSS tokenizer.

use wren_css::tokenizer::{CSSToken, CSSTokenizer, HashType};

/// Helper to tokenize a string
fn tokenize(input: &str) -> Vec<CSSToken> {
    CSSTokenizer::tokenize(input)
}

/// Helper to re-serialize a token list
fn to_css(tokens: &[CSSToken]) -> String {
    let mut dest = String::new();
    for token in tokens {
        token.to_css(&mut dest);
    }
    dest
}

#[test]
fn test_whitespace() {
    let tokens = tokenize("   \t\n  ");
    assert_eq!(tokens, vec![CSSToken::Whitespace]);
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("/* only a comment */").is_empty());
}

#[test]
fn test_ident() {
    let tokens = tokenize("background-color");
    assert_eq!(tokens, vec![CSSToken::ident("background-color")]);
}

#[test]
fn test_ident_with_underscore() {
    assert_eq!(tokenize("_private"), vec![CSSToken::ident("_private")]);
}

#[test]
fn test_vendor_and_custom_idents() {
    assert_eq!(tokenize("-moz-box"), vec![CSSToken::ident("-moz-box")]);
    assert_eq!(tokenize("--accent"), vec![CSSToken::ident("--accent")]);
}

#[test]
fn test_non_ascii_ident() {
    assert_eq!(tokenize("café"), vec![CSSToken::ident("café")]);
}

#[test]
fn test_escaped_ident() {
    // A hex escape swallows one trailing whitespace.
    assert_eq!(tokenize("\\31 a"), vec![CSSToken::ident("1a")]);
    assert_eq!(tokenize("a\\:b"), vec![CSSToken::ident("a:b")]);
}

#[test]
fn test_function() {
    let tokens = tokenize("rgb(0, 0, 0)");
    assert_eq!(tokens[0], CSSToken::Function("rgb".to_string()));
    assert_eq!(tokens[1], CSSToken::integer(0));
    assert_eq!(tokens[2], CSSToken::Comma);
    assert_eq!(tokens.last(), Some(&CSSToken::RightParen));
}

#[test]
fn test_at_keyword() {
    assert_eq!(tokenize("@page"), vec![CSSToken::AtKeyword("page".to_string())]);
    assert_eq!(tokenize("@ x")[0], CSSToken::Delim('@'));
}

#[test]
fn test_hash_id() {
    let tokens = tokenize("#main");
    match &tokens[0] {
        CSSToken::Hash { value, hash_type } => {
            assert_eq!(value, "main");
            assert_eq!(*hash_type, HashType::Id);
        }
        _ => panic!("Expected Hash token"),
    }
}

#[test]
fn test_hash_unrestricted() {
    let tokens = tokenize("#000");
    match &tokens[0] {
        CSSToken::Hash { value, hash_type } => {
            assert_eq!(value, "000");
            assert_eq!(*hash_type, HashType::Unrestricted);
        }
        _ => panic!("Expected Hash token"),
    }
    assert_eq!(tokenize("# ")[0], CSSToken::Delim('#'));
}

#[test]
fn test_integer() {
    let tokens = tokenize("42");
    match &tokens[0] {
        CSSToken::Number { value, int_value } => {
            assert!((value - 42.0).abs() < f64::EPSILON);
            assert_eq!(*int_value, Some(42));
        }
        _ => panic!("Expected Number token"),
    }
}

#[test]
fn test_signed_numbers() {
    assert_eq!(tokenize("-3"), vec![CSSToken::integer(-3)]);
    assert_eq!(tokenize("+7"), vec![CSSToken::integer(7)]);
}

#[test]
fn test_number_with_fraction() {
    let tokens = tokenize("1.2");
    match &tokens[0] {
        CSSToken::Number { value, int_value } => {
            assert!((value - 1.2).abs() < f64::EPSILON);
            assert_eq!(*int_value, None);
        }
        _ => panic!("Expected Number token"),
    }
}

#[test]
fn test_number_with_exponent() {
    let tokens = tokenize("1e3");
    match &tokens[0] {
        CSSToken::Number { value, int_value } => {
            assert!((value - 1000.0).abs() < f64::EPSILON);
            assert_eq!(*int_value, None);
        }
        _ => panic!("Expected Number token"),
    }
}

#[test]
fn test_percentage() {
    let tokens = tokenize("50%");
    match &tokens[0] {
        CSSToken::Percentage { value, int_value } => {
            assert!((value - 50.0).abs() < f64::EPSILON);
            assert_eq!(*int_value, Some(50));
        }
        _ => panic!("Expected Percentage token"),
    }
}

#[test]
fn test_dimension() {
    let tokens = tokenize("1.5em");
    match &tokens[0] {
        CSSToken::Dimension {
            value,
            int_value,
            unit,
        } => {
            assert!((value - 1.5).abs() < f64::EPSILON);
            assert_eq!(*int_value, None);
            assert_eq!(unit, "em");
        }
        _ => panic!("Expected Dimension token"),
    }
}

#[test]
fn test_delim() {
    assert_eq!(tokenize("/"), vec![CSSToken::Delim('/')]);
    assert_eq!(tokenize("!"), vec![CSSToken::Delim('!')]);
}

#[test]
fn test_string() {
    assert_eq!(tokenize("\"hello\""), vec![CSSToken::string("hello")]);
    assert_eq!(tokenize("'world'"), vec![CSSToken::string("world")]);
}

#[test]
fn test_string_escapes() {
    assert_eq!(tokenize(r#""a\"b""#), vec![CSSToken::string("a\"b")]);
    assert_eq!(tokenize(r#""\201C""#), vec![CSSToken::string("\u{201C}")]);
}

#[test]
fn test_unterminated_string_at_eof() {
    assert_eq!(tokenize("\"open"), vec![CSSToken::string("open")]);
}

#[test]
fn test_bad_string() {
    let tokens = tokenize("\"broken\nrest");
    assert_eq!(tokens[0], CSSToken::BadString);
    assert!(tokens[0].is_bad());
    assert_eq!(tokens[1], CSSToken::Whitespace);
    assert_eq!(tokens[2], CSSToken::ident("rest"));
}

#[test]
fn test_unquoted_url() {
    assert_eq!(
        tokenize("url(images/bg.png)"),
        vec![CSSToken::Url("images/bg.png".to_string())]
    );
    assert_eq!(tokenize("url(  a.png  )"), vec![CSSToken::Url("a.png".to_string())]);
}

#[test]
fn test_quoted_url_is_a_function() {
    let tokens = tokenize("url(\"a.png\")");
    assert_eq!(
        tokens,
        vec![
            CSSToken::Function("url".to_string()),
            CSSToken::string("a.png"),
            CSSToken::RightParen,
        ]
    );
}

#[test]
fn test_bad_url() {
    let tokens = tokenize("url(a b) x");
    assert_eq!(tokens[0], CSSToken::BadUrl);
    assert!(tokens[0].is_bad());
    assert_eq!(tokens[1], CSSToken::Whitespace);
    assert_eq!(tokens[2], CSSToken::ident("x"));
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("a/* note */b");
    assert_eq!(tokens, vec![CSSToken::ident("a"), CSSToken::ident("b")]);
}

#[test]
fn test_unterminated_comment() {
    assert_eq!(tokenize("a /* open"), vec![CSSToken::ident("a"), CSSToken::Whitespace]);
}

#[test]
fn test_punctuation() {
    assert_eq!(
        tokenize(":;,[](){}"),
        vec![
            CSSToken::Colon,
            CSSToken::Semicolon,
            CSSToken::Comma,
            CSSToken::LeftBracket,
            CSSToken::RightBracket,
            CSSToken::LeftParen,
            CSSToken::RightParen,
            CSSToken::LeftBrace,
            CSSToken::RightBrace,
        ]
    );
}

#[test]
fn test_declaration() {
    let tokens = tokenize("margin-top: 0");
    assert_eq!(
        tokens,
        vec![
            CSSToken::ident("margin-top"),
            CSSToken::Colon,
            CSSToken::Whitespace,
            CSSToken::integer(0),
        ]
    );
}

#[test]
fn test_iterator() {
    let idents: Vec<_> = CSSTokenizer::new("a b c")
        .filter(|token| !token.is_whitespace())
        .collect();
    assert_eq!(idents.len(), 3);
}

#[test]
fn test_serialization() {
    assert_eq!(to_css(&tokenize("0 1.5em 50% #000")), "0 1.5em 50% #000");
    assert_eq!(to_css(&tokenize("url(a.png)")), "url(a.png)");
    assert_eq!(to_css(&tokenize("'say \"hi\"'")), r#""say \"hi\"""#);
    assert_eq!(to_css(&tokenize("rgb(1,2,3)")), "rgb(1,2,3)");
}

#[test]
fn test_out_of_range_numbers_stay_numbers() {
    for (input, expected) in [("1e400", f64::MAX), ("-1e400", f64::MIN)] {
        let tokens = tokenize(input);
        match &tokens[0] {
            CSSToken::Number { value, int_value } => {
                assert!(value.is_finite());
                assert!((value - expected).abs() < f64::EPSILON);
                assert_eq!(*int_value, None);
            }
            _ => panic!("Expected Number token"),
        }

        let css = to_css(&tokens);
        assert!(css.chars().all(|c| c == '-' || c.is_ascii_digit()), "{css}");
        assert_eq!(tokenize(&css), tokens);
    }
}

#[test]
fn test_escaped_names_serialize_back() {
    for input in ["\\31 a", "-\\32 x", "a\\:b", "\\-", "#a\\ b", "@\\31 x", "1\\31 px"] {
        let tokens = tokenize(input);
        assert_eq!(tokenize(&to_css(&tokens)), tokens, "{input}");
    }
    assert_eq!(to_css(&tokenize("\\31 a")), "\\31 a");
    assert_eq!(to_css(&tokenize("a\\:b")), "a\\:b");
    assert_eq!(to_css(&tokenize("#000")), "#000");
}

#[test]
fn test_display() {
    assert_eq!(CSSToken::ident("auto").to_string(), "<ident:auto>");
    assert_eq!(CSSToken::Semicolon.to_string(), "<semicolon>");
}
