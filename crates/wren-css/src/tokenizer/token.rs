//! CSS Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Property values only ever need the tokens below. `<CDO-token>` and
//! `<CDC-token>` exist for stylesheet-level HTML comment hiding and are not
//! produced; `<EOF-token>` is the end of the token stream.

use core::fmt;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// "A `<hash-token>` with the type flag set to 'id'... or 'unrestricted'."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// "id" - the hash token's value is a valid identifier
    Id,
    /// "unrestricted" - e.g. the `000` of `#000`
    Unrestricted,
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// A CSS token. Numeric tokens keep the integer value when the token's type
/// flag is "integer", so `0` and `0.0` serialize back the way they were written.
#[derive(Debug, Clone, PartialEq)]
pub enum CSSToken {
    /// "`<ident-token>`"
    Ident(String),
    /// "`<function-token>`" - the name, without the opening parenthesis
    Function(String),
    /// "`<at-keyword-token>`" - the name, without the `@`
    AtKeyword(String),
    /// "`<hash-token>`"
    Hash {
        /// The name after the `#`.
        value: String,
        /// "a type flag set to either 'id' or 'unrestricted'"
        hash_type: HashType,
    },
    /// "`<string-token>`" - the unquoted, unescaped contents
    String(String),
    /// "`<bad-string-token>`" - an unterminated string broken by a newline
    BadString,
    /// "`<url-token>`" - an unquoted `url(...)`
    Url(String),
    /// "`<bad-url-token>`"
    BadUrl,
    /// "`<delim-token>`"
    Delim(char),
    /// "`<number-token>`"
    Number {
        /// "a numeric value"
        value: f64,
        /// Set when the type flag is "integer".
        int_value: Option<i64>,
    },
    /// "`<percentage-token>`"
    Percentage {
        /// "a numeric value"
        value: f64,
        /// Set when the type flag is "integer".
        int_value: Option<i64>,
    },
    /// "`<dimension-token>`"
    Dimension {
        /// "a numeric value"
        value: f64,
        /// Set when the type flag is "integer".
        int_value: Option<i64>,
        /// "a unit"
        unit: String,
    },
    /// "`<whitespace-token>`"
    Whitespace,
    /// "`<colon-token>`"
    Colon,
    /// "`<semicolon-token>`"
    Semicolon,
    /// "`<comma-token>`"
    Comma,
    /// `<[-token>`
    LeftBracket,
    /// `<]-token>`
    RightBracket,
    /// `<(-token>`
    LeftParen,
    /// `<)-token>`
    RightParen,
    /// `<{-token>`
    LeftBrace,
    /// `<}-token>`
    RightBrace,
}

impl CSSToken {
    /// Create a new ident token.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// Create a new string token.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a new integer number token.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn integer(value: i64) -> Self {
        Self::Number {
            value: value as f64,
            int_value: Some(value),
        }
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns true for the tokens that mark a parse error.
    #[must_use]
    pub const fn is_bad(&self) -> bool {
        matches!(self, Self::BadString | Self::BadUrl)
    }

    /// [§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization)
    ///
    /// Append the CSS text of this token to `dest`. Names are re-escaped, so
    /// the text tokenizes back to an equal token.
    pub fn to_css(&self, dest: &mut String) {
        match self {
            Self::Ident(name) => serialize_name(name, true, dest),
            Self::Function(name) => {
                serialize_name(name, true, dest);
                dest.push('(');
            }
            Self::AtKeyword(name) => {
                dest.push('@');
                serialize_name(name, true, dest);
            }
            Self::Hash { value, .. } => {
                dest.push('#');
                serialize_name(value, false, dest);
            }
            Self::String(value) => serialize_string(value, dest),
            Self::Url(value) => {
                dest.push_str("url(");
                dest.push_str(value);
                dest.push(')');
            }
            Self::BadString | Self::BadUrl => {}
            Self::Delim(c) => dest.push(*c),
            Self::Number { value, int_value } => serialize_number(*value, *int_value, dest),
            Self::Percentage { value, int_value } => {
                serialize_number(*value, *int_value, dest);
                dest.push('%');
            }
            Self::Dimension {
                value,
                int_value,
                unit,
            } => {
                serialize_number(*value, *int_value, dest);
                serialize_name(unit, true, dest);
            }
            Self::Whitespace => dest.push(' '),
            Self::Colon => dest.push(':'),
            Self::Semicolon => dest.push(';'),
            Self::Comma => dest.push(','),
            Self::LeftBracket => dest.push('['),
            Self::RightBracket => dest.push(']'),
            Self::LeftParen => dest.push('('),
            Self::RightParen => dest.push(')'),
            Self::LeftBrace => dest.push('{'),
            Self::RightBrace => dest.push('}'),
        }
    }
}

/// [§ 2.1 Common serializing idioms](https://drafts.csswg.org/cssom/#serialize-a-string)
///
/// "To serialize a string means to create a string represented by '"',
/// followed by the result of applying the rules below to each character of
/// the given string, followed by '"'."
fn serialize_string(value: &str, dest: &mut String) {
    dest.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                dest.push('\\');
                dest.push(c);
            }
            // "the character escaped as code point"
            '\n' => dest.push_str("\\a "),
            _ => dest.push(c),
        }
    }
    dest.push('"');
}

/// [§ 2.1 Common serializing idioms](https://drafts.csswg.org/cssom/#serialize-an-identifier)
///
/// "To serialize an identifier means to create a string represented by the
/// concatenation of, for each character of the identifier: ..."
///
/// With `as_identifier` unset only the per-character rules apply, which is
/// what the name after `#` needs (`#000` stays `#000`).
fn serialize_name(name: &str, as_identifier: bool, dest: &mut String) {
    // "If the character is the first character and is a '-' (U+002D), and
    // there is no second character, then the escaped character."
    if as_identifier && name == "-" {
        dest.push_str("\\-");
        return;
    }

    let starts_with_hyphen = name.starts_with('-');
    for (i, c) in name.chars().enumerate() {
        // "If the character is the first character and is in the range [0-9]"
        // or "is the second character ... and the first character is a '-'"
        let leading_digit =
            as_identifier && c.is_ascii_digit() && (i == 0 || (i == 1 && starts_with_hyphen));

        match c {
            '\0' => dest.push(char::REPLACEMENT_CHARACTER),
            '\x01'..='\x1F' | '\x7F' => escape_code_point(c, dest),
            _ if leading_digit => escape_code_point(c, dest),
            _ if c == '-' || c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii() => dest.push(c),
            _ => {
                dest.push('\\');
                dest.push(c);
            }
        }
    }
}

/// "the character escaped as code point": `\`, the hex digits, a space.
fn escape_code_point(c: char, dest: &mut String) {
    dest.push('\\');
    dest.push_str(&format!("{:x}", u32::from(c)));
    dest.push(' ');
}

fn serialize_number(value: f64, int_value: Option<i64>, dest: &mut String) {
    match int_value {
        Some(int) => dest.push_str(&int.to_string()),
        None if value.is_nan() => dest.push('0'),
        None => dest.push_str(&value.clamp(f64::MIN, f64::MAX).to_string()),
    }
}

impl fmt::Display for CSSToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::AtKeyword(v) => write!(f, "<at-keyword:@{v}>"),
            Self::Hash { value, .. } => write!(f, "<hash:#{value}>"),
            Self::String(v) => write!(f, "<string:\"{v}\">"),
            Self::BadString => write!(f, "<bad-string>"),
            Self::Url(v) => write!(f, "<url:{v}>"),
            Self::BadUrl => write!(f, "<bad-url>"),
            Self::Delim(c) => write!(f, "<delim:{c}>"),
            Self::Number { value, .. } => write!(f, "<number:{value}>"),
            Self::Percentage { value, .. } => write!(f, "<percentage:{value}%>"),
            Self::Dimension { value, unit, .. } => write!(f, "<dimension:{value}{unit}>"),
            Self::Whitespace => write!(f, "<whitespace>"),
            Self::Colon => write!(f, "<colon>"),
            Self::Semicolon => write!(f, "<semicolon>"),
            Self::Comma => write!(f, "<comma>"),
            Self::LeftBracket => write!(f, "<[>"),
            Self::RightBracket => write!(f, "<]>"),
            Self::LeftParen => write!(f, "<(>"),
            Self::RightParen => write!(f, "<)>"),
            Self::LeftBrace => write!(f, "<{{>"),
            Self::RightBrace => write!(f, "<}}>"),
        }
    }
}
