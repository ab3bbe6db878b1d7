//! Pre-parsed CSS property values.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! A [`PropertyValue`] is the list of component values a declaration's value
//! parses into. No property grammar is applied: `0% 0%`, `currentColor` and
//! `"“" "”"` are all just component values until computed-value time.

use core::fmt;
use core::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ValueParseError;
use crate::parser::css_parser::{serialize_list, trim_whitespace};
use crate::parser::{CSSParser, ComponentValue, MAX_NESTING_DEPTH};
use crate::tokenizer::CSSToken;

/// [§ 7.3 Explicit Defaulting](https://www.w3.org/TR/css-cascade-4/#initial)
///
/// "The `initial` CSS-wide keyword represents the value defined as the
/// property's initial value."
pub const INITIAL_KEYWORD: &str = "initial";

/// A declared, cascaded or initial value for one CSS property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
    components: Vec<ComponentValue>,
}

impl PropertyValue {
    /// Parse a value literal such as `0% 0%` or `currentColor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the literal is empty, contains a bad string or url,
    /// contains a token that cannot appear inside a declaration value, or
    /// nests deeper than [`MAX_NESTING_DEPTH`].
    pub fn parse(text: &str) -> Result<Self, ValueParseError> {
        Self::from_components(CSSParser::from_css(text).parse_component_values())
    }

    /// Wrap already-parsed component values (e.g. a [`Declaration`]'s value).
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PropertyValue::parse`].
    ///
    /// [`Declaration`]: crate::parser::Declaration
    pub fn from_components(mut components: Vec<ComponentValue>) -> Result<Self, ValueParseError> {
        trim_whitespace(&mut components);
        if components.is_empty() {
            return Err(ValueParseError::Empty);
        }
        validate(&components)?;
        Ok(Self { components })
    }

    /// A value made of a single `<ident-token>`.
    #[must_use]
    pub fn keyword(keyword: &str) -> Self {
        Self {
            components: vec![ComponentValue::Token(CSSToken::ident(keyword))],
        }
    }

    /// The component values, without surrounding whitespace.
    #[must_use]
    pub fn components(&self) -> &[ComponentValue] {
        &self.components
    }

    /// The keyword, if this value is exactly one `<ident-token>`.
    ///
    /// The keyword is returned as written; callers decide on case sensitivity.
    #[must_use]
    pub fn as_single_keyword(&self) -> Option<&str> {
        match self.components.as_slice() {
            [ComponentValue::Token(CSSToken::Ident(keyword))] => Some(keyword),
            _ => None,
        }
    }

    /// [§ 7.3.1 Resetting a Property: the initial keyword](https://www.w3.org/TR/css-cascade-4/#initial)
    ///
    /// Whether this value is the single keyword `initial` (case-sensitive).
    #[must_use]
    pub fn is_initial_keyword(&self) -> bool {
        self.as_single_keyword() == Some(INITIAL_KEYWORD)
    }

    /// Serialize back to CSS text.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut dest = String::new();
        serialize_list(&self.components, &mut dest);
        dest
    }
}

/// Reject tokens that cannot survive inside a declaration value.
fn validate(components: &[ComponentValue]) -> Result<(), ValueParseError> {
    for component in components {
        match component {
            ComponentValue::Token(token) if token.is_bad() => {
                return Err(ValueParseError::BadToken {
                    token: token.to_string(),
                });
            }
            ComponentValue::Token(
                token @ (CSSToken::Semicolon
                | CSSToken::RightParen
                | CSSToken::RightBracket
                | CSSToken::RightBrace),
            ) => {
                return Err(ValueParseError::UnexpectedToken {
                    token: token.to_string(),
                });
            }
            ComponentValue::Block { token: '{', .. } => {
                return Err(ValueParseError::UnexpectedToken {
                    token: CSSToken::LeftBrace.to_string(),
                });
            }
            ComponentValue::Function { value, .. } | ComponentValue::Block { value, .. } => {
                validate(value)?;
            }
            ComponentValue::TooDeep => {
                return Err(ValueParseError::TooDeeplyNested {
                    limit: MAX_NESTING_DEPTH,
                });
            }
            ComponentValue::Token(_) => {}
        }
    }
    Ok(())
}

impl FromStr for PropertyValue {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
