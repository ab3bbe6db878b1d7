//! Error types for value parsing and initial-value table construction.

use thiserror::Error;

/// A CSS value literal that could not be turned into a [`PropertyValue`].
///
/// [`PropertyValue`]: crate::PropertyValue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueParseError {
    /// [§ 2.1 Component value types](https://www.w3.org/TR/css-values-4/#component-types)
    ///
    /// The value has no component values once whitespace is trimmed.
    #[error("empty value")]
    Empty,

    /// A `<bad-string-token>` or `<bad-url-token>`.
    #[error("invalid token {token} in value")]
    BadToken {
        /// The offending token, rendered with its `Display` form.
        token: String,
    },

    /// A token that cannot appear in a declaration value: `;`, a `{}` block,
    /// or an unmatched closing bracket.
    #[error("unexpected token {token} in value")]
    UnexpectedToken {
        /// The offending token, rendered with its `Display` form.
        token: String,
    },

    /// Blocks or functions nested deeper than the parser follows.
    #[error("value nests blocks or functions more than {limit} deep")]
    TooDeeplyNested {
        /// The nesting limit, [`MAX_NESTING_DEPTH`].
        ///
        /// [`MAX_NESTING_DEPTH`]: crate::parser::MAX_NESTING_DEPTH
        limit: usize,
    },
}

/// The initial-value table could not be built.
///
/// There is no untrusted input involved: every variant is a defect in the
/// literal table and is fatal at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitialValuesError {
    /// A literal in the table failed to parse.
    #[error("malformed initial value for '{property}': {source}")]
    MalformedLiteral {
        /// The property whose literal is malformed.
        property: &'static str,
        /// Why the literal was rejected.
        source: ValueParseError,
    },

    /// A shorthand property has an entry. Shorthand expansion relies on the
    /// table holding longhands only.
    #[error("'{property}' is a shorthand and cannot have an initial value")]
    ShorthandKey {
        /// The shorthand property name.
        property: &'static str,
    },

    /// The same property is listed twice.
    #[error("duplicate initial value for '{property}'")]
    DuplicateKey {
        /// The repeated property name.
        property: &'static str,
    },

    /// The table has no `direction` entry, so `text-align` cannot be resolved.
    #[error("the initial value table has no entry for 'direction'")]
    MissingDirection,
}
