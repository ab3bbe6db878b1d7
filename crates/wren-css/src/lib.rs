//! CSS value parsing and initial-value resolution for the Wren style engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - Ident, function, at-keyword, hash, string, url, number, percentage and
//!     dimension tokens, comments and escapes
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Component values (functions and simple blocks)
//!   - Declaration lists, including `!important`
//!
//! - **Property values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Pre-parsed values with single-keyword access and serialization
//!
//! - **Initial values** ([CSS 2.1 Appendix F](https://www.w3.org/TR/CSS21/propidx.html))
//!   - The initial value of every CSS 2.1 longhand, plus Paged Media `size`
//!   - Backfilling absent and `initial` properties, including the
//!     direction-dependent initial value of `text-align`
//!
//! # Not Implemented
//!
//! - The cascade itself (origins, specificity, `!important`)
//! - Property grammars and computed/used values
//!
//! # Example
//!
//! ```
//! use wren_css::{PropertyValue, Resolver, StyleMap};
//!
//! let resolver = Resolver::new().unwrap();
//! let (mut style, _dropped) = StyleMap::parse_declarations("direction: rtl");
//! resolver.apply_initial_values(&mut style);
//!
//! assert_eq!(style.get("text-align"), Some(&PropertyValue::keyword("right")));
//! assert_eq!(style.get("display"), Some(&PropertyValue::keyword("inline")));
//! ```

/// Value parsing and table construction errors.
pub mod error;
/// Typed `direction` and `text-align` keywords.
pub mod keywords;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// The initial-value table per [CSS 2.1 Appendix F](https://www.w3.org/TR/CSS21/propidx.html).
pub mod properties;
/// Initial-value resolution per [CSS Cascading Level 4 § 7.1](https://www.w3.org/TR/css-cascade-4/#initial-values).
pub mod resolver;
/// Per-element style maps.
pub mod style_map;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// Pre-parsed property values.
pub mod values;

// Re-exports for convenience
pub use error::{InitialValuesError, ValueParseError};
pub use keywords::{Direction, TextAlign};
pub use parser::{CSSParser, ComponentValue, Declaration, MAX_NESTING_DEPTH};
pub use properties::{
    DIRECTION, INITIAL_VALUE_LITERALS, InitialValues, SHORTHANDS, TEXT_ALIGN, is_shorthand,
};
pub use resolver::{Resolver, apply_initial_values, is_initial};
pub use style_map::{DroppedDeclaration, StyleMap};
pub use tokenizer::{CSSToken, CSSTokenizer};
pub use values::{INITIAL_KEYWORD, PropertyValue};
