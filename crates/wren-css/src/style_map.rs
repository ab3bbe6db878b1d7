//! One element's style in progress: property name to value.
//!
//! The map is created by the cascade, handed to the resolver to backfill
//! initial values, and then consumed by layout. It iterates in name order so
//! that dumps are stable.

use std::collections::BTreeMap;

use serde::Serialize;
use wren_common::warning::warn_once;

use crate::error::ValueParseError;
use crate::parser::CSSParser;
use crate::values::PropertyValue;

/// A declaration that [`StyleMap::parse_declarations`] had to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedDeclaration {
    /// The property name (lower-cased).
    pub name: String,
    /// Why the value was rejected.
    pub error: ValueParseError,
}

/// Property name to value, for a single element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleMap {
    values: BTreeMap<String, PropertyValue>,
}

impl StyleMap {
    /// Create an empty style map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
    ///
    /// Build a style map from a declaration block such as
    /// `direction: rtl; color: initial`, the way a `style` attribute is read.
    ///
    /// Property names are ASCII lower-cased (custom properties excepted), later
    /// declarations win, and `!important` is ignored. Declarations whose value
    /// does not parse are dropped, reported through the warning channel, and
    /// returned alongside the map.
    #[must_use]
    pub fn parse_declarations(text: &str) -> (Self, Vec<DroppedDeclaration>) {
        let mut style = Self::new();
        let mut dropped = Vec::new();

        for declaration in CSSParser::from_css(text).parse_declaration_list() {
            let name = if declaration.name.starts_with("--") {
                declaration.name
            } else {
                declaration.name.to_ascii_lowercase()
            };

            match PropertyValue::from_components(declaration.value) {
                Ok(value) => {
                    let _ = style.insert(name, value);
                }
                Err(error) => {
                    warn_once("CSS", &format!("dropped declaration '{name}': {error}"));
                    dropped.push(DroppedDeclaration { name, error });
                }
            }
        }

        (style, dropped)
    }

    /// The value of `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    /// Whether `name` has a value (possibly the `initial` keyword).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Set `name`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) -> Option<PropertyValue> {
        self.values.insert(name.into(), value)
    }

    /// Unset `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.values.remove(name)
    }

    /// Keep only the properties for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &PropertyValue) -> bool) {
        self.values.retain(|name, value| keep(name, value));
    }

    /// Number of properties set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<N: Into<String>> FromIterator<(N, PropertyValue)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (N, PropertyValue)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
