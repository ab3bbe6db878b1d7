//! Initial values of the CSS 2.1 longhand properties.
//!
//! [CSS 2.1 Appendix F: Full property table](https://www.w3.org/TR/CSS21/propidx.html)
//!
//! "The initial value of a property is ... the value it has when no other
//! value is specified, including inherited values."
//!
//! Plus `size` from [CSS Paged Media Level 3 § 7.1](https://www.w3.org/TR/css-page-3/#page-size-prop).

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::InitialValuesError;
use crate::values::PropertyValue;

/// [§ 5.2 'direction'](https://www.w3.org/TR/CSS21/visuren.html#direction)
pub const DIRECTION: &str = "direction";

/// [§ 16.2 'text-align'](https://www.w3.org/TR/CSS21/text.html#alignment-prop)
pub const TEXT_ALIGN: &str = "text-align";

/// The literal table, in Appendix F order.
///
/// Only longhands appear here: shorthand expansion depends on this exact set.
///
/// `text-align` is absent. Its initial value is "a nameless value that acts as
/// 'left' if 'direction' is 'ltr', 'right' if 'direction' is 'rtl'", which
/// cannot be written as CSS; the resolver handles it after the general pass.
pub const INITIAL_VALUE_LITERALS: &[(&str, &str)] = &[
    ("azimuth", "center"),
    ("background-attachment", "scroll"),
    ("background-color", "transparent"),
    ("background-image", "none"),
    ("background-position", "0% 0%"),
    ("background-repeat", "repeat"),
    ("border-collapse", "separate"),
    // https://www.w3.org/TR/css3-color/#currentcolor
    ("border-top-color", "currentColor"),
    ("border-right-color", "currentColor"),
    ("border-bottom-color", "currentColor"),
    ("border-left-color", "currentColor"),
    ("border-spacing", "0"),
    ("border-top-style", "none"),
    ("border-right-style", "none"),
    ("border-bottom-style", "none"),
    ("border-left-style", "none"),
    ("border-top-width", "medium"),
    ("border-right-width", "medium"),
    ("border-bottom-width", "medium"),
    ("border-left-width", "medium"),
    ("bottom", "auto"),
    ("caption-side", "top"),
    ("clear", "none"),
    ("clip", "auto"),
    // "depends on user agent"
    ("color", "#000"),
    ("content", "normal"),
    ("counter-increment", "none"),
    ("counter-reset", "none"),
    ("cue-after", "none"),
    ("cue-before", "none"),
    ("cursor", "auto"),
    (DIRECTION, "ltr"),
    ("display", "inline"),
    ("elevation", "level"),
    ("empty-cells", "show"),
    ("float", "none"),
    // "depends on user agent"
    ("font-family", "serif"),
    ("font-size", "medium"),
    ("font-style", "normal"),
    ("font-variant", "normal"),
    ("font-weight", "normal"),
    ("height", "auto"),
    ("left", "auto"),
    ("letter-spacing", "normal"),
    ("line-height", "normal"),
    ("list-style-image", "none"),
    ("list-style-position", "outside"),
    ("list-style-type", "disc"),
    ("margin-top", "0"),
    ("margin-right", "0"),
    ("margin-bottom", "0"),
    ("margin-left", "0"),
    ("max-height", "none"),
    ("max-width", "none"),
    ("min-height", "0"),
    ("min-width", "0"),
    ("orphans", "2"),
    ("outline-color", "invert"),
    ("outline-style", "none"),
    ("outline-width", "medium"),
    ("overflow", "visible"),
    ("padding-top", "0"),
    ("padding-right", "0"),
    ("padding-bottom", "0"),
    ("padding-left", "0"),
    ("page-break-after", "auto"),
    ("page-break-before", "auto"),
    ("page-break-inside", "auto"),
    ("pause-after", "0"),
    ("pause-before", "0"),
    ("pitch-range", "50"),
    ("pitch", "medium"),
    ("play-during", "auto"),
    // "depends on user agent"
    ("quotes", "\"\u{201C}\" \"\u{201D}\" \"\u{2018}\" \"\u{2019}\""),
    ("position", "static"),
    ("richness", "50"),
    ("right", "auto"),
    ("speak-header", "once"),
    ("speak-numeral", "continuous"),
    ("speak-punctuation", "none"),
    ("speak", "normal"),
    ("speech-rate", "medium"),
    ("stress", "50"),
    ("table-layout", "auto"),
    ("text-decoration", "none"),
    ("text-indent", "0"),
    ("text-transform", "none"),
    ("top", "auto"),
    ("unicode-bidi", "normal"),
    ("vertical-align", "baseline"),
    ("visibility", "visible"),
    // "depends on user agent"
    ("voice-family", "child"),
    ("volume", "medium"),
    ("white-space", "normal"),
    ("widows", "2"),
    ("width", "auto"),
    ("word-spacing", "normal"),
    ("z-index", "auto"),
    // CSS3 Paged Media
    ("size", "auto"),
];

/// [CSS 2.1 § 1.4.3 Shorthand properties](https://www.w3.org/TR/CSS21/about.html#shorthand)
///
/// Every CSS 2.1 shorthand. None of them may appear in the initial-value table.
pub const SHORTHANDS: &[&str] = &[
    "background",
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-color",
    "border-style",
    "border-width",
    "cue",
    "font",
    "list-style",
    "margin",
    "outline",
    "padding",
    "pause",
];

/// Whether `name` is a CSS 2.1 shorthand property.
#[must_use]
pub fn is_shorthand(name: &str) -> bool {
    SHORTHANDS.contains(&name)
}

/// The initial-value table: one pre-parsed default per longhand property.
///
/// Built once and never mutated afterwards. It is `Send + Sync`, so a single
/// table can back resolvers running on many threads.
#[derive(Debug, Clone)]
pub struct InitialValues {
    /// Entries in table order.
    entries: Vec<(&'static str, PropertyValue)>,
    /// Property name to index in `entries`.
    index: HashMap<&'static str, usize>,
}

impl InitialValues {
    /// Parse the built-in table ([`INITIAL_VALUE_LITERALS`]).
    ///
    /// # Errors
    ///
    /// Fails only if the built-in table itself is defective; callers should
    /// treat this as fatal.
    pub fn build() -> Result<Self, InitialValuesError> {
        Self::from_literals(INITIAL_VALUE_LITERALS)
    }

    /// Parse a table of `(property, literal)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a literal does not parse, a property is listed
    /// twice, a shorthand is listed, or `direction` is missing.
    pub fn from_literals(literals: &[(&'static str, &str)]) -> Result<Self, InitialValuesError> {
        let mut entries = Vec::with_capacity(literals.len());
        let mut index = HashMap::with_capacity(literals.len());

        for &(property, literal) in literals {
            if is_shorthand(property) {
                return Err(InitialValuesError::ShorthandKey { property });
            }
            let value = PropertyValue::parse(literal)
                .map_err(|source| InitialValuesError::MalformedLiteral { property, source })?;
            if index.insert(property, entries.len()).is_some() {
                return Err(InitialValuesError::DuplicateKey { property });
            }
            entries.push((property, value));
        }

        if !index.contains_key(DIRECTION) {
            return Err(InitialValuesError::MissingDirection);
        }

        Ok(Self { entries, index })
    }

    /// The initial value of `property`, if it has a static one.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.index.get(property).map(|&i| &self.entries[i].1)
    }

    /// Whether `property` has an entry.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.index.contains_key(property)
    }

    /// All `(property, initial value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropertyValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    /// All property names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Number of properties in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialized as a `{ property: "css text" }` object in table order.
impl Serialize for InitialValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
