//! Typed views of the keywords the resolver reasons about.

use strum_macros::{Display, EnumString};

use crate::values::PropertyValue;

/// [§ 9.10 Text direction: the 'direction' property](https://www.w3.org/TR/CSS21/visuren.html#direction)
///
/// "Value: ltr | rtl | inherit"
/// "Initial: ltr"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    /// "Left-to-right direction."
    #[default]
    Ltr,
    /// "Right-to-left direction."
    Rtl,
}

impl Direction {
    /// Read a direction from a single-keyword value (ASCII case-insensitive).
    #[must_use]
    pub fn from_value(value: &PropertyValue) -> Option<Self> {
        value.as_single_keyword()?.parse().ok()
    }

    /// [§ 16.2 Alignment: the 'text-align' property](https://www.w3.org/TR/CSS21/text.html#alignment-prop)
    ///
    /// "Initial: a nameless value that acts as 'left' if 'direction' is 'ltr',
    /// 'right' if 'direction' is 'rtl'"
    #[must_use]
    pub const fn initial_text_align(self) -> TextAlign {
        match self {
            Self::Ltr => TextAlign::Left,
            Self::Rtl => TextAlign::Right,
        }
    }
}

/// [§ 16.2 Alignment: the 'text-align' property](https://www.w3.org/TR/CSS21/text.html#alignment-prop)
///
/// "Value: left | right | center | justify | inherit"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TextAlign {
    /// `left`
    Left,
    /// `right`
    Right,
    /// `center`
    Center,
    /// `justify`
    Justify,
}

impl TextAlign {
    /// Read an alignment from a single-keyword value (ASCII case-insensitive).
    #[must_use]
    pub fn from_value(value: &PropertyValue) -> Option<Self> {
        value.as_single_keyword()?.parse().ok()
    }

    /// The keyword value for this alignment.
    #[must_use]
    pub fn to_value(self) -> PropertyValue {
        PropertyValue::keyword(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_keywords() {
        assert_eq!(Direction::from_value(&PropertyValue::keyword("rtl")), Some(Direction::Rtl));
        assert_eq!(Direction::from_value(&PropertyValue::keyword("ltr")), Some(Direction::Ltr));
        assert_eq!(Direction::from_value(&PropertyValue::keyword("RTL")), Some(Direction::Rtl));
        assert_eq!(Direction::from_value(&PropertyValue::keyword("rtl-ish")), None);
        assert_eq!(Direction::from_value(&PropertyValue::parse("rtl ltr").unwrap()), None);
    }

    #[test]
    fn test_text_align_round_trips_through_keyword() {
        assert_eq!(TextAlign::Right.to_value(), PropertyValue::keyword("right"));
        assert_eq!(
            TextAlign::from_value(&PropertyValue::keyword("justify")),
            Some(TextAlign::Justify)
        );
    }

    #[test]
    fn test_initial_text_align_follows_direction() {
        assert_eq!(Direction::default().initial_text_align(), TextAlign::Left);
        assert_eq!(Direction::Rtl.initial_text_align(), TextAlign::Right);
    }
}
