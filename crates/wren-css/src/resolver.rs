//! Initial-value resolution.
//!
//! [CSS Cascading Level 4 § 7.1 Initial Values](https://www.w3.org/TR/css-cascade-4/#initial-values)
//!
//! "When the cascade does not result in a value, the specified value must be
//! found some other way. Inherited properties draw their defaulted value from
//! their parent element through inheritance; all other properties take their
//! initial value."
//!
//! Inheritance has already run when the resolver is called. What is left is
//! every property that is still absent, or whose value is the CSS-wide
//! keyword `initial`.

use wren_common::warning::warn_once;

use crate::error::InitialValuesError;
use crate::keywords::{Direction, TextAlign};
use crate::properties::{DIRECTION, InitialValues, TEXT_ALIGN};
use crate::style_map::StyleMap;

/// Whether `name` still needs its initial value: it is absent from `style`,
/// or its value is exactly the keyword `initial`.
///
/// Names outside the initial-value table follow the same rule.
#[must_use]
pub fn is_initial(style: &StyleMap, name: &str) -> bool {
    style.get(name).is_none_or(|value| value.is_initial_keyword())
}

/// Give every absent or `initial` longhand in `style` its initial value.
///
/// Runs in two phases. The general pass copies defaults from the table,
/// which resolves `direction`. Only then is `text-align` resolved against
/// that direction. Calling this again on the same map changes nothing.
pub fn apply_initial_values(initial_values: &InitialValues, style: &mut StyleMap) {
    for (name, initial) in initial_values.iter() {
        if is_initial(style, name) {
            let _ = style.insert(name, initial.clone());
        }
    }

    if is_initial(style, TEXT_ALIGN) {
        let _ = style.insert(TEXT_ALIGN, initial_text_align(style).to_value());
    }
}

/// [§ 16.2 'text-align'](https://www.w3.org/TR/CSS21/text.html#alignment-prop)
///
/// "a nameless value that acts as 'left' if 'direction' is 'ltr', 'right'
/// if 'direction' is 'rtl'"
///
/// `direction` must already be resolved. Every [`InitialValues`] has a
/// `direction` entry, so the general pass always leaves one behind.
fn initial_text_align(style: &StyleMap) -> TextAlign {
    let Some(direction) = style.get(DIRECTION) else {
        unreachable!("'text-align' resolved before 'direction'");
    };

    if let Some(direction) = Direction::from_value(direction) {
        direction.initial_text_align()
    } else {
        warn_once(
            "CSS",
            &format!("'direction: {direction}' is not ltr or rtl, aligning text to the left"),
        );
        TextAlign::Left
    }
}

/// The style-resolution context: owns the initial-value table and applies it.
///
/// Build one per process (or per pipeline) and share it; resolving only reads
/// the table.
#[derive(Debug, Clone)]
pub struct Resolver {
    initial_values: InitialValues,
}

impl Resolver {
    /// Build the initial-value table and wrap it.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in table is defective. This is a
    /// start-up failure; there is nothing to retry.
    pub fn new() -> Result<Self, InitialValuesError> {
        Ok(Self::with_initial_values(InitialValues::build()?))
    }

    /// Use an already-built table.
    #[must_use]
    pub const fn with_initial_values(initial_values: InitialValues) -> Self {
        Self { initial_values }
    }

    /// The table this resolver applies.
    #[must_use]
    pub const fn initial_values(&self) -> &InitialValues {
        &self.initial_values
    }

    /// See [`is_initial`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_initial(&self, style: &StyleMap, name: &str) -> bool {
        is_initial(style, name)
    }

    /// See [`apply_initial_values`].
    pub fn apply_initial_values(&self, style: &mut StyleMap) {
        apply_initial_values(&self.initial_values, style);
    }

    /// The properties [`Resolver::apply_initial_values`] would fill in, in
    /// table order with `text-align` last.
    #[must_use]
    pub fn defaulted_properties(&self, style: &StyleMap) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .initial_values
            .names()
            .filter(|name| is_initial(style, name))
            .collect();
        if is_initial(style, TEXT_ALIGN) {
            names.push(TEXT_ALIGN);
        }
        names
    }
}
