//! Integration tests for initial-value resolution.

use std::thread;

use wren_css::{
    INITIAL_VALUE_LITERALS, InitialValues, PropertyValue, Resolver, StyleMap, TEXT_ALIGN,
    apply_initial_values, is_initial,
};

/// Helper to build a style map from a declaration block.
fn style(declarations: &str) -> StyleMap {
    let (style, dropped) = StyleMap::parse_declarations(declarations);
    assert!(dropped.is_empty(), "unexpected dropped declarations: {dropped:?}");
    style
}

/// Helper to resolve a declaration block with a fresh resolver.
fn resolve(declarations: &str) -> StyleMap {
    let resolver = Resolver::new().unwrap();
    let mut style = style(declarations);
    resolver.apply_initial_values(&mut style);
    style
}

#[test]
fn test_empty_style_gets_every_default() {
    let style = resolve("");

    for &(name, literal) in INITIAL_VALUE_LITERALS {
        assert_eq!(
            style.get(name),
            Some(&PropertyValue::parse(literal).unwrap()),
            "'{name}'"
        );
    }
    assert_eq!(style.get("display"), Some(&PropertyValue::keyword("inline")));
    assert_eq!(style.get("float"), Some(&PropertyValue::keyword("none")));
    assert_eq!(style.get("z-index"), Some(&PropertyValue::keyword("auto")));
    // Every table entry plus text-align.
    assert_eq!(style.len(), INITIAL_VALUE_LITERALS.len() + 1);
}

#[test]
fn test_text_align_defaults_to_left() {
    let style = resolve("");
    assert_eq!(style.get("direction"), Some(&PropertyValue::keyword("ltr")));
    assert_eq!(style.get(TEXT_ALIGN), Some(&PropertyValue::keyword("left")));
}

#[test]
fn test_rtl_direction_aligns_right() {
    let style = resolve("direction: rtl");
    assert_eq!(style.get("direction"), Some(&PropertyValue::keyword("rtl")));
    assert_eq!(style.get(TEXT_ALIGN), Some(&PropertyValue::keyword("right")));
}

#[test]
fn test_direction_keyword_is_case_insensitive() {
    let style = resolve("direction: RTL");
    assert_eq!(style.get("direction"), Some(&PropertyValue::keyword("RTL")));
    assert_eq!(style.get(TEXT_ALIGN), Some(&PropertyValue::keyword("right")));
}

#[test]
fn test_initial_direction_resolves_before_text_align() {
    let style = resolve("direction: initial");
    assert_eq!(style.get("direction"), Some(&PropertyValue::keyword("ltr")));
    assert_eq!(style.get(TEXT_ALIGN), Some(&PropertyValue::keyword("left")));
}

#[test]
fn test_explicit_text_align_is_kept() {
    let style = resolve("direction: rtl; text-align: center");
    assert_eq!(style.get(TEXT_ALIGN), Some(&PropertyValue::keyword("center")));
}

#[test]
fn test_initial_text_align_follows_direction() {
    let style = resolve("direction: rtl; text-align: initial");
    assert_eq!(style.get(TEXT_ALIGN), Some(&PropertyValue::keyword("right")));
}

#[test]
fn test_initial_color_becomes_black() {
    let style = resolve("color: initial");
    assert_eq!(style.get("color").unwrap().to_css(), "#000");
    assert_eq!(style.get("display"), Some(&PropertyValue::keyword("inline")));
    assert_eq!(style.get("margin-top").unwrap().to_css(), "0");
}

#[test]
fn test_concrete_values_are_untouched() {
    let style = resolve("display: block; margin-top: 1.5em; color: #ff0000");
    assert_eq!(style.get("display"), Some(&PropertyValue::keyword("block")));
    assert_eq!(style.get("margin-top").unwrap().to_css(), "1.5em");
    assert_eq!(style.get("color").unwrap().to_css(), "#ff0000");
}

#[test]
fn test_initial_keyword_is_case_sensitive() {
    let style = resolve("display: INITIAL");
    assert_eq!(style.get("display"), Some(&PropertyValue::keyword("INITIAL")));
}

#[test]
fn test_unknown_properties_are_left_alone() {
    let style = resolve("-wren-bookmark-level: 2; --accent: initial");
    assert_eq!(style.get("-wren-bookmark-level").unwrap().to_css(), "2");
    assert_eq!(style.get("--accent"), Some(&PropertyValue::keyword("initial")));
}

#[test]
fn test_resolution_is_idempotent() {
    let resolver = Resolver::new().unwrap();
    let mut once = style("direction: rtl; color: initial; width: 10px");
    resolver.apply_initial_values(&mut once);

    let mut twice = once.clone();
    resolver.apply_initial_values(&mut twice);
    assert_eq!(once, twice);
    assert!(resolver.defaulted_properties(&once).is_empty());
}

#[test]
fn test_is_initial() {
    let style = style("color: initial; display: block; width: initial initial; -x-custom: red");

    // Absent
    assert!(is_initial(&style, "float"));
    assert!(is_initial(&style, "not-a-property"));
    // The single keyword `initial`
    assert!(is_initial(&style, "color"));
    // Anything else
    assert!(!is_initial(&style, "display"));
    assert!(!is_initial(&style, "width"));
    assert!(!is_initial(&style, "-x-custom"));
}

#[test]
fn test_resolver_is_initial() {
    let resolver = Resolver::new().unwrap();
    let style = style("color: initial; display: block; width: initial initial; -x-custom: red");

    for name in ["float", "not-a-property", "color"] {
        assert!(resolver.is_initial(&style, name), "'{name}'");
    }
    for name in ["display", "width", "-x-custom"] {
        assert!(!resolver.is_initial(&style, name), "'{name}'");
    }
    for name in ["float", "color", "display", "width", "-x-custom"] {
        assert_eq!(resolver.is_initial(&style, name), is_initial(&style, name));
    }
}

#[test]
fn test_is_initial_has_no_side_effects() {
    let style = style("color: initial");
    let before = style.clone();
    let _ = is_initial(&style, "color");
    let _ = is_initial(&style, "float");
    assert_eq!(style, before);
}

#[test]
fn test_defaulted_properties() {
    let resolver = Resolver::new().unwrap();
    let style = style("color: initial; display: block; text-align: justify");
    let defaulted = resolver.defaulted_properties(&style);

    assert!(defaulted.contains(&"color"));
    assert!(!defaulted.contains(&"display"));
    assert!(!defaulted.contains(&TEXT_ALIGN));
    assert_eq!(defaulted.len(), INITIAL_VALUE_LITERALS.len() - 1);
    assert_eq!(resolver.defaulted_properties(&StyleMap::new()).last(), Some(&TEXT_ALIGN));
}

#[test]
fn test_free_function_matches_resolver() {
    let table = InitialValues::build().unwrap();
    let resolver = Resolver::with_initial_values(table.clone());

    let mut a = style("direction: rtl");
    let mut b = a.clone();
    apply_initial_values(&table, &mut a);
    resolver.apply_initial_values(&mut b);
    assert_eq!(a, b);
    assert_eq!(resolver.initial_values().len(), table.len());
}

#[test]
fn test_non_keyword_direction_aligns_left() {
    let resolver = Resolver::new().unwrap();
    let mut style = StyleMap::new();
    let _ = style.insert("direction", PropertyValue::parse("rtl ltr").unwrap());
    resolver.apply_initial_values(&mut style);
    assert_eq!(style.get(TEXT_ALIGN), Some(&PropertyValue::keyword("left")));
}

#[test]
fn test_shared_resolver_across_threads() {
    let resolver = Resolver::new().unwrap();
    let directions = ["ltr", "rtl", "initial", "rtl"];

    let aligned: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = directions
            .iter()
            .map(|direction| {
                let resolver = &resolver;
                scope.spawn(move || {
                    let mut style = style(&format!("direction: {direction}"));
                    resolver.apply_initial_values(&mut style);
                    style.get(TEXT_ALIGN).unwrap().to_css()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(aligned, ["left", "right", "left", "right"]);
}
