//! Helpers shared by the codecs: number formatting and child/attribute
//! lookup relative to a parent element.

use crate::error::{CodecError, Result};
use sarmeta_xml::{Element, QName};

/// Converts a boolean to its XML literal.
pub fn bool_to_string(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Formats a double with the shortest text that parses back to the same bits.
///
/// Magnitudes outside `[1e-5, 1e16)` use exponent notation so very large or
/// small values stay short. Infinities and NaN use the XML Schema spellings.
pub fn format_dbl(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-5..1e16).contains(&magnitude) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

/// Parses XML Schema double text, surrounding whitespace allowed.
pub fn parse_dbl(text: &str) -> Option<f64> {
    match text.trim() {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        other => {
            // Rust also accepts "inf"/"infinity"/"nan" spellings; XML does not.
            if other.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
                None
            } else {
                other.parse().ok()
            }
        }
    }
}

/// Name of a child `local` in the parent's namespace.
pub fn child_name(parent: &Element, local: &str) -> QName {
    parent.qname().with_local(local)
}

/// The child `local` of `parent`, or a `MissingChild` error.
pub fn required_child<'a>(parent: &'a Element, local: &str) -> Result<&'a Element> {
    parent
        .find_child(child_name(parent, local))
        .ok_or_else(|| CodecError::MissingChild {
            parent: parent.tag(),
            child: local.to_string(),
        })
}

/// The attribute `name` of `elem`, or a `MissingAttribute` error.
pub fn required_attribute<'a>(elem: &'a Element, name: &str) -> Result<&'a str> {
    elem.attribute(name).ok_or_else(|| CodecError::MissingAttribute {
        tag: elem.tag(),
        attribute: name.to_string(),
    })
}

/// Reads a non-negative integer attribute such as an exponent or index.
pub fn index_attribute(elem: &Element, name: &str) -> Result<usize> {
    let text = required_attribute(elem, name)?;
    text.trim()
        .parse()
        .map_err(|_| CodecError::format(elem.tag(), "index", text).traced())
}

/// Optional non-negative integer attribute; present but malformed is an error.
pub fn optional_index_attribute(elem: &Element, name: &str) -> Result<Option<usize>> {
    match elem.attribute(name) {
        Some(_) => index_attribute(elem, name).map(Some),
        None => Ok(None),
    }
}

/// Replaces the children named by `locals` with `children`, keeping any
/// unrelated children in place ahead of the new ones.
pub fn replace_children(parent: &mut Element, locals: &[&str], children: Vec<Element>) {
    let names: Vec<QName> = locals.iter().map(|local| child_name(parent, local)).collect();
    parent
        .children_mut()
        .retain(|child| !names.contains(child.qname()));
    for child in children {
        parent.append_child(child);
    }
}

/// Renders a shape as `(a, b)`.
pub fn shape_string(shape: &[usize]) -> String {
    let dims: Vec<String> = shape.iter().map(usize::to_string).collect();
    if dims.len() == 1 {
        format!("({},)", dims[0])
    } else {
        format!("({})", dims.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_to_string() {
        assert_eq!(bool_to_string(true), "true");
        assert_eq!(bool_to_string(false), "false");
    }

    #[test]
    fn test_format_dbl_is_short_and_exact() {
        assert_eq!(format_dbl(1.23), "1.23");
        assert_eq!(format_dbl(-10.0), "-10");
        assert_eq!(format_dbl(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_dbl(1e300), "1e300");
        assert_eq!(format_dbl(-2.5e-7), "-2.5e-7");
        assert_eq!(format_dbl(f64::INFINITY), "INF");
        assert_eq!(format_dbl(f64::NEG_INFINITY), "-INF");
        assert_eq!(format_dbl(f64::NAN), "NaN");
        for value in [1.23, 0.1 + 0.2, 1e300, -2.5e-7, f64::MIN_POSITIVE, f64::MAX, -0.0] {
            assert_eq!(parse_dbl(&format_dbl(value)).map(f64::to_bits), Some(value.to_bits()));
        }
    }

    #[test]
    fn test_parse_dbl_accepts_schema_forms_only() {
        assert_eq!(parse_dbl(" 1.5E3 "), Some(1500.0));
        assert_eq!(parse_dbl("-INF"), Some(f64::NEG_INFINITY));
        assert!(parse_dbl("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_dbl("inf"), None);
        assert_eq!(parse_dbl("nan"), None);
        assert_eq!(parse_dbl("1.0.0"), None);
        assert_eq!(parse_dbl(""), None);
    }

    #[test]
    fn test_replace_children_keeps_unrelated() {
        let mut parent = Element::new("{ns}P")
            .with_child(Element::new("{ns}Real").with_text("1"))
            .with_child(Element::new("{ns}Other"));
        replace_children(
            &mut parent,
            &["Real", "Imag"],
            vec![Element::new("{ns}Real"), Element::new("{ns}Imag")],
        );
        let locals: Vec<_> = parent.children().iter().map(|c| c.qname().local().to_string()).collect();
        assert_eq!(locals, vec!["Other", "Real", "Imag"]);
    }

    #[test]
    fn test_shape_string() {
        assert_eq!(shape_string(&[2, 3]), "(2, 3)");
        assert_eq!(shape_string(&[4]), "(4,)");
    }
}
