//! The capability shared by every codec.

use crate::error::Result;
use sarmeta_xml::{Element, QName};

/// Converts between one native value shape and an XML element.
///
/// Codecs are immutable; any shape or arity parameters are fixed when the
/// codec is built and checked on every call before the element is touched.
pub trait Codec {
    /// The native value this codec reads and writes.
    type Value;

    /// Decodes the value held by `elem`.
    fn parse_elem(&self, elem: &Element) -> Result<Self::Value>;

    /// Writes `value` into an existing element, replacing whatever content
    /// this codec owns (text, its attributes, its children).
    fn set_elem(&self, elem: &mut Element, value: &Self::Value) -> Result<()>;

    /// Creates a new element with the given tag holding `value`.
    fn make_elem(&self, tag: impl Into<QName>, value: &Self::Value) -> Result<Element> {
        let mut elem = Element::new(tag);
        self.set_elem(&mut elem, value)?;
        Ok(elem)
    }
}
