//! Fixed-length coordinate tuples (XYZ, XY, line/sample, ...).
//!
//! Each tuple is a named, ordered group of scalar children. Children are
//! written in declared order and read back by name, so a document may list
//! them in any order.

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::scalar::{DblCodec, IntCodec};
use crate::utils;
use sarmeta_xml::Element;

/// A tuple codec: fixed child names sharing one scalar codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TupleCodec<C> {
    fields: &'static [&'static str],
    codec: C,
}

impl<C> TupleCodec<C> {
    /// Builds a tuple codec over arbitrary child names.
    pub const fn new(fields: &'static [&'static str], codec: C) -> Self {
        Self { fields, codec }
    }

    /// Child names in canonical order.
    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }
}

impl TupleCodec<DblCodec> {
    pub const fn xyz() -> Self {
        Self::new(&["X", "Y", "Z"], DblCodec)
    }

    pub const fn xy() -> Self {
        Self::new(&["X", "Y"], DblCodec)
    }

    pub const fn lat_lon() -> Self {
        Self::new(&["Lat", "Lon"], DblCodec)
    }

    pub const fn lat_lon_hae() -> Self {
        Self::new(&["Lat", "Lon", "HAE"], DblCodec)
    }
}

impl TupleCodec<IntCodec> {
    pub const fn line_samp() -> Self {
        Self::new(&["Line", "Sample"], IntCodec)
    }

    pub const fn row_col() -> Self {
        Self::new(&["Row", "Col"], IntCodec)
    }
}

impl<C: Codec> Codec for TupleCodec<C> {
    type Value = Vec<C::Value>;

    fn parse_elem(&self, elem: &Element) -> Result<Self::Value> {
        self.fields
            .iter()
            .map(|field| self.codec.parse_elem(utils::required_child(elem, field)?))
            .collect()
    }

    fn set_elem(&self, elem: &mut Element, value: &Self::Value) -> Result<()> {
        if value.len() != self.fields.len() {
            return Err(CodecError::Length {
                tag: elem.tag(),
                actual: value.len(),
                expected: self.fields.len(),
            }
            .traced());
        }
        let children = self
            .fields
            .iter()
            .zip(value)
            .map(|(field, item)| self.codec.make_elem(utils::child_name(elem, field), item))
            .collect::<Result<Vec<_>>>()?;
        utils::replace_children(elem, self.fields, children);
        Ok(())
    }
}

/// Tuple of doubles: XYZ, XY, lat/lon and lat/lon/HAE.
pub type DblTupleCodec = TupleCodec<DblCodec>;

/// Tuple of integers: line/sample and row/col.
pub type IntTupleCodec = TupleCodec<IntCodec>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_written_in_declared_order() {
        let elem = TupleCodec::xyz()
            .make_elem("{faux-ns}XyzNode", &vec![-10.0, 10.0, 0.2])
            .unwrap();
        let tags: Vec<_> = elem.children().iter().map(Element::tag).collect();
        assert_eq!(tags, vec!["{faux-ns}X", "{faux-ns}Y", "{faux-ns}Z"]);
        assert_eq!(elem.children()[2].text(), Some("0.2"));
    }

    #[test]
    fn test_set_elem_replaces_existing_children() {
        let codec = TupleCodec::row_col();
        let mut elem = codec.make_elem("Size", &vec![1, 2]).unwrap();
        codec.set_elem(&mut elem, &vec![30, 40]).unwrap();
        assert_eq!(elem.children().len(), 2);
        assert_eq!(codec.parse_elem(&elem).unwrap(), vec![30, 40]);
    }
}
