//! Repeated children carrying a 1-based `index` attribute.

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::utils;
use sarmeta_xml::Element;

const INDEX: &str = "index";

/// A variable-length list of same-named children, each holding one item.
///
/// Items are read back in `index` order regardless of document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCodec<C> {
    item: String,
    codec: C,
}

impl<C> ListCodec<C> {
    pub fn new(item: impl Into<String>, codec: C) -> Self {
        Self {
            item: item.into(),
            codec,
        }
    }

    /// Local name of the repeated child.
    pub fn item(&self) -> &str {
        &self.item
    }
}

impl<C: Codec> Codec for ListCodec<C> {
    type Value = Vec<C::Value>;

    fn parse_elem(&self, elem: &Element) -> Result<Self::Value> {
        let name = utils::child_name(elem, &self.item);
        let mut indexed = Vec::new();
        for child in elem.find_children(name) {
            let index = utils::index_attribute(child, INDEX)?;
            if index == 0 {
                return Err(CodecError::validation(
                    elem.tag(),
                    format!("has {} index 0; indices start at 1", self.item),
                )
                .traced());
            }
            indexed.push((index, self.codec.parse_elem(child)?));
        }
        indexed.sort_by_key(|(index, _)| *index);

        for (expected, (index, _)) in (1..).zip(&indexed) {
            if *index != expected {
                let message = if *index < expected {
                    format!("repeats {} index {}", self.item, index)
                } else {
                    format!("is missing {} index {}", self.item, expected)
                };
                return Err(CodecError::validation(elem.tag(), message).traced());
            }
        }
        Ok(indexed.into_iter().map(|(_, value)| value).collect())
    }

    fn set_elem(&self, elem: &mut Element, value: &Self::Value) -> Result<()> {
        let children = value
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let mut child = self.codec.make_elem(utils::child_name(elem, &self.item), item)?;
                child.set_attribute(INDEX, (i + 1).to_string());
                Ok(child)
            })
            .collect::<Result<Vec<_>>>()?;
        utils::replace_children(elem, &[self.item.as_str()], children);
        Ok(())
    }
}
