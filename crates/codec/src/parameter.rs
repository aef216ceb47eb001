//! Named parameter: `<Parameter name="...">value</Parameter>`.

use crate::codec::Codec;
use crate::error::Result;
use crate::utils;
use sarmeta_xml::Element;

const NAME: &str = "name";

/// `(name, value)` pair; the name is an attribute and the value is text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterCodec;

impl Codec for ParameterCodec {
    type Value = (String, String);

    fn parse_elem(&self, elem: &Element) -> Result<(String, String)> {
        let name = utils::required_attribute(elem, NAME)?;
        Ok((name.to_string(), elem.text().unwrap_or_default().to_string()))
    }

    fn set_elem(&self, elem: &mut Element, value: &(String, String)) -> Result<()> {
        let (name, text) = value;
        elem.set_attribute(NAME, name.as_str());
        elem.set_text(text.as_str());
        Ok(())
    }
}
