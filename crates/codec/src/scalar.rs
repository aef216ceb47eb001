//! Scalar codecs: one value per element, stored as element text (or, for
//! complex numbers, as a `Real`/`Imag` child pair).

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::utils;
use num_complex::Complex64;
use sarmeta_xml::Element;

/// Free text. A missing text node decodes as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxtCodec;

impl Codec for TxtCodec {
    type Value = String;

    fn parse_elem(&self, elem: &Element) -> Result<String> {
        Ok(elem.text().unwrap_or_default().to_string())
    }

    fn set_elem(&self, elem: &mut Element, value: &String) -> Result<()> {
        elem.set_text(value.as_str());
        Ok(())
    }
}

/// Text restricted to a fixed set of literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnuCodec {
    allowed: Vec<String>,
}

impl EnuCodec {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    fn check(&self, elem: &Element, value: &str) -> Result<()> {
        if self.allowed.iter().any(|allowed| allowed == value) {
            Ok(())
        } else {
            Err(CodecError::format(elem.tag(), "enumeration", value).traced())
        }
    }
}

impl Codec for EnuCodec {
    type Value = String;

    fn parse_elem(&self, elem: &Element) -> Result<String> {
        let text = elem.text().unwrap_or_default();
        self.check(elem, text)?;
        Ok(text.to_string())
    }

    fn set_elem(&self, elem: &mut Element, value: &String) -> Result<()> {
        self.check(elem, value)?;
        elem.set_text(value.as_str());
        Ok(())
    }
}

/// `true` / `false`, nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolCodec;

impl Codec for BoolCodec {
    type Value = bool;

    fn parse_elem(&self, elem: &Element) -> Result<bool> {
        match elem.text().map(str::trim) {
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            other => Err(CodecError::format(elem.tag(), "boolean", other.unwrap_or_default()).traced()),
        }
    }

    fn set_elem(&self, elem: &mut Element, value: &bool) -> Result<()> {
        elem.set_text(utils::bool_to_string(*value));
        Ok(())
    }
}

/// Signed 64-bit integer in decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntCodec;

impl Codec for IntCodec {
    type Value = i64;

    fn parse_elem(&self, elem: &Element) -> Result<i64> {
        let text = elem.text().unwrap_or_default();
        text.trim()
            .parse()
            .map_err(|_| CodecError::format(elem.tag(), "integer", text).traced())
    }

    fn set_elem(&self, elem: &mut Element, value: &i64) -> Result<()> {
        elem.set_text(value.to_string());
        Ok(())
    }
}

/// Double-precision float, written with the shortest exact representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DblCodec;

impl Codec for DblCodec {
    type Value = f64;

    fn parse_elem(&self, elem: &Element) -> Result<f64> {
        let text = elem.text().unwrap_or_default();
        utils::parse_dbl(text).ok_or_else(|| CodecError::format(elem.tag(), "double", text).traced())
    }

    fn set_elem(&self, elem: &mut Element, value: &f64) -> Result<()> {
        elem.set_text(utils::format_dbl(*value));
        Ok(())
    }
}

/// Complex number as `Real` and `Imag` children in the parent's namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CmplxCodec;

impl CmplxCodec {
    const PARTS: [&'static str; 2] = ["Real", "Imag"];
}

impl Codec for CmplxCodec {
    type Value = Complex64;

    fn parse_elem(&self, elem: &Element) -> Result<Complex64> {
        let re = DblCodec.parse_elem(utils::required_child(elem, "Real")?)?;
        let im = DblCodec.parse_elem(utils::required_child(elem, "Imag")?)?;
        Ok(Complex64::new(re, im))
    }

    fn set_elem(&self, elem: &mut Element, value: &Complex64) -> Result<()> {
        let children = vec![
            DblCodec.make_elem(utils::child_name(elem, "Real"), &value.re)?,
            DblCodec.make_elem(utils::child_name(elem, "Imag"), &value.im)?,
        ];
        utils::replace_children(elem, &Self::PARTS, children);
        Ok(())
    }
}

/// Byte sequence as lowercase hex, two digits per byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexCodec;

impl Codec for HexCodec {
    type Value = Vec<u8>;

    fn parse_elem(&self, elem: &Element) -> Result<Vec<u8>> {
        let text = elem.text().unwrap_or_default();
        hex::decode(text.trim()).map_err(|_| CodecError::format(elem.tag(), "hex", text).traced())
    }

    fn set_elem(&self, elem: &mut Element, value: &Vec<u8>) -> Result<()> {
        elem.set_text(hex::encode(value));
        Ok(())
    }
}
