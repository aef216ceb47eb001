//! Generic array codec: an ordered set of named scalar children mapped to a
//! flat sequence.
//!
//! Positions are defined by the declared field order, not by the order the
//! children happen to appear in a document. Each position may use its own
//! scalar codec.

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::scalar::{BoolCodec, CmplxCodec, DblCodec, EnuCodec, HexCodec, IntCodec, TxtCodec};
use crate::utils;
use crate::xdt::{Xdt, XdtCodec};
use num_complex::Complex64;
use sarmeta_xml::Element;

/// A value produced by one of the scalar codecs.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Txt(String),
    Bool(bool),
    Int(i64),
    Dbl(f64),
    Cmplx(Complex64),
    Hex(Vec<u8>),
    Xdt(Xdt),
}

impl Scalar {
    fn kind(&self) -> &'static str {
        match self {
            Scalar::Txt(_) => "text",
            Scalar::Bool(_) => "boolean",
            Scalar::Int(_) => "integer",
            Scalar::Dbl(_) => "double",
            Scalar::Cmplx(_) => "complex",
            Scalar::Hex(_) => "hex",
            Scalar::Xdt(_) => "timestamp",
        }
    }

    pub fn as_dbl(&self) -> Option<f64> {
        match self {
            Scalar::Dbl(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Txt(value) => Some(value),
            _ => None,
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Dbl(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Txt(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Txt(value.to_string())
    }
}

impl From<Complex64> for Scalar {
    fn from(value: Complex64) -> Self {
        Scalar::Cmplx(value)
    }
}

impl From<Xdt> for Scalar {
    fn from(value: Xdt) -> Self {
        Scalar::Xdt(value)
    }
}

/// The closed set of scalar codecs usable inside an [`ArrayCodec`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarCodec {
    Txt(TxtCodec),
    Enu(EnuCodec),
    Bool(BoolCodec),
    Int(IntCodec),
    Dbl(DblCodec),
    Cmplx(CmplxCodec),
    Hex(HexCodec),
    Xdt(XdtCodec),
}

impl ScalarCodec {
    fn expects(&self) -> &'static str {
        match self {
            ScalarCodec::Txt(_) | ScalarCodec::Enu(_) => "text",
            ScalarCodec::Bool(_) => "boolean",
            ScalarCodec::Int(_) => "integer",
            ScalarCodec::Dbl(_) => "double",
            ScalarCodec::Cmplx(_) => "complex",
            ScalarCodec::Hex(_) => "hex",
            ScalarCodec::Xdt(_) => "timestamp",
        }
    }
}

impl Codec for ScalarCodec {
    type Value = Scalar;

    fn parse_elem(&self, elem: &Element) -> Result<Scalar> {
        Ok(match self {
            ScalarCodec::Txt(codec) => Scalar::Txt(codec.parse_elem(elem)?),
            ScalarCodec::Enu(codec) => Scalar::Txt(codec.parse_elem(elem)?),
            ScalarCodec::Bool(codec) => Scalar::Bool(codec.parse_elem(elem)?),
            ScalarCodec::Int(codec) => Scalar::Int(codec.parse_elem(elem)?),
            ScalarCodec::Dbl(codec) => Scalar::Dbl(codec.parse_elem(elem)?),
            ScalarCodec::Cmplx(codec) => Scalar::Cmplx(codec.parse_elem(elem)?),
            ScalarCodec::Hex(codec) => Scalar::Hex(codec.parse_elem(elem)?),
            ScalarCodec::Xdt(codec) => Scalar::Xdt(codec.parse_elem(elem)?),
        })
    }

    fn set_elem(&self, elem: &mut Element, value: &Scalar) -> Result<()> {
        match (self, value) {
            (ScalarCodec::Txt(codec), Scalar::Txt(v)) => codec.set_elem(elem, v),
            (ScalarCodec::Enu(codec), Scalar::Txt(v)) => codec.set_elem(elem, v),
            (ScalarCodec::Bool(codec), Scalar::Bool(v)) => codec.set_elem(elem, v),
            (ScalarCodec::Int(codec), Scalar::Int(v)) => codec.set_elem(elem, v),
            (ScalarCodec::Dbl(codec), Scalar::Dbl(v)) => codec.set_elem(elem, v),
            (ScalarCodec::Cmplx(codec), Scalar::Cmplx(v)) => codec.set_elem(elem, v),
            (ScalarCodec::Hex(codec), Scalar::Hex(v)) => codec.set_elem(elem, v),
            (ScalarCodec::Xdt(codec), Scalar::Xdt(v)) => codec.set_elem(elem, v),
            (codec, value) => Err(CodecError::validation(
                elem.tag(),
                format!("expects a {} value, got {}", codec.expects(), value.kind()),
            )
            .traced()),
        }
    }
}

/// Ordered `(child name, codec)` pairs mapped to a flat `Vec<Scalar>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayCodec {
    fields: Vec<(String, ScalarCodec)>,
}

impl ArrayCodec {
    /// Builds the codec; field names must be unique.
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ScalarCodec)>,
        S: Into<String>,
    {
        let mut collected: Vec<(String, ScalarCodec)> = Vec::new();
        for (name, codec) in fields {
            let name = name.into();
            if collected.iter().any(|(existing, _)| *existing == name) {
                return Err(CodecError::validation(name, "is declared more than once").traced());
            }
            collected.push((name, codec));
        }
        Ok(Self { fields: collected })
    }

    /// Every field shares the same codec.
    pub fn homogeneous<I, S>(names: I, codec: ScalarCodec) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(|name| (name, codec.clone())))
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in positional order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Codec for ArrayCodec {
    type Value = Vec<Scalar>;

    fn parse_elem(&self, elem: &Element) -> Result<Vec<Scalar>> {
        self.fields
            .iter()
            .map(|(name, codec)| codec.parse_elem(utils::required_child(elem, name)?))
            .collect()
    }

    fn set_elem(&self, elem: &mut Element, value: &Vec<Scalar>) -> Result<()> {
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
            .map(|((name, codec), item)| codec.make_elem(utils::child_name(elem, name), item))
            .collect::<Result<Vec<_>>>()?;
        let names: Vec<&str> = self.field_names().collect();
        utils::replace_children(elem, &names, children);
        Ok(())
    }
}
