//! Polynomial coefficient codecs.
//!
//! A 1-D or 2-D coefficient array is written as one `Coef` child per
//! coefficient, identified by `exponent1` (and `exponent2`) attributes. The
//! parent carries `order1` (and `order2`), the highest exponent per axis.
//!
//! ```xml
//! <Poly order1="1" order2="1">
//!   <Coef exponent1="0" exponent2="0">1</Coef>
//!   <Coef exponent1="0" exponent2="1">2</Coef>
//!   <Coef exponent1="1" exponent2="0">3</Coef>
//!   <Coef exponent1="1" exponent2="1">4</Coef>
//! </Poly>
//! ```

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::scalar::DblCodec;
use crate::utils;
use ndarray::{Array1, Array2, ArrayD, Dimension, IxDyn};
use sarmeta_xml::Element;
use std::collections::HashSet;

const COEF: &str = "Coef";
const EXPONENT_ATTRS: [&str; 2] = ["exponent1", "exponent2"];
const ORDER_ATTRS: [&str; 2] = ["order1", "order2"];

/// Largest coefficient array a document may describe.
pub const MAX_COEFS: usize = 1 << 16;

/// 1-D or 2-D polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyCodec {
    ndim: usize,
}

impl PolyCodec {
    /// `ndim` must be 1 or 2.
    pub fn new(ndim: usize) -> Result<Self> {
        match ndim {
            1 | 2 => Ok(Self { ndim }),
            _ => Err(CodecError::validation(
                "Poly",
                format!("polynomials have 1 or 2 dimensions, not {}", ndim),
            )),
        }
    }

    pub const fn poly1d() -> Self {
        Self { ndim: 1 }
    }

    pub const fn poly2d() -> Self {
        Self { ndim: 2 }
    }

    pub fn ndim(&self) -> usize {
        self.ndim
    }
}

impl Codec for PolyCodec {
    type Value = ArrayD<f64>;

    fn parse_elem(&self, elem: &Element) -> Result<ArrayD<f64>> {
        let axes = &EXPONENT_ATTRS[..self.ndim];
        let mut shape = vec![0usize; self.ndim];
        for (dim, order_attr) in ORDER_ATTRS[..self.ndim].iter().enumerate() {
            if let Some(order) = utils::optional_index_attribute(elem, order_attr)? {
                shape[dim] = extent_for(elem, order_attr, order)?;
            }
        }

        let mut coefs = Vec::new();
        let mut seen = HashSet::new();
        for child in elem.find_children(utils::child_name(elem, COEF)) {
            let exponents = axes
                .iter()
                .map(|attr| utils::index_attribute(child, attr))
                .collect::<Result<Vec<_>>>()?;
            if !seen.insert(exponents.clone()) {
                return Err(CodecError::validation(
                    elem.tag(),
                    format!("repeats coefficient exponents {:?}", exponents),
                )
                .traced());
            }
            for ((extent, exponent), attr) in shape.iter_mut().zip(&exponents).zip(axes) {
                *extent = (*extent).max(extent_for(elem, attr, *exponent)?);
            }
            coefs.push((exponents, DblCodec.parse_elem(child)?));
        }

        let size = shape
            .iter()
            .try_fold(1usize, |size, extent| size.checked_mul(*extent))
            .filter(|size| *size <= MAX_COEFS);
        if size.is_none() {
            return Err(CodecError::validation(
                elem.tag(),
                format!(
                    "coefficient shape {} exceeds {} coefficients",
                    utils::shape_string(&shape),
                    MAX_COEFS
                ),
            )
            .traced());
        }

        let mut value = ArrayD::<f64>::zeros(IxDyn(&shape));
        for (exponents, coef) in coefs {
            value[IxDyn(&exponents)] = coef;
        }
        Ok(value)
    }

    fn set_elem(&self, elem: &mut Element, value: &ArrayD<f64>) -> Result<()> {
        if value.ndim() != self.ndim || value.is_empty() {
            return Err(CodecError::Shape {
                tag: elem.tag(),
                actual: utils::shape_string(value.shape()),
                expected: format!("non-empty {}-D", self.ndim),
            }
            .traced());
        }

        let coef_name = utils::child_name(elem, COEF);
        let children = value
            .indexed_iter()
            .map(|(index, coef)| {
                let mut child = DblCodec.make_elem(&coef_name, coef)?;
                for (attr, exponent) in EXPONENT_ATTRS.iter().zip(index.slice()) {
                    child.set_attribute(*attr, exponent.to_string());
                }
                Ok(child)
            })
            .collect::<Result<Vec<_>>>()?;

        for (order_attr, extent) in ORDER_ATTRS.iter().zip(value.shape()) {
            elem.set_attribute(*order_attr, (extent - 1).to_string());
        }
        for order_attr in &ORDER_ATTRS[self.ndim..] {
            elem.remove_attribute(order_attr);
        }
        utils::replace_children(elem, &[COEF], children);
        Ok(())
    }
}

/// Axis length needed to hold `exponent`.
fn extent_for(elem: &Element, attr: &str, exponent: usize) -> Result<usize> {
    exponent.checked_add(1).ok_or_else(|| {
        CodecError::validation(elem.tag(), format!("{} {} is out of range", attr, exponent)).traced()
    })
}

/// Three 1-D polynomials under `X`, `Y` and `Z` children, exchanged as a
/// `(num_coefs, 3)` matrix whose columns are the axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XyzPolyCodec;

impl XyzPolyCodec {
    const AXES: [&'static str; 3] = ["X", "Y", "Z"];
}

impl Codec for XyzPolyCodec {
    type Value = Array2<f64>;

    fn parse_elem(&self, elem: &Element) -> Result<Array2<f64>> {
        let axes = Self::AXES
            .iter()
            .map(|axis| {
                let poly = PolyCodec::poly1d().parse_elem(utils::required_child(elem, axis)?)?;
                Ok(Array1::from_iter(poly.iter().copied()))
            })
            .collect::<Result<Vec<_>>>()?;

        let num_coefs = axes.iter().map(Array1::len).max().unwrap_or(0);
        let mut value = Array2::<f64>::zeros((num_coefs, Self::AXES.len()));
        for (col, axis) in axes.iter().enumerate() {
            value
                .column_mut(col)
                .slice_mut(ndarray::s![..axis.len()])
                .assign(axis);
        }
        Ok(value)
    }

    fn set_elem(&self, elem: &mut Element, value: &Array2<f64>) -> Result<()> {
        let (rows, cols) = value.dim();
        if cols != Self::AXES.len() || rows == 0 {
            return Err(CodecError::Shape {
                tag: elem.tag(),
                actual: utils::shape_string(&[rows, cols]),
                expected: "(N, 3) with N > 0".to_string(),
            }
            .traced());
        }

        let children = Self::AXES
            .iter()
            .zip(value.columns())
            .map(|(axis, column)| {
                PolyCodec::poly1d().make_elem(utils::child_name(elem, axis), &column.to_owned().into_dyn())
            })
            .collect::<Result<Vec<_>>>()?;
        utils::replace_children(elem, &Self::AXES, children);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_ndim_must_be_one_or_two() {
        assert!(PolyCodec::new(1).is_ok());
        assert!(PolyCodec::new(2).is_ok());
        assert!(matches!(PolyCodec::new(3), Err(CodecError::Validation { .. })));
        assert!(PolyCodec::new(0).is_err());
    }

    #[test]
    fn test_exponent_attributes() {
        let coefs = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
        let elem = PolyCodec::poly2d().make_elem("{faux-ns}Poly", &coefs).unwrap();
        assert_eq!(elem.attribute("order1"), Some("1"));
        assert_eq!(elem.attribute("order2"), Some("2"));
        let coef = &elem.children()[5];
        assert_eq!(coef.tag(), "{faux-ns}Coef");
        assert_eq!(coef.attribute("exponent1"), Some("1"));
        assert_eq!(coef.attribute("exponent2"), Some("2"));
        assert_eq!(coef.text(), Some("6"));
    }

    #[test]
    fn test_sized_by_observed_exponents() {
        let elem = Element::new("Poly")
            .with_child(Element::new("Coef").with_attribute("exponent1", "3").with_text("2.5"))
            .with_child(Element::new("Coef").with_attribute("exponent1", "0").with_text("1"));
        let value = PolyCodec::poly1d().parse_elem(&elem).unwrap();
        assert_eq!(value, array![1.0, 0.0, 0.0, 2.5].into_dyn());
    }

    #[test]
    fn test_order_attribute_keeps_trailing_zeros() {
        let coefs = array![1.0, 0.0, 0.0].into_dyn();
        let mut elem = PolyCodec::poly1d().make_elem("Poly", &coefs).unwrap();
        elem.children_mut().truncate(1);
        assert_eq!(PolyCodec::poly1d().parse_elem(&elem).unwrap(), coefs);
    }

    #[test]
    fn test_duplicate_exponents_rejected() {
        let elem = Element::new("Poly")
            .with_child(Element::new("Coef").with_attribute("exponent1", "1").with_text("1"))
            .with_child(Element::new("Coef").with_attribute("exponent1", "1").with_text("2"));
        assert!(matches!(
            PolyCodec::poly1d().parse_elem(&elem),
            Err(CodecError::Validation { .. })
        ));
    }

    #[test]
    fn test_huge_exponent_rejected() {
        let elem = Element::new("Poly").with_child(
            Element::new("Coef")
                .with_attribute("exponent1", usize::MAX.to_string())
                .with_text("1"),
        );
        assert!(matches!(
            PolyCodec::poly1d().parse_elem(&elem),
            Err(CodecError::Validation { .. })
        ));
    }

    #[test]
    fn test_huge_order_rejected() {
        let elem = Element::new("Poly").with_attribute("order1", usize::MAX.to_string());
        assert!(matches!(
            PolyCodec::poly1d().parse_elem(&elem),
            Err(CodecError::Validation { .. })
        ));
    }

    #[test]
    fn test_oversized_shape_rejected() {
        let elem = Element::new("Poly").with_child(
            Element::new("Coef")
                .with_attribute("exponent1", "4294967296")
                .with_attribute("exponent2", "4294967296")
                .with_text("1"),
        );
        let err = PolyCodec::poly2d().parse_elem(&elem).unwrap_err();
        assert!(matches!(err, CodecError::Validation { .. }));
        assert!(err.to_string().contains("exceeds"));

        let elem = Element::new("Poly").with_attribute("order1", MAX_COEFS.to_string());
        assert!(matches!(
            PolyCodec::poly1d().parse_elem(&elem),
            Err(CodecError::Validation { .. })
        ));
    }

    #[test]
    fn test_update_keeps_unrelated_children_and_drops_stale_order() {
        let mut elem = PolyCodec::poly2d()
            .make_elem("Poly", &array![[1.0, 2.0], [3.0, 4.0]].into_dyn())
            .unwrap();
        elem.append_child(Element::new("Note").with_text("keep"));

        PolyCodec::poly1d()
            .set_elem(&mut elem, &array![5.0, 6.0].into_dyn())
            .unwrap();
        assert_eq!(elem.attribute("order2"), None);
        assert_eq!(elem.find_child("Note").and_then(Element::text), Some("keep"));
        assert_eq!(elem.find_children("Coef").count(), 2);
        assert_eq!(
            PolyCodec::poly1d().parse_elem(&elem).unwrap(),
            array![5.0, 6.0].into_dyn()
        );
    }

    #[test]
    fn test_wrong_dimension_rejected() {
        let mut elem = Element::new("Poly");
        let err = PolyCodec::poly1d()
            .set_elem(&mut elem, &array![[1.0]].into_dyn())
            .unwrap_err();
        assert!(matches!(err, CodecError::Shape { .. }));
        assert!(elem.children().is_empty());
    }

    #[test]
    fn test_xyz_poly_pads_short_axes() {
        let elem = Element::new("{faux-ns}XyzPoly")
            .with_child(PolyCodec::poly1d().make_elem("{faux-ns}X", &array![1.0, 2.0, 3.0].into_dyn()).unwrap())
            .with_child(PolyCodec::poly1d().make_elem("{faux-ns}Y", &array![4.0].into_dyn()).unwrap())
            .with_child(PolyCodec::poly1d().make_elem("{faux-ns}Z", &array![5.0, 6.0].into_dyn()).unwrap());
        let value = XyzPolyCodec.parse_elem(&elem).unwrap();
        assert_eq!(value, array![[1.0, 4.0, 5.0], [2.0, 0.0, 6.0], [3.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_xyz_poly_missing_axis() {
        let elem = Element::new("XyzPoly")
            .with_child(PolyCodec::poly1d().make_elem("X", &array![1.0].into_dyn()).unwrap());
        assert!(matches!(
            XyzPolyCodec.parse_elem(&elem),
            Err(CodecError::MissingChild { ref child, .. }) if child == "Y"
        ));
    }
}
