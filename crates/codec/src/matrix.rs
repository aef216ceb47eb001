//! Fixed-shape 2-D matrix codec.
//!
//! ```xml
//! <Mtx size1="2" size2="3">
//!   <Entry index1="1" index2="1">0</Entry>
//!   <Entry index1="1" index2="2">1</Entry>
//!   ...
//! </Mtx>
//! ```
//!
//! Indices are 1-based and authoritative; entry order in the document does
//! not matter.

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::scalar::DblCodec;
use crate::utils;
use ndarray::Array2;
use sarmeta_xml::Element;

const ENTRY: &str = "Entry";
const INDEX_ATTRS: [&str; 2] = ["index1", "index2"];
const SIZE_ATTRS: [&str; 2] = ["size1", "size2"];

/// Matrix of doubles with a shape fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MtxCodec {
    shape: (usize, usize),
}

impl MtxCodec {
    pub const fn new(shape: (usize, usize)) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    fn shape_error(&self, tag: String, actual: (usize, usize)) -> CodecError {
        CodecError::Shape {
            tag,
            actual: utils::shape_string(&[actual.0, actual.1]),
            expected: utils::shape_string(&[self.shape.0, self.shape.1]),
        }
        .traced()
    }
}

impl Codec for MtxCodec {
    type Value = Array2<f64>;

    fn parse_elem(&self, elem: &Element) -> Result<Array2<f64>> {
        let declared = (
            utils::optional_index_attribute(elem, SIZE_ATTRS[0])?,
            utils::optional_index_attribute(elem, SIZE_ATTRS[1])?,
        );
        if let (Some(rows), Some(cols)) = declared {
            if (rows, cols) != self.shape {
                return Err(self.shape_error(elem.tag(), (rows, cols)));
            }
        }

        let (rows, cols) = self.shape;
        let mut values = Array2::<f64>::zeros(self.shape);
        let mut seen = Array2::<bool>::from_elem(self.shape, false);

        for entry in elem.find_children(utils::child_name(elem, ENTRY)) {
            let row = utils::index_attribute(entry, INDEX_ATTRS[0])?;
            let col = utils::index_attribute(entry, INDEX_ATTRS[1])?;
            if row == 0 || col == 0 || row > rows || col > cols {
                return Err(CodecError::validation(
                    elem.tag(),
                    format!("entry index ({}, {}) is outside shape ({}, {})", row, col, rows, cols),
                )
                .traced());
            }
            let pos = (row - 1, col - 1);
            if seen[pos] {
                return Err(CodecError::validation(
                    elem.tag(),
                    format!("repeats entry index ({}, {})", row, col),
                )
                .traced());
            }
            seen[pos] = true;
            values[pos] = DblCodec.parse_elem(entry)?;
        }

        if let Some(((row, col), _)) = seen.indexed_iter().find(|(_, present)| !**present) {
            return Err(CodecError::MissingChild {
                parent: elem.tag(),
                child: format!("{}[index1={}, index2={}]", ENTRY, row + 1, col + 1),
            });
        }
        Ok(values)
    }

    fn set_elem(&self, elem: &mut Element, value: &Array2<f64>) -> Result<()> {
        if value.dim() != self.shape {
            return Err(self.shape_error(elem.tag(), value.dim()));
        }

        let entry_name = utils::child_name(elem, ENTRY);
        let children = value
            .indexed_iter()
            .map(|((row, col), entry)| {
                let mut child = DblCodec.make_elem(&entry_name, entry)?;
                child.set_attribute(INDEX_ATTRS[0], (row + 1).to_string());
                child.set_attribute(INDEX_ATTRS[1], (col + 1).to_string());
                Ok(child)
            })
            .collect::<Result<Vec<_>>>()?;

        elem.set_attribute(SIZE_ATTRS[0], self.shape.0.to_string());
        elem.set_attribute(SIZE_ATTRS[1], self.shape.1.to_string());
        utils::replace_children(elem, &[ENTRY], children);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_entries_are_indexed_from_one() {
        let elem = MtxCodec::new((2, 2))
            .make_elem("{faux-ns}Mtx", &array![[1.0, 2.0], [3.0, 4.0]])
            .unwrap();
        assert_eq!(elem.attribute("size1"), Some("2"));
        let last = elem.children().last().unwrap();
        assert_eq!(last.tag(), "{faux-ns}Entry");
        assert_eq!(last.attribute("index1"), Some("2"));
        assert_eq!(last.attribute("index2"), Some("2"));
        assert_eq!(last.text(), Some("4"));
    }

    #[test]
    fn test_missing_entry() {
        let codec = MtxCodec::new((2, 2));
        let mut elem = codec.make_elem("Mtx", &array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        elem.children_mut().remove(1);
        let err = codec.parse_elem(&elem).unwrap_err();
        assert!(matches!(err, CodecError::MissingChild { ref child, .. } if child == "Entry[index1=1, index2=2]"));
    }

    #[test]
    fn test_out_of_range_and_duplicate_entries() {
        let codec = MtxCodec::new((1, 2));
        let mut elem = codec.make_elem("Mtx", &array![[1.0, 2.0]]).unwrap();
        elem.children_mut()[1].set_attribute("index2", "3");
        assert!(matches!(codec.parse_elem(&elem), Err(CodecError::Validation { .. })));
        elem.children_mut()[1].set_attribute("index2", "1");
        assert!(matches!(codec.parse_elem(&elem), Err(CodecError::Validation { .. })));
    }

    #[test]
    fn test_declared_size_must_match() {
        let elem = Element::new("Mtx")
            .with_attribute("size1", "3")
            .with_attribute("size2", "3");
        assert!(matches!(
            MtxCodec::new((2, 3)).parse_elem(&elem),
            Err(CodecError::Shape { .. })
        ));
    }

    #[test]
    fn test_update_keeps_unrelated_children() {
        let codec = MtxCodec::new((1, 2));
        let mut elem = codec.make_elem("Mtx", &array![[1.0, 2.0]]).unwrap();
        elem.append_child(Element::new("Note").with_text("keep"));
        codec.set_elem(&mut elem, &array![[3.0, 4.0]]).unwrap();
        assert_eq!(elem.children().len(), 3);
        assert_eq!(elem.children()[0].tag(), "Note");
        assert_eq!(codec.parse_elem(&elem).unwrap(), array![[3.0, 4.0]]);
    }
}
