//! # Metadata Value Codecs
//!
//! This crate maps typed native values to and from the XML elements of
//! remote-sensing image metadata documents. A document model picks one codec
//! per field and uses it to read (`parse_elem`), create (`make_elem`) or
//! update in place (`set_elem`) the corresponding element.
//!
//! ## Codecs
//!
//! | Codec | Native value | XML form |
//! |-------|--------------|----------|
//! | [`TxtCodec`] | `String` | `<N>text</N>` |
//! | [`EnuCodec`] | `String` (restricted) | `<N>LITERAL</N>` |
//! | [`BoolCodec`] | `bool` | `<N>true</N>` |
//! | [`IntCodec`] | `i64` | `<N>42</N>` |
//! | [`DblCodec`] | `f64` | `<N>1.25</N>` |
//! | [`CmplxCodec`] | `Complex64` | `<N><Real>1</Real><Imag>-2</Imag></N>` |
//! | [`HexCodec`] | `Vec<u8>` | `<N>badd</N>` |
//! | [`XdtCodec`] | [`Xdt`] | `<N>2024-03-01T12:00:00.500Z</N>` |
//! | [`TupleCodec`] | `Vec<f64>` / `Vec<i64>` | `<N><X>..</X><Y>..</Y><Z>..</Z></N>` |
//! | [`ArrayCodec`] | `Vec<Scalar>` | one named child per position |
//! | [`ListCodec`] | `Vec<T>` | repeated children with `index="1"`, ... |
//! | [`MtxCodec`] | `Array2<f64>` | `Entry` children with `index1`/`index2` |
//! | [`PolyCodec`] | `ArrayD<f64>` | `Coef` children with `exponent1`/`exponent2` |
//! | [`XyzPolyCodec`] | `Array2<f64>` (N x 3) | `X`, `Y`, `Z` 1-D polynomials |
//! | [`ParameterCodec`] | `(String, String)` | `<N name="..">value</N>` |
//!
//! Child elements are always created in the parent's namespace. Tags are
//! otherwise opaque: pass plain local names or Clark notation
//! (`{namespace}local`).
//!
//! ## Guarantees
//!
//! - Decoding an element produced by encoding a value returns that value.
//!   Timestamps are the one normalization: decoding always yields an
//!   offset-aware UTC value, and naive input is encoded as UTC.
//! - Shape and arity are fixed when a codec is built and checked on every
//!   encode before the element is modified.
//! - Codecs hold no mutable state and are `Send + Sync`.
//!
//! ## Examples
//!
//! ```
//! use ndarray::array;
//! use sarmeta_codec::{Codec, MtxCodec, TupleCodec};
//!
//! let xyz = TupleCodec::xyz();
//! let elem = xyz.make_elem("{urn:SICD:1.3.0}ARPPos", &vec![7228127.0, -4.5, 0.25])?;
//! assert_eq!(xyz.parse_elem(&elem)?, vec![7228127.0, -4.5, 0.25]);
//!
//! let mtx = MtxCodec::new((2, 2));
//! let elem = mtx.make_elem("Mtx", &array![[1.0, 0.0], [0.0, 1.0]])?;
//! assert!(mtx.make_elem("Mtx", &array![[1.0, 0.0, 0.0]]).is_err());
//! assert_eq!(mtx.parse_elem(&elem)?, array![[1.0, 0.0], [0.0, 1.0]]);
//! # Ok::<(), sarmeta_codec::CodecError>(())
//! ```

pub mod array;
pub mod codec;
pub mod error;
pub mod list;
pub mod matrix;
pub mod parameter;
pub mod poly;
pub mod scalar;
pub mod tuple;
pub mod utils;
pub mod xdt;

pub use array::{ArrayCodec, Scalar, ScalarCodec};
pub use codec::Codec;
pub use error::{CodecError, Result};
pub use list::ListCodec;
pub use matrix::MtxCodec;
pub use parameter::ParameterCodec;
pub use poly::{PolyCodec, XyzPolyCodec};
pub use scalar::{BoolCodec, CmplxCodec, DblCodec, EnuCodec, HexCodec, IntCodec, TxtCodec};
pub use tuple::{DblTupleCodec, IntTupleCodec, TupleCodec};
pub use xdt::{TimestampPrecision, Xdt, XdtCodec};

// Element types appear in every codec signature.
pub use sarmeta_xml::{Element, QName};
