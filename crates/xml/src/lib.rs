//! # Metadata Element Trees
//!
//! This crate provides the element abstraction the metadata codecs operate
//! on: an owned, mutable XML tree plus reading and writing through
//! `quick-xml`.
//!
//! ## Features
//!
//! - **Clark notation**: every tag is a [`QName`] written `{namespace}local`.
//!   Prefixes are resolved while parsing and regenerated while writing, so
//!   callers never deal with them.
//! - **Ordered content**: attributes and children keep document order, which
//!   matters for the positional encodings built on top of this crate.
//! - **Configurable output**: [`WriterConfig`] controls the XML declaration
//!   and indentation.
//!
//! ## Examples
//!
//! ```
//! use sarmeta_xml::{Element, WriterConfig, parse_str, to_string};
//!
//! let mut root = Element::new("{urn:SICD:1.3.0}SICD");
//! root.append_child(Element::new("{urn:SICD:1.3.0}CollectorName").with_text("SYNTH"));
//!
//! let xml = to_string(&root, &WriterConfig::pretty())?;
//! assert_eq!(parse_str(&xml)?, root);
//! # Ok::<(), sarmeta_xml::XmlError>(())
//! ```

pub mod config;
pub mod de;
pub mod element;
pub mod error;
pub mod qname;
pub mod ser;
mod utils;

pub use config::{IndentConfig, WriterConfig};
pub use de::{parse_reader, parse_slice, parse_str};
pub use element::{Descendants, Element};
pub use error::{Result, XmlError};
pub use qname::QName;
pub use ser::{to_string, to_vec, to_writer};
pub use utils::XML_NAMESPACE;
