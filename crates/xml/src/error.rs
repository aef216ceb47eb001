//! Error types for reading and writing element trees.

use thiserror::Error;

/// Errors raised while parsing XML text into an [`Element`](crate::Element)
/// tree or writing a tree back out.
#[derive(Error, Debug)]
pub enum XmlError {
    /// Low-level tokenizer, attribute, escape or encoding error from quick-xml
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error while writing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A tag or attribute used a namespace prefix that was never declared
    #[error("undeclared namespace prefix {0:?}")]
    UnknownPrefix(String),

    /// An entity reference other than the predefined XML entities
    #[error("unknown entity reference &{0};")]
    UnknownEntity(String),

    /// A closing tag did not match the innermost open element
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    Unbalanced { expected: String, found: String },

    /// The input ended while elements were still open
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// The input held no root element
    #[error("document has no root element")]
    NoRoot,

    /// The input held more than one top-level element
    #[error("document has more than one root element")]
    MultipleRoots,

    /// Non UTF-8 names or generated output
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Result type alias for element tree operations
pub type Result<T> = std::result::Result<T, XmlError>;
