//! Error types for the metadata codecs.
//!
//! Every codec operation fails fast: either the whole value is produced or
//! encoded, or one of these errors is returned and the target element is
//! left untouched.

// Variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The error type shared by all codecs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Element text could not be read as the expected scalar kind.
    #[error("invalid {kind} text {text:?} in <{tag}>")]
    Format {
        tag: String,
        kind: &'static str,
        text: String,
    },

    /// A sequence did not have the arity fixed by the codec.
    #[error("<{tag}> length {actual} does not match expected {expected}")]
    Length {
        tag: String,
        actual: usize,
        expected: usize,
    },

    /// An array or matrix did not have the shape fixed by the codec.
    #[error("<{tag}> shape {actual} does not match expected {expected}")]
    Shape {
        tag: String,
        actual: String,
        expected: String,
    },

    /// A required child element is absent.
    #[error("<{parent}> is missing child <{child}>")]
    MissingChild { parent: String, child: String },

    /// A required attribute is absent.
    #[error("<{tag}> is missing attribute {attribute:?}")]
    MissingAttribute { tag: String, attribute: String },

    /// Duplicate or inconsistent structural data.
    #[error("<{tag}> {message}")]
    Validation { tag: String, message: String },
}

impl CodecError {
    pub(crate) fn format(tag: impl ToString, kind: &'static str, text: impl Into<String>) -> Self {
        CodecError::Format {
            tag: tag.to_string(),
            kind,
            text: text.into(),
        }
    }

    pub(crate) fn validation(tag: impl ToString, message: impl Into<String>) -> Self {
        CodecError::Validation {
            tag: tag.to_string(),
            message: message.into(),
        }
    }

    /// Records the rejection at trace level and hands the error back.
    pub(crate) fn traced(self) -> Self {
        tracing::trace!(error = %self, "codec rejected input");
        self
    }
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
