//! Output configuration for the element writer.
//!
//! The defaults produce a compact document preceded by an XML declaration.
//! Configuration can be loaded from any serde format; unknown fields are
//! rejected so typos surface early.
//!
//! # Example
//!
//! ```
//! use sarmeta_xml::WriterConfig;
//!
//! let config = WriterConfig::pretty().with_declaration(false);
//! assert_eq!(config.indent.map(|i| i.size), Some(2));
//! ```

use serde::{Deserialize, Serialize};

/// Controls how an element tree is rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root.
    pub declaration: bool,

    /// Indent nested elements; `None` writes everything on one line.
    pub indent: Option<IndentConfig>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            declaration: true,
            indent: None,
        }
    }
}

impl WriterConfig {
    /// Two-space indentation with a declaration.
    pub fn pretty() -> Self {
        Self {
            declaration: true,
            indent: Some(IndentConfig::default()),
        }
    }

    /// Single line, no declaration. Handy for embedding fragments.
    pub fn fragment() -> Self {
        Self {
            declaration: false,
            indent: None,
        }
    }

    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    pub fn with_indent(mut self, indent: Option<IndentConfig>) -> Self {
        self.indent = indent;
        self
    }
}

/// Indentation settings. Non-ASCII indent characters fall back to a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndentConfig {
    pub char: char,
    pub size: usize,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self { char: ' ', size: 2 }
    }
}

impl IndentConfig {
    pub(crate) fn byte(&self) -> u8 {
        u8::try_from(self.char)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or(b' ')
    }
}
