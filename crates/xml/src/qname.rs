//! Namespace-qualified element names in Clark notation.
//!
//! Tags are carried around as `{namespace}local` strings, the same notation
//! used by most XML tree libraries. A tag without braces has no namespace.

use std::fmt;

/// A qualified XML name: optional namespace URI plus local name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    namespace: Option<String>,
    local: String,
}

impl QName {
    /// Builds a name from its parts. An empty namespace is treated as none.
    pub fn new(namespace: Option<&str>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
            local: local.into(),
        }
    }

    /// Parses Clark notation. Input without a well-formed `{...}` prefix is
    /// taken verbatim as a local name.
    pub fn parse(tag: &str) -> Self {
        if let Some(rest) = tag.strip_prefix('{') {
            if let Some((ns, local)) = rest.split_once('}') {
                return Self::new(Some(ns), local);
            }
        }
        Self::new(None, tag)
    }

    /// Namespace URI, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local part of the name.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Same namespace, different local name.
    ///
    /// Codecs use this to create child elements that live in their parent's
    /// namespace.
    pub fn with_local(&self, local: impl Into<String>) -> Self {
        Self {
            namespace: self.namespace.clone(),
            local: local.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

impl From<&str> for QName {
    fn from(tag: &str) -> Self {
        QName::parse(tag)
    }
}

impl From<String> for QName {
    fn from(tag: String) -> Self {
        QName::parse(&tag)
    }
}

impl From<&String> for QName {
    fn from(tag: &String) -> Self {
        QName::parse(tag)
    }
}

impl From<&QName> for QName {
    fn from(name: &QName) -> Self {
        name.clone()
    }
}
