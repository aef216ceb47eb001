//! Utility functions and constants shared by the reader and writer.

/// Namespace permanently bound to the `xml` prefix.
///
/// It is never declared in output and attributes such as `xml:lang` keep
/// their conventional prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Renders `prefix:local`, or just `local` when there is no prefix.
pub fn prefixed(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, local),
        None => local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed() {
        assert_eq!(prefixed(Some("ns0"), "Real"), "ns0:Real");
        assert_eq!(prefixed(None, "Real"), "Real");
    }
}
