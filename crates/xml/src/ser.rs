//! Writing an [`Element`] tree as XML text.
//!
//! Namespaces are declared once on the root element. When every element in
//! the tree is namespace-qualified, the root's namespace becomes the default
//! namespace; every other namespace is bound to a generated `nsN` prefix.

use crate::config::WriterConfig;
use crate::element::Element;
use crate::error::Result;
use crate::qname::QName;
use crate::utils;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Serialize an element tree to an XML string.
///
/// # Examples
///
/// ```
/// use sarmeta_xml::{Element, WriterConfig, to_string};
///
/// let elem = Element::new("{urn:faux}Node").with_text("1.5");
/// let xml = to_string(&elem, &WriterConfig::fragment())?;
/// assert_eq!(xml, r#"<Node xmlns="urn:faux">1.5</Node>"#);
/// # Ok::<(), sarmeta_xml::XmlError>(())
/// ```
pub fn to_string(element: &Element, config: &WriterConfig) -> Result<String> {
    let buffer = to_vec(element, config)?;
    Ok(std::str::from_utf8(&buffer)?.to_string())
}

/// Serialize an element tree to an XML byte vector.
pub fn to_vec(element: &Element, config: &WriterConfig) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_writer(element, &mut buffer, config)?;
    Ok(buffer)
}

/// Serialize an element tree to a writer.
pub fn to_writer<W: Write>(element: &Element, writer: W, config: &WriterConfig) -> Result<()> {
    let mut writer = match &config.indent {
        Some(indent) => Writer::new_with_indent(writer, indent.byte(), indent.size),
        None => Writer::new(writer),
    };

    if config.declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    let prefixes = Prefixes::assign(element);
    write_element(&mut writer, element, &prefixes, true)?;
    tracing::debug!(root = %element.qname(), "wrote XML document");
    Ok(())
}

/// Namespace to prefix bindings for one document.
#[derive(Debug, Default)]
struct Prefixes {
    default: Option<String>,
    bound: Vec<(String, String)>,
}

impl Prefixes {
    fn assign(root: &Element) -> Self {
        let mut element_namespaces: Vec<&str> = Vec::new();
        let mut attribute_namespaces: Vec<String> = Vec::new();
        let mut unqualified_elements = false;

        for element in root.descendants() {
            match element.qname().namespace() {
                Some(ns) if !element_namespaces.contains(&ns) => element_namespaces.push(ns),
                Some(_) => {}
                None => unqualified_elements = true,
            }
            for (name, _) in element.attributes() {
                if let Some(ns) = QName::parse(name).namespace() {
                    if ns != utils::XML_NAMESPACE && !attribute_namespaces.iter().any(|n| n == ns) {
                        attribute_namespaces.push(ns.to_string());
                    }
                }
            }
        }

        let default = if unqualified_elements {
            None
        } else {
            root.qname().namespace().map(str::to_string)
        };

        let mut prefixes = Prefixes {
            default,
            bound: Vec::new(),
        };
        let candidates = element_namespaces
            .iter()
            .map(|ns| ns.to_string())
            .filter(|ns| prefixes.default.as_deref() != Some(ns.as_str()))
            .chain(attribute_namespaces);
        for ns in candidates {
            if prefixes.bound.iter().all(|(bound, _)| *bound != ns) {
                let prefix = format!("ns{}", prefixes.bound.len());
                tracing::trace!(namespace = %ns, prefix = %prefix, "bound namespace prefix");
                prefixes.bound.push((ns, prefix));
            }
        }
        prefixes
    }

    fn prefix_for(&self, namespace: &str) -> Option<&str> {
        if namespace == utils::XML_NAMESPACE {
            return Some("xml");
        }
        self.bound
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, prefix)| prefix.as_str())
    }

    fn element_name(&self, name: &QName) -> String {
        match name.namespace() {
            Some(ns) if self.default.as_deref() == Some(ns) => name.local().to_string(),
            Some(ns) => utils::prefixed(self.prefix_for(ns), name.local()),
            None => name.local().to_string(),
        }
    }

    fn attribute_name(&self, name: &str) -> String {
        let qname = QName::parse(name);
        match qname.namespace() {
            Some(ns) => utils::prefixed(self.prefix_for(ns), qname.local()),
            None => name.to_string(),
        }
    }
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &Element,
    prefixes: &Prefixes,
    is_root: bool,
) -> Result<()> {
    let name = prefixes.element_name(element.qname());
    let mut start = BytesStart::new(name.as_str());

    if is_root {
        if let Some(ns) = &prefixes.default {
            start.push_attribute(("xmlns", ns.as_str()));
        }
        for (ns, prefix) in &prefixes.bound {
            let key = format!("xmlns:{}", prefix);
            start.push_attribute((key.as_str(), ns.as_str()));
        }
    }
    for (key, value) in element.attributes() {
        let key = prefixes.attribute_name(key);
        start.push_attribute((key.as_str(), value));
    }

    if element.children().is_empty() && element.text().is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = element.text() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(writer, child, prefixes, false)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
    Ok(())
}
