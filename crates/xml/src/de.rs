//! Parsing XML text into an [`Element`] tree.
//!
//! Namespace prefixes are resolved while reading, so every tag and
//! namespaced attribute in the resulting tree is in Clark notation and the
//! original prefixes are gone. `xmlns` declarations are not kept as
//! attributes.

use crate::element::Element;
use crate::error::{Result, XmlError};
use crate::qname::QName;
use quick_xml::NsReader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::name::ResolveResult;
use std::io::{BufRead, Read};

/// Parses a complete XML document and returns its root element.
///
/// Whitespace-only text between child elements is dropped; text of leaf
/// elements is kept verbatim.
///
/// # Examples
///
/// ```
/// use sarmeta_xml::parse_str;
///
/// let root = parse_str(r#"<Xyz xmlns="urn:faux"><X>1.0</X></Xyz>"#)?;
/// assert_eq!(root.tag(), "{urn:faux}Xyz");
/// assert_eq!(root.find_child("{urn:faux}X").and_then(|x| x.text()), Some("1.0"));
/// # Ok::<(), sarmeta_xml::XmlError>(())
/// ```
pub fn parse_str(xml: &str) -> Result<Element> {
    let reader = NsReader::from_str(xml);
    parse_events(reader)
}

/// Parses XML bytes, which must be UTF-8.
pub fn parse_slice(xml: &[u8]) -> Result<Element> {
    parse_str(std::str::from_utf8(xml)?)
}

/// Parses a document from a buffered reader.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Element> {
    let mut xml = String::new();
    reader.read_to_string(&mut xml)?;
    parse_str(&xml)
}

/// Element under construction together with its accumulated text.
struct OpenElement {
    element: Element,
    text: String,
}

fn parse_events(mut reader: NsReader<&[u8]>) -> Result<Element> {
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::MultipleRoots);
                }
                let element = start_element(&reader, &start)?;
                stack.push(OpenElement {
                    element,
                    text: String::new(),
                });
            }
            Event::Empty(start) => {
                let element = start_element(&reader, &start)?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(end) => {
                let open = stack.pop().ok_or_else(|| XmlError::Unbalanced {
                    expected: String::new(),
                    found: String::from_utf8_lossy(end.name().as_ref()).into_owned(),
                })?;
                let (resolved, local) = reader.resolve_element(end.name());
                let found = qualify(resolved, local.as_ref())?;
                if &found != open.element.qname() {
                    return Err(XmlError::Unbalanced {
                        expected: open.element.tag(),
                        found: found.to_string(),
                    });
                }
                attach(finish(open), &mut stack, &mut root)?;
            }
            Event::Text(text) => {
                if let Some(open) = stack.last_mut() {
                    let decoded = text.decode().map_err(quick_xml::Error::from)?;
                    open.text.push_str(&decoded);
                }
            }
            Event::CData(cdata) => {
                if let Some(open) = stack.last_mut() {
                    let decoded = cdata.decode().map_err(quick_xml::Error::from)?;
                    open.text.push_str(&decoded);
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(open) = stack.last_mut() {
                    push_reference(&mut open.text, &reference)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::UnexpectedEof(open.element.tag()));
    }
    let root = root.ok_or(XmlError::NoRoot)?;
    tracing::debug!(root = %root.qname(), "parsed XML document");
    Ok(root)
}

/// Builds an element from a start tag, resolving tag and attribute names.
fn start_element(reader: &NsReader<&[u8]>, start: &BytesStart<'_>) -> Result<Element> {
    let (resolved, local) = reader.resolve_element(start.name());
    let mut element = Element::new(qualify(resolved, local.as_ref())?);

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (resolved, local) = reader.resolve_attribute(attr.key);
        let name = qualify(resolved, local.as_ref())?;
        let value = attr.decode_and_unescape_value(reader.decoder())?;
        element.set_attribute(name.to_string(), value.into_owned());
    }
    Ok(element)
}

fn qualify(resolved: ResolveResult<'_>, local: &[u8]) -> Result<QName> {
    let local = std::str::from_utf8(local)?;
    match resolved {
        ResolveResult::Bound(ns) => Ok(QName::new(Some(std::str::from_utf8(ns.as_ref())?), local)),
        ResolveResult::Unbound => Ok(QName::new(None, local)),
        ResolveResult::Unknown(prefix) => Err(XmlError::UnknownPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}

fn push_reference(text: &mut String, reference: &BytesRef<'_>) -> Result<()> {
    if let Some(ch) = reference.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }
    let name = reference.decode().map_err(quick_xml::Error::from)?;
    match quick_xml::escape::resolve_predefined_entity(&name) {
        Some(value) => {
            text.push_str(value);
            Ok(())
        }
        None => Err(XmlError::UnknownEntity(name.into_owned())),
    }
}

/// Closes an element opened by a start tag. A leaf keeps its text even when
/// empty, so `<n></n>` and `<n/>` stay distinct; text that only separates
/// child elements is dropped.
fn finish(open: OpenElement) -> Element {
    let OpenElement { mut element, text } = open;
    let is_leaf = element.children().is_empty();
    if is_leaf || !text.trim().is_empty() {
        element.set_text(text);
    }
    element
}

fn attach(element: Element, stack: &mut [OpenElement], root: &mut Option<Element>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.element.append_child(element),
        None if root.is_some() => return Err(XmlError::MultipleRoots),
        None => *root = Some(element),
    }
    Ok(())
}
