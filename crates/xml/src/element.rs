//! Owned XML element tree.
//!
//! An [`Element`] has a qualified tag, optional text, ordered attributes and
//! ordered children. Attribute names are plain strings; a namespaced
//! attribute uses Clark notation just like tags do.

use crate::qname::QName;

/// A mutable XML node owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: QName,
    text: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given tag.
    pub fn new(tag: impl Into<QName>) -> Self {
        Self {
            name: tag.into(),
            text: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The qualified name of this element.
    pub fn qname(&self) -> &QName {
        &self.name
    }

    /// The tag in Clark notation.
    pub fn tag(&self) -> String {
        self.name.to_string()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn clear_text(&mut self) {
        self.text = None;
    }

    /// Builder form of [`Element::set_text`].
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing the value in place if the name already
    /// exists so attribute order is stable.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(pos).1)
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Builder form of [`Element::append_child`].
    pub fn with_child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    /// First child with the given tag.
    pub fn find_child(&self, tag: impl Into<QName>) -> Option<&Element> {
        let tag = tag.into();
        self.children.iter().find(|child| child.name == tag)
    }

    /// Mutable access to the first child with the given tag.
    pub fn find_child_mut(&mut self, tag: impl Into<QName>) -> Option<&mut Element> {
        let tag = tag.into();
        self.children.iter_mut().find(|child| child.name == tag)
    }

    /// All children with the given tag, in document order.
    pub fn find_children(&self, tag: impl Into<QName>) -> impl Iterator<Item = &Element> {
        let tag = tag.into();
        self.children.iter().filter(move |child| child.name == tag)
    }

    /// Removes every child with the given tag and returns how many were removed.
    pub fn remove_children(&mut self, tag: impl Into<QName>) -> usize {
        let tag = tag.into();
        let before = self.children.len();
        self.children.retain(|child| child.name != tag);
        before - self.children.len()
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Depth-first iterator over this element and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut elem = Element::new("Poly")
            .with_attribute("order1", "1")
            .with_attribute("order2", "2");
        elem.set_attribute("order1", "5");

        let attrs: Vec<_> = elem.attributes().collect();
        assert_eq!(attrs, vec![("order1", "5"), ("order2", "2")]);
        assert_eq!(elem.remove_attribute("order1").as_deref(), Some("5"));
        assert_eq!(elem.attribute("order1"), None);
    }

    #[test]
    fn test_find_and_remove_children() {
        let mut elem = Element::new("{faux-ns}Parent")
            .with_child(Element::new("{faux-ns}X").with_text("1"))
            .with_child(Element::new("{faux-ns}Y").with_text("2"))
            .with_child(Element::new("{faux-ns}X").with_text("3"));

        assert_eq!(
            elem.find_child("{faux-ns}X").and_then(Element::text),
            Some("1")
        );
        assert!(elem.find_child("X").is_none());
        assert_eq!(elem.find_children("{faux-ns}X").count(), 2);

        assert_eq!(elem.remove_children("{faux-ns}X"), 2);
        assert_eq!(elem.children().len(), 1);
        assert_eq!(elem.children()[0].qname().local(), "Y");
    }

    #[test]
    fn test_descendants_are_depth_first() {
        let elem = Element::new("a")
            .with_child(Element::new("b").with_child(Element::new("c")))
            .with_child(Element::new("d"));
        let order: Vec<_> = elem.descendants().map(Element::tag).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }
}
