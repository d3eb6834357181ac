//! Domain elements and their markup I/O.

use burin_style::{Style, TransformList};

use crate::attribute::{AttrValue, AttributeStore};
use crate::error::DomError;
use crate::markup::{MarkupSink, XLINK_NAMESPACE, XLINK_PREFIX};

/// Attribute names coerced eagerly on markup read.
const STYLE_ATTR: &str = "style";
const TRANSFORM_ATTR: &str = "transform";

/// A domain element: a name, its attribute store and its owned children.
///
/// Tree-shaped with a single owner per child; the attribute store lives and
/// dies with its element.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attributes: AttributeStore,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: AttributeStore::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
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

    /// Stores one markup attribute. The style and transform grammars are
    /// coerced eagerly so later typed reads of them cannot fail; everything
    /// else is kept as raw text.
    pub fn read_markup_attribute(&mut self, name: &str, value: &str) -> Result<(), DomError> {
        let stored = match name {
            STYLE_ATTR => AttrValue::Style(Style::from_text(value)?),
            TRANSFORM_ATTR => AttrValue::Transform(TransformList::from_text(value)?),
            _ => AttrValue::Raw(value.to_string()),
        };
        self.attributes.set_value(name, stored);
        Ok(())
    }

    /// Stores every (name, value) pair in iteration order.
    pub fn read_markup_attributes<'a, I>(&mut self, attributes: I) -> Result<(), DomError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in attributes {
            self.read_markup_attribute(name, value)?;
        }
        Ok(())
    }

    /// Builds an element tree from a parsed markup node, recursing into
    /// element children. An attribute in the xlink namespace is stored
    /// under its `xlink:`-prefixed name.
    pub fn from_markup(node: roxmltree::Node<'_, '_>) -> Result<Self, DomError> {
        let mut element = Element::new(node.tag_name().name());
        log::trace!(
            "reading markup element <{}> ({} attributes)",
            element.name,
            node.attributes().count()
        );
        for attribute in node.attributes() {
            if attribute.namespace() == Some(XLINK_NAMESPACE) {
                let key = format!("{XLINK_PREFIX}{}", attribute.name());
                element.read_markup_attribute(&key, attribute.value())?;
            } else {
                element.read_markup_attribute(attribute.name(), attribute.value())?;
            }
        }
        for child in node.children().filter(|c| c.is_element()) {
            element.append_child(Element::from_markup(child)?);
        }
        Ok(element)
    }

    /// Convenience entry point: parse markup text and build the element
    /// tree from its document element.
    pub fn from_markup_text(text: &str) -> Result<Self, DomError> {
        let document = roxmltree::Document::parse(text)?;
        Element::from_markup(document.root_element())
    }

    /// Serializes this element and its subtree into the markup collaborator.
    ///
    /// A node named after the element is created in the sink; attributes are
    /// written in insertion order, with keys carrying the literal `xlink:`
    /// prefix routed into the xlink namespace under their local name. Typed
    /// values emit their canonical text through the generic conversion.
    /// Children append themselves in order; the finished node lands under
    /// `parent`, or becomes the document root when no parent was given.
    pub fn write_markup<S: MarkupSink>(&self, sink: &mut S, parent: Option<&mut S::Node>) {
        let mut node = sink.create_element(&self.name);
        for (name, value) in self.attributes.iter() {
            let text = value.to_text();
            match name.strip_prefix(XLINK_PREFIX) {
                Some(local) => sink.set_namespaced_attribute(&mut node, XLINK_NAMESPACE, local, &text),
                None => sink.set_attribute(&mut node, name, &text),
            }
        }
        for child in &self.children {
            child.write_markup(sink, Some(&mut node));
        }
        match parent {
            Some(parent) => sink.append_child(parent, node),
            None => sink.append_root(node),
        }
    }
}
