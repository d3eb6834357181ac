//! The markup-node collaborator: the sink trait the element writer drives,
//! and an owned node tree implementing it with XML text rendering.

use std::fmt::Write as _;

use quick_xml::escape::escape;

/// Fixed xlink namespace URI; a protocol boundary value.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Literal attribute-name prefix that routes into the xlink namespace.
pub const XLINK_PREFIX: &str = "xlink:";

/// Namespace the provided document sink creates elements in.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Semantic actions for building the output markup tree, without exposing
/// the underlying node types. The document collaborator owns node creation;
/// the element writer only drives these calls.
pub trait MarkupSink {
    type Node;

    /// Creates a named element in the sink's document namespace.
    fn create_element(&mut self, name: &str) -> Self::Node;

    /// Sets a plain attribute on a node.
    fn set_attribute(&mut self, node: &mut Self::Node, name: &str, value: &str);

    /// Sets an attribute qualified by a namespace URI.
    fn set_namespaced_attribute(
        &mut self,
        node: &mut Self::Node,
        namespace: &str,
        local: &str,
        value: &str,
    );

    /// Appends a finished child under a parent node.
    fn append_child(&mut self, parent: &mut Self::Node, child: Self::Node);

    /// Installs a finished node as the document root.
    fn append_root(&mut self, node: Self::Node);
}

/// One attribute on a markup node.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupAttribute {
    pub namespace: Option<String>,
    pub name: String,
    pub value: String,
}

/// An owned markup element node.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupNode {
    name: String,
    attributes: Vec<MarkupAttribute>,
    children: Vec<MarkupNode>,
}

impl MarkupNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[MarkupAttribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.upsert(None, name, value);
    }

    pub fn set_namespaced_attribute(&mut self, namespace: &str, local: &str, value: &str) {
        self.upsert(Some(namespace), local, value);
    }

    // Keys stay unique per (namespace, name); a repeated set keeps the
    // original position.
    fn upsert(&mut self, namespace: Option<&str>, name: &str, value: &str) {
        let existing = self
            .attributes
            .iter_mut()
            .find(|a| a.namespace.as_deref() == namespace && a.name == name);
        match existing {
            Some(attribute) => attribute.value = value.to_string(),
            None => self.attributes.push(MarkupAttribute {
                namespace: namespace.map(str::to_string),
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn append_child(&mut self, child: MarkupNode) {
        self.children.push(child);
    }

    /// Plain (un-namespaced) attribute lookup.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.is_none() && a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn namespaced_attribute(&self, namespace: &str, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.as_deref() == Some(namespace) && a.name == local)
            .map(|a| a.value.as_str())
    }

    fn uses_namespace(&self, namespace: &str) -> bool {
        self.attributes
            .iter()
            .any(|a| a.namespace.as_deref() == Some(namespace))
            || self.children.iter().any(|c| c.uses_namespace(namespace))
    }

    fn write_xml(&self, out: &mut String, is_root: bool) {
        let _ = write!(out, "<{}", self.name);
        if is_root {
            let _ = write!(out, r#" xmlns="{SVG_NAMESPACE}""#);
            if self.uses_namespace(XLINK_NAMESPACE) {
                let _ = write!(out, r#" xmlns:xlink="{XLINK_NAMESPACE}""#);
            }
        }
        for attribute in &self.attributes {
            // Only the fixed xlink binding is rendered with a prefix; other
            // namespace bookkeeping lives outside this layer.
            if attribute.namespace.as_deref() == Some(XLINK_NAMESPACE) {
                let _ = write!(
                    out,
                    r#" xlink:{}="{}""#,
                    attribute.name,
                    escape(attribute.value.as_str())
                );
            } else {
                let _ = write!(
                    out,
                    r#" {}="{}""#,
                    attribute.name,
                    escape(attribute.value.as_str())
                );
            }
        }
        if self.children.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            for child in &self.children {
                child.write_xml(out, false);
            }
            let _ = write!(out, "</{}>", self.name);
        }
    }
}

/// The provided markup collaborator: owns the finished tree and renders it
/// to XML text.
#[derive(Debug, Clone, Default)]
pub struct MarkupDocument {
    root: Option<MarkupNode>,
}

impl MarkupDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&MarkupNode> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<MarkupNode> {
        self.root
    }

    /// Renders the document as XML text. The root element declares the
    /// document namespace and, when any node in the tree carries an xlink
    /// attribute, the xlink prefix binding.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        if let Some(root) = &self.root {
            root.write_xml(&mut out, true);
        }
        out
    }
}

impl MarkupSink for MarkupDocument {
    type Node = MarkupNode;

    fn create_element(&mut self, name: &str) -> MarkupNode {
        MarkupNode::new(name)
    }

    fn set_attribute(&mut self, node: &mut MarkupNode, name: &str, value: &str) {
        node.set_attribute(name, value);
    }

    fn set_namespaced_attribute(
        &mut self,
        node: &mut MarkupNode,
        namespace: &str,
        local: &str,
        value: &str,
    ) {
        node.set_namespaced_attribute(namespace, local, value);
    }

    fn append_child(&mut self, parent: &mut MarkupNode, child: MarkupNode) {
        parent.append_child(child);
    }

    fn append_root(&mut self, node: MarkupNode) {
        log::debug!("installing markup root <{}>", node.name());
        self.root = Some(node);
    }
}
