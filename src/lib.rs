//! Burin: the attribute-and-markup codec layer of an in-memory
//! vector-graphics document model.
//!
//! The workspace splits by concern:
//! - `burin-path`: the path-data mini-language (segment model, tokenizer,
//!   canonical round-trip writer);
//! - `burin-style`: the style-string and transform-list grammar
//!   collaborators;
//! - `burin-dom`: per-element attribute storage with lazy type coercion,
//!   and element markup I/O.
//!
//! This crate re-exports the public surface of all three.

pub use burin_dom::{
    AttrValue, AttributeStore, DomError, Element, MarkupAttribute, MarkupDocument, MarkupNode,
    MarkupSink, SVG_NAMESPACE, TypedAttribute, XLINK_NAMESPACE, XLINK_PREFIX,
};
pub use burin_path::{MalformedPath, PathData, PathSegment, SegmentKind};
pub use burin_style::{
    Style, StyleDeclaration, StyleError, Transform, TransformError, TransformKind, TransformList,
};
