pub mod attribute;
pub mod element;
pub mod error;
pub mod markup;

pub use attribute::{AttrValue, AttributeStore, TypedAttribute};
pub use element::Element;
pub use error::DomError;
pub use markup::{
    MarkupAttribute, MarkupDocument, MarkupNode, MarkupSink, SVG_NAMESPACE, XLINK_NAMESPACE,
    XLINK_PREFIX,
};
