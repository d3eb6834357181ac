pub mod parsers;
pub mod style;
pub mod transform;

pub use style::{Style, StyleDeclaration, StyleError};
pub use transform::{Transform, TransformError, TransformKind, TransformList};
