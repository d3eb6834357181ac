use burin_path::MalformedPath;
use burin_style::{StyleError, TransformError};
use thiserror::Error;

/// Errors raised while moving elements to and from markup.
///
/// Collaborator coercion failures pass through unchanged so callers see the
/// grammar's own error kind.
#[derive(Error, Debug)]
pub enum DomError {
    #[error("markup parsing error: {0}")]
    Markup(#[from] roxmltree::Error),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Path(#[from] MalformedPath),
}
