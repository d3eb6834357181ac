use thiserror::Error;

/// The only error the path codec raises: the input was not valid path-data
/// text. Carries the full source text so callers can report the offending
/// attribute value verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed path data in '{text}': {message}")]
pub struct MalformedPath {
    pub text: String,
    pub message: String,
}

impl MalformedPath {
    pub(crate) fn new(text: &str, message: impl Into<String>) -> Self {
        Self {
            text: text.to_string(),
            message: message.into(),
        }
    }
}
