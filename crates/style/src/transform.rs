//! The transform-list value: an ordered sequence of transform function
//! applications, round-trippable through its canonical text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::parsers;

/// Errors that can occur while parsing a transform list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("transform parse error in '{0}': {1}")]
    Parse(String, String),

    #[error("unknown transform function '{0}'")]
    UnknownFunction(String),
}

/// The closed set of transform functions the grammar recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Matrix,
    Translate,
    Scale,
    Rotate,
    SkewX,
    SkewY,
}

impl TransformKind {
    /// Function names are case-sensitive, per the grammar.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "matrix" => Some(TransformKind::Matrix),
            "translate" => Some(TransformKind::Translate),
            "scale" => Some(TransformKind::Scale),
            "rotate" => Some(TransformKind::Rotate),
            "skewX" => Some(TransformKind::SkewX),
            "skewY" => Some(TransformKind::SkewY),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Matrix => "matrix",
            TransformKind::Translate => "translate",
            TransformKind::Scale => "scale",
            TransformKind::Rotate => "rotate",
            TransformKind::SkewX => "skewX",
            TransformKind::SkewY => "skewY",
        }
    }
}

/// One transform function application. Argument arity is not validated;
/// the list is a round-trippable value, not an evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub kind: TransformKind,
    pub arguments: Vec<f64>,
}

/// An ordered sequence of transform function applications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformList {
    transforms: Vec<Transform>,
}

impl TransformList {
    pub fn from_text(text: &str) -> Result<Self, TransformError> {
        let functions = parsers::run_transform_list(text)
            .map_err(|message| TransformError::Parse(text.to_string(), message))?;

        let mut transforms = Vec::with_capacity(functions.len());
        for (name, arguments) in functions {
            let kind = TransformKind::from_name(&name)
                .ok_or_else(|| TransformError::UnknownFunction(name))?;
            transforms.push(Transform { kind, arguments });
        }
        Ok(Self { transforms })
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl FromStr for TransformList {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransformList::from_text(s)
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, transform) in self.transforms.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}(", transform.kind.name())?;
            for (arg_index, argument) in transform.arguments.iter().enumerate() {
                if arg_index > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{argument}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl Serialize for TransformList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TransformList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_canonicalizes() {
        let list = TransformList::from_text("translate(10,20)  rotate( 45 )").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.transforms()[0].kind, TransformKind::Translate);
        assert_eq!(list.transforms()[0].arguments, vec![10.0, 20.0]);
        assert_eq!(list.transforms()[1].kind, TransformKind::Rotate);
        assert_eq!(list.to_string(), "translate(10 20) rotate(45)");
    }

    #[test]
    fn canonical_text_round_trips() {
        let list = TransformList::from_text("matrix(1 0 0 1 -7.5 3)").unwrap();
        let reparsed = TransformList::from_text(&list.to_string()).unwrap();
        assert_eq!(reparsed, list);
    }

    #[test]
    fn empty_text_is_empty_list() {
        assert!(TransformList::from_text("").unwrap().is_empty());
        assert!(TransformList::from_text("   ").unwrap().is_empty());
        assert_eq!(TransformList::default().to_string(), "");
    }

    #[test]
    fn rejects_unknown_function() {
        let err = TransformList::from_text("spin(45)").unwrap_err();
        assert_eq!(err, TransformError::UnknownFunction("spin".to_string()));
    }

    #[test]
    fn function_names_are_case_sensitive() {
        assert!(TransformList::from_text("skewX(10)").is_ok());
        assert!(TransformList::from_text("skewx(10)").is_err());
    }

    #[test]
    fn rejects_malformed_structure() {
        assert!(TransformList::from_text("translate(10").is_err());
        assert!(TransformList::from_text("translate 10)").is_err());
        assert!(TransformList::from_text("rotate(4x5)").is_err());
    }

    #[test]
    fn arity_is_not_validated() {
        // Round-trippable value, not an evaluator: odd arities pass through.
        let list = TransformList::from_text("rotate(45 10 10) scale(2)").unwrap();
        assert_eq!(list.transforms()[0].arguments.len(), 3);
        assert_eq!(list.transforms()[1].arguments.len(), 1);
    }

    #[test]
    fn serde_uses_text_form() {
        let list = TransformList::from_text("translate(1 2)").unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "\"translate(1 2)\"");
        let back: TransformList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
