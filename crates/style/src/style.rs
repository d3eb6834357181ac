//! The style-string value: an ordered list of `property: value`
//! declarations, round-trippable through its canonical text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::parsers;

/// Errors that can occur while parsing a style string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("style parse error in '{0}': {1}")]
    Parse(String, String),
}

/// One `property: value` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDeclaration {
    pub property: String,
    pub value: String,
}

/// An ordered list of style declarations.
///
/// Values stay raw text; this is a round-trippable value type, not a
/// property engine. Canonical text is `property:value` pairs joined by
/// `"; "`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    declarations: Vec<StyleDeclaration>,
}

impl Style {
    /// Parses a `;`-separated declaration list. Empty declarations (from
    /// doubled or trailing separators) are skipped.
    pub fn from_text(text: &str) -> Result<Self, StyleError> {
        let mut declarations = Vec::new();
        for piece in text.split(';') {
            if piece.trim().is_empty() {
                continue;
            }
            let (property, value) = parsers::run_declaration(piece)
                .map_err(|message| StyleError::Parse(text.to_string(), message))?;
            declarations.push(StyleDeclaration { property, value });
        }
        Ok(Self { declarations })
    }

    pub fn declarations(&self) -> &[StyleDeclaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Raw value of the last declaration for `property`, if any.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Updates the first declaration for `property` in place, or appends a
    /// new one, preserving declaration order.
    pub fn set(&mut self, property: &str, value: &str) {
        match self.declarations.iter_mut().find(|d| d.property == property) {
            Some(declaration) => declaration.value = value.to_string(),
            None => self.declarations.push(StyleDeclaration {
                property: property.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::from_text(s)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, declaration) in self.declarations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}:{}", declaration.property, declaration.value)?;
        }
        Ok(())
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
