//! The path value: an ordered, exclusively owned sequence of segments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::MalformedPath;
use crate::parser;
use crate::segment::PathSegment;
use crate::writer;

/// An ordered sequence of path segments.
///
/// Built from path-data text; `Display` produces the canonical compacted
/// form, so converting to text and parsing it back is lossless. Cloning is
/// structural, which is observationally identical since the canonical text
/// round-trips exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    segments: Vec<PathSegment>,
}

impl PathData {
    pub(crate) fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }
}

impl FromStr for PathData {
    type Err = MalformedPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_path_data(s)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&writer::write_path_data(self))
    }
}

impl<'a> IntoIterator for &'a PathData {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// The serde form is the canonical text, so the arity invariant cannot be
// bypassed by deserialization.
impl Serialize for PathData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PathData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_and_display_round_trip() {
        let path: PathData = "M 0 0 L 10 10 ".parse().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.to_string(), "M 0 0 L 10 10 ");
    }

    #[test]
    fn from_str_propagates_malformed_path() {
        let err = "C 1 2 3".parse::<PathData>().unwrap_err();
        assert_eq!(err.text, "C 1 2 3");
    }

    #[test]
    fn clone_equals_reparse_of_canonical_text() {
        let path: PathData = "M 1.25 -7 l 3 4 z".parse().unwrap();
        let reparsed: PathData = path.to_string().parse().unwrap();
        assert_eq!(path.clone(), reparsed);
    }

    #[test]
    fn serde_uses_canonical_text() {
        let path: PathData = "M 0 0 L 1 1".parse().unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"M 0 0 L 1 1 \"");
        let back: PathData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
