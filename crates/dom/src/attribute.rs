//! Per-element attribute storage with lazy type coercion.

use burin_path::{MalformedPath, PathData};
use burin_style::{Style, StyleError, TransformError, TransformList};
use indexmap::IndexMap;
use indexmap::map::Entry;

/// A stored attribute value: raw text until something asks for a typed view.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Raw(String),
    Style(Style),
    Transform(TransformList),
    Path(PathData),
}

impl AttrValue {
    /// Generic text conversion; typed variants emit their canonical form.
    pub fn to_text(&self) -> String {
        match self {
            AttrValue::Raw(text) => text.clone(),
            AttrValue::Style(style) => style.to_string(),
            AttrValue::Transform(list) => list.to_string(),
            AttrValue::Path(path) => path.to_string(),
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            AttrValue::Raw(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_style(&self) -> Option<&Style> {
        match self {
            AttrValue::Style(style) => Some(style),
            _ => None,
        }
    }

    pub fn as_transform(&self) -> Option<&TransformList> {
        match self {
            AttrValue::Transform(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathData> {
        match self {
            AttrValue::Path(path) => Some(path),
            _ => None,
        }
    }
}

/// A value type the store knows how to coerce to and from attribute text.
///
/// Implemented only by the registered grammar values; plain attribute names
/// stay raw text and never grow defaults.
pub trait TypedAttribute: Sized {
    type Error: std::error::Error;

    fn from_text(text: &str) -> Result<Self, Self::Error>;
    fn into_value(self) -> AttrValue;
    fn from_value(value: &AttrValue) -> Option<&Self>;
    fn from_value_mut(value: &mut AttrValue) -> Option<&mut Self>;
}

impl TypedAttribute for Style {
    type Error = StyleError;

    fn from_text(text: &str) -> Result<Self, Self::Error> {
        Style::from_text(text)
    }

    fn into_value(self) -> AttrValue {
        AttrValue::Style(self)
    }

    fn from_value(value: &AttrValue) -> Option<&Self> {
        match value {
            AttrValue::Style(style) => Some(style),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut AttrValue) -> Option<&mut Self> {
        match value {
            AttrValue::Style(style) => Some(style),
            _ => None,
        }
    }
}

impl TypedAttribute for TransformList {
    type Error = TransformError;

    fn from_text(text: &str) -> Result<Self, Self::Error> {
        TransformList::from_text(text)
    }

    fn into_value(self) -> AttrValue {
        AttrValue::Transform(self)
    }

    fn from_value(value: &AttrValue) -> Option<&Self> {
        match value {
            AttrValue::Transform(list) => Some(list),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut AttrValue) -> Option<&mut Self> {
        match value {
            AttrValue::Transform(list) => Some(list),
            _ => None,
        }
    }
}

impl TypedAttribute for PathData {
    type Error = MalformedPath;

    fn from_text(text: &str) -> Result<Self, Self::Error> {
        text.parse()
    }

    fn into_value(self) -> AttrValue {
        AttrValue::Path(self)
    }

    fn from_value(value: &AttrValue) -> Option<&Self> {
        match value {
            AttrValue::Path(path) => Some(path),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut AttrValue) -> Option<&mut Self> {
        match value {
            AttrValue::Path(path) => Some(path),
            _ => None,
        }
    }
}

/// Insertion-ordered attribute table, exclusively owned by one element.
///
/// Keys are unique attribute names, possibly namespace-prefixed
/// (`"xlink:href"`). Insertion order is preserved and drives markup
/// emission order.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    entries: IndexMap<String, AttrValue>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), AttrValue::Raw(value.into()));
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: AttrValue) {
        self.entries.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Generic text conversion of a stored value.
    pub fn get_text(&self, name: &str) -> Option<String> {
        self.entries.get(name).map(AttrValue::to_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes an attribute, keeping the emission order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Typed view of an attribute, coercing on first access.
    ///
    /// A missing attribute materializes `T::default()` and stores it, so the
    /// first typed read of a never-set name yields a usable value instead of
    /// an error. Raw text is coerced in place and cached; a coercion failure
    /// leaves the stored text untouched.
    pub fn typed<T>(&mut self, name: &str) -> Result<&mut T, T::Error>
    where
        T: TypedAttribute + Default,
    {
        let slot = match self.entries.entry(name.to_string()) {
            Entry::Vacant(entry) => entry.insert(T::default().into_value()),
            Entry::Occupied(entry) => {
                let value = entry.into_mut();
                if T::from_value(value).is_none() {
                    *value = T::from_text(&value.to_text())?.into_value();
                }
                value
            }
        };
        Ok(T::from_value_mut(slot).expect("BUG: slot was coerced to the requested type above"))
    }
}
