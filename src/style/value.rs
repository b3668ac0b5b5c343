//! Property bags: [`StyleValue`] and [`StyleBag`].
//!
//! A bag maps property names (`color`, `fontSize`, `m`, `_hover`, `&:focus`)
//! to values. Values are strings, numbers, responsive arrays, or nested bags.
//! Keys are kept in sorted order, so two bags with the same content always
//! iterate the same way no matter how they were built.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::length::format_number;

/// A single value inside a [`StyleBag`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A bare number like `2` or `1.5`. May index a theme scale.
    Number(f64),
    /// A string value or token name like `"red"`, `"blue.500"`, `"14px"`.
    Str(String),
    /// A responsive array. Entry 0 is the base value, entry `i` applies from
    /// breakpoint `i - 1` upward. `None` skips a breakpoint.
    Responsive(Vec<Option<StyleValue>>),
    /// A nested bag, used under pseudo-state and selector keys.
    Nested(StyleBag),
}

impl StyleValue {
    /// Build a responsive value from per-breakpoint entries.
    pub fn responsive<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = Option<V>>,
        V: Into<StyleValue>,
    {
        StyleValue::Responsive(entries.into_iter().map(|e| e.map(Into::into)).collect())
    }

    /// Returns the nested bag if this value is [`StyleValue::Nested`].
    pub fn as_nested(&self) -> Option<&StyleBag> {
        match self {
            StyleValue::Nested(bag) => Some(bag),
            _ => None,
        }
    }

    /// Returns the string if this value is [`StyleValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for scalar values (strings and numbers).
    pub fn is_scalar(&self) -> bool {
        matches!(self, StyleValue::Str(_) | StyleValue::Number(_))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Number(_) => "number",
            StyleValue::Str(_) => "string",
            StyleValue::Responsive(_) => "responsive array",
            StyleValue::Nested(_) => "nested style",
        }
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", format_number(*n)),
            StyleValue::Str(s) => write!(f, "{s}"),
            StyleValue::Responsive(entries) => {
                write!(f, "[")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match entry {
                        Some(v) => write!(f, "{v}")?,
                        None => write!(f, "null")?,
                    }
                }
                write!(f, "]")
            }
            StyleValue::Nested(bag) => write!(f, "{{ {} entries }}", bag.len()),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<StyleBag> for StyleValue {
    fn from(bag: StyleBag) -> Self {
        StyleValue::Nested(bag)
    }
}

impl<V: Into<StyleValue>> From<Vec<V>> for StyleValue {
    fn from(values: Vec<V>) -> Self {
        StyleValue::Responsive(values.into_iter().map(|v| Some(v.into())).collect())
    }
}

// ---------------------------------------------------------------------------
// StyleBag
// ---------------------------------------------------------------------------

/// A property bag: property name to [`StyleValue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleBag {
    entries: BTreeMap<String, StyleValue>,
}

impl StyleBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a property, returning the previous value for that key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in sorted key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// A new bag holding only the entries whose key satisfies `pred`.
    pub fn filter(&self, mut pred: impl FnMut(&str) -> bool) -> StyleBag {
        self.entries
            .iter()
            .filter(|(k, _)| pred(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Deep-merge `other` on top of `self`.
    ///
    /// Nested bags under the same key merge recursively; any other value from
    /// `other` replaces the value in `self`.
    pub fn merge(&self, other: &StyleBag) -> StyleBag {
        let mut merged = self.clone();
        for (key, value) in &other.entries {
            let next = match (merged.entries.get(key), value) {
                (Some(StyleValue::Nested(base)), StyleValue::Nested(over)) => {
                    StyleValue::Nested(base.merge(over))
                }
                _ => value.clone(),
            };
            merged.entries.insert(key.clone(), next);
        }
        merged
    }
}

impl FromIterator<(String, StyleValue)> for StyleBag {
    fn from_iter<T: IntoIterator<Item = (String, StyleValue)>>(iter: T) -> Self {
        StyleBag {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleBag {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for StyleBag {
    type Item = (String, StyleValue);
    type IntoIter = btree_map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
