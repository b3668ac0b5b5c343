//! Resolved style objects: the normalized output of [`css`](crate::style::normalize::css).
//!
//! A [`StyleObject`] maps CSS property names (`margin-top`) to final CSS values
//! (`8px`) and selectors / at-rules (`&:hover`, `@media ...`) to nested
//! objects. Entries keep insertion order because CSS output order matters:
//! declarations first, then pseudo-state blocks, then media queries.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One entry of a [`StyleObject`].
#[derive(Debug, Clone, PartialEq)]
pub enum CssEntry {
    /// A final CSS value, e.g. `"8px"` or `"#3182ce"`.
    Value(String),
    /// A nested block under a selector or at-rule.
    Block(StyleObject),
}

/// An insertion-ordered, selector-keyed style object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    entries: Vec<(String, CssEntry)>,
}

impl StyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&CssEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// The CSS value stored under `key`, if it is a plain value.
    pub fn value(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(CssEntry::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// The nested block stored under `key`, if any.
    pub fn block(&self, key: &str) -> Option<&StyleObject> {
        match self.get(key) {
            Some(CssEntry::Block(b)) => Some(b),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Insert an entry. An existing entry with the same key is replaced in place.
    pub fn insert(&mut self, key: impl Into<String>, entry: CssEntry) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((key, entry)),
        }
    }

    /// Insert a plain CSS value.
    pub fn insert_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, CssEntry::Value(value.into()));
    }

    /// Merge `block` into the block under `key`, creating it if absent.
    ///
    /// An existing plain value under `key` is replaced.
    pub fn merge_block(&mut self, key: impl Into<String>, block: StyleObject) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, CssEntry::Block(existing))) => existing.merge_in(&block),
            Some((_, slot)) => *slot = CssEntry::Block(block),
            None => self.entries.push((key, CssEntry::Block(block))),
        }
    }

    /// Deep-merge `other` into `self`. Values from `other` win; blocks merge
    /// recursively.
    pub fn merge_in(&mut self, other: &StyleObject) {
        for (key, entry) in &other.entries {
            match entry {
                CssEntry::Block(block) => self.merge_block(key.clone(), block.clone()),
                CssEntry::Value(_) => self.insert(key.clone(), entry.clone()),
            }
        }
    }

    /// Deep-merge `other` on top of `self`, returning a new object.
    pub fn merge(&self, other: &StyleObject) -> StyleObject {
        let mut merged = self.clone();
        merged.merge_in(other);
        merged
    }
}

impl Serialize for StyleObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            match entry {
                CssEntry::Value(v) => map.serialize_entry(key, v)?,
                CssEntry::Block(b) => map.serialize_entry(key, b)?,
            }
        }
        map.end()
    }
}
