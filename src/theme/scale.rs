//! Theme scales: the token tables a [`Theme`](crate::theme::Theme) is made of.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::length::format_number;

/// A single entry of a scale: a number, a string, or a nested group of tokens
/// (e.g. `colors.blue` holding `100` .. `900`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleValue {
    Number(f64),
    Str(String),
    Nested(BTreeMap<String, ScaleValue>),
}

impl From<&str> for ScaleValue {
    fn from(s: &str) -> Self {
        ScaleValue::Str(s.to_string())
    }
}

impl From<f64> for ScaleValue {
    fn from(n: f64) -> Self {
        ScaleValue::Number(n)
    }
}

impl From<i32> for ScaleValue {
    fn from(n: i32) -> Self {
        ScaleValue::Number(n as f64)
    }
}

/// A scale is either a positional list (`space: [0, 4, 8, 16]`) or a named
/// map (`fontSizes: { sm: 14px, md: 16px }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scale {
    List(Vec<ScaleValue>),
    Map(BTreeMap<String, ScaleValue>),
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Map(BTreeMap::new())
    }
}

impl Scale {
    /// Build a list scale.
    pub fn list<V: Into<ScaleValue>>(values: impl IntoIterator<Item = V>) -> Self {
        Scale::List(values.into_iter().map(Into::into).collect())
    }

    /// Build a map scale.
    pub fn map<K: Into<String>, V: Into<ScaleValue>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Scale::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Scale::List(values) => values.is_empty(),
            Scale::Map(entries) => entries.is_empty(),
        }
    }

    /// Look up a token by name.
    ///
    /// Map scales try the name as-is first (so keys like `"0.5"` work), then
    /// walk dotted paths (`"blue.500"`). List scales accept a numeric index.
    /// Only leaf values are returned; a path ending at a group is `None`.
    pub fn lookup(&self, token: &str) -> Option<&ScaleValue> {
        let found = match self {
            Scale::List(values) => token.parse::<usize>().ok().and_then(|i| values.get(i)),
            Scale::Map(entries) => entries.get(token).or_else(|| {
                let mut parts = token.split('.');
                let mut current = entries.get(parts.next()?)?;
                for part in parts {
                    match current {
                        ScaleValue::Nested(children) => current = children.get(part)?,
                        _ => return None,
                    }
                }
                Some(current)
            }),
        };
        found.filter(|v| !matches!(v, ScaleValue::Nested(_)))
    }

    /// Look up a numeric value as a token: a list index for list scales, or
    /// the number's text as a key for map scales.
    pub fn lookup_number(&self, n: f64) -> Option<&ScaleValue> {
        if n < 0.0 {
            return None;
        }
        match self {
            Scale::List(_) if n.fract() != 0.0 => None,
            _ => self.lookup(&format_number(n)),
        }
    }

    /// Overlay `other` on top of `self`. Maps merge key by key (recursively
    /// for nested groups); a non-empty list replaces the whole scale.
    pub fn extend(&self, other: &Scale) -> Scale {
        match (self, other) {
            (_, o) if o.is_empty() => self.clone(),
            (Scale::Map(base), Scale::Map(over)) => Scale::Map(merge_maps(base, over)),
            _ => other.clone(),
        }
    }
}

fn merge_maps(
    base: &BTreeMap<String, ScaleValue>,
    over: &BTreeMap<String, ScaleValue>,
) -> BTreeMap<String, ScaleValue> {
    let mut merged = base.clone();
    for (key, value) in over {
        let next = match (merged.get(key), value) {
            (Some(ScaleValue::Nested(b)), ScaleValue::Nested(o)) => {
                ScaleValue::Nested(merge_maps(b, o))
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}
