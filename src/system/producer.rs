//! The producer trait and the non-group producers.

use crate::style::error::StyleError;
use crate::style::normalize::css;
use crate::style::object::StyleObject;
use crate::style::pseudo::resolve_pseudo_styles;
use crate::style::value::{StyleBag, StyleValue};
use crate::theme::Theme;

/// Turns props into a normalized style object.
///
/// Implemented for any `Fn(&StyleBag, &Theme) -> Result<StyleObject, StyleError>`,
/// so plain functions and closures can join a [`Compose`](super::Compose) chain.
pub trait StyleProducer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn produce(&self, props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError>;
}

impl<F> StyleProducer for F
where
    F: Fn(&StyleBag, &Theme) -> Result<StyleObject, StyleError> + Send + Sync,
{
    fn name(&self) -> &str {
        "fn"
    }

    fn produce(&self, props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
        self(props, theme)
    }
}

/// Resolves `_hover`, `_focus`, ... entries into selector blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pseudo;

impl StyleProducer for Pseudo {
    fn name(&self) -> &str {
        "pseudo"
    }

    fn produce(&self, props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
        resolve_pseudo_styles(props, theme)
    }
}

/// Normalizes the free-form `sx` prop.
///
/// `sx` must hold a nested bag; it may use any property, selector or
/// pseudo-state key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sx;

impl Sx {
    pub const PROP: &'static str = "sx";
}

impl StyleProducer for Sx {
    fn name(&self) -> &str {
        Self::PROP
    }

    fn produce(&self, props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
        match props.get(Self::PROP) {
            None => Ok(StyleObject::new()),
            Some(StyleValue::Nested(bag)) => css(bag, theme),
            Some(other) => Err(StyleError::ExpectedNestedStyle {
                key: Self::PROP.to_string(),
                found: other.kind().to_string(),
            }),
        }
    }
}

/// A fixed bag normalized on every call, regardless of props.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseStyle(pub StyleBag);

impl StyleProducer for BaseStyle {
    fn name(&self) -> &str {
        "base"
    }

    fn produce(&self, _props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
        css(&self.0, theme)
    }
}
