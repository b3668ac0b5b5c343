//! Styled elements: the base factory every primitive is built from.
//!
//! A [`StyledElement`] pairs an element name and HTML tag with a fixed base
//! style and a [`Compose`] chain of producers. Styling props runs the base
//! style first, then the chain, and the result can be rendered to CSS under a
//! generated class name.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::config::StyleConfig;
use crate::style::error::StyleError;
use crate::style::object::StyleObject;
use crate::style::parser::{parse_style_block, ParseError};
use crate::style::render::to_css;
use crate::style::value::StyleBag;
use crate::system::{BaseStyle, Compose, StyleProducer};
use crate::theme::Theme;

/// Output of [`StyledElement::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStyle {
    /// Element name, e.g. `Text`.
    pub element: String,
    pub tag: String,
    /// Generated class, `<prefix>-<hash>`.
    pub class_name: String,
    /// Stylesheet text scoped to `.class_name`.
    pub css: String,
    pub object: StyleObject,
}

/// A named element with a base style and a producer chain.
#[derive(Debug, Clone)]
pub struct StyledElement {
    name: String,
    tag: String,
    base: BaseStyle,
    producers: Compose,
}

impl StyledElement {
    /// Create an element with no base style and an empty producer chain.
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            base: BaseStyle::default(),
            producers: Compose::new(),
        }
    }

    /// Set the base style (builder).
    pub fn base_style(mut self, bag: StyleBag) -> Self {
        self.base = BaseStyle(bag);
        self
    }

    /// Set the base style from block syntax, e.g. `"margin: 0; _hover { color: blue; }"`.
    pub fn base_css(self, source: &str) -> Result<Self, ParseError> {
        Ok(self.base_style(parse_style_block(source)?))
    }

    /// Replace the producer chain (builder).
    pub fn producers(mut self, producers: Compose) -> Self {
        self.producers = producers;
        self
    }

    /// Override the rendered tag (builder).
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn base(&self) -> &StyleBag {
        &self.base.0
    }

    /// Resolve props into a style object: base style, then each producer.
    pub fn style(&self, props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
        let mut object = self.base.produce(props, theme)?;
        object.merge_in(&self.producers.produce(props, theme)?);
        Ok(object)
    }

    /// Resolve props and render them under a generated class name.
    ///
    /// The class name depends only on the resolved style, so equal input
    /// yields the same class.
    pub fn render(&self, props: &StyleBag, config: &StyleConfig) -> Result<RenderedStyle, StyleError> {
        let object = self.style(props, &config.theme)?;
        let class_name = format!("{}-{}", config.class_prefix, style_hash(&object));
        let css = to_css(&object, &format!(".{class_name}"));
        log::debug!(
            "rendered {} <{}> as .{} ({} top-level entries)",
            self.name,
            self.tag,
            class_name,
            object.len()
        );
        Ok(RenderedStyle {
            element: self.name.clone(),
            tag: self.tag.clone(),
            class_name,
            css,
            object,
        })
    }
}

/// Short hex digest of an object's unscoped CSS.
fn style_hash(object: &StyleObject) -> String {
    let mut hasher = DefaultHasher::new();
    to_css(object, "&").hash(&mut hasher);
    format!("{:08x}", hasher.finish() as u32)
}
