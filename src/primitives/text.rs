//! Text primitive: a paragraph with no default margin or padding.

use crate::config::StyleConfig;
use crate::element::{RenderedStyle, StyledElement};
use crate::style::error::StyleError;
use crate::style::normalize::css;
use crate::style::object::StyleObject;
use crate::style::properties::ScaleKey;
use crate::style::value::StyleBag;
use crate::system::{Compose, PropGroup, Pseudo, StyleProducer, Sx};
use crate::theme::Theme;

/// Props only text accepts on top of the standard groups.
pub const TEXT_PROPS: PropGroup = PropGroup::new("text", &["cursor", "content"]);

/// Resolves `color` against the theme's `textColors` scale, falling back to
/// `colors`. Runs after [`PropGroup::COLOR`] so its result wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextColor;

impl StyleProducer for TextColor {
    fn name(&self) -> &str {
        "textColor"
    }

    fn produce(&self, props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
        let Some(value) = props.get("color") else {
            return Ok(StyleObject::new());
        };
        let colors = theme.scale(ScaleKey::Colors).extend(theme.scale(ScaleKey::TextColors));
        let text_theme = theme.clone().with_scale(ScaleKey::Colors, colors);
        css(&StyleBag::new().with("color", value.clone()), &text_theme)
    }
}

/// The producer chain behind [`Text`]: the standard groups with
/// [`TextColor`] after `color` and [`TEXT_PROPS`] before `sx`.
pub fn text_system() -> Compose {
    Compose::new()
        .with(PropGroup::SPACE)
        .with(PropGroup::TYPOGRAPHY)
        .with(PropGroup::COLOR)
        .with(TextColor)
        .with(PropGroup::LAYOUT)
        .with(PropGroup::BORDER)
        .with(PropGroup::FLEXBOX)
        .with(TEXT_PROPS)
        .with(Sx)
        .with(Pseudo)
}

/// Styled text. Renders as `<p>` unless another tag is chosen with [`Text::tag`].
///
/// Accepts every prop of the default system plus `cursor` and `content`,
/// pseudo-states included. `color` may name a `textColors` token:
///
/// ```
/// use stylekit::{StyleBag, Text, Theme};
///
/// let props = StyleBag::new()
///     .with("fontSize", "lg")
///     .with("_hover", StyleBag::new().with("color", "blue.500"));
/// let object = Text::new().style(&props, &Theme::base()).unwrap();
/// assert_eq!(object.value("font-size"), Some("1.125rem"));
///
/// let weak = StyleBag::new().with("color", "colorTextWeak");
/// let object = Text::new().style(&weak, &Theme::base()).unwrap();
/// assert_eq!(object.value("color"), Some("#4a5568"));
/// ```
#[derive(Debug, Clone)]
pub struct Text {
    element: StyledElement,
}

impl Text {
    pub const NAME: &'static str = "Text";

    pub fn new() -> Self {
        Self {
            element: StyledElement::new(Self::NAME, "p")
                .base_style(StyleBag::new().with("margin", 0).with("padding", 0))
                .producers(text_system()),
        }
    }

    /// Render as a different tag, e.g. `span` (builder).
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.element = self.element.tag(tag);
        self
    }

    pub fn element(&self) -> &StyledElement {
        &self.element
    }

    pub fn style(&self, props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
        self.element.style(props, theme)
    }

    pub fn render(&self, props: &StyleBag, config: &StyleConfig) -> Result<RenderedStyle, StyleError> {
        self.element.render(props, config)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}
