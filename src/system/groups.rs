//! Prop-group producers: each one picks its own props out of the bag.

use crate::style::error::StyleError;
use crate::style::normalize::css;
use crate::style::object::StyleObject;
use crate::style::value::StyleBag;
use crate::system::producer::StyleProducer;
use crate::theme::Theme;

/// A named set of prop names (aliases included) normalized together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropGroup {
    name: &'static str,
    props: &'static [&'static str],
}

impl PropGroup {
    pub const SPACE: PropGroup = PropGroup::new(
        "space",
        &[
            "m", "mt", "mr", "mb", "ml", "mx", "my", "margin", "marginTop", "marginRight",
            "marginBottom", "marginLeft", "marginX", "marginY", "p", "pt", "pr", "pb", "pl", "px",
            "py", "padding", "paddingTop", "paddingRight", "paddingBottom", "paddingLeft",
            "paddingX", "paddingY",
        ],
    );

    pub const TYPOGRAPHY: PropGroup = PropGroup::new(
        "typography",
        &[
            "fontFamily", "fontSize", "fontWeight", "fontStyle", "lineHeight", "letterSpacing",
            "textAlign", "textTransform", "textDecoration", "textOverflow", "whiteSpace",
            "wordBreak",
        ],
    );

    pub const COLOR: PropGroup = PropGroup::new(
        "color",
        &["color", "bg", "bgColor", "background", "backgroundColor", "opacity", "fill", "stroke"],
    );

    pub const LAYOUT: PropGroup = PropGroup::new(
        "layout",
        &[
            "w", "h", "minW", "maxW", "minH", "maxH", "size", "width", "height", "minWidth",
            "maxWidth", "minHeight", "maxHeight", "display", "overflow", "overflowX", "overflowY",
            "verticalAlign", "position", "top", "right", "bottom", "left", "inset", "zIndex",
            "boxSizing",
        ],
    );

    pub const BORDER: PropGroup = PropGroup::new(
        "border",
        &[
            "border", "borderTop", "borderRight", "borderBottom", "borderLeft", "borderWidth",
            "borderStyle", "borderColor", "borderRadius", "rounded", "roundedTop",
            "roundedBottom", "borderTopLeftRadius", "borderTopRightRadius",
            "borderBottomLeftRadius", "borderBottomRightRadius", "outline", "boxShadow", "shadow",
        ],
    );

    pub const FLEXBOX: PropGroup = PropGroup::new(
        "flexbox",
        &[
            "flex", "flexDir", "flexDirection", "flexWrap", "flexGrow", "flexShrink", "flexBasis",
            "alignItems", "alignContent", "alignSelf", "justifyContent", "justifyItems",
            "justifySelf", "order", "gap", "rowGap", "columnGap",
        ],
    );

    pub const fn new(name: &'static str, props: &'static [&'static str]) -> Self {
        PropGroup { name, props }
    }

    pub fn props(&self) -> &'static [&'static str] {
        self.props
    }

    pub fn contains(&self, prop: &str) -> bool {
        self.props.contains(&prop)
    }
}

impl StyleProducer for PropGroup {
    fn name(&self) -> &str {
        self.name
    }

    fn produce(&self, props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
        let own = props.filter(|key| self.contains(key));
        if own.is_empty() {
            return Ok(StyleObject::new());
        }
        css(&own, theme)
    }
}
