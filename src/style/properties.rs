//! Property tables: shorthand aliases, theme scales, unitless properties.
//!
//! These tables drive [`css`](crate::style::normalize::css): a bag key is first
//! expanded through [`expand_alias`], each resulting property then looks up its
//! theme scale with [`scale_for`], and finally [`is_unitless`] decides whether
//! a bare number gets a `px` suffix.

/// Which theme scale a property draws its tokens from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleKey {
    Space,
    Sizes,
    FontSizes,
    Fonts,
    FontWeights,
    LineHeights,
    LetterSpacings,
    Colors,
    /// Text-only colors, consulted before `colors` by the text primitive.
    TextColors,
    Radii,
    Borders,
    Shadows,
    ZIndices,
}

impl ScaleKey {
    /// Name of the scale as written in theme files.
    pub fn name(self) -> &'static str {
        match self {
            ScaleKey::Space => "space",
            ScaleKey::Sizes => "sizes",
            ScaleKey::FontSizes => "fontSizes",
            ScaleKey::Fonts => "fonts",
            ScaleKey::FontWeights => "fontWeights",
            ScaleKey::LineHeights => "lineHeights",
            ScaleKey::LetterSpacings => "letterSpacings",
            ScaleKey::Colors => "colors",
            ScaleKey::TextColors => "textColors",
            ScaleKey::Radii => "radii",
            ScaleKey::Borders => "borders",
            ScaleKey::Shadows => "shadows",
            ScaleKey::ZIndices => "zIndices",
        }
    }
}

/// Shorthand aliases and the properties they expand to.
const ALIASES: &[(&str, &[&str])] = &[
    // Margin
    ("m", &["margin"]),
    ("mt", &["marginTop"]),
    ("mr", &["marginRight"]),
    ("mb", &["marginBottom"]),
    ("ml", &["marginLeft"]),
    ("mx", &["marginLeft", "marginRight"]),
    ("my", &["marginTop", "marginBottom"]),
    ("marginX", &["marginLeft", "marginRight"]),
    ("marginY", &["marginTop", "marginBottom"]),
    // Padding
    ("p", &["padding"]),
    ("pt", &["paddingTop"]),
    ("pr", &["paddingRight"]),
    ("pb", &["paddingBottom"]),
    ("pl", &["paddingLeft"]),
    ("px", &["paddingLeft", "paddingRight"]),
    ("py", &["paddingTop", "paddingBottom"]),
    ("paddingX", &["paddingLeft", "paddingRight"]),
    ("paddingY", &["paddingTop", "paddingBottom"]),
    // Color
    ("bg", &["background"]),
    ("bgColor", &["backgroundColor"]),
    // Sizing
    ("w", &["width"]),
    ("h", &["height"]),
    ("minW", &["minWidth"]),
    ("maxW", &["maxWidth"]),
    ("minH", &["minHeight"]),
    ("maxH", &["maxHeight"]),
    ("size", &["width", "height"]),
    // Border
    ("rounded", &["borderRadius"]),
    ("roundedTop", &["borderTopLeftRadius", "borderTopRightRadius"]),
    ("roundedBottom", &["borderBottomLeftRadius", "borderBottomRightRadius"]),
    // Flexbox
    ("flexDir", &["flexDirection"]),
    ("shadow", &["boxShadow"]),
];

/// Expand a bag key into the CSS properties it sets (camelCase).
///
/// Keys that are not aliases expand to themselves.
pub fn expand_alias(key: &str) -> Vec<&str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, props)| props.to_vec())
        .unwrap_or_else(|| vec![key])
}

/// Returns `true` if `key` is a shorthand alias.
pub fn is_alias(key: &str) -> bool {
    ALIASES.iter().any(|(alias, _)| *alias == key)
}

/// The theme scale for a (camelCase, already expanded) CSS property.
pub fn scale_for(property: &str) -> Option<ScaleKey> {
    let scale = match property {
        "margin" | "marginTop" | "marginRight" | "marginBottom" | "marginLeft" | "padding"
        | "paddingTop" | "paddingRight" | "paddingBottom" | "paddingLeft" | "gap" | "rowGap"
        | "columnGap" | "top" | "right" | "bottom" | "left" | "inset" => ScaleKey::Space,
        "width" | "height" | "minWidth" | "maxWidth" | "minHeight" | "maxHeight"
        | "flexBasis" => ScaleKey::Sizes,
        "fontSize" => ScaleKey::FontSizes,
        "fontFamily" => ScaleKey::Fonts,
        "fontWeight" => ScaleKey::FontWeights,
        "lineHeight" => ScaleKey::LineHeights,
        "letterSpacing" => ScaleKey::LetterSpacings,
        "color" | "background" | "backgroundColor" | "borderColor" | "borderTopColor"
        | "borderRightColor" | "borderBottomColor" | "borderLeftColor" | "outlineColor"
        | "fill" | "stroke" | "caretColor" => ScaleKey::Colors,
        "borderRadius" | "borderTopLeftRadius" | "borderTopRightRadius"
        | "borderBottomLeftRadius" | "borderBottomRightRadius" => ScaleKey::Radii,
        "border" | "borderTop" | "borderRight" | "borderBottom" | "borderLeft" => {
            ScaleKey::Borders
        }
        "boxShadow" | "textShadow" => ScaleKey::Shadows,
        "zIndex" => ScaleKey::ZIndices,
        _ => return None,
    };
    Some(scale)
}

/// Properties whose numeric values are written without a unit.
const UNITLESS: &[&str] = &[
    "lineHeight",
    "fontWeight",
    "opacity",
    "zIndex",
    "flex",
    "flexGrow",
    "flexShrink",
    "order",
];

pub fn is_unitless(property: &str) -> bool {
    UNITLESS.contains(&property)
}

/// Properties whose space tokens may be negated with a leading `-`.
pub fn allows_negative(property: &str) -> bool {
    property.starts_with("margin")
        || matches!(property, "top" | "right" | "bottom" | "left" | "inset")
}

/// How a bag key is treated during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// `_hover`, `_focus`, ...: a pseudo-state marker.
    PseudoState,
    /// `&:hover`, `@media ...`, `& > p`: a nested selector or at-rule.
    Selector,
    /// An ordinary style property or alias.
    Property,
}

/// Classify a bag key by naming convention.
pub fn classify_key(key: &str) -> KeyKind {
    if key.starts_with('_') {
        KeyKind::PseudoState
    } else if key.starts_with('&')
        || key.starts_with('@')
        || key.contains([':', '[', '>', ' ', '.', ','])
    {
        KeyKind::Selector
    } else {
        KeyKind::Property
    }
}

/// Convert a camelCase property name to its CSS kebab-case form.
///
/// Names that already contain `-` (including custom properties like
/// `--brand-color`) are returned unchanged.
pub fn to_css_property(name: &str) -> String {
    if name.contains('-') {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_expands_single() {
        assert_eq!(expand_alias("m"), vec!["margin"]);
        assert_eq!(expand_alias("bg"), vec!["background"]);
    }

    #[test]
    fn alias_expands_axis() {
        assert_eq!(expand_alias("px"), vec!["paddingLeft", "paddingRight"]);
        assert_eq!(expand_alias("my"), vec!["marginTop", "marginBottom"]);
        assert_eq!(expand_alias("size"), vec!["width", "height"]);
    }

    #[test]
    fn non_alias_expands_to_itself() {
        assert_eq!(expand_alias("fontSize"), vec!["fontSize"]);
        assert!(!is_alias("fontSize"));
        assert!(is_alias("mx"));
    }

    #[test]
    fn scales() {
        assert_eq!(scale_for("marginTop"), Some(ScaleKey::Space));
        assert_eq!(scale_for("fontSize"), Some(ScaleKey::FontSizes));
        assert_eq!(scale_for("backgroundColor"), Some(ScaleKey::Colors));
        assert_eq!(scale_for("borderRadius"), Some(ScaleKey::Radii));
        assert_eq!(scale_for("display"), None);
    }

    #[test]
    fn unitless_properties() {
        assert!(is_unitless("lineHeight"));
        assert!(is_unitless("zIndex"));
        assert!(!is_unitless("width"));
    }

    #[test]
    fn negative_allowed_for_margins_and_offsets() {
        assert!(allows_negative("marginTop"));
        assert!(allows_negative("top"));
        assert!(!allows_negative("padding"));
    }

    #[test]
    fn classify() {
        assert_eq!(classify_key("_hover"), KeyKind::PseudoState);
        assert_eq!(classify_key("&:hover"), KeyKind::Selector);
        assert_eq!(classify_key("@media print"), KeyKind::Selector);
        assert_eq!(classify_key("& > p"), KeyKind::Selector);
        assert_eq!(classify_key(":focus"), KeyKind::Selector);
        assert_eq!(classify_key("color"), KeyKind::Property);
        assert_eq!(classify_key("--brand"), KeyKind::Property);
    }

    #[test]
    fn kebab_case() {
        assert_eq!(to_css_property("fontSize"), "font-size");
        assert_eq!(to_css_property("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(to_css_property("color"), "color");
        assert_eq!(to_css_property("--brand-color"), "--brand-color");
        assert_eq!(to_css_property("font-size"), "font-size");
    }
}
