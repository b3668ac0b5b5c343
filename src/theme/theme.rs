//! Theme struct: breakpoints plus the token scales used by normalization.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::style::properties::ScaleKey;
use crate::theme::error::ThemeError;
use crate::theme::scale::{Scale, ScaleValue};

/// A design-system theme.
///
/// Token names in a style bag (`color: "blue.500"`, `m: 2`, `fontSize: "lg"`)
/// resolve against these scales. Breakpoints drive responsive arrays.
///
/// Themes are plain data and deserialize from YAML or JSON with camelCase
/// scale names:
///
/// ```yaml
/// breakpoints: [40em, 52em, 64em]
/// space: [0, 4, 8, 16, 32]
/// colors:
///   primary: "#3182ce"
/// ```
///
/// Numeric map keys must be quoted in YAML (`"500": "#4299e1"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub breakpoints: Vec<String>,
    #[serde(default)]
    pub space: Scale,
    #[serde(default)]
    pub sizes: Scale,
    #[serde(default)]
    pub font_sizes: Scale,
    #[serde(default)]
    pub fonts: Scale,
    #[serde(default)]
    pub font_weights: Scale,
    #[serde(default)]
    pub line_heights: Scale,
    #[serde(default)]
    pub letter_spacings: Scale,
    #[serde(default)]
    pub colors: Scale,
    #[serde(default)]
    pub text_colors: Scale,
    #[serde(default)]
    pub radii: Scale,
    #[serde(default)]
    pub borders: Scale,
    #[serde(default)]
    pub shadows: Scale,
    #[serde(default)]
    pub z_indices: Scale,
}

static BASE_THEME: Lazy<Theme> = Lazy::new(build_base_theme);

impl Theme {
    /// A theme with no breakpoints and no tokens. Every value passes through
    /// normalization unresolved.
    pub fn empty() -> Self {
        Theme {
            breakpoints: Vec::new(),
            space: Scale::default(),
            sizes: Scale::default(),
            font_sizes: Scale::default(),
            fonts: Scale::default(),
            font_weights: Scale::default(),
            line_heights: Scale::default(),
            letter_spacings: Scale::default(),
            colors: Scale::default(),
            text_colors: Scale::default(),
            radii: Scale::default(),
            borders: Scale::default(),
            shadows: Scale::default(),
            z_indices: Scale::default(),
        }
    }

    /// The built-in base theme.
    pub fn base() -> Self {
        BASE_THEME.clone()
    }

    /// Parse a theme from YAML.
    pub fn from_yaml_str(input: &str) -> Result<Self, ThemeError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parse a theme from JSON.
    pub fn from_json_str(input: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a theme file. The format follows the extension: `.yaml`, `.yml`
    /// or `.json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if !matches!(ext.as_str(), "yaml" | "yml" | "json") {
            return Err(ThemeError::UnsupportedFormat(ext));
        }
        let text = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if ext == "json" {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// The scale backing a group of properties.
    pub fn scale(&self, key: ScaleKey) -> &Scale {
        match key {
            ScaleKey::Space => &self.space,
            ScaleKey::Sizes => &self.sizes,
            ScaleKey::FontSizes => &self.font_sizes,
            ScaleKey::Fonts => &self.fonts,
            ScaleKey::FontWeights => &self.font_weights,
            ScaleKey::LineHeights => &self.line_heights,
            ScaleKey::LetterSpacings => &self.letter_spacings,
            ScaleKey::Colors => &self.colors,
            ScaleKey::TextColors => &self.text_colors,
            ScaleKey::Radii => &self.radii,
            ScaleKey::Borders => &self.borders,
            ScaleKey::Shadows => &self.shadows,
            ScaleKey::ZIndices => &self.z_indices,
        }
    }

    fn scale_mut(&mut self, key: ScaleKey) -> &mut Scale {
        match key {
            ScaleKey::Space => &mut self.space,
            ScaleKey::Sizes => &mut self.sizes,
            ScaleKey::FontSizes => &mut self.font_sizes,
            ScaleKey::Fonts => &mut self.fonts,
            ScaleKey::FontWeights => &mut self.font_weights,
            ScaleKey::LineHeights => &mut self.line_heights,
            ScaleKey::LetterSpacings => &mut self.letter_spacings,
            ScaleKey::Colors => &mut self.colors,
            ScaleKey::TextColors => &mut self.text_colors,
            ScaleKey::Radii => &mut self.radii,
            ScaleKey::Borders => &mut self.borders,
            ScaleKey::Shadows => &mut self.shadows,
            ScaleKey::ZIndices => &mut self.z_indices,
        }
    }

    /// Replace one scale (builder).
    pub fn with_scale(mut self, key: ScaleKey, scale: Scale) -> Self {
        *self.scale_mut(key) = scale;
        self
    }

    /// Replace the breakpoints (builder).
    pub fn with_breakpoints<S: Into<String>>(mut self, breakpoints: impl IntoIterator<Item = S>) -> Self {
        self.breakpoints = breakpoints.into_iter().map(Into::into).collect();
        self
    }

    /// Look up a token in the scale named by `key`.
    pub fn token(&self, key: ScaleKey, token: &str) -> Option<&ScaleValue> {
        self.scale(key).lookup(token)
    }

    /// The media query for responsive index `index` (1-based: index 1 is the
    /// first breakpoint). Index 0 and out-of-range indices have no query.
    pub fn media_query(&self, index: usize) -> Option<String> {
        let bp = self.breakpoints.get(index.checked_sub(1)?)?;
        Some(format!("@media screen and (min-width: {bp})"))
    }

    /// Overlay `other` on this theme. Non-empty breakpoints replace ours;
    /// scales combine with [`Scale::extend`].
    pub fn extend(&self, other: &Theme) -> Theme {
        let mut merged = self.clone();
        if !other.breakpoints.is_empty() {
            merged.breakpoints = other.breakpoints.clone();
        }
        for key in ALL_SCALES {
            let next = merged.scale(key).extend(other.scale(key));
            *merged.scale_mut(key) = next;
        }
        merged
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::base()
    }
}

const ALL_SCALES: [ScaleKey; 13] = [
    ScaleKey::Space,
    ScaleKey::Sizes,
    ScaleKey::FontSizes,
    ScaleKey::Fonts,
    ScaleKey::FontWeights,
    ScaleKey::LineHeights,
    ScaleKey::LetterSpacings,
    ScaleKey::Colors,
    ScaleKey::TextColors,
    ScaleKey::Radii,
    ScaleKey::Borders,
    ScaleKey::Shadows,
    ScaleKey::ZIndices,
];

fn group(entries: &[(&str, &str)]) -> ScaleValue {
    ScaleValue::Nested(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), ScaleValue::from(*v)))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn build_base_theme() -> Theme {
    let colors = Scale::Map(BTreeMap::from([
        ("transparent".to_string(), ScaleValue::from("transparent")),
        ("current".to_string(), ScaleValue::from("currentColor")),
        ("black".to_string(), ScaleValue::from("#000000")),
        ("white".to_string(), ScaleValue::from("#ffffff")),
        (
            "gray".to_string(),
            group(&[
                ("100", "#f7fafc"),
                ("300", "#e2e8f0"),
                ("500", "#a0aec0"),
                ("700", "#4a5568"),
                ("900", "#1a202c"),
            ]),
        ),
        (
            "blue".to_string(),
            group(&[
                ("100", "#ebf8ff"),
                ("300", "#90cdf4"),
                ("500", "#4299e1"),
                ("700", "#2b6cb0"),
                ("900", "#2a4365"),
            ]),
        ),
        (
            "red".to_string(),
            group(&[("100", "#fff5f5"), ("500", "#f56565"), ("700", "#c53030")]),
        ),
        (
            "green".to_string(),
            group(&[("100", "#f0fff4"), ("500", "#48bb78"), ("700", "#2f855a")]),
        ),
    ]));

    Theme::empty()
        .with_breakpoints(["40em", "52em", "64em"])
        .with_scale(ScaleKey::Space, Scale::list([0, 4, 8, 16, 32, 64, 128, 256, 512]))
        .with_scale(
            ScaleKey::Sizes,
            Scale::map([
                ("full", "100%"),
                ("min", "min-content"),
                ("max", "max-content"),
                ("prose", "60ch"),
            ]),
        )
        .with_scale(
            ScaleKey::FontSizes,
            Scale::map([
                ("xs", "0.75rem"),
                ("sm", "0.875rem"),
                ("md", "1rem"),
                ("lg", "1.125rem"),
                ("xl", "1.25rem"),
                ("2xl", "1.5rem"),
                ("3xl", "1.875rem"),
                ("4xl", "2.25rem"),
            ]),
        )
        .with_scale(
            ScaleKey::Fonts,
            Scale::map([
                ("body", "system-ui, sans-serif"),
                ("heading", "inherit"),
                ("mono", "Menlo, monospace"),
            ]),
        )
        .with_scale(
            ScaleKey::FontWeights,
            Scale::map([("normal", 400), ("medium", 500), ("semibold", 600), ("bold", 700)]),
        )
        .with_scale(
            ScaleKey::LineHeights,
            Scale::Map(BTreeMap::from([
                ("normal".to_string(), ScaleValue::from("normal")),
                ("none".to_string(), ScaleValue::from(1)),
                ("short".to_string(), ScaleValue::from(1.375)),
                ("base".to_string(), ScaleValue::from(1.5)),
                ("tall".to_string(), ScaleValue::from(1.625)),
            ])),
        )
        .with_scale(
            ScaleKey::LetterSpacings,
            Scale::map([("tight", "-0.025em"), ("normal", "0"), ("wide", "0.025em")]),
        )
        .with_scale(ScaleKey::Colors, colors)
        .with_scale(
            ScaleKey::TextColors,
            Scale::map([
                ("colorText", "#1a202c"),
                ("colorTextWeak", "#4a5568"),
                ("colorTextLink", "#2b6cb0"),
                ("colorTextError", "#c53030"),
                ("colorTextInverse", "#ffffff"),
            ]),
        )
        .with_scale(
            ScaleKey::Radii,
            Scale::map([
                ("none", "0"),
                ("sm", "0.125rem"),
                ("md", "0.375rem"),
                ("lg", "0.5rem"),
                ("full", "9999px"),
            ]),
        )
        .with_scale(ScaleKey::Borders, Scale::map([("none", "0"), ("thin", "1px solid")]))
        .with_scale(
            ScaleKey::Shadows,
            Scale::map([
                ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
                ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1)"),
                ("outline", "0 0 0 3px rgba(66, 153, 225, 0.6)"),
            ]),
        )
        .with_scale(
            ScaleKey::ZIndices,
            Scale::map([
                ("hide", -1),
                ("base", 0),
                ("dropdown", 1000),
                ("overlay", 1300),
                ("modal", 1400),
                ("tooltip", 1800),
            ]),
        )
}
