//! # stylekit
//!
//! Theme-aware style objects for design-system primitives.
//!
//! Components describe their look as a property bag ([`StyleBag`]). A chain
//! of style producers normalizes the bag against a [`Theme`] into a
//! selector-keyed [`StyleObject`], which renders to CSS under a generated
//! class name.
//!
//! Pseudo-state props such as `_hover` or `_disabled` map through a fixed
//! table to selector fragments (`&:hover`, `&:disabled, &[disabled], ...`);
//! an unrecognized marker is an error rather than a silently dropped style.
//!
//! ## Core Systems
//!
//! - **[`style`]**: values, normalization, pseudo-states, block syntax, CSS output
//! - **[`theme`]**: token scales and breakpoints, loadable from YAML or JSON
//! - **[`system`]**: style producers and their ordered composition
//! - **[`element`]**: the styled-element factory primitives are built from
//! - **[`primitives`]**: ready-made primitives ([`Text`])
//! - **[`config`]**: class prefix and theme for rendering
//!
//! ```
//! use stylekit::{resolve_pseudo_styles, StyleBag, Theme};
//!
//! let props = StyleBag::new()
//!     .with("_hover", StyleBag::new().with("color", "blue"))
//!     .with("fontSize", "14px");
//! let object = resolve_pseudo_styles(&props, &Theme::empty()).unwrap();
//! assert_eq!(object.keys().collect::<Vec<_>>(), vec!["&:hover"]);
//! ```

// Foundation
pub mod style;
pub mod theme;

// Composition
pub mod element;
pub mod system;

// Primitives
pub mod primitives;

pub mod config;

pub use config::{ConfigError, StyleConfig};
pub use element::{RenderedStyle, StyledElement};
pub use primitives::{Text, TextColor};
pub use style::{
    css, parse_style_block, resolve_pseudo_styles, CssEntry, ParseError, PseudoState, PseudoStates,
    StyleBag, StyleError, StyleObject, StyleValue,
};
pub use system::{default_system, Compose, PropGroup, StyleProducer};
pub use theme::{Scale, ScaleValue, Theme, ThemeError};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use stylekit_macros::style;
