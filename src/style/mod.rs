//! Style values, pseudo-state resolution and CSS output.
//!
//! The pipeline runs in three stages:
//!
//! 1. A [`StyleBag`] is built from props, the `style!` macro, or the
//!    block syntax in [`parser`].
//! 2. [`css`] normalizes it against a [`Theme`](crate::theme::Theme) into a
//!    [`StyleObject`]: aliases expanded, tokens resolved, units applied.
//! 3. [`render`] flattens the object into selector rules.

pub mod error;
pub mod length;
pub mod normalize;
pub mod object;
pub mod parser;
pub mod properties;
pub mod pseudo;
pub mod render;
pub mod tokenizer;
pub mod value;

pub use error::StyleError;
pub use length::{Length, Unit};
pub use normalize::css;
pub use object::{CssEntry, StyleObject};
pub use parser::{parse_style_block, ParseError};
pub use properties::{KeyKind, ScaleKey};
pub use pseudo::{resolve_pseudo_styles, PseudoState, PseudoStates};
pub use render::{to_css, CssRule};
pub use value::{StyleBag, StyleValue};
