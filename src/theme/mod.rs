//! Themes: breakpoints and token scales.
//!
//! - [`Theme`]: the scales a style bag's tokens resolve against
//! - [`Scale`] / [`ScaleValue`]: list or map token tables
//! - [`ThemeError`]: loading failures

mod error;
mod scale;
#[allow(clippy::module_inception)]
mod theme;

pub use error::ThemeError;
pub use scale::{Scale, ScaleValue};
pub use theme::Theme;
