//! UI primitives built on [`StyledElement`](crate::element::StyledElement).

pub mod text;

pub use text::{text_system, Text, TextColor, TEXT_PROPS};
