//! Style producers and their composition.
//!
//! A [`StyleProducer`] turns a property bag into a [`StyleObject`]. Producers
//! are combined with [`Compose`], which runs them in order and deep-merges
//! each result over the previous ones, so a later producer wins on conflict.
//!
//! [`StyleObject`]: crate::style::StyleObject

pub mod compose;
pub mod groups;
pub mod producer;

pub use compose::Compose;
pub use groups::PropGroup;
pub use producer::{BaseStyle, Pseudo, StyleProducer, Sx};

/// The standard producer chain used by primitives:
/// space, typography, color, layout, border, flexbox, `sx`, then pseudo-states.
pub fn default_system() -> Compose {
    Compose::new()
        .with(PropGroup::SPACE)
        .with(PropGroup::TYPOGRAPHY)
        .with(PropGroup::COLOR)
        .with(PropGroup::LAYOUT)
        .with(PropGroup::BORDER)
        .with(PropGroup::FLEXBOX)
        .with(Sx)
        .with(Pseudo)
}
