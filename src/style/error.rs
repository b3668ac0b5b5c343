//! Errors raised while turning property bags into style objects.

/// Errors from style normalization and pseudo-state resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    #[error("unknown pseudo-state `{key}`; expected one of: {expected}")]
    UnknownPseudoState { key: String, expected: String },
    #[error("`{key}` expects a nested style, got {found}")]
    ExpectedNestedStyle { key: String, found: String },
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
}

impl StyleError {
    /// Build an [`StyleError::UnknownPseudoState`] listing every supported marker.
    pub fn unknown_pseudo_state(key: &str) -> Self {
        let expected = crate::style::pseudo::PseudoState::ALL
            .iter()
            .map(|s| s.prop_name())
            .collect::<Vec<_>>()
            .join(", ");
        StyleError::UnknownPseudoState {
            key: key.to_string(),
            expected,
        }
    }
}
