//! The normalization function: property bag + theme -> [`StyleObject`].
//!
//! [`css`] is the single entry point. It expands shorthand aliases, resolves
//! theme tokens, appends units, turns responsive arrays into media-query
//! blocks, and recurses into pseudo-state and selector keys.

use crate::style::error::StyleError;
use crate::style::length::{format_number, Length};
use crate::style::object::StyleObject;
use crate::style::properties::{
    allows_negative, classify_key, expand_alias, is_unitless, scale_for, to_css_property, KeyKind,
};
use crate::style::pseudo::PseudoState;
use crate::style::value::{StyleBag, StyleValue};
use crate::theme::{ScaleValue, Theme};

/// Normalize a property bag against a theme.
///
/// Output order: plain declarations (in bag key order), then nested selector
/// blocks, then one `@media` block per breakpoint in ascending order.
pub fn css(bag: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
    let mut declarations = StyleObject::new();
    let mut nested = StyleObject::new();
    let mut media: Vec<StyleObject> = vec![StyleObject::new(); theme.breakpoints.len()];

    for (key, value) in bag {
        match classify_key(key) {
            KeyKind::PseudoState => {
                let state = PseudoState::from_prop_name(key)
                    .ok_or_else(|| StyleError::unknown_pseudo_state(key))?;
                nested.merge_block(state.selector(), nested_block(key, value, theme)?);
            }
            KeyKind::Selector => {
                nested.merge_block(key.clone(), nested_block(key, value, theme)?);
            }
            KeyKind::Property => {
                for property in expand_alias(key) {
                    apply_property(property, value, theme, &mut declarations, &mut media)?;
                }
            }
        }
    }

    declarations.merge_in(&nested);
    for (index, block) in media.into_iter().enumerate() {
        if block.is_empty() {
            continue;
        }
        if let Some(query) = theme.media_query(index + 1) {
            declarations.merge_block(query, block);
        }
    }
    Ok(declarations)
}

/// Normalize the value under a selector or pseudo-state key; it must be a
/// nested bag. Errors name `key` as written in the bag.
fn nested_block(key: &str, value: &StyleValue, theme: &Theme) -> Result<StyleObject, StyleError> {
    match value {
        StyleValue::Nested(inner) => css(inner, theme),
        other => Err(StyleError::ExpectedNestedStyle {
            key: key.to_string(),
            found: other.kind().to_string(),
        }),
    }
}

fn apply_property(
    property: &str,
    value: &StyleValue,
    theme: &Theme,
    declarations: &mut StyleObject,
    media: &mut [StyleObject],
) -> Result<(), StyleError> {
    let name = to_css_property(property);
    match value {
        StyleValue::Responsive(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                let Some(entry) = entry else { continue };
                let resolved = resolve_scalar(property, entry, theme)?;
                if index == 0 {
                    declarations.insert_value(name.clone(), resolved);
                } else if let Some(block) = media.get_mut(index - 1) {
                    block.insert_value(name.clone(), resolved);
                } else {
                    log::warn!(
                        "dropping responsive value {index} of `{property}`: theme has {} breakpoints",
                        media.len()
                    );
                }
            }
        }
        StyleValue::Nested(_) => {
            return Err(StyleError::InvalidValue {
                property: property.to_string(),
                message: "nested style under a plain property; use a selector or pseudo-state key"
                    .into(),
            });
        }
        scalar => {
            let resolved = resolve_scalar(property, scalar, theme)?;
            declarations.insert_value(name, resolved);
        }
    }
    Ok(())
}

/// Resolve one scalar value for a (camelCase) property to its final CSS text.
fn resolve_scalar(property: &str, value: &StyleValue, theme: &Theme) -> Result<String, StyleError> {
    let scale = scale_for(property).map(|key| theme.scale(key));
    match value {
        StyleValue::Number(n) => {
            let negative = *n < 0.0 && allows_negative(property);
            let magnitude = if negative { -n } else { *n };
            let token = scale
                .and_then(|s| s.lookup_number(magnitude))
                .and_then(|v| format_scale_value(property, v));
            Ok(match token {
                Some(resolved) => negate_if(resolved, negative),
                None => format_number_for(property, *n),
            })
        }
        StyleValue::Str(s) => {
            let (negative, token) = match s.strip_prefix('-') {
                Some(rest) if allows_negative(property) && !rest.is_empty() => (true, rest),
                _ => (false, s.as_str()),
            };
            let resolved = scale
                .and_then(|sc| sc.lookup(token))
                .and_then(|v| format_scale_value(property, v));
            Ok(match resolved {
                Some(resolved) => negate_if(resolved, negative),
                None => s.clone(),
            })
        }
        other => Err(StyleError::InvalidValue {
            property: property.to_string(),
            message: format!("expected a string or number, got {}", other.kind()),
        }),
    }
}

fn format_scale_value(property: &str, value: &ScaleValue) -> Option<String> {
    match value {
        ScaleValue::Number(n) => Some(format_number_for(property, *n)),
        ScaleValue::Str(s) => Some(s.clone()),
        ScaleValue::Nested(_) => None,
    }
}

/// Bare numbers get `px` unless the property is unitless or the number is 0.
fn format_number_for(property: &str, n: f64) -> String {
    if n == 0.0 || is_unitless(property) {
        format_number(n)
    } else {
        Length::px(n).to_string()
    }
}

fn negate_if(value: String, negative: bool) -> String {
    if !negative {
        return value;
    }
    if let Some(length) = Length::parse(&value) {
        return length.negate().to_string();
    }
    if let Ok(n) = value.parse::<f64>() {
        return format_number(-n);
    }
    format!("calc({value} * -1)")
}
