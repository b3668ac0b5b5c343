//! Pseudo-state styles: `_hover`, `_focus`, `_active`, ...
//!
//! A property bag marks conditional styles with a leading underscore:
//!
//! ```text
//! { fontSize: "14px", _hover: { color: "blue" }, _active: { color: "red" } }
//! ```
//!
//! [`resolve_pseudo_styles`] picks out the underscore keys, maps each through
//! the fixed [`PseudoState`] selector table, and normalizes the result:
//!
//! ```text
//! { "&:active, &[data-active=true]": { color: "red" }, "&:hover": { color: "blue" } }
//! ```
//!
//! Ordinary keys are left to the other style producers. A marker that is not
//! in the table is an error, never an undefined selector.
//!
//! [`PseudoStates`] is the typed form: one optional bag per known state, so
//! code that builds styles in Rust cannot name an unknown state at all.

use crate::style::error::StyleError;
use crate::style::normalize::css;
use crate::style::object::StyleObject;
use crate::style::value::{StyleBag, StyleValue};
use crate::theme::Theme;

/// Marker character that identifies a pseudo-state key in a property bag.
pub const PSEUDO_MARKER: char = '_';

/// Returns `true` if `key` follows the pseudo-state naming convention.
pub fn is_pseudo_key(key: &str) -> bool {
    key.starts_with(PSEUDO_MARKER)
}

/// The closed set of supported pseudo-states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PseudoState {
    Hover,
    Active,
    Focus,
    FocusVisible,
    FocusWithin,
    Disabled,
    Visited,
    Checked,
    Invalid,
    Selected,
    Expanded,
    ReadOnly,
    Pressed,
    Grabbed,
    Mixed,
    First,
    Last,
    NotFirst,
    NotLast,
    Odd,
    Even,
    Before,
    After,
    Placeholder,
    Selection,
}

impl PseudoState {
    /// Every state, in table order.
    pub const ALL: [PseudoState; 25] = [
        PseudoState::Hover,
        PseudoState::Active,
        PseudoState::Focus,
        PseudoState::FocusVisible,
        PseudoState::FocusWithin,
        PseudoState::Disabled,
        PseudoState::Visited,
        PseudoState::Checked,
        PseudoState::Invalid,
        PseudoState::Selected,
        PseudoState::Expanded,
        PseudoState::ReadOnly,
        PseudoState::Pressed,
        PseudoState::Grabbed,
        PseudoState::Mixed,
        PseudoState::First,
        PseudoState::Last,
        PseudoState::NotFirst,
        PseudoState::NotLast,
        PseudoState::Odd,
        PseudoState::Even,
        PseudoState::Before,
        PseudoState::After,
        PseudoState::Placeholder,
        PseudoState::Selection,
    ];

    /// The CSS selector fragment this state maps to. `&` stands for the
    /// element itself.
    pub const fn selector(self) -> &'static str {
        match self {
            PseudoState::Hover => "&:hover",
            PseudoState::Active => "&:active, &[data-active=true]",
            PseudoState::Focus => "&:focus",
            PseudoState::FocusVisible => "&:focus-visible",
            PseudoState::FocusWithin => "&:focus-within",
            PseudoState::Disabled => "&:disabled, &[disabled], &[aria-disabled=true]",
            PseudoState::Visited => "&:visited",
            PseudoState::Checked => "&:checked, &[aria-checked=true]",
            PseudoState::Invalid => "&:invalid, &[aria-invalid=true]",
            PseudoState::Selected => "&[aria-selected=true], &[data-selected]",
            PseudoState::Expanded => "&[aria-expanded=true], &[data-expanded]",
            PseudoState::ReadOnly => "&[aria-readonly=true], &[readonly]",
            PseudoState::Pressed => "&[aria-pressed=true]",
            PseudoState::Grabbed => "&[aria-grabbed=true]",
            PseudoState::Mixed => "&:indeterminate, &[aria-checked=mixed]",
            PseudoState::First => "&:first-of-type",
            PseudoState::Last => "&:last-of-type",
            PseudoState::NotFirst => "&:not(:first-of-type)",
            PseudoState::NotLast => "&:not(:last-of-type)",
            PseudoState::Odd => "&:nth-of-type(odd)",
            PseudoState::Even => "&:nth-of-type(even)",
            PseudoState::Before => "&::before",
            PseudoState::After => "&::after",
            PseudoState::Placeholder => "&::placeholder",
            PseudoState::Selection => "&::selection",
        }
    }

    /// The property-bag key for this state, e.g. `"_hover"`.
    pub const fn prop_name(self) -> &'static str {
        match self {
            PseudoState::Hover => "_hover",
            PseudoState::Active => "_active",
            PseudoState::Focus => "_focus",
            PseudoState::FocusVisible => "_focusVisible",
            PseudoState::FocusWithin => "_focusWithin",
            PseudoState::Disabled => "_disabled",
            PseudoState::Visited => "_visited",
            PseudoState::Checked => "_checked",
            PseudoState::Invalid => "_invalid",
            PseudoState::Selected => "_selected",
            PseudoState::Expanded => "_expanded",
            PseudoState::ReadOnly => "_readOnly",
            PseudoState::Pressed => "_pressed",
            PseudoState::Grabbed => "_grabbed",
            PseudoState::Mixed => "_mixed",
            PseudoState::First => "_first",
            PseudoState::Last => "_last",
            PseudoState::NotFirst => "_notFirst",
            PseudoState::NotLast => "_notLast",
            PseudoState::Odd => "_odd",
            PseudoState::Even => "_even",
            PseudoState::Before => "_before",
            PseudoState::After => "_after",
            PseudoState::Placeholder => "_placeholder",
            PseudoState::Selection => "_selection",
        }
    }

    /// Look up a state by its property-bag key.
    pub fn from_prop_name(name: &str) -> Option<PseudoState> {
        PseudoState::ALL.into_iter().find(|s| s.prop_name() == name)
    }
}

impl std::fmt::Display for PseudoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prop_name())
    }
}

/// Resolve the pseudo-state entries of `props` into a selector-keyed style object.
///
/// Only keys starting with `_` are considered; everything else is ignored.
/// Returns an empty object, without normalizing anything, when there are no
/// such keys. Fails with [`StyleError::UnknownPseudoState`] if a marker is
/// not in the table, and with [`StyleError::ExpectedNestedStyle`] naming the
/// marker if its value is not a nested bag.
pub fn resolve_pseudo_styles(props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
    let mut selectors = StyleBag::new();
    for (key, value) in props.iter().filter(|(k, _)| is_pseudo_key(k)) {
        let state =
            PseudoState::from_prop_name(key).ok_or_else(|| StyleError::unknown_pseudo_state(key))?;
        if !matches!(value, StyleValue::Nested(_)) {
            return Err(StyleError::ExpectedNestedStyle {
                key: key.clone(),
                found: value.kind().to_string(),
            });
        }
        selectors.insert(state.selector(), value.clone());
    }

    if selectors.is_empty() {
        return Ok(StyleObject::new());
    }

    log::debug!("resolving {} pseudo-state entries", selectors.len());
    css(&selectors, theme)
}

// ---------------------------------------------------------------------------
// PseudoStates
// ---------------------------------------------------------------------------

/// Typed pseudo-state overrides: one optional nested bag per [`PseudoState`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PseudoStates {
    pub hover: Option<StyleBag>,
    pub active: Option<StyleBag>,
    pub focus: Option<StyleBag>,
    pub focus_visible: Option<StyleBag>,
    pub focus_within: Option<StyleBag>,
    pub disabled: Option<StyleBag>,
    pub visited: Option<StyleBag>,
    pub checked: Option<StyleBag>,
    pub invalid: Option<StyleBag>,
    pub selected: Option<StyleBag>,
    pub expanded: Option<StyleBag>,
    pub read_only: Option<StyleBag>,
    pub pressed: Option<StyleBag>,
    pub grabbed: Option<StyleBag>,
    pub mixed: Option<StyleBag>,
    pub first: Option<StyleBag>,
    pub last: Option<StyleBag>,
    pub not_first: Option<StyleBag>,
    pub not_last: Option<StyleBag>,
    pub odd: Option<StyleBag>,
    pub even: Option<StyleBag>,
    pub before: Option<StyleBag>,
    pub after: Option<StyleBag>,
    pub placeholder: Option<StyleBag>,
    pub selection: Option<StyleBag>,
}

impl PseudoStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style for one state (builder pattern).
    pub fn with(mut self, state: PseudoState, style: StyleBag) -> Self {
        *self.slot_mut(state) = Some(style);
        self
    }

    pub fn get(&self, state: PseudoState) -> Option<&StyleBag> {
        match state {
            PseudoState::Hover => self.hover.as_ref(),
            PseudoState::Active => self.active.as_ref(),
            PseudoState::Focus => self.focus.as_ref(),
            PseudoState::FocusVisible => self.focus_visible.as_ref(),
            PseudoState::FocusWithin => self.focus_within.as_ref(),
            PseudoState::Disabled => self.disabled.as_ref(),
            PseudoState::Visited => self.visited.as_ref(),
            PseudoState::Checked => self.checked.as_ref(),
            PseudoState::Invalid => self.invalid.as_ref(),
            PseudoState::Selected => self.selected.as_ref(),
            PseudoState::Expanded => self.expanded.as_ref(),
            PseudoState::ReadOnly => self.read_only.as_ref(),
            PseudoState::Pressed => self.pressed.as_ref(),
            PseudoState::Grabbed => self.grabbed.as_ref(),
            PseudoState::Mixed => self.mixed.as_ref(),
            PseudoState::First => self.first.as_ref(),
            PseudoState::Last => self.last.as_ref(),
            PseudoState::NotFirst => self.not_first.as_ref(),
            PseudoState::NotLast => self.not_last.as_ref(),
            PseudoState::Odd => self.odd.as_ref(),
            PseudoState::Even => self.even.as_ref(),
            PseudoState::Before => self.before.as_ref(),
            PseudoState::After => self.after.as_ref(),
            PseudoState::Placeholder => self.placeholder.as_ref(),
            PseudoState::Selection => self.selection.as_ref(),
        }
    }

    fn slot_mut(&mut self, state: PseudoState) -> &mut Option<StyleBag> {
        match state {
            PseudoState::Hover => &mut self.hover,
            PseudoState::Active => &mut self.active,
            PseudoState::Focus => &mut self.focus,
            PseudoState::FocusVisible => &mut self.focus_visible,
            PseudoState::FocusWithin => &mut self.focus_within,
            PseudoState::Disabled => &mut self.disabled,
            PseudoState::Visited => &mut self.visited,
            PseudoState::Checked => &mut self.checked,
            PseudoState::Invalid => &mut self.invalid,
            PseudoState::Selected => &mut self.selected,
            PseudoState::Expanded => &mut self.expanded,
            PseudoState::ReadOnly => &mut self.read_only,
            PseudoState::Pressed => &mut self.pressed,
            PseudoState::Grabbed => &mut self.grabbed,
            PseudoState::Mixed => &mut self.mixed,
            PseudoState::First => &mut self.first,
            PseudoState::Last => &mut self.last,
            PseudoState::NotFirst => &mut self.not_first,
            PseudoState::NotLast => &mut self.not_last,
            PseudoState::Odd => &mut self.odd,
            PseudoState::Even => &mut self.even,
            PseudoState::Before => &mut self.before,
            PseudoState::After => &mut self.after,
            PseudoState::Placeholder => &mut self.placeholder,
            PseudoState::Selection => &mut self.selection,
        }
    }

    /// Iterate the states that have a style, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (PseudoState, &StyleBag)> {
        PseudoState::ALL
            .into_iter()
            .filter_map(move |state| self.get(state).map(|bag| (state, bag)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Split a dynamic bag into its pseudo-state part and the remaining
    /// ordinary entries.
    pub fn from_bag(bag: &StyleBag) -> Result<(PseudoStates, StyleBag), StyleError> {
        let mut states = PseudoStates::new();
        let mut rest = StyleBag::new();
        for (key, value) in bag {
            if !is_pseudo_key(key) {
                rest.insert(key.clone(), value.clone());
                continue;
            }
            let state =
                PseudoState::from_prop_name(key).ok_or_else(|| StyleError::unknown_pseudo_state(key))?;
            match value {
                StyleValue::Nested(nested) => *states.slot_mut(state) = Some(nested.clone()),
                other => {
                    return Err(StyleError::ExpectedNestedStyle {
                        key: key.clone(),
                        found: other.kind().to_string(),
                    })
                }
            }
        }
        Ok((states, rest))
    }

    /// Back to a dynamic bag keyed by `_state` names.
    pub fn to_bag(&self) -> StyleBag {
        self.iter()
            .map(|(state, bag)| (state.prop_name().to_string(), StyleValue::Nested(bag.clone())))
            .collect()
    }

    /// Resolve into a selector-keyed style object.
    ///
    /// Unlike [`resolve_pseudo_styles`] this cannot meet an unknown state;
    /// only normalization of the nested bags can fail.
    pub fn resolve(&self, theme: &Theme) -> Result<StyleObject, StyleError> {
        let selectors: StyleBag = self
            .iter()
            .map(|(state, bag)| (state.selector().to_string(), StyleValue::Nested(bag.clone())))
            .collect();
        if selectors.is_empty() {
            return Ok(StyleObject::new());
        }
        css(&selectors, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::object::CssEntry;
    use pretty_assertions::assert_eq;

    fn color(c: &str) -> StyleBag {
        StyleBag::new().with("color", c)
    }

    fn block(pairs: &[(&str, &str)]) -> StyleObject {
        let mut o = StyleObject::new();
        for (k, v) in pairs {
            o.insert_value(*k, *v);
        }
        o
    }

    #[test]
    fn table_selectors() {
        assert_eq!(PseudoState::Hover.selector(), "&:hover");
        assert_eq!(PseudoState::Active.selector(), "&:active, &[data-active=true]");
        assert_eq!(PseudoState::Focus.selector(), "&:focus");
    }

    #[test]
    fn table_prop_names_round_trip() {
        for state in PseudoState::ALL {
            assert!(state.prop_name().starts_with(PSEUDO_MARKER));
            assert_eq!(PseudoState::from_prop_name(state.prop_name()), Some(state));
        }
        assert_eq!(PseudoState::ALL.len(), 25);
    }

    #[test]
    fn aria_and_sibling_states() {
        let cases = [
            ("_pressed", "&[aria-pressed=true]"),
            ("_grabbed", "&[aria-grabbed=true]"),
            ("_mixed", "&:indeterminate, &[aria-checked=mixed]"),
            ("_notFirst", "&:not(:first-of-type)"),
            ("_notLast", "&:not(:last-of-type)"),
        ];
        for (prop, selector) in cases {
            let state = PseudoState::from_prop_name(prop).unwrap();
            assert_eq!(state.selector(), selector);
        }

        let props = StyleBag::new().with("_notLast", StyleBag::new().with("mb", 2));
        let out = resolve_pseudo_styles(&props, &Theme::base()).unwrap();
        assert_eq!(
            out.block("&:not(:last-of-type)"),
            Some(&block(&[("margin-bottom", "8px")]))
        );
    }

    #[test]
    fn table_selectors_are_unique() {
        let mut selectors: Vec<&str> = PseudoState::ALL.iter().map(|s| s.selector()).collect();
        selectors.sort_unstable();
        selectors.dedup();
        assert_eq!(selectors.len(), PseudoState::ALL.len());
    }

    #[test]
    fn from_prop_name_unknown() {
        assert_eq!(PseudoState::from_prop_name("_unknownState"), None);
        assert_eq!(PseudoState::from_prop_name("hover"), None);
    }

    #[test]
    fn no_pseudo_keys_is_empty() {
        let props = StyleBag::new().with("fontSize", "14px").with("color", "red");
        let out = resolve_pseudo_styles(&props, &Theme::empty()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn empty_bag_is_empty() {
        let out = resolve_pseudo_styles(&StyleBag::new(), &Theme::base()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn single_hover() {
        let props = StyleBag::new().with("_hover", color("red"));
        let out = resolve_pseudo_styles(&props, &Theme::empty()).unwrap();

        let mut expected = StyleObject::new();
        expected.insert("&:hover", CssEntry::Block(block(&[("color", "red")])));
        assert_eq!(out, expected);
    }

    #[test]
    fn hover_and_active_scenario() {
        let props = StyleBag::new()
            .with("_hover", color("blue"))
            .with("_active", color("red"))
            .with("fontSize", "14px");
        let out = resolve_pseudo_styles(&props, &Theme::base()).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out.block("&:hover"), Some(&block(&[("color", "blue")])));
        assert_eq!(
            out.block("&:active, &[data-active=true]"),
            Some(&block(&[("color", "red")]))
        );
        assert!(out.get("fontSize").is_none());
        assert!(out.get("font-size").is_none());
    }

    #[test]
    fn nested_values_are_normalized() {
        let props = StyleBag::new().with(
            "_focus",
            StyleBag::new().with("bg", "blue.500").with("px", 2),
        );
        let out = resolve_pseudo_styles(&props, &Theme::base()).unwrap();
        assert_eq!(
            out.block("&:focus"),
            Some(&block(&[
                ("background", "#4299e1"),
                ("padding-left", "8px"),
                ("padding-right", "8px"),
            ]))
        );
    }

    #[test]
    fn unknown_state_is_rejected() {
        let props = StyleBag::new().with("_unknownState", color("green"));
        let err = resolve_pseudo_styles(&props, &Theme::empty()).unwrap_err();
        match &err {
            StyleError::UnknownPseudoState { key, .. } => assert_eq!(key, "_unknownState"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!err.to_string().contains("undefined"));
    }

    #[test]
    fn unknown_state_rejected_even_with_known_ones() {
        let props = StyleBag::new()
            .with("_hover", color("blue"))
            .with("_wiggle", color("green"));
        assert!(matches!(
            resolve_pseudo_styles(&props, &Theme::empty()),
            Err(StyleError::UnknownPseudoState { .. })
        ));
    }

    #[test]
    fn non_nested_value_names_the_marker() {
        let props = StyleBag::new().with("_hover", "red");
        let err = resolve_pseudo_styles(&props, &Theme::empty()).unwrap_err();
        assert_eq!(
            err,
            StyleError::ExpectedNestedStyle {
                key: "_hover".into(),
                found: "string".into(),
            }
        );
    }

    #[test]
    fn typed_states_resolve_like_dynamic_bag() {
        let typed = PseudoStates::new()
            .with(PseudoState::Hover, color("blue"))
            .with(PseudoState::Active, color("red"));
        let dynamic = StyleBag::new()
            .with("_hover", color("blue"))
            .with("_active", color("red"));

        let theme = Theme::base();
        assert_eq!(
            typed.resolve(&theme).unwrap(),
            resolve_pseudo_styles(&dynamic, &theme).unwrap()
        );
    }

    #[test]
    fn typed_states_empty() {
        let states = PseudoStates::new();
        assert!(states.is_empty());
        assert!(states.resolve(&Theme::base()).unwrap().is_empty());
    }

    #[test]
    fn from_bag_splits_pseudo_and_rest() {
        let bag = StyleBag::new()
            .with("_hover", color("blue"))
            .with("_focusVisible", color("black"))
            .with("fontSize", "14px");
        let (states, rest) = PseudoStates::from_bag(&bag).unwrap();

        assert_eq!(states.hover, Some(color("blue")));
        assert_eq!(states.focus_visible, Some(color("black")));
        assert_eq!(rest, StyleBag::new().with("fontSize", "14px"));
        assert_eq!(states.to_bag().len(), 2);
    }

    #[test]
    fn from_bag_rejects_unknown_and_scalar() {
        let unknown = StyleBag::new().with("_nope", color("blue"));
        assert!(matches!(
            PseudoStates::from_bag(&unknown),
            Err(StyleError::UnknownPseudoState { .. })
        ));

        let scalar = StyleBag::new().with("_hover", 3);
        assert!(matches!(
            PseudoStates::from_bag(&scalar),
            Err(StyleError::ExpectedNestedStyle { .. })
        ));
    }

    #[test]
    fn iter_follows_table_order() {
        let states = PseudoStates::new()
            .with(PseudoState::Selection, color("a"))
            .with(PseudoState::Hover, color("b"));
        let order: Vec<PseudoState> = states.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![PseudoState::Hover, PseudoState::Selection]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const ORDINARY_KEYS: &[&str] = &["color", "fontSize", "m", "px", "display", "opacity"];

    fn state_strategy() -> impl Strategy<Value = PseudoState> {
        (0..PseudoState::ALL.len()).prop_map(|i| PseudoState::ALL[i])
    }

    fn entries_strategy() -> impl Strategy<Value = Vec<(String, StyleValue)>> {
        let ordinary = (0..ORDINARY_KEYS.len(), "[a-z]{1,8}")
            .prop_map(|(i, v)| (ORDINARY_KEYS[i].to_string(), StyleValue::from(v)));
        let pseudo = (state_strategy(), "[a-z]{1,8}").prop_map(|(state, v)| {
            (
                state.prop_name().to_string(),
                StyleValue::Nested(StyleBag::new().with("color", v)),
            )
        });
        prop::collection::vec(prop_oneof![ordinary, pseudo], 0..8)
    }

    fn bag_from(entries: &[(String, StyleValue)]) -> StyleBag {
        let mut bag = StyleBag::new();
        for (k, v) in entries {
            bag.insert(k.clone(), v.clone());
        }
        bag
    }

    proptest! {
        #[test]
        fn resolving_twice_is_structurally_equal(entries in entries_strategy()) {
            let bag = bag_from(&entries);
            let theme = Theme::empty();
            let first = resolve_pseudo_styles(&bag, &theme).unwrap();
            let second = resolve_pseudo_styles(&bag, &theme).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn insertion_order_does_not_matter(entries in entries_strategy()) {
            // Dedupe keys first so both orders keep the same value per key.
            let mut unique: Vec<(String, StyleValue)> = Vec::new();
            for (k, v) in entries {
                if !unique.iter().any(|(u, _)| *u == k) {
                    unique.push((k, v));
                }
            }
            let forward = bag_from(&unique);
            let reversed: Vec<_> = unique.iter().rev().cloned().collect();
            let backward = bag_from(&reversed);

            let theme = Theme::empty();
            prop_assert_eq!(
                resolve_pseudo_styles(&forward, &theme).unwrap(),
                resolve_pseudo_styles(&backward, &theme).unwrap()
            );
        }

        #[test]
        fn one_entry_per_pseudo_key(entries in entries_strategy()) {
            let bag = bag_from(&entries);
            let out = resolve_pseudo_styles(&bag, &Theme::empty()).unwrap();
            let pseudo_count = bag.keys().filter(|k| is_pseudo_key(k)).count();
            prop_assert_eq!(out.len(), pseudo_count);

            for (key, value) in bag.iter().filter(|(k, _)| is_pseudo_key(k)) {
                let state = PseudoState::from_prop_name(key).unwrap();
                let expected = value.as_nested().and_then(|b| b.get("color")).map(|v| v.to_string());
                let actual = out
                    .block(state.selector())
                    .and_then(|b| b.value("color"))
                    .map(str::to_string);
                prop_assert_eq!(actual, expected);
            }
        }

        #[test]
        fn ordinary_keys_resolve_to_empty(
            keys in prop::collection::vec(0..ORDINARY_KEYS.len(), 0..6),
        ) {
            let bag: StyleBag = keys
                .into_iter()
                .map(|i| (ORDINARY_KEYS[i].to_string(), StyleValue::from("x")))
                .collect();
            prop_assert!(resolve_pseudo_styles(&bag, &Theme::base()).unwrap().is_empty());
        }
    }
}
