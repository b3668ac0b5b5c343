//! Flatten a [`StyleObject`] into CSS rules and stylesheet text.
//!
//! Nested selector keys are resolved against the parent selector: every `&`
//! is replaced by the parent, and a key without `&` becomes a descendant
//! selector. Both sides may be comma-separated lists, which expand to their
//! cross product. `@` keys wrap the rules beneath them.

use std::fmt::Write;

use crate::style::object::{CssEntry, StyleObject};

/// One flattened CSS rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    /// Enclosing at-rules, outermost first (e.g. `@media screen and (min-width: 40em)`).
    pub at_rules: Vec<String>,
    pub selector: String,
    /// `(property, value)` pairs in declaration order.
    pub declarations: Vec<(String, String)>,
}

/// Flatten `object` into rules rooted at `selector`.
///
/// A rule's own declarations come before the rules of its nested blocks.
/// Blocks with no declarations produce no rule.
pub fn flatten(object: &StyleObject, selector: &str) -> Vec<CssRule> {
    let mut rules = Vec::new();
    walk(object, selector, &[], &mut rules);
    rules
}

fn walk(object: &StyleObject, selector: &str, at_rules: &[String], rules: &mut Vec<CssRule>) {
    let declarations: Vec<(String, String)> = object
        .iter()
        .filter_map(|(key, entry)| match entry {
            CssEntry::Value(v) => Some((key.to_string(), v.clone())),
            CssEntry::Block(_) => None,
        })
        .collect();
    if !declarations.is_empty() {
        rules.push(CssRule {
            at_rules: at_rules.to_vec(),
            selector: selector.to_string(),
            declarations,
        });
    }

    for (key, entry) in object.iter() {
        let CssEntry::Block(block) = entry else { continue };
        if key.starts_with('@') {
            let mut nested_at = at_rules.to_vec();
            nested_at.push(key.to_string());
            walk(block, selector, &nested_at, rules);
        } else {
            walk(block, &nest_selector(selector, key), at_rules, rules);
        }
    }
}

/// Combine a parent selector with a nested key.
pub fn nest_selector(parent: &str, child: &str) -> String {
    let parents = split_selector_list(parent);
    let children = split_selector_list(child);
    let mut combined = Vec::with_capacity(parents.len() * children.len());
    for p in &parents {
        for c in &children {
            if c.contains('&') {
                combined.push(c.replace('&', p));
            } else {
                combined.push(format!("{p} {c}"));
            }
        }
    }
    combined.join(", ")
}

/// Split a selector list on top-level commas (ignoring commas inside
/// brackets, parentheses and quotes).
pub fn split_selector_list(selector: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut current = String::new();

    for ch in selector.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    parts.push(current.trim().to_string());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Render rules as stylesheet text, two-space indented, one declaration per line.
pub fn rules_to_css(rules: &[CssRule]) -> String {
    let mut out = String::new();
    for rule in rules {
        let mut indent = String::new();
        for at in &rule.at_rules {
            let _ = writeln!(out, "{indent}{at} {{");
            indent.push_str("  ");
        }
        let _ = writeln!(out, "{indent}{} {{", rule.selector);
        for (property, value) in &rule.declarations {
            let _ = writeln!(out, "{indent}  {property}: {value};");
        }
        let _ = writeln!(out, "{indent}}}");
        for _ in &rule.at_rules {
            indent.truncate(indent.len().saturating_sub(2));
            let _ = writeln!(out, "{indent}}}");
        }
    }
    out
}

/// Flatten and render in one step.
pub fn to_css(object: &StyleObject, selector: &str) -> String {
    rules_to_css(&flatten(object, selector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn obj(pairs: &[(&str, &str)]) -> StyleObject {
        let mut o = StyleObject::new();
        for (k, v) in pairs {
            o.insert_value(*k, *v);
        }
        o
    }

    #[test]
    fn nest_ampersand() {
        assert_eq!(nest_selector(".btn", "&:hover"), ".btn:hover");
        assert_eq!(
            nest_selector(".btn", "&:active, &[data-active=true]"),
            ".btn:active, .btn[data-active=true]"
        );
    }

    #[test]
    fn nest_descendant() {
        assert_eq!(nest_selector(".card", "p"), ".card p");
    }

    #[test]
    fn nest_cross_product() {
        assert_eq!(
            nest_selector(".a, .b", "&:hover, &:focus"),
            ".a:hover, .a:focus, .b:hover, .b:focus"
        );
    }

    #[test]
    fn split_ignores_nested_commas() {
        assert_eq!(
            split_selector_list(r#"&[data-x="a,b"], &:is(.a, .b)"#),
            vec![r#"&[data-x="a,b"]"#.to_string(), "&:is(.a, .b)".to_string()]
        );
    }

    #[test]
    fn flatten_orders_own_declarations_first() {
        let mut o = StyleObject::new();
        o.merge_block("&:hover", obj(&[("color", "blue")]));
        o.insert_value("color", "red");
        let rules = flatten(&o, ".x");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].selector, ".x");
        assert_eq!(rules[1].selector, ".x:hover");
    }

    #[test]
    fn flatten_skips_empty_blocks() {
        let mut o = StyleObject::new();
        o.merge_block("&:hover", StyleObject::new());
        assert!(flatten(&o, ".x").is_empty());
    }

    #[test]
    fn media_wraps_rules() {
        let mut hover = obj(&[("color", "blue")]);
        hover.merge_block("@media print", obj(&[("color", "black")]));
        let mut o = obj(&[("color", "red")]);
        o.merge_block("&:hover", hover);

        let rules = flatten(&o, ".x");
        assert_eq!(rules[2].at_rules, vec!["@media print".to_string()]);
        assert_eq!(rules[2].selector, ".x:hover");

        let css = to_css(&o, ".x");
        assert_eq!(
            css,
            ".x {\n  color: red;\n}\n.x:hover {\n  color: blue;\n}\n@media print {\n  .x:hover {\n    color: black;\n  }\n}\n"
        );
    }
}
