//! `style!`: build a `StyleBag` from declarations, checking pseudo-state
//! markers at compile time.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, bracketed, parenthesized, token, Error, Expr, Ident, LitFloat, LitInt, LitStr, Result, Token};

/// Pseudo-state markers accepted as block keys. Kept in step with
/// `stylekit::PseudoState::ALL`.
const PSEUDO_MARKERS: &[&str] = &[
    "_hover",
    "_active",
    "_focus",
    "_focusVisible",
    "_focusWithin",
    "_disabled",
    "_visited",
    "_checked",
    "_invalid",
    "_selected",
    "_expanded",
    "_readOnly",
    "_pressed",
    "_grabbed",
    "_mixed",
    "_first",
    "_last",
    "_notFirst",
    "_notLast",
    "_odd",
    "_even",
    "_before",
    "_after",
    "_placeholder",
    "_selection",
];

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub(crate) enum StyleValue {
    Str(String),
    Number(f64),
    /// `(expr)`, converted with `StyleValue::from` at runtime.
    Expr(Box<Expr>),
    /// `[a, _, b]`; `_` skips a breakpoint.
    Responsive(Vec<Option<StyleValue>>),
    Nested(Vec<StyleEntry>),
}

#[derive(Debug, Clone)]
pub(crate) struct StyleEntry {
    /// Bag key: camelCase property, pseudo marker, or selector.
    pub key: String,
    pub span: Span,
    pub value: StyleValue,
}

#[derive(Debug)]
pub(crate) struct StyleInput {
    entries: Vec<StyleEntry>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for StyleInput {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(StyleInput {
            entries: parse_entries(input)?,
        })
    }
}

fn parse_entries(input: ParseStream) -> Result<Vec<StyleEntry>> {
    let mut entries: Vec<StyleEntry> = Vec::new();
    while !input.is_empty() {
        let entry = parse_entry(input)?;
        if entries.iter().any(|e| e.key == entry.key) {
            return Err(Error::new(entry.span, format!("duplicate key `{}`", entry.key)));
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// `key: value;`, `key { ... }` or `"selector" { ... }`.
fn parse_entry(input: ParseStream) -> Result<StyleEntry> {
    let (key, span) = if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        (lit.value(), lit.span())
    } else {
        parse_key(input)?
    };

    let value = if input.peek(token::Brace) {
        let value = parse_block(input)?;
        if input.peek(Token![;]) {
            input.parse::<Token![;]>()?;
        }
        value
    } else {
        input.parse::<Token![:]>()?;
        let value = if input.peek(token::Brace) {
            parse_block(input)?
        } else {
            parse_declaration_value(input, &key, span)?
        };
        if !input.is_empty() {
            input.parse::<Token![;]>()?;
        }
        value
    };

    validate_entry(&key, span, &value)?;
    Ok(StyleEntry { key, span, value })
}

/// Parse a kebab- or camel-case property name; kebab-case becomes camelCase.
fn parse_key(input: ParseStream) -> Result<(String, Span)> {
    let first: Ident = input.parse()?;
    let span = first.span();
    let mut key = first.to_string();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let next: Ident = input.parse()?;
        let next = next.to_string();
        let mut chars = next.chars();
        if let Some(c) = chars.next() {
            key.extend(c.to_uppercase());
            key.push_str(chars.as_str());
        }
    }
    Ok((key, span))
}

fn parse_block(input: ParseStream) -> Result<StyleValue> {
    let content;
    braced!(content in input);
    Ok(StyleValue::Nested(parse_entries(&content)?))
}

/// One or more values up to `;`. Several plain values join with spaces
/// (`border: 1px solid red;`).
fn parse_declaration_value(input: ParseStream, key: &str, span: Span) -> Result<StyleValue> {
    let mut values = Vec::new();
    while !input.is_empty() && !input.peek(Token![;]) {
        values.push(parse_value(input)?);
    }
    match values.len() {
        0 => Err(Error::new(span, format!("property `{key}` has no value"))),
        1 => Ok(values.remove(0)),
        _ => {
            let mut words = Vec::with_capacity(values.len());
            for value in &values {
                match value {
                    StyleValue::Str(s) => words.push(s.clone()),
                    StyleValue::Number(n) => words.push(n.to_string()),
                    _ => {
                        return Err(Error::new(
                            span,
                            format!("property `{key}`: lists and expressions must stand alone"),
                        ))
                    }
                }
            }
            Ok(StyleValue::Str(words.join(" ")))
        }
    }
}

pub(crate) fn parse_value(input: ParseStream) -> Result<StyleValue> {
    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        return Ok(StyleValue::Str(lit.value()));
    }

    if input.peek(LitInt) || input.peek(LitFloat) {
        return parse_number(input, false);
    }

    if input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        if input.peek(LitInt) || input.peek(LitFloat) {
            return parse_number(input, true);
        }
        if input.peek(Ident) {
            // Negative theme token, e.g. `-sm`.
            let ident: Ident = input.parse()?;
            return Ok(StyleValue::Str(format!("-{ident}")));
        }
        return Err(input.error("expected a number after `-`"));
    }

    if input.peek(token::Bracket) {
        let content;
        bracketed!(content in input);
        let mut entries = Vec::new();
        while !content.is_empty() {
            if content.peek(Token![_]) {
                content.parse::<Token![_]>()?;
                entries.push(None);
            } else {
                let value = parse_value(&content)?;
                if matches!(value, StyleValue::Responsive(_) | StyleValue::Nested(_)) {
                    return Err(content.error("responsive lists cannot nest"));
                }
                entries.push(Some(value));
            }
            if !content.is_empty() {
                content.parse::<Token![,]>()?;
            }
        }
        return Ok(StyleValue::Responsive(entries));
    }

    if input.peek(token::Paren) {
        let content;
        parenthesized!(content in input);
        let expr: Expr = content.parse()?;
        return Ok(StyleValue::Expr(Box::new(expr)));
    }

    if input.peek(Ident) {
        let ident: Ident = input.parse()?;
        let mut word = ident.to_string();
        while input.peek(Token![-]) && input.peek2(Ident) {
            input.parse::<Token![-]>()?;
            let next: Ident = input.parse()?;
            word.push('-');
            word.push_str(&next.to_string());
        }
        return Ok(StyleValue::Str(word));
    }

    Err(input.error("unexpected token in style value"))
}

/// A numeric literal. A unit suffix (`14px`, `1.5rem`) or a trailing `%`
/// makes it a string.
fn parse_number(input: ParseStream, negative: bool) -> Result<StyleValue> {
    let sign = if negative { "-" } else { "" };
    let (digits, suffix) = if input.peek(LitInt) {
        let lit: LitInt = input.parse()?;
        (lit.base10_digits().to_string(), lit.suffix().to_string())
    } else {
        let lit: LitFloat = input.parse()?;
        (lit.base10_digits().to_string(), lit.suffix().to_string())
    };

    if !suffix.is_empty() {
        return Ok(StyleValue::Str(format!("{sign}{digits}{suffix}")));
    }
    if input.peek(Token![%]) {
        input.parse::<Token![%]>()?;
        return Ok(StyleValue::Str(format!("{sign}{digits}%")));
    }
    let n: f64 = digits
        .parse()
        .map_err(|_| input.error(format!("invalid number `{digits}`")))?;
    Ok(StyleValue::Number(if negative { -n } else { n }))
}

fn validate_entry(key: &str, span: Span, value: &StyleValue) -> Result<()> {
    if !key.starts_with('_') {
        return Ok(());
    }
    if !PSEUDO_MARKERS.contains(&key) {
        return Err(Error::new(
            span,
            format!(
                "unknown pseudo-state `{key}`; expected one of: {}",
                PSEUDO_MARKERS.join(", ")
            ),
        ));
    }
    if !matches!(value, StyleValue::Nested(_) | StyleValue::Expr(_)) {
        return Err(Error::new(
            span,
            format!("pseudo-state `{key}` expects a `{{ ... }}` block"),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

fn value_tokens(value: &StyleValue) -> TokenStream {
    match value {
        StyleValue::Str(s) => quote! { ::stylekit::StyleValue::Str(::std::string::String::from(#s)) },
        StyleValue::Number(n) => quote! { ::stylekit::StyleValue::Number(#n) },
        StyleValue::Expr(expr) => quote! { ::stylekit::StyleValue::from(#expr) },
        StyleValue::Responsive(entries) => {
            let items = entries.iter().map(|entry| match entry {
                Some(v) => {
                    let v = value_tokens(v);
                    quote! { ::std::option::Option::Some(#v) }
                }
                None => quote! { ::std::option::Option::None },
            });
            quote! { ::stylekit::StyleValue::Responsive(::std::vec![#(#items),*]) }
        }
        StyleValue::Nested(entries) => {
            let bag = bag_tokens(entries);
            quote! { ::stylekit::StyleValue::Nested(#bag) }
        }
    }
}

fn bag_tokens(entries: &[StyleEntry]) -> TokenStream {
    if entries.is_empty() {
        return quote! { ::stylekit::StyleBag::new() };
    }
    let inserts = entries.iter().map(|entry| {
        let key = &entry.key;
        let value = value_tokens(&entry.value);
        quote! { __bag.insert(#key, #value); }
    });
    quote! {
        {
            let mut __bag = ::stylekit::StyleBag::new();
            #(#inserts)*
            __bag
        }
    }
}

pub(crate) fn style_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: StyleInput = syn::parse2(input)?;
    Ok(bag_tokens(&parsed.entries))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse_style(tokens: TokenStream) -> Result<StyleInput> {
        syn::parse2(tokens)
    }

    fn gen(tokens: TokenStream) -> Result<TokenStream> {
        style_impl(tokens)
    }

    // -----------------------------------------------------------------------
    // Parsing tests
    // -----------------------------------------------------------------------

    #[test]
    fn parse_string_value() {
        let input = parse_style(quote! { color: "red"; }).unwrap();
        assert_eq!(input.entries.len(), 1);
        assert_eq!(input.entries[0].key, "color");
        match &input.entries[0].value {
            StyleValue::Str(s) => assert_eq!(s, "red"),
            other => panic!("expected string, got {other:?}"),
        }
    }

    #[test]
    fn parse_kebab_key_becomes_camel() {
        let input = parse_style(quote! { font-size: 14; border-top-left-radius: 2; }).unwrap();
        assert_eq!(input.entries[0].key, "fontSize");
        assert_eq!(input.entries[1].key, "borderTopLeftRadius");
    }

    #[test]
    fn parse_numbers() {
        let input = parse_style(quote! { mt: -2; opacity: 0.5; w: 50%; fontSize: 14px; }).unwrap();
        let values: Vec<_> = input.entries.iter().map(|e| e.value.clone()).collect();
        assert!(matches!(values[0], StyleValue::Number(n) if n == -2.0));
        assert!(matches!(values[1], StyleValue::Number(n) if n == 0.5));
        assert!(matches!(&values[2], StyleValue::Str(s) if s == "50%"));
        assert!(matches!(&values[3], StyleValue::Str(s) if s == "14px"));
    }

    #[test]
    fn parse_bare_words() {
        let input = parse_style(quote! { justify-content: space-between; border: 1px solid "red"; }).unwrap();
        assert!(matches!(&input.entries[0].value, StyleValue::Str(s) if s == "space-between"));
        assert!(matches!(&input.entries[1].value, StyleValue::Str(s) if s == "1px solid red"));
    }

    #[test]
    fn parse_responsive_with_gaps() {
        let input = parse_style(quote! { p: [1, _, 3]; }).unwrap();
        match &input.entries[0].value {
            StyleValue::Responsive(items) => {
                assert_eq!(items.len(), 3);
                assert!(items[1].is_none());
            }
            other => panic!("expected responsive, got {other:?}"),
        }
    }

    #[test]
    fn parse_pseudo_and_selector_blocks() {
        let input = parse_style(quote! {
            color: "gray.700";
            _hover { color: "blue.500"; }
            "& > svg" { size: 4; }
        })
        .unwrap();
        assert_eq!(input.entries.len(), 3);
        assert_eq!(input.entries[1].key, "_hover");
        assert_eq!(input.entries[2].key, "& > svg");
        assert!(matches!(&input.entries[1].value, StyleValue::Nested(e) if e.len() == 1));
    }

    #[test]
    fn parse_last_semicolon_optional() {
        let input = parse_style(quote! { color: "red"; mt: 1 }).unwrap();
        assert_eq!(input.entries.len(), 2);
    }

    #[test]
    fn parse_expression() {
        let input = parse_style(quote! { color: (brand.primary()); }).unwrap();
        assert!(matches!(input.entries[0].value, StyleValue::Expr(_)));
    }

    // -----------------------------------------------------------------------
    // Error tests
    // -----------------------------------------------------------------------

    #[test]
    fn unknown_pseudo_state_is_rejected() {
        let err = parse_style(quote! { _hovered { color: "red"; } }).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unknown pseudo-state `_hovered`"));
        assert!(msg.contains("_hover"));
        assert!(msg.contains("_focusVisible"));
    }

    #[test]
    fn nested_unknown_pseudo_state_is_rejected() {
        let err = parse_style(quote! { _hover { _pressed { color: "red"; } } }).unwrap_err();
        assert!(err.to_string().contains("`_pressed`"));
    }

    #[test]
    fn pseudo_state_needs_block() {
        let err = parse_style(quote! { _hover: "red"; }).unwrap_err();
        assert!(err.to_string().contains("expects a `{ ... }` block"));
    }

    #[test]
    fn empty_value_is_rejected() {
        let err = parse_style(quote! { color: ; }).unwrap_err();
        assert!(err.to_string().contains("has no value"));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let err = parse_style(quote! { color: "red"; color: "blue"; }).unwrap_err();
        assert!(err.to_string().contains("duplicate key `color`"));
    }

    #[test]
    fn nested_lists_are_rejected() {
        assert!(parse_style(quote! { p: [[1, 2]]; }).is_err());
    }

    #[test]
    fn marker_list_matches_count() {
        assert_eq!(PSEUDO_MARKERS.len(), 25);
    }

    // -----------------------------------------------------------------------
    // Codegen tests
    // -----------------------------------------------------------------------

    #[test]
    fn codegen_empty() {
        let out = gen(quote! {}).unwrap().to_string();
        assert_eq!(out, quote! { ::stylekit::StyleBag::new() }.to_string());
    }

    #[test]
    fn codegen_inserts_each_entry() {
        let out = gen(quote! { color: "red"; mt: 2; }).unwrap().to_string();
        assert!(out.contains("__bag . insert (\"color\""));
        assert!(out.contains("__bag . insert (\"mt\""));
        assert!(out.contains("StyleValue :: Number (2f64)"));
    }

    #[test]
    fn codegen_nested_block() {
        let out = gen(quote! { _hover { color: "blue"; } }).unwrap().to_string();
        assert!(out.contains("\"_hover\""));
        assert!(out.contains("StyleValue :: Nested"));
    }

    #[test]
    fn codegen_responsive() {
        let out = gen(quote! { p: [1, _]; }).unwrap().to_string();
        assert!(out.contains("StyleValue :: Responsive"));
        assert!(out.contains("Option :: None"));
    }

    #[test]
    fn codegen_expression_uses_from() {
        let out = gen(quote! { color: (accent); }).unwrap().to_string();
        assert!(out.contains("StyleValue :: from (accent)"));
    }
}
