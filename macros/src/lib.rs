//! Proc macros for stylekit: `style!` property-bag literals.
//!
//! This crate is not meant to be used directly; enable the `macros` feature on `stylekit`.

use proc_macro::TokenStream;

mod style_macro;

/// Build a `stylekit::StyleBag` from CSS-like declarations.
///
/// # Syntax
///
/// - `name: value;`: kebab-case names become camelCase (`font-size` is `fontSize`)
/// - values: string literals, numbers, unit literals (`14px`, `1.5rem`, `50%`),
///   bare words (`center`, `space-between`), `[a, _, c]` responsive lists
///   where `_` skips a breakpoint, and `(expr)` for any `Into<StyleValue>`
/// - `_hover { ... }`: pseudo-state blocks; unknown markers fail to compile
/// - `"& > svg" { ... }`: selector blocks
///
/// `em` units must be quoted (`"1.5em"`) since `1e...` lexes as an exponent.
///
/// # Example
///
/// ```ignore
/// let bag = style! {
///     color: "gray.700";
///     font-size: ["sm", _, "lg"];
///     _hover { color: "blue.500"; }
///     _disabled { opacity: 0.4; }
/// };
/// ```
#[proc_macro]
pub fn style(input: TokenStream) -> TokenStream {
    style_macro::style_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
