//! Recursive descent parser for style blocks.
//!
//! Parses text like
//!
//! ```text
//! font-size: 14px;
//! color: gray.700;
//! m: [1, null, 3];
//! _hover { color: blue.500; }
//! "& > svg" { size: 4; }
//! ```
//!
//! into a [`StyleBag`]. Uses the logos-based tokenizer from
//! [`crate::style::tokenizer`].

use logos::Logos;

use crate::style::tokenizer::Token;
use crate::style::value::{StyleBag, StyleValue};

/// Errors from style-block parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// `position` is the byte offset of the offending token in the input.
    #[error("unexpected token at byte {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// A positioned token with byte-level span information.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    /// Byte offset where this token starts in the source.
    byte_start: usize,
    /// Byte offset where this token ends in the source.
    byte_end: usize,
}

/// Blank out block comments (`/* ... */`) with spaces of the same byte
/// length, so token offsets still index the original input.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => {
                let len = 2 + end + 2;
                result.extend(std::iter::repeat(' ').take(len));
                rest = &rest[start + len..];
            }
            // Unterminated comment: drop the rest of the input.
            None => rest = "",
        }
    }
    result.push_str(rest);
    result
}

/// Tokenize input using logos with span information preserved.
fn tokenize_with_spans(input: &str) -> Vec<PToken> {
    let lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    for (result, span) in lexer.spanned() {
        if let Ok(token) = result {
            tokens.push(PToken {
                text: input[span.clone()].to_string(),
                token,
                byte_start: span.start,
                byte_end: span.end,
            });
        }
    }

    tokens
}

/// Parse a style block into a [`StyleBag`].
pub fn parse_style_block(input: &str) -> Result<StyleBag, ParseError> {
    let cleaned = strip_comments(input);
    let tokens = tokenize_with_spans(&cleaned);

    let mut parser = Parser {
        source: &cleaned,
        tokens,
        cursor: 0,
    };
    let bag = parser.parse_entries()?;

    match parser.peek() {
        None => Ok(bag),
        Some(tok) => Err(ParseError::UnexpectedToken {
            position: tok.byte_start,
            message: format!("unmatched {:?} '{}'", tok.token, tok.text),
        }),
    }
}

/// Convert a kebab-case property name to the camelCase bag key.
///
/// Custom properties (`--brand`) and vendor-prefixed names (`-webkit-...`)
/// are kept as written.
fn property_key(name: &str) -> String {
    if name.starts_with('-') || !name.contains('-') {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '-' {
            upper = true;
        } else if upper {
            out.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn unquote(text: &str) -> String {
    text[1..text.len() - 1].to_string()
}

/// Recursive descent parser state.
struct Parser<'a> {
    source: &'a str,
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn peek_is(&self, token: &Token) -> bool {
        self.peek().is_some_and(|t| &t.token == token)
    }

    fn advance(&mut self) -> Option<PToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn expect(&mut self, expected: &Token) -> Result<PToken, ParseError> {
        match self.advance() {
            Some(tok) if &tok.token == expected => Ok(tok),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.byte_start,
                message: format!("expected {:?}, got {:?} '{}'", expected, tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {:?}", expected))),
        }
    }

    /// Parse entries until `}` or end of input.
    fn parse_entries(&mut self) -> Result<StyleBag, ParseError> {
        let mut bag = StyleBag::new();
        while let Some(tok) = self.peek() {
            if tok.token == Token::BraceClose {
                break;
            }
            if tok.token == Token::Semicolon {
                self.advance();
                continue;
            }
            let (key, value) = self.parse_entry()?;
            bag.insert(key, value);
        }
        Ok(bag)
    }

    /// Parse one entry: `key: values;` or `key { entries }`.
    fn parse_entry(&mut self) -> Result<(String, StyleValue), ParseError> {
        let key_tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected property name".into()))?;

        let key = match key_tok.token {
            Token::Ident => key_tok.text.clone(),
            Token::StringLiteral | Token::StringLiteralSingle => unquote(&key_tok.text),
            other => {
                return Err(ParseError::UnexpectedToken {
                    position: key_tok.byte_start,
                    message: format!("expected property name, got {:?} '{}'", other, key_tok.text),
                });
            }
        };

        if self.peek_is(&Token::BraceOpen) {
            self.advance();
            let nested = self.parse_entries()?;
            self.expect(&Token::BraceClose)?;
            return Ok((key, StyleValue::Nested(nested)));
        }

        self.expect(&Token::Colon)?;
        let value = self.parse_value(&key)?;
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        let key = if key_tok.token == Token::Ident {
            property_key(&key)
        } else {
            key
        };
        Ok((key, value))
    }

    /// Parse a declaration value up to `;`, `}` or end of input.
    fn parse_value(&mut self, property: &str) -> Result<StyleValue, ParseError> {
        if self.peek_is(&Token::BracketOpen) {
            return self.parse_responsive(property);
        }

        let start = self.cursor;
        while let Some(tok) = self.peek() {
            if matches!(tok.token, Token::Semicolon | Token::BraceClose | Token::BraceOpen) {
                break;
            }
            self.advance();
        }
        let taken = &self.tokens[start..self.cursor];

        match taken {
            [] => Err(match self.peek() {
                Some(tok) => ParseError::UnexpectedToken {
                    position: tok.byte_start,
                    message: format!("property `{property}` has no value"),
                },
                None => ParseError::UnexpectedEof(format!("value for `{property}`")),
            }),
            [single] => Ok(scalar_value(single)),
            [first, .., last] => Ok(StyleValue::Str(
                self.source[first.byte_start..last.byte_end].to_string(),
            )),
        }
    }

    /// Parse `[v, v, null, v]`.
    fn parse_responsive(&mut self, property: &str) -> Result<StyleValue, ParseError> {
        self.expect(&Token::BracketOpen)?;
        let mut entries = Vec::new();

        loop {
            let tok = self.advance().ok_or_else(|| {
                ParseError::UnexpectedEof(format!("unterminated list for `{property}`"))
            })?;
            match tok.token {
                Token::BracketClose if entries.is_empty() => break,
                Token::Ident if tok.text == "null" => entries.push(None),
                Token::Ident
                | Token::Number
                | Token::Dimension
                | Token::HexColor
                | Token::StringLiteral
                | Token::StringLiteralSingle => entries.push(Some(scalar_value(&tok))),
                other => {
                    return Err(ParseError::UnexpectedToken {
                        position: tok.byte_start,
                        message: format!("expected list item, got {:?} '{}'", other, tok.text),
                    });
                }
            }

            let sep = self.advance().ok_or_else(|| {
                ParseError::UnexpectedEof(format!("unterminated list for `{property}`"))
            })?;
            match sep.token {
                Token::Comma => continue,
                Token::BracketClose => break,
                other => {
                    return Err(ParseError::UnexpectedToken {
                        position: sep.byte_start,
                        message: format!("expected ',' or ']', got {:?} '{}'", other, sep.text),
                    });
                }
            }
        }

        Ok(StyleValue::Responsive(entries))
    }
}

/// Turn a single value token into a [`StyleValue`].
fn scalar_value(tok: &PToken) -> StyleValue {
    match tok.token {
        Token::Number => tok
            .text
            .parse::<f64>()
            .map(StyleValue::Number)
            .unwrap_or_else(|_| StyleValue::Str(tok.text.clone())),
        Token::StringLiteral | Token::StringLiteralSingle => StyleValue::Str(unquote(&tok.text)),
        _ => StyleValue::Str(tok.text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> StyleBag {
        parse_style_block(input).unwrap()
    }

    #[test]
    fn parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("  /* nothing */ ").is_empty());
    }

    #[test]
    fn parse_simple_declarations() {
        let bag = parse("color: red; font-size: 14px; m: 2;");
        assert_eq!(
            bag,
            StyleBag::new()
                .with("color", "red")
                .with("fontSize", "14px")
                .with("m", 2)
        );
    }

    #[test]
    fn trailing_semicolon_optional() {
        assert_eq!(parse("color: red"), StyleBag::new().with("color", "red"));
        assert_eq!(
            parse("_hover { color: red }"),
            StyleBag::new().with("_hover", StyleBag::new().with("color", "red"))
        );
    }

    #[test]
    fn multi_token_values_keep_source_text() {
        let bag = parse("font-family: Menlo, monospace; border: 1px solid gray.300; box-shadow: 0 0 0 3px rgba(66, 153, 225, 0.6);");
        assert_eq!(bag.get("fontFamily"), Some(&StyleValue::from("Menlo, monospace")));
        assert_eq!(bag.get("border"), Some(&StyleValue::from("1px solid gray.300")));
        assert_eq!(
            bag.get("boxShadow"),
            Some(&StyleValue::from("0 0 0 3px rgba(66, 153, 225, 0.6)"))
        );
    }

    #[test]
    fn hex_and_quoted_values() {
        let bag = parse(r##"color: #ff0066; content: "hi";"##);
        assert_eq!(bag.get("color"), Some(&StyleValue::from("#ff0066")));
        assert_eq!(bag.get("content"), Some(&StyleValue::from("hi")));
    }

    #[test]
    fn negative_and_float_numbers() {
        let bag = parse("mt: -2; line-height: 1.5;");
        assert_eq!(bag.get("mt"), Some(&StyleValue::Number(-2.0)));
        assert_eq!(bag.get("lineHeight"), Some(&StyleValue::Number(1.5)));
    }

    #[test]
    fn responsive_list() {
        let bag = parse("p: [1, null, 3]; font-size: [sm, lg];");
        assert_eq!(
            bag.get("p"),
            Some(&StyleValue::Responsive(vec![
                Some(StyleValue::Number(1.0)),
                None,
                Some(StyleValue::Number(3.0)),
            ]))
        );
        assert_eq!(bag.get("fontSize"), Some(&StyleValue::from(vec!["sm", "lg"])));
    }

    #[test]
    fn empty_list() {
        assert_eq!(parse("p: [];").get("p"), Some(&StyleValue::Responsive(vec![])));
    }

    #[test]
    fn nested_pseudo_and_selector_blocks() {
        let bag = parse(
            r#"
            color: gray.700;
            _hover { color: blue.500; _active { color: blue.700; } }
            "& > svg" { size: 4; }
            "#,
        );
        let hover = bag.get("_hover").and_then(StyleValue::as_nested).unwrap();
        assert_eq!(hover.get("color"), Some(&StyleValue::from("blue.500")));
        assert!(hover.get("_active").and_then(StyleValue::as_nested).is_some());
        let svg = bag.get("& > svg").and_then(StyleValue::as_nested).unwrap();
        assert_eq!(svg.get("size"), Some(&StyleValue::Number(4.0)));
    }

    #[test]
    fn custom_and_vendor_properties_kept() {
        let bag = parse("--brand: #f06; -webkit-line-clamp: 3;");
        assert!(bag.contains_key("--brand"));
        assert!(bag.contains_key("-webkit-line-clamp"));
    }

    #[test]
    fn comments_are_ignored() {
        let bag = parse("color: red; /* note: ignored */ m: 1;");
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn error_missing_value() {
        let err = parse_style_block("color: ;").unwrap_err();
        assert!(err.to_string().contains("has no value"));
    }

    #[test]
    fn error_missing_colon() {
        assert!(matches!(
            parse_style_block("color red;"),
            Err(ParseError::UnexpectedToken { position: 6, .. })
        ));
    }

    #[test]
    fn error_position_is_byte_offset() {
        let err = parse_style_block("font-size: 14px;\ncolor red;").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { position: 23, .. }));
        assert!(err.to_string().starts_with("unexpected token at byte 23"));
    }

    #[test]
    fn error_position_counts_comment_bytes() {
        let input = "/* é */ color red;";
        let err = parse_style_block(input).unwrap_err();
        let ParseError::UnexpectedToken { position, .. } = err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(&input[position..position + 3], "red");
    }

    #[test]
    fn error_unclosed_block() {
        assert!(matches!(
            parse_style_block("_hover { color: red;"),
            Err(ParseError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn error_stray_close_brace() {
        assert!(matches!(
            parse_style_block("color: red; }"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn error_unterminated_list() {
        assert!(matches!(
            parse_style_block("p: [1, 2"),
            Err(ParseError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn kebab_to_camel() {
        assert_eq!(property_key("font-size"), "fontSize");
        assert_eq!(property_key("border-top-left-radius"), "borderTopLeftRadius");
        assert_eq!(property_key("color"), "color");
        assert_eq!(property_key("--brand"), "--brand");
    }
}
