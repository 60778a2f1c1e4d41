//! Rule model and canonical serialization.
//!
//! Rules are tokenized with `cssparser` so that strings, functions and nested
//! blocks never split a declaration in the wrong place. No property or value
//! validation happens here; anything with a `name: value` shape is kept.
//!
//! Whitespace is normalized between tokens only: runs collapse to one space,
//! space just inside brackets is dropped, and string contents are untouched.

use std::fmt;

use cssparser::{Delimiter, ParseError, Parser, ParserInput, Token};

use crate::error::SheetError;

/// At-rules whose block holds rules rather than declarations.
const NESTING_AT_RULES: &[&str] = &[
    "@keyframes",
    "@-webkit-keyframes",
    "@media",
    "@supports",
    "@container",
    "@layer",
    "@document",
];

/// A single `name: value` pair inside a style block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

impl Declaration {
    fn new(name: &str, value: String) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() || value.is_empty() {
            return None;
        }
        // Custom properties are case-sensitive.
        let name = if name.starts_with("--") {
            name.to_string()
        } else {
            name.to_ascii_lowercase()
        };
        Some(Self { name, value })
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// One parsed rule, either a style block or a block of nested rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssRule {
    /// `selector { declarations }`, also used for keyframe stops.
    Style {
        selector: String,
        declarations: Vec<Declaration>,
    },
    /// `@keyframes name { ... }`, `@media ... { ... }` and friends.
    Group {
        prelude: String,
        rules: Vec<CssRule>,
    },
}

impl CssRule {
    /// Parses text that must contain exactly one rule.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Syntax`] for empty input, more than one rule, an
    /// empty selector, or stray tokens outside a block.
    pub fn parse(text: &str) -> Result<Self, SheetError> {
        let syntax = || SheetError::Syntax {
            rule: text.to_string(),
        };

        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let mut rules = parse_rule_list(&mut parser).map_err(|()| syntax())?;
        if rules.len() != 1 {
            return Err(syntax());
        }
        rules.pop().ok_or_else(syntax)
    }

    /// The selector of a style rule or the prelude of a group rule.
    pub fn prelude(&self) -> &str {
        match self {
            CssRule::Style { selector, .. } => selector,
            CssRule::Group { prelude, .. } => prelude,
        }
    }
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssRule::Style {
                selector,
                declarations,
            } => {
                write!(f, "{} {{", selector)?;
                for (i, declaration) in declarations.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", declaration)?;
                }
                f.write_str("}")
            }
            CssRule::Group { prelude, rules } if rules.is_empty() => {
                write!(f, "{} {{}}", prelude)
            }
            CssRule::Group { prelude, rules } => {
                write!(f, "{} {{", prelude)?;
                for rule in rules {
                    write!(f, " {}", rule)?;
                }
                f.write_str(" }")
            }
        }
    }
}

fn parse_rule_list(parser: &mut Parser<'_, '_>) -> Result<Vec<CssRule>, ()> {
    let mut rules = Vec::new();

    while !parser.is_exhausted() {
        let prelude = parser
            .parse_until_before(Delimiter::CurlyBracketBlock, parse_prelude)
            .map_err(|_| ())?;
        match parser.next() {
            Ok(&Token::CurlyBracketBlock) if !prelude.is_empty() => {}
            _ => return Err(()),
        }

        let rule = if nests_rules(&prelude) {
            let rules = parser
                .parse_nested_block(|nested| {
                    parse_rule_list(nested)
                        .map_err(|()| nested.new_custom_error::<(), ()>(()))
                })
                .map_err(|_: ParseError<'_, ()>| ())?;
            CssRule::Group { prelude, rules }
        } else {
            let declarations = parser
                .parse_nested_block(|nested| {
                    Ok::<_, ParseError<'_, ()>>(parse_declarations(nested))
                })
                .map_err(|_| ())?;
            CssRule::Style {
                selector: prelude,
                declarations,
            }
        };
        rules.push(rule);
    }

    Ok(rules)
}

/// Reads a selector or at-rule prelude up to, not including, its block.
fn parse_prelude<'i>(parser: &mut Parser<'i, '_>) -> Result<String, ParseError<'i, ()>> {
    let start = parser.state();
    while let Ok(token) = parser.next() {
        if matches!(token, Token::Semicolon | Token::CloseCurlyBracket) {
            return Err(parser.new_custom_error::<(), ()>(()));
        }
    }
    parser.reset(&start);
    Ok(normalize_tokens(parser))
}

fn parse_declarations(parser: &mut Parser<'_, '_>) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    while !parser.is_exhausted() {
        let declaration = parser.parse_until_after(Delimiter::Semicolon, |declaration| {
            Ok::<_, ParseError<'_, ()>>(parse_declaration(declaration))
        });
        if let Ok(Some(declaration)) = declaration {
            declarations.push(declaration);
        }
    }
    declarations
}

fn parse_declaration(parser: &mut Parser<'_, '_>) -> Option<Declaration> {
    let start = parser.position();
    let name_end = loop {
        let before = parser.position();
        match parser.next() {
            Ok(&Token::Colon) => break before,
            Ok(_) => {}
            Err(_) => return None,
        }
    };
    let name = parser.slice(start..name_end);
    Declaration::new(name, normalize_tokens(parser))
}

/// Re-serializes the remaining tokens from their source text, with one space
/// wherever the input had whitespace between two tokens.
fn normalize_tokens(parser: &mut Parser<'_, '_>) -> String {
    let mut out = String::new();
    let mut space = false;
    loop {
        let start = parser.position();
        let closing = match parser.next_including_whitespace_and_comments() {
            Ok(Token::Comment(_)) => continue,
            Ok(Token::WhiteSpace(_)) => {
                space = true;
                continue;
            }
            Ok(Token::Function(_)) | Ok(Token::ParenthesisBlock) => Some(')'),
            Ok(Token::SquareBracketBlock) => Some(']'),
            Ok(Token::CurlyBracketBlock) => Some('}'),
            Ok(_) => None,
            Err(_) => break,
        };
        if space && !out.is_empty() {
            out.push(' ');
        }
        space = false;
        // For a block token this is just the opening bracket or `name(`.
        out.push_str(parser.slice_from(start));
        if let Some(closing) = closing {
            let inner = parser
                .parse_nested_block(|nested| {
                    Ok::<_, ParseError<'_, ()>>(normalize_tokens(nested))
                })
                .unwrap_or_default();
            out.push_str(&inner);
            out.push(closing);
        }
    }
    out
}

fn nests_rules(prelude: &str) -> bool {
    let keyword = prelude
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    NESTING_AT_RULES.contains(&keyword.as_str())
}
