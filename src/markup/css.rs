//! Inline `style` attributes, read and written with `cssparser`.
//!
//! Only the properties the document model stores are interpreted; any
//! other declaration is skipped so markup touched by other tools still
//! imports.

use crate::color::Foreground;
use crate::error::{Error, Result};
use crate::style::{Alignment, Weight};
use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};

/// A declaration from a `<p>` or `<span>` style attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    FontFamily(String),
    FontSize(f32),
    FontWeight(Weight),
    /// `font-style`: true for italic or oblique.
    FontStyle(bool),
    /// `text-decoration`: true when the list holds `underline`.
    TextDecoration(bool),
    Color(Foreground),
    TextAlign(Alignment),
    /// A property the model does not carry.
    Other,
}

/// Parse the declarations of a `style` attribute, in source order.
///
/// A declaration with a malformed value for a known property is an error;
/// unknown properties come back as [`Declaration::Other`].
pub fn declarations(style: &str) -> Result<Vec<Declaration>> {
    let mut input = ParserInput::new(style);
    let mut parser = Parser::new(&mut input);
    let mut style_parser = InlineStyleParser;

    let mut out = Vec::new();
    for result in RuleBodyParser::new(&mut parser, &mut style_parser) {
        match result {
            Ok(declaration) => out.push(declaration),
            Err((_, source)) => {
                return Err(Error::Markup(format!(
                    "invalid declaration: {}",
                    source.trim()
                )));
            }
        }
    }
    Ok(out)
}

/// Write a font family as a double-quoted CSS string.
///
/// Quotes, backslashes and control characters are escaped, so any family
/// for which [`is_family_char`] holds reads back unchanged.
#[must_use]
pub fn quote_family(family: &str) -> String {
    let mut out = String::with_capacity(family.len() + 2);
    // writing into a String never fails
    let _ = cssparser::serialize_string(family, &mut out);
    out
}

/// Characters a quoted family cannot carry through markup: NUL reads back
/// as U+FFFD and the XML non-characters are rejected by the importer.
#[must_use]
pub const fn is_family_char(c: char) -> bool {
    !matches!(c, '\0' | '\u{FFFE}' | '\u{FFFF}')
}

struct InlineStyleParser;

impl<'i> DeclarationParser<'i> for InlineStyleParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let declaration = match name.to_ascii_lowercase().as_str() {
            "font-family" => Declaration::FontFamily(parse_family(input)?),
            "font-size" => Declaration::FontSize(parse_point_size(input)?),
            "font-weight" => {
                let weight = match input.next()?.clone() {
                    Token::Ident(value) => Weight::parse_css(&value),
                    Token::Number {
                        int_value: Some(n), ..
                    } => Weight::parse_css(&n.to_string()),
                    _ => None,
                };
                Declaration::FontWeight(weight.ok_or_else(|| invalid(input))?)
            }
            "font-style" => {
                let value = input.expect_ident()?.clone();
                match value.to_ascii_lowercase().as_str() {
                    "italic" | "oblique" => Declaration::FontStyle(true),
                    "normal" => Declaration::FontStyle(false),
                    _ => return Err(invalid(input)),
                }
            }
            "text-decoration" => {
                let mut underline = false;
                while let Ok(word) = input.try_parse(|i| {
                    i.expect_ident()
                        .map(|word| word.eq_ignore_ascii_case("underline"))
                }) {
                    underline |= word;
                }
                skip_rest(input);
                Declaration::TextDecoration(underline)
            }
            "color" => {
                let color = match input.next()?.clone() {
                    Token::Ident(value) => Foreground::parse_css(&value),
                    Token::Hash(value) | Token::IDHash(value) => {
                        Foreground::parse_css(&format!("#{value}"))
                    }
                    _ => None,
                };
                Declaration::Color(color.ok_or_else(|| invalid(input))?)
            }
            "text-align" => {
                let value = input.expect_ident()?.clone();
                let alignment = Alignment::parse_css(&value).ok_or_else(|| invalid(input))?;
                Declaration::TextAlign(alignment)
            }
            _ => {
                skip_rest(input);
                Declaration::Other
            }
        };
        Ok(declaration)
    }
}

impl<'i> AtRuleParser<'i> for InlineStyleParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for InlineStyleParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for InlineStyleParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// First family of the list: a quoted string, or space-separated idents.
fn parse_family<'i>(
    input: &mut Parser<'i, '_>,
) -> std::result::Result<String, ParseError<'i, ()>> {
    let family = if let Ok(quoted) =
        input.try_parse(|i| i.expect_string().map(|s| s.as_ref().to_owned()))
    {
        quoted
    } else {
        let mut words = Vec::new();
        while let Ok(word) =
            input.try_parse(|i| i.expect_ident().map(|s| s.as_ref().to_owned()))
        {
            words.push(word);
        }
        words.join(" ")
    };
    // fallback families are dropped
    skip_rest(input);
    Ok(family)
}

/// Point size in `pt` or unitless. The number is re-read from its source
/// text so a shortest-form `f32` reads back bit-exact.
fn parse_point_size<'i>(
    input: &mut Parser<'i, '_>,
) -> std::result::Result<f32, ParseError<'i, ()>> {
    input.skip_whitespace();
    let start = input.position();
    let unit_len = match input.next()?.clone() {
        Token::Dimension { unit, .. } if unit.eq_ignore_ascii_case("pt") => unit.len(),
        Token::Number { .. } => 0,
        _ => return Err(invalid(input)),
    };
    let source = input.slice_from(start);
    let number = source.get(..source.len().saturating_sub(unit_len)).unwrap_or_default();
    let size: f32 = number.parse().map_err(|_| invalid(input))?;
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(invalid(input))
    }
}

fn skip_rest(input: &mut Parser<'_, '_>) {
    while input.next().is_ok() {}
}

fn invalid<'i>(input: &Parser<'i, '_>) -> ParseError<'i, ()> {
    input.new_custom_error::<(), ()>(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_span_declarations() {
        let decls = declarations(
            "font-family:\"Tahoma\";font-size:16pt;font-weight:bold;font-style:italic;\
             text-decoration:underline;color:#00008b;",
        )
        .unwrap();
        assert_eq!(
            decls,
            vec![
                Declaration::FontFamily("Tahoma".to_string()),
                Declaration::FontSize(16.0),
                Declaration::FontWeight(Weight::Bold),
                Declaration::FontStyle(true),
                Declaration::TextDecoration(true),
                Declaration::Color(Foreground::Rgb(Rgb::DARK_BLUE)),
            ]
        );
    }

    #[test]
    fn test_semicolon_inside_family() {
        let decls = declarations("font-family:'Semi;colon'; color: inherit").unwrap();
        assert_eq!(
            decls,
            vec![
                Declaration::FontFamily("Semi;colon".to_string()),
                Declaration::Color(Foreground::Inherit),
            ]
        );
    }

    #[test]
    fn test_unquoted_family_list() {
        let decls = declarations("font-family: Times New Roman, serif").unwrap();
        assert_eq!(
            decls,
            vec![Declaration::FontFamily("Times New Roman".to_string())]
        );
    }

    #[test]
    fn test_numeric_weight_and_case() {
        let decls = declarations("FONT-WEIGHT: 700; Text-Align: Justify; margin: 0 auto").unwrap();
        assert_eq!(
            decls,
            vec![
                Declaration::FontWeight(Weight::Bold),
                Declaration::TextAlign(Alignment::Justified),
                Declaration::Other,
            ]
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        for style in [
            "font-size:-3pt",
            "font-size:12px",
            "font-style:sideways",
            "color:12",
            "text-align:middle",
            "no-colon",
        ] {
            assert!(
                matches!(declarations(style), Err(Error::Markup(_))),
                "{style} should be rejected"
            );
        }
    }

    #[test]
    fn test_quote_family_roundtrip() {
        for family in [
            "Tahoma",
            "O'Brien Sans",
            r"Back\slash",
            "Semi;colon",
            "Say \"hi\"",
            "Tab\tName",
            "Line\nBreak\r",
            "Bell\u{7}",
            "Del\u{7f}",
        ] {
            let style = format!("font-family:{}", quote_family(family));
            assert_eq!(
                declarations(&style).unwrap(),
                vec![Declaration::FontFamily(family.to_string())],
                "{family:?}"
            );
        }
        assert_eq!(quote_family("Tahoma"), "\"Tahoma\"");
    }

    #[test]
    fn test_point_size_is_exact() {
        for size in [8.1f32, 10.3, 13.333_333, 47.999_996, f32::from_bits(0x4120_0001)] {
            let decls = declarations(&format!("font-size: {size}pt")).unwrap();
            assert_eq!(decls, vec![Declaration::FontSize(size)], "{size}");
        }
        assert_eq!(
            declarations("font-size:12").unwrap(),
            vec![Declaration::FontSize(12.0)]
        );
    }

    #[test]
    fn test_family_chars() {
        assert!(is_family_char('\t'));
        assert!(is_family_char('\u{1}'));
        assert!(!is_family_char('\0'));
        assert!(!is_family_char('\u{FFFF}'));
    }
}
