//! Markup to document.

use crate::document::{Block, Document, Run};
use crate::error::{Error, Result};
use crate::markup::css::{Declaration, declarations, is_family_char};
use crate::style::{BlockFormat, CharFormat};
use roxmltree::Node;

/// Rebuild a document from markup produced by [`serialize`](super::serialize).
///
/// Properties missing from a span fall back to `defaults`; unknown
/// properties are ignored. Text directly inside a `<p>` gets `defaults`.
pub fn parse(markup: &str, defaults: &CharFormat) -> Result<Document> {
    let wrapped = format!("<body>{markup}</body>");
    let xml = roxmltree::Document::parse(&wrapped)?;

    let mut blocks = Vec::new();
    for node in xml.root_element().children() {
        if node.is_text() {
            if node.text().is_some_and(|text| text.trim().is_empty()) {
                continue;
            }
            return Err(Error::Markup("text outside a paragraph".to_string()));
        }
        if !node.is_element() {
            continue;
        }
        match node.tag_name().name() {
            "p" => blocks.push(parse_block(node, defaults)?),
            other => return Err(Error::Markup(format!("unexpected element <{other}>"))),
        }
    }

    if blocks.is_empty() {
        return Ok(Document::new(defaults.clone(), BlockFormat::default()));
    }
    Ok(Document::from_blocks(blocks))
}

fn parse_block(node: Node<'_, '_>, defaults: &CharFormat) -> Result<Block> {
    let mut format = BlockFormat::default();
    for declaration in declarations(node.attribute("style").unwrap_or_default())? {
        if let Declaration::TextAlign(alignment) = declaration {
            format.alignment = alignment;
        }
    }

    let mut runs = Vec::new();
    for child in node.children() {
        if child.is_text() {
            runs.push(Run::new(clean_text(child.text().unwrap_or_default()), defaults.clone()));
            continue;
        }
        if !child.is_element() {
            continue;
        }
        match child.tag_name().name() {
            "span" => {
                let style = child.attribute("style").unwrap_or_default();
                let char_format = parse_char_format(style, defaults)?;
                runs.push(Run::new(span_text(child)?, char_format));
            }
            other => {
                return Err(Error::Markup(format!(
                    "unexpected element <{other}> in paragraph"
                )));
            }
        }
    }
    Ok(Block::from_runs(runs, format, defaults.clone()))
}

fn span_text(span: Node<'_, '_>) -> Result<String> {
    let mut text = String::new();
    for child in span.children() {
        if child.is_element() {
            return Err(Error::Markup(format!(
                "unexpected element <{}> in span",
                child.tag_name().name()
            )));
        }
        if let Some(part) = child.text() {
            text.push_str(&clean_text(part));
        }
    }
    Ok(text)
}

/// Runs never hold block separators.
fn clean_text(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

fn parse_char_format(style: &str, defaults: &CharFormat) -> Result<CharFormat> {
    let mut format = defaults.clone();
    for declaration in declarations(style)? {
        match declaration {
            Declaration::FontFamily(family) => {
                if family.is_empty() || !family.chars().all(is_family_char) {
                    return Err(Error::InvalidFont);
                }
                format.font_family = family;
            }
            Declaration::FontSize(size) => format.point_size = size,
            Declaration::FontWeight(weight) => format = format.with_weight(weight),
            Declaration::FontStyle(italic) => format = format.with_italic(italic),
            Declaration::TextDecoration(underline) => format = format.with_underline(underline),
            Declaration::Color(foreground) => format.foreground = foreground,
            Declaration::TextAlign(_) | Declaration::Other => {}
        }
    }
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Foreground, Rgb};
    use crate::style::{Alignment, Weight};

    fn defaults() -> CharFormat {
        CharFormat::new("Sans Serif", 10.0)
    }

    #[test]
    fn test_parse_single_span() {
        let doc = parse(
            "<p style=\"text-align:center;\"><span style=\"font-family:&quot;Tahoma&quot;;\
             font-size:16pt;font-weight:bold;font-style:normal;text-decoration:underline;\
             color:#00008b;\">Hi &amp; bye</span></p>",
            &defaults(),
        )
        .unwrap();

        let block = &doc.blocks()[0];
        assert_eq!(block.format().alignment, Alignment::Center);
        let run = &block.runs()[0];
        assert_eq!(run.text(), "Hi & bye");
        assert_eq!(run.format().font_family, "Tahoma");
        assert!((run.format().point_size - 16.0).abs() < f32::EPSILON);
        assert!(run.format().is_bold());
        assert!(run.format().is_underline());
        assert_eq!(run.format().foreground, Foreground::Rgb(Rgb::DARK_BLUE));
    }

    #[test]
    fn test_missing_declarations_use_defaults() {
        let doc = parse("<p><span style=\"font-weight:bold\">x</span>y</p>", &defaults()).unwrap();
        let runs = doc.blocks()[0].runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].format(), &defaults().with_weight(Weight::Bold));
        assert_eq!(runs[1].format(), &defaults());
        assert_eq!(doc.blocks()[0].format().alignment, Alignment::Left);
    }

    #[test]
    fn test_empty_markup_gives_empty_document() {
        let doc = parse("", &defaults()).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.blocks()[0].runs()[0].format(), &defaults());
    }

    #[test]
    fn test_rejects_malformed_markup() {
        assert!(matches!(parse("<p>", &defaults()), Err(Error::Markup(_))));
        assert!(matches!(parse("<div/>", &defaults()), Err(Error::Markup(_))));
        assert!(matches!(parse("loose", &defaults()), Err(Error::Markup(_))));
        assert!(matches!(
            parse("<p><span style=\"font-size:-3pt\">x</span></p>", &defaults()),
            Err(Error::Markup(_))
        ));
        assert!(matches!(
            parse("<p><span><b>x</b></span></p>", &defaults()),
            Err(Error::Markup(_))
        ));
    }

    #[test]
    fn test_unknown_properties_are_ignored() {
        let doc = parse(
            "<p style=\"margin:0;text-align:right\">\
             <span style=\"background:red;color:red\">x</span></p>",
            &defaults(),
        )
        .unwrap();
        assert_eq!(doc.blocks()[0].format().alignment, Alignment::Right);
        assert_eq!(
            doc.blocks()[0].runs()[0].format().foreground,
            Foreground::Rgb(Rgb::RED)
        );
    }

    #[test]
    fn test_rejects_unwritable_families() {
        for style in ["font-family:''", "font-family:'a\\fffe b'", "font-family:'\\ffff '"] {
            let markup = format!("<p><span style=\"{style}\">x</span></p>");
            assert_eq!(parse(&markup, &defaults()), Err(Error::InvalidFont), "{style}");
        }
    }

    #[test]
    fn test_css_escapes_in_family() {
        let doc = parse(
            "<p><span style=\"font-family:&quot;Tab\\9 Name&quot;\">x</span></p>",
            &defaults(),
        )
        .unwrap();
        assert_eq!(doc.blocks()[0].runs()[0].format().font_family, "Tab\tName");
    }
}
