//! Document to markup.

use crate::document::{Block, Document, Run};
use crate::markup::css::quote_family;
use crate::style::CharFormat;
use quick_xml::escape::escape;

/// Render `document` as a sequence of `<p>` elements holding `<span>`s.
#[must_use]
pub fn serialize(document: &Document) -> String {
    let mut out = String::new();
    for block in document.blocks() {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    out.push_str(&format!(
        "<p style=\"text-align:{};\">",
        block.format().alignment.as_css()
    ));
    for run in block.runs() {
        write_run(out, run);
    }
    out.push_str("</p>");
}

fn write_run(out: &mut String, run: &Run) {
    out.push_str("<span style=\"");
    out.push_str(&escape(span_style(run.format()).as_str()));
    out.push_str("\">");
    out.push_str(&escape(run.text()));
    out.push_str("</span>");
}

/// Whether `c` may appear in run text: the XML 1.0 `Char` production.
/// Anything else would make the markup unreadable to [`parse`](super::parse).
#[must_use]
pub const fn is_text_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Inline declarations for a character format, before attribute escaping.
#[must_use]
pub fn span_style(format: &CharFormat) -> String {
    format!(
        "font-family:{};font-size:{}pt;font-weight:{};font-style:{};text-decoration:{};color:{};",
        quote_family(&format.font_family),
        format.point_size,
        format.weight().as_css(),
        if format.is_italic() { "italic" } else { "normal" },
        if format.is_underline() { "underline" } else { "none" },
        format.foreground.to_css(),
    )
}
