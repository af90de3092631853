//! Fuzz target for editing and formatting sequences.
//!
//! Drives an EditSession with arbitrary operations; every operation must
//! either succeed or return an error, never panic, and whatever was built
//! must load back from its saved markup.

#![no_main]

use arbitrary::Arbitrary;
use coursetext::format::{ExplicitFormat, FormatIntent, StylePreset};
use coursetext::{Alignment, CourseSnapshot, EditSession, Rgb, Selection, SessionOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Type { at: u16, text: String },
    Remove { anchor: u16, position: u16 },
    Backspace { at: u16 },
    Caret { at: u16 },
    Preset { anchor: u16, position: u16, preset: u8 },
    Explicit { anchor: u16, position: u16, size: f32, bold: bool, italic: bool, underline: bool },
    Color { anchor: u16, position: u16, rgb: Option<(u8, u8, u8)> },
    Align { anchor: u16, position: u16, alignment: u8 },
}

fn selection(anchor: u16, position: u16) -> Selection {
    Selection::new(usize::from(anchor), usize::from(position))
}

fuzz_target!(|ops: Vec<Op>| {
    let mut session = EditSession::new();
    for op in ops {
        let _ = match op {
            Op::Type { at, text } => session.type_text(usize::from(at), &text).map(drop),
            Op::Remove { anchor, position } => session.remove(selection(anchor, position)),
            Op::Backspace { at } => session.delete_backward(usize::from(at)).map(drop),
            Op::Caret { at } => session.set_caret(usize::from(at)),
            Op::Preset { anchor, position, preset } => {
                let preset = StylePreset::ALL[usize::from(preset) % StylePreset::ALL.len()];
                session.apply(selection(anchor, position), &FormatIntent::Preset(preset))
            }
            Op::Explicit { anchor, position, size, bold, italic, underline } => {
                let explicit = ExplicitFormat::from_char_format(session.input_format())
                    .with_point_size(size)
                    .with_bold(bold)
                    .with_italic(italic)
                    .with_underline(underline);
                session.apply(selection(anchor, position), &FormatIntent::Explicit(explicit))
            }
            Op::Color { anchor, position, rgb } => {
                let color = rgb.map(Rgb::from);
                session.apply(selection(anchor, position), &FormatIntent::Color(color))
            }
            Op::Align { anchor, position, alignment } => {
                let alignment = Alignment::ALL[usize::from(alignment) % Alignment::ALL.len()];
                session.apply(selection(anchor, position), &FormatIntent::Alignment(alignment))
            }
        };
    }
    let text = session.document().plain_text();
    assert_eq!(text.chars().count(), session.document().len_chars());

    let snapshot = CourseSnapshot { title: String::new(), body: session.serialize() };
    let restored = EditSession::load(&snapshot, SessionOptions::default()).unwrap();
    assert_eq!(restored.document(), session.document());
});
