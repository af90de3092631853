//! End-to-end editing scenarios driven through `EditSession`.

mod common;

use common::{assert_run_invariants, char_formats, setup_test_logging};
use coursetext::format::{ExplicitFormat, FormatIntent, StylePreset};
use coursetext::{
    Alignment, CourseSnapshot, EditSession, Error, Foreground, Rgb, Selection, SessionOptions,
    Weight,
};
use tracing::info;

fn hello_world() -> EditSession {
    setup_test_logging();
    let mut session = EditSession::new();
    let caret = session.type_text(0, "Hello World").unwrap();
    assert_eq!(caret, 11);
    session
}

#[test]
fn important_preset_on_first_word() {
    let mut session = hello_world();
    let before = session.document().blocks()[0].runs()[0].format().clone();

    session
        .apply(
            Selection::new(0, 5),
            &FormatIntent::Preset(StylePreset::Important),
        )
        .unwrap();
    info!(markup = %session.serialize(), "after IMPORTANT");

    let block = &session.document().blocks()[0];
    let runs = block.runs();
    assert_eq!(runs.len(), 2);

    assert_eq!(runs[0].text(), "Hello");
    let fmt = runs[0].format();
    assert_eq!(fmt.font_family, "Arial");
    assert_eq!(fmt.point_size, 12.0);
    assert_eq!(fmt.weight(), Weight::Bold);
    assert!(!fmt.is_underline());
    assert_eq!(fmt.foreground, Foreground::Rgb(Rgb::DARK_RED));

    assert_eq!(runs[1].text(), " World");
    assert_eq!(runs[1].format(), &before);

    assert_eq!(block.format().alignment, Alignment::Justified);
    assert_run_invariants(session.document());
}

#[test]
fn bold_at_caret_only_affects_new_text() {
    let mut session = hello_world();
    let before = session.document().clone();

    let explicit = ExplicitFormat::from_char_format(session.input_format()).with_bold(true);
    session
        .apply(Selection::caret(11), &FormatIntent::Explicit(explicit))
        .unwrap();
    assert_eq!(session.document(), &before);

    session.type_text(11, "!!").unwrap();
    let runs = session.document().blocks()[0].runs();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].text(), "Hello World");
    assert_eq!(runs[0].format().weight(), Weight::Normal);
    assert_eq!(runs[1].text(), "!!");
    assert_eq!(runs[1].format().weight(), Weight::Bold);
}

#[test]
fn oversized_point_size_is_rejected() {
    let mut session = hello_world();
    let before = session.document().clone();
    let input_before = session.input_format().clone();

    let explicit = ExplicitFormat::from_char_format(session.input_format()).with_point_size(60.0);
    let result = session.apply(Selection::new(0, 11), &FormatIntent::Explicit(explicit));

    assert_eq!(
        result,
        Err(Error::InvalidRange {
            value: 60.0,
            min: 8.0,
            max: 48.0,
        })
    );
    assert_eq!(session.document(), &before);
    assert_eq!(session.input_format(), &input_before);
}

#[test]
fn point_size_bounds_follow_options() {
    setup_test_logging();
    let mut session =
        EditSession::with_options(SessionOptions::default().with_point_size_range(8.0, 72.0));
    session.type_text(0, "Big").unwrap();
    let explicit = ExplicitFormat::from_char_format(session.input_format()).with_point_size(60.0);
    session
        .apply(Selection::new(0, 3), &FormatIntent::Explicit(explicit))
        .unwrap();
    assert_eq!(
        session.document().blocks()[0].runs()[0].format().point_size,
        60.0
    );
}

#[test]
fn title_preset_spans_blocks() {
    setup_test_logging();
    let mut session = EditSession::new();
    session.type_text(0, "Intro\nChapter one\nNotes").unwrap();

    // From inside "Intro" to inside "Chapter one"
    session
        .apply(
            Selection::new(2, 10),
            &FormatIntent::Preset(StylePreset::Title),
        )
        .unwrap();

    let blocks = session.document().blocks();
    assert_eq!(blocks[0].format().alignment, Alignment::Center);
    assert_eq!(blocks[1].format().alignment, Alignment::Center);
    assert_eq!(blocks[2].format().alignment, Alignment::Left);

    let formats = char_formats(session.document());
    for (i, (c, fmt)) in formats.iter().enumerate() {
        // characters 2..5 of block 0 and 0..4 of block 1 (offsets 6..10)
        let touched = (2..5).contains(&i) || (5..9).contains(&i);
        assert_eq!(
            fmt.font_family == "Tahoma",
            touched,
            "char {i} ({c:?}) touched={touched}"
        );
        if touched {
            assert_eq!(fmt.point_size, 16.0);
            assert!(fmt.is_bold());
            assert!(fmt.is_underline());
            assert_eq!(fmt.foreground, Foreground::Rgb(Rgb::DARK_BLUE));
        }
    }
    assert_run_invariants(session.document());
}

#[test]
fn color_then_alignment_then_cancelled_color() {
    let mut session = hello_world();
    session
        .apply(Selection::new(6, 11), &FormatIntent::Color(Some(Rgb::GREEN)))
        .unwrap();
    session
        .apply(Selection::caret(3), &FormatIntent::Alignment(Alignment::Right))
        .unwrap();

    let after = session.document().clone();
    session
        .apply(Selection::new(0, 11), &FormatIntent::Color(None))
        .unwrap();
    assert_eq!(session.document(), &after);

    let block = &session.document().blocks()[0];
    assert_eq!(block.format().alignment, Alignment::Right);
    assert_eq!(block.runs()[1].text(), "World");
    assert_eq!(block.runs()[1].format().foreground.rgb(), Some(Rgb::GREEN));
    // Color changes nothing but the color
    assert_eq!(
        block.runs()[1].format().font_family,
        block.runs()[0].format().font_family
    );
}

#[test]
fn custom_preset_changes_nothing() {
    let mut session = hello_world();
    let before = session.document().clone();
    session
        .apply(Selection::new(0, 11), &FormatIntent::Preset(StylePreset::Custom))
        .unwrap();
    assert_eq!(session.document(), &before);
}

#[test]
fn out_of_range_selection_is_reported() {
    let mut session = hello_world();
    let result = session.apply(
        Selection::new(3, 12),
        &FormatIntent::Preset(StylePreset::Normal),
    );
    assert_eq!(result, Err(Error::OutOfRange { offset: 12, len: 11 }));
}

#[test]
fn save_produces_markup_snapshot() {
    let mut session = hello_world();
    session.set_title("Rust 101");
    session
        .apply(Selection::new(0, 5), &FormatIntent::Preset(StylePreset::Title))
        .unwrap();

    let snapshot = session.save();
    assert_eq!(snapshot.title, "Rust 101");
    insta::assert_snapshot!(
        snapshot.body,
        @r#"<p style="text-align:center;"><span style="font-family:&quot;Tahoma&quot;;font-size:16pt;font-weight:bold;font-style:normal;text-decoration:underline;color:#00008b;">Hello</span><span style="font-family:&quot;Sans Serif&quot;;font-size:10pt;font-weight:normal;font-style:normal;text-decoration:none;color:inherit;"> World</span></p>"#
    );

    let restored = EditSession::load(&snapshot, SessionOptions::default()).unwrap();
    assert_eq!(restored.document(), session.document());
}

#[test]
fn control_characters_are_refused_before_saving() {
    let mut session = hello_world();
    let before = session.document().clone();

    assert_eq!(
        session.type_text(5, "\u{1}"),
        Err(Error::InvalidChar('\u{1}'))
    );
    assert_eq!(
        session.type_text(5, "page\u{c}break"),
        Err(Error::InvalidChar('\u{c}'))
    );
    assert_eq!(session.document(), &before);

    session.type_text(5, "\t").unwrap();
    let snapshot = session.save();
    let restored = EditSession::load(&snapshot, SessionOptions::default()).unwrap();
    assert_eq!(restored.document().plain_text(), "Hello\t World");
}

#[test]
fn unusual_font_names_survive_save() {
    let mut session = hello_world();
    for (i, family) in ["Tab\tFace", "Bell\u{7} \"Quoted\" 'Name'", "Semi;colon\\"]
        .into_iter()
        .enumerate()
    {
        let explicit = ExplicitFormat::from_char_format(session.input_format())
            .with_font_family(family);
        session
            .apply(Selection::new(i * 2, i * 2 + 1), &FormatIntent::Explicit(explicit))
            .unwrap();
    }

    let snapshot = session.save();
    let restored = EditSession::load(&snapshot, SessionOptions::default()).unwrap();
    assert_eq!(restored.document(), session.document());
    assert_eq!(
        restored.document().char_format_at(1).unwrap().font_family,
        "Tab\tFace"
    );
}

#[test]
fn title_over_empty_paragraph_styles_its_line() {
    setup_test_logging();
    let mut session = EditSession::new();
    session.type_text(0, "a\n\nb").unwrap();
    session
        .apply(Selection::new(0, 4), &FormatIntent::Preset(StylePreset::Title))
        .unwrap();

    let empty = &session.document().blocks()[1];
    assert!(empty.is_empty());
    assert_eq!(empty.format().alignment, Alignment::Center);
    assert_eq!(empty.runs()[0].format().font_family, "Tahoma");

    session.set_caret(2).unwrap();
    assert_eq!(session.input_format().font_family, "Tahoma");
    assert_eq!(session.input_format().point_size, 16.0);

    // The empty line's format survives a save
    let restored = EditSession::load(
        &CourseSnapshot {
            title: String::new(),
            body: session.serialize(),
        },
        SessionOptions::default(),
    )
    .unwrap();
    assert_eq!(restored.document(), session.document());
}
