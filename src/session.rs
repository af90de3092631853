//! Editing session: the caller-driven API around a document.
//!
//! An [`EditSession`] owns the course title, the body [`Document`], and the
//! input format that the next typed text receives. The UI layer translates
//! its control events into calls on the session:
//!
//! - text typed at the caret → [`EditSession::type_text`]
//! - caret moved → [`EditSession::set_caret`]
//! - preset picked, control toggled, color chosen, alignment picked →
//!   [`EditSession::apply`] with the current selection
//! - save clicked → [`EditSession::save`]
//!
//! # Examples
//!
//! ```
//! use coursetext::format::{FormatIntent, StylePreset};
//! use coursetext::{Alignment, EditSession, Selection};
//!
//! let mut session = EditSession::new();
//! session.set_title("Intro to Rust");
//! let caret = session.type_text(0, "Hello World").unwrap();
//! assert_eq!(caret, 11);
//!
//! session
//!     .apply(Selection::new(0, 5), &FormatIntent::Preset(StylePreset::Important))
//!     .unwrap();
//! assert_eq!(session.document().blocks()[0].format().alignment, Alignment::Justified);
//!
//! let snapshot = session.save();
//! assert_eq!(snapshot.title, "Intro to Rust");
//! assert!(snapshot.body.starts_with("<p style=\"text-align:justify;\">"));
//! ```

use crate::config::SessionOptions;
use crate::document::{Document, Selection};
use crate::error::Result;
use crate::event::{LogLevel, emit_event, emit_log};
use crate::format::{FormatIntent, apply_intent};
use crate::style::CharFormat;

/// Title and serialized body, as handed out on save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseSnapshot {
    /// Course title, opaque to the engine.
    pub title: String,
    /// Body markup produced by [`Document::serialize`].
    pub body: String,
}

/// A single editing session over one course document.
#[derive(Clone, Debug)]
pub struct EditSession {
    title: String,
    document: Document,
    input_format: CharFormat,
    options: SessionOptions,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Create a session with default options and an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// Create a session with custom options and an empty document.
    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            title: String::new(),
            document: Document::new(
                options.default_format.clone(),
                options.default_block_format(),
            ),
            input_format: options.default_format.clone(),
            options,
        }
    }

    /// Restore a session from a saved snapshot.
    pub fn load(snapshot: &CourseSnapshot, options: SessionOptions) -> Result<Self> {
        let document = Document::from_markup(&snapshot.body, &options.default_format)?;
        let input_format = document.char_format_at(0)?.clone();
        Ok(Self {
            title: snapshot.title.clone(),
            document,
            input_format,
            options,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Format the next typed text receives.
    #[must_use]
    pub fn input_format(&self) -> &CharFormat {
        &self.input_format
    }

    /// Move the caret: the input format becomes the format at `offset`.
    pub fn set_caret(&mut self, offset: usize) -> Result<()> {
        self.input_format = self.document.char_format_at(offset)?.clone();
        Ok(())
    }

    /// Type `text` at `offset` using the input format. Returns the caret
    /// offset after the inserted text.
    pub fn type_text(&mut self, offset: usize, text: &str) -> Result<usize> {
        self.document.insert_text(offset, text, &self.input_format)
    }

    /// Delete the selected text. The input format is left alone.
    pub fn remove(&mut self, selection: Selection) -> Result<()> {
        self.document.remove(selection)
    }

    /// Backspace at `offset`. Returns the new caret offset.
    pub fn delete_backward(&mut self, offset: usize) -> Result<usize> {
        self.document.delete_backward(offset)
    }

    /// Apply a style intent to `selection`.
    pub fn apply(&mut self, selection: Selection, intent: &FormatIntent) -> Result<()> {
        apply_intent(
            &mut self.document,
            selection,
            intent,
            &mut self.input_format,
            &self.options,
        )
    }

    /// Render the body to markup.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.document.serialize()
    }

    /// Snapshot the title and body for display or storage.
    #[must_use]
    pub fn save(&self) -> CourseSnapshot {
        let snapshot = CourseSnapshot {
            title: self.title.clone(),
            body: self.serialize(),
        };
        emit_log(
            LogLevel::Info,
            &format!(
                "saved course {:?} ({} blocks, {} chars)",
                snapshot.title,
                self.document.block_count(),
                self.document.len_chars()
            ),
        );
        emit_event("course_saved", &snapshot.title);
        snapshot
    }
}
