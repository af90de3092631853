//! `coursetext` - Rich-text formatting engine for course documents
//!
//! A styled document model (paragraphs of uniformly formatted runs) plus the
//! rules that turn a selection and a style intent into format changes, and
//! a lossless markup form for display and storage.
//!
//! # Examples
//!
//! ```
//! use coursetext::format::{FormatIntent, StylePreset};
//! use coursetext::{EditSession, Rgb, Selection, Weight};
//!
//! let mut session = EditSession::new();
//! session.type_text(0, "Hello World").unwrap();
//! session
//!     .apply(Selection::new(0, 5), &FormatIntent::Preset(StylePreset::Important))
//!     .unwrap();
//!
//! let runs = session.document().blocks()[0].runs();
//! assert_eq!(runs[0].text(), "Hello");
//! assert_eq!(runs[0].format().weight(), Weight::Bold);
//! assert_eq!(runs[0].format().foreground.rgb(), Some(Rgb::DARK_RED));
//! assert_eq!(runs[1].text(), " World");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow document::Document etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::format_push_string)] // format! with push_str is fine
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::float_cmp)] // Point sizes round-trip exactly

pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod format;
pub mod markup;
pub mod session;
pub mod style;

// Re-export core types at crate root
pub use color::{Foreground, Rgb};
pub use config::SessionOptions;
pub use document::{Block, Document, Run, Selection};
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use format::{ExplicitFormat, FormatDeltas, FormatIntent, StylePreset};
pub use session::{CourseSnapshot, EditSession};
pub use style::{
    Alignment, BlockFormat, BlockFormatDelta, CharFormat, CharFormatDelta, TextAttributes, Weight,
};
