//! Formatting engine.
//!
//! Turns a style intent (preset, explicit controls, color, alignment) into
//! a pair of deltas and applies them to a [`Document`](crate::Document).
//!
//! # Examples
//!
//! ```
//! use coursetext::format::{FormatIntent, StylePreset, apply_intent};
//! use coursetext::{Alignment, Document, Selection, SessionOptions};
//!
//! let options = SessionOptions::default();
//! let mut input = options.default_format.clone();
//! let mut doc = Document::default();
//! doc.insert_text(0, "Hello World", &input).unwrap();
//!
//! apply_intent(
//!     &mut doc,
//!     Selection::new(0, 5),
//!     &FormatIntent::Preset(StylePreset::Important),
//!     &mut input,
//!     &options,
//! )
//! .unwrap();
//!
//! assert_eq!(doc.blocks()[0].format().alignment, Alignment::Justified);
//! ```

mod engine;
mod intent;
mod preset;

pub use engine::{apply_deltas, apply_intent};
pub use intent::{ExplicitFormat, FormatDeltas, FormatIntent};
pub use preset::StylePreset;
