//! Styled document model.
//!
//! A [`Document`] is an ordered, non-empty sequence of [`Block`]s
//! (paragraphs); each block owns an ordered, non-empty sequence of [`Run`]s
//! (text sharing one [`CharFormat`](crate::CharFormat)) plus a
//! [`BlockFormat`](crate::BlockFormat).
//!
//! Key types:
//!
//! - [`Document`]: Offset math, run/block splitting, format application
//! - [`Block`]: One paragraph
//! - [`Run`]: One span of uniformly formatted text
//! - [`Selection`]: Half-open offset range; zero length means caret
//!
//! # Examples
//!
//! ```
//! use coursetext::{CharFormat, CharFormatDelta, Document, Selection, Weight};
//!
//! let mut doc = Document::default();
//! doc.insert_text(0, "Hello World", &CharFormat::default()).unwrap();
//!
//! let bold = CharFormatDelta::new().weight(Weight::Bold);
//! doc.apply_char_format(Selection::new(0, 5), &bold).unwrap();
//!
//! let runs = doc.blocks()[0].runs();
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].text(), "Hello");
//! assert!(runs[0].format().is_bold());
//! ```

mod block;
#[allow(clippy::module_inception)]
mod document;
mod run;
mod selection;

pub use block::Block;
pub use document::Document;
pub use run::Run;
pub use selection::Selection;
