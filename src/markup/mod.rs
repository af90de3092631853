//! Portable markup form of a document.
//!
//! Each block becomes a `<p>` with a `text-align` declaration; each run a
//! `<span>` carrying the full character format as inline declarations:
//!
//! ```text
//! <p style="text-align:center;"><span style="font-family:&quot;Tahoma&quot;;font-size:16pt;
//! font-weight:bold;font-style:normal;text-decoration:underline;color:#00008b;">Intro</span></p>
//! ```
//!
//! (shown wrapped; real output has no line breaks). Style attributes are
//! read and written with `cssparser`, entities with `quick-xml`. The
//! encoding is lossless for every attribute the model stores, including the
//! `inherit` color and the format of an empty paragraph, so [`parse`]
//! restores exactly what [`serialize`] wrote. Run text is limited to
//! characters XML can carry ([`is_text_char`]); font families to those a
//! quoted CSS string can carry ([`is_family_char`]).
//!
//! # Examples
//!
//! ```
//! use coursetext::{CharFormat, Document, markup};
//!
//! let format = CharFormat::new("Arial", 11.0);
//! let mut doc = Document::new(format.clone(), Default::default());
//! doc.insert_text(0, "Fish & chips", &format).unwrap();
//!
//! let html = markup::serialize(&doc);
//! assert!(html.contains("Fish &amp; chips"));
//!
//! let restored = markup::parse(&html, &format).unwrap();
//! assert_eq!(restored, doc);
//! ```

mod css;
mod parse;
mod serialize;

pub use css::{Declaration, declarations, is_family_char, quote_family};
pub use parse::parse;
pub use serialize::{is_text_char, serialize, span_style};
