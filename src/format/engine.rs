//! Applying resolved deltas to a document.

use crate::config::SessionOptions;
use crate::document::{Document, Selection};
use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::format::{FormatDeltas, FormatIntent};
use crate::style::CharFormat;

/// Apply resolved deltas to `selection`.
///
/// The character delta goes to every run inside the selection, then the
/// paragraph delta to every block the selection touches. The input format
/// (what the next typed text receives) takes the character delta too, for a
/// caret and a range alike. A caret leaves existing runs untouched.
///
/// Out-of-range selections fail before anything is mutated.
pub fn apply_deltas(
    document: &mut Document,
    selection: Selection,
    deltas: &FormatDeltas,
    input_format: &mut CharFormat,
) -> Result<()> {
    document.apply_char_format(selection, &deltas.char)?;
    if !deltas.block.is_empty() {
        document.apply_block_format(selection, &deltas.block)?;
    }
    *input_format = input_format.merge(&deltas.char);
    Ok(())
}

/// Resolve `intent` and apply it to `selection`.
///
/// Invalid intents (e.g. a point size outside the configured bounds) are
/// rejected without touching the document or the input format.
pub fn apply_intent(
    document: &mut Document,
    selection: Selection,
    intent: &FormatIntent,
    input_format: &mut CharFormat,
    options: &SessionOptions,
) -> Result<()> {
    let deltas = match intent.resolve(options) {
        Ok(deltas) => deltas,
        Err(err) => {
            emit_log(LogLevel::Warn, &format!("rejected {intent:?}: {err}"));
            return Err(err);
        }
    };
    if deltas.is_empty() {
        emit_log(LogLevel::Debug, &format!("{intent:?} resolved to no change"));
        return Ok(());
    }
    apply_deltas(document, selection, &deltas, input_format)?;
    emit_log(
        LogLevel::Debug,
        &format!("applied {intent:?} to {selection}"),
    );
    Ok(())
}
