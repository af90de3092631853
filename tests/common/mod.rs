#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use coursetext::{Alignment, CharFormat, Document, LogLevel, set_log_callback};
use std::sync::Once;

/// Route the crate's log callback into `tracing` and install a subscriber.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!("{message}"),
            LogLevel::Info => tracing::info!("{message}"),
            LogLevel::Warn => tracing::warn!("{message}"),
            LogLevel::Error => tracing::error!("{message}"),
        });
    });
}

/// Format of every character, in document order (separators skipped).
pub fn char_formats(doc: &Document) -> Vec<(char, CharFormat)> {
    doc.blocks()
        .iter()
        .flat_map(|block| block.runs())
        .flat_map(|run| run.text().chars().map(|c| (c, run.format().clone())))
        .collect()
}

/// Alignment of every block, in order.
pub fn alignments(doc: &Document) -> Vec<Alignment> {
    doc.blocks().iter().map(|b| b.format().alignment).collect()
}

/// Check the structural invariants every mutation must keep.
pub fn assert_run_invariants(doc: &Document) {
    assert!(doc.block_count() >= 1, "document has no blocks");
    for (i, block) in doc.blocks().iter().enumerate() {
        let runs = block.runs();
        assert!(!runs.is_empty(), "block {i} has no runs");
        if runs.len() > 1 {
            assert!(
                runs.iter().all(|r| !r.is_empty()),
                "block {i} has an empty run next to text"
            );
        }
        for pair in runs.windows(2) {
            assert_ne!(
                pair[0].format(),
                pair[1].format(),
                "block {i} has adjacent runs with equal formats"
            );
        }
        assert!(
            runs.iter().all(|r| !r.text().contains('\n')),
            "block {i} run holds a separator"
        );
    }
    let joined: String = doc
        .blocks()
        .iter()
        .map(|b| b.text())
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(joined, doc.plain_text());
    assert_eq!(joined.chars().count(), doc.len_chars());
}
