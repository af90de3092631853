//! Blocks: paragraphs made of runs.

use crate::document::run::{Run, byte_offset};
use crate::error::{Error, Result};
use crate::style::{BlockFormat, BlockFormatDelta, CharFormat, CharFormatDelta};

/// A paragraph: an ordered, non-empty sequence of [`Run`]s plus a
/// [`BlockFormat`].
///
/// Offsets passed to block methods are character offsets relative to the
/// start of the block, in `[0, len_chars()]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    runs: Vec<Run>,
    format: BlockFormat,
}

impl Block {
    /// Create an empty block whose placeholder run carries `char_format`.
    #[must_use]
    pub fn new(char_format: CharFormat, format: BlockFormat) -> Self {
        Self {
            runs: vec![Run::empty(char_format)],
            format,
        }
    }

    /// Build a block from runs, dropping empty runs and coalescing equal
    /// neighbours. `fallback` formats the placeholder run when `runs` is empty.
    #[must_use]
    pub fn from_runs(runs: Vec<Run>, format: BlockFormat, fallback: CharFormat) -> Self {
        let mut block = Self { runs, format };
        if block.runs.is_empty() {
            block.runs.push(Run::empty(fallback));
        }
        block.normalize();
        block
    }

    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    #[must_use]
    pub const fn format(&self) -> BlockFormat {
        self.format
    }

    /// Length in characters, excluding the block separator.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.runs.iter().map(Run::len_chars).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(Run::is_empty)
    }

    /// Plain text of the block.
    #[must_use]
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Format a caret at `offset` picks up: the character before it, or the
    /// first run at the start of the block.
    pub fn char_format_at(&self, offset: usize) -> Result<&CharFormat> {
        self.check_offset(offset)?;
        let mut end = 0;
        for run in &self.runs {
            end += run.len_chars();
            if offset == 0 || offset <= end {
                return Ok(run.format());
            }
        }
        Ok(self.runs[0].format())
    }

    /// Split the run containing `offset` so that a run boundary falls on it.
    ///
    /// Returns the index of the run that starts at `offset` (`runs().len()`
    /// when `offset` is the end of the block). No-op when `offset` already
    /// sits on a boundary.
    pub fn split_run_at(&mut self, offset: usize) -> Result<usize> {
        self.check_offset(offset)?;
        let mut start = 0;
        for i in 0..self.runs.len() {
            if offset == start {
                return Ok(i);
            }
            let end = start + self.runs[i].len_chars();
            if offset < end {
                let tail = self.runs[i].split_off(offset - start);
                self.runs.insert(i + 1, tail);
                return Ok(i + 1);
            }
            start = end;
        }
        Ok(self.runs.len())
    }

    /// Coalesce adjacent runs with equal formats. Idempotent.
    pub fn merge_adjacent_runs(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match merged.last_mut() {
                Some(prev) if prev.format() == run.format() => prev.push_str(run.text()),
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }

    /// Merge `delta` into every run inside `[start, end)`.
    pub(crate) fn apply_char_format(
        &mut self,
        start: usize,
        end: usize,
        delta: &CharFormatDelta,
    ) -> Result<()> {
        let first = self.split_run_at(start)?;
        let last = self.split_run_at(end)?;
        for run in &mut self.runs[first..last] {
            let merged = run.format().merge(delta);
            run.set_format(merged);
        }
        self.merge_adjacent_runs();
        Ok(())
    }

    /// Merge `delta` into the placeholder run of an empty block.
    pub(crate) fn apply_empty_line_format(&mut self, delta: &CharFormatDelta) {
        if let [run] = self.runs.as_mut_slice() {
            if run.is_empty() {
                let merged = run.format().merge(delta);
                run.set_format(merged);
            }
        }
    }

    pub(crate) fn apply_block_format(&mut self, delta: &BlockFormatDelta) {
        self.format = self.format.merge(delta);
    }

    /// Insert `text` (which must not contain a block separator) at `offset`.
    pub(crate) fn insert(&mut self, offset: usize, text: &str, format: &CharFormat) -> Result<()> {
        if text.is_empty() {
            return self.check_offset(offset);
        }
        let index = self.split_run_at(offset)?;
        self.runs.insert(index, Run::new(text, format.clone()));
        self.normalize();
        Ok(())
    }

    /// Remove the characters in `[start, end)`.
    pub(crate) fn remove(&mut self, start: usize, end: usize) -> Result<()> {
        let first = self.split_run_at(start)?;
        let last = self.split_run_at(end)?;
        let removed: Vec<Run> = self.runs.drain(first..last).collect();
        if self.runs.is_empty() {
            // keep the format of the first removed run for the empty line
            if let Some(run) = removed.first() {
                self.runs.push(Run::empty(run.format().clone()));
            }
        }
        self.normalize();
        Ok(())
    }

    /// Split the block at `offset`, keeping the head and returning the tail.
    ///
    /// Both halves keep this block's paragraph format. A half left without
    /// text keeps the format of the run next to the split point.
    pub(crate) fn split_off(&mut self, offset: usize) -> Result<Self> {
        let index = self.split_run_at(offset)?;
        let mut tail = self.runs.split_off(index);
        if tail.is_empty() {
            let format = self.char_format_at(offset)?.clone();
            tail.push(Run::empty(format));
        }
        if self.runs.is_empty() {
            self.runs.push(Run::empty(tail[0].format().clone()));
        }
        self.normalize();
        Ok(Self::from_runs(tail, self.format, CharFormat::default()))
    }

    /// Append the runs of `other`, dropping its paragraph format.
    pub(crate) fn append(&mut self, other: Self) {
        self.runs.extend(other.runs);
        self.normalize();
    }

    /// Char offset of the grapheme boundary before `offset`.
    pub(crate) fn prev_grapheme_offset(&self, offset: usize) -> Result<usize> {
        use unicode_segmentation::UnicodeSegmentation;

        self.check_offset(offset)?;
        let text = self.text();
        let head = &text[..byte_offset(&text, offset)];
        let byte = head
            .grapheme_indices(true)
            .next_back()
            .map_or(0, |(byte, _)| byte);
        Ok(head[..byte].chars().count())
    }

    /// Drop empty runs (keeping one if nothing else is left) and coalesce.
    fn normalize(&mut self) {
        if self.runs.iter().any(|run| !run.is_empty()) {
            self.runs.retain(|run| !run.is_empty());
        } else {
            self.runs.truncate(1);
        }
        self.merge_adjacent_runs();
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        let len = self.len_chars();
        if offset > len {
            return Err(Error::OutOfRange { offset, len });
        }
        Ok(())
    }
}
