//! The styled document: an ordered, non-empty sequence of blocks.

use crate::document::block::Block;
use crate::document::selection::Selection;
use crate::error::{Error, Result};
use crate::markup;
use crate::style::{BlockFormat, BlockFormatDelta, CharFormat, CharFormatDelta};
use std::ops::Range;

/// Styled text organized as paragraphs ([`Block`]s) of [`Run`](super::Run)s.
///
/// All positions are character offsets in the linear offset space: the
/// characters of each block in order, with one extra offset for every block
/// separator. An offset equal to a block's length addresses the end of that
/// block; the next offset is the start of the following block.
///
/// Mutations keep the run invariants: runs within a block are maximally
/// coalesced, and only the single run of an empty block may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(CharFormat::default(), BlockFormat::default())
    }
}

impl Document {
    /// Create a document with one empty block.
    #[must_use]
    pub fn new(char_format: CharFormat, block_format: BlockFormat) -> Self {
        Self {
            blocks: vec![Block::new(char_format, block_format)],
        }
    }

    /// Create a document from blocks. An empty list yields one default block.
    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            return Self::default();
        }
        Self { blocks }
    }

    /// Import a document from markup produced by [`Document::serialize`].
    ///
    /// Declarations missing from the markup fall back to `defaults`.
    pub fn from_markup(markup: &str, defaults: &CharFormat) -> Result<Self> {
        markup::parse(markup, defaults)
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn block(&self, index: usize) -> Result<&Block> {
        self.blocks.get(index).ok_or(Error::BlockOutOfRange {
            index,
            count: self.blocks.len(),
        })
    }

    fn block_mut(&mut self, index: usize) -> Result<&mut Block> {
        let count = self.blocks.len();
        self.blocks
            .get_mut(index)
            .ok_or(Error::BlockOutOfRange { index, count })
    }

    /// Total length in offsets, counting one per block separator.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        let text: usize = self.blocks.iter().map(Block::len_chars).sum();
        text + self.blocks.len().saturating_sub(1)
    }

    /// Check if the document holds a single empty block.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.len() == 1 && self.blocks[0].is_empty()
    }

    /// Plain text with blocks joined by `'\n'`.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Offsets covered by a block, excluding its separator.
    pub fn block_range(&self, index: usize) -> Result<Range<usize>> {
        self.block(index)?;
        let start: usize = self.blocks[..index]
            .iter()
            .map(|block| block.len_chars() + 1)
            .sum();
        Ok(start..start + self.blocks[index].len_chars())
    }

    /// Map a document offset to `(block_index, offset_within_block)`.
    pub fn locate(&self, offset: usize) -> Result<(usize, usize)> {
        let mut start = 0;
        for (index, block) in self.blocks.iter().enumerate() {
            let end = start + block.len_chars();
            if offset <= end {
                return Ok((index, offset - start));
            }
            start = end + 1;
        }
        Err(Error::OutOfRange {
            offset,
            len: self.len_chars(),
        })
    }

    /// Character format a caret at `offset` picks up.
    pub fn char_format_at(&self, offset: usize) -> Result<&CharFormat> {
        let (block, at) = self.locate(offset)?;
        self.blocks[block].char_format_at(at)
    }

    /// Paragraph format of the block containing `offset`.
    pub fn block_format_at(&self, offset: usize) -> Result<BlockFormat> {
        let (block, _) = self.locate(offset)?;
        Ok(self.blocks[block].format())
    }

    /// Divide the run containing `offset` (relative to the block) in two.
    /// No-op when `offset` already falls on a run boundary.
    pub fn split_run_at(&mut self, block_index: usize, offset: usize) -> Result<()> {
        self.block_mut(block_index)?.split_run_at(offset)?;
        Ok(())
    }

    /// Coalesce adjacent runs with equal formats in one block.
    pub fn merge_adjacent_runs(&mut self, block_index: usize) -> Result<()> {
        self.block_mut(block_index)?.merge_adjacent_runs();
        Ok(())
    }

    /// Split the block containing `offset` into two paragraphs.
    pub fn split_block_at(&mut self, offset: usize) -> Result<()> {
        let (block, at) = self.locate(offset)?;
        let tail = self.blocks[block].split_off(at)?;
        self.blocks.insert(block + 1, tail);
        Ok(())
    }

    /// Merge `delta` into the format of every character in `selection`.
    ///
    /// Runs are split at the selection boundaries and re-coalesced. An empty
    /// paragraph whose separator lies inside the selection takes the delta
    /// on its empty-line format. Text is never altered, and a caret touches
    /// nothing.
    pub fn apply_char_format(
        &mut self,
        selection: Selection,
        delta: &CharFormatDelta,
    ) -> Result<()> {
        self.check_selection(selection)?;
        if selection.is_caret() {
            return Ok(());
        }
        let mut start = 0;
        for block in &mut self.blocks {
            if start >= selection.end() {
                break;
            }
            let len = block.len_chars();
            if len == 0 {
                // an empty paragraph is covered when its separator is
                if selection.start() <= start {
                    block.apply_empty_line_format(delta);
                }
            } else if let Some(range) = selection.intersect(start, start + len) {
                block.apply_char_format(range.start - start, range.end - start, delta)?;
            }
            start += len + 1;
        }
        Ok(())
    }

    /// Merge `delta` into the paragraph format of every block the selection
    /// touches, including the block holding a caret.
    pub fn apply_block_format(
        &mut self,
        selection: Selection,
        delta: &BlockFormatDelta,
    ) -> Result<()> {
        self.check_selection(selection)?;
        let (first, _) = self.locate(selection.start())?;
        let (last, _) = self.locate(selection.end())?;
        for block in &mut self.blocks[first..=last] {
            block.apply_block_format(delta);
        }
        Ok(())
    }

    /// Insert text at `offset` with `format`, returning the offset just past
    /// the inserted text.
    ///
    /// Line breaks (`\n`, `\r\n`, `\r`) start new paragraphs that inherit the
    /// paragraph format of the block they were split from. Characters markup
    /// cannot carry are rejected with [`Error::InvalidChar`] before anything
    /// changes.
    pub fn insert_text(&mut self, offset: usize, text: &str, format: &CharFormat) -> Result<usize> {
        let (mut block, mut at) = self.locate(offset)?;
        if let Some(c) = text.chars().find(|&c| !markup::is_text_char(c)) {
            return Err(Error::InvalidChar(c));
        }
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                let tail = self.blocks[block].split_off(at)?;
                self.blocks.insert(block + 1, tail);
                block += 1;
                at = 0;
            }
            self.blocks[block].insert(at, line, format)?;
            at += line.chars().count();
        }
        Ok(offset + text.chars().count())
    }

    /// Delete the text in `selection`. Removing a block separator joins the
    /// two blocks; the joined block keeps the first block's paragraph format.
    pub fn remove(&mut self, selection: Selection) -> Result<()> {
        self.check_selection(selection)?;
        if selection.is_caret() {
            return Ok(());
        }
        let (first, start) = self.locate(selection.start())?;
        let (last, end) = self.locate(selection.end())?;
        if first == last {
            return self.blocks[first].remove(start, end);
        }
        let first_len = self.blocks[first].len_chars();
        self.blocks[first].remove(start, first_len)?;
        self.blocks[last].remove(0, end)?;
        let tail = self.blocks.remove(last);
        self.blocks.drain(first + 1..last);
        self.blocks[first].append(tail);
        Ok(())
    }

    /// Delete the grapheme cluster before the caret, or the block separator
    /// when the caret is at the start of a block. Returns the new caret.
    pub fn delete_backward(&mut self, offset: usize) -> Result<usize> {
        let (block, at) = self.locate(offset)?;
        if offset == 0 {
            return Ok(0);
        }
        let start = if at == 0 {
            offset - 1
        } else {
            offset - (at - self.blocks[block].prev_grapheme_offset(at)?)
        };
        self.remove(Selection::new(start, offset))?;
        Ok(start)
    }

    /// Render the document to markup (see [`crate::markup`]).
    #[must_use]
    pub fn serialize(&self) -> String {
        markup::serialize(self)
    }

    fn check_selection(&self, selection: Selection) -> Result<()> {
        let len = self.len_chars();
        if selection.end() > len {
            return Err(Error::OutOfRange {
                offset: selection.end(),
                len,
            });
        }
        Ok(())
    }
}
