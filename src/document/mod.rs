//! Document model: block sequence, caret, and change notification
//!
//! The pagination engine only ever sees block-level structure through the
//! [`DocumentModel`] capability trait. [`Document`] is the in-memory
//! implementation used by the headless surface, the WASM binding, and tests;
//! a browser host backed by a real rich-text engine implements the trait
//! directly.

mod block;
mod page_break;

pub use block::{Block, BlockKind};
pub use page_break::{BandKind, MarkerBand, MarkerBox, PageBreakMarker, RenderMode};

use crate::error::{PaginationError, Result};
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// Callback fired after every committed content mutation, with the new version
pub type ContentListener = Box<dyn FnMut(u64)>;

/// Insertion point as (block index, byte offset within the block's text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Caret {
    pub block: usize,
    pub offset: usize,
}

impl Caret {
    pub fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// Capabilities the pagination engine needs from a rich-text engine
pub trait DocumentModel {
    /// Current block sequence
    fn content(&self) -> &[Block];

    /// Monotonic counter bumped by every committed mutation
    fn version(&self) -> u64;

    /// Current insertion point
    fn caret(&self) -> Caret;

    /// Insert an empty block of `kind` at `at`, returning the index it landed on
    fn insert_block(&mut self, kind: BlockKind, at: Caret) -> Result<usize>;

    /// Register a callback fired after each committed mutation
    fn on_content_changed(&mut self, listener: ContentListener);

    /// Number of page-break markers currently in the content
    fn marker_count(&self) -> usize {
        self.content().iter().filter(|b| b.is_page_break()).count()
    }
}

/// In-memory document
pub struct Document {
    blocks: Vec<Block>,
    caret: Caret,
    /// Monotonic version counter
    version: u64,
    listeners: SmallVec<[ContentListener; 2]>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("blocks", &self.blocks)
            .field("caret", &self.caret)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new document holding a single empty paragraph
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::paragraph("")],
            caret: Caret::default(),
            version: 0,
            listeners: SmallVec::new(),
        }
    }

    /// Create a document with one paragraph per line of `text`
    pub fn from_text(text: &str) -> Self {
        let mut doc = Self::new();
        doc.blocks = text.split('\n').map(Block::paragraph).collect();
        doc
    }

    /// Create a document from an explicit block list
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let mut doc = Self::new();
        if !blocks.is_empty() {
            doc.blocks = blocks;
        }
        doc
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.text().is_empty() && !b.is_page_break())
    }

    /// Full plain text, one line per textual block
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .filter(|b| b.kind.is_textual())
            .map(|b| b.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indices of all page-break markers
    pub fn marker_positions(&self) -> Vec<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_page_break())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Move the caret. The position is validated when it is used.
    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = caret;
    }

    /// Put the caret at the end of the last block
    pub fn move_caret_to_end(&mut self) {
        let block = self.blocks.len() - 1;
        self.caret = Caret::new(block, self.blocks[block].text().len());
    }

    /// Insert text at the caret and advance it
    pub fn insert_text(&mut self, text: &str) -> Result<()> {
        let at = self.checked_caret(self.caret)?;
        let block = self.blocks[at.block]
            .text_mut()
            .ok_or_else(|| PaginationError::insertion_rejected("caret rests on a page break"))?;
        block.insert_str(at.offset, text);
        self.caret.offset += text.len();
        self.commit();
        Ok(())
    }

    /// Append a block at the end of the document
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
        self.commit();
    }

    /// Remove a block. The last remaining block is replaced by an empty paragraph.
    pub fn remove_block(&mut self, index: usize) -> Option<Block> {
        if index >= self.blocks.len() {
            return None;
        }
        let removed = self.blocks.remove(index);
        if self.blocks.is_empty() {
            self.blocks.push(Block::paragraph(""));
        }
        if self.caret.block > index {
            self.caret.block -= 1;
        } else if self.caret.block == index {
            self.caret.offset = 0;
        }
        self.caret.block = self.caret.block.min(self.blocks.len() - 1);
        self.commit();
        Some(removed)
    }

    /// Drop all content
    pub fn clear(&mut self) {
        self.blocks = vec![Block::paragraph("")];
        self.caret = Caret::default();
        self.commit();
    }

    /// Validate a caret against the current content
    fn checked_caret(&self, at: Caret) -> Result<Caret> {
        let block = self.blocks.get(at.block).ok_or_else(|| {
            PaginationError::insertion_rejected(format!(
                "caret block {} is past the end of the document ({} blocks)",
                at.block,
                self.blocks.len()
            ))
        })?;

        if block.is_page_break() {
            if at.offset != 0 {
                return Err(PaginationError::insertion_rejected(
                    "page break has no text to place a caret in",
                ));
            }
            return Ok(at);
        }

        let text = block.text();
        let on_boundary = at.offset == text.len()
            || text.grapheme_indices(true).any(|(idx, _)| idx == at.offset);
        if !on_boundary {
            return Err(PaginationError::insertion_rejected(format!(
                "offset {} is not a grapheme boundary in block {}",
                at.offset, at.block
            )));
        }

        Ok(at)
    }

    /// Bump the version and tell every listener
    fn commit(&mut self) {
        self.version += 1;
        let version = self.version;
        for listener in self.listeners.iter_mut() {
            listener(version);
        }
    }
}

impl DocumentModel for Document {
    fn content(&self) -> &[Block] {
        &self.blocks
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn caret(&self) -> Caret {
        self.caret
    }

    fn insert_block(&mut self, kind: BlockKind, at: Caret) -> Result<usize> {
        let at = self.checked_caret(at)?;
        if self.blocks[at.block].is_page_break() {
            return Err(PaginationError::insertion_rejected(
                "caret rests on a page break",
            ));
        }

        let text_len = self.blocks[at.block].text().len();
        let inserted = if at.offset == text_len {
            // End of block: the new block follows it
            self.blocks.insert(at.block + 1, Block::empty(kind));
            at.block + 1
        } else if at.offset == 0 {
            self.blocks.insert(at.block, Block::empty(kind));
            at.block
        } else {
            // Mid-block: split the text around the new block
            let current = &mut self.blocks[at.block];
            let tail = current
                .text_mut()
                .map(|text| text.split_off(at.offset))
                .unwrap_or_default();
            let tail_block = Block::with_text(current.kind, tail);
            self.blocks.insert(at.block + 1, Block::empty(kind));
            self.blocks.insert(at.block + 2, tail_block);
            at.block + 1
        };

        // Keep the caret in a text block after the inserted one
        if !kind.is_textual() && inserted + 1 >= self.blocks.len() {
            self.blocks.push(Block::paragraph(""));
        }
        self.caret = if kind.is_textual() {
            Caret::new(inserted, 0)
        } else {
            Caret::new(inserted + 1, 0)
        };

        self.commit();
        Ok(inserted)
    }

    fn on_content_changed(&mut self, listener: ContentListener) {
        self.listeners.push(listener);
    }
}
