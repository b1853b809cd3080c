//! Block-level nodes of the document content

/// The kind of block element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockKind {
    /// Regular paragraph
    #[default]
    Paragraph,
    /// Heading with level (1-6)
    Heading { level: u8 },
    /// Manual or automatic page boundary
    PageBreak,
}

impl BlockKind {
    /// Build a heading kind, clamping the level into 1..=6
    pub fn heading(level: u8) -> Self {
        BlockKind::Heading {
            level: level.clamp(1, 6),
        }
    }

    /// Get the line height multiplier for this block kind
    pub fn line_height_multiplier(&self) -> f32 {
        match self {
            BlockKind::Paragraph => 1.0,
            BlockKind::Heading { level } => match level {
                1 => 1.5,
                2 => 1.4,
                3 => 1.3,
                _ => 1.2,
            },
            BlockKind::PageBreak => 0.0,
        }
    }

    /// Get the spacing after this block (in line heights)
    pub fn spacing_after(&self) -> f32 {
        match self {
            BlockKind::Paragraph => 1.0,
            BlockKind::Heading { .. } => 0.5,
            BlockKind::PageBreak => 0.0,
        }
    }

    /// Whether the block can hold text and a caret
    pub fn is_textual(&self) -> bool {
        !matches!(self, BlockKind::PageBreak)
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self, BlockKind::PageBreak)
    }
}

/// A block in the document's node sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Plain text of the block. Always empty for page breaks.
    text: String,
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::heading(level),
            text: text.into(),
        }
    }

    pub fn page_break() -> Self {
        Self {
            kind: BlockKind::PageBreak,
            text: String::new(),
        }
    }

    /// An empty block of the given kind
    pub fn empty(kind: BlockKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    /// A block of the given kind holding `text`; page breaks drop the text
    pub fn with_text(kind: BlockKind, text: impl Into<String>) -> Self {
        let text = if kind.is_textual() {
            text.into()
        } else {
            String::new()
        };
        Self { kind, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn text_mut(&mut self) -> Option<&mut String> {
        if self.kind.is_textual() {
            Some(&mut self.text)
        } else {
            None
        }
    }

    pub fn is_page_break(&self) -> bool {
        self.kind.is_page_break()
    }
}
