//! Structural rules shared by the preset compositions.

use rand::Rng;

use crate::{Length, ThemePalette};

/// Entrance delay step between repeated Grid and List items.
pub const STAGGER_STEP_MS: u64 = 100;

pub const GRID_DEFAULT_ITEMS: usize = 6;
pub const GRID_DEFAULT_COLUMNS: &str = "repeat(auto-fit, minmax(250px, 1fr))";
pub const GRID_DEFAULT_MOBILE_COLUMNS: &str = "1fr";
pub const LIST_DEFAULT_ITEMS: usize = 5;

/// Article paragraphs draw their line count from this inclusive range.
pub const ARTICLE_PARAGRAPH_LINES: std::ops::RangeInclusive<usize> = 2..=4;

/// Replies render at most this many levels below the root comment.
pub const MAX_COMMENT_DEPTH: usize = 1;

/// Animation delay for the item at `index`.
pub fn stagger_delay_ms(index: usize) -> u64 {
    index as u64 * STAGGER_STEP_MS
}

/// Line count for each article paragraph. Drawn fresh on every render.
pub fn article_paragraph_lines<R: Rng + ?Sized>(rng: &mut R, paragraphs: usize) -> Vec<usize> {
    (0..paragraphs)
        .map(|_| rng.gen_range(ARTICLE_PARAGRAPH_LINES))
        .collect()
}

/// One column of a table row placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableCell {
    pub flex: u32,
    pub width: Length,
}

/// Cells for a row of `columns` columns: the first cell is twice as wide,
/// the final cell's text covers 60% of it.
pub fn table_cells(columns: usize) -> Vec<TableCell> {
    (0..columns)
        .map(|i| TableCell {
            flex: if i == 0 { 2 } else { 1 },
            width: if i + 1 == columns {
                Length::Percent(60.0)
            } else {
                Length::FULL
            },
        })
        .collect()
}

/// Options for a comment placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommentSpec {
    pub show_replies: bool,
    pub reply_count: usize,
    pub show_actions: bool,
}

impl Default for CommentSpec {
    fn default() -> Self {
        Self {
            show_replies: false,
            reply_count: 2,
            show_actions: true,
        }
    }
}

/// A comment and the replies rendered beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub depth: usize,
    pub show_actions: bool,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Number of comments in this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.replies.iter().map(CommentNode::count).sum::<usize>()
    }
}

impl CommentSpec {
    /// Specs for the direct replies. Replies never show their own replies.
    pub fn replies(&self) -> Vec<CommentSpec> {
        if !self.show_replies {
            return Vec::new();
        }
        vec![
            CommentSpec {
                show_replies: false,
                ..*self
            };
            self.reply_count
        ]
    }

    /// Build the rendered comment tree top-down.
    pub fn tree(&self) -> CommentNode {
        self.tree_at(0)
    }

    fn tree_at(&self, depth: usize) -> CommentNode {
        let replies = if depth < MAX_COMMENT_DEPTH {
            self.replies().iter().map(|r| r.tree_at(depth + 1)).collect()
        } else {
            Vec::new()
        };
        CommentNode {
            depth,
            show_actions: self.show_actions,
            replies,
        }
    }
}

/// Inline style for the padded frame around a preset.
pub fn frame_style(show_border: bool, palette: &ThemePalette) -> String {
    let border = if show_border {
        format!("1px solid {}", palette.border_color)
    } else {
        "none".to_string()
    };
    format!("--skeleton-frame-border: {border};")
}
