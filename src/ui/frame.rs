//! In-memory frame buffer.
//!
//! Components write ANSI output into a [`Frame`] instead of stdout, and
//! register the clickable cells they draw in the frame's [`HitMap`]. The
//! renderer prints the finished frame once. Frames can be appended to each
//! other, which is how a cached region is combined with freshly drawn ones.

use super::hitmap::{ClickTarget, HitMap};

/// ANSI output plus the click targets drawn into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    out: String,
    hits: HitMap,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-based `row` and `col`.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.out.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn put(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Writes `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.out.extend(std::iter::repeat(' ').take(count));
    }

    /// Marks `width` cells starting at 1-based `row` and `col` as `target`.
    pub fn register(&mut self, row: usize, col: usize, width: usize, target: ClickTarget) {
        self.hits.register(row, col, width, target);
    }

    /// Appends another frame's output and click targets.
    pub fn append(&mut self, other: &Self) {
        self.out.push_str(&other.out);
        self.hits.extend(&other.hits);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    #[must_use]
    pub const fn hits(&self) -> &HitMap {
        &self.hits
    }

    #[must_use]
    pub fn into_parts(self) -> (String, HitMap) {
        (self.out, self.hits)
    }
}

/// Removes ANSI escape sequences, leaving the visible text.
#[cfg(test)]
pub(crate) fn strip_ansi(text: &str) -> String {
    use regex::Regex;
    use std::sync::LazyLock;

    static ESCAPE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("escape pattern is valid"));

    ESCAPE.replace_all(text, "").into_owned()
}
