//! A resumable, backtrackable scan position over a single physical line.
//!
//! Block parsers consume a line's leading indentation and markers through a
//! [`Line`].  Speculative scans take a [`Snapshot`] first and hand it back to
//! [`Line::restore`] on every path that rejects, so the next parser sees the
//! line exactly where its own window begins.

use crate::ctype::is_space_or_tab;
use crate::strings;

pub(crate) const TAB_STOP: usize = 4;

/// A saved scan position: byte offset and tab-expanded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    offset: usize,
    column: usize,
}

/// A cursor over one line of input, without its line ending.
#[derive(Debug, Clone)]
pub struct Line<'l> {
    text: &'l str,
    offset: usize,
    column: usize,
    window_start: usize,
    /// Byte offset after the last character that is not a space or tab.
    content_end: usize,
}

impl<'l> Line<'l> {
    /// Create a cursor at the start of `text`.  A trailing line ending, if
    /// any, is not part of the line.
    pub fn new(text: &'l str) -> Self {
        let text = strings::strip_line_ending(text);
        Line {
            text,
            offset: 0,
            column: 0,
            window_start: 0,
            content_end: strings::rtrim_slice(text).len(),
        }
    }

    /// The full text of the line.
    pub fn text(&self) -> &'l str {
        self.text
    }

    /// The byte offset of the current character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The 0-based, tab-expanded column of the current character.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The current character, or `None` at the end of the line.
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.offset).copied()
    }

    /// Move past the current character and return the new current one.
    ///
    /// A tab advances the column to the next multiple of the tab stop.
    pub fn advance(&mut self) -> Option<u8> {
        match self.peek() {
            Some(b'\t') => {
                self.column += TAB_STOP - (self.column % TAB_STOP);
                self.offset += 1;
            }
            Some(_) => {
                self.column += 1;
                self.offset += 1;
            }
            None => {}
        }
        self.peek()
    }

    /// Remember the current position.
    pub fn save(&self) -> Snapshot {
        Snapshot {
            offset: self.offset,
            column: self.column,
        }
    }

    /// Return to a position saved earlier on this line.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.offset = snapshot.offset;
        self.column = snapshot.column;
    }

    /// Whether everything from the current position to the end of the line
    /// is spaces or tabs.
    pub fn is_blank(&self) -> bool {
        self.offset >= self.content_end
    }

    /// Whether the whole line is spaces or tabs, however much of it has been
    /// consumed.
    pub fn is_blank_line(&self) -> bool {
        self.content_end == 0
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> &'l str {
        &self.text[self.offset..]
    }

    /// Begin a new parser's scan window at the current position.
    pub fn mark_window_start(&mut self) {
        self.window_start = self.column;
    }

    /// The column at which the current scan window began: every column
    /// before it has been consumed by enclosing blocks.
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Width in columns of the whitespace at the current position, without
    /// consuming it.
    pub fn indent(&self) -> usize {
        let mut probe = self.clone();
        while probe.peek().is_some_and(is_space_or_tab) {
            probe.advance();
        }
        probe.column - self.column
    }

    /// Consume up to three columns of leading spaces or tabs, returning the
    /// number of columns consumed.  A tab that would cross the limit is left
    /// in place.
    pub fn skip_leading_spaces3(&mut self) -> usize {
        self.skip_columns(3)
    }

    /// Consume spaces or tabs while the total stays within `max` columns.
    pub fn skip_columns(&mut self, max: usize) -> usize {
        let begin = self.column;
        while let Some(c) = self.peek() {
            if !is_space_or_tab(c) {
                break;
            }
            let next = if c == b'\t' {
                self.column + TAB_STOP - (self.column % TAB_STOP)
            } else {
                self.column + 1
            };
            if next - begin > max {
                break;
            }
            self.advance();
        }
        self.column - begin
    }

    /// Consume all spaces and tabs at the current position.
    pub fn skip_spaces(&mut self) {
        while self.peek().is_some_and(is_space_or_tab) {
            self.advance();
        }
    }

    /// Consume the rest of the line.
    pub fn skip_to_end(&mut self) {
        while self.peek().is_some() {
            self.advance();
        }
    }
}
