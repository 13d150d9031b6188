//! Recognisers for the leaf block syntax the driver needs.
//!
//! Each function takes the line from its first non-indentation byte (the
//! caller has already checked the indentation limit) without a line ending.

use crate::ctype::{is_fence_char, is_space_or_tab, is_thematic_break_char};
use crate::strings;

fn run_length(bytes: &[u8], c: u8) -> usize {
    bytes.iter().take_while(|&&b| b == c).count()
}

/// Whether the line is a thematic break: three or more of the same `-`, `*`
/// or `_`, with only spaces or tabs in between and after.
pub fn thematic_break(line: &str) -> bool {
    let bytes = line.as_bytes();
    let Some(&c) = bytes.first() else {
        return false;
    };
    if !is_thematic_break_char(c) {
        return false;
    }

    let mut count = 0;
    for &b in bytes {
        if b == c {
            count += 1;
        } else if !is_space_or_tab(b) {
            return false;
        }
    }
    count >= 3
}

/// Matches the opening sequence of an ATX heading, returning the level.
pub fn atx_heading_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let level = run_length(bytes, b'#');
    if !(1..=6).contains(&level) {
        return None;
    }
    match bytes.get(level) {
        None => Some(level),
        Some(&b) if is_space_or_tab(b) => Some(level),
        _ => None,
    }
}

/// Matches an opening code fence, returning the fence length.
pub fn open_code_fence(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let c = *bytes.first()?;
    if !is_fence_char(c) {
        return None;
    }
    let len = run_length(bytes, c);
    if len < 3 {
        return None;
    }
    if c == b'`' && bytes[len..].contains(&b'`') {
        return None;
    }
    Some(len)
}

/// Matches a closing code fence, returning the fence length.
pub fn close_code_fence(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let c = *bytes.first()?;
    if !is_fence_char(c) {
        return None;
    }
    let len = run_length(bytes, c);
    if len < 3 || !strings::is_blank(&line[len..]) {
        return None;
    }
    Some(len)
}
