//! Byte classification used by the block scanners.
//!
//! Only ASCII bytes carry block-level meaning, so every predicate works on
//! `u8` and treats any non-ASCII byte as ordinary content.

macro_rules! character_set {
    () => {{
        [false; 256]
    }};

    ($value:literal $(,$rest:literal)*) => {{
        const A: &[u8] = $value;
        let mut a = character_set!($($rest),*);
        let mut i = 0;
        while i < A.len() {
            a[A[i] as usize] = true;
            i += 1;
        }
        a
    }}
}

const SPACE_OR_TAB: [bool; 256] = character_set!(b" \t");
const LINE_END: [bool; 256] = character_set!(b"\r\n");
const BULLET_MARKER: [bool; 256] = character_set!(b"-+*");
const THEMATIC_BREAK: [bool; 256] = character_set!(b"-*_");
const FENCE: [bool; 256] = character_set!(b"`~");

pub fn is_space_or_tab(ch: u8) -> bool {
    SPACE_OR_TAB[ch as usize]
}

pub fn is_line_end_char(ch: u8) -> bool {
    LINE_END[ch as usize]
}

pub fn isdigit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub fn is_bullet_marker(ch: u8) -> bool {
    BULLET_MARKER[ch as usize]
}

pub fn is_thematic_break_char(ch: u8) -> bool {
    THEMATIC_BREAK[ch as usize]
}

pub fn is_fence_char(ch: u8) -> bool {
    FENCE[ch as usize]
}
