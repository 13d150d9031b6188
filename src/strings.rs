use crate::ctype::{is_line_end_char, is_space_or_tab};

/// Remove a trailing `\n`, `\r\n` or `\r` from a line.
pub fn strip_line_ending(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut end = bytes.len();
    if end > 0 && bytes[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    &line[..end]
}

pub fn ltrim_slice(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_space_or_tab(bytes[i]) {
        i += 1;
    }
    &s[i..]
}

pub fn rtrim_slice(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut len = bytes.len();
    while len > 0 && (is_space_or_tab(bytes[len - 1]) || is_line_end_char(bytes[len - 1])) {
        len -= 1;
    }
    &s[..len]
}

pub fn trim_slice(s: &str) -> &str {
    rtrim_slice(ltrim_slice(s))
}

pub fn rtrim(s: &mut String) {
    let len = rtrim_slice(s).len();
    s.truncate(len);
}

pub fn is_blank(s: &str) -> bool {
    s.bytes().all(|b| is_space_or_tab(b) || is_line_end_char(b))
}

/// Remove an ATX heading's optional closing sequence: a run of `#` preceded
/// by a space or tab (or making up the whole content), plus trailing spaces.
pub fn chop_trailing_hashes(line: &str) -> &str {
    let line = rtrim_slice(line);
    let bytes = line.as_bytes();

    let mut n = bytes.len();
    while n > 0 && bytes[n - 1] == b'#' {
        n -= 1;
    }
    if n == bytes.len() {
        return line;
    }

    if n == 0 {
        return "";
    }
    if is_space_or_tab(bytes[n - 1]) {
        return rtrim_slice(&line[..n]);
    }

    line
}
