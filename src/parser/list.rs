//! Lists and list items.
//!
//! One parser owns both node kinds.  The driver only ever offers it list
//! items: a [`NodeValue::List`] is transparent while open blocks are being
//! matched, and a list is created, reused or replaced as a side effect of
//! scanning an item marker.

use tracing::{debug, trace};

use crate::ctype::{is_bullet_marker, is_space_or_tab, isdigit};
use crate::nodes::{AstNode, ListDelimType, ListType, NodeItem, NodeList, NodeValue};
use crate::parser::block::{BlockMatch, BlockParser, BlockState};
use crate::parser::line::Line;
use crate::scanners;
use crate::{node_matches, Arena};

/// Ordered list numbers longer than this are not list markers.
const MAX_ORDERED_DIGITS: usize = 9;

/// Columns of whitespace after a marker at which the remainder is treated
/// as indented content instead of item indentation.
const MAX_MARKER_PADDING: usize = 4;

/// The block parser for lists and list items.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListParser;

/// What the marker scanner found.
struct ListMarker {
    list: NodeList,
    column: usize,
    number_of_spaces: isize,
}

fn with_list<R>(list: &AstNode<'_>, f: impl FnOnce(&mut NodeList) -> R) -> Option<R> {
    match list.data.borrow_mut().value {
        NodeValue::List(ref mut nl) => Some(f(nl)),
        _ => None,
    }
}

fn with_item<R>(item: &AstNode<'_>, f: impl FnOnce(&mut NodeItem) -> R) -> Option<R> {
    match item.data.borrow_mut().value {
        NodeValue::Item(ref mut ni) => Some(f(ni)),
        _ => None,
    }
}

impl BlockParser for ListParser {
    fn handles(&self, value: &NodeValue) -> bool {
        matches!(*value, NodeValue::List(..) | NodeValue::Item(..))
    }

    fn matches<'a>(&self, state: &mut BlockState<'a, '_, '_>) -> BlockMatch {
        let pre_indent = state.line.window_start();
        let saved = state.line.save();

        let item = match state.block {
            Some(node) if node_matches!(node, NodeValue::Item(..)) => node,
            _ => return self.try_parse_list_item(state, pre_indent),
        };
        let (Some(list), Some(ni)) = (item.parent(), with_item(item, |ni| *ni)) else {
            return BlockMatch::Unmatched;
        };

        if state.line.is_blank() {
            return self.match_blank_line(state, item, list);
        }

        let continued = if ni.is_pending() {
            self.confirm_pending_item(state.line, item, pre_indent, -ni.number_of_spaces)
        } else {
            Self::reaches_content(state.line, pre_indent, ni.number_of_spaces as usize)
        };
        if continued {
            trace!(line = state.line_number, "list item continued");
            with_list(list, |nl| nl.consecutive_blank_lines = 0);
            return BlockMatch::Continue;
        }

        state.line.restore(saved);
        self.try_parse_list_item(state, pre_indent)
    }

    fn close<'a>(&self, _arena: &'a Arena<'a>, node: &'a AstNode<'a>) {
        let Some(followed) = with_item(node, |ni| ni.is_followed_by_blank_line) else {
            return;
        };
        if followed && node.children().nth(1).is_some() {
            if let Some(list) = node.parent() {
                debug!("item with a blank line between its blocks loosens its list");
                with_list(list, |nl| nl.loose = true);
            }
        }
    }
}

impl ListParser {
    fn match_blank_line<'a>(
        &self,
        state: &mut BlockState<'a, '_, '_>,
        item: &'a AstNode<'a>,
        list: &'a AstNode<'a>,
    ) -> BlockMatch {
        let in_open_fence = !state.options.parse.count_fenced_blank_lines
            && state
                .last_block
                .is_some_and(|b| node_matches!(b, NodeValue::CodeBlock(..)));
        let sole_item = list.children().nth(1).is_none();

        let blank_lines = with_list(list, |nl| {
            if !in_open_fence {
                nl.consecutive_blank_lines += 1;
            }
            nl.consecutive_blank_lines
        })
        .unwrap_or_default();

        if !in_open_fence && blank_lines == 1 && sole_item {
            with_item(item, |ni| ni.is_followed_by_blank_line = true);
        }

        if blank_lines > 1 {
            debug!(line = state.line_number, "list ended by blank lines");
            return BlockMatch::LastDiscard;
        }
        BlockMatch::Continue
    }

    /// An item that opened with an empty first line takes its first content
    /// line only at exactly the indentation recorded for it.  Anything
    /// further indented than the code-indent limit belongs to the item as
    /// literal content.
    fn confirm_pending_item<'a>(
        &self,
        line: &mut Line,
        item: &'a AstNode<'a>,
        pre_indent: usize,
        expected: isize,
    ) -> bool {
        let start_column = line.column();
        let before = line.save();
        let mut checkpoint = None;
        let mut count = 0;

        let mut c = line.peek();
        while c.is_some_and(is_space_or_tab) {
            c = line.advance();
            count = (pre_indent + line.column() - start_column) as isize;
            if count == expected {
                checkpoint = Some(line.save());
            } else if count >= MAX_MARKER_PADDING as isize {
                line.restore(checkpoint.unwrap_or(before));
                count = expected;
                break;
            }
        }

        if count != expected {
            return false;
        }
        debug!(columns = count, "pending list item confirmed");
        with_item(item, |ni| ni.number_of_spaces = count);
        true
    }

    /// Consume whitespace until the item's content column is reached.
    fn reaches_content(line: &mut Line, pre_indent: usize, required: usize) -> bool {
        let start_column = line.column();
        let mut c = line.peek();
        while c.is_some_and(is_space_or_tab) {
            c = line.advance();
            if pre_indent + line.column() - start_column >= required {
                return true;
            }
        }
        false
    }

    /// Open a new item at the cursor, in the current list if the marker
    /// matches it or in a new detached list otherwise.
    fn try_parse_list_item<'a>(
        &self,
        state: &mut BlockState<'a, '_, '_>,
        pre_indent: usize,
    ) -> BlockMatch {
        let before = state.line.save();
        let Some(marker) = scan_marker(state.line, pre_indent) else {
            state.line.restore(before);
            return BlockMatch::Unmatched;
        };

        let current_list = state
            .block
            .filter(|b| node_matches!(b, NodeValue::Item(..)))
            .and_then(|b| b.parent())
            .filter(|list| with_list(list, |nl| nl.same_marker(&marker.list)).unwrap_or(false));
        let list = match current_list {
            Some(list) => list,
            None => {
                debug!(
                    line = state.line_number,
                    ordered = marker.list.list_type == ListType::Ordered,
                    "opening list"
                );
                state.new_node_at(NodeValue::List(marker.list), marker.column)
            }
        };

        with_list(list, |nl| {
            if nl.consecutive_blank_lines > 0 {
                nl.loose = true;
                nl.consecutive_blank_lines = 0;
            }
            if marker.number_of_spaces < 0 {
                nl.consecutive_blank_lines = 1;
            }
        });

        let item = state.new_node_at(
            NodeValue::Item(NodeItem {
                number_of_spaces: marker.number_of_spaces,
                is_followed_by_blank_line: false,
            }),
            marker.column,
        );
        list.append(item);
        trace!(
            line = state.line_number,
            number_of_spaces = marker.number_of_spaces,
            "list item opened"
        );

        state.block = Some(item);
        BlockMatch::Continue
    }
}

/// Scan a list marker and the whitespace after it.  On `None` the cursor is
/// left somewhere inside the line; the caller restores it.
fn scan_marker(line: &mut Line, pre_indent: usize) -> Option<ListMarker> {
    let mut pre_indent = pre_indent + line.skip_leading_spaces3();

    // "- - -" is a thematic break even where it could start an item.
    if scanners::thematic_break(line.rest()) {
        return None;
    }

    let column = line.column();
    let mut list = NodeList::default();
    match line.peek()? {
        c if is_bullet_marker(c) => {
            list.list_type = ListType::Bullet;
            list.bullet_char = c;
            pre_indent += 1;
        }
        c if isdigit(c) => {
            let mut start: usize = 0;
            let mut digits = 0;
            let mut c = Some(c);
            while let Some(d) = c.filter(|&d| isdigit(d)) {
                digits += 1;
                if digits > MAX_ORDERED_DIGITS {
                    return None;
                }
                start = start * 10 + (d - b'0') as usize;
                pre_indent += 1;
                c = line.advance();
            }
            list.delimiter = c.and_then(ListDelimType::from_byte)?;
            list.list_type = ListType::Ordered;
            list.start = start;
            pre_indent += 1;
        }
        _ => return None,
    }
    line.advance();

    let number_of_spaces = if line.is_blank() {
        -(pre_indent as isize + 1)
    } else {
        (pre_indent + scan_marker_padding(line)? + 1) as isize
    };

    Some(ListMarker {
        list,
        column,
        number_of_spaces,
    })
}

/// Consume the whitespace after a marker, returning the padding counted
/// towards the item's content column beyond the one mandatory space.  Five
/// or more columns count as one, leaving the rest as content.
fn scan_marker_padding(line: &mut Line) -> Option<usize> {
    let after_marker = line.save();
    let mut first_column = None;
    let mut one_space = None;
    let mut padding = 0;

    for _ in 0..=MAX_MARKER_PADDING {
        if !line.peek().is_some_and(is_space_or_tab) {
            break;
        }
        let column = line.column();
        padding = column - *first_column.get_or_insert(column);
        if padding == 1 {
            one_space = Some(line.save());
        } else if padding >= MAX_MARKER_PADDING {
            padding = 0;
            match one_space {
                Some(snapshot) => line.restore(snapshot),
                None => {
                    line.restore(after_marker);
                    line.advance();
                }
            }
            break;
        }
        line.advance();
    }

    first_column.map(|_| padding)
}
