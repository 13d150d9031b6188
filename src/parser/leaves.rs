//! Leaf blocks: paragraphs, ATX headings, fenced code and thematic breaks.

use tracing::trace;

use crate::nodes::{Ast, AstNode, NodeCodeBlock, NodeHeading, NodeValue};
use crate::parser::block::{BlockMatch, BlockParser, BlockState};
use crate::{scanners, strings, Arena};

/// Replace a block's accumulated content with a single `Text` child.
fn content_to_text<'a>(arena: &'a Arena<'a>, node: &'a AstNode<'a>) {
    let (content, sourcepos) = {
        let mut ast = node.data.borrow_mut();
        let mut content = std::mem::take(&mut ast.content);
        strings::rtrim(&mut content);
        (content, ast.sourcepos)
    };
    if content.is_empty() {
        return;
    }

    let mut text = Ast::new(NodeValue::Text(content), sourcepos.start);
    text.sourcepos = sourcepos;
    text.open = false;
    node.append(arena.alloc(text.into()));
}

/// Paragraphs are only ever opened by the driver for lines no other parser
/// claimed, and continue over any non-blank line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParagraphParser;

impl BlockParser for ParagraphParser {
    fn handles(&self, value: &NodeValue) -> bool {
        matches!(*value, NodeValue::Paragraph)
    }

    fn matches<'a>(&self, state: &mut BlockState<'a, '_, '_>) -> BlockMatch {
        if state.line.is_blank() {
            return BlockMatch::Unmatched;
        }
        if state.block.is_none() {
            state.line.skip_spaces();
            state.block = Some(state.new_node(NodeValue::Paragraph));
        }
        BlockMatch::Continue
    }

    fn close<'a>(&self, arena: &'a Arena<'a>, node: &'a AstNode<'a>) {
        content_to_text(arena, node);
    }
}

/// `#` to `######` headings.  A heading is complete on the line it opens.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtxHeadingParser;

impl BlockParser for AtxHeadingParser {
    fn handles(&self, value: &NodeValue) -> bool {
        matches!(*value, NodeValue::Heading(..))
    }

    fn matches<'a>(&self, state: &mut BlockState<'a, '_, '_>) -> BlockMatch {
        if state.block.is_some() {
            return BlockMatch::Unmatched;
        }

        let before = state.line.save();
        state.line.skip_leading_spaces3();
        let rest = state.line.rest();
        let Some(level) = scanners::atx_heading_start(rest) else {
            state.line.restore(before);
            return BlockMatch::Unmatched;
        };

        let node = state.new_node(NodeValue::Heading(NodeHeading { level: level as u8 }));
        node.data.borrow_mut().content =
            strings::chop_trailing_hashes(strings::trim_slice(&rest[level..])).to_string();
        state.line.skip_to_end();
        state.block = Some(node);
        BlockMatch::Continue
    }

    fn close<'a>(&self, arena: &'a Arena<'a>, node: &'a AstNode<'a>) {
        content_to_text(arena, node);
    }
}

/// Code fenced by three or more backticks or tildes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FencedCodeParser;

impl FencedCodeParser {
    fn open<'a>(&self, state: &mut BlockState<'a, '_, '_>) -> BlockMatch {
        let before = state.line.save();
        let fence_offset = state.line.skip_leading_spaces3();
        let rest = state.line.rest();
        let Some(fence_length) = scanners::open_code_fence(rest) else {
            state.line.restore(before);
            return BlockMatch::Unmatched;
        };

        let ncb = NodeCodeBlock {
            fence_char: rest.as_bytes()[0],
            fence_length,
            fence_offset,
            info: strings::trim_slice(&rest[fence_length..]).to_string(),
            literal: String::new(),
        };
        state.block = Some(state.new_node(NodeValue::CodeBlock(ncb)));
        state.line.skip_to_end();
        BlockMatch::Continue
    }
}

impl BlockParser for FencedCodeParser {
    fn handles(&self, value: &NodeValue) -> bool {
        matches!(*value, NodeValue::CodeBlock(..))
    }

    fn matches<'a>(&self, state: &mut BlockState<'a, '_, '_>) -> BlockMatch {
        let Some(node) = state.block else {
            return self.open(state);
        };
        let (fence_char, fence_length, fence_offset) = match node.data.borrow().value {
            NodeValue::CodeBlock(ref ncb) => (ncb.fence_char, ncb.fence_length, ncb.fence_offset),
            _ => return BlockMatch::Unmatched,
        };

        let before = state.line.save();
        if state.line.indent() <= 3 {
            state.line.skip_spaces();
            let rest = state.line.rest();
            if let Some(len) = scanners::close_code_fence(rest) {
                if rest.as_bytes()[0] == fence_char && len >= fence_length {
                    trace!(line = state.line_number, "code fence closed");
                    state.line.skip_to_end();
                    return BlockMatch::LastDiscard;
                }
            }
            state.line.restore(before);
        }

        state.line.skip_columns(fence_offset);
        BlockMatch::Continue
    }

    fn close<'a>(&self, _arena: &'a Arena<'a>, node: &'a AstNode<'a>) {
        let mut ast = node.data.borrow_mut();
        let content = std::mem::take(&mut ast.content);
        if let NodeValue::CodeBlock(ref mut ncb) = ast.value {
            ncb.literal = content;
        }
    }
}

/// `***`, `---` and `___`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThematicBreakParser;

impl BlockParser for ThematicBreakParser {
    fn handles(&self, value: &NodeValue) -> bool {
        matches!(*value, NodeValue::ThematicBreak)
    }

    fn matches<'a>(&self, state: &mut BlockState<'a, '_, '_>) -> BlockMatch {
        if state.block.is_some() {
            return BlockMatch::Unmatched;
        }

        let before = state.line.save();
        state.line.skip_leading_spaces3();
        if !scanners::thematic_break(state.line.rest()) {
            state.line.restore(before);
            return BlockMatch::Unmatched;
        }

        state.block = Some(state.new_node(NodeValue::ThematicBreak));
        state.line.skip_to_end();
        BlockMatch::Continue
    }
}
