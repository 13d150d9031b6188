//! The interface between the document driver and each kind of block.

use std::fmt::{self, Debug};

use crate::nodes::{Ast, AstNode, NodeValue};
use crate::parser::line::Line;
use crate::parser::options::Options;
use crate::Arena;

/// The outcome of offering a line to a block parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMatch {
    /// The line belongs to the block in [`BlockState::block`]; the cursor has
    /// been advanced to the first column not consumed by it.
    Continue,

    /// The parser does not claim the line.  The cursor is where it was when
    /// the parser was called.
    Unmatched,

    /// The block must be closed, and the line is consumed by closing it.
    LastDiscard,
}

/// Everything a [`BlockParser`] sees while deciding about one line.
pub struct BlockState<'a, 's, 'l> {
    /// The arena new nodes are allocated in.
    pub arena: &'a Arena<'a>,

    /// Parse options.
    pub options: &'s Options,

    /// The cursor over the current line, positioned at the start of this
    /// parser's window.
    pub line: &'s mut Line<'l>,

    /// The 1-based number of the current line.
    pub line_number: usize,

    /// On input, the open block this parser owns at the current depth, or
    /// `None` when the driver is asking for a new block.  On a `Continue`
    /// result, the block the line now belongs to; a parser may replace it
    /// with a block it has just opened.
    pub block: Option<&'a AstNode<'a>>,

    /// The innermost open block below `block`, if any.
    pub last_block: Option<&'a AstNode<'a>>,
}

impl<'a, 's, 'l> BlockState<'a, 's, 'l> {
    pub(crate) fn new(
        arena: &'a Arena<'a>,
        options: &'s Options,
        line: &'s mut Line<'l>,
        line_number: usize,
        block: Option<&'a AstNode<'a>>,
        last_block: Option<&'a AstNode<'a>>,
    ) -> Self {
        BlockState {
            arena,
            options,
            line,
            line_number,
            block,
            last_block,
        }
    }

    /// Allocate a detached node whose source position starts at the given
    /// 0-based column of the current line.
    pub fn new_node_at(&self, value: NodeValue, column: usize) -> &'a AstNode<'a> {
        let start = (self.line_number, column + 1).into();
        self.arena.alloc(Ast::new(value, start).into())
    }

    /// Allocate a detached node starting at the cursor.
    pub fn new_node(&self, value: NodeValue) -> &'a AstNode<'a> {
        self.new_node_at(value, self.line.column())
    }
}

impl Debug for BlockState<'_, '_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockState")
            .field("line", &self.line)
            .field("line_number", &self.line_number)
            .field("block", &self.block.map(|b| b.data.borrow().value.xml_node_name()))
            .finish_non_exhaustive()
    }
}

/// A parser for one kind of block.
///
/// The driver calls [`matches`](BlockParser::matches) with `state.block` set
/// to an open block this parser owns to ask whether the line continues it,
/// and with `state.block` unset to ask whether the line opens a new block.
/// Newly opened blocks are returned detached in `state.block`; the driver
/// attaches them.
pub trait BlockParser: Debug {
    /// Whether blocks holding `value` belong to this parser.
    fn handles(&self, value: &NodeValue) -> bool;

    /// Decide what the current line means for this kind of block.
    fn matches<'a>(&self, state: &mut BlockState<'a, '_, '_>) -> BlockMatch;

    /// Called once when an open block owned by this parser is closed.
    fn close<'a>(&self, _arena: &'a Arena<'a>, _node: &'a AstNode<'a>) {}
}
