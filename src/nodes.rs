//! The block-level AST.

use crate::arena_tree::Node;
use std::cell::RefCell;

/// The core AST node enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    /// The root of every document.  Contains **blocks**.
    Document,

    /// **Block**.  A [list](https://spec.commonmark.org/0.31.2/#lists).  Contains
    /// [list items](https://spec.commonmark.org/0.31.2/#list-items), all sharing the
    /// list's marker identity.
    ///
    /// ``` md
    /// * An unordered list
    /// * Another item
    ///
    /// 1. An ordered list
    /// 2. Another item
    /// ```
    List(NodeList),

    /// **Block**.  A list item.  Contains other **blocks**.
    Item(NodeItem),

    /// **Block**. A [paragraph](https://spec.commonmark.org/0.31.2/#paragraphs).
    /// Once closed, contains a single `Text` with its unparsed inline content.
    Paragraph,

    /// **Block**. An [ATX heading](https://spec.commonmark.org/0.31.2/#atx-headings).
    /// Contains a single `Text`.
    Heading(NodeHeading),

    /// **Block**. A [fenced code block](https://spec.commonmark.org/0.31.2/#fenced-code-blocks).
    /// Its literal content is held in the value, not in child nodes.
    CodeBlock(NodeCodeBlock),

    /// **Block**. A [thematic break](https://spec.commonmark.org/0.31.2/#thematic-breaks).
    ThematicBreak,

    /// Raw inline content of a paragraph or heading.  Inline syntax is not
    /// interpreted.
    Text(String),
}

/// The kind of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum ListType {
    /// A bullet list, i.e. an unordered list.
    #[default]
    Bullet,

    /// An ordered list.
    Ordered,
}

/// The delimiter for ordered lists, i.e. the character which appears after each number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum ListDelimType {
    /// A period character `.`.
    #[default]
    Period,

    /// A paren character `)`.
    Paren,
}

impl ListDelimType {
    pub(crate) fn from_byte(c: u8) -> Option<ListDelimType> {
        match c {
            b'.' => Some(ListDelimType::Period),
            b')' => Some(ListDelimType::Paren),
            _ => None,
        }
    }

    /// The delimiter as it appears in the source.
    pub fn as_char(&self) -> char {
        match *self {
            ListDelimType::Period => '.',
            ListDelimType::Paren => ')',
        }
    }
}

/// The metadata of a list; the kind of list, the marker used and so on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeList {
    /// The kind of list (bullet (unordered) or ordered).
    pub list_type: ListType,

    /// For bullet lists, the character used for each bullet.
    pub bullet_char: u8,

    /// For ordered lists, the ordinal the list starts at.
    pub start: usize,

    /// For ordered lists, the delimiter after each number.
    pub delimiter: ListDelimType,

    /// Whether the list is [loose](https://spec.commonmark.org/0.31.2/#loose), i.e.
    /// whether its items are separated by blank lines, or an item holds two
    /// blocks with a blank line between them.
    pub loose: bool,

    /// Length of the run of blank lines seen while this list was being
    /// continued.  Parse-time state; reset by any non-blank continuation or
    /// new item.
    pub consecutive_blank_lines: usize,
}

impl NodeList {
    /// Whether an item opened with `other`'s marker may join this list.
    pub fn same_marker(&self, other: &NodeList) -> bool {
        self.list_type == other.list_type
            && match self.list_type {
                ListType::Bullet => self.bullet_char == other.bullet_char,
                ListType::Ordered => self.delimiter == other.delimiter,
            }
    }
}

/// The metadata of a list item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeItem {
    /// The column, counted from the start of the line, that continuation
    /// lines must reach to belong to this item.
    ///
    /// A negative value means the item opened with nothing after its marker;
    /// its magnitude is the exact indentation the first non-blank line must
    /// have to confirm the item.
    pub number_of_spaces: isize,

    /// Set when this item was the only one in its list and the line after it
    /// was blank.
    pub is_followed_by_blank_line: bool,
}

impl NodeItem {
    /// Whether the item is still waiting for its first content line.
    pub fn is_pending(&self) -> bool {
        self.number_of_spaces < 0
    }
}

/// The metadata of a heading.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHeading {
    /// The level of the header; from 1 to 6.
    pub level: u8,
}

/// The metadata and data of a fenced code block.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct NodeCodeBlock {
    /// The fence character itself (`` ` `` or `~`).
    pub fence_char: u8,

    /// The length of the fence.
    pub fence_length: usize,

    /// The indentation of the opening fence, stripped from each content line.
    pub fence_offset: usize,

    /// The [info string](https://spec.commonmark.org/0.31.2/#info-string) after the
    /// opening fence, if any.
    pub info: String,

    /// The literal contents of the code block.
    pub literal: String,
}

impl NodeValue {
    /// Indicates whether this node is a block node or inline node.
    pub fn block(&self) -> bool {
        !matches!(*self, NodeValue::Text(..))
    }

    /// Whether the type the node is of can contain child blocks.
    pub fn is_container(&self) -> bool {
        matches!(
            *self,
            NodeValue::Document | NodeValue::List(..) | NodeValue::Item(..)
        )
    }

    /// Whether the node accumulates raw lines while open.
    pub fn accepts_lines(&self) -> bool {
        matches!(*self, NodeValue::Paragraph | NodeValue::CodeBlock(..))
    }

    /// Return a reference to the text of a `Text` node, or `None`.
    pub fn text(&self) -> Option<&String> {
        match *self {
            NodeValue::Text(ref t) => Some(t),
            _ => None,
        }
    }

    pub(crate) fn xml_node_name(&self) -> &'static str {
        match *self {
            NodeValue::Document => "document",
            NodeValue::List(..) => "list",
            NodeValue::Item(..) => "item",
            NodeValue::Paragraph => "paragraph",
            NodeValue::Heading(..) => "heading",
            NodeValue::CodeBlock(..) => "code_block",
            NodeValue::ThematicBreak => "thematic_break",
            NodeValue::Text(..) => "text",
        }
    }
}

/// A single node in the block tree.
///
/// The struct contains metadata about the node's position in the original
/// document, and the core enum, `NodeValue`.
#[derive(Debug, Clone)]
pub struct Ast {
    /// The node value itself.
    pub value: NodeValue,

    /// The positions in the source document this node comes from.
    pub sourcepos: Sourcepos,

    pub(crate) content: String,
    pub(crate) open: bool,
}

/// Represents the position in the source Markdown this node was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sourcepos {
    /// The line and column of the first character of this node.
    pub start: LineColumn,
    /// The line and column of the last character of this node.
    pub end: LineColumn,
}

impl std::fmt::Display for Sourcepos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column,
        )
    }
}

impl From<(usize, usize, usize, usize)> for Sourcepos {
    fn from(sp: (usize, usize, usize, usize)) -> Sourcepos {
        Sourcepos {
            start: LineColumn {
                line: sp.0,
                column: sp.1,
            },
            end: LineColumn {
                line: sp.2,
                column: sp.3,
            },
        }
    }
}

/// Represents the 1-based line and column positions of a given character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineColumn {
    /// The 1-based line number of the character.
    pub line: usize,
    /// The 1-based column number of the character.
    pub column: usize,
}

impl From<(usize, usize)> for LineColumn {
    fn from(lc: (usize, usize)) -> LineColumn {
        LineColumn {
            line: lc.0,
            column: lc.1,
        }
    }
}

impl Ast {
    /// Create a new AST node with the given value.
    pub fn new(value: NodeValue, start: LineColumn) -> Self {
        Ast {
            value,
            content: String::new(),
            sourcepos: (start.line, start.column, start.line, 0).into(),
            open: true,
        }
    }

    /// Whether the block is still accepting lines.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// The type of a node within the document.
///
/// It is bound by the lifetime `'a`, which corresponds to the `Arena` nodes are allocated in.
/// Child `Ast`s are wrapped in `RefCell` for interior mutability.
pub type AstNode<'a> = Node<'a, RefCell<Ast>>;

impl<'a> From<Ast> for AstNode<'a> {
    fn from(ast: Ast) -> Self {
        Node::new(RefCell::new(ast))
    }
}

pub(crate) fn last_child_is_open<'a>(node: &'a AstNode<'a>) -> bool {
    node.last_child().map_or(false, |n| n.data.borrow().open)
}

/// Returns true if the given node can contain a node with the given value.
pub fn can_contain_type<'a>(node: &'a AstNode<'a>, child: &NodeValue) -> bool {
    if let NodeValue::Document = *child {
        return false;
    }

    match node.data.borrow().value {
        NodeValue::Document | NodeValue::Item(..) => {
            child.block() && !matches!(*child, NodeValue::Item(..))
        }

        NodeValue::List(..) => matches!(*child, NodeValue::Item(..)),

        NodeValue::Paragraph | NodeValue::Heading(..) => !child.block(),

        _ => false,
    }
}

/// Shorthand for checking if a node's value matches the given expression.
///
/// Note this will `borrow()` the provided node's data attribute while doing
/// the check, which will fail if the node is already mutably borrowed.
#[macro_export]
macro_rules! node_matches {
    ($node:expr, $( $pat:pat_param )|+) => {{
        matches!(
            $node.data.borrow().value,
            $( $pat )|+
        )
    }};
}
