//! A CommonMark block-structure parser.
//!
//! Lines are fed one at a time through a set of [`BlockParser`]s which build
//! an arena-allocated tree of blocks: lists and list items, paragraphs, ATX
//! headings, fenced code blocks and thematic breaks.  Inline content is kept
//! as raw text.
//!
//! ```rust
//! use cmblocks::{markdown_to_outline, Options};
//! assert_eq!(markdown_to_outline("- a\n\n- b\n", &Options::default()),
//!            "document\n  list bullet=- loose\n    item\n      paragraph\n        \
//!             text \"a\"\n    item\n      paragraph\n        text \"b\"\n");
//! ```
//!
//! Use [`parse_document`] to get at the tree itself:
//!
//! ```rust
//! use cmblocks::{parse_document, Arena, Options};
//! use cmblocks::nodes::{ListType, NodeValue};
//!
//! let arena = Arena::new();
//! let root = parse_document(&arena, "1) one\n2) two\n", &Options::default());
//!
//! for node in root.descendants() {
//!     if let NodeValue::List(ref nl) = node.data.borrow().value {
//!         assert_eq!(nl.list_type, ListType::Ordered);
//!         assert_eq!(nl.start, 1);
//!         assert!(!nl.loose);
//!     }
//! }
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    unused_import_braces
)]

pub mod arena_tree;
mod ctype;
pub mod nodes;
mod outline;
pub mod parser;
mod scanners;
mod strings;

pub use crate::outline::format_document;
pub use crate::parser::{
    parse_document, BlockMatch, BlockParser, BlockState, Line, ListParser, Options, Parse,
    Snapshot,
};

/// Convenience type alias for arena types used throughout the API.
pub type Arena<'a> = typed_arena::Arena<nodes::AstNode<'a>>;

/// A reference to a node in the block tree.
pub type Node<'a> = &'a nodes::AstNode<'a>;

/// Parse a Markdown document and render its block tree as an outline.
pub fn markdown_to_outline(md: &str, options: &Options) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, md, options);
    let mut out = String::new();
    format_document(root, &mut out).unwrap();
    out
}
