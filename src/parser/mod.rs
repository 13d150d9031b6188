//! The document driver.
//!
//! Input is split into lines, and each line is offered first to the chain of
//! open blocks, then to the parsers that can open new blocks, and finally
//! attributed as paragraph or code text.

mod block;
mod leaves;
mod line;
mod list;
pub mod options;

use tracing::trace;

use crate::nodes::{last_child_is_open, Ast, NodeValue};
use crate::{node_matches, strings, Arena, Node};

pub use self::block::{BlockMatch, BlockParser, BlockState};
pub use self::leaves::{AtxHeadingParser, FencedCodeParser, ParagraphParser, ThematicBreakParser};
pub use self::line::{Line, Snapshot};
pub use self::list::ListParser;
pub use self::options::{Options, Parse};

// Very deeply nested lists can cause quadratic performance issues.
// This constant is used in open_new_blocks() to limit the nesting
// depth. It is unlikely that a non-contrived markdown document will
// be nested this deeply.
const MAX_LIST_DEPTH: usize = 100;

/// Parse a Markdown document to a block tree.
///
/// ```rust
/// # use cmblocks::{parse_document, Arena, Options};
/// # use cmblocks::nodes::NodeValue;
/// let arena = Arena::new();
/// let root = parse_document(&arena, "- a\n- b\n", &Options::default());
/// let list = root.first_child().unwrap();
/// assert!(matches!(list.data.borrow().value, NodeValue::List(..)));
/// assert_eq!(list.children().count(), 2);
/// ```
pub fn parse_document<'a>(arena: &'a Arena<'a>, md: &str, options: &Options) -> Node<'a> {
    let root = arena.alloc(Ast::new(NodeValue::Document, (1, 1).into()).into());
    Parser::new(arena, root, options).parse(md)
}

struct Parser<'a, 'o> {
    arena: &'a Arena<'a>,
    options: &'o Options,
    root: Node<'a>,
    openers: [&'static dyn BlockParser; 4],
    paragraph: ParagraphParser,
    line_number: usize,
    last_line_length: usize,
}

impl<'a, 'o> Parser<'a, 'o> {
    fn new(arena: &'a Arena<'a>, root: Node<'a>, options: &'o Options) -> Self {
        Parser {
            arena,
            options,
            root,
            // Tried in this order when looking for a new block.
            openers: [
                &ThematicBreakParser,
                &AtxHeadingParser,
                &FencedCodeParser,
                &ListParser,
            ],
            paragraph: ParagraphParser,
            line_number: 0,
            last_line_length: 0,
        }
    }

    fn parse(mut self, s: &str) -> Node<'a> {
        let sb = s.as_bytes();
        let end = s.len();
        let mut ix = 0;
        let matcher = jetscii::bytes!(b'\r', b'\n');

        while ix < end {
            let mut eol = match matcher.find(&sb[ix..]) {
                Some(offset) => ix + offset,
                None => end,
            };
            if eol < end {
                if sb[eol] == b'\r' {
                    eol += 1;
                    if eol < end && sb[eol] == b'\n' {
                        eol += 1;
                    }
                } else if sb[eol] == b'\n' {
                    eol += 1;
                }
            }

            let mut line = &s[ix..eol];
            if ix == 0 {
                line = line.strip_prefix('\u{feff}').unwrap_or(line);
            }
            self.process_line(line);

            ix = eol;
        }

        self.finalize_document();
        self.root
    }

    fn parser_for(&self, value: &NodeValue) -> Option<&dyn BlockParser> {
        if self.paragraph.handles(value) {
            return Some(&self.paragraph);
        }
        self.openers.iter().copied().find(|p| p.handles(value))
    }

    fn process_line(&mut self, text: &str) {
        self.line_number += 1;
        let mut line = Line::new(text);

        if let Some((container, replaced)) = self.check_open_blocks(&mut line) {
            let mut container = container;
            let opened = self.open_new_blocks(&mut container, &mut line) || replaced;
            self.add_text_to_container(container, opened, &mut line);
        }

        for node in self.tip().ancestors() {
            self.touch(node, &line);
        }
        self.last_line_length = line.text().len();
    }

    /////////////////////////
    // Check open blocks   //
    /////////////////////////

    /// Offer the line to every open block from the root down.  Returns the
    /// last container that accepted it, and whether the list engine replaced
    /// an item along the way; `None` if a block consumed the line by closing.
    fn check_open_blocks(&self, line: &mut Line) -> Option<(Node<'a>, bool)> {
        let mut container = self.root;
        let tip = self.tip();

        while last_child_is_open(container) {
            let Some(child) = container.last_child() else {
                break;
            };
            if node_matches!(child, NodeValue::List(..)) {
                container = child;
                continue;
            }
            let parser = {
                let ast = child.data.borrow();
                self.parser_for(&ast.value)
            };
            let Some(parser) = parser else {
                break;
            };

            line.mark_window_start();
            let mut state = BlockState::new(
                self.arena,
                self.options,
                line,
                self.line_number,
                Some(child),
                Some(tip).filter(|tip| !tip.same_node(child)),
            );
            let result = parser.matches(&mut state);
            let block = state.block;

            match (result, block) {
                (BlockMatch::Continue, Some(block)) if !block.same_node(child) => {
                    self.replace_item(child, block);
                    return Some((block, true));
                }
                (BlockMatch::Continue, _) => container = child,
                (BlockMatch::Unmatched, _) => break,
                (BlockMatch::LastDiscard, _) => {
                    self.touch(child, line);
                    self.discard(child);
                    return None;
                }
            }
        }

        // New blocks never go directly into a list.
        if node_matches!(container, NodeValue::List(..)) {
            if let Some(parent) = container.parent() {
                container = parent;
            }
        }
        Some((container, false))
    }

    /// A new item took the place of `old`: close it, and its list too if the
    /// new item started a list of its own.
    fn replace_item(&self, old: Node<'a>, new: Node<'a>) {
        trace!(line = self.line_number, "list item replaced by a sibling");
        self.close_subtree(old);

        let (Some(old_list), Some(new_list)) = (old.parent(), new.parent()) else {
            return;
        };
        if !new_list.same_node(old_list) {
            self.finalize(old_list);
            if let Some(parent) = old_list.parent() {
                parent.append(new_list);
            }
        }
    }

    fn discard(&self, node: Node<'a>) {
        let is_item = node_matches!(node, NodeValue::Item(..));
        self.close_subtree(node);
        if is_item {
            if let Some(list) = node.parent() {
                self.finalize(list);
            }
        }
    }

    /////////////////////
    // Open new blocks //
    /////////////////////

    fn open_new_blocks(&self, container: &mut Node<'a>, line: &mut Line) -> bool {
        let mut opened = false;
        let mut depth = container
            .ancestors()
            .filter(|n| node_matches!(n, NodeValue::List(..)))
            .count();

        while !node_matches!(
            container,
            NodeValue::CodeBlock(..) | NodeValue::Heading(..) | NodeValue::ThematicBreak
        ) {
            if depth >= MAX_LIST_DEPTH {
                break;
            }

            line.mark_window_start();
            let mut state = BlockState::new(
                self.arena,
                self.options,
                line,
                self.line_number,
                None,
                None,
            );
            let found = self.openers.iter().find_map(|p| match p.matches(&mut state) {
                BlockMatch::Continue => state.block.take(),
                BlockMatch::Unmatched | BlockMatch::LastDiscard => None,
            });
            let Some(block) = found else {
                break;
            };

            let parent = if container.data.borrow().value.is_container() {
                *container
            } else {
                container.parent().unwrap_or(self.root)
            };
            self.attach(parent, block);
            opened = true;

            *container = block;
            if node_matches!(block, NodeValue::Item(..)) {
                depth += 1;
            }
        }

        opened
    }

    /// Close whatever is still open under `parent` and add `block` there.  A
    /// new item arrives inside its list, which is added in its place.
    fn attach(&self, parent: Node<'a>, block: Node<'a>) {
        self.close_open_children(parent);
        let top = block.parent().unwrap_or(block);
        if top.parent().is_none() {
            parent.append(top);
        }
    }

    ////////////////////
    // Attribute text //
    ////////////////////

    fn add_text_to_container(&self, container: Node<'a>, opened: bool, line: &mut Line) {
        if node_matches!(container, NodeValue::Heading(..) | NodeValue::ThematicBreak) {
            self.touch(container, line);
            self.finalize(container);
            return;
        }

        if node_matches!(container, NodeValue::CodeBlock(..)) {
            if !opened {
                self.add_line(container, line);
            }
            return;
        }

        if line.is_blank() {
            self.close_open_children(container);
            return;
        }

        let tip = self.tip();
        if !opened && !tip.same_node(container) && node_matches!(tip, NodeValue::Paragraph) {
            trace!(line = self.line_number, "lazy paragraph continuation");
            self.add_line(tip, line);
            return;
        }

        if node_matches!(container, NodeValue::Paragraph) {
            self.add_line(container, line);
            return;
        }

        self.close_open_children(container);
        line.mark_window_start();
        let mut state = BlockState::new(
            self.arena,
            self.options,
            line,
            self.line_number,
            None,
            None,
        );
        if let (BlockMatch::Continue, Some(paragraph)) =
            (self.paragraph.matches(&mut state), state.block)
        {
            container.append(paragraph);
            self.add_line(paragraph, line);
        }
    }

    fn add_line(&self, node: Node<'a>, line: &mut Line) {
        let mut ast = node.data.borrow_mut();
        let rest = match ast.value {
            NodeValue::Paragraph => strings::ltrim_slice(line.rest()),
            _ => line.rest(),
        };
        ast.content.push_str(rest);
        ast.content.push('\n');
        line.skip_to_end();
    }

    /// Extend an open block's source position to the end of a non-blank line.
    fn touch(&self, node: Node<'a>, line: &Line) {
        if line.is_blank_line() {
            return;
        }
        let mut ast = node.data.borrow_mut();
        if ast.open {
            ast.sourcepos.end = (self.line_number, line.text().len()).into();
        }
    }

    //////////////
    // Closing  //
    //////////////

    /// The deepest open block in the document.
    fn tip(&self) -> Node<'a> {
        deepest_open(self.root).unwrap_or(self.root)
    }

    fn close_open_children(&self, node: Node<'a>) {
        let mut chain = vec![];
        let mut current = node;
        while last_child_is_open(current) {
            let Some(child) = current.last_child() else {
                break;
            };
            chain.push(child);
            current = child;
        }
        for node in chain.into_iter().rev() {
            self.finalize(node);
        }
    }

    fn close_subtree(&self, node: Node<'a>) {
        self.close_open_children(node);
        self.finalize(node);
    }

    fn finalize(&self, node: Node<'a>) {
        {
            let mut ast = node.data.borrow_mut();
            if !ast.open {
                return;
            }
            ast.open = false;
            trace!(
                line = self.line_number,
                node = ast.value.xml_node_name(),
                "closing block"
            );
        }

        let parser = {
            let ast = node.data.borrow();
            self.parser_for(&ast.value)
        };
        if let Some(parser) = parser {
            parser.close(self.arena, node);
        }
    }

    fn finalize_document(&mut self) {
        self.close_subtree(self.root);
        self.root.data.borrow_mut().sourcepos.end =
            (self.line_number.max(1), self.last_line_length).into();
    }
}

/// The innermost open descendant of `node`, if any.
fn deepest_open<'a>(node: Node<'a>) -> Option<Node<'a>> {
    let mut deepest = None;
    let mut current = node;
    while last_child_is_open(current) {
        let Some(child) = current.last_child() else {
            break;
        };
        deepest = Some(child);
        current = child;
    }
    deepest
}
