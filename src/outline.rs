//! A plain-text outline of the block tree, one node per line.

use std::fmt::{self, Write};

use crate::nodes::{ListType, NodeValue};
use crate::Node;

/// Formats a block tree as an indented outline.
///
/// ```rust
/// # use cmblocks::{format_document, parse_document, Arena, Options};
/// let arena = Arena::new();
/// let root = parse_document(&arena, "1. a\n2. b\n", &Options::default());
/// let mut outline = String::new();
/// format_document(root, &mut outline).unwrap();
/// assert_eq!(outline, "document\n  list ordered start=1 delim=. tight\n    \
///                      item\n      paragraph\n        text \"a\"\n    \
///                      item\n      paragraph\n        text \"b\"\n");
/// ```
pub fn format_document<'a>(root: Node<'a>, output: &mut dyn Write) -> fmt::Result {
    OutlineFormatter { output }.format(root)
}

struct OutlineFormatter<'o> {
    output: &'o mut dyn Write,
}

impl<'o> OutlineFormatter<'o> {
    fn format<'a>(&mut self, root: Node<'a>) -> fmt::Result {
        // Depth-first with an explicit stack; children are pushed in reverse
        // so the first child is written next.
        let mut stack = vec![(root, 0)];

        while let Some((node, depth)) = stack.pop() {
            self.format_node(node, depth)?;

            let children: Vec<_> = node.children().collect();
            for child in children.into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        Ok(())
    }

    fn indent(&mut self, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            self.output.write_str("  ")?;
        }
        Ok(())
    }

    fn format_node<'a>(&mut self, node: Node<'a>, depth: usize) -> fmt::Result {
        let ast = node.data.borrow();
        self.indent(depth)?;
        self.output.write_str(ast.value.xml_node_name())?;

        match ast.value {
            NodeValue::List(ref nl) => {
                match nl.list_type {
                    ListType::Bullet => write!(self.output, " bullet={}", nl.bullet_char as char)?,
                    ListType::Ordered => write!(
                        self.output,
                        " ordered start={} delim={}",
                        nl.start,
                        nl.delimiter.as_char()
                    )?,
                }
                self.output
                    .write_str(if nl.loose { " loose" } else { " tight" })?;
            }
            NodeValue::Heading(ref nh) => write!(self.output, " level={}", nh.level)?,
            NodeValue::CodeBlock(ref ncb) => {
                if !ncb.info.is_empty() {
                    write!(self.output, " info={:?}", ncb.info)?;
                }
                self.output.write_str("\n")?;
                self.indent(depth + 1)?;
                write!(self.output, "text {:?}", ncb.literal)?;
            }
            NodeValue::Text(ref literal) => write!(self.output, " {:?}", literal)?,
            NodeValue::Document
            | NodeValue::Item(..)
            | NodeValue::Paragraph
            | NodeValue::ThematicBreak => (),
        }

        self.output.write_str("\n")
    }
}
