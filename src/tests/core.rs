use pretty_assertions::assert_eq;
use super::*;

#[test]
fn empty() {
    outline("", "document\n");
    outline("\n\n", "document\n");
}

#[test]
fn paragraphs() {
    outline(
        concat!("Hello\n", "  world.\n", "\n", "Second  \n"),
        concat!(
            "document\n",
            "  paragraph\n",
            "    text \"Hello\\nworld.\"\n",
            "  paragraph\n",
            "    text \"Second\"\n"
        ),
    );
}

#[test]
fn line_endings() {
    outline(
        "a\r\nb\rc\n\r\nd",
        concat!(
            "document\n",
            "  paragraph\n",
            "    text \"a\\nb\\nc\"\n",
            "  paragraph\n",
            "    text \"d\"\n"
        ),
    );
}

#[test]
fn byte_order_mark() {
    outline(
        "\u{feff}- a\n",
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n"
        ),
    );
}

#[test]
fn headings() {
    outline(
        concat!("# One\n", "  ### Three ###\n", "#######\n", "#hash\n", "##\n"),
        concat!(
            "document\n",
            "  heading level=1\n",
            "    text \"One\"\n",
            "  heading level=3\n",
            "    text \"Three\"\n",
            "  paragraph\n",
            "    text \"#######\\n#hash\"\n",
            "  heading level=2\n"
        ),
    );
}

#[test]
fn heading_interrupts_paragraph() {
    outline(
        concat!("para\n", "# head\n", "after\n"),
        concat!(
            "document\n",
            "  paragraph\n",
            "    text \"para\"\n",
            "  heading level=1\n",
            "    text \"head\"\n",
            "  paragraph\n",
            "    text \"after\"\n"
        ),
    );
}

#[test]
fn thematic_breaks() {
    outline(
        concat!("---\n", "\n", "- - -\n", "\n", "\n", "_        _   _\n", "a\n", "***\n"),
        concat!(
            "document\n",
            "  thematic_break\n",
            "  thematic_break\n",
            "  thematic_break\n",
            "  paragraph\n",
            "    text \"a\"\n",
            "  thematic_break\n"
        ),
    );
}

#[test]
fn codefence() {
    outline(
        concat!("``` rust yum\n", "fn main<'a>();\n", "```\n"),
        concat!(
            "document\n",
            "  code_block info=\"rust yum\"\n",
            "    text \"fn main<'a>();\\n\"\n"
        ),
    );
}

#[test]
fn codefence_indented() {
    outline(
        concat!("  ~~~\n", "   a\n", " b\n", "c\n", "  ~~~~~\n", "after\n"),
        concat!(
            "document\n",
            "  code_block\n",
            "    text \" a\\nb\\nc\\n\"\n",
            "  paragraph\n",
            "    text \"after\"\n"
        ),
    );
}

#[test]
fn codefence_needs_matching_close() {
    outline(
        concat!("````\n", "```\n", "~~~~\n", "````` \n"),
        concat!("document\n", "  code_block\n", "    text \"```\\n~~~~\\n\"\n"),
    );
}

#[test]
fn unclosed_codefence_runs_to_end() {
    outline(
        concat!("```\n", "a\n", "\n"),
        concat!("document\n", "  code_block\n", "    text \"a\\n\\n\"\n"),
    );
}

#[test]
fn unsupported_blocks_are_paragraph_text() {
    outline(
        concat!("> quote\n", "    indented\n", "<div>\n"),
        concat!(
            "document\n",
            "  paragraph\n",
            "    text \"> quote\\nindented\\n<div>\"\n"
        ),
    );
}

#[test]
fn markdown_to_outline_matches_format_document() {
    let input = "1. a\n\n   b\n";
    let arena = Arena::new();
    let root = parse_document(&arena, input, &Options::default());
    let mut expected = String::new();
    format_document(root, &mut expected).unwrap();

    assert_eq!(markdown_to_outline(input, &Options::default()), expected);
}
