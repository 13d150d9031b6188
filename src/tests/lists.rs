use pretty_assertions::assert_eq;
use super::*;
use crate::nodes::{ListDelimType, ListType};

#[test]
fn tight_bullet_list() {
    outline(
        concat!("- a\n", "- b\n", "- c\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "    item\n",
            "      paragraph\n",
            "        text \"b\"\n",
            "    item\n",
            "      paragraph\n",
            "        text \"c\"\n"
        ),
    );
}

#[test]
fn ordered_list() {
    outline(
        concat!("1. a\n", "2. b\n"),
        concat!(
            "document\n",
            "  list ordered start=1 delim=. tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "    item\n",
            "      paragraph\n",
            "        text \"b\"\n"
        ),
    );

    let lists = lists("7) x\n8) y\n");
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].list_type, ListType::Ordered);
    assert_eq!(lists[0].start, 7);
    assert_eq!(lists[0].delimiter, ListDelimType::Paren);
}

#[test]
fn item_numbers_after_the_first_are_ignored() {
    let lists = lists("3. a\n1. b\n999. c\n");
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].start, 3);
}

#[test]
fn continuation_lines() {
    outline(
        concat!("- a\n", "  b\n", "\n", "  c\n", "- d\n"),
        concat!(
            "document\n",
            "  list bullet=- loose\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\\nb\"\n",
            "      paragraph\n",
            "        text \"c\"\n",
            "    item\n",
            "      paragraph\n",
            "        text \"d\"\n"
        ),
    );
}

#[test]
fn lazy_continuation() {
    outline(
        concat!("- a\n", "b\n", "- c\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\\nb\"\n",
            "    item\n",
            "      paragraph\n",
            "        text \"c\"\n"
        ),
    );
}

#[test]
fn unindented_line_after_blank_leaves_the_list() {
    outline(
        concat!("- a\n", "\n", "b\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "  paragraph\n",
            "    text \"b\"\n"
        ),
    );
}

#[test]
fn nested_lists() {
    outline(
        concat!("- a\n", "  - b\n", "    - c\n", "- d\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "      list bullet=- tight\n",
            "        item\n",
            "          paragraph\n",
            "            text \"b\"\n",
            "          list bullet=- tight\n",
            "            item\n",
            "              paragraph\n",
            "                text \"c\"\n",
            "    item\n",
            "      paragraph\n",
            "        text \"d\"\n"
        ),
    );
}

#[test]
fn nested_markers_on_one_line() {
    outline(
        concat!("- - a\n", "    b\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      list bullet=- tight\n",
            "        item\n",
            "          paragraph\n",
            "            text \"a\\nb\"\n"
        ),
    );

    assert_eq!(
        items("1. - a\n")
            .iter()
            .map(|ni| ni.number_of_spaces)
            .collect::<Vec<_>>(),
        vec![3, 5]
    );
}

#[test]
fn item_content_column() {
    assert_eq!(items("-   a\n")[0].number_of_spaces, 4);
    assert_eq!(items("10. a\n")[0].number_of_spaces, 4);
    assert_eq!(items("   * a\n")[0].number_of_spaces, 5);

    // Under-indented lines are not part of the item's content.
    outline(
        concat!("10. a\n", "\n", "   b\n"),
        concat!(
            "document\n",
            "  list ordered start=10 delim=. tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "  paragraph\n",
            "    text \"b\"\n"
        ),
    );
}

#[test]
fn extra_indentation_continues_the_item() {
    outline(
        concat!("- a\n", "\n", "        b\n"),
        concat!(
            "document\n",
            "  list bullet=- loose\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "      paragraph\n",
            "        text \"b\"\n"
        ),
    );
}

#[test]
fn pending_item_is_confirmed() {
    assert_eq!(items("-\n")[0].number_of_spaces, -2);
    assert!(items("-\n")[0].is_pending());
    assert_eq!(items("-\n  a\n")[0].number_of_spaces, 2);

    outline(
        concat!("-\n", "  a\n"),
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
fn pending_item_requires_exact_indent() {
    outline(
        concat!("1.\n", " a\n"),
        concat!(
            "document\n",
            "  list ordered start=1 delim=. tight\n",
            "    item\n",
            "  paragraph\n",
            "    text \"a\"\n"
        ),
    );
}

#[test]
fn pending_item_with_deep_indent_is_confirmed() {
    assert_eq!(items("-\n      a\n")[0].number_of_spaces, 2);
    assert_eq!(items("10.\n     a\n")[0].number_of_spaces, 4);

    outline(
        concat!("-\n", "      a\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n"
        ),
    );
    outline(
        concat!("10.\n", "     a\n"),
        concat!(
            "document\n",
            "  list ordered start=10 delim=. tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n"
        ),
    );
}

#[test]
fn pending_item_deep_indent_is_not_a_marker() {
    // The cursor goes back to column 2, leaving four columns before "-".
    outline(
        concat!("-\n", "      - b\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"- b\"\n"
        ),
    );
}

#[test]
fn pending_item_confirmed_without_exact_indent() {
    // The tab jumps from column 0 past column 2, so the cursor goes back to
    // the start of the line and the tab is too wide for a nested marker.
    assert_eq!(items("-\n\t- b\n")[0].number_of_spaces, 2);
    outline(
        concat!("-\n", "\t- b\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"- b\"\n"
        ),
    );
}

#[test]
fn pending_item_followed_by_blank_line() {
    outline(
        concat!("-\n", "\n", "  a\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "  paragraph\n",
            "    text \"a\"\n"
        ),
    );
}

#[test]
fn empty_item_counts_as_a_blank_line() {
    outline(
        concat!("- a\n", "-\n", "- c\n"),
        concat!(
            "document\n",
            "  list bullet=- loose\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "    item\n",
            "    item\n",
            "      paragraph\n",
            "        text \"c\"\n"
        ),
    );
}

#[test]
fn list_interrupts_paragraph() {
    outline(
        concat!("para\n", "- a\n"),
        concat!(
            "document\n",
            "  paragraph\n",
            "    text \"para\"\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n"
        ),
    );
}

#[test]
fn leaf_blocks_inside_items() {
    outline(
        concat!("- # h\n", "  ***\n", "- ```sh\n", "  ls\n", "  ```\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      heading level=1\n",
            "        text \"h\"\n",
            "      thematic_break\n",
            "    item\n",
            "      code_block info=\"sh\"\n",
            "        text \"ls\\n\"\n"
        ),
    );
}

#[test]
fn thematic_break_ends_list() {
    outline(
        concat!("* a\n", "* * *\n", "* b\n"),
        concat!(
            "document\n",
            "  list bullet=* tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "  thematic_break\n",
            "  list bullet=* tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"b\"\n"
        ),
    );
}
