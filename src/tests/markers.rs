use pretty_assertions::assert_eq;
use super::*;
use crate::nodes::ListType;

#[test]
fn bullet_change_starts_new_list() {
    outline(
        concat!("- a\n", "* b\n", "+ c\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "  list bullet=* tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"b\"\n",
            "  list bullet=+ tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"c\"\n"
        ),
    );
}

#[test]
fn delimiter_change_starts_new_list() {
    outline(
        concat!("1. a\n", "2) b\n"),
        concat!(
            "document\n",
            "  list ordered start=1 delim=. tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\"\n",
            "  list ordered start=2 delim=) tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"b\"\n"
        ),
    );
}

#[test]
fn list_type_change_starts_new_list() {
    let lists = lists("- a\n1. b\n- c\n");
    assert_eq!(
        lists.iter().map(|nl| nl.list_type).collect::<Vec<_>>(),
        vec![ListType::Bullet, ListType::Ordered, ListType::Bullet]
    );
}

#[test]
fn nested_marker_change() {
    outline(
        concat!("- a\n", "  - b\n", "  * c\n"),
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
            "      list bullet=* tight\n",
            "        item\n",
            "          paragraph\n",
            "            text \"c\"\n"
        ),
    );
}

#[test]
fn too_many_digits() {
    outline(
        "1234567890. not a list\n",
        concat!("document\n", "  paragraph\n", "    text \"1234567890. not a list\"\n"),
    );

    let lists = lists("123456789. a\n");
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].start, 123_456_789);
}

#[test]
fn marker_must_be_followed_by_whitespace() {
    outline(
        concat!("-a\n", "1.b\n", "+\tc\n"),
        concat!(
            "document\n",
            "  paragraph\n",
            "    text \"-a\\n1.b\"\n",
            "  list bullet=+ tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"c\"\n"
        ),
    );
}

#[test]
fn marker_indentation_limit() {
    outline(
        concat!("   - a\n", "    - b\n"),
        concat!(
            "document\n",
            "  list bullet=- tight\n",
            "    item\n",
            "      paragraph\n",
            "        text \"a\\n- b\"\n"
        ),
    );

    outline(
        "    - a\n",
        concat!("document\n", "  paragraph\n", "    text \"- a\"\n"),
    );
}

#[test]
fn wide_padding_is_content() {
    // Five columns after the marker: one counts, the rest stays with the
    // content.
    assert_eq!(items("-     a\n")[0].number_of_spaces, 2);
    outline(
        "-     a\n",
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
fn tab_after_marker() {
    assert_eq!(items("-\ta\n")[0].number_of_spaces, 2);
    assert_eq!(items("1.\ta\n")[0].number_of_spaces, 3);
}
