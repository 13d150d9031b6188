use pretty_assertions::assert_eq;
use super::*;
use ntest::timeout;

// input: python3 -c 'n = 3000; print("".join("  " * i + "- a\n" for i in range(n)))'
#[test]
#[timeout(4000)]
fn pathological_nested_lists() {
    let n = 3_000;
    let input: String = (0..n).map(|i| format!("{}- a\n", "  ".repeat(i))).collect();

    let lists = lists(&input);
    // Nesting stops deepening at the depth limit; the rest is paragraph text.
    assert_eq!(lists.len(), 100);
}

// input: python3 -c 'print("".join("  " * i + "- a\n" for i in range(100)) + (" " * 200 + "a" * 10000 + "\n") * 1000)'
#[test]
#[timeout(4000)]
fn pathological_wide_lines_in_deep_list() {
    let mut input: String = (0..100).map(|i| format!("{}- a\n", "  ".repeat(i))).collect();
    let line = format!("{}{}\n", " ".repeat(200), "a".repeat(10_000));
    for _ in 0..1000 {
        input.push_str(&line);
    }

    assert_eq!(lists(&input).len(), 100);
    assert_well_formed(&input, &Options::default());
}

// input: python3 -c 'n = 50000; print("- " * n + "a")'
#[test]
#[timeout(4000)]
fn pathological_markers_on_one_line() {
    let n = 50_000;
    let input = format!("{}a\n", "- ".repeat(n));

    let lists = lists(&input);
    assert_eq!(lists.len(), 100);
}

// input: python3 -c 'n = 100000; print("- a\n" * n)'
#[test]
#[timeout(4000)]
fn pathological_long_list() {
    let n = 100_000;
    let input = "- a\n".repeat(n);

    assert_eq!(items(&input).len(), n);
}

// input: python3 -c 'n = 50000; print("-\n" * n)'
#[test]
#[timeout(4000)]
fn pathological_empty_items() {
    let n = 50_000;
    let input = "-\n".repeat(n);

    let lists = lists(&input);
    assert_eq!(lists.len(), 1);
    assert_eq!(items(&input).len(), n);
}

// input: python3 -c 'n = 100000; print("- ```\n" + "\n" * n + "  x")'
#[test]
#[timeout(4000)]
fn pathological_blank_lines_in_fence() {
    let n = 100_000;
    let input = format!("- ```\n{}  x\n", "\n".repeat(n));

    assert_eq!(lists(&input).len(), 1);
    assert_well_formed(&input, &Options::default());
}
