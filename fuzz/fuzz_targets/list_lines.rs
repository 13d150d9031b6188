#![no_main]

use libfuzzer_sys::fuzz_target;

use cmblocks::{markdown_to_outline, Options};

// Documents assembled from list syntax reach the continuation engine far
// more often than arbitrary bytes do.
#[derive(Debug, arbitrary::Arbitrary)]
enum Line {
    Bullet { indent: u8, marker: u8, text: bool },
    Ordered { indent: u8, number: u32, paren: bool, text: bool },
    Fence { indent: u8, tilde: bool },
    Text { indent: u8 },
    Blank,
}

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    lines: Vec<Line>,
    opts: Options,
}

fn pad(indent: u8) -> String {
    " ".repeat((indent % 12) as usize)
}

fn render(line: &Line) -> String {
    match *line {
        Line::Bullet {
            indent,
            marker,
            text,
        } => format!(
            "{}{}{}",
            pad(indent),
            ['-', '+', '*'][(marker % 3) as usize],
            if text { " x" } else { "" }
        ),
        Line::Ordered {
            indent,
            number,
            paren,
            text,
        } => format!(
            "{}{}{}{}",
            pad(indent),
            number,
            if paren { ')' } else { '.' },
            if text { " x" } else { "" }
        ),
        Line::Fence { indent, tilde } => {
            format!("{}{}", pad(indent), if tilde { "~~~" } else { "```" })
        }
        Line::Text { indent } => format!("{}x", pad(indent)),
        Line::Blank => String::new(),
    }
}

fuzz_target!(|i: FuzzInput| {
    let s: String = i.lines.iter().map(|l| render(l) + "\n").collect();
    markdown_to_outline(&s, &i.opts);
});
