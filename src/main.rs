//! The `cmblocks` binary.

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::{debug, Level};

use cmblocks::{format_document, parse_document, Arena, Options, Parse};

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(after_help = "Prints the block structure of the input as an indented outline.")]
struct Cli {
    /// The CommonMark file(s) to parse; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Count blank lines inside an open fenced code block towards ending a
    /// list
    #[arg(long)]
    count_fenced_blank_lines: bool,

    /// Log parser decisions to standard error; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let options = Options {
        parse: Parse {
            count_fenced_blank_lines: cli.count_fenced_blank_lines,
        },
    };

    let mut s = String::new();
    if cli.files.is_empty() {
        io::stdin().read_to_string(&mut s)?;
    } else {
        for path in &cli.files {
            debug!(path = %path.display(), "reading");
            s.push_str(&fs::read_to_string(path)?);
        }
    }

    let arena = Arena::new();
    let root = parse_document(&arena, &s, &options);

    let mut outline = String::new();
    format_document(root, &mut outline)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(outline.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
