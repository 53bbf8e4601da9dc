//! Advances through a sentence with the forms of `scan` and `scan_if`, and
//! prints the element reached after each.
//!
//! Run with `RUST_LOG=trace` and `--features trace-scans` to see the logging.

use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use scanning::{Bounds, StrCursor, scan, scan_seq, scan_if, scan_while_excluding};


fn current(at: &StrCursor<'_>) -> Result<char, Box<dyn Error>> {
    at.rest().chars().next().ok_or_else(|| "unexpected end of source".into())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source = "Programs must be written for people to read, \
                  and only incidentally for machines to execute. \
                  -- Harold Abelson";
    let (first, last) = source.bounds();

    let first = scan(first, &last, 'P');
    println!("Single element: {}", current(&first)?);

    let first = scan_seq(first, &last, "rograms m".chars());
    println!("Range of elements: {}", current(&first)?);

    let first = scan_if(first, &last, |&c| c == 'u');
    println!("Predicate: {}", current(&first)?);

    let attribution = scan_while_excluding(first, &last, |c, l| scan_seq(c, l, "-- ".chars()));
    let author = scan_seq(attribution, &last, "-- ".chars());
    info!(offset = author.offset(), "found attribution");
    println!("Author: {}", author.rest());

    Ok(())
}
