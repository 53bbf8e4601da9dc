//! Advances through a sentence with the negated forms, `scan_not` and
//! `scan_if_not`, and prints the element reached after each.

use std::error::Error;

use tracing_subscriber::EnvFilter;

use scanning::{Bounds, StrCursor, scan_not, scan_not_seq, scan_if_not};


fn current(at: &StrCursor<'_>) -> Result<char, Box<dyn Error>> {
    at.rest().chars().next().ok_or_else(|| "unexpected end of source".into())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source = "Talk is cheap. Show me the code. -- Linus Torvalds";
    let (first, last) = source.bounds();

    let first = scan_not(first, &last, 'Q');
    println!("Single element: {}", current(&first)?);

    // Only one element is passed, even though all of "alk" matched.
    let first = scan_not_seq(first, &last, "alks".chars());
    println!("Range of elements: {}", current(&first)?);

    let first = scan_if_not(first, &last, |&c| c == 'f');
    println!("Predicate: {}", current(&first)?);

    Ok(())
}
