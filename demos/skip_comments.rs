//! Copies standard input to standard output without its `#` comments, scanning
//! the input as a stream of bytes as it is read.
//!
//! ```text
//! printf 'x = 1  # one\n# none\ny = 2\n' | cargo run --example skip_comments
//! ```
//!
//! Run with `RUST_LOG=debug` to see when the input is exhausted.

use std::{error::Error, io::{self, Write}};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use scanning::{Sentinel, scan, scan_if, scan_while_excluding, stream::read_bytes};


fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let (mut at, last) = read_bytes(io::stdin().lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut lines = 0_usize;

    while !last.is_end(&at) {
        let comment = scan_while_excluding(at.clone(), &last, |c, l| {
            scan_if(c, l, |&b| b == b'#' || b == b'\n')
        });
        out.write_all(&at.until(&comment))?;
        let newline = scan_while_excluding(comment.clone(), &last, |c, l| scan(c, l, b'\n'));
        if newline != comment {
            debug!(line = lines, skipped = newline.offset() - comment.offset(), "comment");
        }
        let next = scan(newline.clone(), &last, b'\n');
        if next == newline {
            break;
        }
        out.write_all(b"\n")?;
        lines += 1;
        at = next;
    }
    out.flush()?;

    if let Some(error) = last.take_error() {
        return Err(error.into());
    }
    info!(lines, "done");
    Ok(())
}
