//! Additional, more convenient, functionality, which leverages the Rust
//! standard library, layered on top of [`scanning_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`scanning_core`]: the scan operations, the exclusion
//! combinators, the [`Cursor`] and [`Sentinel`] traits, and the premade cursors
//! for in-memory sequences.
//!
//! * Provides [`StreamCursor`]s, which buffer the elements pulled from any
//! `Iterator` (or `std::io::Read`er) into heap memory shared by every copy of a
//! cursor, so that single-pass sources can be scanned with the operations that
//! need to return to an earlier position.
//!
//! * Logs the buffering of streams with [`tracing`], and, with the
//! `trace-scans` feature, forwards to the core crate's logging of the skipping
//! done by [`scan_while_excluding`].
//!
//! ```
//! use scanning::{scan_seq, scan_while_excluding, stream::read_bytes};
//!
//! let input: &[u8] = b"key = value # comment\n";
//! let (first, last) = read_bytes(input);
//! let hash = scan_while_excluding(first.clone(), &last, |c, l| scan_seq(c, l, *b"#"));
//! assert_eq!(first.until(&hash), b"key = value ");
//! ```
//!
//! [`scanning_core`]: ../scanning_core/index.html
//! [`Cursor`]: ../scanning_core/trait.Cursor.html
//! [`Sentinel`]: ../scanning_core/trait.Sentinel.html
//! [`StreamCursor`]: stream/struct.StreamCursor.html
//! [`tracing`]: https://docs.rs/tracing
//! [`scan_while_excluding`]: ../scanning_core/fn.scan_while_excluding.html


#![forbid(unsafe_code)]

// Warn about desired lints that would otherwise be allowed by default.
#![warn(
    // Groups
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility, // unsure if needed with Cargo.toml having edition="2018"
    rust_2018_idioms,
    unused,
    clippy::all,
    clippy::pedantic,
    // Individual lints not included in above groups and desired.
    macro_use_extern_crate,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    variant_size_differences,
)]


// Re-export everything from the core crate.
#[doc(no_inline)]
pub use scanning_core::*;

pub mod stream;
