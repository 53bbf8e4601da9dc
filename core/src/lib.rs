//! The core of a small library of generic scanning primitives: comparisons
//! that advance a position within a sequence when the sequence's prefix
//! matches, and leave the position untouched when it does not.  These are
//! intended as the low-level building blocks of hand-written parsers, lexers,
//! and pattern matchers.
//!
//! There are four scan operations, each in a single-element form and (for
//! [`scan`] and [`scan_not`]) a pattern form:
//!
//! * [`scan`] / [`scan_seq`] advance past a matching element or pattern.
//! * [`scan_if`] advances past an element that satisfies a predicate.
//! * [`scan_not`] / [`scan_not_seq`] advance by one element when the element
//! or pattern does *not* match.
//! * [`scan_if_not`] advances past an element that does not satisfy a
//! predicate.
//!
//! And two combinators that compose any "scanning operation" (anything callable
//! as `(cursor, &end) -> cursor`):
//!
//! * [`scan_excluding`] advances by one element only if the operation does not
//! advance.
//! * [`scan_while_excluding`] skips elements until the operation advances or
//! the end is reached.
//!
//! No operation ever fails in the exceptional sense.  "No match" is conveyed
//! only by returning a position equal to the one passed in, so a caller chaining
//! scans decides for itself whether no progress means backtrack, error, or try
//! an alternative.
//!
//! Every operation is generic over the [`Cursor`] and [`Sentinel`] traits,
//! which separate a position from the marker of the end of its sequence, so
//! that sequences whose end is computed (NUL-terminated, counted, exhausted
//! streams) work as well as those whose end is stored.  The comparison and the
//! per-element transformation ("projection") are plain closures, with the
//! defaults [`policy::equal`] and [`policy::identity`] supplied by the forms
//! without the `_with` suffix.
//!
//! This crate is `no_std` and never allocates.  Ready-made cursors for the
//! common in-memory sequence representations are provided in [`premade`].
//!
//! ```
//! use scanning_core::{scan, scan_seq, Bounds};
//!
//! let (first, last) = "Hello, world!".bounds();
//!
//! let after_h = scan(first, &last, 'H');
//! assert_eq!(after_h.offset(), 1);
//! assert_eq!(scan(first, &last, 'B'), first);
//!
//! let after_hello = scan_seq(first, &last, "Hello".chars());
//! assert_eq!(after_hello.rest(), ", world!");
//! ```
//!
//! [`scan`]: fn.scan.html
//! [`scan_seq`]: fn.scan_seq.html
//! [`scan_if`]: fn.scan_if.html
//! [`scan_not`]: fn.scan_not.html
//! [`scan_not_seq`]: fn.scan_not_seq.html
//! [`scan_if_not`]: fn.scan_if_not.html
//! [`scan_excluding`]: fn.scan_excluding.html
//! [`scan_while_excluding`]: fn.scan_while_excluding.html
//! [`Cursor`]: trait.Cursor.html
//! [`Sentinel`]: trait.Sentinel.html
//! [`policy::equal`]: policy/fn.equal.html
//! [`policy::identity`]: policy/fn.identity.html
//! [`premade`]: premade/index.html

#![no_std]

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


pub mod policy;

mod scan;
pub use scan::*;

mod exclude;
pub use exclude::*;

mod span;
pub use span::{Span, span};

mod error;
pub use error::CursorError;

/// Ready-made [`Cursor`](../trait.Cursor.html) and
/// [`Sentinel`](../trait.Sentinel.html) types for common sequence
/// representations.
pub mod premade {
    mod slice;
    pub use slice::SliceCursor;

    mod utf8;
    pub use utf8::StrCursor;

    mod nul;
    pub use nul::NulTerminated;

    mod counted;
    pub use counted::{Counted, Count};

    mod iter;
    pub use iter::{IterCursor, IterEnd};
}

pub use premade::{SliceCursor, StrCursor};


/// A position within a sequence of elements.
///
/// A cursor can read the element at its position and can step forward.  It
/// does not know where its sequence ends; that is the job of a
/// [`Sentinel`](trait.Sentinel.html), which allows the end of a sequence to be
/// stored (e.g. one-past-the-last index) or computed (e.g. at a NUL byte).
///
/// Reading or stepping a cursor that is at its end is a contract violation,
/// which implementations may answer with a panic.  The scan operations always
/// check the sentinel first.
///
/// A cursor that implements only this trait is single-pass: once stepped, the
/// earlier position cannot be recovered.  See
/// [`ForwardCursor`](trait.ForwardCursor.html) for the multi-pass capability.
pub trait Cursor {
    /// The type of element read at a position.
    type Item;

    /// Read the element at this position.  Must not be called when at the end.
    fn read(&self) -> Self::Item;

    /// Move to the next position.  Must not be called when at the end.
    fn step(&mut self);

    /// Move forward by `n` positions.  Each of the intermediate positions must
    /// not be at the end.
    #[inline]
    fn advance(&mut self, n: usize) {
        for _ in 0 .. n {
            self.step();
        }
    }

    /// Like [`advance`](#method.advance) but by value.
    #[inline]
    fn advanced(mut self, n: usize) -> Self
        where Self: Sized,
    {
        self.advance(n);
        self
    }
}


/// A multi-pass cursor: one that can be copied, with the copy remaining valid
/// after the original is stepped, and whose positions can be compared for
/// identity.
///
/// This is required of the source sequence by every operation that might read
/// more than one element before deciding the outcome (the pattern forms and the
/// exclusion combinators), because they must be able to return the original
/// position after a failed comparison has moved a working copy.  It is not
/// required of pattern sequences.
///
/// Blanket-implemented for every `Cursor + Clone + PartialEq`.
pub trait ForwardCursor: Cursor + Clone + PartialEq {}

impl<C> ForwardCursor for C
    where C: Cursor + Clone + PartialEq,
{}


/// The end marker of a sequence of `C` cursors.
///
/// It does not need to be the same type as the cursor, which supports
/// sequences whose bound is computed rather than stored.  When it is the same
/// type (a cursor positioned one past the last element), the blanket
/// implementation for `PartialEq` cursors applies.
pub trait Sentinel<C: ?Sized> {
    /// Is `cursor` at the end of the sequence?
    fn is_end(&self, cursor: &C) -> bool;
}

impl<C> Sentinel<C> for C
    where C: Cursor + PartialEq,
{
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        cursor == self
    }
}


/// Conversion of a container into the cursor at its start and the sentinel of
/// its end.
pub trait Bounds {
    /// The type of cursor over the container's elements.
    type Cursor: Cursor;
    /// The type of sentinel that marks the container's end.
    type End: Sentinel<Self::Cursor>;

    /// Get the start and end of the container.
    fn bounds(self) -> (Self::Cursor, Self::End);
}

impl<'a, T> Bounds for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    #[inline]
    fn bounds(self) -> (Self::Cursor, Self::End) {
        (SliceCursor::new(self), SliceCursor::end_of(self))
    }
}

impl<'a, T, const N: usize> Bounds for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    #[inline]
    fn bounds(self) -> (Self::Cursor, Self::End) {
        self.as_slice().bounds()
    }
}

impl<'a> Bounds for &'a str {
    type Cursor = StrCursor<'a>;
    type End = StrCursor<'a>;

    #[inline]
    fn bounds(self) -> (Self::Cursor, Self::End) {
        (StrCursor::new(self), StrCursor::end_of(self))
    }
}
