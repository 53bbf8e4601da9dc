//! Combinators that turn "did this scanning operation match here" into
//! progress past elements where it did not.
//!
//! A scanning operation is anything callable as `(cursor, &end) -> cursor`
//! that follows the convention of the scan operations: it returns its cursor
//! unchanged when it does not match.  Closures over the scan operations are the
//! usual ones:
//!
//! ```
//! use scanning_core::{scan_seq, scan_while_excluding, Bounds};
//!
//! let (first, last) = "x = 1; // note".bounds();
//! let code_end = scan_while_excluding(first, &last, |c, l| scan_seq(c, l, "//".chars()));
//! assert_eq!(code_end.rest(), "// note");
//! ```

use crate::{ForwardCursor, Sentinel};


/// Advance by one element, unless `scanner` matches at `first`.
///
/// Invokes `scanner` once, with a copy of `first`.  If it advances, the
/// excluded thing is present here and `first` is returned unchanged.  If it does
/// not advance, `first` is returned advanced by exactly one.
///
/// When `first` is at `last` it is returned unchanged and `scanner` is not
/// invoked, because there is no element to step past.
///
/// The source cursor must be a [`ForwardCursor`](trait.ForwardCursor.html),
/// because `scanner` is given a copy that it may move before failing:
///
/// ```compile_fail
/// use scanning_core::{scan_excluding, scan, premade::{IterCursor, IterEnd}};
///
/// let first = IterCursor::new("abc".chars());
/// let _ = scan_excluding(first, &IterEnd, |c, l| scan(c, l, 'a'));
/// ```
pub fn scan_excluding<C, S, F>(first: C, last: &S, mut scanner: F) -> C
    where C: ForwardCursor,
          S: Sentinel<C> + ?Sized,
          F: FnMut(C, &S) -> C,
{
    if last.is_end(&first) || scanner(first.clone(), last) != first {
        return first;
    }
    first.advanced(1)
}


/// Skip elements until `scanner` matches or the end is reached.
///
/// Starting at `first`, repeatedly invokes `scanner` at the current position
/// and steps one element each time it does not advance.  Returns the first
/// position where it does advance, or the end position if it never does.
/// Costs one invocation of `scanner` per skipped element, plus one for the
/// position where it matched.
///
/// Like [`scan_excluding`](fn.scan_excluding.html), single-pass source
/// cursors are rejected:
///
/// ```compile_fail
/// use scanning_core::{scan_while_excluding, scan, premade::{IterCursor, IterEnd}};
///
/// let first = IterCursor::new("abc".chars());
/// let _ = scan_while_excluding(first, &IterEnd, |c, l| scan(c, l, 'c'));
/// ```
pub fn scan_while_excluding<C, S, F>(first: C, last: &S, mut scanner: F) -> C
    where C: ForwardCursor,
          S: Sentinel<C> + ?Sized,
          F: FnMut(C, &S) -> C,
{
    let mut cursor = first;
    #[cfg(feature = "tracing")]
    let mut skipped: usize = 0;
    while !last.is_end(&cursor) && scanner(cursor.clone(), last) == cursor {
        cursor.step();
        #[cfg(feature = "tracing")]
        {
            skipped += 1;
        }
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(skipped, at_end = last.is_end(&cursor), "scan_while_excluding");
    cursor
}


#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::{Bounds, Cursor, scan, scan_if, scan_seq, StrCursor};

    fn never<C, S: ?Sized>(c: C, _: &S) -> C { c }

    #[test]
    fn excluding_vetoes_match() {
        let (first, last) = "--x".bounds();
        let comment = |c, l: &StrCursor<'static>| scan_seq(c, l, "--".chars());
        assert_eq!(scan_excluding(first, &last, comment), first);
        assert_eq!(scan_excluding(first.advanced(1), &last, comment), first.advanced(2));
        assert_eq!(scan_excluding(first.advanced(2), &last, comment), last);
    }

    #[test]
    fn excluding_at_end() {
        let (_, last) = "abc".bounds();
        let calls = Cell::new(0);
        let result = scan_excluding(last, &last, |c, _: &StrCursor<'static>| {
            calls.set(calls.get() + 1);
            c
        });
        assert_eq!(result, last);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn excluding_invokes_once() {
        let (first, last) = "abc".bounds();
        let calls = Cell::new(0);
        let result = scan_excluding(first, &last, |c, l: &StrCursor<'static>| {
            calls.set(calls.get() + 1);
            scan(c, l, 'z')
        });
        assert_eq!(result, first.advanced(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn while_excluding_stops_at_match() {
        let (first, last) = "abc*/def".bounds();
        let close = |c, l: &StrCursor<'static>| scan_seq(c, l, "*/".chars());
        let stop = scan_while_excluding(first, &last, close);
        assert_eq!(stop.offset(), 3);
        assert_eq!(scan_while_excluding(stop, &last, close), stop);
    }

    #[test]
    fn while_excluding_runs_to_end() {
        let (first, last) = "abcdef".bounds();
        assert_eq!(scan_while_excluding(first, &last, never), last);
        assert_eq!(scan_while_excluding(last, &last, never), last);

        let (first, last) = "".bounds();
        assert_eq!(scan_while_excluding(first, &last, never), last);
    }

    #[test]
    fn while_excluding_invocation_count() {
        let (first, last) = "aaab".bounds();
        let calls = Cell::new(0);
        let stop = scan_while_excluding(first, &last, |c, l: &StrCursor<'static>| {
            calls.set(calls.get() + 1);
            scan(c, l, 'b')
        });
        assert_eq!(stop.offset(), 3);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn nested_excluding() {
        // Skip up to the first digit that is not part of "0x".
        let (first, last) = "ab0xz7".bounds();
        let stop = scan_while_excluding(first, &last, |c, l: &StrCursor<'static>| {
            let not_hex_prefix = scan_excluding(c, l, |c, l| scan_seq(c, l, "0x".chars()));
            if not_hex_prefix == c {
                c
            } else {
                scan_if(c, l, char::is_ascii_digit)
            }
        });
        assert_eq!(stop.offset(), 5);
        assert_eq!(stop.read(), '7');
    }
}
