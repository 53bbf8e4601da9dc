//! The four scan operations.
//!
//! Each returns either the cursor it was given, unchanged, meaning no match, or
//! that cursor advanced by the amount the operation claims on a match.  There
//! is no other outcome.

use crate::{Cursor, ForwardCursor, Sentinel, policy::{equal, identity}};


/// Advance past `value` if the sequence starts with it.
///
/// Returns `first` advanced by one if `first` is not at `last` and its element
/// equals `value`, else returns `first` unchanged.
#[inline]
pub fn scan<C, S, T>(first: C, last: &S, value: T) -> C
    where C: Cursor,
          C::Item: PartialEq<T>,
          S: Sentinel<C> + ?Sized,
{
    scan_with(first, last, value, equal, identity)
}

/// Like [`scan`](fn.scan.html) but with an explicit comparison policy `pred`
/// and transformation policy `proj`.
///
/// `proj` is applied to the element exactly once and its result is compared to
/// `value` by `pred`.  When `first` is at `last`, neither is invoked.
pub fn scan_with<C, S, T, V, P, J>(first: C, last: &S, value: T, mut pred: P, mut proj: J)
                                   -> C
    where C: Cursor,
          S: Sentinel<C> + ?Sized,
          P: FnMut(&V, &T) -> bool,
          J: FnMut(C::Item) -> V,
{
    if last.is_end(&first) || !pred(&proj(first.read()), &value) {
        return first;
    }
    first.advanced(1)
}


/// Advance past `pattern` if the sequence starts with all of its elements.
///
/// Returns `first` advanced by exactly the length of `pattern` if the first
/// elements of the sequence equal, in order, the elements of `pattern`, else
/// returns `first` unchanged (never partially advanced).  An empty `pattern`
/// always matches, with zero advancement.
///
/// `pattern` is anything that can be iterated once, e.g. `"abc".chars()`,
/// `b"abc"`, or a [`Span`](struct.Span.html) of another cursor pair.
///
/// The source cursor must be a [`ForwardCursor`](trait.ForwardCursor.html),
/// because the working copy that walks the pattern may have moved before a
/// difference is found.  Single-pass cursors are rejected:
///
/// ```compile_fail
/// use scanning_core::{scan_seq, premade::{IterCursor, IterEnd}};
///
/// let first = IterCursor::new("abc".chars());
/// let _ = scan_seq(first, &IterEnd, "ab".chars());
/// ```
#[inline]
pub fn scan_seq<C, S, I>(first: C, last: &S, pattern: I) -> C
    where C: ForwardCursor,
          C::Item: PartialEq<I::Item>,
          S: Sentinel<C> + ?Sized,
          I: IntoIterator,
{
    scan_seq_with(first, last, pattern, equal, identity, identity)
}

/// Like [`scan_seq`](fn.scan_seq.html) but with an explicit comparison policy
/// `pred`, a transformation policy `proj1` for the source's elements, and a
/// transformation policy `proj2` for the pattern's elements.
///
/// Elements are compared left to right and the comparison stops at the first
/// difference, so the policies are invoked only for the elements up to and
/// including that difference, each projection exactly once per element.
pub fn scan_seq_with<C, S, I, V, W, P, J1, J2>(
    first: C,
    last: &S,
    pattern: I,
    pred: P,
    proj1: J1,
    proj2: J2,
)
    -> C
    where C: ForwardCursor,
          S: Sentinel<C> + ?Sized,
          I: IntoIterator,
          P: FnMut(&V, &W) -> bool,
          J1: FnMut(C::Item) -> V,
          J2: FnMut(I::Item) -> W,
{
    match match_prefix(first.clone(), last, pattern, pred, proj1, proj2) {
        Some(after) => after,
        None => first,
    }
}


/// Advance past one element that satisfies `pred`.
///
/// Returns `first` advanced by one if `first` is not at `last` and `pred`
/// returns `true` for its element, else returns `first` unchanged.
#[inline]
pub fn scan_if<C, S, P>(first: C, last: &S, pred: P) -> C
    where C: Cursor,
          S: Sentinel<C> + ?Sized,
          P: FnMut(&C::Item) -> bool,
{
    scan_if_with(first, last, pred, identity)
}

/// Like [`scan_if`](fn.scan_if.html) but `pred` is given the element as
/// transformed by `proj`.
pub fn scan_if_with<C, S, V, P, J>(first: C, last: &S, mut pred: P, mut proj: J) -> C
    where C: Cursor,
          S: Sentinel<C> + ?Sized,
          P: FnMut(&V) -> bool,
          J: FnMut(C::Item) -> V,
{
    if last.is_end(&first) || !pred(&proj(first.read())) {
        return first;
    }
    first.advanced(1)
}


/// Advance past one element that is not `value`.
///
/// Returns `first` advanced by one if `first` is not at `last` and its element
/// does not equal `value`, else returns `first` unchanged.
#[inline]
pub fn scan_not<C, S, T>(first: C, last: &S, value: T) -> C
    where C: Cursor,
          C::Item: PartialEq<T>,
          S: Sentinel<C> + ?Sized,
{
    scan_not_with(first, last, value, equal, identity)
}

/// Like [`scan_not`](fn.scan_not.html) but with an explicit comparison policy
/// `pred` and transformation policy `proj`.
pub fn scan_not_with<C, S, T, V, P, J>(first: C, last: &S, value: T, mut pred: P, mut proj: J)
                                       -> C
    where C: Cursor,
          S: Sentinel<C> + ?Sized,
          P: FnMut(&V, &T) -> bool,
          J: FnMut(C::Item) -> V,
{
    if last.is_end(&first) || pred(&proj(first.read()), &value) {
        return first;
    }
    first.advanced(1)
}


/// Advance by one element if the sequence does not start with `pattern`.
///
/// Returns `first` unchanged if the sequence starts with all of the elements of
/// `pattern`.  Otherwise, i.e. if the sequence is shorter than `pattern` or any
/// element differs, returns `first` advanced by exactly one, no matter how long
/// `pattern` is: a failed match only certifies that the pattern does not begin
/// here, not that any later element is free of it.
///
/// When `first` is at `last` it is returned unchanged, because there is no
/// element to step past.  An empty `pattern` always matches, so it never
/// advances.
///
/// As with [`scan_seq`](fn.scan_seq.html), the source cursor must be a
/// [`ForwardCursor`](trait.ForwardCursor.html):
///
/// ```compile_fail
/// use scanning_core::{scan_not_seq, premade::{IterCursor, IterEnd}};
///
/// let first = IterCursor::new("abc".chars());
/// let _ = scan_not_seq(first, &IterEnd, "xy".chars());
/// ```
#[inline]
pub fn scan_not_seq<C, S, I>(first: C, last: &S, pattern: I) -> C
    where C: ForwardCursor,
          C::Item: PartialEq<I::Item>,
          S: Sentinel<C> + ?Sized,
          I: IntoIterator,
{
    scan_not_seq_with(first, last, pattern, equal, identity, identity)
}

/// Like [`scan_not_seq`](fn.scan_not_seq.html) but with an explicit comparison
/// policy and a transformation policy for each side.
pub fn scan_not_seq_with<C, S, I, V, W, P, J1, J2>(
    first: C,
    last: &S,
    pattern: I,
    pred: P,
    proj1: J1,
    proj2: J2,
)
    -> C
    where C: ForwardCursor,
          S: Sentinel<C> + ?Sized,
          I: IntoIterator,
          P: FnMut(&V, &W) -> bool,
          J1: FnMut(C::Item) -> V,
          J2: FnMut(I::Item) -> W,
{
    if match_prefix(first.clone(), last, pattern, pred, proj1, proj2).is_some()
        || last.is_end(&first)
    {
        return first;
    }
    first.advanced(1)
}


/// Advance past one element that does not satisfy `pred`.
///
/// Returns `first` advanced by one if `first` is not at `last` and `pred`
/// returns `false` for its element, else returns `first` unchanged.
#[inline]
pub fn scan_if_not<C, S, P>(first: C, last: &S, pred: P) -> C
    where C: Cursor,
          S: Sentinel<C> + ?Sized,
          P: FnMut(&C::Item) -> bool,
{
    scan_if_not_with(first, last, pred, identity)
}

/// Like [`scan_if_not`](fn.scan_if_not.html) but `pred` is given the element
/// as transformed by `proj`.
pub fn scan_if_not_with<C, S, V, P, J>(first: C, last: &S, mut pred: P, mut proj: J) -> C
    where C: Cursor,
          S: Sentinel<C> + ?Sized,
          P: FnMut(&V) -> bool,
          J: FnMut(C::Item) -> V,
{
    if last.is_end(&first) || pred(&proj(first.read())) {
        return first;
    }
    first.advanced(1)
}


/// Walk `cursor` along `pattern`, comparing element by element.  Gives the
/// position after the last pattern element, or `None` at the first difference
/// or if the source ends before the pattern does.
fn match_prefix<C, S, I, V, W, P, J1, J2>(
    mut cursor: C,
    last: &S,
    pattern: I,
    mut pred: P,
    mut proj1: J1,
    mut proj2: J2,
)
    -> Option<C>
    where C: Cursor,
          S: Sentinel<C> + ?Sized,
          I: IntoIterator,
          P: FnMut(&V, &W) -> bool,
          J1: FnMut(C::Item) -> V,
          J2: FnMut(I::Item) -> W,
{
    for expected in pattern {
        if last.is_end(&cursor) || !pred(&proj1(cursor.read()), &proj2(expected)) {
            return None;
        }
        cursor.step();
    }
    Some(cursor)
}


#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::{Bounds, span, premade::{SliceCursor, StrCursor}};

    const SOURCE: &str = "Hello, world!";

    fn source() -> (StrCursor<'static>, StrCursor<'static>) {
        SOURCE.bounds()
    }

    fn returns_true<A, B>(_: &A, _: &B) -> bool { true }
    fn returns_false<A, B>(_: &A, _: &B) -> bool { false }

    #[test]
    fn scan_value() {
        let (first, last) = source();
        assert_eq!(scan(first, &last, 'H'), first.advanced(1));
        assert_eq!(scan(first, &last, 'H').read(), 'e');
        assert_eq!(scan(first, &last, 'B'), first);
    }

    #[test]
    fn scan_value_pred_overrides_equality() {
        let (first, last) = source();
        assert_eq!(scan_with(first, &last, 'B', returns_true, identity), first.advanced(1));
        assert_eq!(scan_with(first, &last, 'H', returns_false, identity), first);
    }

    #[test]
    fn scan_value_projection() {
        let (first, last) = source();
        let to_lower = |c: char| c.to_ascii_lowercase();
        assert_eq!(scan_with(first, &last, 'h', equal, to_lower), first.advanced(1));
        assert_eq!(scan_with(first, &last, 'H', equal, to_lower), first);
    }

    #[test]
    fn scan_value_at_end_invokes_nothing() {
        let (_, last) = source();
        let calls = Cell::new(0);
        let counted = |a: &char, b: &char| { calls.set(calls.get() + 1); a == b };
        assert_eq!(scan_with(last, &last, '!', counted, identity), last);
        assert_eq!(scan_not_with(last, &last, '?', counted, identity), last);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn scan_value_invokes_once() {
        let (first, last) = source();
        let preds = Cell::new(0);
        let projs = Cell::new(0);
        let _ = scan_with(first, &last, 'H',
                          |a: &char, b: &char| { preds.set(preds.get() + 1); a == b },
                          |c| { projs.set(projs.get() + 1); c });
        assert_eq!((preds.get(), projs.get()), (1, 1));
    }

    #[test]
    fn scan_pattern() {
        let (first, last) = source();
        assert_eq!(scan_seq(first, &last, "Hello".chars()), first.advanced(5));
        assert_eq!(scan_seq(first, &last, "Hello".chars()).read(), ',');
        assert_eq!(scan_seq(first, &last, "Bye".chars()), first);
        assert_eq!(scan_seq(first, &last, "".chars()), first);
        assert_eq!(scan_seq(first, &last, SOURCE.chars()), last);
    }

    #[test]
    fn scan_pattern_longer_than_source() {
        let (first, last) = "Hell".bounds();
        assert_eq!(scan_seq(first, &last, "Hello".chars()), first);
        assert_eq!(scan_seq(last, &last, "H".chars()), last);
        assert_eq!(scan_seq(last, &last, "".chars()), last);
    }

    #[test]
    fn scan_pattern_mismatch_late_returns_start() {
        let (first, last) = source();
        assert_eq!(scan_seq(first, &last, "Hello, world?".chars()), first);
        assert_eq!(scan_seq(first.advanced(7), &last, "world!".chars()), last);
    }

    #[test]
    fn scan_pattern_pred_overrides_equality() {
        let (first, last) = source();
        assert_eq!(scan_seq_with(first, &last, "Bye".chars(), returns_true, identity, identity),
                   first.advanced(3));
        assert_eq!(scan_seq_with(first, &last, "Hello".chars(), returns_false, identity, identity),
                   first);
    }

    #[test]
    fn scan_pattern_projections() {
        let (first, last) = source();
        let upper = |c: char| c.to_ascii_uppercase();
        let lower = |c: char| c.to_ascii_lowercase();
        assert_eq!(scan_seq_with(first, &last, "hello".chars(), equal, upper, upper),
                   first.advanced(5));
        assert_eq!(scan_seq_with(first, &last, "Hello".chars(), equal, upper, lower), first);
    }

    #[test]
    fn scan_pattern_short_circuits() {
        let (first, last) = source();
        let projs1 = Cell::new(0);
        let projs2 = Cell::new(0);
        let result = scan_seq_with(first, &last, "Help!".chars(), equal,
                                   |c: char| { projs1.set(projs1.get() + 1); c },
                                   |c: char| { projs2.set(projs2.get() + 1); c });
        assert_eq!(result, first);
        // 'H', 'e', 'l' match, 'l' vs 'p' differs, '!' is never looked at.
        assert_eq!((projs1.get(), projs2.get()), (4, 4));
    }

    #[test]
    fn scan_pattern_from_cursor_pair() {
        let (first, last) = source();
        let (pfirst, plast) = "Hello".bounds();
        assert_eq!(scan_seq(first, &last, span(pfirst, plast)), first.advanced(5));
    }

    #[test]
    fn scan_pattern_bytes() {
        let (first, last) = b"GET /index.html".bounds();
        assert_eq!(scan_seq(first, &last, b"GET "), first.advanced(4));
        assert_eq!(scan_seq(first, &last, b"POST"), first);
        assert_eq!(scan(first, &last, &b'G').offset(), 1);
    }

    #[test]
    fn scan_if_pred() {
        let (first, last) = source();
        assert_eq!(scan_if(first, &last, |_| true), first.advanced(1));
        assert_eq!(scan_if(first, &last, |_| false), first);
        assert_eq!(scan_if(first, &last, char::is_ascii_uppercase), first.advanced(1));
        assert_eq!(scan_if(last, &last, |_| true), last);
    }

    #[test]
    fn scan_if_projection() {
        let (first, last) = source();
        let to_lower = |c: char| c.to_ascii_lowercase();
        assert_eq!(scan_if_with(first, &last, |&c| c == 'h', to_lower), first.advanced(1));
        assert_eq!(scan_if_with(first, &last, |&c| c == 'H', to_lower), first);
    }

    #[test]
    fn scan_if_invocations() {
        let (first, last) = source();
        let calls = Cell::new(0);
        let counted = |_: &char| { calls.set(calls.get() + 1); true };
        let _ = scan_if(first, &last, counted);
        let _ = scan_if(last, &last, counted);
        let _ = scan_if_not(last, &last, counted);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn projections_invoked_once() {
        let (first, last) = source();
        let projs = Cell::new(0);
        let counted = |c: char| { projs.set(projs.get() + 1); c };

        let _ = scan_if_with(first, &last, |&c| c == 'H', counted);
        assert_eq!(projs.get(), 1);
        let _ = scan_if_not_with(first, &last, |&c| c == 'H', counted);
        assert_eq!(projs.get(), 2);
        let _ = scan_not_with(first, &last, 'H', equal, counted);
        assert_eq!(projs.get(), 3);
        let _ = scan_not_with(first, &last, 'B', equal, counted);
        assert_eq!(projs.get(), 4);

        // Once per compared source element: 'H', 'e', 'l' match, then 'l' differs.
        projs.set(0);
        let _ = scan_not_seq_with(first, &last, "Help".chars(), equal, counted, identity);
        assert_eq!(projs.get(), 4);
        projs.set(0);
        let _ = scan_not_seq_with(first, &last, "Hello".chars(), equal, counted, identity);
        assert_eq!(projs.get(), 5);

        projs.set(0);
        let _ = scan_if_with(last, &last, |_| true, counted);
        let _ = scan_not_with(last, &last, 'B', equal, counted);
        let _ = scan_not_seq_with(last, &last, "B".chars(), equal, counted, identity);
        assert_eq!(projs.get(), 0);
    }

    #[test]
    fn scan_not_value() {
        let (first, last) = source();
        assert_eq!(scan_not(first, &last, 'B'), first.advanced(1));
        assert_eq!(scan_not(first, &last, 'H'), first);
        assert_eq!(scan_not(last, &last, 'B'), last);
        assert_eq!(scan_not_with(first, &last, 'B', returns_true, identity), first);
        assert_eq!(scan_not_with(first, &last, 'H', returns_false, identity), first.advanced(1));
    }

    #[test]
    fn scan_not_value_projection() {
        let (first, last) = source();
        let to_upper = |c: char| c.to_ascii_uppercase();
        assert_eq!(scan_not_with(first, &last, 'H', equal, to_upper), first);
        assert_eq!(scan_not_with(first, &last, 'h', equal, to_upper), first.advanced(1));
    }

    #[test]
    fn scan_not_pattern_advances_by_one() {
        let (first, last) = source();
        assert_eq!(scan_not_seq(first, &last, "Hello".chars()), first);
        assert_eq!(scan_not_seq(first, &last, "Bye".chars()), first.advanced(1));
        assert_eq!(scan_not_seq(first, &last, "Bye".chars()).read(), 'e');
        assert_eq!(scan_not_seq(first, &last, "Help".chars()), first.advanced(1));
        assert_eq!(scan_not_seq(first, &last, "".chars()), first);
    }

    #[test]
    fn scan_not_pattern_shorter_source() {
        let (first, last) = "He".bounds();
        assert_eq!(scan_not_seq(first, &last, "Hello".chars()), first.advanced(1));
        assert_eq!(scan_not_seq(last, &last, "Hello".chars()), last);
    }

    #[test]
    fn scan_not_pattern_pred() {
        let (first, last) = source();
        assert_eq!(scan_not_seq_with(first, &last, "Bye".chars(), returns_true, identity, identity),
                   first);
        assert_eq!(scan_not_seq_with(first, &last, "Hello".chars(), returns_false, identity,
                                     identity),
                   first.advanced(1));
        let upper = |c: char| c.to_ascii_uppercase();
        assert_eq!(scan_not_seq_with(first, &last, "hello".chars(), equal, upper, upper), first);
    }

    #[test]
    fn scan_if_not_pred() {
        let (first, last) = source();
        assert_eq!(scan_if_not(first, &last, |_| false), first.advanced(1));
        assert_eq!(scan_if_not(first, &last, |_| true), first);
        let to_lower = |c: char| c.to_ascii_lowercase();
        assert_eq!(scan_if_not_with(first, &last, |&c| c == 'h', to_lower), first);
        assert_eq!(scan_if_not_with(first, &last, |&c| c == 'H', to_lower), first.advanced(1));
    }

    #[test]
    fn slice_of_tokens() {
        #[derive(PartialEq, Debug)]
        enum Tok { Open, Word, Close }

        let toks = [Tok::Open, Tok::Word, Tok::Word, Tok::Close];
        let (first, last) = toks.bounds();
        assert_eq!(scan(first, &last, &Tok::Open), SliceCursor::new(&toks).advanced(1));
        assert_eq!(scan_seq(first, &last, &[Tok::Open, Tok::Word]).offset(), 2);
        assert_eq!(scan_if(first.advanced(1), &last, |t| **t == Tok::Word).offset(), 2);
        assert_eq!(scan_not(first.advanced(3), &last, &Tok::Close).offset(), 3);
    }
}
