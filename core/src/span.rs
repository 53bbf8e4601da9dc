//! Iteration of the elements between a cursor and a sentinel.

use core::iter::FusedIterator;

use crate::{Cursor, Sentinel};


/// An `Iterator` of the elements from a cursor up to a sentinel.
///
/// This is how a cursor pair is given as the pattern of the pattern-form scan
/// operations.  It only ever steps forward, so the cursor may be single-pass.
#[derive(Clone, Debug)]
pub struct Span<C, S> {
    cursor: C,
    end: S,
}

impl<C, S> Span<C, S>
    where C: Cursor,
          S: Sentinel<C>,
{
    /// Make a new `Span` of the elements from `cursor` until `end`.
    #[inline]
    pub fn new(cursor: C, end: S) -> Self {
        Self { cursor, end }
    }

    /// The position of the next element that would be yielded.
    #[inline]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Give back the current cursor and the sentinel.
    #[inline]
    pub fn into_parts(self) -> (C, S) {
        (self.cursor, self.end)
    }
}

/// Shorthand for [`Span::new`](struct.Span.html#method.new).
#[inline]
pub fn span<C, S>(cursor: C, end: S) -> Span<C, S>
    where C: Cursor,
          S: Sentinel<C>,
{
    Span::new(cursor, end)
}

impl<C, S> Iterator for Span<C, S>
    where C: Cursor,
          S: Sentinel<C>,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.end.is_end(&self.cursor) {
            None
        } else {
            let item = self.cursor.read();
            self.cursor.step();
            Some(item)
        }
    }
}

impl<C, S> FusedIterator for Span<C, S>
    where C: Cursor,
          S: Sentinel<C>,
{}
