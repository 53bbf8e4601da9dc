//! Counted sequences: a cursor that knows how many elements it has passed, and
//! a `Sentinel` that ends a sequence after a given count.

use crate::{Cursor, Sentinel};


/// Wraps any cursor and counts the steps taken from where it was wrapped.
///
/// Equality compares the wrapped cursors and the counts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Counted<C> {
    inner: C,
    count: usize,
}

impl<C> Counted<C> {
    /// Start counting at `inner`'s position.
    #[inline]
    pub fn new(inner: C) -> Self {
        Self { inner, count: 0 }
    }

    /// How many elements have been passed since this was made.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The wrapped cursor.
    #[inline]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap the wrapped cursor.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for Counted<C> {
    type Item = C::Item;

    #[inline]
    fn read(&self) -> Self::Item {
        self.inner.read()
    }

    #[inline]
    fn step(&mut self) {
        self.inner.step();
        self.count += 1;
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.inner.advance(n);
        self.count += n;
    }
}


/// The end of a counted sequence: a [`Counted`](struct.Counted.html) cursor is
/// at this end once it has passed this many elements.
///
/// The wrapped sequence must have at least this many elements.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Count(pub usize);

impl<C> Sentinel<Counted<C>> for Count {
    #[inline]
    fn is_end(&self, cursor: &Counted<C>) -> bool {
        cursor.count >= self.0
    }
}
