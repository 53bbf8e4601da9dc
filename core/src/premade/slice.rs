//! A `Cursor` implementation for borrowed slices (`&[T]`).  This is useful for
//! scanning in-memory bytes or already-lexed tokens.

use core::fmt::{self, Debug, Formatter};
use core::ptr;

use crate::{Cursor, CursorError};


/// A position within a borrowed slice, given as an index.  Reads give
/// references to the elements.
///
/// The end of a slice is the cursor at index `len`, made by
/// [`end_of`](#method.end_of), which serves as its own
/// [`Sentinel`](../trait.Sentinel.html).
///
/// Two `SliceCursor`s are equal when they are in the same slice (same address
/// and length) at the same index, not when the elements they would read are
/// equal.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Make a cursor at the start of `slice`.
    #[inline]
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, index: 0 }
    }

    /// Make the cursor one past the last element of `slice`.
    #[inline]
    pub fn end_of(slice: &'a [T]) -> Self {
        Self { slice, index: slice.len() }
    }

    /// Make a cursor at `index` within `slice`.  `index` may equal the length,
    /// which is the end position.
    pub fn at(slice: &'a [T], index: usize) -> Result<Self, CursorError> {
        if index > slice.len() {
            return Err(CursorError::OutOfBounds { offset: index, len: slice.len() });
        }
        Ok(Self { slice, index })
    }

    /// The index of this position within its slice.
    #[inline]
    pub fn offset(&self) -> usize {
        self.index
    }

    /// The entire slice this cursor is in.
    #[inline]
    pub fn slice(&self) -> &'a [T] {
        self.slice
    }

    /// The elements from this position to the end of the slice.
    #[inline]
    pub fn rest(&self) -> &'a [T] {
        &self.slice[self.index ..]
    }

    /// The elements from this position up to, but excluding, `other`'s.
    /// Empty if `other` is not after this.
    ///
    /// This is the usual way to get the text that a chain of scans consumed.
    #[inline]
    pub fn until(&self, other: &Self) -> &'a [T] {
        if other.index > self.index {
            &self.slice[self.index .. other.index]
        } else {
            &[]
        }
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn read(&self) -> Self::Item {
        &self.slice[self.index]
    }

    #[inline]
    fn step(&mut self) {
        self.index += 1;
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.index += n;
    }
}

// Implemented manually so that `T` is not required to be `Copy`, `Clone`,
// `PartialEq`, or `Debug`.

impl<T> Clone for SliceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && ptr::eq(self.slice, other.slice)
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
         .field("slice", &self.slice.as_ptr_range())
         .field("index", &self.index)
         .finish()
    }
}
