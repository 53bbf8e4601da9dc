//! A `Cursor` implementation for borrowed string slices (`&str`) that steps by
//! whole `char`s.  This is useful for zero-copy lexing of in-memory UTF-8
//! strings.

use crate::{Cursor, CursorError};


/// A position within a borrowed string slice, given as a byte offset that is
/// always on a `char` boundary.  Reads give the `char` at that position.
///
/// The end of a string is the cursor at its length, made by
/// [`end_of`](#method.end_of), which serves as its own
/// [`Sentinel`](../trait.Sentinel.html).
///
/// Two `StrCursor`s are equal when they are in the same string (same address
/// and length) at the same offset.
#[derive(Copy, Clone, Debug)]
pub struct StrCursor<'s> {
    src: &'s str,
    byte_pos: usize,
}

impl<'s> StrCursor<'s> {
    /// Make a cursor at the start of `src`.
    #[inline]
    pub fn new(src: &'s str) -> Self {
        Self { src, byte_pos: 0 }
    }

    /// Make the cursor at the end of `src`.
    #[inline]
    pub fn end_of(src: &'s str) -> Self {
        Self { src, byte_pos: src.len() }
    }

    /// Make a cursor at `byte_pos` within `src`, e.g. to resume from an
    /// [`offset`](#method.offset) saved earlier.
    pub fn at(src: &'s str, byte_pos: usize) -> Result<Self, CursorError> {
        if byte_pos > src.len() {
            Err(CursorError::OutOfBounds { offset: byte_pos, len: src.len() })
        } else if !src.is_char_boundary(byte_pos) {
            Err(CursorError::NotCharBoundary { offset: byte_pos })
        } else {
            Ok(Self { src, byte_pos })
        }
    }

    /// The byte offset of this position within its string.
    #[inline]
    pub fn offset(&self) -> usize {
        self.byte_pos
    }

    /// The entire string this cursor is in.
    #[inline]
    pub fn src(&self) -> &'s str {
        self.src
    }

    /// The text from this position to the end of the string.
    #[inline]
    pub fn rest(&self) -> &'s str {
        &self.src[self.byte_pos ..]
    }

    /// The text from this position up to, but excluding, `other`'s.  Empty if
    /// `other` is not after this.
    #[inline]
    pub fn until(&self, other: &Self) -> &'s str {
        if other.byte_pos > self.byte_pos {
            &self.src[self.byte_pos .. other.byte_pos]
        } else {
            ""
        }
    }

    fn current(&self) -> char {
        // A position that is not at the end always has a next `char`.
        self.rest().chars().next().unwrap_or_else(|| past_end(self.byte_pos))
    }
}

#[cold]
#[inline(never)]
fn past_end(byte_pos: usize) -> ! {
    panic!("StrCursor used past the end, at byte offset {}", byte_pos)
}

impl<'s> Cursor for StrCursor<'s> {
    type Item = char;

    #[inline]
    fn read(&self) -> Self::Item {
        self.current()
    }

    #[inline]
    fn step(&mut self) {
        self.byte_pos += self.current().len_utf8();
    }
}

impl PartialEq for StrCursor<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.byte_pos == other.byte_pos && core::ptr::eq(self.src, other.src)
    }
}

impl Eq for StrCursor<'_> {}
