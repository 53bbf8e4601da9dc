//! A single-pass `Cursor` over any `Iterator`.

use crate::{Cursor, Sentinel};


/// A single-pass cursor over any `Iterator` whose items can be cloned.
///
/// The iterator is pulled one item ahead, so that the current element can be
/// read any number of times.  Once stepped, an earlier position is gone, and so
/// this is intentionally neither `Clone` nor `PartialEq`: it can be the source
/// of the single-element scan operations, and the pattern of the pattern
/// forms (through [`Span`](../struct.Span.html)), but not the source of the
/// pattern forms or of the exclusion combinators.
///
/// Its end is [`IterEnd`](struct.IterEnd.html), reached when the iterator is
/// exhausted.  For a multi-pass cursor over an iterator, see the `std` crate's
/// buffered stream cursor.
#[derive(Debug)]
pub struct IterCursor<I>
    where I: Iterator,
{
    current: Option<I::Item>,
    iter: I,
}

impl<I> IterCursor<I>
    where I: Iterator,
          I::Item: Clone,
{
    /// Make a cursor at the first item of `iter`.
    pub fn new<II>(iter: II) -> Self
        where II: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        let mut iter = iter.into_iter();
        Self { current: iter.next(), iter }
    }

    /// Give back the rest of the items, including the current one.
    pub fn into_rest(self) -> impl Iterator<Item = I::Item> {
        self.current.into_iter().chain(self.iter)
    }
}

impl<I> Cursor for IterCursor<I>
    where I: Iterator,
          I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn read(&self) -> Self::Item {
        match &self.current {
            Some(item) => item.clone(),
            None => panic!("IterCursor read past the end"),
        }
    }

    #[inline]
    fn step(&mut self) {
        self.current = self.iter.next();
    }
}


/// The end of an [`IterCursor`](struct.IterCursor.html): its iterator is
/// exhausted.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct IterEnd;

impl<I> Sentinel<IterCursor<I>> for IterEnd
    where I: Iterator,
{
    #[inline]
    fn is_end(&self, cursor: &IterCursor<I>) -> bool {
        cursor.current.is_none()
    }
}
