//! A multi-pass `Cursor` over any `Iterator`, including fallible ones and
//! `std::io::Read`ers, by buffering what has been pulled from it.

use std::{
    cell::RefCell,
    convert::Infallible,
    fmt::{self, Debug, Formatter},
    io::{self, BufReader, Read},
    rc::Rc,
};

use tracing::{debug, trace};

use crate::{Cursor, Sentinel};


/// The elements pulled so far from a source, shared by every cursor of a
/// stream.  Its memory grows with the furthest position that has been read.
struct Buffer<'a, T, E> {
    source: Box<dyn Iterator<Item = Result<T, E>> + 'a>,
    items: Vec<T>,
    error: Option<E>,
    done: bool,
}

impl<T, E> Buffer<'_, T, E> {
    /// Pull from the source until `index` is buffered or the source ends.
    /// Returns whether `index` is buffered.
    fn fill_to(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            return true;
        }
        if !self.done {
            let before = self.items.len();
            while !self.done && self.items.len() <= index {
                match self.source.next() {
                    Some(Ok(item)) => self.items.push(item),
                    Some(Err(error)) => {
                        debug!(buffered = self.items.len(), "stream source failed");
                        self.error = Some(error);
                        self.done = true;
                    }
                    None => {
                        debug!(buffered = self.items.len(), "stream source exhausted");
                        self.done = true;
                    }
                }
            }
            trace!(pulled = self.items.len() - before, index, "stream buffer filled");
        }
        index < self.items.len()
    }
}


/// A position within a stream of elements pulled from an iterator.
///
/// Every clone of a cursor shares the same buffer, so an earlier position stays
/// readable after a later one has been reached.  This makes any single-pass
/// source usable with the pattern-form scans and the exclusion combinators,
/// which need to return to where they started after a failed match.  Elements
/// are pulled only when a position is read or checked against the end.
///
/// Two `StreamCursor`s are equal when they share the same buffer and are at
/// the same index.
///
/// Made by [`stream`](fn.stream.html), [`try_stream`](fn.try_stream.html), or
/// [`read_bytes`](fn.read_bytes.html), along with the
/// [`StreamEnd`](struct.StreamEnd.html) of the same stream.
pub struct StreamCursor<'a, T, E = Infallible> {
    buffer: Rc<RefCell<Buffer<'a, T, E>>>,
    index: usize,
}

impl<T, E> StreamCursor<'_, T, E> {
    /// The number of elements before this position.
    #[inline]
    pub fn offset(&self) -> usize {
        self.index
    }

    /// How many elements of this stream have been pulled from its source so
    /// far.
    pub fn buffered(&self) -> usize {
        self.buffer.borrow().items.len()
    }

    /// The elements from this position up to, but excluding, `other`'s.  Empty
    /// if `other` is not after this or is of another stream.
    pub fn until(&self, other: &Self) -> Vec<T>
        where T: Clone,
    {
        if !Rc::ptr_eq(&self.buffer, &other.buffer) || other.index <= self.index {
            return Vec::new();
        }
        let mut buffer = self.buffer.borrow_mut();
        let _ = buffer.fill_to(other.index - 1);
        let end = other.index.min(buffer.items.len());
        buffer.items[self.index .. end].to_vec()
    }
}

impl<T, E> Cursor for StreamCursor<'_, T, E>
    where T: Clone,
{
    type Item = T;

    fn read(&self) -> Self::Item {
        let mut buffer = self.buffer.borrow_mut();
        if !buffer.fill_to(self.index) {
            panic!("StreamCursor read past the end, at index {}", self.index);
        }
        buffer.items[self.index].clone()
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

// Implemented manually so that `T` and `E` are not required to be `Clone`,
// `PartialEq`, or `Debug`.

impl<T, E> Clone for StreamCursor<'_, T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { buffer: Rc::clone(&self.buffer), index: self.index }
    }
}

impl<T, E> PartialEq for StreamCursor<'_, T, E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && Rc::ptr_eq(&self.buffer, &other.buffer)
    }
}

impl<T, E> Eq for StreamCursor<'_, T, E> {}

impl<T, E> Debug for StreamCursor<'_, T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCursor")
         .field("index", &self.index)
         .field("buffered", &self.buffered())
         .finish()
    }
}


/// The end of a stream: reached when its source is exhausted or has failed.
///
/// Checking whether a cursor is at the end may pull one element from the
/// source.  If the source failed, its error can be taken from here.
///
/// It must only be checked against cursors of the same stream, i.e. those made
/// by the same call that made it, which is asserted in debug builds.
pub struct StreamEnd<'a, T, E = Infallible> {
    buffer: Rc<RefCell<Buffer<'a, T, E>>>,
}

impl<T, E> StreamEnd<'_, T, E> {
    /// Take the error that ended the stream, if it ended because of one.  Gives
    /// `None` if the source has not failed (yet), or if the error was already
    /// taken.
    pub fn take_error(&self) -> Option<E> {
        self.buffer.borrow_mut().error.take()
    }

    /// Has the source been pulled until it ended?
    pub fn is_exhausted(&self) -> bool {
        self.buffer.borrow().done
    }
}

impl<'a, T, E> Sentinel<StreamCursor<'a, T, E>> for StreamEnd<'a, T, E> {
    fn is_end(&self, cursor: &StreamCursor<'a, T, E>) -> bool {
        debug_assert!(Rc::ptr_eq(&self.buffer, &cursor.buffer),
                      "StreamEnd checked against a cursor of another stream");
        !self.buffer.borrow_mut().fill_to(cursor.index)
    }
}

impl<T, E> Debug for StreamEnd<'_, T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buffer = self.buffer.borrow();
        f.debug_struct("StreamEnd")
         .field("buffered", &buffer.items.len())
         .field("done", &buffer.done)
         .field("failed", &buffer.error.is_some())
         .finish()
    }
}


/// Make the start and end of a stream of the items of `iter`.
///
/// ```
/// use scanning::{scan_seq, stream::stream};
///
/// let (first, last) = stream("Hello".chars());
/// // The pattern fails late, but the start is still readable.
/// assert_eq!(scan_seq(first.clone(), &last, "Help".chars()), first);
/// assert_eq!(scan_seq(first.clone(), &last, "Hell".chars()).offset(), 4);
/// ```
pub fn stream<'a, I>(iter: I) -> (StreamCursor<'a, I::Item>, StreamEnd<'a, I::Item>)
    where I: IntoIterator,
          I::IntoIter: 'a,
          I::Item: 'a,
{
    try_stream(iter.into_iter().map(Ok))
}

/// Make the start and end of a stream of the `Ok` values of `iter`.  The first
/// `Err` ends the stream and is kept by the [`StreamEnd`](struct.StreamEnd.html).
pub fn try_stream<'a, I, T, E>(iter: I) -> (StreamCursor<'a, T, E>, StreamEnd<'a, T, E>)
    where I: IntoIterator<Item = Result<T, E>>,
          I::IntoIter: 'a,
{
    let buffer = Rc::new(RefCell::new(Buffer {
        source: Box::new(iter.into_iter()),
        items: Vec::new(),
        error: None,
        done: false,
    }));
    (StreamCursor { buffer: Rc::clone(&buffer), index: 0 }, StreamEnd { buffer })
}

/// Make the start and end of a stream of the bytes of `reader`, which is
/// wrapped in a `BufReader`.  A read error ends the stream and is kept by the
/// [`StreamEnd`](struct.StreamEnd.html).
pub fn read_bytes<'a, R>(reader: R)
                         -> (StreamCursor<'a, u8, io::Error>, StreamEnd<'a, u8, io::Error>)
    where R: Read + 'a,
{
    try_stream(BufReader::new(reader).bytes())
}
