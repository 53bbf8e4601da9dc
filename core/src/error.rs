//! Errors that might be returned when constructing a cursor at a position.
//!
//! The scan operations themselves have no errors.

use thiserror::Error;


/// Why a cursor could not be made at a requested position.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
pub enum CursorError {
    /// The requested offset is past the end of the sequence.
    #[error("offset {offset} is out of bounds for a sequence of length {len}")]
    OutOfBounds {
        /// The requested offset.
        offset: usize,
        /// The length of the sequence.
        len: usize,
    },
    /// The requested byte offset is inside a UTF-8 encoded character.
    #[error("byte offset {offset} is not on a character boundary")]
    NotCharBoundary {
        /// The requested byte offset.
        offset: usize,
    },
}
