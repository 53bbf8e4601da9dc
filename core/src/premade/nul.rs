//! A `Sentinel` whose end is computed: the first NUL byte.

use crate::{Sentinel, SliceCursor};


/// The end of a NUL-terminated byte sequence, as in C strings.
///
/// A [`SliceCursor`](struct.SliceCursor.html) over bytes is at this end when
/// it reads a `0` byte, or when it reaches the end of its slice (so a missing
/// terminator never reads out of bounds).
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct NulTerminated;

impl Sentinel<SliceCursor<'_, u8>> for NulTerminated {
    #[inline]
    fn is_end(&self, cursor: &SliceCursor<'_, u8>) -> bool {
        cursor.rest().first().map_or(true, |&b| b == 0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cursor, scan_seq, scan_while_excluding, scan};

    #[test]
    fn ends_at_nul() {
        let buf = b"key=val\0garbage";
        let first = SliceCursor::new(buf);
        assert!(!NulTerminated.is_end(&first));
        assert!(NulTerminated.is_end(&first.advanced(7)));

        let eq_at = scan_while_excluding(first, &NulTerminated, |c, l| scan(c, l, &b'='));
        assert_eq!(eq_at.offset(), 3);
        let end = scan_while_excluding(eq_at.advanced(1), &NulTerminated, |c, _| c);
        assert_eq!(eq_at.advanced(1).until(&end), b"val");
    }

    #[test]
    fn pattern_cannot_cross_nul() {
        let buf = b"ab\0cd";
        let first = SliceCursor::new(buf);
        assert_eq!(scan_seq(first, &NulTerminated, b"ab"), first.advanced(2));
        assert_eq!(scan_seq(first, &NulTerminated, b"ab\0"), first);
    }

    #[test]
    fn unterminated() {
        let buf = b"ab";
        let first = SliceCursor::new(buf);
        assert!(NulTerminated.is_end(&first.advanced(2)));
        assert_eq!(scan_while_excluding(first, &NulTerminated, |c, _| c).offset(), 2);
    }
}
