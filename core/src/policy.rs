//! The default comparison and transformation policies.
//!
//! A comparison policy is any `FnMut(&A, &B) -> bool`.  It is not required to
//! be symmetric or transitive, only to answer consistently for the same
//! operands.  A transformation policy ("projection") is any `FnMut(T) -> V`,
//! applied to each element exactly once before it is compared.
//!
//! The scan operations without the `_with` suffix use the functions here.  Pass
//! them explicitly to a `_with` form to override only one of the two policies:
//!
//! ```
//! use scanning_core::{scan_with, policy::equal, Bounds};
//!
//! let (first, last) = "Hello".bounds();
//! let next = scan_with(first, &last, 'h', equal, |c: char| c.to_ascii_lowercase());
//! assert_eq!(next.offset(), 1);
//! ```

pub use core::convert::identity;


/// The default comparison policy: `PartialEq`.
#[inline]
pub fn equal<A, B>(a: &A, b: &B) -> bool
    where A: PartialEq<B> + ?Sized,
          B: ?Sized,
{
    a == b
}
