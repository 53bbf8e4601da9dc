//! Used by the tests of both the [core](../scanning_core/index.html) and the
//! [full](../scanning/index.html) crates.  It provides test suites that can be
//! run against any multi-pass [`Cursor`](../scanning_core/trait.Cursor.html)
//! type over `char`s, so that every premade cursor is held to the same
//! behavior.

use std::fmt::Debug;

use scanning_core::*;


pub mod suites;
pub mod utils;
