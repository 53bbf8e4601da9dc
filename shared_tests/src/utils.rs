//! Utilities for inspecting the positions returned by scans.

use super::*;


/// How many steps it takes to go from `from` to `to`, or `None` if `to` is not
/// reached before `last`.
pub fn distance<C, S>(from: &C, to: &C, last: &S) -> Option<usize>
    where C: ForwardCursor,
          S: Sentinel<C> + ?Sized,
{
    let mut cursor = from.clone();
    let mut steps = 0;
    loop {
        if cursor == *to {
            return Some(steps);
        }
        if last.is_end(&cursor) {
            return None;
        }
        cursor.step();
        steps += 1;
    }
}

/// The element at `at`, or `None` if it is the end.
pub fn peek<C, S>(at: &C, last: &S) -> Option<C::Item>
    where C: Cursor,
          S: Sentinel<C> + ?Sized,
{
    if last.is_end(at) { None } else { Some(at.read()) }
}

/// All the `char`s from `at` to the end.
pub fn rest<C, S>(at: &C, last: &S) -> String
    where C: Cursor<Item = char> + Clone,
          S: Sentinel<C> + ?Sized,
{
    let mut cursor = at.clone();
    let mut chars = String::new();
    while !last.is_end(&cursor) {
        chars.push(cursor.read());
        cursor.step();
    }
    chars
}
