//! Suites of tests applied across multiple crates.
//!
//! Each suite is given a function that makes the start and the end of a
//! sequence of the `char`s of a string, and checks every scan operation against
//! sequences made by it.


use super::*;
use super::utils::{distance, peek, rest};


/// Checks the given expression, of a scan from `first` of a sequence made from
/// `$src`, returns a position exactly `$n` steps after `first`.  `$n` of 0
/// means unchanged.  Gives the returned position and the end.
macro_rules! test_at {
    ($make:ident, $src:expr, |$first:ident, $last:ident| $op:expr => $n:expr) => {{
        let (first, last) = $make($src);
        let result = {
            let $first = first.clone();
            let $last = &last;
            $op
        };
        assert_eq!(distance(&first, &result, &last), Some($n),
                   "`{}` on {:?}", stringify!($op), $src);
        (result, last)
    }};
}

/// Like `test_at!` but for when the returned position is not needed.
macro_rules! test {
    ($($args:tt)*) => {{
        let _ = test_at!($($args)*);
    }};
}


fn returns_true<A, B>(_: &A, _: &B) -> bool { true }
fn returns_false<A, B>(_: &A, _: &B) -> bool { false }
fn to_lower(c: char) -> char { c.to_ascii_lowercase() }
fn to_upper(c: char) -> char { c.to_ascii_uppercase() }


/// Runs all the suites.
pub fn test_suite_all<M, C, S>(make: M)
    where M: Fn(&'static str) -> (C, S),
          C: ForwardCursor<Item = char> + Debug,
          S: Sentinel<C>,
{
    test_suite_scan(&make);
    test_suite_scan_if(&make);
    test_suite_scan_not(&make);
    test_suite_exclusion(&make);
    test_suite_demos(&make);
}


/// `scan`, in its value and pattern forms, with and without policies.
pub fn test_suite_scan<M, C, S>(make: M)
    where M: Fn(&'static str) -> (C, S),
          C: ForwardCursor<Item = char> + Debug,
          S: Sentinel<C>,
{
    const HW: &str = "Hello, world!";

    // Single value
    let (at, last) = test_at!(make, HW, |f, l| scan(f, l, 'H') => 1);
    assert_eq!(peek(&at, &last), Some('e'));
    let (at, last) = test_at!(make, HW, |f, l| scan(f, l, 'B') => 0);
    assert_eq!(peek(&at, &last), Some('H'));
    test!(make, HW, |f, l| scan(f, l, 'e') => 0);
    test!(make, "", |f, l| scan(f, l, 'H') => 0);
    test!(make, "H", |f, l| scan(f, l, 'H') => 1);

    // Comparison policy
    test!(make, HW, |f, l| scan_with(f, l, 'B', returns_true, policy::identity) => 1);
    test!(make, HW, |f, l| scan_with(f, l, 'H', returns_false, policy::identity) => 0);
    test!(make, "", |f, l| scan_with(f, l, 'H', returns_true, policy::identity) => 0);

    // Projection
    test!(make, HW, |f, l| scan_with(f, l, 'h', policy::equal, to_lower) => 1);
    test!(make, HW, |f, l| scan_with(f, l, 'H', policy::equal, to_lower) => 0);

    // Pattern
    let (at, last) = test_at!(make, HW, |f, l| scan_seq(f, l, "Hello".chars()) => 5);
    assert_eq!(peek(&at, &last), Some(','));
    assert_eq!(rest(&at, &last), ", world!");
    test!(make, HW, |f, l| scan_seq(f, l, "Bye".chars()) => 0);
    test!(make, HW, |f, l| scan_seq(f, l, "Hello!".chars()) => 0);
    test!(make, HW, |f, l| scan_seq(f, l, "".chars()) => 0);
    test!(make, HW, |f, l| scan_seq(f, l, "H".chars()) => 1);
    test!(make, HW, |f, l| scan_seq(f, l, HW.chars()) => 13);
    test!(make, HW, |f, l| scan_seq(f, l, "Hello, world!!".chars()) => 0);
    test!(make, "Hell", |f, l| scan_seq(f, l, "Hello".chars()) => 0);
    test!(make, "", |f, l| scan_seq(f, l, "".chars()) => 0);
    test!(make, "", |f, l| scan_seq(f, l, "a".chars()) => 0);
    test!(make, "λ→λ", |f, l| scan_seq(f, l, "λ→".chars()) => 2);
    test!(make, HW, |f, l| scan_seq(f, l, ['H', 'e'].iter().copied()) => 2);

    // Pattern with policies
    test!(make, HW, |f, l| scan_seq_with(f, l, "Bye".chars(), returns_true,
                                          policy::identity, policy::identity) => 3);
    test!(make, HW, |f, l| scan_seq_with(f, l, "Hello".chars(), returns_false,
                                          policy::identity, policy::identity) => 0);
    test!(make, "Hi", |f, l| scan_seq_with(f, l, "Bye".chars(), returns_true,
                                            policy::identity, policy::identity) => 0);
    test!(make, HW, |f, l| scan_seq_with(f, l, "hELLO".chars(), policy::equal,
                                          to_upper, to_upper) => 5);
    test!(make, HW, |f, l| scan_seq_with(f, l, "Hello".chars(), policy::equal,
                                          to_upper, to_lower) => 0);

    // Chained
    let (first, last) = make(HW);
    let after_hello = scan_seq(first.clone(), &last, "Hello".chars());
    let after_comma = scan(after_hello.clone(), &last, ',');
    let after_space = scan_if(after_comma.clone(), &last, |c| c.is_whitespace());
    assert_eq!(distance(&first, &after_space, &last), Some(7));
    assert_eq!(rest(&after_space, &last), "world!");
}


/// `scan_if` and `scan_if_not`, including their complementarity.
pub fn test_suite_scan_if<M, C, S>(make: M)
    where M: Fn(&'static str) -> (C, S),
          C: ForwardCursor<Item = char> + Debug,
          S: Sentinel<C>,
{
    const HW: &str = "Hello, world!";

    test!(make, HW, |f, l| scan_if(f, l, |_| true) => 1);
    test!(make, HW, |f, l| scan_if(f, l, |_| false) => 0);
    test!(make, HW, |f, l| scan_if(f, l, char::is_ascii_uppercase) => 1);
    test!(make, "", |f, l| scan_if(f, l, |_| true) => 0);
    test!(make, HW, |f, l| scan_if_with(f, l, |&c| c == 'h', to_lower) => 1);
    test!(make, HW, |f, l| scan_if_with(f, l, |&c| c == 'H', to_lower) => 0);

    test!(make, HW, |f, l| scan_if_not(f, l, |_| false) => 1);
    test!(make, HW, |f, l| scan_if_not(f, l, |_| true) => 0);
    test!(make, "", |f, l| scan_if_not(f, l, |_| false) => 0);
    test!(make, HW, |f, l| scan_if_not_with(f, l, |&c| c == 'h', to_lower) => 0);
    test!(make, HW, |f, l| scan_if_not_with(f, l, |&c| c == 'H', to_lower) => 1);

    // At every position, exactly one of the two advances.
    let preds: [fn(&char) -> bool; 4] = [
        |c| c.is_alphabetic(),
        char::is_ascii_punctuation,
        |c| *c == 'o',
        |_| true,
    ];
    for pred in &preds {
        let (mut at, last) = make(HW);
        while !last.is_end(&at) {
            let by_if = scan_if(at.clone(), &last, pred) != at;
            let by_if_not = scan_if_not(at.clone(), &last, pred) != at;
            assert!(by_if ^ by_if_not, "at {:?}", at);
            at.step();
        }
        assert_eq!(scan_if(at.clone(), &last, pred), at);
        assert_eq!(scan_if_not(at.clone(), &last, pred), at);
    }
}


/// `scan_not`, in its value and pattern forms.
pub fn test_suite_scan_not<M, C, S>(make: M)
    where M: Fn(&'static str) -> (C, S),
          C: ForwardCursor<Item = char> + Debug,
          S: Sentinel<C>,
{
    const HW: &str = "Hello, world!";

    // Single value
    test!(make, HW, |f, l| scan_not(f, l, 'B') => 1);
    test!(make, HW, |f, l| scan_not(f, l, 'H') => 0);
    test!(make, "", |f, l| scan_not(f, l, 'B') => 0);
    test!(make, HW, |f, l| scan_not_with(f, l, 'B', returns_true, policy::identity) => 0);
    test!(make, HW, |f, l| scan_not_with(f, l, 'H', returns_false, policy::identity) => 1);
    test!(make, HW, |f, l| scan_not_with(f, l, 'h', policy::equal, to_lower) => 0);
    test!(make, HW, |f, l| scan_not_with(f, l, 'H', policy::equal, to_lower) => 1);

    // Pattern: advances by one only, whatever the pattern's length.
    test!(make, HW, |f, l| scan_not_seq(f, l, "Hello".chars()) => 0);
    let (at, last) = test_at!(make, HW, |f, l| scan_not_seq(f, l, "Bye".chars()) => 1);
    assert_eq!(peek(&at, &last), Some('e'));
    test!(make, HW, |f, l| scan_not_seq(f, l, "Hello, world?".chars()) => 1);
    test!(make, HW, |f, l| scan_not_seq(f, l, "Hello, world!!".chars()) => 1);
    test!(make, HW, |f, l| scan_not_seq(f, l, "".chars()) => 0);
    test!(make, "He", |f, l| scan_not_seq(f, l, "Hello".chars()) => 1);
    test!(make, "", |f, l| scan_not_seq(f, l, "Hello".chars()) => 0);
    test!(make, "", |f, l| scan_not_seq(f, l, "".chars()) => 0);

    test!(make, HW, |f, l| scan_not_seq_with(f, l, "Bye".chars(), returns_true,
                                              policy::identity, policy::identity) => 0);
    test!(make, HW, |f, l| scan_not_seq_with(f, l, "Hello".chars(), returns_false,
                                              policy::identity, policy::identity) => 1);
    test!(make, HW, |f, l| scan_not_seq_with(f, l, "HELLO".chars(), policy::equal,
                                              to_lower, to_lower) => 0);
}


/// `scan_excluding` and `scan_while_excluding`.
pub fn test_suite_exclusion<M, C, S>(make: M)
    where M: Fn(&'static str) -> (C, S),
          C: ForwardCursor<Item = char> + Debug,
          S: Sentinel<C>,
{
    const SRC: &str = "a -- b";

    // Veto
    test!(make, SRC, |f, l| scan_excluding(f, l, |c, l| scan_seq(c, l, "--".chars())) => 1);
    test!(make, SRC, |f, l| scan_excluding(f, l, |c, l| scan(c, l, 'a')) => 0);
    test!(make, SRC, |f, l| scan_excluding(f, l, |c, _| c) => 1);
    test!(make, "", |f, l| scan_excluding(f, l, |c, _| c) => 0);
    {
        let (first, last) = make(SRC);
        let dashes = first.clone().advanced(2);
        let comment = |c, l: &S| scan_seq(c, l, "--".chars());
        assert_eq!(scan_excluding(dashes.clone(), &last, comment), dashes);
        assert_eq!(scan_excluding(dashes.clone().advanced(1), &last, comment),
                   dashes.clone().advanced(2));
    }

    // Veto agrees with the wrapped scanner at every position.
    {
        let (mut at, last) = make("x--y-z--");
        while !last.is_end(&at) {
            let matched = scan_seq(at.clone(), &last, "--".chars()) != at;
            let vetoed = scan_excluding(at.clone(), &last,
                                        |c, l| scan_seq(c, l, "--".chars())) == at;
            assert_eq!(matched, vetoed, "at {:?}", at);
            at.step();
        }
    }

    // Skip until
    let (at, last) = test_at!(make, SRC,
                           |f, l| scan_while_excluding(f, l, |c, l| scan_seq(c, l, "--".chars()))
                           => 2);
    assert_eq!(rest(&at, &last), "-- b");
    test!(make, SRC, |f, l| scan_while_excluding(f, l, |c, l| scan(c, l, 'a')) => 0);
    test!(make, SRC, |f, l| scan_while_excluding(f, l, |c, l| scan(c, l, 'z')) => 6);
    test!(make, SRC, |f, l| scan_while_excluding(f, l, |c, _| c) => 6);
    test!(make, "", |f, l| scan_while_excluding(f, l, |c, _| c) => 0);
    let (at, last) = test_at!(make, SRC,
                           |f, l| scan_while_excluding(f, l, |c, l| scan_if(c, l, |c| *c == 'b'))
                           => 5);
    assert_eq!(peek(&at, &last), Some('b'));

    // Skip the body of a block comment, then its close.
    {
        let (first, last) = make("/* a * b */ rest");
        let body = scan_seq(first.clone(), &last, "/*".chars());
        assert_eq!(distance(&first, &body, &last), Some(2));
        let close = scan_while_excluding(body, &last, |c, l| scan_seq(c, l, "*/".chars()));
        let after = scan_seq(close.clone(), &last, "*/".chars());
        assert_ne!(after, close);
        assert_eq!(rest(&after, &last), " rest");
    }
}


/// The sentences of the demo programs.
pub fn test_suite_demos<M, C, S>(make: M)
    where M: Fn(&'static str) -> (C, S),
          C: ForwardCursor<Item = char> + Debug,
          S: Sentinel<C>,
{
    {
        let (at, last) = make("Programs must be written for people to read, \
                               and only incidentally for machines to execute. \
                               -- Harold Abelson");
        let at = scan(at, &last, 'P');
        assert_eq!(peek(&at, &last), Some('r'));
        let at = scan_seq(at, &last, "rograms m".chars());
        assert_eq!(peek(&at, &last), Some('u'));
        let at = scan_if(at, &last, |&c| c == 'u');
        assert_eq!(peek(&at, &last), Some('s'));
    }
    {
        let (at, last) = make("Talk is cheap. Show me the code. -- Linus Torvalds");
        let at = scan_not(at, &last, 'Q');
        assert_eq!(peek(&at, &last), Some('a'));
        let at = scan_not_seq(at, &last, "alks".chars());
        assert_eq!(peek(&at, &last), Some('l'));
        let at = scan_if_not(at, &last, |&c| c == 'f');
        assert_eq!(peek(&at, &last), Some('k'));
    }
}
