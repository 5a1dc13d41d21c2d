// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed inputs shared across the test suites.

use crate::scalar::Scalar;

/// The first `count` letters of the alphabet, keyed by position.
///
/// # Panics
/// Panics if `count` exceeds 26.
#[must_use]
pub fn letters(count: usize) -> Vec<(usize, char)> {
    assert!(count <= 26, "only 26 letters available, asked for {count}");
    ('a'..='z').take(count).enumerate().collect()
}

/// `a, b, c, d, e` keyed `0..5`.
#[must_use]
pub fn abcde() -> Vec<(usize, char)> {
    letters(5)
}

/// `1` as an integer followed by `"1"` as a string.
#[must_use]
pub fn int_and_string_one() -> Vec<(usize, Scalar)> {
    vec![(0, Scalar::Int(1)), (1, Scalar::from("1"))]
}

/// Values of every variant, including loosely-equal pairs.
#[must_use]
pub fn mixed_scalars() -> Vec<(usize, Scalar)> {
    vec![
        (0, Scalar::Int(1)),
        (1, Scalar::from("1")),
        (2, Scalar::Float(1.0)),
        (3, Scalar::Bool(true)),
        (4, Scalar::Int(1)),
        (5, Scalar::from("a")),
        (6, Scalar::from("a")),
    ]
}
