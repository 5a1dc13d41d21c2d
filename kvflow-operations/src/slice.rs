// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Slice operator selecting a positional range.

use crate::{limit::Limit, skip::Skip};
use kvflow_core::{Operation, Sequence};

/// Emits the pairs at positions `offset .. offset + length`.
///
/// Without a length everything from `offset` on is emitted. A range running
/// past the end simply yields fewer pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    offset: usize,
    length: Option<usize>,
}

impl Slice {
    /// Everything from `offset` to the end.
    #[must_use]
    pub const fn starting_at(offset: usize) -> Self {
        Self {
            offset,
            length: None,
        }
    }

    /// At most `length` pairs starting at `offset`.
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self {
            offset,
            length: Some(length),
        }
    }
}

impl<K, V> Operation<K, V> for Slice {
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let skipped = Skip::new(self.offset).apply(input);
        match self.length {
            Some(length) => Limit::new(length).apply(skipped),
            None => skipped,
        }
    }
}
