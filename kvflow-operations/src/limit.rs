// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Limit operator that stops after n pairs.

use kvflow_core::{Operation, Sequence, SequenceItem};

/// Emits at most `count` pairs, then stops pulling from the input.
///
/// After the last allowed pair the input is never touched again, which makes
/// `Limit` safe to place after an endless source.
///
/// # Error Handling
///
/// Only values count towards `count`. Errors met before the limit is reached
/// are forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    count: usize,
}

impl Limit {
    /// Emits at most `count` pairs.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<K, V> Operation<K, V> for Limit {
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        Box::new(LimitIter {
            input,
            remaining: self.count,
        })
    }
}

struct LimitIter<I> {
    input: I,
    remaining: usize,
}

impl<I, T> Iterator for LimitIter<I>
where
    I: Iterator<Item = SequenceItem<T>>,
{
    type Item = SequenceItem<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.input.next()?;
        if item.is_value() {
            self.remaining -= 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        // Errors do not count, so only the lower bound can be capped
        let (lower, upper) = self.input.size_hint();
        (lower.min(self.remaining), upper)
    }
}
