// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operator that discards the first n pairs.

use kvflow_core::{Operation, Sequence, SequenceItem};

/// Drops the first `count` pairs and emits the rest.
///
/// If the input has fewer than `count` pairs, nothing is emitted.
///
/// # Error Handling
///
/// Only values count towards `count`. Errors are always forwarded, even while
/// skipping, so a failing source is never silenced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Skip {
    count: usize,
}

impl Skip {
    /// Skips `count` pairs.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<K, V> Operation<K, V> for Skip {
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let mut remaining = self.count;

        Box::new(input.filter(move |item| match item {
            SequenceItem::Value(_) if remaining > 0 => {
                remaining -= 1;
                false
            }
            _ => true,
        }))
    }
}
