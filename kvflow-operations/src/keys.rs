// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{Operation, Sequence, SequenceItem};

/// Replaces every pair `(k, v)` with `(index, k)`.
///
/// The index counts values only, starting at zero; errors are forwarded
/// without consuming an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys;

impl<K, V> Operation<K, V> for Keys {
    type Key = usize;
    type Value = K;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, usize, K>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let mut index = 0;

        Box::new(input.map(move |item| {
            item.map(|(key, _)| {
                let position = index;
                index += 1;
                (position, key)
            })
        }))
    }
}
