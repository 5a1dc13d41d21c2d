// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{Operation, Sequence, SequenceItem};

/// Emits the configured pairs, then the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepend<K, V> {
    items: Vec<(K, V)>,
}

impl<K, V> Prepend<K, V> {
    /// Emits `items` ahead of the input.
    pub fn new(items: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

impl<K, V> Operation<K, V> for Prepend<K, V>
where
    K: Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        Box::new(
            self.items
                .clone()
                .into_iter()
                .map(SequenceItem::Value)
                .chain(input),
        )
    }
}
