// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{Operation, Sequence, SequenceItem};

/// Drops every pair whose key is one of the configured keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffKeys<K> {
    keys: Vec<K>,
}

impl<K> DiffKeys<K> {
    /// Excludes `keys` from the output.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl<K, V> Operation<K, V> for DiffKeys<K>
where
    K: PartialEq + Clone,
{
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let excluded = self.keys.clone();

        Box::new(input.filter(move |item| match item {
            SequenceItem::Value((key, _)) => !excluded.contains(key),
            SequenceItem::Error(_) => true,
        }))
    }
}
