// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{Operation, Sequence, SequenceItem};
use std::sync::Arc;

/// Keeps the pairs for which `predicate(&key, &value)` holds.
///
/// Errors always pass through.
pub struct Filter<P> {
    predicate: Arc<P>,
}

impl<P> Filter<P> {
    /// Filters with `predicate`.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }
}

impl<P> Clone for Filter<P> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<P> core::fmt::Debug for Filter<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

impl<K, V, P> Operation<K, V> for Filter<P>
where
    P: Fn(&K, &V) -> bool,
{
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let predicate = Arc::clone(&self.predicate);

        Box::new(input.filter(move |item| match item {
            SequenceItem::Value((key, value)) => predicate(key, value),
            SequenceItem::Error(_) => true,
        }))
    }
}
