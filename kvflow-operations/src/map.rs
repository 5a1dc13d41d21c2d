// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{Operation, Sequence};
use std::sync::Arc;

/// Replaces every value with `f(&key, value)`, keeping the key.
pub struct Map<F> {
    f: Arc<F>,
}

impl<F> Map<F> {
    /// Maps values through `f`.
    pub fn new(f: F) -> Self {
        Self { f: Arc::new(f) }
    }
}

impl<F> Clone for Map<F> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<F> core::fmt::Debug for Map<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Map").finish_non_exhaustive()
    }
}

impl<K, V, W, F> Operation<K, V> for Map<F>
where
    F: Fn(&K, V) -> W,
{
    type Key = K;
    type Value = W;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, W>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let f = Arc::clone(&self.f);

        Box::new(input.map(move |item| {
            item.map(|(key, value)| {
                let mapped = f(&key, value);
                (key, mapped)
            })
        }))
    }
}
