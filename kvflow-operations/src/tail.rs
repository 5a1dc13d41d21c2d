// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tail operator emitting the last n pairs of a finite input.

use crate::{
    limit::Limit,
    materialize::{deferred, failed, materialize, CapacityLimit},
    skip::Skip,
};
use kvflow_core::{IntoSequence, Operation, Result, Sequence};

const NAME: &str = "tail";

/// Emits the last `count` pairs of the input, in their original order.
///
/// The input must be finite. On the first pull the whole input is buffered
/// once; then `max(0, len - count)` pairs are skipped and `count` are
/// emitted. `count >= len` emits everything and `count == 0` emits nothing.
///
/// # Errors
///
/// Emitted in-band, after which the sequence ends:
/// - [`KvFlowError::UnboundedSource`](kvflow_core::KvFlowError::UnboundedSource)
///   if the input declares itself endless
/// - [`KvFlowError::ResourceLimitExceeded`](kvflow_core::KvFlowError::ResourceLimitExceeded)
///   if a capacity limit is set and the input is longer
/// - any error produced by the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tail {
    count: usize,
    limit: CapacityLimit,
}

impl Tail {
    /// Keeps the last `count` pairs.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            limit: CapacityLimit::unlimited(),
        }
    }

    /// Caps the number of pairs buffered while reading the input.
    ///
    /// # Errors
    /// Returns [`KvFlowError::InvalidConfiguration`](kvflow_core::KvFlowError::InvalidConfiguration)
    /// if `limit` is zero.
    pub fn with_capacity_limit(self, limit: usize) -> Result<Self> {
        Ok(Self {
            limit: CapacityLimit::new(NAME, limit)?,
            ..self
        })
    }

    /// The number of trailing pairs kept.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl Default for Tail {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<K, V> Operation<K, V> for Tail {
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let Self { count, limit } = *self;

        deferred(move || match materialize(input, NAME, limit) {
            Ok(buffer) => {
                let skip = Skip::new(buffer.len().saturating_sub(count));
                Limit::new(count).apply(skip.apply(buffer.into_sequence()))
            }
            Err(e) => failed(e),
        })
    }
}
