// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Frequency operator counting occurrences of each value.

use crate::materialize::{deferred, failed, materialize, CapacityLimit};
use kvflow_core::{IntoSequence, Operation, Result, Sequence};

const NAME: &str = "frequency";

/// Emits `(count, value)` for every distinct value, in first-seen order.
///
/// Values are compared by strict equality. The input must be finite: it is
/// buffered once on the first pull, and an endless or failing input yields a
/// single error after which the sequence ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frequency {
    limit: CapacityLimit,
}

impl Frequency {
    /// Counts value occurrences.
    #[must_use]
    pub const fn new() -> Self {
        Self {
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
        })
    }
}

impl<K, V> Operation<K, V> for Frequency
where
    V: PartialEq,
{
    type Key = usize;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, usize, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let limit = self.limit;

        deferred(move || match materialize(input, NAME, limit) {
            Ok(buffer) => {
                let mut counts: Vec<(usize, V)> = Vec::new();
                for (_, value) in buffer {
                    match counts.iter_mut().find(|(_, seen)| *seen == value) {
                        Some((count, _)) => *count += 1,
                        None => counts.push((1, value)),
                    }
                }
                counts.into_sequence()
            }
            Err(e) => failed(e),
        })
    }
}
