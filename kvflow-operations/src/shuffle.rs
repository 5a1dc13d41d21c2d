// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shuffle operator emitting the input in a seeded random order.

use crate::materialize::{deferred, failed, materialize, CapacityLimit};
use kvflow_core::{IntoSequence, Operation, Result, Sequence};

const NAME: &str = "shuffle";

/// Emits every pair of a finite input in a random order.
///
/// This is the only operation that does not preserve the relative order of
/// its input. The order is drawn from a generator seeded with the configured
/// seed, so it is reproducible. The input is buffered once on the first pull;
/// an endless or failing input yields a single error after which the sequence
/// ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shuffle {
    seed: u64,
    limit: CapacityLimit,
}

impl Shuffle {
    /// Shuffles with a generator seeded with `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
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
}

impl<K, V> Operation<K, V> for Shuffle {
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let Self { seed, limit } = *self;

        deferred(move || match materialize(input, NAME, limit) {
            Ok(mut buffer) => {
                fastrand::Rng::with_seed(seed).shuffle(&mut buffer);
                buffer.into_sequence()
            }
            Err(e) => failed(e),
        })
    }
}
