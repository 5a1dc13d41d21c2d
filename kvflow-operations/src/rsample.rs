// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Random sampling operator.
//!
//! The operator takes an explicit seed, so a sampling pipeline is
//! reproducible. Use a fixed seed in tests and `fastrand::u64(..)` when real
//! randomness is wanted:
//!
//! ```rust
//! use kvflow_operations::RSample;
//!
//! let reproducible = RSample::new(0.5, 42).unwrap();
//! let random = RSample::new(0.5, fastrand::u64(..)).unwrap();
//! ```

use kvflow_core::{KvFlowError, Operation, Result, Sequence, SequenceItem};

/// Keeps each pair independently with the configured probability.
///
/// Every `apply` starts a fresh generator from the seed, so applying the same
/// operation to the same input always keeps the same pairs. Errors always
/// pass through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RSample {
    probability: f64,
    seed: u64,
}

impl RSample {
    /// Samples with `probability`, drawing from a generator seeded with
    /// `seed`.
    ///
    /// # Errors
    /// Returns [`KvFlowError::InvalidConfiguration`] unless
    /// `0.0 < probability <= 1.0`.
    pub fn new(probability: f64, seed: u64) -> Result<Self> {
        if !(probability > 0.0 && probability <= 1.0) {
            debug!("rsample: rejected probability {}", probability);
            return Err(KvFlowError::invalid_configuration(
                "rsample",
                format!("probability must be in (0.0, 1.0], got {probability}"),
            ));
        }
        Ok(Self { probability, seed })
    }

    /// The configured probability.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }
}

impl<K, V> Operation<K, V> for RSample {
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let probability = self.probability;
        let mut rng = fastrand::Rng::with_seed(self.seed);

        Box::new(input.filter(move |item| match item {
            SequenceItem::Value(_) => rng.f64() < probability,
            // Errors always pass through
            SequenceItem::Error(_) => true,
        }))
    }
}
