// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Since operator that starts emitting at the first matching pair.

use kvflow_core::{KvFlowError, Operation, Result, Sequence, SequenceItem};
use std::sync::Arc;

/// A shared predicate over a key-value pair.
pub type Predicate<K, V> = Arc<dyn Fn(&K, &V) -> bool>;

/// Drops pairs until one of the predicates holds, then emits that pair and
/// every pair after it.
///
/// Predicates are evaluated in order and only until the first match; once
/// triggered, the operation passes everything through without evaluating
/// them again. If no pair ever matches, nothing is emitted.
///
/// # Error Handling
///
/// Errors are forwarded even while pairs are being dropped.
pub struct Since<K, V> {
    predicates: Vec<Predicate<K, V>>,
}

impl<K, V> Since<K, V> {
    /// Starts at the first pair matching any of `predicates`.
    ///
    /// # Errors
    /// Returns [`KvFlowError::InvalidConfiguration`] if `predicates` is empty.
    pub fn new(predicates: impl IntoIterator<Item = Predicate<K, V>>) -> Result<Self> {
        let predicates: Vec<Predicate<K, V>> = predicates.into_iter().collect();
        if predicates.is_empty() {
            debug!("since: rejected empty predicate list");
            return Err(KvFlowError::invalid_configuration(
                "since",
                "at least one predicate is required",
            ));
        }
        Ok(Self { predicates })
    }

    /// Starts at the first pair matching `predicate`.
    pub fn when(predicate: impl Fn(&K, &V) -> bool + 'static) -> Self {
        Self {
            predicates: vec![Arc::new(predicate)],
        }
    }

    /// Adds a further starting condition.
    #[must_use]
    pub fn or_when(mut self, predicate: impl Fn(&K, &V) -> bool + 'static) -> Self {
        self.predicates.push(Arc::new(predicate));
        self
    }
}

impl<K, V> Clone for Since<K, V> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
        }
    }
}

impl<K, V> core::fmt::Debug for Since<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Since")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl<K, V> Operation<K, V> for Since<K, V> {
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let predicates = self.predicates.clone();
        let mut triggered = false;

        Box::new(input.filter(move |item| match item {
            SequenceItem::Value(_) if triggered => true,
            SequenceItem::Value((key, value)) => {
                triggered = predicates.iter().any(|predicate| predicate(key, value));
                triggered
            }
            SequenceItem::Error(_) => true,
        }))
    }
}
