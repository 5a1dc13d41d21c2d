// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct operator that suppresses repeated values.

use kvflow_core::{Equivalence, Operation, Sequence, SequenceItem, StrictEq};

/// Emits each value once, at its first occurrence.
///
/// A pair is dropped when its value is equivalent to a value already emitted;
/// the key plays no part in the decision, so the surviving pair keeps the key
/// of the first occurrence. Equivalence defaults to [`StrictEq`]: values that
/// differ in type or representation are never merged.
///
/// # Behavior
///
/// - Single pass, left to right; relative order of survivors is preserved
/// - Errors are forwarded immediately and do not affect the seen set
/// - Idempotent: applying it twice gives the same result as applying it once
///
/// # Resource usage
///
/// Every distinct value seen so far is retained, and each new value is
/// compared against all of them. Memory grows with the number of distinct
/// values, which is unbounded for an endless input with high cardinality.
///
/// # Examples
///
/// ```rust
/// use kvflow_core::{IntoSequence, Operation, SequenceItem};
/// use kvflow_operations::Distinct;
///
/// let unique: Vec<_> = Distinct::new()
///     .apply(vec![(0, 'a'), (1, 'b'), (2, 'a')].into_sequence())
///     .map(SequenceItem::unwrap)
///     .collect();
///
/// assert_eq!(unique, vec![(0, 'a'), (1, 'b')]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Distinct<C = StrictEq> {
    equivalence: C,
}

impl Distinct {
    /// Deduplicates with strict equality.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            equivalence: StrictEq,
        }
    }
}

impl<C> Distinct<C> {
    /// Deduplicates with a custom notion of sameness.
    pub const fn with_equivalence(equivalence: C) -> Self {
        Self { equivalence }
    }
}

impl<K, V, C> Operation<K, V> for Distinct<C>
where
    V: Clone,
    C: Equivalence<V> + Clone,
{
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let equivalence = self.equivalence.clone();
        let mut seen: Vec<V> = Vec::new();

        Box::new(input.filter(move |item| match item {
            SequenceItem::Value((_, value)) => {
                if seen.iter().any(|prev| equivalence.equivalent(prev, value)) {
                    false
                } else {
                    seen.push(value.clone());
                    true
                }
            }
            SequenceItem::Error(_) => true,
        }))
    }
}
