// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared machinery of the length-dependent operations.
//!
//! Tail, Window, Frequency, Shuffle and Cycle cannot emit anything before they
//! have seen their whole input. They all follow the same plan: wait for the
//! first pull, buffer the input once, then emit from the buffer. Before
//! buffering, the input's `size_hint` is checked; a lower bound of
//! `usize::MAX` is how the standard library marks endless iterators
//! (`repeat`, `cycle`), and such input is rejected with
//! [`KvFlowError::UnboundedSource`] instead of hanging.

use core::iter;
use kvflow_core::{KvFlowError, Result, Sequence, SequenceItem};

/// Optional cap on the number of buffered pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CapacityLimit(Option<usize>);

impl CapacityLimit {
    pub(crate) const fn unlimited() -> Self {
        Self(None)
    }

    pub(crate) fn new(operation: &'static str, limit: usize) -> Result<Self> {
        if limit == 0 {
            debug!("{}: rejected capacity limit of zero", operation);
            return Err(KvFlowError::invalid_configuration(
                operation,
                "capacity limit must be at least 1",
            ));
        }
        Ok(Self(Some(limit)))
    }
}

/// Most pairs reserved up front, whatever a size hint claims.
const PREALLOCATION_CEILING: usize = 1024;

/// Capacity to reserve for a buffer expected to hold `hint` pairs.
///
/// A size hint is only a claim, so the reservation never exceeds the
/// capacity limit or [`PREALLOCATION_CEILING`]; the buffer grows past it as
/// pairs actually arrive.
pub(crate) fn initial_capacity(hint: usize, limit: CapacityLimit) -> usize {
    let capacity = hint.min(PREALLOCATION_CEILING);
    match limit {
        CapacityLimit(Some(max)) => capacity.min(max),
        CapacityLimit(None) => capacity,
    }
}

/// Returns `true` if `iterator` declares itself endless.
pub(crate) fn is_unbounded<I: Iterator + ?Sized>(iterator: &I) -> bool {
    iterator.size_hint().0 == usize::MAX
}

/// Pulls `input` to the end into a vector.
///
/// Stops at the first in-band error and returns it.
pub(crate) fn materialize<K, V>(
    input: Sequence<'_, K, V>,
    operation: &'static str,
    limit: CapacityLimit,
) -> Result<Vec<(K, V)>> {
    if is_unbounded(&input) {
        warn!("{}: refusing to materialize an unbounded source", operation);
        return Err(KvFlowError::unbounded_source(operation));
    }

    let mut buffer = Vec::with_capacity(initial_capacity(input.size_hint().0, limit));
    for item in input {
        match item {
            SequenceItem::Value(pair) => {
                if let CapacityLimit(Some(max)) = limit {
                    if buffer.len() == max {
                        warn!("{}: materialization exceeded {} pairs", operation, max);
                        return Err(KvFlowError::resource_limit_exceeded(
                            format!("{operation} buffer"),
                            max,
                        ));
                    }
                }
                buffer.push(pair);
            }
            SequenceItem::Error(e) => return Err(e),
        }
    }

    debug!("{}: materialized {} pairs", operation, buffer.len());
    Ok(buffer)
}

/// An iterator built on its first pull.
///
/// Keeps `apply` free of side effects for operations that must buffer.
pub(crate) struct Deferred<F, I> {
    init: Option<F>,
    inner: Option<I>,
}

impl<F, I> Iterator for Deferred<F, I>
where
    F: FnOnce() -> I,
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(init) = self.init.take() {
            self.inner = Some(init());
        }
        self.inner.as_mut()?.next()
    }
}

/// Defers building a sequence until it is first pulled.
pub(crate) fn deferred<'a, K, V, F>(init: F) -> Sequence<'a, K, V>
where
    F: FnOnce() -> Sequence<'a, K, V> + 'a,
    K: 'a,
    V: 'a,
{
    Box::new(Deferred {
        init: Some(init),
        inner: None,
    })
}

/// A sequence that yields `error` and ends.
pub(crate) fn failed<'a, K: 'a, V: 'a>(error: KvFlowError) -> Sequence<'a, K, V> {
    Box::new(iter::once(SequenceItem::Error(error)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvflow_core::{from_items, IntoSequence};

    #[test]
    fn test_materialize_collects_in_order() {
        let input = vec![(1, 'a'), (0, 'b')].into_sequence();

        let buffer = materialize(input, "test", CapacityLimit::default()).unwrap();

        assert_eq!(buffer, vec![(1, 'a'), (0, 'b')]);
    }

    #[test]
    fn test_materialize_rejects_unbounded_source() {
        let input = iter::repeat((0, 'x')).into_sequence();

        let err = materialize(input, "test", CapacityLimit::default()).unwrap_err();

        assert!(matches!(err, KvFlowError::UnboundedSource { operation: "test" }));
    }

    #[test]
    fn test_materialize_stops_at_capacity() {
        let input = (0..10).map(|i| (i, i)).into_sequence();
        let limit = CapacityLimit::new("test", 3).unwrap();

        let err = materialize(input, "test", limit).unwrap_err();

        assert!(matches!(
            err,
            KvFlowError::ResourceLimitExceeded { limit: 3, .. }
        ));
    }

    #[test]
    fn test_materialize_ignores_inflated_size_hint() {
        let input = (0..1_usize << 40).map(|i| (i, i)).into_sequence();
        let limit = CapacityLimit::new("test", 10).unwrap();

        let err = materialize(input, "test", limit).unwrap_err();

        assert!(matches!(
            err,
            KvFlowError::ResourceLimitExceeded { limit: 10, .. }
        ));
    }

    #[test]
    fn test_initial_capacity_is_bounded() {
        let limit = CapacityLimit::new("test", 8).unwrap();

        assert_eq!(initial_capacity(usize::MAX - 1, limit), 8);
        assert_eq!(
            initial_capacity(usize::MAX - 1, CapacityLimit::unlimited()),
            PREALLOCATION_CEILING
        );
        assert_eq!(initial_capacity(3, CapacityLimit::unlimited()), 3);
    }

    #[test]
    fn test_materialize_returns_source_error() {
        let input = from_items(vec![
            SequenceItem::Value((0, 'a')),
            SequenceItem::Error(KvFlowError::source_error("disk")),
            SequenceItem::Value((1, 'b')),
        ]);

        let err = materialize(input, "test", CapacityLimit::default()).unwrap_err();

        assert!(matches!(err, KvFlowError::SourceError { .. }));
    }

    #[test]
    fn test_zero_capacity_is_configuration_error() {
        assert!(CapacityLimit::new("test", 0).unwrap_err().is_configuration());
    }

    #[test]
    fn test_deferred_does_not_build_before_first_pull() {
        let built = std::cell::Cell::new(false);

        let mut sequence = deferred(|| {
            built.set(true);
            vec![(0, 'a')].into_sequence()
        });

        assert!(!built.get());
        assert!(sequence.next().is_some());
        assert!(built.get());
    }
}
