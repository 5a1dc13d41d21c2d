// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip operator combining the input with further sources index-for-index.

use crate::lockstep::{LockstepWalker, SyncPolicy, Zipped};
use core::fmt;
use kvflow_core::{KvFlowError, Operation, Result, Sequence, SequenceItem};
use std::sync::Arc;

/// A source pulled one value at a time by the walk.
type ValueSource<'s, V> = Box<dyn Iterator<Item = SequenceItem<V>> + 's>;

/// Re-creates an other source from the start.
type SourceFactory<'s, V> = Arc<dyn Fn() -> ValueSource<'s, V> + 's>;

/// Walks the input together with N other sources, one element of each per
/// step.
///
/// Step `i` produces `(i, row)` where slot 0 of the row is the input's `i`-th
/// value and slot `j` is the `i`-th value of `others[j - 1]`. The walk goes
/// on while any source still produces ([`SyncPolicy::NeedAny`]), so the output
/// is as long as the longest source; a source that has ended leaves its slot
/// absent. Keys of every source are discarded.
///
/// The other sources are kept as given and only cloned and read as the walk
/// advances: nothing is pulled at construction or by `apply`, and each
/// `apply` starts every other source afresh, so the same `Zip` can be reused.
/// An endless other source makes the output endless.
///
/// # Errors
///
/// An error from the input or from any other source is forwarded and ends
/// the walk.
///
/// # Examples
///
/// Zipping `a, b, c` with `x` yields rows `[a, x]`, `[b, -]`, `[c, -]`.
pub struct Zip<'s, V> {
    others: Vec<SourceFactory<'s, V>>,
}

impl<'s, V: 's> Zip<'s, V> {
    /// Creates a zip over the input and `others`.
    ///
    /// # Errors
    /// Returns [`KvFlowError::InvalidConfiguration`] if `others` is empty.
    pub fn new<I, S, OK>(others: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = (OK, V)> + Clone + 's,
        S::IntoIter: 's,
    {
        Self::from_factories(
            others
                .into_iter()
                .map(|other| -> SourceFactory<'s, V> {
                    Arc::new(move || -> ValueSource<'s, V> {
                        Box::new(
                            other
                                .clone()
                                .into_iter()
                                .map(|(_, value)| SequenceItem::Value(value)),
                        )
                    })
                })
                .collect(),
        )
    }

    /// Creates a zip over the input and `others`, whose items may carry
    /// errors.
    ///
    /// # Errors
    /// Returns [`KvFlowError::InvalidConfiguration`] if `others` is empty.
    pub fn from_items<I, S, OK>(others: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = SequenceItem<(OK, V)>> + Clone + 's,
        S::IntoIter: 's,
    {
        Self::from_factories(
            others
                .into_iter()
                .map(|other| -> SourceFactory<'s, V> {
                    Arc::new(move || -> ValueSource<'s, V> {
                        Box::new(
                            other
                                .clone()
                                .into_iter()
                                .map(|item| item.map(|(_, value)| value)),
                        )
                    })
                })
                .collect(),
        )
    }

    fn from_factories(others: Vec<SourceFactory<'s, V>>) -> Result<Self> {
        if others.is_empty() {
            debug!("zip: rejected empty source list");
            return Err(KvFlowError::invalid_configuration(
                "zip",
                "at least one other source is required",
            ));
        }

        Ok(Self { others })
    }

    /// Number of sources walked alongside the input.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.others.len()
    }
}

impl<V> Clone for Zip<'_, V> {
    fn clone(&self) -> Self {
        Self {
            others: self.others.clone(),
        }
    }
}

impl<V> fmt::Debug for Zip<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zip").field("arity", &self.others.len()).finish()
    }
}

impl<'s, K, V> Operation<K, V> for Zip<'s, V> {
    type Key = usize;
    type Value = Zipped<V>;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, usize, Zipped<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let mut sources: Vec<ValueSource<'a, V>> = Vec::with_capacity(self.others.len() + 1);
        sources.push(Box::new(input.map(|item| item.map(|(_, value)| value))));
        for other in &self.others {
            sources.push(other());
        }

        Box::new(
            LockstepWalker::new(sources, SyncPolicy::NeedAny)
                .enumerate()
                .map(|(step, row)| row.map(|row| (step, row))),
        )
    }
}
