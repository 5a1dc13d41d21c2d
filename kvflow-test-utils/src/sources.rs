// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumented sources.

use kvflow_core::{Sequence, SequenceItem};
use std::cell::Cell;
use std::iter;
use std::rc::Rc;

/// Shared view of how many items a [`CountingSource`] has handed out.
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    /// Items pulled so far.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// An iterator that counts the items pulled from it.
///
/// Used to check that operations observe no more input than they need.
/// Clones share one counter, so a source that is restarted from a clone is
/// still counted.
#[derive(Debug, Clone)]
pub struct CountingSource<I> {
    inner: I,
    pulls: PullCounter,
}

impl<I: Iterator> CountingSource<I> {
    /// Wraps `items`, returning the source and a counter to inspect later.
    pub fn new(items: impl IntoIterator<IntoIter = I>) -> (Self, PullCounter) {
        let pulls = PullCounter::default();
        let source = Self {
            inner: items.into_iter(),
            pulls: pulls.clone(),
        };
        (source, pulls)
    }
}

impl<I: Iterator> Iterator for CountingSource<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.pulls.0.set(self.pulls.0.get() + 1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An endless source repeating `pair`.
///
/// Its `size_hint` lower bound is `usize::MAX`, which length-dependent
/// operations treat as endless.
pub fn unbounded<'a, K, V>(pair: (K, V)) -> Sequence<'a, K, V>
where
    K: Clone + 'a,
    V: Clone + 'a,
{
    Box::new(iter::repeat(pair).map(SequenceItem::Value))
}
