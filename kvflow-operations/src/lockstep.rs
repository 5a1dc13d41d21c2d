// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lock-step walker that advances several sources together.
//!
//! Each step pulls one element from every source that is not yet exhausted
//! and reports the result as a [`Zipped`] row with one slot per source. A
//! slot is absent once its source has ended. The [`SyncPolicy`] decides when
//! the walk stops:
//!
//! - [`SyncPolicy::NeedAny`]: while at least one source still produces, so the
//!   walk is as long as the longest source;
//! - [`SyncPolicy::NeedAll`]: as soon as any source ends, so the walk is as
//!   long as the shortest source and rows never have absent slots.
//!
//! A source error ends the walk: the error is yielded and nothing follows it.

use kvflow_core::SequenceItem;

/// When a [`LockstepWalker`] stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncPolicy {
    /// Continue while any source produces
    #[default]
    NeedAny,
    /// Stop as soon as one source is exhausted
    NeedAll,
}

/// One row of a lock-step walk: a slot per source, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zipped<T> {
    slots: Vec<Option<T>>,
}

impl<T> Zipped<T> {
    /// Number of slots, which is the number of walked sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the row has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value of the slot, or `None` if the slot is absent or out of range.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Returns `true` if source `slot` contributed a value to this row.
    #[must_use]
    pub fn is_present(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Number of sources that contributed a value.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterates over the slots in source order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Consumes the row, returning its slots.
    #[must_use]
    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots
    }
}

impl<T> From<Vec<Option<T>>> for Zipped<T> {
    fn from(slots: Vec<Option<T>>) -> Self {
        Self { slots }
    }
}

struct Cursor<I> {
    source: I,
    exhausted: bool,
}

/// Walks N sources in lock-step under a [`SyncPolicy`].
pub struct LockstepWalker<I> {
    cursors: Vec<Cursor<I>>,
    policy: SyncPolicy,
    finished: bool,
}

impl<I> LockstepWalker<I> {
    /// Creates a walker over `sources`; nothing is pulled until the first step.
    pub fn new(sources: impl IntoIterator<Item = I>, policy: SyncPolicy) -> Self {
        let cursors: Vec<Cursor<I>> = sources
            .into_iter()
            .map(|source| Cursor {
                source,
                exhausted: false,
            })
            .collect();
        let finished = cursors.is_empty();

        Self {
            cursors,
            policy,
            finished,
        }
    }

    /// Per-source exhaustion flags, in source order.
    pub fn exhausted(&self) -> impl Iterator<Item = bool> + '_ {
        self.cursors.iter().map(|cursor| cursor.exhausted)
    }
}

impl<I, T> Iterator for LockstepWalker<I>
where
    I: Iterator<Item = SequenceItem<T>>,
{
    type Item = SequenceItem<Zipped<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut slots = Vec::with_capacity(self.cursors.len());
        for cursor in &mut self.cursors {
            if cursor.exhausted {
                slots.push(None);
                continue;
            }
            match cursor.source.next() {
                Some(SequenceItem::Value(value)) => slots.push(Some(value)),
                Some(SequenceItem::Error(e)) => {
                    self.finished = true;
                    return Some(SequenceItem::Error(e));
                }
                None => {
                    cursor.exhausted = true;
                    slots.push(None);
                }
            }
        }

        let done = match self.policy {
            SyncPolicy::NeedAny => slots.iter().all(Option::is_none),
            SyncPolicy::NeedAll => slots.iter().any(Option::is_none),
        };
        if done {
            self.finished = true;
            return None;
        }

        Some(SequenceItem::Value(Zipped { slots }))
    }
}
