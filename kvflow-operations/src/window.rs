// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Window operator producing one sliding frame per input position.

use crate::{
    length_schedule::{LengthSchedule, ScheduleCursor},
    materialize::{deferred, failed, materialize, CapacityLimit},
};
use kvflow_core::{Operation, Result, Sequence, SequenceItem};

const NAME: &str = "window";

/// Emits, for every position of the input, the frame of values starting
/// there.
///
/// Frames are cut one at a time as they are pulled; only the input itself
/// is buffered.
///
/// Frame `i` holds the values at positions `i .. i + length(i)`, clipped at
/// the end of the input, where `length(i)` is read from a [`LengthSchedule`]
/// that advances once per frame and repeats its last length. An input of
/// length `L` always produces exactly `L` frames, keyed `0 .. L`; frames near
/// the end are shorter than their scheduled length.
///
/// # Example
///
/// With lengths `[2]`, the input `a, b, c` produces
/// `(0, [a, b]), (1, [b, c]), (2, [c])`.
///
/// With lengths `[1, 3]`, the input `a, b, c, d` produces
/// `(0, [a]), (1, [b, c, d]), (2, [c, d]), (3, [d])`.
///
/// # Errors
///
/// Construction fails with
/// [`KvFlowError::InvalidConfiguration`](kvflow_core::KvFlowError::InvalidConfiguration)
/// on an empty or non-positive schedule. At run time the input is buffered
/// once, so an endless input yields
/// [`KvFlowError::UnboundedSource`](kvflow_core::KvFlowError::UnboundedSource)
/// and a source error ends the sequence after being forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    schedule: LengthSchedule,
    limit: CapacityLimit,
}

impl Window {
    /// Creates a window operation driven by `lengths`.
    ///
    /// # Errors
    /// Returns [`KvFlowError::InvalidConfiguration`](kvflow_core::KvFlowError::InvalidConfiguration)
    /// if `lengths` is empty or contains a zero.
    pub fn new(lengths: impl IntoIterator<Item = usize>) -> Result<Self> {
        let schedule = LengthSchedule::new(NAME, lengths).inspect_err(|e| {
            debug!("window: {}", e);
        })?;

        Ok(Self {
            schedule,
            limit: CapacityLimit::unlimited(),
        })
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

    /// The length schedule driving the frames.
    #[must_use]
    pub const fn schedule(&self) -> &LengthSchedule {
        &self.schedule
    }
}

impl<K, V> Operation<K, V> for Window
where
    V: Clone,
{
    type Key = usize;
    type Value = Vec<V>;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, usize, Vec<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        let cursor = self.schedule.cursor();
        let limit = self.limit;

        deferred(move || match materialize(input, NAME, limit) {
            Ok(buffer) => {
                let values = buffer.into_iter().map(|(_, value)| value).collect();
                let frames: Sequence<'a, usize, Vec<V>> = Box::new(Frames::new(values, cursor));
                frames
            }
            Err(e) => failed(e),
        })
    }
}

/// Cuts one frame per pull out of the buffered values.
struct Frames<V> {
    values: Vec<V>,
    cursor: ScheduleCursor,
    start: usize,
}

impl<V> Frames<V> {
    fn new(values: Vec<V>, cursor: ScheduleCursor) -> Self {
        Self {
            values,
            cursor,
            start: 0,
        }
    }
}

impl<V: Clone> Iterator for Frames<V> {
    type Item = SequenceItem<(usize, Vec<V>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.values.len() {
            return None;
        }

        let start = self.start;
        let end = start.saturating_add(self.cursor.current()).min(self.values.len());
        self.cursor.advance();
        self.start += 1;

        Some(SequenceItem::Value((start, self.values[start..end].to_vec())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.start;
        (remaining, Some(remaining))
    }
}
