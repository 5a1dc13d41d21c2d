// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cycling length schedule driving [`Window`](crate::window::Window).
//!
//! A schedule is a non-empty list of positive lengths read one step at a
//! time. Once the list is exhausted its last value repeats forever, so a
//! schedule of `[1, 3]` yields `1, 3, 3, 3, ...`.

use kvflow_core::{KvFlowError, Result};

/// A validated, non-empty list of positive lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthSchedule {
    lengths: Vec<usize>,
}

impl LengthSchedule {
    /// Validates `lengths` on behalf of `operation`.
    ///
    /// # Errors
    /// Returns [`KvFlowError::InvalidConfiguration`] if `lengths` is empty or
    /// contains a zero.
    pub fn new(
        operation: &'static str,
        lengths: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let lengths: Vec<usize> = lengths.into_iter().collect();

        if lengths.is_empty() {
            return Err(KvFlowError::invalid_configuration(
                operation,
                "at least one length is required",
            ));
        }
        if let Some(position) = lengths.iter().position(|&length| length == 0) {
            return Err(KvFlowError::invalid_configuration(
                operation,
                format!("length at position {position} must be positive"),
            ));
        }

        Ok(Self { lengths })
    }

    /// Length used at step `step`, clamped to the last configured value.
    #[must_use]
    pub fn length_at(&self, step: usize) -> usize {
        self.lengths[step.min(self.lengths.len() - 1)]
    }

    /// The configured lengths.
    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// A cursor positioned at the first step.
    #[must_use]
    pub fn cursor(&self) -> ScheduleCursor {
        self.clone().into_cursor()
    }

    /// Turns the schedule into a cursor positioned at the first step.
    #[must_use]
    pub fn into_cursor(self) -> ScheduleCursor {
        ScheduleCursor {
            schedule: self,
            step: 0,
        }
    }
}

/// Stateful reader over a [`LengthSchedule`].
#[derive(Debug, Clone)]
pub struct ScheduleCursor {
    schedule: LengthSchedule,
    step: usize,
}

impl ScheduleCursor {
    /// Length at the current step.
    #[must_use]
    pub fn current(&self) -> usize {
        self.schedule.length_at(self.step)
    }

    /// Moves to the next step; past the end the last length repeats.
    pub fn advance(&mut self) {
        // Steps past the last index all read the same value
        self.step = self.step.saturating_add(1).min(self.schedule.lengths.len());
    }
}

impl Iterator for ScheduleCursor {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let length = self.current();
        self.advance();
        Some(length)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
