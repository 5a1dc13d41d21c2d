// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection in sequences.
//!
//! This module provides a source wrapper that injects
//! `SequenceItem::Error` values for testing error propagation through
//! operations.

use kvflow_core::{KvFlowError, SequenceItem};

/// A source wrapper that injects an error at a specified position.
///
/// Wraps the inner pairs in `SequenceItem::Value` and yields one
/// `SequenceItem::Error` at `inject_error_at` (0-indexed, counting items
/// already yielded, errors included).
///
/// # Examples
///
/// ```rust
/// use kvflow_core::SequenceItem;
/// use kvflow_test_utils::ErrorInjectingSource;
///
/// let mut source = ErrorInjectingSource::new(vec![(0, 'a'), (1, 'b')], 1);
///
/// assert!(matches!(source.next(), Some(SequenceItem::Value((0, 'a')))));
/// assert!(matches!(source.next(), Some(SequenceItem::Error(_))));
/// assert!(matches!(source.next(), Some(SequenceItem::Value((1, 'b')))));
/// assert!(source.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ErrorInjectingSource<I> {
    inner: I,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<I: Iterator> ErrorInjectingSource<I> {
    /// Creates a new error-injecting source.
    pub fn new(inner: impl IntoIterator<IntoIter = I>, inject_error_at: usize) -> Self {
        Self {
            inner: inner.into_iter(),
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<I: Iterator> Iterator for ErrorInjectingSource<I> {
    type Item = SequenceItem<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.inject_error_at == Some(self.count) {
            // Only inject once
            self.inject_error_at = None;
            self.count += 1;
            return Some(SequenceItem::Error(KvFlowError::source_error(
                "Injected test error",
            )));
        }

        let item = self.inner.next()?;
        self.count += 1;
        Some(SequenceItem::Value(item))
    }
}
