// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{Result, Sequence, SequenceItem};

/// Pulls every pair, failing on the first error.
///
/// # Errors
/// Returns the first error met in the sequence.
pub fn collect_values<K, V>(sequence: Sequence<'_, K, V>) -> Result<Vec<(K, V)>> {
    sequence.map(SequenceItem::into_result).collect()
}

/// Pulls every item, errors included.
pub fn collect_items<K, V>(sequence: Sequence<'_, K, V>) -> Vec<SequenceItem<(K, V)>> {
    sequence.collect()
}

/// Pulls the next item and unwraps it as a value.
///
/// # Panics
/// Panics if the sequence has ended or yields an error.
pub fn unwrap_sequence<K, V>(sequence: &mut Sequence<'_, K, V>) -> (K, V) {
    match sequence.next() {
        Some(SequenceItem::Value(pair)) => pair,
        Some(SequenceItem::Error(e)) => panic!("expected a value, got error: {e}"),
        None => panic!("expected a value, but the sequence ended"),
    }
}

/// Asserts that the sequence yields nothing more.
///
/// # Panics
/// Panics if another item is available.
pub fn assert_sequence_ended<K, V>(sequence: &mut Sequence<'_, K, V>) {
    assert!(
        sequence.next().is_none(),
        "expected the sequence to have ended"
    );
}
