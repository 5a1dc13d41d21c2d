// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{from_values, IntoSequence, KvFlowError, Operation, SequenceItem};
use kvflow_operations::Window;
use kvflow_test_utils::{
    fixtures::{abcde, letters},
    helpers::{collect_items, collect_values},
    unbounded, CountingSource,
};
use std::cell::Cell;
use std::rc::Rc;

/// A value that counts how often it is cloned.
#[derive(Debug)]
struct Tracked {
    clones: Rc<Cell<usize>>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            clones: Rc::clone(&self.clones),
        }
    }
}

#[test]
fn test_window_fixed_length() -> anyhow::Result<()> {
    // Arrange
    let window = Window::new([2])?;

    // Act
    let result = collect_values(window.apply(from_values(vec!['a', 'b', 'c'])))?;

    // Assert
    assert_eq!(
        result,
        vec![(0, vec!['a', 'b']), (1, vec!['b', 'c']), (2, vec!['c'])]
    );

    Ok(())
}

#[test]
fn test_window_emits_one_frame_per_position() -> anyhow::Result<()> {
    // Arrange
    let window = Window::new([3, 1, 4])?;

    for length in 0..8 {
        // Act
        let frames = collect_values(window.apply(letters(length).into_sequence()))?;

        // Assert
        assert_eq!(frames.len(), length);
        assert!(frames.iter().enumerate().all(|(i, (key, _))| *key == i));
    }

    Ok(())
}

#[test]
fn test_window_schedule_repeats_last_length() -> anyhow::Result<()> {
    // Arrange
    let window = Window::new([1, 3])?;

    // Act
    let result = collect_values(window.apply(from_values(vec!['a', 'b', 'c', 'd'])))?;

    // Assert
    assert_eq!(
        result,
        vec![
            (0, vec!['a']),
            (1, vec!['b', 'c', 'd']),
            (2, vec!['c', 'd']),
            (3, vec!['d']),
        ]
    );

    Ok(())
}

#[test]
fn test_window_frames_are_input_slices() -> anyhow::Result<()> {
    // Arrange
    let lengths = [2, 5, 1];
    let window = Window::new(lengths)?;
    let values: Vec<char> = abcde().into_iter().map(|(_, value)| value).collect();

    // Act
    let frames = collect_values(window.apply(abcde().into_sequence()))?;

    // Assert
    for (i, frame) in frames {
        let length = lengths[i.min(lengths.len() - 1)];
        let end = (i + length).min(values.len());
        assert_eq!(frame, values[i..end].to_vec());
    }

    Ok(())
}

#[test]
fn test_window_rejects_empty_schedule() {
    // Arrange, Act
    let result = Window::new(Vec::new());

    // Assert
    assert!(result.unwrap_err().is_configuration());
}

#[test]
fn test_window_rejects_zero_length() {
    // Arrange, Act
    let err = Window::new([2, 0]).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        KvFlowError::InvalidConfiguration { operation: "window", .. }
    ));
}

#[test]
fn test_window_rejects_unbounded_source() -> anyhow::Result<()> {
    // Arrange
    let window = Window::new([2])?;

    // Act
    let items = collect_items(window.apply(unbounded((0, 1))));

    // Assert
    assert!(matches!(
        items.as_slice(),
        [SequenceItem::Error(KvFlowError::UnboundedSource { .. })]
    ));

    Ok(())
}

#[test]
fn test_window_does_not_pull_before_first_pull() {
    // Arrange
    let (source, pulls) = CountingSource::new(abcde());

    // Act
    let mut frames = Window::new([2]).unwrap().apply(source.into_sequence());

    // Assert
    assert_eq!(pulls.get(), 0);
    assert!(frames.next().is_some());
    assert_eq!(pulls.get(), 5);
}

#[test]
fn test_window_cuts_frames_on_demand() -> anyhow::Result<()> {
    // Arrange
    let clones = Rc::new(Cell::new(0));
    let values: Vec<Tracked> = (0..100)
        .map(|_| Tracked {
            clones: Rc::clone(&clones),
        })
        .collect();
    let mut frames = Window::new([3])?.apply(from_values(values));

    // Act
    let first = frames.next();

    // Assert
    assert!(matches!(first, Some(SequenceItem::Value((0, ref frame))) if frame.len() == 3));
    assert_eq!(clones.get(), 3);

    Ok(())
}
