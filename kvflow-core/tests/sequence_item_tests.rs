// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{KvFlowError, Result, SequenceItem};

#[test]
fn test_value_accessors() {
    // Arrange
    let item = SequenceItem::Value(7);

    // Act & Assert
    assert!(item.is_value());
    assert!(!item.is_error());
    assert_eq!(item.clone().ok(), Some(7));
    assert!(item.err().is_none());
}

#[test]
fn test_error_accessors() {
    // Arrange
    let item: SequenceItem<i32> = SequenceItem::Error(KvFlowError::source_error("read"));

    // Act & Assert
    assert!(item.is_error());
    assert!(item.clone().ok().is_none());
    assert!(matches!(item.err(), Some(KvFlowError::SourceError { .. })));
}

#[test]
fn test_map_skips_errors() {
    // Arrange
    let value = SequenceItem::Value(2);
    let error: SequenceItem<i32> = SequenceItem::Error(KvFlowError::source_error("read"));

    // Act
    let mapped_value = value.map(|v| v * 10);
    let mapped_error = error.map(|v| v * 10);

    // Assert
    assert_eq!(mapped_value.ok(), Some(20));
    assert!(mapped_error.is_error());
}

#[test]
fn test_and_then_can_fail() {
    // Arrange
    let item = SequenceItem::Value(-1);

    // Act
    let checked = item.and_then(|v: i32| {
        if v < 0 {
            SequenceItem::Error(KvFlowError::source_error("negative"))
        } else {
            SequenceItem::Value(v)
        }
    });

    // Assert
    assert!(checked.is_error());
}

#[test]
fn test_errors_are_never_equal() {
    // Arrange
    let left: SequenceItem<i32> = SequenceItem::Error(KvFlowError::source_error("same"));
    let right: SequenceItem<i32> = SequenceItem::Error(KvFlowError::source_error("same"));

    // Act & Assert
    assert_ne!(left, right);
    assert_eq!(SequenceItem::Value(1), SequenceItem::Value(1));
}

#[test]
fn test_result_conversions() -> anyhow::Result<()> {
    // Arrange
    let ok: Result<i32> = Ok(3);
    let err: Result<i32> = Err(KvFlowError::unbounded_source("tail"));

    // Act
    let from_ok = SequenceItem::from(ok);
    let from_err = SequenceItem::from(err);

    // Assert
    assert_eq!(from_ok.into_result()?, 3);
    assert!(from_err.into_result().is_err());

    Ok(())
}

#[test]
#[should_panic(expected = "called `SequenceItem::unwrap()` on an `Error` value")]
fn test_unwrap_panics_on_error() {
    let item: SequenceItem<i32> = SequenceItem::Error(KvFlowError::source_error("boom"));

    item.unwrap();
}
