// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "async")]

use futures::StreamExt;
use kvflow::prelude::*;
use kvflow_test_utils::{fixtures::abcde, ErrorInjectingSource};

#[tokio::test]
async fn test_into_stream_yields_every_item() {
    // Arrange
    let stream = abcde().sequence().tail(2).into_stream();

    // Act
    let items: Vec<_> = stream.collect().await;

    // Assert
    assert_eq!(
        items,
        vec![SequenceItem::Value((3, 'd')), SequenceItem::Value((4, 'e'))]
    );
}

#[tokio::test]
async fn test_into_stream_forwards_errors_in_band() {
    // Arrange
    let stream = KvFlow::from_items(ErrorInjectingSource::new(abcde(), 0)).into_stream();

    // Act
    let items: Vec<_> = stream.collect().await;

    // Assert
    assert_eq!(items.len(), 6);
    assert!(items[0].is_error());
    assert!(items[1..].iter().all(SequenceItem::is_value));
}

#[tokio::test]
async fn test_into_stream_is_lazy() {
    // Arrange
    let stream = abcde().sequence().cycle().into_stream();

    // Act
    let first: Vec<_> = stream.take(7).map(SequenceItem::unwrap).collect().await;

    // Assert
    assert_eq!(first.len(), 7);
    assert_eq!(first[5], (0, 'a'));
}

#[tokio::test]
async fn test_free_function_bridge() {
    // Arrange
    let sequence = vec![(1, 1), (2, 2)].into_sequence();

    // Act
    let sum = kvflow::into_stream(sequence)
        .filter_map(|item| async move { item.ok() })
        .fold(0, |acc, (_, v)| async move { acc + v })
        .await;

    // Assert
    assert_eq!(sum, 3);
}
