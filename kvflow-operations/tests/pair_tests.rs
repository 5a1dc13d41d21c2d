// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{from_values, Operation};
use kvflow_operations::Pair;
use kvflow_test_utils::helpers::collect_values;

#[test]
fn test_pair_even_input() -> anyhow::Result<()> {
    // Arrange
    let input = from_values(vec!["a", "b", "c", "d"]);

    // Act
    let result = collect_values(Pair.apply(input))?;

    // Assert
    assert_eq!(result, vec![("a", "b"), ("c", "d")]);

    Ok(())
}

#[test]
fn test_pair_odd_input_drops_trailing_value() -> anyhow::Result<()> {
    // Arrange
    let input = from_values(vec!["a", "b", "c"]);

    // Act
    let result = collect_values(Pair.apply(input))?;

    // Assert
    assert_eq!(result, vec![("a", "b")]);

    Ok(())
}

#[test]
fn test_pair_single_value_yields_nothing() -> anyhow::Result<()> {
    // Arrange
    let input = from_values(vec!["a"]);

    // Act
    let result = collect_values(Pair.apply(input))?;

    // Assert
    assert!(result.is_empty());

    Ok(())
}

#[test]
fn test_pair_discards_original_keys() -> anyhow::Result<()> {
    // Arrange
    let input = kvflow_core::IntoSequence::into_sequence(vec![
        ("first", 1),
        ("second", 2),
        ("third", 3),
        ("fourth", 4),
    ]);

    // Act
    let result = collect_values(Pair.apply(input))?;

    // Assert
    assert_eq!(result, vec![(1, 2), (3, 4)]);

    Ok(())
}
