// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{by_fn, IntoSequence, Operation, OperationExt};
use kvflow_operations::Distinct;
use kvflow_test_utils::{
    fixtures::{int_and_string_one, mixed_scalars},
    helpers::{collect_values, unwrap_sequence},
    CountingSource, Scalar,
};

#[test]
fn test_distinct_keeps_first_occurrence() -> anyhow::Result<()> {
    // Arrange
    let input = vec![(0, 'a'), (1, 'b'), (2, 'a'), (3, 'c'), (4, 'b')].into_sequence();

    // Act
    let result = collect_values(Distinct::new().apply(input))?;

    // Assert
    assert_eq!(result, vec![(0, 'a'), (1, 'b'), (3, 'c')]);

    Ok(())
}

#[test]
fn test_distinct_ignores_keys() -> anyhow::Result<()> {
    // Arrange
    let input = vec![("x", 1), ("x", 2), ("y", 1)].into_sequence();

    // Act
    let result = collect_values(Distinct::new().apply(input))?;

    // Assert
    assert_eq!(result, vec![("x", 1), ("x", 2)]);

    Ok(())
}

#[test]
fn test_distinct_is_strict_about_type() -> anyhow::Result<()> {
    // Arrange
    let input = int_and_string_one().into_sequence();

    // Act
    let result = collect_values(Distinct::new().apply(input))?;

    // Assert: Int(1) and Str("1") are both kept
    let kinds: Vec<&str> = result.iter().map(|(_, value)| value.type_name()).collect();
    assert_eq!(result, int_and_string_one(), "kept kinds: {kinds:?}");

    Ok(())
}

#[test]
fn test_distinct_strict_on_mixed_values() -> anyhow::Result<()> {
    // Arrange
    let input = mixed_scalars().into_sequence();

    // Act
    let result = collect_values(Distinct::new().apply(input))?;

    // Assert
    assert_eq!(
        result,
        vec![
            (0, Scalar::Int(1)),
            (1, Scalar::from("1")),
            (2, Scalar::Float(1.0)),
            (3, Scalar::Bool(true)),
            (5, Scalar::from("a")),
        ]
    );

    Ok(())
}

#[test]
fn test_distinct_is_idempotent() -> anyhow::Result<()> {
    // Arrange
    let input = || mixed_scalars().into_sequence();

    // Act
    let once = collect_values(Distinct::new().apply(input()))?;
    let twice = collect_values(Distinct::new().then(Distinct::new()).apply(input()))?;

    // Assert
    assert_eq!(once, twice);

    Ok(())
}

#[test]
fn test_distinct_with_loose_equivalence() -> anyhow::Result<()> {
    // Arrange
    let loose = by_fn(|a: &Scalar, b: &Scalar| a.loosely_equals(b));
    let input = mixed_scalars().into_sequence();

    // Act
    let result = collect_values(Distinct::with_equivalence(loose).apply(input))?;

    // Assert: everything printing as "1" collapses onto the first one
    assert_eq!(result, vec![(0, Scalar::Int(1)), (5, Scalar::from("a"))]);

    Ok(())
}

#[test]
fn test_distinct_empty_input() -> anyhow::Result<()> {
    // Arrange
    let input = Vec::<(usize, char)>::new().into_sequence();

    // Act
    let result = collect_values(Distinct::new().apply(input))?;

    // Assert
    assert!(result.is_empty());

    Ok(())
}

#[test]
fn test_distinct_pulls_only_what_is_needed() {
    // Arrange
    let (source, pulls) = CountingSource::new(vec![(0, 'a'), (1, 'a'), (2, 'b'), (3, 'c')]);
    let mut distinct = Distinct::new().apply(source.into_sequence());

    // Act & Assert: the duplicate is skipped on the way to 'b'
    assert_eq!(unwrap_sequence(&mut distinct), (0, 'a'));
    assert_eq!(pulls.get(), 1);
    assert_eq!(unwrap_sequence(&mut distinct), (2, 'b'));
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_distinct_is_reusable() -> anyhow::Result<()> {
    // Arrange
    let distinct = Distinct::new();

    // Act
    let first = collect_values(distinct.apply(vec![(0, 1), (1, 1)].into_sequence()))?;
    let second = collect_values(distinct.apply(vec![(0, 1), (1, 2)].into_sequence()))?;

    // Assert: no state leaks between applications
    assert_eq!(first, vec![(0, 1)]);
    assert_eq!(second, vec![(0, 1), (1, 2)]);

    Ok(())
}
