// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{from_values, IntoSequence, KvFlowError, Operation, OperationExt, SequenceItem};
use kvflow_operations::{
    Cycle, DiffKeys, Explode, Filter, Frequency, Keys, Limit, Map, Predicate, Prepend, RSample,
    Shuffle, Since, Tail,
};
use kvflow_test_utils::{
    fixtures::abcde,
    helpers::{collect_items, collect_values},
};
use std::sync::Arc;

#[test]
fn test_keys_become_values() -> anyhow::Result<()> {
    // Arrange
    let input = vec![("x", 1), ("y", 2)].into_sequence();

    // Act
    let result = collect_values(Keys.apply(input))?;

    // Assert
    assert_eq!(result, vec![(0, "x"), (1, "y")]);

    Ok(())
}

#[test]
fn test_map_sees_key_and_value() -> anyhow::Result<()> {
    // Arrange
    let describe = Map::new(|key: &usize, value: char| format!("{key}{value}"));

    // Act
    let result = collect_values(describe.apply(abcde().into_sequence()))?;

    // Assert
    assert_eq!(result[1], (1, "1b".to_string()));
    assert_eq!(result.len(), 5);

    Ok(())
}

#[test]
fn test_filter_keeps_matching_pairs() -> anyhow::Result<()> {
    // Arrange
    let even_keys = Filter::new(|key: &usize, _: &char| key % 2 == 0);

    // Act
    let result = collect_values(even_keys.apply(abcde().into_sequence()))?;

    // Assert
    assert_eq!(result, vec![(0, 'a'), (2, 'c'), (4, 'e')]);

    Ok(())
}

#[test]
fn test_prepend_emits_items_first() -> anyhow::Result<()> {
    // Arrange
    let prepend = Prepend::new([(9, 'z')]);

    // Act
    let result = collect_values(prepend.apply(vec![(0, 'a')].into_sequence()))?;

    // Assert
    assert_eq!(result, vec![(9, 'z'), (0, 'a')]);

    Ok(())
}

#[test]
fn test_since_starts_at_first_match() -> anyhow::Result<()> {
    // Arrange
    let since = Since::when(|_: &usize, value: &char| *value == 'c');

    // Act
    let result = collect_values(since.apply(abcde().into_sequence()))?;

    // Assert
    assert_eq!(result, vec![(2, 'c'), (3, 'd'), (4, 'e')]);

    Ok(())
}

#[test]
fn test_since_any_of_several_predicates() -> anyhow::Result<()> {
    // Arrange
    let predicates: Vec<Predicate<usize, char>> = vec![
        Arc::new(|_: &usize, value: &char| *value == 'e'),
        Arc::new(|key: &usize, _: &char| *key == 3),
    ];
    let since = Since::new(predicates)?;

    // Act
    let result = collect_values(since.apply(abcde().into_sequence()))?;

    // Assert
    assert_eq!(result, vec![(3, 'd'), (4, 'e')]);

    Ok(())
}

#[test]
fn test_since_without_predicates_is_rejected() {
    // Arrange, Act
    let result = Since::<usize, char>::new(Vec::new());

    // Assert
    assert!(result.unwrap_err().is_configuration());
}

#[test]
fn test_explode_splits_on_delimiters() -> anyhow::Result<()> {
    // Arrange
    let input = from_values(vec!['a', '|', 'b', 'c', '|', '|', 'd']);

    // Act
    let result = collect_values(Explode::new(['|']).apply(input))?;

    // Assert
    assert_eq!(
        result,
        vec![
            (0, vec!['a']),
            (1, vec!['b', 'c']),
            (2, vec![]),
            (3, vec!['d']),
        ]
    );

    Ok(())
}

#[test]
fn test_diff_keys_drops_listed_keys() -> anyhow::Result<()> {
    // Arrange, Act
    let result = collect_values(DiffKeys::new([1, 3]).apply(abcde().into_sequence()))?;

    // Assert
    assert_eq!(result, vec![(0, 'a'), (2, 'c'), (4, 'e')]);

    Ok(())
}

#[test]
fn test_frequency_counts_in_first_seen_order() -> anyhow::Result<()> {
    // Arrange
    let input = from_values(vec!['b', 'a', 'b', 'b', 'c', 'a']);

    // Act
    let result = collect_values(Frequency::new().apply(input))?;

    // Assert
    assert_eq!(result, vec![(3, 'b'), (2, 'a'), (1, 'c')]);

    Ok(())
}

#[test]
fn test_rsample_is_reproducible_for_a_seed() -> anyhow::Result<()> {
    // Arrange
    let sample = RSample::new(0.5, 42)?;

    // Act
    let first = collect_values(sample.apply(from_values(0..100)))?;
    let second = collect_values(sample.apply(from_values(0..100)))?;

    // Assert
    assert_eq!(first, second);
    assert!(first.len() < 100);
    assert!(first.windows(2).all(|pair| pair[0].0 < pair[1].0));

    Ok(())
}

#[test]
fn test_rsample_probability_one_keeps_everything() -> anyhow::Result<()> {
    // Arrange, Act
    let result = collect_values(RSample::new(1.0, 7)?.apply(abcde().into_sequence()))?;

    // Assert
    assert_eq!(result, abcde());

    Ok(())
}

#[test]
fn test_rsample_rejects_out_of_range_probability() {
    for probability in [0.0, -0.1, 1.5, f64::NAN] {
        // Arrange, Act
        let result = RSample::new(probability, 0);

        // Assert
        assert!(result.unwrap_err().is_configuration());
    }
}

#[test]
fn test_shuffle_is_a_seeded_permutation() -> anyhow::Result<()> {
    // Arrange
    let shuffle = Shuffle::new(1234);

    // Act
    let first = collect_values(shuffle.apply(from_values(0..20_usize)))?;
    let second = collect_values(shuffle.apply(from_values(0..20_usize)))?;

    // Assert
    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..20).map(|i| (i, i)).collect::<Vec<_>>());

    Ok(())
}

#[test]
fn test_cycle_repeats_input() -> anyhow::Result<()> {
    // Arrange
    let cycle = Cycle.then(Limit::new(5));

    // Act
    let result = collect_values(cycle.apply(from_values(vec!['x', 'y'])))?;

    // Assert
    assert_eq!(
        result,
        vec![(0, 'x'), (1, 'y'), (0, 'x'), (1, 'y'), (0, 'x')]
    );

    Ok(())
}

#[test]
fn test_cycle_of_empty_input_is_empty() -> anyhow::Result<()> {
    // Arrange, Act
    let result = collect_values(Cycle.apply(Vec::<(usize, char)>::new().into_sequence()))?;

    // Assert
    assert!(result.is_empty());

    Ok(())
}

#[test]
fn test_tail_after_cycle_fails_fast() {
    // Arrange
    let endless = Cycle.apply(abcde().into_sequence());

    // Act
    let items = collect_items(Tail::new(1).apply(endless));

    // Assert
    assert!(matches!(
        items.as_slice(),
        [SequenceItem::Error(KvFlowError::UnboundedSource { .. })]
    ));
}
