// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::materialize::{initial_capacity, is_unbounded, CapacityLimit};
use kvflow_core::{KvFlowError, Result, Sequence, Transformation};
use std::collections::HashMap;
use std::hash::Hash;

/// Collects the input into an associative vector with unique keys.
///
/// A key seen again keeps the position of its first occurrence and takes the
/// value of its last: `[(a, 1), (b, 2), (a, 3)]` collects to
/// `[(a, 3), (b, 2)]`. Use [`Chunk`](crate::Chunk) or
/// [`Keys`](crate::Keys) first to keep every pair regardless of key.
///
/// # Errors
///
/// - [`KvFlowError::UnboundedSource`] if the input declares itself endless
/// - the first source error met
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All;

impl<K, V> Transformation<K, V> for All
where
    K: Eq + Hash + Clone,
{
    type Output = Vec<(K, V)>;

    fn apply(&self, input: Sequence<'_, K, V>) -> Result<Vec<(K, V)>> {
        if is_unbounded(&input) {
            warn!("all: refusing to consume an unbounded source");
            return Err(KvFlowError::unbounded_source("all"));
        }

        let mut pairs: Vec<(K, V)> = Vec::with_capacity(initial_capacity(
            input.size_hint().0,
            CapacityLimit::unlimited(),
        ));
        let mut positions: HashMap<K, usize> = HashMap::new();
        for item in input {
            let (key, value) = item.into_result()?;
            match positions.get(&key) {
                Some(&position) => pairs[position].1 = value,
                None => {
                    positions.insert(key.clone(), pairs.len());
                    pairs.push((key, value));
                }
            }
        }
        Ok(pairs)
    }
}
