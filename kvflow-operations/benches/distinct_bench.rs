// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use kvflow_core::{from_values, Operation, Sequence};
use kvflow_operations::Distinct;
use std::hint::black_box;

fn make_sequence_with_cardinality(
    size: usize,
    cardinality: usize,
) -> Sequence<'static, usize, u64> {
    from_values((0..size).map(move |i| (i % cardinality) as u64))
}

pub fn bench_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct");
    let sizes = [100usize, 1000usize, 10000];
    // Distinct compares against every value seen so far, so cardinality drives the cost
    let cardinalities = [1usize, 10usize, 100usize];

    for &size in &sizes {
        for &cardinality in &cardinalities {
            let id = BenchmarkId::from_parameter(format!("m{size}_card{cardinality}"));
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                id,
                &(size, cardinality),
                |bencher, &(size, cardinality)| {
                    bencher.iter(|| {
                        let sequence = make_sequence_with_cardinality(size, cardinality);
                        for item in Distinct::new().apply(sequence) {
                            black_box(item);
                        }
                    });
                },
            );
        }
    }

    group.finish();
}
