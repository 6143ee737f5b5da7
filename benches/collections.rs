//! Benchmarks for observable-collections
//!
//! Run with: cargo bench

use std::collections::{BTreeMap, HashSet, LinkedList};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use observable_collections::prelude::*;

// =============================================================================
// LIST BENCHMARKS
// =============================================================================

fn bench_list_push(c: &mut Criterion) {
    c.bench_function("list_push_plain", |b| {
        b.iter(|| {
            let mut list = Vec::with_capacity(1000);
            for i in 0..1000 {
                list.push(black_box(i));
            }
            list
        })
    });

    c.bench_function("list_push_observed", |b| {
        b.iter(|| {
            let mut count = 0usize;
            let mut list = observable_list_simple(Vec::with_capacity(1000), || count += 1);
            for i in 0..1000 {
                list.push(black_box(i));
            }
            drop(list);
            count
        })
    });
}

fn bench_list_replace_unchanged(c: &mut Criterion) {
    let mut list = observable_list(vec![7u32; 1000], ());
    c.bench_function("list_replace_unchanged", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let _ = list.replace(i, black_box(7));
            }
        })
    });
}

fn bench_list_remove_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_remove_all");

    for size in [100usize, 1000] {
        let source: Vec<u32> = (0..size as u32).collect();
        let doomed: Vec<u32> = (0..size as u32).step_by(3).collect();

        group.bench_with_input(BenchmarkId::new("random_access", size), &size, |b, _| {
            b.iter(|| {
                let mut list = observable_list(source.clone(), ());
                list.remove_all(black_box(&doomed))
            })
        });

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, _| {
            b.iter(|| {
                let mut list = observable_list(source.iter().copied().collect::<LinkedList<_>>(), ());
                list.remove_all(black_box(&doomed))
            })
        });
    }

    group.finish();
}

// =============================================================================
// SET / MAP BENCHMARKS
// =============================================================================

fn bench_set_insert_duplicates(c: &mut Criterion) {
    let mut set = observable_set(HashSet::from_iter(0u32..100), ());
    c.bench_function("set_insert_duplicates", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(set.insert(i));
            }
        })
    });
}

fn bench_map_put(c: &mut Criterion) {
    c.bench_function("map_put_observed", |b| {
        b.iter(|| {
            let mut puts = 0usize;
            let mut map = observable_map_simple(BTreeMap::<u32, u32>::new(), || puts += 1);
            for i in 0..500u32 {
                map.insert(i % 50, black_box(i));
            }
            drop(map);
            puts
        })
    });
}

fn bench_map_view_retain(c: &mut Criterion) {
    let source: BTreeMap<u32, u32> = (0..1000).map(|k| (k, k % 7)).collect();
    c.bench_function("map_values_view_remove_all", |b| {
        b.iter(|| {
            let mut map = observable_map(source.clone(), ());
            map.values_view().remove_all(black_box(&[0, 3]))
        })
    });
}

criterion_group!(
    benches,
    bench_list_push,
    bench_list_replace_unchanged,
    bench_list_remove_all,
    bench_set_insert_duplicates,
    bench_map_put,
    bench_map_view_retain,
);
criterion_main!(benches);
