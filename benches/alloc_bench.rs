//! Criterion benchmarks for the assignment search.
//!
//! Uses synthetic catalogs and mission sets to measure enumeration and
//! end-to-end solving cost as the pool grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mission_alloc::model::{Catalog, Mission, MissionSet, Requirement, Resource, StatMap};
use mission_alloc::pool::build_candidates;
use mission_alloc::search::Partitions;
use mission_alloc::solver::{solve, SolverConfig};

// ===========================================================================
// Synthetic instances
// ===========================================================================

fn stats(entries: &[(&str, f64)]) -> StatMap {
    entries.iter().map(|&(n, v)| (n.to_owned(), v)).collect()
}

fn synthetic_catalog(units: usize) -> Catalog {
    (0..units)
        .map(|i| {
            (
                i as i64 + 1,
                Resource {
                    capacity: 1,
                    stats: stats(&[("str", 5.0 * i as f64), ("agi", 30.0 - i as f64)]),
                    ..Resource::default()
                },
            )
        })
        .collect()
}

fn synthetic_set(missions: usize) -> MissionSet {
    MissionSet {
        missions: (0..missions)
            .map(|i| {
                (
                    i as i64 + 1,
                    Mission {
                        capacity: 1 + (i as i64 % 2),
                        requirements: [
                            (
                                1,
                                Requirement {
                                    stats: vec![stats(&[("str", 10.0 * i as f64)])],
                                    rewards: stats(&[("gold", 1.0)]),
                                    ..Requirement::default()
                                },
                            ),
                            (
                                2,
                                Requirement {
                                    reduce_stats: stats(&[("agi", 20.0)]),
                                    rewards: stats(&[("gold", 2.0)]),
                                    ..Requirement::default()
                                },
                            ),
                        ]
                        .into(),
                        ..Mission::default()
                    },
                )
            })
            .collect(),
        rewards: stats(&[("gold", 1.0)]),
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("partitions");
    for units in [4usize, 6, 8] {
        let set = synthetic_set(3);
        let catalog = synthetic_catalog(units);
        group.bench_with_input(BenchmarkId::from_parameter(units), &units, |b, _| {
            b.iter(|| {
                let candidates = build_candidates(&catalog, set.total_capacity());
                let count = Partitions::new(&set, candidates).count();
                black_box(count)
            })
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for units in [4usize, 6, 8] {
        let set = synthetic_set(3);
        let catalog = synthetic_catalog(units);
        let config = SolverConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(units), &units, |b, _| {
            b.iter(|| black_box(solve(&set, &catalog, &config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enumeration, bench_solve);
criterion_main!(benches);
