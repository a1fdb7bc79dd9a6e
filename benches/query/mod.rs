use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use cartree::CartesianTree;

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    input: &'static str,
    n_values: usize,
    n_lookups: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(
            format!("{}_values_{}_n_lookups", v.n_values, v.input),
            v.n_lookups,
        )
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("range_minimum");

    // Tree size
    for n_values in [1_000, 10_000] {
        // Number of range queries
        for n_lookups in [100, 1_000] {
            let random = CartesianTree::build(Lfsr::default().values(n_values));
            bench_param(&mut g, "random", &random, n_lookups);

            // A fully skewed tree is the worst case for query depth.
            let skewed = CartesianTree::build((0..n_values as u16).rev());
            bench_param(&mut g, "skewed", &skewed, n_lookups);
        }
    }
}

/// Perform `n_lookups` random range queries against `t`.
fn bench_param<M>(
    g: &mut BenchmarkGroup<'_, M>,
    input: &'static str,
    t: &CartesianTree<u16>,
    n_lookups: usize,
) where
    M: Measurement,
{
    // Generate the query ranges up front, outside of the measured loop.
    let mut rand = Lfsr::default();
    let queries = (0..n_lookups)
        .map(|_| rand.next_bounds(t.len()))
        .collect::<Vec<_>>();

    let bench_name = BenchName {
        input,
        n_values: t.len(),
        n_lookups,
    };

    g.throughput(Throughput::Elements(n_lookups as _)); // Queries per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for &(lo, hi) in &queries {
                black_box(t.range_minimum(lo, hi).unwrap());
            }
        })
    });
}
