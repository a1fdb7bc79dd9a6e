use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use cartree::CartesianTree;

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    input: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.input), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    for n_values in [1, 100, 1_000, 10_000] {
        let random = Lfsr::default().values(n_values);
        bench_param(&mut g, "random", &random);

        // Monotonic input produces a fully skewed tree.
        let increasing = (0..n_values).collect::<Vec<_>>();
        bench_param(&mut g, "increasing", &increasing);

        let decreasing = (0..n_values).rev().collect::<Vec<_>>();
        bench_param(&mut g, "decreasing", &decreasing);
    }
}

/// Measure the time needed to build a tree from `values`.
fn bench_param<M, T>(g: &mut BenchmarkGroup<'_, M>, input: &'static str, values: &[T])
where
    M: Measurement,
    T: Ord + Clone,
{
    let bench_name = BenchName {
        input,
        n_values: values.len(),
    };

    g.throughput(Throughput::Elements(values.len() as _)); // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || values.to_vec(),
            CartesianTree::build,
            criterion::BatchSize::SmallInput,
        );
    });
}
