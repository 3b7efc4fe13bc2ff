//! Sort engine throughput with frame emission reduced to a no-op.
//!
//! Run with: cargo bench --bench sort_engine

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sorting_visualizer::SortAlgorithmKinds;
use sorting_visualizer::core::actions::cancellation::NeverCancel;
use sorting_visualizer::core::actions::generate_sequence::generate_sequence::{
    SamplingPolicy, generate_sequence,
};
use sorting_visualizer::core::actions::sort::factory::sort_algorithm_factory;
use sorting_visualizer::core::data::highlight::Highlight;
use sorting_visualizer::core::data::value_range::ValueRange;
use std::hint::black_box;

const SIZES: &[usize] = &[30, 300];

fn shuffled(size: usize) -> Vec<u32> {
    let range = ValueRange::new(1, 1000).unwrap();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    generate_sequence(size, range, SamplingPolicy::Distinct, size, &mut rng).unwrap()
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_engine");

    for &size in SIZES {
        let input = shuffled(size);
        group.throughput(Throughput::Elements(size as u64));

        for &kind in SortAlgorithmKinds::ALL {
            let algorithm = sort_algorithm_factory(kind);

            group.bench_with_input(BenchmarkId::new(kind.display_name(), size), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut values| {
                        let mut frames = 0u64;
                        let mut emitter = |_: &[u32], _: Highlight| frames += 1;
                        algorithm
                            .sort(&mut values, &mut emitter, &NeverCancel)
                            .unwrap();
                        black_box((values, frames))
                    },
                    criterion::BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
