use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::time::Duration;

use arbor::prelude::*;
use arbor_id3::Id3Tree;
use ndarray::{Array, Array1, Axis};
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::SmallRng;

// Labels depend on two of the attributes, the rest is noise
fn generate_store(n_samples: usize, n_features: usize, rng: &mut SmallRng) -> TrainingStore {
    let records = Array::random_using((n_samples, n_features), Uniform::new(0u8, 3), rng);
    let targets: Array1<usize> =
        records.map_axis(Axis(1), |row| ((row[0] + 2 * row[n_features - 1]) % 3) as usize);

    TrainingStore::new(records, targets).unwrap()
}

fn id3_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);

    let training_set_sizes = &[100, 1000, 10000, 100000];
    let n_features = 8;

    // Use the default configuration
    let hyperparams = Id3Tree::params();

    let mut group = c.benchmark_group("id3");
    group
        .significance_level(0.02)
        .sample_size(10)
        .measurement_time(Duration::from_secs(10));

    for n in training_set_sizes.iter() {
        let store = generate_store(*n, n_features, &mut rng);

        // fitting reorders the store, every iteration starts from the same order
        group.bench_with_input(BenchmarkId::from_parameter(n), &store, |b, s| {
            b.iter_batched(
                || s.clone(),
                |mut s| hyperparams.fit(&mut s).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, id3_bench);
criterion_main!(benches);
