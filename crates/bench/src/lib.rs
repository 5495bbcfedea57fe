use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_u64s<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    (0..len).map(|_| rng.random::<u64>()).collect()
}

/// Descending-sorted data with roughly one percent of adjacent pairs
/// disturbed by random swaps.
pub fn nearly_sorted_desc_u64s<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..len as u64).rev().collect();
    if len < 2 {
        return data;
    }

    let swaps = (len / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}

/// Random data drawn from a small set of distinct values.
pub fn duplicate_heavy_u64s<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: u64) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(0..distinct)).collect()
}
