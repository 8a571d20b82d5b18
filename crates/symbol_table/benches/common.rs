use std::hint::black_box;
use std::time::Duration;

use bench::{apply_medium_runtime_config, apply_small_runtime_config, default_rng, probe_keys, shuffled_keys};
use criterion::measurement::Measurement;
use criterion::{BatchSize, BenchmarkGroup, BenchmarkId};

use symbol_table::{Balancing, SymbolTable};

const SIZES: [usize; 3] = [1_000, 16_000, 64_000];
const OPS_PER_ITER: usize = 200;

const STRATEGIES: [(Balancing, &str); 2] = [
    (Balancing::Unbalanced, "bst"),
    (Balancing::RedBlack, "llrb"),
];

fn filled(balancing: Balancing, keys: &[u64]) -> SymbolTable<u64, u64> {
    let mut table = SymbolTable::with_balancing(balancing);
    for &k in keys {
        table.put(k, k);
    }
    table
}

pub fn bench_read<T>(group: &mut BenchmarkGroup<'_, T>, balancing: Balancing, label: &str)
where
    T: Measurement<Value = Duration>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let mut rng = default_rng();
        let table = filled(balancing, &shuffled_keys(&mut rng, size));
        let probes = probe_keys(&mut rng, size, OPS_PER_ITER);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                for key in &probes {
                    black_box(table.get(key).ok());
                }
            })
        });
    }
}

pub fn bench_ordered<T>(group: &mut BenchmarkGroup<'_, T>, balancing: Balancing, label: &str)
where
    T: Measurement<Value = Duration>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let mut rng = default_rng();
        let table = filled(balancing, &shuffled_keys(&mut rng, size));
        let probes = probe_keys(&mut rng, size, OPS_PER_ITER);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                for key in &probes {
                    black_box(table.floor(key).ok());
                    black_box(table.ceil(key).ok());
                    let rank = table.rank(key);
                    black_box(table.select(rank).ok());
                }
            })
        });
    }
}

/// Deletes a batch of keys from a fresh clone of the table, then puts them back.
pub fn bench_update<T>(group: &mut BenchmarkGroup<'_, T>, balancing: Balancing, label: &str)
where
    T: Measurement<Value = Duration>,
{
    for &size in &SIZES {
        apply_medium_runtime_config(group);
        let mut rng = default_rng();
        let keys = shuffled_keys(&mut rng, size);
        let table = filled(balancing, &keys);
        let victims = &keys[..OPS_PER_ITER.min(size)];

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_batched_ref(
                || table.clone(),
                |table| {
                    for key in victims {
                        black_box(table.delete(key).ok());
                    }
                    for &key in victims {
                        black_box(table.put(key, key));
                    }
                    black_box(table.delete_min().ok());
                },
                BatchSize::LargeInput,
            )
        });
    }
}

pub fn bench_all_read<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    for (balancing, label) in STRATEGIES {
        bench_read(group, balancing, label);
    }
}

pub fn bench_all_ordered<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    for (balancing, label) in STRATEGIES {
        bench_ordered(group, balancing, label);
    }
}

pub fn bench_all_update<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    for (balancing, label) in STRATEGIES {
        bench_update(group, balancing, label);
    }
}
