use std::hint::black_box;

use arules::ap::{CancelToken, NoopObserver, generate_rules, mine};
use arules::config::{MineOptions, ThresholdScale, Thresholds};
use arules::data::{ItemUniverse, RecordSet};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ndarray::Array2;
use rand::Rng;

/// Generate synthetic transaction data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> (ItemUniverse, RecordSet) {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    let matrix = Array2::from_shape_vec((num_transactions, num_items), data).unwrap();
    let universe = ItemUniverse::new((0..num_items).map(|idx| format!("item{idx}"))).unwrap();
    (universe, RecordSet::from_matrix(matrix.view()))
}

fn run_mine(universe: &ItemUniverse, records: &RecordSet, min_support: f64, options: MineOptions) -> usize {
    let thresholds = Thresholds::new(min_support, 0.0, ThresholdScale::RecordCount).unwrap();
    mine(
        universe,
        records,
        &thresholds,
        options,
        &mut NoopObserver,
        &CancelToken::new(),
    )
    .unwrap()
    .len()
}

/// Benchmark mining with different dataset sizes
fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 40, 8),
        ("large_1000tx", 1000, 60, 10),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let (universe, records) = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &records, |b, records| {
            b.iter(|| run_mine(&universe, black_box(records), black_box(0.1), MineOptions::default()));
        });
    }

    group.finish();
}

/// Parallel support counting and subset pruning on and off
fn bench_apriori_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_options");
    let (universe, records) = generate_transactions(1000, 40, 10, 0.7);

    let variants = vec![
        ("parallel_pruned", MineOptions { parallel: true, prune_subsets: true }),
        ("parallel_unpruned", MineOptions { parallel: true, prune_subsets: false }),
        ("sequential_pruned", MineOptions { parallel: false, prune_subsets: true }),
    ];

    for (name, options) in variants {
        group.bench_with_input(BenchmarkId::from_parameter(name), &options, |b, &options| {
            b.iter(|| run_mine(&universe, black_box(&records), black_box(0.05), options));
        });
    }

    group.finish();
}

/// Rule generation over a fixed set of frequent itemsets
fn bench_rule_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_generation");
    let (universe, records) = generate_transactions(1000, 30, 8, 0.8);
    let thresholds = Thresholds::new(0.05, 0.0, ThresholdScale::RecordCount).unwrap();
    let frequent = mine(
        &universe,
        &records,
        &thresholds,
        MineOptions::default(),
        &mut NoopObserver,
        &CancelToken::new(),
    )
    .unwrap()
    .to_itemsets();

    for &min_confidence in &[0.2, 0.5, 0.8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.1}", min_confidence)),
            &min_confidence,
            |b, &conf| {
                b.iter(|| {
                    generate_rules(
                        black_box(&frequent),
                        conf,
                        &records,
                        MineOptions::default(),
                        &mut NoopObserver,
                        &CancelToken::new(),
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apriori_scaling,
    bench_apriori_options,
    bench_rule_generation
);
criterion_main!(benches);
