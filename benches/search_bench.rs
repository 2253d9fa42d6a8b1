//! Search pipeline benchmarks.
//!
//! Measures full-query latency per match rule and how it scales with
//! dataset size. The search runs synchronously on the UI thread, so these
//! numbers bound input-to-screen latency directly.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `rules` | One query per match rule (substring, code variant, synonym, miss) |
//! | `scaling` | Substring query latency as the dataset grows |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use osdex_core::search;
use osdex_core::types::ServiceOrder;
use std::hint::black_box;

/// Synthetic dataset in the shape of the real resource: prefixed codes and
/// short Portuguese maintenance phrases.
fn dataset(size: usize) -> Vec<ServiceOrder> {
    let subjects = [
        "Bucha do braço oscilante",
        "Troca de bicos injetores",
        "Freio dianteiro",
        "Troca de óleo do motor",
        "Correia dentada",
        "Mangueira do radiador",
    ];
    (0..size)
        .map(|i| ServiceOrder {
            code: format!("F{:03}", i % 1000),
            description: subjects[i % subjects.len()].to_string(),
            sub_description: (i % 3 == 0).then(|| format!("Revisão de {}.000 km", 10 + i % 90)),
            service_note: (i % 2 == 0).then(|| "Substituição e limpeza da área".to_string()),
        })
        .collect()
}

fn rules_bench(c: &mut Criterion) {
    let orders = dataset(1_000);
    let mut group = c.benchmark_group("rules");
    group.throughput(Throughput::Elements(orders.len() as u64));

    let cases = [
        ("substring", "bucha"),
        ("code_variant", "3"),
        ("synonym", "mancal"),
        ("miss", "zzzzzz"),
    ];

    for (name, query) in cases {
        group.bench_with_input(BenchmarkId::new(name, ""), &query, |b, query| {
            b.iter(|| search::search(black_box(query), black_box(&orders)))
        });
    }

    group.finish();
}

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [100usize, 1_000, 10_000] {
        let orders = dataset(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &orders, |b, orders| {
            b.iter(|| search::search(black_box("troca"), black_box(orders)))
        });
    }

    group.finish();
}

criterion_group!(search_benches, rules_bench, scaling_bench);
criterion_main!(search_benches);
