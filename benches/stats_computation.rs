use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use movie_log::MovieEntry;
use movie_log::parsers::parse_sections;
use movie_log::stats::compute_stats;
use movie_log::views::{ranked, timeline};

/// Generate synthetic entries, two thirds watched and rated
fn generate_entries(num_entries: usize) -> Vec<MovieEntry> {
    (0..num_entries)
        .map(|i| {
            let watched = i % 3 != 0;
            let rating = if watched { Some((i % 101) as f64 / 10.0) } else { None };
            MovieEntry::new(format!("Movie {}", i), rating, watched)
        })
        .collect()
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for size in [1_000, 10_000, 50_000].iter() {
        let entries = generate_entries(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("compute_stats", size), size, |b, _| {
            b.iter(|| compute_stats(black_box(&entries)));
        });
        group.bench_with_input(BenchmarkId::new("top_10", size), size, |b, _| {
            let stats = compute_stats(&entries);
            b.iter(|| black_box(&stats).top(10));
        });
        group.bench_with_input(BenchmarkId::new("ranked", size), size, |b, _| {
            b.iter(|| ranked(black_box(&entries)));
        });
    }

    group.finish();
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    for years in [10, 100].iter() {
        let mut text = String::new();
        for year in 0..*years {
            text.push_str(&format!("## {}\n", 1900 + year));
            for i in 0..100 {
                text.push_str(&format!("- [x] Movie {} - 7/10\n", i));
            }
        }
        let sections = parse_sections(&text);

        group.bench_with_input(BenchmarkId::from_parameter(years), years, |b, _| {
            b.iter(|| timeline(black_box(&sections), true));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stats, bench_timeline);
criterion_main!(benches);
