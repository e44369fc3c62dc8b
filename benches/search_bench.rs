use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use simple_search::{build_index, MatchStrategy, QueryEngine, RecordStore, Tokenizer};

const FIRST: &[&str] = &["Dwight", "Rene", "Katie", "Erick", "Myrtle", "Ada", "Linus"];
const LAST: &[&str] = &["Joseph", "Webb", "Jacobs", "Harrington", "Medina", "Burgess"];

fn build_store(record_count: usize) -> RecordStore {
    RecordStore::from_lines((0..record_count).map(|i| {
        let first = FIRST[i % FIRST.len()];
        let last = LAST[(i / FIRST.len()) % LAST.len()];
        format!("{} {} user{}@example.com", first, last, i)
    }))
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");
    let tokenizer = Tokenizer::default();

    for &count in &[1_000usize, 10_000] {
        let store = build_store(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            b.iter(|| black_box(build_index(store, &tokenizer)));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let store = build_store(10_000);
    let index = build_index(&store, &Tokenizer::default());
    let engine = QueryEngine::new(&index);
    let words = ["erick", "webb"];

    let mut group = c.benchmark_group("resolve");
    for strategy in [MatchStrategy::All, MatchStrategy::Any, MatchStrategy::None] {
        group.bench_function(strategy.as_str(), |b| {
            b.iter(|| black_box(engine.resolve_strategy(strategy, black_box(&words))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_index, bench_resolve);
criterion_main!(benches);
