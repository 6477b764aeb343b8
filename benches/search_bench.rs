use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rummage::models::{Keywords, QuerySpec};
use rummage::{CompiledQuery, SearchService, ServiceConfig};

const LANGS: [&str; 4] = ["en", "fr", "de", "es"];

fn build_service(doc_count: usize) -> SearchService {
    let service = SearchService::new(ServiceConfig::default()).unwrap();
    for i in 1..=doc_count {
        let mut keywords = Keywords::new();
        keywords.insert("title".to_string(), format!("rust programming language doc {}", i));
        keywords.insert("lang".to_string(), LANGS[i % LANGS.len()].to_string());
        keywords.insert("year".to_string(), (2000 + i % 25).to_string());
        service
            .put("bench", &i.to_string(), keywords, None)
            .unwrap();
    }
    service
}

fn bench_query(c: &mut Criterion, name: &str, spec: QuerySpec) {
    let counts = [1_000usize, 5_000, 10_000];
    let envs: Vec<(usize, SearchService)> = counts
        .iter()
        .map(|&count| (count, build_service(count)))
        .collect();
    let query = CompiledQuery::compile(&spec).unwrap();

    let mut group = c.benchmark_group(name);
    for (count, service) in envs.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), service, |b, service| {
            b.iter(|| {
                black_box(service.query("bench", &query, 0, 10));
            });
        });
    }
    group.finish();
}

fn bench_match_all(c: &mut Criterion) {
    bench_query(c, "match_all", QuerySpec::new());
}

fn bench_regex_and_filter(c: &mut Criterion) {
    bench_query(
        c,
        "regex_and_filter",
        QuerySpec::new()
            .and("title", "doc [0-9]+5$")
            .filter("lang", "en,fr"),
    );
}

fn bench_multi_key_sort(c: &mut Criterion) {
    bench_query(
        c,
        "multi_key_sort",
        QuerySpec::new().sort("year,lang,title", "asc"),
    );
}

criterion_group!(
    benches,
    bench_match_all,
    bench_regex_and_filter,
    bench_multi_key_sort
);
criterion_main!(benches);
