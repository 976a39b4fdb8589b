use criterion::{black_box, criterion_group, criterion_main, Criterion};
use obras_sociales_search::{
    ranking::{normalize, Ranker, TieredRanker},
    ProviderRecord,
};

fn create_test_records(count: usize) -> Vec<ProviderRecord> {
    (0..count)
        .map(|i| {
            ProviderRecord::new(
                format!("Obra Social del Personal Número {}", i),
                format!("OSP{}, OSPN{}", i, i % 10),
            )
            .with_category(if i % 3 == 0 { "SINDICAL" } else { "PREPAGA" })
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_accented", |b| {
        b.iter(|| black_box(normalize("Obra Social de la Unión Obrera Metalúrgica")))
    });
}

fn bench_tiered_ranking(c: &mut Criterion) {
    let ranker = TieredRanker::new();

    let records_300 = create_test_records(300);
    let records_3000 = create_test_records(3000);

    c.bench_function("tiered_rank_300", |b| {
        b.iter(|| black_box(ranker.rank("ospn5", &records_300)))
    });

    c.bench_function("tiered_rank_3000", |b| {
        b.iter(|| black_box(ranker.rank("personal", &records_3000)))
    });
}

criterion_group!(benches, bench_normalize, bench_tiered_ranking);
criterion_main!(benches);
