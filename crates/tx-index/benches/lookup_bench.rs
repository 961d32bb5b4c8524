use criterion::{Criterion, criterion_group, criterion_main};
use tx_index::{InMemoryTxStore, TxIndex, TxRecord};

fn seeded_index(count: u64) -> TxIndex<InMemoryTxStore> {
    let records = (0..count).map(|n| {
        TxRecord::builder(format!("{n:064x}"))
            .chain("BNB")
            .coin("BNB.RUNE", n)
            .block_height(n)
            .build()
    });
    TxIndex::new(InMemoryTxStore::with_records(records).unwrap())
}

fn bench_lookup_found(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let index = seeded_index(10_000);
    let hash = format!("{:064x}", 4_242);

    c.bench_function("tx_index/lookup_found", |b| {
        b.iter(|| {
            rt.block_on(async {
                let result = index.lookup(&hash).await.unwrap();
                assert!(result.is_found());
            });
        });
    });
}

fn bench_lookup_not_found(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let index = seeded_index(10_000);

    c.bench_function("tx_index/lookup_not_found", |b| {
        b.iter(|| {
            rt.block_on(async {
                let result = index.lookup("bogus").await.unwrap();
                assert!(!result.is_found());
            });
        });
    });
}

fn bench_upsert(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryTxStore::new();
    let mut n = 0u64;

    c.bench_function("tx_index/upsert", |b| {
        b.iter(|| {
            n += 1;
            rt.block_on(async {
                store
                    .upsert(TxRecord::builder("abc123").coin("BNB.RUNE", n).build())
                    .await;
            });
        });
    });
}

criterion_group!(
    benches,
    bench_lookup_found,
    bench_lookup_not_found,
    bench_upsert
);
criterion_main!(benches);
