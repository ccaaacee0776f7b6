/// Performance benchmarks for batch lookups and result projection
///
/// These benchmarks measure the in-process cost of the batch orchestrator and
/// the TSV renderers, independent of any database.
///
/// Run with: cargo bench --bench projection_performance
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::runtime::Runtime;

use bgw_common::{types::into_document, Document};
use bgw_server::{
    batch,
    catalog::Collection,
    projector::{Projection, ReturnType},
    query,
    store::MemoryStore,
};

fn protein(i: usize) -> Value {
    json!({
        "_id": format!("http://rdf.biogateway.eu/prot/P{i:05}"),
        "prefLabel": format!("PROT{i}_HUMAN"),
        "lcLabel": format!("prot{i}_human"),
        "synonyms": [format!("GENE{i}"), format!("ALT{i}")],
        "lcSynonyms": [format!("gene{i}"), format!("alt{i}")],
        "definition": format!("Benchmark protein number {i}"),
        "taxon": if i % 2 == 0 { "9606" } else { "10090" },
        "refScore": i % 100
    })
}

fn documents(count: usize) -> Vec<Document> {
    (0..count)
        .filter_map(|i| into_document(protein(i)))
        .collect()
}

fn store(count: usize) -> MemoryStore {
    MemoryStore::new().with_collection(Collection::Protein.storage_name(), documents(count))
}

fn uris(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("http://rdf.biogateway.eu/prot/P{i:05}"))
        .collect()
}

fn bench_node_tsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_tsv");
    let extra_fields = vec!["taxon".to_string(), "synonyms".to_string()];

    for size in [100, 1000, 10000].iter() {
        let nodes: Vec<_> = documents(*size)
            .into_iter()
            .enumerate()
            .map(|(i, doc)| (i % 10 != 0).then_some(doc))
            .collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &nodes, |b, nodes| {
            b.iter(|| {
                Projection::nodes(black_box(nodes.clone()), ReturnType::Tsv, &extra_fields)
            });
        });
    }

    group.finish();
}

fn bench_label_dump(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_dump");

    for size in [1000, 10000].iter() {
        let docs = documents(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &docs, |b, docs| {
            b.iter(|| Projection::labels(black_box(docs.clone()), ReturnType::Tsv));
        });
    }

    group.finish();
}

fn bench_batch_fetch(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let store = store(10000);

    let mut group = c.benchmark_group("batch_fetch_by_uri");
    group.sample_size(30);
    group.measurement_time(Duration::from_secs(10));

    for size in [10, 100, 500].iter() {
        let keys = uris(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.to_async(&rt).iter(|| async {
                batch::fetch_nodes_by_uri(&store, black_box(keys), Some(Duration::from_secs(1))).await
            });
        });
    }

    group.finish();
}

fn bench_prefix_search(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let store = store(10000);

    c.bench_function("prefix_label_search", |b| {
        b.to_async(&rt).iter(|| async {
            query::prefix_label(Collection::Protein, black_box("prot12"), None, 20)
                .unwrap()
                .fetch_all(&store)
                .await
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_node_tsv,
    bench_label_dump,
    bench_batch_fetch,
    bench_prefix_search
);
criterion_main!(benches);
