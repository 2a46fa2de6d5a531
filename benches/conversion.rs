use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use docjson::{convert, doc, to_json, DocValue, Document};

fn order(i: u32) -> DocValue {
    let mut item = Document::new();
    item.insert("sku", format!("SKU{}", i));
    item.insert("price", 9.99 + f64::from(i));
    item.insert("quantity", i);
    item.insert("tags", vec![DocValue::from("sale"), DocValue::from("new")]);
    DocValue::Document(item)
}

fn benchmark_convert_simple(c: &mut Criterion) {
    let person = doc!({"name": "Ann", "age": 30, "tags": ["x", "y"], "active": true});

    c.bench_function("convert_simple_document", |b| {
        b.iter(|| convert(black_box(&person)))
    });
}

fn benchmark_convert_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_array");

    for size in [10u32, 100, 1000].iter() {
        let orders = DocValue::Array((0..*size).map(order).collect());

        group.bench_with_input(BenchmarkId::from_parameter(size), &orders, |b, orders| {
            b.iter(|| convert(black_box(orders)))
        });
    }
    group.finish();
}

fn benchmark_convert_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_deep");

    for depth in [8usize, 64, 256].iter() {
        let mut graph = DocValue::from("leaf");
        for level in 0..*depth {
            graph = if level % 2 == 0 {
                DocValue::Array(vec![graph])
            } else {
                let mut doc = Document::new();
                doc.insert("child", graph);
                DocValue::Document(doc)
            };
        }

        group.bench_with_input(BenchmarkId::from_parameter(depth), &graph, |b, graph| {
            b.iter(|| convert(black_box(graph)))
        });
    }
    group.finish();
}

fn benchmark_to_json(c: &mut Criterion) {
    let orders = DocValue::Array((0..100).map(order).collect());

    c.bench_function("to_json_100_orders", |b| {
        b.iter(|| to_json(black_box(&orders)))
    });
}

criterion_group!(
    benches,
    benchmark_convert_simple,
    benchmark_convert_array,
    benchmark_convert_deep,
    benchmark_to_json
);
criterion_main!(benches);
