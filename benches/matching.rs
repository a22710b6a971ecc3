use criterion::{criterion_group, criterion_main, Criterion};
use http::Method;
use serde_json::json;
use shunt::Registry;

fn registry_with_routes(n: usize) -> Registry {
    let registry = Registry::new();
    for i in 0..n {
        registry
            .register(Method::GET, &format!("/resource{i}/:id"), |_ctx| {
                Ok(json!(null))
            })
            .expect("bench pattern must compile");
    }
    registry
}

fn bench_resolve(c: &mut Criterion) {
    let registry = registry_with_routes(100);

    c.bench_function("resolve_hit_first", |b| {
        b.iter(|| registry.resolve(&Method::GET, "/resource0/42", None))
    });

    c.bench_function("resolve_hit_last", |b| {
        b.iter(|| registry.resolve(&Method::GET, "/resource99/42", None))
    });

    c.bench_function("resolve_miss", |b| {
        b.iter(|| registry.resolve(&Method::GET, "/absent/42", None))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
