use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgscope::{CmpOp, Fallback, ScopeExt, SelectQb, quote_ident_segments, select};

/// Build a SELECT with `n` rounds of scope helpers:
/// starts_with, in_delimited_list, or_empty_or_null per round.
fn build_scoped_select(n: usize) -> SelectQb {
    let mut qb = select("posts");
    for i in 0..n {
        qb = qb
            .starts_with(&format!("title{i}"), "Rust")
            .in_delimited_list(&format!("tags{i}"), "async")
            .or_empty_or_null(format!("subtitle{i}"), "", None);
    }
    qb
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_builder/to_sql");

    for n in [1, 5, 10, 50] {
        let qb = build_scoped_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_builder/build_and_render");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let qb = build_scoped_select(n);
                black_box(qb.build());
            });
        });
    }

    group.finish();
}

fn bench_batch_empty_or_null(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_builder/batch_empty_or_null");

    for n in [5, 20, 100] {
        let pairs: Vec<(String, String)> = (0..n)
            .map(|i| (format!("col{i}"), if i % 2 == 0 { String::new() } else { format!("v{i}") }))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &pairs, |b, pairs| {
            b.iter(|| {
                let qb = select("t").or_empty_or_null(pairs.clone(), "", Some("v1"));
                black_box(qb.to_sql());
            });
        });
    }

    group.finish();
}

fn bench_null_fallback(c: &mut Criterion) {
    c.bench_function("scope_builder/null_fallback", |b| {
        b.iter(|| {
            let qb = select("sessions")
                .with_null_fallback("expires_at", Fallback::raw("NOW()"), CmpOp::Lt, 0i64)
                .with_null_fallback("attempts", Fallback::value(0i32), CmpOp::Lte, 3i32);
            black_box(qb.to_sql());
        });
    });
}

fn bench_quote_ident(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_builder/quote_ident");

    for ident in ["tags", "public.posts.tags", "lower(tags)"] {
        group.bench_with_input(BenchmarkId::from_parameter(ident), &ident, |b, ident| {
            b.iter(|| black_box(quote_ident_segments(ident)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_build_and_render,
    bench_batch_empty_or_null,
    bench_null_fallback,
    bench_quote_ident
);
criterion_main!(benches);
