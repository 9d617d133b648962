use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jdelta::{compare, NormalizeConfig};

fn nested_document(seed: u64, entries: usize) -> String {
    // Deterministic synthetic document; `seed` perturbs values and ordering
    // so before/after differ in a realistic scattered way.
    let mut out = String::from("{");
    for i in 0..entries {
        if i > 0 {
            out.push(',');
        }
        let key = (i as u64 * 7 + seed) % entries as u64;
        out.push_str(&format!(
            "\"k{key:04}\": {{\"id\": {i}, \"tags\": [\"t{}\", \"t{}\"], \"v\": {}}}",
            (i + seed as usize) % 13,
            i % 7,
            i as u64 + seed
        ));
    }
    out.push('}');
    out
}

fn bench_pipeline(c: &mut Criterion) {
    let before = nested_document(0, 200);
    let after = nested_document(3, 200);

    let exact = NormalizeConfig::default();
    c.bench_function("compare_exact_200_entries", |b| {
        b.iter(|| compare(black_box(&before), black_box(&after), &exact))
    });

    let structural = NormalizeConfig {
        sort_keys: true,
        ignore_array_order: true,
    };
    c.bench_function("compare_structural_200_entries", |b| {
        b.iter(|| compare(black_box(&before), black_box(&after), &structural))
    });

    c.bench_function("compare_identical_200_entries", |b| {
        b.iter(|| compare(black_box(&before), black_box(&before), &structural))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
