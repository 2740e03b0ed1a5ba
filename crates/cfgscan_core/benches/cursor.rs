//! Cursor benchmarks for `cfgscan_core`.
//!
//! Measures key/delimiter/value walk throughput over generated config text,
//! with and without comment regions to skip.

use std::hint::black_box;

use cfgscan_core::Cursor;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate `n` `key = value` lines.
fn generate_entries(n: usize) -> String {
    (0..n)
        .map(|i| format!("key_{i} = value_{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate `n` entries with a line comment and a nested block comment
/// every ten lines.
fn generate_commented(n: usize) -> String {
    (0..n)
        .map(|i| {
            if i % 10 == 0 {
                format!("# section {i}\n/* a /* b */ c */\nkey_{i}: {i}")
            } else {
                format!("key_{i}: {i}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Walk the whole buffer, counting entries outside comments.
fn count_entries(src: &[u8]) -> usize {
    let mut cursor = Cursor::new(src);
    let mut count = 0;
    loop {
        let step = if cursor.in_comment() {
            cursor.advance_to_next_comment_marker()
        } else {
            cursor
                .advance_to_next_key()
                .and_then(|()| cursor.advance_to_next_delimiter())
                .and_then(|()| cursor.advance_to_next_value())
                .map(|()| {
                    if !cursor.in_comment() {
                        count += 1;
                    }
                })
        };
        if step.is_err() {
            return count;
        }
    }
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor/walk");

    for (name, generate) in [
        ("plain", generate_entries as fn(usize) -> String),
        ("commented", generate_commented),
    ] {
        for lines in [100, 1_000, 10_000] {
            let source = generate(lines);
            group.throughput(Throughput::Bytes(source.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(name, lines),
                source.as_bytes(),
                |b, src| b.iter(|| black_box(count_entries(src))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_walk);
criterion_main!(benches);
