// Criterion benchmark suite for the column-bounded scanner.
//
// Run: cargo bench
// Specific group: cargo bench -- ascii
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use unicol::loader::load_from_directory;
use unicol::scan::{scan_text, NullReceiver, ScanState};
use unicol::table::CodepointPropertiesTable;

fn fixture_table() -> CodepointPropertiesTable {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/ucd");
    load_from_directory(dir).expect("fixture UCD data must load")
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

fn ascii_text(len: usize) -> Vec<u8> {
    b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn cjk_text(len: usize) -> Vec<u8> {
    "漢字漢字漢字漢字"
        .as_bytes()
        .iter()
        .copied()
        .cycle()
        .take(len - len % 3)
        .collect()
}

fn emoji_text(len: usize) -> Vec<u8> {
    "❤️🙂❤️🙂"
        .as_bytes()
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn mixed_text(len: usize) -> Vec<u8> {
    "status: ok 漢字 12% ❤️ done. "
        .as_bytes()
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

// ---------------------------------------------------------------------------
// 1. scan -- full scans with an unbounded budget
// ---------------------------------------------------------------------------

fn bench_scan(c: &mut Criterion) {
    let table = fixture_table();
    let inputs: &[(&str, fn(usize) -> Vec<u8>)] = &[
        ("ascii", ascii_text),
        ("cjk", cjk_text),
        ("emoji", emoji_text),
        ("mixed", mixed_text),
    ];

    let mut group = c.benchmark_group("scan");
    for (name, make) in inputs {
        for size in [256usize, 4096] {
            let text = make(size);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(*name, size), &text, |b, text| {
                b.iter(|| {
                    let mut state = ScanState::default();
                    let result = scan_text(
                        &table,
                        &mut state,
                        black_box(text),
                        usize::MAX,
                        &mut NullReceiver,
                    );
                    black_box(result.count)
                });
            });
        }
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. wrap -- repeated scans with a terminal-line budget
// ---------------------------------------------------------------------------

fn bench_wrap(c: &mut Criterion) {
    let table = fixture_table();
    let text = mixed_text(4096);

    let mut group = c.benchmark_group("wrap");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("columns_80", |b| {
        b.iter(|| {
            let mut remaining = black_box(&text[..]);
            let mut total = 0usize;
            while !remaining.is_empty() {
                let mut state = ScanState::default();
                let result = scan_text(&table, &mut state, remaining, 80, &mut NullReceiver);
                total += result.count;
                if state.next == 0 {
                    break;
                }
                remaining = &remaining[state.next..];
            }
            black_box(total)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_scan, bench_wrap);
criterion_main!(benches);
