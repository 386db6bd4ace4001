//! Calldata decode throughput benchmarks.
//!
//! # Running
//! ```bash
//! cargo bench --package swapcodec-evm
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use swapcodec_evm::{chunked_decode, decode_transaction_input, ErrorMode, SelectorTable};

// ─── Table setup ──────────────────────────────────────────────────────────────

fn make_table() -> SelectorTable {
    SelectorTable::from_signatures([
        "swapExactTokensForTokens(uint256 amountIn, uint256 amountOutMin, address[] path, address to, uint256 deadline)",
        "swapExactETHForTokens(uint256 amountOutMin, address[] path, address to, uint256 deadline)",
        "addLiquidity(address tokenA, address tokenB, uint256 amountADesired, uint256 amountBDesired, uint256 amountAMin, uint256 amountBMin, address to, uint256 deadline)",
    ])
    .expect("build router table")
}

// ─── Calldata factory ─────────────────────────────────────────────────────────

fn word(n: u64) -> [u8; 32] {
    let mut w = [0u8; 32];
    w[24..].copy_from_slice(&n.to_be_bytes());
    w
}

fn token(i: u64, hop: u8) -> [u8; 32] {
    let mut w = word(i);
    w[12] = hop.wrapping_add(1);
    w
}

/// swapExactTokensForTokens with a path of `hops` tokens.
fn make_swap(i: u64, hops: usize) -> Vec<u8> {
    let mut data = vec![0x38, 0xed, 0x17, 0x39];
    for w in [word(1_000 + i), word(i), word(0xa0), token(i, 0xff), word(1_700_000_000 + i), word(hops as u64)] {
        data.extend_from_slice(&w);
    }
    for hop in 0..hops {
        data.extend_from_slice(&token(i, hop as u8));
    }
    data
}

fn make_batch(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|i| make_swap(i as u64, 2 + i % 3)).collect()
}

// ─── Benchmarks ───────────────────────────────────────────────────────────────

fn bench_single_decode(c: &mut Criterion) {
    let table = make_table();
    let mut group = c.benchmark_group("single_decode");
    for hops in [2, 4, 8] {
        let calldata = make_swap(0, hops);
        group.bench_with_input(BenchmarkId::new("path_len", hops), &calldata, |b, data| {
            b.iter(|| decode_transaction_input(&table, data));
        });
    }
    group.finish();
}

fn bench_batch_decode(c: &mut Criterion) {
    let table = make_table();
    let mut group = c.benchmark_group("batch_decode_rayon");
    for batch_size in [1_000, 10_000, 100_000] {
        let batch = make_batch(batch_size);
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch,
            |b, batch| {
                b.iter(|| chunked_decode(&table, batch, 10_000, ErrorMode::Skip));
            },
        );
    }
    group.finish();
}

fn bench_selector_lookup(c: &mut Criterion) {
    let table = make_table();
    c.bench_function("selector_table_resolve", |b| {
        b.iter(|| table.resolve([0x38, 0xed, 0x17, 0x39]));
    });
}

criterion_group!(benches, bench_single_decode, bench_batch_decode, bench_selector_lookup);
criterion_main!(benches);
