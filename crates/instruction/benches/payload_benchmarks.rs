//! Benchmarks for payload building and parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use r1_instruction::{build, ParsedInstruction};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let pubkey = [0x02; 33];
    let signature = [0x11; 64];

    for size in [0usize, 40, 1024, 65535] {
        let message = vec![0xAB; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| black_box(build(&pubkey, &signature, black_box(message)).unwrap()))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let payload = build(&[0x02; 33], &[0x11; 64], &[0xAB; 40]).unwrap();

    c.bench_function("parse_and_read", |b| {
        b.iter(|| {
            let parsed = ParsedInstruction::parse(black_box(payload.as_bytes())).unwrap();
            black_box((parsed.signer(0).unwrap(), parsed.message(0).unwrap()));
        })
    });
}

criterion_group!(benches, bench_build, bench_parse);
criterion_main!(benches);
