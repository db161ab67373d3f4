//! # Enigma Benchmarks
//!
//! Measures mapping construction, rotor stepping and per-symbol encryption.
//! Stepping rebuilds the rotor's reverse table, so it is O(N) per rotor.
//!
//! Run: `cargo bench --bench machine_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use enigma_core::{MachineConfig, PermutationMapping, Rotor, encrypt_text};

/// Benchmark PermutationMapping construction
fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");

    for size in [27usize, 256, 4096] {
        let values: Vec<usize> = (0..size).map(|i| (i * 7 + 3) % size).collect();
        group.bench_with_input(BenchmarkId::new("new", size), &values, |b, values| {
            b.iter(|| black_box(PermutationMapping::new(values.clone())))
        });
    }

    group.finish();
}

/// Benchmark Rotor stepping and lookups
fn bench_rotor(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotor");

    let config = MachineConfig::preset().expect("preset");
    let rotor = Rotor::new(0, config.rotors[0].wiring.clone()).expect("rotor");

    group.bench_function("step", |b| b.iter(|| black_box(rotor.step())));

    group.bench_function("substitution", |b| {
        b.iter(|| black_box(rotor.substitution(black_box(13))))
    });

    group.bench_function("reverse_substitution", |b| {
        b.iter(|| black_box(rotor.reverse_substitution(black_box(13))))
    });

    group.finish();
}

/// Benchmark full machine encryption
fn bench_machine(c: &mut Criterion) {
    let mut group = c.benchmark_group("machine");

    let config = MachineConfig::preset().expect("preset");
    let alphabet = config.alphabet().expect("alphabet");

    group.bench_function("encrypt_symbol", |b| {
        let mut machine = config.build().expect("machine");
        b.iter(|| black_box(machine.encrypt(black_box(4))))
    });

    for len in [16usize, 256, 4096] {
        let text: String = "the quick brown fox jumps over the lazy dog "
            .chars()
            .cycle()
            .take(len)
            .collect();

        group.bench_with_input(BenchmarkId::new("encrypt_text", len), &text, |b, text| {
            b.iter(|| {
                let mut machine = config.build().expect("machine");
                black_box(encrypt_text(&mut machine, &alphabet, text))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mapping, bench_rotor, bench_machine);
criterion_main!(benches);
