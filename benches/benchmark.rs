//! Benchmarks for the rotor cipher engine.
//!
//! Measures machine construction from a configuration, per-letter cost of
//! the full signal path, and throughput on messages of increasing length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotorcrypt::{Letter, Machine, MachineConfig};

/// Plugboard used consistently across all benchmarks.
const BENCH_PLUGS: &str = "AMFINVPSTUWZ";

/// Message lengths, in letters, for the throughput group.
const MESSAGE_LENGTHS: &[usize] = &[16, 256, 4096];

fn bench_config() -> MachineConfig {
    MachineConfig::default()
        .with_starts(['M', 'C', 'K'])
        .with_plugboard(BENCH_PLUGS)
}

/// Benchmarks `Machine::from_config()`.
///
/// Covers parsing and validating three rotor wirings, the reflector and the
/// plugboard, and building every inverse table.
fn bench_from_config(c: &mut Criterion) {
    let config = bench_config();
    c.bench_function("from_config", |b| {
        b.iter(|| Machine::from_config(black_box(&config)).unwrap());
    });
}

/// Benchmarks a single `encrypt_letter()` call.
///
/// The machine is built once and its rotors keep advancing between
/// iterations, so stepping and double-stepping are included.
fn bench_encrypt_letter(c: &mut Criterion) {
    let mut machine = Machine::from_config(&bench_config()).unwrap();
    let letter = Letter::from_char('E').unwrap();

    c.bench_function("encrypt_letter", |b| {
        b.iter(|| machine.encrypt_letter(black_box(letter)));
    });
}

/// Benchmarks `encrypt()` across message lengths.
///
/// Resets before every message so each iteration enciphers from the same
/// starting positions.
fn bench_encrypt_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_message");

    for &len in MESSAGE_LENGTHS {
        let message: String = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG "
            .chars()
            .cycle()
            .take(len)
            .collect();
        let mut machine = Machine::from_config(&bench_config()).unwrap();

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, message| {
            b.iter(|| {
                machine.reset();
                machine.encrypt(black_box(message))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_from_config,
    bench_encrypt_letter,
    bench_encrypt_message,
);
criterion_main!(benches);
