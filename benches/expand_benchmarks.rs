//! Benchmark suite for the expansion and sparse-cleanup passes
//!
//! Problems are synthesized from deterministically seeded truth tables so
//! runs are comparable across machines and revisions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use espresso_expand::{expand, make_sparse, Cover, Geometry};

/// Minimal deterministic generator (xorshift64*), no external seeding
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

/// Build minterm ON/OFF covers of a random function over `n` inputs
fn random_problem(n: usize, outputs: usize, seed: u64) -> (Geometry, Cover, Cover) {
    let geom = Geometry::new(n, outputs).unwrap();
    let mut rng = Rng(seed);
    let mut f = Cover::new();
    let mut r = Cover::new();

    for minterm in 0..(1usize << n) {
        let inputs: Vec<Option<bool>> = (0..n).map(|v| Some((minterm >> v) & 1 == 1)).collect();
        let mut on = vec![false; outputs];
        let mut off = vec![false; outputs];
        for out in 0..outputs {
            match rng.next() % 3 {
                0 => on[out] = true,
                1 => off[out] = true,
                _ => {}
            }
        }
        if on.contains(&true) {
            f.push(geom.cube(&inputs, &on).unwrap());
        }
        if off.contains(&true) {
            r.push(geom.cube(&inputs, &off).unwrap());
        }
    }
    (geom, f, r)
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    for &(name, inputs) in &[("small", 4usize), ("medium", 7), ("large", 10)] {
        let (geom, f, r) = random_problem(inputs, 2, 0x5EED + inputs as u64);
        group.throughput(Throughput::Elements(f.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &(), |b, _| {
            b.iter(|| {
                let mut r = r.clone();
                black_box(expand(&geom, f.clone(), &mut r, false).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_make_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_sparse");

    for &(name, inputs) in &[("small", 4usize), ("medium", 6)] {
        let (geom, f, r) = random_problem(inputs, 3, 0xCAFE + inputs as u64);
        let primes = {
            let mut r = r.clone();
            expand(&geom, f, &mut r, false).unwrap()
        };
        let d = Cover::new();
        group.throughput(Throughput::Elements(primes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &(), |b, _| {
            b.iter(|| {
                let mut r = r.clone();
                black_box(make_sparse(&geom, primes.clone(), &d, &mut r).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_expand, bench_make_sparse);
criterion_main!(benches);
