//! # Traversal Benchmarks
//!
//! Claims to validate:
//! - Cursor traversal: amortized O(1) per point, no allocation per step
//! - `Points` iterator: same cost as the bare cursor
//! - Reverse traversal: same cost as forward
//!
//! Shapes:
//! - 2D raster 512x512
//! - 3D volume 64^3
//! - 4D box 16^4 (deep carry cascades)

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use lattice_core::{HyperRectDomain, Point};
use rand::Rng;
use std::time::Duration;

fn square<const D: usize>(side: i64) -> HyperRectDomain<D> {
    HyperRectDomain::new(Point::zero(), Point::splat(side - 1)).expect("positive side")
}

fn cursor_sum<const D: usize>(domain: &HyperRectDomain<D>) -> i64 {
    let mut it = domain.begin();
    let end = domain.end();
    let mut acc = 0i64;
    while it != end {
        acc = acc.wrapping_add(it.current()[D - 1]);
        it.advance();
    }
    acc
}

fn bench_shape<const D: usize>(c: &mut Criterion, label: &str, side: i64) {
    let domain = square::<D>(side);
    let points = domain.size().expect("benchmark domains are small") as u64;

    let mut group = c.benchmark_group(format!("traversal-{label}"));
    group.measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(points));

    group.bench_with_input(BenchmarkId::new("cursor_forward", side), &domain, |b, d| {
        b.iter(|| black_box(cursor_sum(d)))
    });

    group.bench_with_input(BenchmarkId::new("iter_forward", side), &domain, |b, d| {
        b.iter(|| black_box(d.iter().fold(0i64, |acc, p| acc.wrapping_add(p[D - 1]))))
    });

    group.bench_with_input(BenchmarkId::new("iter_reverse", side), &domain, |b, d| {
        b.iter(|| {
            black_box(
                d.iter()
                    .rev()
                    .fold(0i64, |acc, p| acc.wrapping_add(p[D - 1])),
            )
        })
    });

    group.finish();
}

/// Full traversals in 2, 3 and 4 dimensions.
pub fn bench_full_traversal(c: &mut Criterion) {
    bench_shape::<2>(c, "2d", 512);
    bench_shape::<3>(c, "3d", 64);
    bench_shape::<4>(c, "4d", 16);
}

/// Membership tests against random points, half inside and half outside.
pub fn bench_contains(c: &mut Criterion) {
    let domain = square::<3>(100);
    let mut rng = rand::thread_rng();
    let probes: Vec<Point<3>> = (0..10_000)
        .map(|_| {
            Point::new([
                rng.gen_range(-50..150),
                rng.gen_range(-50..150),
                rng.gen_range(-50..150),
            ])
        })
        .collect();

    let mut group = c.benchmark_group("contains-3d");
    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("contains_random", |b| {
        b.iter(|| black_box(probes.iter().filter(|p| domain.contains(p)).count()))
    });
    group.finish();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_sum_matches_iterator() {
        let domain = square::<3>(5);
        let via_iter = domain.iter().fold(0i64, |acc, p| acc + p[2]);
        assert_eq!(cursor_sum(&domain), via_iter);
        assert_eq!(via_iter, 25 * 10, "25 points per slice, z summing to 10");
    }
}
