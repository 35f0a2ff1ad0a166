//! Benchmarks for overlap classification and blacklist construction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use boundary_dedup::{
    build_blacklist, classify, rank_by_length, resolve_blacklist, AdjacencyMatrix, Feature,
    FeatureKind, Polyline, Proximity, Spherical,
};

/// Generates a wavy polyline heading east from `(lat0, lon0)`.
fn generate_trench(num_points: usize, lat0: f64, lon0: f64) -> Polyline<f64> {
    let coords: Vec<(f64, f64)> = (0..num_points)
        .map(|i| {
            let t = i as f64 * 0.05;
            (lat0 + 0.2 * (t * 3.0).sin(), lon0 + t)
        })
        .collect();
    Polyline::from_lat_lon(&coords).unwrap()
}

/// Generates features where every third one overlaps its predecessor.
fn generate_features(count: usize, points: usize) -> Vec<Feature<f64>> {
    let mut state: u64 = 12345;
    (0..count)
        .map(|i| {
            // Simple xorshift for deterministic placement
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;

            let lat = if i % 3 == 2 { (i - 1) as f64 } else { i as f64 };
            let lon = (state % 360) as f64 - 180.0;
            let lon = if i % 3 == 2 { 0.0 } else { lon };
            let geometry = generate_trench(points, lat.min(80.0), lon);
            Feature::new(format!("f{i}"), FeatureKind::SubductionZone, vec![geometry]).unwrap()
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let threshold = Proximity::earth().threshold();

    for size in [10, 100, 1000] {
        let a = generate_trench(size, 0.0, 0.0);
        let b = generate_trench(size / 2 + 2, 0.05, 0.5);
        let far = generate_trench(size, 30.0, 0.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("overlapping", size), &(a.clone(), b), |bench, (a, b)| {
            bench.iter(|| classify(&Spherical, black_box(a), black_box(b), black_box(threshold)))
        });

        group.bench_with_input(BenchmarkId::new("far_apart", size), &(a, far), |bench, (a, far)| {
            bench.iter(|| classify(&Spherical, black_box(a), black_box(far), black_box(threshold)))
        });
    }

    group.finish();
}

fn bench_blacklist(c: &mut Criterion) {
    let mut group = c.benchmark_group("blacklist");
    let threshold = Proximity::earth().threshold();

    for count in [10, 50, 200] {
        let features = generate_features(count, 50);
        let ranked = rank_by_length(&Spherical, &features);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("build", count), &ranked, |b, ranked| {
            b.iter(|| build_blacklist(&Spherical, black_box(ranked), black_box(threshold)))
        });

        group.bench_with_input(BenchmarkId::new("matrix", count), &ranked, |b, ranked| {
            b.iter(|| {
                let matrix = AdjacencyMatrix::compute(&Spherical, black_box(ranked), threshold);
                resolve_blacklist(ranked, &matrix)
            })
        });

        #[cfg(feature = "parallel")]
        {
            group.bench_with_input(BenchmarkId::new("par_matrix", count), &ranked, |b, ranked| {
                b.iter(|| {
                    let matrix =
                        AdjacencyMatrix::par_compute(&Spherical, black_box(ranked), threshold);
                    resolve_blacklist(ranked, &matrix)
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_blacklist);
criterion_main!(benches);
