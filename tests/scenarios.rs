use boundary_dedup::config::EARTH_MEAN_RADIUS_KM;
use boundary_dedup::{
    build_blacklist, classify, classify_features, filter_anomalous, rank_by_length, Adjacency,
    Feature, FeatureCollection, FeatureId, FeatureKind, GeometryAdapter, Polyline, Proximity,
    SpherePoint, Spherical,
};

/// Degrees of arc for a surface distance on the Earth.
fn km(d: f64) -> f64 {
    (d / EARTH_MEAN_RADIUS_KM).to_degrees()
}

/// Polyline from (north_km, east_km) offsets from (0°N, 0°E).
fn path(coords: &[(f64, f64)]) -> Polyline<f64> {
    let ll: Vec<(f64, f64)> = coords.iter().map(|&(n, e)| (km(n), km(e))).collect();
    Polyline::from_lat_lon(&ll).unwrap()
}

fn feature(id: &str, geometries: Vec<Polyline<f64>>) -> Feature<f64> {
    Feature::new(id, FeatureKind::SubductionZone, geometries).unwrap()
}

fn threshold() -> f64 {
    Proximity::earth().threshold()
}

fn ids(collection: &FeatureCollection<f64>) -> Vec<&str> {
    collection.ids().map(FeatureId::as_str).collect()
}

/// Measures in kilometres instead of radians.
struct Kilometres;

impl GeometryAdapter<f64> for Kilometres {
    fn arc_length(&self, geometry: &Polyline<f64>) -> f64 {
        geometry.arc_length() * EARTH_MEAN_RADIUS_KM
    }

    fn point_distance(&self, point: SpherePoint<f64>, geometry: &Polyline<f64>) -> f64 {
        geometry.distance_to_point(point) * EARTH_MEAN_RADIUS_KM
    }

    fn geometry_distance(&self, a: &Polyline<f64>, b: &Polyline<f64>) -> f64 {
        a.distance_to(b) * EARTH_MEAN_RADIUS_KM
    }
}

#[test]
fn identical_polylines_keep_one() {
    let coords: Vec<(f64, f64)> = (0..10).map(|i| (0.0, i as f64 * 15.0)).collect();
    let a = path(&coords);
    let b = path(&coords);
    assert_eq!(classify(&Spherical, &a, &b, threshold()), Some(Adjacency::Duplicate));

    let features = [feature("first", vec![a]), feature("second", vec![b])];
    let ranked = rank_by_length(&Spherical, &features);
    let blacklist = build_blacklist(&Spherical, &ranked, threshold());
    assert_eq!(blacklist.into_ids(), vec![FeatureId::new("second")]);
}

#[test]
fn contained_polyline_is_removed() {
    let a = path(&[(0.0, 0.0), (0.0, 25.0), (0.0, 50.0), (0.0, 75.0), (0.0, 100.0)]);
    let b = path(&[(10.0, 30.0), (10.0, 50.0), (10.0, 70.0)]);
    assert!((a.arc_length() * EARTH_MEAN_RADIUS_KM - 100.0).abs() < 1e-6);
    assert!((b.arc_length() * EARTH_MEAN_RADIUS_KM - 40.0).abs() < 1e-3);

    assert_eq!(classify(&Spherical, &b, &a, threshold()), Some(Adjacency::Subset));
    assert_eq!(classify(&Spherical, &a, &b, threshold()), Some(Adjacency::Superset));

    let anomalous =
        FeatureCollection::from_features([feature("b", vec![b]), feature("a", vec![a])]).unwrap();
    let (kept, blacklist) = filter_anomalous(&Spherical, &anomalous, anomalous.clone(), threshold());
    assert_eq!(ids(&kept), ["a"]);
    assert!(blacklist.contains(&FeatureId::new("b")));
}

#[test]
fn contained_polyline_in_kilometres() {
    let a = path(&[(0.0, 0.0), (0.0, 25.0), (0.0, 50.0), (0.0, 75.0), (0.0, 100.0)]);
    let b = path(&[(10.0, 30.0), (10.0, 50.0), (10.0, 70.0)]);
    let max_km = Proximity::<f64>::earth().max_distance_km();

    assert_eq!(classify(&Kilometres, &b, &a, max_km), Some(Adjacency::Subset));
    assert_eq!(classify(&Kilometres, &a, &b, max_km), Some(Adjacency::Superset));
    assert_eq!(classify(&Kilometres, &b, &a, 5.0), None);
}

#[test]
fn distant_polylines_are_kept() {
    let lines = [
        path(&[(0.0, 0.0), (0.0, 40.0), (0.0, 80.0)]),
        path(&[(60.0, 0.0), (60.0, 40.0), (60.0, 80.0)]),
        path(&[(120.0, 0.0), (120.0, 40.0), (120.0, 80.0)]),
    ];
    for a in &lines {
        for b in &lines {
            if a != b {
                assert_eq!(classify(&Spherical, a, b, threshold()), None);
            }
        }
    }

    let anomalous = FeatureCollection::from_features(
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| feature(&format!("f{i}"), vec![line.clone()])),
    )
    .unwrap();
    let (kept, blacklist) = filter_anomalous(&Spherical, &anomalous, anomalous.clone(), threshold());
    assert!(blacklist.is_empty());
    assert_eq!(kept, anomalous);
}

#[test]
fn matching_strands_are_duplicates() {
    let west = path(&[(0.0, 0.0), (0.0, 20.0), (0.0, 40.0)]);
    let east = path(&[(0.0, 300.0), (0.0, 330.0), (0.0, 360.0), (0.0, 390.0)]);
    let split = feature("split", vec![west.clone(), east.clone()]);
    let reference = feature("reference", vec![west.clone(), east]);

    assert_eq!(
        classify_features(&Spherical, &split, &reference, threshold()),
        Some(Adjacency::Duplicate)
    );
    // A single strand on its own is not a duplicate of the whole.
    let west_only = feature("west", vec![west]);
    assert_ne!(
        classify_features(&Spherical, &west_only, &reference, threshold()),
        Some(Adjacency::Duplicate)
    );

    let anomalous = FeatureCollection::from_features([reference, split]).unwrap();
    let (kept, blacklist) = filter_anomalous(&Spherical, &anomalous, anomalous.clone(), threshold());
    assert_eq!(ids(&kept), ["reference"]);
    assert_eq!(blacklist.len(), 1);
}

#[test]
fn blacklist_applies_to_a_separate_target() {
    let long = path(&[(0.0, 0.0), (0.0, 25.0), (0.0, 50.0), (0.0, 75.0), (0.0, 100.0)]);
    let piece = path(&[(3.0, 20.0), (3.0, 40.0), (3.0, 60.0)]);
    let other = path(&[(500.0, 0.0), (500.0, 50.0)]);

    let anomalous = FeatureCollection::from_features([
        feature("long", vec![long.clone()]),
        feature("piece", vec![piece.clone()]),
    ])
    .unwrap();
    let target = FeatureCollection::from_features([
        feature("other", vec![other]),
        feature("piece", vec![piece]),
        feature("long", vec![long]),
    ])
    .unwrap();

    let (kept, _) = filter_anomalous(&Spherical, &anomalous, target, threshold());
    assert_eq!(ids(&kept), ["other", "long"]);
}
