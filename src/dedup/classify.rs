//! Proximity-based overlap classification.
//!
//! Two polylines overlap when they come within the proximity threshold of
//! each other and more than two vertices of the shorter one lie within the
//! threshold of the longer one. Touching at a single junction vertex is not
//! an overlap.

use super::Adjacency;
use crate::feature::Feature;
use crate::geometry::{GeometryAdapter, Polyline};
use num_traits::Float;

/// Classifies how `feature` relates to `observed`.
///
/// # Algorithm
///
/// 1. If the minimum distance between the polylines exceeds `threshold`,
///    they are unrelated and no vertex is examined.
/// 2. The vertices of the shorter polyline are matched against the longer
///    one; a vertex matches when it is strictly closer than `threshold`.
/// 3. More than two matches make the shorter polyline a subset of the longer.
///    Otherwise, if every vertex of both is matched, they are duplicates.
///
/// When the arc lengths are equal neither is a subset, and duplicates must
/// match in both directions, so `Duplicate` is symmetric in its operands.
///
/// # Arguments
///
/// * `adapter` - Source of arc lengths and distances
/// * `feature` - The candidate polyline
/// * `observed` - The reference polyline
/// * `threshold` - Proximity threshold, in the adapter's distance unit
///
/// # Example
///
/// ```
/// use boundary_dedup::{classify, Adjacency, Polyline, Proximity, Spherical};
///
/// let long = Polyline::from_lat_lon(&[(0.0_f64, 0.0), (0.0, 0.2), (0.0, 0.4), (0.0, 0.6), (0.0, 0.8)]).unwrap();
/// let short = Polyline::from_lat_lon(&[(0.05_f64, 0.2), (0.05, 0.3), (0.05, 0.4)]).unwrap();
/// let threshold = Proximity::earth().threshold();
///
/// assert_eq!(classify(&Spherical, &short, &long, threshold), Some(Adjacency::Subset));
/// assert_eq!(classify(&Spherical, &long, &short, threshold), Some(Adjacency::Superset));
/// ```
pub fn classify<F, A>(
    adapter: &A,
    feature: &Polyline<F>,
    observed: &Polyline<F>,
    threshold: F,
) -> Option<Adjacency>
where
    F: Float,
    A: GeometryAdapter<F> + ?Sized,
{
    if adapter.geometry_distance(feature, observed) > threshold {
        return None;
    }

    let feature_len = adapter.arc_length(feature);
    let observed_len = adapter.arc_length(observed);

    if feature_len == observed_len {
        let duplicate = feature.len() == observed.len()
            && vertex_matches(adapter, observed, feature, threshold) == observed.len()
            && vertex_matches(adapter, feature, observed, threshold) == feature.len();
        return duplicate.then_some(Adjacency::Duplicate);
    }

    let (shorter, longer) = if feature_len < observed_len {
        (feature, observed)
    } else {
        (observed, feature)
    };
    let matches = vertex_matches(adapter, shorter, longer, threshold);

    if matches > 2 {
        if observed_len > feature_len {
            Some(Adjacency::Subset)
        } else {
            Some(Adjacency::Superset)
        }
    } else if matches == feature.len() && matches == observed.len() {
        Some(Adjacency::Duplicate)
    } else {
        None
    }
}

/// Classifies features made of several strands.
///
/// Strand lists of equal length whose strands are pairwise duplicates, in
/// order, are duplicates. Reordered strands do not qualify.
///
/// Otherwise the first strand pair found to overlap decides the result from
/// the total lengths: the longer side is the superset. Equal totals without
/// a positional duplicate are unrelated.
pub fn classify_multi<F, A>(
    adapter: &A,
    feature: &[Polyline<F>],
    observed: &[Polyline<F>],
    threshold: F,
) -> Option<Adjacency>
where
    F: Float,
    A: GeometryAdapter<F> + ?Sized,
{
    if !feature.is_empty()
        && feature.len() == observed.len()
        && feature
            .iter()
            .zip(observed)
            .all(|(f, o)| classify(adapter, f, o, threshold) == Some(Adjacency::Duplicate))
    {
        return Some(Adjacency::Duplicate);
    }

    let feature_total = total_length(adapter, feature);
    let observed_total = total_length(adapter, observed);
    if feature_total == observed_total {
        return None;
    }

    let overlapping = feature.iter().any(|f| {
        observed
            .iter()
            .any(|o| classify(adapter, f, o, threshold).is_some())
    });

    if !overlapping {
        None
    } else if feature_total > observed_total {
        Some(Adjacency::Superset)
    } else {
        Some(Adjacency::Subset)
    }
}

/// Classifies two features, choosing the single or multi-strand comparison.
pub fn classify_features<F, A>(
    adapter: &A,
    feature: &Feature<F>,
    observed: &Feature<F>,
    threshold: F,
) -> Option<Adjacency>
where
    F: Float,
    A: GeometryAdapter<F> + ?Sized,
{
    match (feature.geometries(), observed.geometries()) {
        ([f], [o]) => classify(adapter, f, o, threshold),
        (f, o) => classify_multi(adapter, f, o, threshold),
    }
}

/// Sum of the arc lengths of several strands.
pub(crate) fn total_length<F, A>(adapter: &A, geometries: &[Polyline<F>]) -> F
where
    F: Float,
    A: GeometryAdapter<F> + ?Sized,
{
    geometries
        .iter()
        .fold(F::zero(), |acc, g| acc + adapter.arc_length(g))
}

/// Counts vertices of `walked` strictly within `threshold` of `target`.
fn vertex_matches<F, A>(adapter: &A, walked: &Polyline<F>, target: &Polyline<F>, threshold: F) -> usize
where
    F: Float,
    A: GeometryAdapter<F> + ?Sized,
{
    walked
        .points()
        .iter()
        .filter(|&&p| adapter.point_distance(p, target) < threshold)
        .count()
}
