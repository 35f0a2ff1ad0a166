//! Length ranking of features.

use std::cmp::Ordering;

use super::classify::total_length;
use crate::feature::Feature;
use crate::geometry::GeometryAdapter;
use num_traits::Float;

/// Orders features by descending total arc length.
///
/// The sort is stable, so features of equal length keep their input order.
/// Lengths that cannot be compared (NaN from a custom adapter) are treated
/// as equal.
///
/// # Complexity
///
/// O(n log n) comparisons; each feature's length is computed once.
pub fn rank_by_length<'a, F, A>(adapter: &A, features: &'a [Feature<F>]) -> Vec<&'a Feature<F>>
where
    F: Float,
    A: GeometryAdapter<F> + ?Sized,
{
    let mut keyed: Vec<(F, &Feature<F>)> = features
        .iter()
        .map(|f| (total_length(adapter, f.geometries()), f))
        .collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, f)| f).collect()
}
