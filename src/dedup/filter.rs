//! Applying blacklists to feature collections.

use log::debug;
use num_traits::Float;

use super::blacklist::{build_blacklist, Blacklist};
use super::rank::rank_by_length;
use crate::feature::FeatureCollection;
use crate::geometry::GeometryAdapter;

/// Removes every feature whose identifier is blacklisted.
///
/// Removal is by identifier only; geometry is never compared. Applying the
/// same blacklist again leaves the collection unchanged.
///
/// # Example
///
/// ```
/// use boundary_dedup::{apply_blacklist, Blacklist, Feature, FeatureCollection, FeatureId, FeatureKind, Polyline};
///
/// let line = Polyline::from_lat_lon(&[(0.0_f64, 0.0), (0.0, 1.0)]).unwrap();
/// let target = FeatureCollection::from_features([
///     Feature::new("keep", FeatureKind::Transform, vec![line.clone()]).unwrap(),
///     Feature::new("drop", FeatureKind::Transform, vec![line]).unwrap(),
/// ])
/// .unwrap();
///
/// let blacklist: Blacklist = [FeatureId::new("drop")].into_iter().collect();
/// let filtered = apply_blacklist(&blacklist, target);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(apply_blacklist(&blacklist, filtered.clone()), filtered);
/// ```
pub fn apply_blacklist<F: Float>(
    blacklist: &Blacklist,
    mut target: FeatureCollection<F>,
) -> FeatureCollection<F> {
    if blacklist.is_empty() {
        return target;
    }
    let removed = target.remove_where(|id| blacklist.contains(id));
    debug!(
        "removed {} of {} blacklisted features, {} remain",
        removed,
        blacklist.len(),
        target.len()
    );
    target
}

/// Ranks the anomalous candidates and builds their blacklist.
pub fn find_duplicates<F, A>(
    adapter: &A,
    anomalous: &FeatureCollection<F>,
    threshold: F,
) -> Blacklist
where
    F: Float,
    A: GeometryAdapter<F> + ?Sized,
{
    let ranked = rank_by_length(adapter, anomalous.as_slice());
    debug!("ranked {} anomalous candidates", ranked.len());
    build_blacklist(adapter, &ranked, threshold)
}

/// Blacklists duplicates among `anomalous` and removes them from `target`.
///
/// Returns the filtered target together with the blacklist, which may name
/// features absent from `target`.
pub fn filter_anomalous<F, A>(
    adapter: &A,
    anomalous: &FeatureCollection<F>,
    target: FeatureCollection<F>,
    threshold: F,
) -> (FeatureCollection<F>, Blacklist)
where
    F: Float,
    A: GeometryAdapter<F> + ?Sized,
{
    let blacklist = find_duplicates(adapter, anomalous, threshold);
    let filtered = apply_blacklist(&blacklist, target);
    (filtered, blacklist)
}
