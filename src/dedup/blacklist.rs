//! Blacklist of features to remove, and the builder that fills it.

use std::collections::HashSet;

use log::{debug, trace};
use num_traits::Float;

use super::classify::classify_features;
use super::Adjacency;
use crate::feature::{Feature, FeatureId};
use crate::geometry::GeometryAdapter;

/// A set of feature identifiers marked for removal.
///
/// Iteration follows insertion order, which is the order in which the
/// builder condemned the features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    ids: HashSet<FeatureId>,
    order: Vec<FeatureId>,
}

impl Blacklist {
    /// Creates an empty blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier. Returns `false` if it was already listed.
    pub fn insert(&mut self, id: FeatureId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.insert(id.clone());
        self.order.push(id);
        true
    }

    #[inline]
    pub fn contains(&self, id: &FeatureId) -> bool {
        self.ids.contains(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over the identifiers in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FeatureId> {
        self.order.iter()
    }

    /// Consumes the blacklist, returning the identifiers in insertion order.
    pub fn into_ids(self) -> Vec<FeatureId> {
        self.order
    }
}

impl FromIterator<FeatureId> for Blacklist {
    fn from_iter<I: IntoIterator<Item = FeatureId>>(iter: I) -> Self {
        let mut blacklist = Self::new();
        for id in iter {
            blacklist.insert(id);
        }
        blacklist
    }
}

impl<'a> IntoIterator for &'a Blacklist {
    type Item = &'a FeatureId;
    type IntoIter = std::slice::Iter<'a, FeatureId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Builds the blacklist for features ranked by descending length.
///
/// Each feature that is not yet blacklisted is compared against every other
/// feature that is not yet blacklisted, in ranked order:
///
/// - `Superset` or `Duplicate`: the observed feature is blacklisted.
/// - `Subset`: the feature itself is blacklisted and its comparisons stop.
///
/// Decisions depend on the blacklist state left by earlier comparisons, so
/// the result depends on the ranking. Features are identified by position in
/// `ranked` during the run and by [`FeatureId`] in the result.
///
/// # Complexity
///
/// O(n²) feature classifications.
///
/// # Example
///
/// ```
/// use boundary_dedup::{build_blacklist, rank_by_length, Feature, FeatureKind, Polyline, Proximity, Spherical};
///
/// let line = Polyline::from_lat_lon(&[(0.0_f64, 0.0), (0.0, 0.1), (0.0, 0.2)]).unwrap();
/// let features = [
///     Feature::new("a", FeatureKind::Transform, vec![line.clone()]).unwrap(),
///     Feature::new("b", FeatureKind::Transform, vec![line]).unwrap(),
/// ];
///
/// let ranked = rank_by_length(&Spherical, &features);
/// let blacklist = build_blacklist(&Spherical, &ranked, Proximity::earth().threshold());
/// assert_eq!(blacklist.len(), 1);
/// assert!(blacklist.contains(&"b".into()));
/// ```
pub fn build_blacklist<F, A>(adapter: &A, ranked: &[&Feature<F>], threshold: F) -> Blacklist
where
    F: Float,
    A: GeometryAdapter<F> + ?Sized,
{
    let blacklist = resolve_with(ranked, |i, j| {
        classify_features(adapter, ranked[i], ranked[j], threshold)
    });
    debug!(
        "blacklisted {} of {} ranked features",
        blacklist.len(),
        ranked.len()
    );
    blacklist
}

/// Runs the blacklisting state machine with classifications from `classify(i, j)`.
pub(crate) fn resolve_with<F, C>(ranked: &[&Feature<F>], mut classify: C) -> Blacklist
where
    F: Float,
    C: FnMut(usize, usize) -> Option<Adjacency>,
{
    let mut blacklist = Blacklist::new();

    for (i, feature) in ranked.iter().enumerate() {
        if blacklist.contains(feature.id()) {
            continue;
        }

        for (j, observed) in ranked.iter().enumerate() {
            if i == j || blacklist.contains(observed.id()) {
                continue;
            }

            match classify(i, j) {
                Some(adjacency @ (Adjacency::Superset | Adjacency::Duplicate)) => {
                    trace!(
                        "{} is {} of {}, blacklisting {}",
                        feature.id(),
                        adjacency,
                        observed.id(),
                        observed.id()
                    );
                    blacklist.insert(observed.id().clone());
                }
                Some(Adjacency::Subset) => {
                    trace!(
                        "{} is subset of {}, blacklisting {}",
                        feature.id(),
                        observed.id(),
                        feature.id()
                    );
                    blacklist.insert(feature.id().clone());
                    break;
                }
                None => {}
            }
        }
    }

    blacklist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Proximity, EARTH_MEAN_RADIUS_KM};
    use crate::dedup::rank_by_length;
    use crate::feature::FeatureKind;
    use crate::geometry::{Polyline, Spherical};

    fn km(d: f64) -> f64 {
        (d / EARTH_MEAN_RADIUS_KM).to_degrees()
    }

    /// Feature along a parallel `north_km` north of the equator, between two eastings.
    fn feature(id: &str, north_km: f64, east_km: &[f64]) -> Feature<f64> {
        let coords: Vec<(f64, f64)> = east_km.iter().map(|&e| (km(north_km), km(e))).collect();
        let line = Polyline::from_lat_lon(&coords).unwrap();
        Feature::new(id, FeatureKind::SubductionZone, vec![line]).unwrap()
    }

    fn build(features: &[Feature<f64>]) -> Blacklist {
        let ranked = rank_by_length(&Spherical, features);
        build_blacklist(&Spherical, &ranked, Proximity::earth().threshold())
    }

    fn ids(blacklist: &Blacklist) -> Vec<&str> {
        blacklist.iter().map(FeatureId::as_str).collect()
    }

    #[test]
    fn test_blacklist_set_semantics() {
        let mut blacklist = Blacklist::new();
        assert!(blacklist.insert("a".into()));
        assert!(blacklist.insert("b".into()));
        assert!(!blacklist.insert("a".into()));
        assert_eq!(blacklist.len(), 2);
        assert_eq!(ids(&blacklist), ["a", "b"]);

        let collected: Blacklist = ["x", "y", "x"].into_iter().map(FeatureId::from).collect();
        assert_eq!(collected.into_ids(), vec![FeatureId::new("x"), FeatureId::new("y")]);
    }

    #[test]
    fn test_duplicate_pair_keeps_first_ranked() {
        let eastings: Vec<f64> = (0..10).map(|i| i as f64 * 20.0).collect();
        let features = [feature("first", 0.0, &eastings), feature("second", 0.0, &eastings)];
        assert_eq!(ids(&build(&features)), ["second"]);
    }

    #[test]
    fn test_subset_is_removed() {
        let features = [
            feature("inner", 5.0, &[30.0, 50.0, 70.0]),
            feature("outer", 0.0, &[0.0, 25.0, 50.0, 75.0, 100.0]),
        ];
        assert_eq!(ids(&build(&features)), ["inner"]);
    }

    #[test]
    fn test_subset_seen_from_feature_side() {
        // Shorter feature ranked first: the Subset branch condemns it.
        let outer = feature("outer", 0.0, &[0.0, 25.0, 50.0, 75.0, 100.0]);
        let inner = feature("inner", 5.0, &[30.0, 50.0, 70.0]);
        let ranked = [&inner, &outer];
        let blacklist = build_blacklist(&Spherical, &ranked, Proximity::earth().threshold());
        assert_eq!(ids(&blacklist), ["inner"]);
    }

    #[test]
    fn test_unrelated_features_are_kept() {
        let features = [
            feature("a", 0.0, &[0.0, 50.0, 100.0]),
            feature("b", 60.0, &[0.0, 50.0, 100.0]),
            feature("c", 120.0, &[0.0, 50.0, 100.0]),
        ];
        assert!(build(&features).is_empty());
    }

    #[test]
    fn test_chain_of_overlaps() {
        // Each shorter piece lies along the longest one.
        let features = [
            feature("mid", 2.0, &[20.0, 40.0, 60.0, 80.0]),
            feature("long", 0.0, &[0.0, 25.0, 50.0, 75.0, 100.0]),
            feature("short", 4.0, &[30.0, 45.0, 60.0]),
        ];
        let blacklist = build(&features);
        assert_eq!(ids(&blacklist), ["mid", "short"]);
    }

    #[test]
    fn test_condemned_feature_is_not_revisited() {
        let calls = std::cell::Cell::new(0);
        let a = feature("a", 0.0, &[0.0, 10.0]);
        let b = feature("b", 0.0, &[0.0, 10.0]);
        let c = feature("c", 0.0, &[0.0, 10.0]);
        let ranked = [&a, &b, &c];

        let blacklist = resolve_with(&ranked, |i, _| {
            calls.set(calls.get() + 1);
            // Everything after the first feature is a subset of something.
            if i == 0 {
                None
            } else {
                Some(Adjacency::Subset)
            }
        });

        assert_eq!(ids(&blacklist), ["b", "c"]);
        // a: 2 comparisons, b: 1 before break, c: 1 before break.
        assert_eq!(calls.get(), 4);
    }
}
