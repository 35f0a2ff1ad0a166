//! Precomputed pairwise classifications.
//!
//! Classifying a pair does not depend on the blacklist, so the O(n²)
//! classifications can be computed up front, in parallel with the
//! `parallel` feature, and the blacklist resolved afterwards in one
//! sequential pass.
//!
//! # Example
//!
//! ```
//! use boundary_dedup::{build_blacklist, rank_by_length, resolve_blacklist, AdjacencyMatrix};
//! use boundary_dedup::{Feature, FeatureKind, Polyline, Proximity, Spherical};
//!
//! let a = Polyline::from_lat_lon(&[(0.0_f64, 0.0), (0.0, 0.3), (0.0, 0.6), (0.0, 0.9)]).unwrap();
//! let b = Polyline::from_lat_lon(&[(0.05_f64, 0.2), (0.05, 0.3), (0.05, 0.4)]).unwrap();
//! let features = [
//!     Feature::new("b", FeatureKind::MidOceanRidge, vec![b]).unwrap(),
//!     Feature::new("a", FeatureKind::MidOceanRidge, vec![a]).unwrap(),
//! ];
//! let threshold = Proximity::earth().threshold();
//!
//! let ranked = rank_by_length(&Spherical, &features);
//! let matrix = AdjacencyMatrix::compute(&Spherical, &ranked, threshold);
//! assert_eq!(resolve_blacklist(&ranked, &matrix), build_blacklist(&Spherical, &ranked, threshold));
//! ```

use log::debug;
use num_traits::Float;

use super::blacklist::{resolve_with, Blacklist};
use super::classify::classify_features;
use super::Adjacency;
use crate::feature::Feature;
use crate::geometry::GeometryAdapter;

/// Classifications of every ordered pair of `n` features.
///
/// Only the upper triangle is classified and stored. The lower triangle is
/// its [`Adjacency::inverse`], since classification gives consistent answers
/// for both operand orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    upper: Vec<Option<Adjacency>>,
}

impl AdjacencyMatrix {
    /// Classifies every pair of `features`.
    ///
    /// # Complexity
    ///
    /// n(n-1)/2 feature classifications.
    pub fn compute<F, A>(adapter: &A, features: &[&Feature<F>], threshold: F) -> Self
    where
        F: Float,
        A: GeometryAdapter<F> + ?Sized,
    {
        let n = features.len();
        let upper = upper_pairs(n)
            .map(|(i, j)| classify_features(adapter, features[i], features[j], threshold))
            .collect();
        Self::from_upper(n, upper)
    }

    /// Parallel version of [`AdjacencyMatrix::compute`].
    ///
    /// Produces the same matrix.
    #[cfg(feature = "parallel")]
    pub fn par_compute<F, A>(adapter: &A, features: &[&Feature<F>], threshold: F) -> Self
    where
        F: Float + Send + Sync,
        A: GeometryAdapter<F> + Sync + ?Sized,
    {
        use rayon::prelude::*;

        let n = features.len();
        let pairs: Vec<(usize, usize)> = upper_pairs(n).collect();
        let upper = pairs
            .into_par_iter()
            .map(|(i, j)| classify_features(adapter, features[i], features[j], threshold))
            .collect();
        Self::from_upper(n, upper)
    }

    fn from_upper(n: usize, upper: Vec<Option<Adjacency>>) -> Self {
        let related = upper.iter().filter(|a| a.is_some()).count();
        debug!("classified {} pairs of {} features, {} related", upper.len(), n, related);
        Self { n, upper }
    }

    /// Number of features.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Classification of feature `i` against observed feature `j`.
    ///
    /// Returns `None` on the diagonal and for out of range indices.
    pub fn get(&self, i: usize, j: usize) -> Option<Adjacency> {
        if i >= self.n || j >= self.n || i == j {
            return None;
        }
        if i < j {
            self.upper[self.index(i, j)]
        } else {
            self.upper[self.index(j, i)].map(Adjacency::inverse)
        }
    }

    /// Position of `(i, j)`, `i < j`, in the row-major packed upper triangle.
    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * (2 * self.n - i - 1) / 2 + (j - i - 1)
    }
}

fn upper_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Resolves the blacklist from precomputed classifications.
///
/// `matrix` must have been computed over `ranked`, in the same order. The
/// result equals [`build_blacklist`](super::build_blacklist) on the same input.
pub fn resolve_blacklist<F: Float>(ranked: &[&Feature<F>], matrix: &AdjacencyMatrix) -> Blacklist {
    debug_assert_eq!(ranked.len(), matrix.len());
    let blacklist = resolve_with(ranked, |i, j| matrix.get(i, j));
    debug!(
        "resolved {} blacklisted of {} ranked features",
        blacklist.len(),
        ranked.len()
    );
    blacklist
}
