//! Validated polylines on the unit sphere.

use crate::error::{DedupError, Result};
use crate::primitives::{angular_eps, cast, GreatCircleArc, SpherePoint};
use num_traits::Float;

/// An ordered sequence of points joined by minor great-circle arcs.
///
/// Construction validates the input, so every `Polyline` has at least two
/// vertices, a finite non-zero arc length and no antipodal consecutive
/// vertices. The arc length is computed once and cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<F> {
    points: Vec<SpherePoint<F>>,
    length: F,
}

impl<F: Float> Polyline<F> {
    /// Creates a polyline from points on the sphere.
    ///
    /// # Errors
    ///
    /// - [`DedupError::TooFewPoints`] with fewer than two points
    /// - [`DedupError::InvalidCoordinate`] if a point is not a finite unit vector
    /// - [`DedupError::AntipodalVertices`] if consecutive points are antipodal
    /// - [`DedupError::ZeroLength`] if all points coincide
    pub fn new(points: Vec<SpherePoint<F>>) -> Result<Self> {
        if points.len() < 2 {
            return Err(DedupError::TooFewPoints {
                points: points.len(),
            });
        }

        let tolerance: F = cast(1e-3);
        for (index, p) in points.iter().enumerate() {
            let v = p.as_vec();
            if !v.is_finite() || (v.magnitude() - F::one()).abs() > tolerance {
                return Err(DedupError::InvalidCoordinate { index });
            }
        }

        let eps = angular_eps();
        let mut length = F::zero();
        for (index, pair) in points.windows(2).enumerate() {
            if pair[0].is_antipodal_to(pair[1], eps) {
                return Err(DedupError::AntipodalVertices { index });
            }
            length = length + pair[0].angle_to(pair[1]);
        }

        if length <= F::zero() {
            return Err(DedupError::ZeroLength);
        }

        Ok(Self { points, length })
    }

    /// Creates a polyline from `(lat, lon)` pairs in degrees.
    ///
    /// # Errors
    ///
    /// Same as [`Polyline::new`]; a latitude outside [-90, 90] or a
    /// non-finite coordinate yields [`DedupError::InvalidCoordinate`].
    ///
    /// # Example
    ///
    /// ```
    /// use boundary_dedup::Polyline;
    ///
    /// let trench = Polyline::from_lat_lon(&[(-10.0_f64, 110.0), (-8.0, 115.0), (-7.5, 120.0)]).unwrap();
    /// assert_eq!(trench.len(), 3);
    /// assert!(Polyline::from_lat_lon(&[(0.0_f64, 0.0)]).is_err());
    /// ```
    pub fn from_lat_lon(coords: &[(F, F)]) -> Result<Self> {
        let ninety: F = cast(90.0);
        let points = coords
            .iter()
            .enumerate()
            .map(|(index, &(lat, lon))| {
                if lat.is_finite() && lon.is_finite() && lat.abs() <= ninety {
                    Ok(SpherePoint::from_lat_lon(lat, lon))
                } else {
                    Err(DedupError::InvalidCoordinate { index })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }

    /// Returns the vertices in order.
    #[inline]
    pub fn points(&self) -> &[SpherePoint<F>] {
        &self.points
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the total arc length in radians.
    #[inline]
    pub fn arc_length(&self) -> F {
        self.length
    }

    /// Iterates over the arcs between consecutive vertices.
    pub fn arcs(&self) -> impl Iterator<Item = GreatCircleArc<F>> + '_ {
        self.points
            .windows(2)
            .map(|pair| GreatCircleArc::new(pair[0], pair[1]))
    }

    /// Returns a copy with the vertex order reversed.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self {
            points,
            length: self.length,
        }
    }

    /// Minimum angular distance from a point to this polyline, in radians.
    pub fn distance_to_point(&self, p: SpherePoint<F>) -> F {
        self.arcs()
            .map(|arc| arc.distance_to_point(p))
            .fold(F::infinity(), F::min)
    }

    /// Minimum angular distance between two polylines, in radians.
    ///
    /// Returns zero as soon as two arcs are found to cross.
    pub fn distance_to(&self, other: &Self) -> F {
        let mut min_dist = F::infinity();
        for a in self.arcs() {
            for b in other.arcs() {
                let dist = a.distance_to_arc(b);
                if dist <= F::zero() {
                    return F::zero();
                }
                min_dist = min_dist.min(dist);
            }
        }
        min_dist
    }
}
