//! Minor great-circle arcs.

use super::{angular_eps, SpherePoint, Vec3};
use num_traits::Float;

/// The shorter great-circle arc between two points on the unit sphere.
///
/// Arcs of a polyline always connect non-antipodal vertices, so the minor
/// arc is well defined. Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreatCircleArc<F> {
    pub start: SpherePoint<F>,
    pub end: SpherePoint<F>,
}

impl<F: Float> GreatCircleArc<F> {
    /// Creates a new arc from two points.
    #[inline]
    pub fn new(start: SpherePoint<F>, end: SpherePoint<F>) -> Self {
        Self { start, end }
    }

    /// Returns the arc length in radians.
    #[inline]
    pub fn length(self) -> F {
        self.start.angle_to(self.end)
    }

    /// Returns the unit normal of the arc's great circle (`start × end`).
    ///
    /// Returns `None` for degenerate arcs whose endpoints coincide.
    #[inline]
    pub fn normal(self) -> Option<Vec3<F>> {
        self.start.as_vec().cross(self.end.as_vec()).normalize()
    }

    /// Returns the arc with start and end swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Whether a direction lying on this arc's great circle falls between its endpoints.
    #[inline]
    fn spans(self, normal: Vec3<F>, v: Vec3<F>, eps: F) -> bool {
        self.start.as_vec().cross(v).dot(normal) >= -eps
            && v.cross(self.end.as_vec()).dot(normal) >= -eps
    }

    /// Computes the point of the arc closest to `p`.
    ///
    /// `p` is projected onto the arc's great circle; when the projection
    /// falls outside the arc the nearer endpoint is returned.
    pub fn closest_point(self, p: SpherePoint<F>) -> SpherePoint<F> {
        let Some(normal) = self.normal() else {
            return self.start;
        };

        let v = p.as_vec();
        let projected = v - normal * v.dot(normal);
        if let Some(q) = SpherePoint::from_vec(projected) {
            if self.spans(normal, q.as_vec(), F::zero()) {
                return q;
            }
        }

        if p.angle_to(self.start) <= p.angle_to(self.end) {
            self.start
        } else {
            self.end
        }
    }

    /// Computes the angular distance from a point to this arc, in radians.
    #[inline]
    pub fn distance_to_point(self, p: SpherePoint<F>) -> F {
        p.angle_to(self.closest_point(p))
    }

    /// Returns `true` if the two arcs cross or touch away from a shared great circle.
    ///
    /// Arcs on the same great circle report `false`; their overlap is picked
    /// up by the endpoint distances in [`distance_to_arc`](Self::distance_to_arc).
    pub fn intersects(self, other: Self) -> bool {
        let (Some(n1), Some(n2)) = (self.normal(), other.normal()) else {
            return false;
        };
        let Some(d) = n1.cross(n2).normalize() else {
            return false;
        };

        let eps = angular_eps();
        [d, -d]
            .into_iter()
            .any(|c| self.spans(n1, c, eps) && other.spans(n2, c, eps))
    }

    /// Computes the minimum angular distance between two arcs, in radians.
    ///
    /// Zero when the arcs cross; otherwise the minimum is attained at an
    /// endpoint of one of them.
    pub fn distance_to_arc(self, other: Self) -> F {
        if self.intersects(other) {
            return F::zero();
        }

        self.distance_to_point(other.start)
            .min(self.distance_to_point(other.end))
            .min(other.distance_to_point(self.start))
            .min(other.distance_to_point(self.end))
    }
}

impl<F: Float> From<(SpherePoint<F>, SpherePoint<F>)> for GreatCircleArc<F> {
    fn from((start, end): (SpherePoint<F>, SpherePoint<F>)) -> Self {
        Self::new(start, end)
    }
}
