//! Measurement interface used by the classifiers.

use super::Polyline;
use crate::primitives::SpherePoint;
use num_traits::Float;

/// Supplies the spherical measurements the classifiers depend on.
///
/// All values are angles in radians on the unit sphere, or any other unit
/// used consistently together with the proximity threshold.
pub trait GeometryAdapter<F: Float> {
    /// Total arc length of a polyline.
    fn arc_length(&self, geometry: &Polyline<F>) -> F;

    /// Minimum distance from a point to a polyline.
    fn point_distance(&self, point: SpherePoint<F>, geometry: &Polyline<F>) -> F;

    /// Minimum distance between two polylines.
    fn geometry_distance(&self, a: &Polyline<F>, b: &Polyline<F>) -> F;
}

/// Exact great-circle measurements on the unit sphere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spherical;

impl<F: Float> GeometryAdapter<F> for Spherical {
    #[inline]
    fn arc_length(&self, geometry: &Polyline<F>) -> F {
        geometry.arc_length()
    }

    #[inline]
    fn point_distance(&self, point: SpherePoint<F>, geometry: &Polyline<F>) -> F {
        geometry.distance_to_point(point)
    }

    #[inline]
    fn geometry_distance(&self, a: &Polyline<F>, b: &Polyline<F>) -> F {
        a.distance_to(b)
    }
}

impl<F: Float, A: GeometryAdapter<F> + ?Sized> GeometryAdapter<F> for &A {
    #[inline]
    fn arc_length(&self, geometry: &Polyline<F>) -> F {
        (**self).arc_length(geometry)
    }

    #[inline]
    fn point_distance(&self, point: SpherePoint<F>, geometry: &Polyline<F>) -> F {
        (**self).point_distance(point, geometry)
    }

    #[inline]
    fn geometry_distance(&self, a: &Polyline<F>, b: &Polyline<F>) -> F {
        (**self).geometry_distance(a, b)
    }
}
