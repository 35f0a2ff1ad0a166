//! Points on the unit sphere.

use super::Vec3;
use num_traits::Float;

/// A location on the unit sphere, stored as a unit vector.
///
/// Latitude and longitude are expressed in degrees. The Cartesian frame has
/// `z` through the north pole and `x` through (0°N, 0°E).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePoint<F> {
    v: Vec3<F>,
}

impl<F: Float> SpherePoint<F> {
    /// Creates a point from geographic coordinates in degrees.
    ///
    /// The coordinates are not range checked here; `Polyline::from_lat_lon`
    /// validates them before construction.
    #[inline]
    pub fn from_lat_lon(lat: F, lon: F) -> Self {
        let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = lon.to_radians().sin_cos();
        Self {
            v: Vec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
        }
    }

    /// Creates a point from any non-zero Cartesian vector.
    ///
    /// Returns `None` if the vector cannot be normalized.
    #[inline]
    pub fn from_vec(v: Vec3<F>) -> Option<Self> {
        v.normalize().map(|v| Self { v })
    }

    /// Returns the unit vector of this point.
    #[inline]
    pub fn as_vec(self) -> Vec3<F> {
        self.v
    }

    /// Latitude in degrees.
    #[inline]
    pub fn lat(self) -> F {
        let horizontal = (self.v.x * self.v.x + self.v.y * self.v.y).sqrt();
        self.v.z.atan2(horizontal).to_degrees()
    }

    /// Longitude in degrees, in (-180, 180].
    #[inline]
    pub fn lon(self) -> F {
        self.v.y.atan2(self.v.x).to_degrees()
    }

    /// Central angle to another point, in radians.
    ///
    /// Uses `atan2(|a × b|, a · b)`, which stays accurate for nearly
    /// coincident and nearly antipodal points alike.
    #[inline]
    pub fn angle_to(self, other: Self) -> F {
        let cross = self.v.cross(other.v).magnitude();
        cross.atan2(self.v.dot(other.v))
    }

    /// Returns the antipodal point.
    #[inline]
    pub fn antipode(self) -> Self {
        Self { v: -self.v }
    }

    /// Returns `true` if `other` lies within `eps` radians of this point's antipode.
    #[inline]
    pub fn is_antipodal_to(self, other: Self, eps: F) -> bool {
        self.antipode().angle_to(other) <= eps
    }
}

/// Angular tolerance below which two directions are treated as identical.
#[inline]
pub(crate) fn angular_eps<F: Float>() -> F {
    F::epsilon().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_lat_lon_round_trip() {
        let p: SpherePoint<f64> = SpherePoint::from_lat_lon(-33.9, 151.2);
        assert_relative_eq!(p.lat(), -33.9, epsilon = 1e-10);
        assert_relative_eq!(p.lon(), 151.2, epsilon = 1e-10);
        assert_relative_eq!(p.as_vec().magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_poles() {
        let north: SpherePoint<f64> = SpherePoint::from_lat_lon(90.0, 0.0);
        assert_relative_eq!(north.as_vec().z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(north.lat(), 90.0, epsilon = 1e-10);
    }

    #[test]
    fn test_angle_to() {
        let a: SpherePoint<f64> = SpherePoint::from_lat_lon(0.0, 0.0);
        let b = SpherePoint::from_lat_lon(0.0, 90.0);
        let north = SpherePoint::from_lat_lon(90.0, 45.0);
        assert_relative_eq!(a.angle_to(b), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(a.angle_to(north), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(a.angle_to(a.antipode()), PI, epsilon = 1e-12);
        assert_eq!(a.angle_to(a), 0.0);
    }

    #[test]
    fn test_small_angle_precision() {
        // One metre on the Earth is ~1.57e-7 rad; acos-based formulas lose this.
        let a: SpherePoint<f64> = SpherePoint::from_lat_lon(10.0, 20.0);
        let b = SpherePoint::from_lat_lon(10.0 + 1e-5, 20.0);
        assert_relative_eq!(a.angle_to(b), 1e-5_f64.to_radians(), max_relative = 1e-6);
    }

    #[test]
    fn test_antipodal() {
        let a: SpherePoint<f64> = SpherePoint::from_lat_lon(45.0, 10.0);
        let b = SpherePoint::from_lat_lon(-45.0, -170.0);
        assert!(a.is_antipodal_to(b, 1e-9));
        assert!(!a.is_antipodal_to(a, 1e-9));
    }

    #[test]
    fn test_from_vec() {
        let p = SpherePoint::from_vec(Vec3::new(0.0_f64, 0.0, 5.0)).unwrap();
        assert_relative_eq!(p.lat(), 90.0, epsilon = 1e-10);
        assert!(SpherePoint::from_vec(Vec3::<f64>::zero()).is_none());
    }

    #[test]
    fn test_f32() {
        let a: SpherePoint<f32> = SpherePoint::from_lat_lon(0.0, 0.0);
        let b = SpherePoint::from_lat_lon(0.0, 1.0);
        assert!((a.angle_to(b) - 1.0_f32.to_radians()).abs() < 1e-6);
    }
}
