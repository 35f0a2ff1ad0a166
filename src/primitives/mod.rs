//! Spherical geometric primitives.

mod arc;
mod sphere_point;
mod vec3;

pub use arc::GreatCircleArc;
pub use sphere_point::SpherePoint;
pub use vec3::Vec3;

pub(crate) use sphere_point::angular_eps;

use num_traits::Float;

/// Converts an `f64` constant into `F`.
///
/// Every `Float` this crate is used with represents these constants; the
/// NaN fallback only exists to keep the conversion total.
#[inline]
pub(crate) fn cast<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}
