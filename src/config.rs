//! Proximity configuration.
//!
//! Two geometries, or a vertex and a geometry, are "near" when they are
//! within a fixed search distance of each other. The distance is configured
//! in kilometres on a sphere of a given radius and handed to the classifiers
//! as a central angle.
//!
//! # Example
//!
//! ```
//! use boundary_dedup::Proximity;
//!
//! let earth = Proximity::<f64>::earth();
//! assert_eq!(earth.max_distance_km(), 50.0);
//!
//! // A 20 km search radius on Mars.
//! let mars = Proximity::new(3389.5_f64, 20.0).unwrap();
//! assert!((mars.threshold() - 20.0 / 3389.5).abs() < 1e-15);
//! ```

use crate::error::{DedupError, Result};
use crate::primitives::cast;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean radius of the Earth in kilometres.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.009;

/// Default search distance in kilometres.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Search distance on a sphere of a given radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawProximity<F>",
        bound(deserialize = "F: Float + Deserialize<'de>")
    )
)]
pub struct Proximity<F> {
    radius_km: F,
    max_distance_km: F,
}

impl<F: Float> Proximity<F> {
    /// Creates a configuration from a planetary radius and a search distance.
    ///
    /// # Errors
    ///
    /// Returns [`DedupError::InvalidProximity`] if either value is not a
    /// positive finite number.
    pub fn new(radius_km: F, max_distance_km: F) -> Result<Self> {
        check_positive(radius_km, "radius must be positive and finite")?;
        check_positive(max_distance_km, "search distance must be positive and finite")?;
        Ok(Self {
            radius_km,
            max_distance_km,
        })
    }

    /// 50 km on a sphere of the Earth's mean radius.
    pub fn earth() -> Self {
        Self {
            radius_km: cast(EARTH_MEAN_RADIUS_KM),
            max_distance_km: cast(DEFAULT_MAX_DISTANCE_KM),
        }
    }

    /// Replaces the planetary radius.
    ///
    /// # Errors
    ///
    /// Returns [`DedupError::InvalidProximity`] for a non-positive or non-finite radius.
    pub fn with_radius_km(self, radius_km: F) -> Result<Self> {
        Self::new(radius_km, self.max_distance_km)
    }

    /// Replaces the search distance.
    ///
    /// # Errors
    ///
    /// Returns [`DedupError::InvalidProximity`] for a non-positive or non-finite distance.
    pub fn with_max_distance_km(self, max_distance_km: F) -> Result<Self> {
        Self::new(self.radius_km, max_distance_km)
    }

    /// Planetary radius in kilometres.
    #[inline]
    pub fn radius_km(&self) -> F {
        self.radius_km
    }

    /// Search distance in kilometres.
    #[inline]
    pub fn max_distance_km(&self) -> F {
        self.max_distance_km
    }

    /// The search distance as a central angle in radians.
    #[inline]
    pub fn threshold(&self) -> F {
        self.to_angle(self.max_distance_km)
    }

    /// Converts a surface distance in kilometres to a central angle.
    #[inline]
    pub fn to_angle(&self, km: F) -> F {
        km / self.radius_km
    }

    /// Converts a central angle to a surface distance in kilometres.
    #[inline]
    pub fn to_km(&self, angle: F) -> F {
        angle * self.radius_km
    }
}

impl<F: Float> Default for Proximity<F> {
    fn default() -> Self {
        Self::earth()
    }
}

/// Unvalidated form read by serde before [`Proximity::new`] checks it.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawProximity<F> {
    radius_km: F,
    max_distance_km: F,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<RawProximity<F>> for Proximity<F> {
    type Error = DedupError;

    fn try_from(raw: RawProximity<F>) -> Result<Self> {
        Self::new(raw.radius_km, raw.max_distance_km)
    }
}

fn check_positive<F: Float>(value: F, reason: &'static str) -> Result<()> {
    if value.is_finite() && value > F::zero() {
        Ok(())
    } else {
        Err(DedupError::InvalidProximity(reason))
    }
}
