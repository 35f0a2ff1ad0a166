//! Boundary features and identifier-keyed feature collections.
//!
//! A [`Feature`] is one resolved boundary section: a stable identifier,
//! classification metadata, and one or more polylines (a boundary can be
//! split into disjoint strands). Features are compared by identifier only;
//! two features with identical geometry are still distinct.

use std::collections::HashSet;
use std::fmt;

use crate::error::{DedupError, Result};
use crate::geometry::Polyline;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier of a feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct FeatureId(String);

impl FeatureId {
    /// Creates an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FeatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of plate boundary a feature belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeatureKind {
    SubductionZone,
    MidOceanRidge,
    Transform,
    /// Any other boundary type, by name.
    Other(String),
}

impl FeatureKind {
    /// Returns `true` for subduction zones.
    #[inline]
    pub fn is_subduction(&self) -> bool {
        matches!(self, Self::SubductionZone)
    }
}

/// Side of a subduction zone on which the subducting plate dips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    Left,
    Right,
}

/// A boundary section with one or more geometries.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<F> {
    id: FeatureId,
    kind: FeatureKind,
    polarity: Option<Polarity>,
    geometries: Vec<Polyline<F>>,
}

impl<F: Float> Feature<F> {
    /// Creates a feature.
    ///
    /// # Errors
    ///
    /// Returns [`DedupError::EmptyFeature`] if `geometries` is empty.
    pub fn new(
        id: impl Into<FeatureId>,
        kind: FeatureKind,
        geometries: Vec<Polyline<F>>,
    ) -> Result<Self> {
        let id = id.into();
        if geometries.is_empty() {
            return Err(DedupError::EmptyFeature(id));
        }
        Ok(Self {
            id,
            kind,
            polarity: None,
            geometries,
        })
    }

    /// Sets the subduction polarity.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    #[inline]
    pub fn id(&self) -> &FeatureId {
        &self.id
    }

    #[inline]
    pub fn kind(&self) -> &FeatureKind {
        &self.kind
    }

    #[inline]
    pub fn polarity(&self) -> Option<Polarity> {
        self.polarity
    }

    /// Returns the geometries in their original strand order.
    #[inline]
    pub fn geometries(&self) -> &[Polyline<F>] {
        &self.geometries
    }

    /// Returns `true` if the feature is split into several strands.
    #[inline]
    pub fn is_multi(&self) -> bool {
        self.geometries.len() > 1
    }

    /// Sum of the arc lengths of all geometries, in radians.
    pub fn total_length(&self) -> F {
        self.geometries
            .iter()
            .fold(F::zero(), |acc, g| acc + g.arc_length())
    }
}

/// A set of features keyed by identifier.
///
/// Insertion order is preserved for iteration. Identifiers are unique, so
/// removing by identifier is never ambiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection<F> {
    features: Vec<Feature<F>>,
    ids: HashSet<FeatureId>,
}

impl<F: Float> FeatureCollection<F> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// Builds a collection from features.
    ///
    /// # Errors
    ///
    /// Returns [`DedupError::DuplicateFeatureId`] if two features share an identifier.
    pub fn from_features(features: impl IntoIterator<Item = Feature<F>>) -> Result<Self> {
        let mut collection = Self::new();
        for feature in features {
            collection.insert(feature)?;
        }
        Ok(collection)
    }

    /// Adds a feature.
    ///
    /// # Errors
    ///
    /// Returns [`DedupError::DuplicateFeatureId`] if a feature with the same
    /// identifier is already present; the collection is left unchanged.
    pub fn insert(&mut self, feature: Feature<F>) -> Result<()> {
        if !self.ids.insert(feature.id().clone()) {
            return Err(DedupError::DuplicateFeatureId(feature.id));
        }
        self.features.push(feature);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: &FeatureId) -> bool {
        self.ids.contains(id)
    }

    pub fn get(&self, id: &FeatureId) -> Option<&Feature<F>> {
        if !self.contains(id) {
            return None;
        }
        self.features.iter().find(|f| f.id() == id)
    }

    /// Returns the features in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Feature<F>] {
        &self.features
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature<F>> {
        self.features.iter()
    }

    /// Iterates over the identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &FeatureId> + '_ {
        self.features.iter().map(Feature::id)
    }

    /// Removes every feature whose identifier satisfies `remove`.
    ///
    /// Returns the number of features removed.
    pub fn remove_where(&mut self, mut remove: impl FnMut(&FeatureId) -> bool) -> usize {
        let before = self.features.len();
        let ids = &mut self.ids;
        self.features.retain(|f| {
            if remove(f.id()) {
                ids.remove(f.id());
                false
            } else {
                true
            }
        });
        before - self.features.len()
    }

    /// Consumes the collection, returning the features in insertion order.
    pub fn into_vec(self) -> Vec<Feature<F>> {
        self.features
    }
}

impl<F: Float> Default for FeatureCollection<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, F: Float> IntoIterator for &'a FeatureCollection<F> {
    type Item = &'a Feature<F>;
    type IntoIter = std::slice::Iter<'a, Feature<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

impl<F: Float> IntoIterator for FeatureCollection<F> {
    type Item = Feature<F>;
    type IntoIter = std::vec::IntoIter<Feature<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}
