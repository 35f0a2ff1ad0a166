//! Sorting resolved boundary sections into output collections.
//!
//! A topology resolver emits shared boundary sections, each made of
//! sub-segments shared by one or more resolved topologies. A well-formed
//! sub-segment separates exactly two topologies; any other count marks it
//! as an anomalous duplicate candidate.
//!
//! # Example
//!
//! ```
//! use boundary_dedup::sections::{partition_sections, BoundarySection, SharedSubSegment};
//! use boundary_dedup::{Feature, FeatureKind, Polarity, Polyline, Proximity, Spherical};
//!
//! let trench = Polyline::from_lat_lon(&[(-5.0_f64, 100.0), (-6.0, 102.0)]).unwrap();
//! let sz = Feature::new("sz", FeatureKind::SubductionZone, vec![trench]).unwrap();
//!
//! let sections = vec![BoundarySection::new(
//!     FeatureKind::SubductionZone,
//!     Some(Polarity::Left),
//!     vec![SharedSubSegment::new(sz, 2)],
//! )];
//!
//! let partitioned = partition_sections(sections).unwrap();
//! assert_eq!(partitioned.subduction_left.len(), 1);
//! assert!(partitioned.anomalous_subduction.is_empty());
//!
//! let cleaned = partitioned.remove_anomalous(&Spherical, Proximity::earth().threshold());
//! assert_eq!(cleaned.subduction.len(), 1);
//! ```

use log::debug;
use num_traits::Float;

use crate::dedup::{apply_blacklist, find_duplicates, Blacklist};
use crate::error::Result;
use crate::feature::{Feature, FeatureCollection, FeatureKind, Polarity};
use crate::geometry::GeometryAdapter;

/// Number of topologies a well-formed sub-segment is shared by.
pub const EXPECTED_SHARING_TOPOLOGIES: usize = 2;

/// A resolved sub-segment of a boundary section.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedSubSegment<F> {
    pub feature: Feature<F>,
    /// Number of resolved topologies sharing this sub-segment.
    pub sharing_topologies: usize,
}

impl<F: Float> SharedSubSegment<F> {
    pub fn new(feature: Feature<F>, sharing_topologies: usize) -> Self {
        Self {
            feature,
            sharing_topologies,
        }
    }

    /// Returns `true` unless exactly two topologies share the sub-segment.
    #[inline]
    pub fn is_anomalous(&self) -> bool {
        self.sharing_topologies != EXPECTED_SHARING_TOPOLOGIES
    }
}

/// A shared boundary section and its sub-segments.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySection<F> {
    pub kind: FeatureKind,
    /// Subduction polarity of the section, if recorded.
    pub polarity: Option<Polarity>,
    pub sub_segments: Vec<SharedSubSegment<F>>,
}

impl<F: Float> BoundarySection<F> {
    pub fn new(
        kind: FeatureKind,
        polarity: Option<Polarity>,
        sub_segments: Vec<SharedSubSegment<F>>,
    ) -> Self {
        Self {
            kind,
            polarity,
            sub_segments,
        }
    }
}

/// Sub-segment features sorted by boundary type.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedSections<F> {
    pub subduction: FeatureCollection<F>,
    pub subduction_left: FeatureCollection<F>,
    pub subduction_right: FeatureCollection<F>,
    pub ridge_transform: FeatureCollection<F>,
    pub anomalous_subduction: FeatureCollection<F>,
    pub anomalous_ridge_transform: FeatureCollection<F>,
}

impl<F: Float> Default for PartitionedSections<F> {
    fn default() -> Self {
        Self {
            subduction: FeatureCollection::new(),
            subduction_left: FeatureCollection::new(),
            subduction_right: FeatureCollection::new(),
            ridge_transform: FeatureCollection::new(),
            anomalous_subduction: FeatureCollection::new(),
            anomalous_ridge_transform: FeatureCollection::new(),
        }
    }
}

/// Output collections with anomalous duplicates removed.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedSections<F> {
    pub subduction: FeatureCollection<F>,
    pub subduction_left: FeatureCollection<F>,
    pub subduction_right: FeatureCollection<F>,
    pub ridge_transform: FeatureCollection<F>,
    /// Anomalous subduction candidates, unchanged.
    pub anomalous_subduction: FeatureCollection<F>,
    /// Anomalous ridge and transform candidates, unchanged.
    pub anomalous_ridge_transform: FeatureCollection<F>,
    pub subduction_blacklist: Blacklist,
    pub ridge_transform_blacklist: Blacklist,
}

/// Sorts the sub-segments of every section into output collections.
///
/// Sub-segments of subduction zones go to `subduction` and, by the section's
/// polarity, to `subduction_left` or `subduction_right`. All others go to
/// `ridge_transform`. Anomalous sub-segments are also collected by the same
/// subduction / non-subduction split.
///
/// # Errors
///
/// Returns [`DedupError::DuplicateFeatureId`](crate::DedupError::DuplicateFeatureId)
/// if two sub-segments would land in the same collection with one identifier.
pub fn partition_sections<F: Float>(
    sections: impl IntoIterator<Item = BoundarySection<F>>,
) -> Result<PartitionedSections<F>> {
    let mut out = PartitionedSections::default();

    for section in sections {
        let subduction = section.kind.is_subduction();

        for sub_segment in section.sub_segments {
            if sub_segment.is_anomalous() {
                let anomalous = if subduction {
                    &mut out.anomalous_subduction
                } else {
                    &mut out.anomalous_ridge_transform
                };
                anomalous.insert(sub_segment.feature.clone())?;
            }

            if subduction {
                match section.polarity {
                    Some(Polarity::Left) => out.subduction_left.insert(sub_segment.feature.clone())?,
                    Some(Polarity::Right) => out.subduction_right.insert(sub_segment.feature.clone())?,
                    None => {}
                }
                out.subduction.insert(sub_segment.feature)?;
            } else {
                out.ridge_transform.insert(sub_segment.feature)?;
            }
        }
    }

    debug!(
        "partitioned {} subduction ({} left, {} right) and {} ridge/transform sub-segments; {} + {} anomalous",
        out.subduction.len(),
        out.subduction_left.len(),
        out.subduction_right.len(),
        out.ridge_transform.len(),
        out.anomalous_subduction.len(),
        out.anomalous_ridge_transform.len()
    );
    Ok(out)
}

impl<F: Float> PartitionedSections<F> {
    /// Removes anomalous duplicates from the output collections.
    ///
    /// One blacklist is built from `anomalous_subduction` and applied to the
    /// three subduction collections; another is built from
    /// `anomalous_ridge_transform` and applied to `ridge_transform`.
    pub fn remove_anomalous<A>(self, adapter: &A, threshold: F) -> CleanedSections<F>
    where
        A: GeometryAdapter<F> + ?Sized,
    {
        let subduction_blacklist = find_duplicates(adapter, &self.anomalous_subduction, threshold);
        let ridge_transform_blacklist =
            find_duplicates(adapter, &self.anomalous_ridge_transform, threshold);

        CleanedSections {
            subduction: apply_blacklist(&subduction_blacklist, self.subduction),
            subduction_left: apply_blacklist(&subduction_blacklist, self.subduction_left),
            subduction_right: apply_blacklist(&subduction_blacklist, self.subduction_right),
            ridge_transform: apply_blacklist(&ridge_transform_blacklist, self.ridge_transform),
            anomalous_subduction: self.anomalous_subduction,
            anomalous_ridge_transform: self.anomalous_ridge_transform,
            subduction_blacklist,
            ridge_transform_blacklist,
        }
    }
}
