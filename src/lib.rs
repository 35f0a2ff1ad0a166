//! boundary-dedup - Duplicate removal for resolved plate boundary sections
//!
//! Topology resolution can emit the same boundary section more than once, or
//! emit a piece of a section alongside the whole. This library classifies how
//! polylines on a sphere overlap and removes the redundant features, keeping
//! the longest representative of each overlap.
//!
//! # Example
//!
//! ```
//! use boundary_dedup::{filter_anomalous, Feature, FeatureCollection, FeatureKind, Polyline, Proximity, Spherical};
//!
//! let coords = [(-20.0_f64, -70.0), (-20.1, -70.1), (-20.2, -70.2), (-20.3, -70.3)];
//! let line = Polyline::from_lat_lon(&coords).unwrap();
//!
//! let anomalous = FeatureCollection::from_features([
//!     Feature::new("sz-1", FeatureKind::SubductionZone, vec![line.clone()]).unwrap(),
//!     Feature::new("sz-2", FeatureKind::SubductionZone, vec![line]).unwrap(),
//! ])
//! .unwrap();
//!
//! let (kept, removed) = filter_anomalous(&Spherical, &anomalous, anomalous.clone(), Proximity::earth().threshold());
//! assert_eq!(kept.len(), 1);
//! assert_eq!(removed.len(), 1);
//! ```

pub mod config;
pub mod dedup;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod primitives;
pub mod sections;

pub use config::Proximity;
pub use dedup::{
    apply_blacklist, build_blacklist, classify, classify_features, classify_multi,
    filter_anomalous, find_duplicates, rank_by_length, resolve_blacklist, Adjacency,
    AdjacencyMatrix, Blacklist,
};
pub use error::{DedupError, Result};
pub use feature::{Feature, FeatureCollection, FeatureId, FeatureKind, Polarity};
pub use geometry::{GeometryAdapter, Polyline, Spherical};
pub use primitives::{GreatCircleArc, SpherePoint, Vec3};
