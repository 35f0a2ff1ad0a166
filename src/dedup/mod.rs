//! Detection and removal of duplicated boundary features.
//!
//! A run takes a collection of anomalous candidates, ranks them by total
//! arc length, blacklists the ones that duplicate or are contained in
//! another candidate, and removes the blacklisted identifiers from a target
//! collection.
//!
//! - [`classify`], [`classify_multi`], [`classify_features`]: pairwise relationship
//! - [`rank_by_length`]: longest first
//! - [`build_blacklist`]: sequential blacklisting over the ranked list
//! - [`AdjacencyMatrix`], [`resolve_blacklist`]: classify first, resolve afterwards
//! - [`apply_blacklist`], [`filter_anomalous`]: removal by identifier
//!
//! # Example
//!
//! ```
//! use boundary_dedup::{filter_anomalous, Feature, FeatureCollection, FeatureKind, Polyline, Proximity, Spherical};
//!
//! let ridge = Polyline::from_lat_lon(&[(10.0_f64, 20.0), (10.2, 20.3), (10.4, 20.6), (10.6, 20.9)]).unwrap();
//! let piece = Polyline::from_lat_lon(&[(10.2_f64, 20.3), (10.3, 20.45), (10.4, 20.6)]).unwrap();
//!
//! let anomalous = FeatureCollection::from_features([
//!     Feature::new("ridge", FeatureKind::MidOceanRidge, vec![ridge]).unwrap(),
//!     Feature::new("piece", FeatureKind::MidOceanRidge, vec![piece]).unwrap(),
//! ])
//! .unwrap();
//! let target = anomalous.clone();
//!
//! let (kept, blacklist) = filter_anomalous(&Spherical, &anomalous, target, Proximity::earth().threshold());
//! assert_eq!(blacklist.len(), 1);
//! assert_eq!(kept.len(), 1);
//! assert!(kept.contains(&"ridge".into()));
//! ```

mod adjacency;
mod blacklist;
mod classify;
mod filter;
mod matrix;
mod rank;

pub use adjacency::Adjacency;
pub use blacklist::{build_blacklist, Blacklist};
pub use classify::{classify, classify_features, classify_multi};
pub use filter::{apply_blacklist, filter_anomalous, find_duplicates};
pub use matrix::{resolve_blacklist, AdjacencyMatrix};
pub use rank::rank_by_length;
