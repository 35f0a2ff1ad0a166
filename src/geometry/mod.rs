//! Polyline geometry and the adapter the classifiers measure it through.
//!
//! The duplicate classifiers never compute distances themselves. They ask a
//! [`GeometryAdapter`] for arc lengths and minimum distances, which lets
//! callers plug in another geometry engine or instrument the calls.

mod adapter;
mod polyline;

pub use adapter::{GeometryAdapter, Spherical};
pub use polyline::Polyline;
