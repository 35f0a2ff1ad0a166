//! Overlap relationship between two geometries.

use std::fmt;

/// How a candidate ("feature") relates to a reference ("observed").
///
/// Classifiers return `Option<Adjacency>`; `None` means the two are
/// unrelated, including when they only touch at a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// Every vertex of both geometries is matched.
    Duplicate,
    /// The feature is the shorter piece overlapping the observed geometry.
    Subset,
    /// The feature is the longer piece overlapping the observed geometry.
    Superset,
}

impl Adjacency {
    /// The relationship seen from the other operand.
    ///
    /// ```
    /// use boundary_dedup::Adjacency;
    ///
    /// assert_eq!(Adjacency::Subset.inverse(), Adjacency::Superset);
    /// assert_eq!(Adjacency::Duplicate.inverse(), Adjacency::Duplicate);
    /// ```
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Self::Duplicate => Self::Duplicate,
            Self::Subset => Self::Superset,
            Self::Superset => Self::Subset,
        }
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Duplicate => "duplicate",
            Self::Subset => "subset",
            Self::Superset => "superset",
        };
        f.write_str(name)
    }
}
