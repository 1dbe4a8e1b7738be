//! Named campus locations.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// An opaque location identifier: the location's name.
///
/// Backed by `Arc<str>` so cloning a location into a path is a refcount bump.
/// Ordering is plain byte-wise string ordering, which the path finder relies
/// on for its deterministic tie-break.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Location(Arc<str>);

impl Location {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if the name is empty or whitespace only.  A blank location
    /// counts as "not selected" for queries and as unusable in segments.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Location {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Location {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
