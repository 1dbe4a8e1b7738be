//! Strongly typed integer identifiers.
//!
//! `VertexId` and `EdgeId` index the dense arrays of a built graph;
//! `SegmentId` carries the `id` column of a persisted route record through
//! to the engine for diagnostics.  All are `Copy + Ord + Hash`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Dense index of a location inside one built graph.
    ///
    /// Only meaningful for the graph that issued it.  Vertex ids follow the
    /// lexicographic order of location names.
    pub struct VertexId(u32);
}

typed_id! {
    /// Index of a directed adjacency entry inside one built graph.
    pub struct EdgeId(u32);
}

typed_id! {
    /// Identifier of a persisted route record (the `id` column).
    pub struct SegmentId(u64);
}
