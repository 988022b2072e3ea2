//! Strongly typed wrappers for OSM element identifiers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`: these
//! are external OSM identifiers, not array indices, and callers routinely
//! need the raw value for reporting.

use std::fmt;

/// Generate a typed ID wrapper around an OSM element id.
macro_rules! osm_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub i64);

        impl $name {
            /// The raw OSM id.
            #[inline(always)]
            pub fn raw(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<i64> for $name {
            #[inline(always)]
            fn from(raw: i64) -> Self {
                $name(raw)
            }
        }
    };
}

osm_id! {
    /// Identifier of an OSM node.  `i64` per OSM convention (negative ids
    /// appear in local edits and test fixtures).
    pub struct NodeId;
}

osm_id! {
    /// Identifier of an OSM way.
    pub struct WayId;
}
