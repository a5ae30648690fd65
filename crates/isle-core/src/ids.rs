//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
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
    /// A passenger's identity.  Assigned as `ship * 1000 + roster index`.
    pub struct PassengerId(u32) => "P";
}

typed_id! {
    /// A cruise ship, numbered from 1 within a day.
    pub struct ShipId(u16) => "S";
}

typed_id! {
    /// Index of a location in the island's fixed location list.
    pub struct LocationId(u16) => "L";
}

impl PassengerId {
    /// Roster stride between consecutive ships' passenger ids.
    pub const SHIP_STRIDE: u32 = 1_000;

    /// Id of the `index`-th passenger disembarking from `ship`.
    #[inline]
    pub fn for_roster(ship: ShipId, index: u32) -> Self {
        PassengerId(ship.0 as u32 * Self::SHIP_STRIDE + index)
    }
}
