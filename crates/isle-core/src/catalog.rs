//! Closed vocabularies: location categories, incidents, death causes and
//! ambient events.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! labelled_enum {
    ($(#[$attr:meta])* $vis:vis enum $name:ident { $($(#[$vattr:meta])* $variant:ident => $label:literal,)+ }) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        $vis enum $name {
            $($(#[$vattr])* $variant,)+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Stable snake_case label, used in log fields and CSV columns.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum! {
    /// What kind of attraction a location is.  Drives activity weighting.
    pub enum LocationKind {
        Restaurant => "restaurant",
        Bar        => "bar",
        Shopping   => "shopping",
        Hiking     => "hiking",
        Snorkeling => "snorkeling",
        Beach      => "beach",
        Other      => "other",
    }
}

labelled_enum! {
    /// A non-fatal extra delay rolled after a stay.
    pub enum IncidentKind {
        /// Over-long meal at a restaurant.
        Intoxicated  => "intoxicated",
        /// Got drunk at a bar.  Marks the passenger as inebriated for the
        /// rest of the day.
        Drunk        => "drunk",
        /// Stuck at a pop-up stall on the shopping street.
        PopupDelay   => "popup_delay",
        /// Lost the trail while hiking.
        LostHiking   => "lost_hiking",
        /// Struggled swimming back while snorkeling.
        SnorkelDelay => "snorkel_delay",
        /// Fell asleep on the beach.
        FellAsleep   => "fell_asleep",
    }
}

labelled_enum! {
    /// Cause of a fatal event.
    pub enum DeathCause {
        /// Fell off a cliff on the hiking excursion.
        Cliff => "cliff",
        /// Shark attack while snorkeling.
        Shark => "shark",
    }
}

labelled_enum! {
    /// Island-wide ambient events.  Announced only; they never alter
    /// capacities, probabilities or timings.
    pub enum AmbientKind {
        Rainstorm          => "rainstorm",
        TransportBreakdown => "transport_breakdown",
        Festival           => "festival",
    }
}

impl IncidentKind {
    /// `true` for the incident that leaves the passenger inebriated, which
    /// enables the drunk reaction delay on the return trip.
    #[inline]
    pub fn inebriates(self) -> bool {
        matches!(self, IncidentKind::Drunk)
    }

    /// Position in [`IncidentKind::ALL`], for array-backed counters.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }
}

impl DeathCause {
    /// Position in [`DeathCause::ALL`], for array-backed counters.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }
}
