//! Weighted activity choice.
//!
//! Bars draw the young harder than everyone else and the beach is popular
//! with all age groups:
//!
//! | Location kind | Weight                                   |
//! |---------------|------------------------------------------|
//! | `Bar`         | `bar_young` if young, else `bar_other`   |
//! | `Beach`       | `beach`                                  |
//! | anything else | `other`                                  |

use isle_agent::AgeGroup;
use isle_core::{ActivityWeights, LocationKind, RandomSource};
use isle_world::Location;

pub fn activity_weight(kind: LocationKind, age: AgeGroup, weights: &ActivityWeights) -> u32 {
    match kind {
        LocationKind::Bar if age == AgeGroup::Young => weights.bar_young,
        LocationKind::Bar => weights.bar_other,
        LocationKind::Beach => weights.beach,
        _ => weights.other,
    }
}

/// Pick one location by weight.  `None` if every weight is zero or the
/// island is empty.
pub fn choose_activity<'a>(
    locations: &'a [Location],
    age:       AgeGroup,
    weights:   &ActivityWeights,
    rng:       &dyn RandomSource,
) -> Option<&'a Location> {
    let w: Vec<u32> = locations.iter().map(|l| activity_weight(l.kind, age, weights)).collect();
    rng.weighted_index(&w).map(|i| &locations[i])
}
