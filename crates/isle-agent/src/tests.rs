//! Unit tests for isle-agent.

use isle_core::{SharedRng, ShipId};

use crate::{AgeGroup, Gender, PassengerProfile, RosterBuilder};

#[cfg(test)]
mod profile_tests {
    use isle_core::PassengerId;

    use super::*;

    #[test]
    fn strength_within_bounds() {
        let rng = SharedRng::seeded(1);
        for i in 0..2_000 {
            let p = PassengerProfile::random(PassengerId(i), ShipId(1), &rng);
            assert!(
                (PassengerProfile::MIN_STRENGTH..=PassengerProfile::MAX_STRENGTH).contains(&p.strength),
                "strength {}",
                p.strength
            );
        }
    }

    #[test]
    fn every_group_and_gender_drawn() {
        let rng = SharedRng::seeded(2);
        let roster = RosterBuilder::new(ShipId(1), 300).build(&rng);
        for group in AgeGroup::ALL {
            assert!(roster.iter().any(|p| p.age_group == group), "missing {group}");
        }
        for gender in Gender::ALL {
            assert!(roster.iter().any(|p| p.gender == gender), "missing {gender}");
        }
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn ids_are_strided_by_ship() {
        let rng = SharedRng::seeded(0);
        let roster = RosterBuilder::new(ShipId(4), 3).build(&rng);
        let ids: Vec<u32> = roster.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [4000, 4001, 4002]);
        assert!(roster.iter().all(|p| p.ship == ShipId(4)));
    }

    #[test]
    fn empty_roster() {
        let rng = SharedRng::seeded(0);
        assert!(RosterBuilder::new(ShipId(1), 0).build(&rng).is_empty());
    }
}
