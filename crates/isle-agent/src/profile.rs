//! Passenger demographics.

use std::fmt;

use isle_core::{PassengerId, RandomSource, ShipId};
use serde::Serialize;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Young,
    Adult,
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Young, AgeGroup::Adult, AgeGroup::Senior];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Young  => "young",
            AgeGroup::Adult  => "adult",
            AgeGroup::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male   => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and fixed attributes of one passenger.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct PassengerProfile {
    pub id:        PassengerId,
    pub ship:      ShipId,
    pub age_group: AgeGroup,
    pub gender:    Gender,
    /// Combat strength in [`Self::MIN_STRENGTH`, `Self::MAX_STRENGTH`].
    pub strength:  u32,
}

impl PassengerProfile {
    pub const MIN_STRENGTH: u32 = 30;
    pub const MAX_STRENGTH: u32 = 100;

    /// Draw demographics uniformly: age group, gender, and an integer
    /// strength in `30..=100`.
    pub fn random(id: PassengerId, ship: ShipId, rng: &dyn RandomSource) -> Self {
        let age_group = AgeGroup::ALL[rng.index(AgeGroup::ALL.len()).unwrap_or(0)];
        let gender = Gender::ALL[rng.index(Gender::ALL.len()).unwrap_or(0)];
        let strength = rng.int_inclusive(Self::MIN_STRENGTH, Self::MAX_STRENGTH);
        Self { id, ship, age_group, gender, strength }
    }
}
