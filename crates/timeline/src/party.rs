//! Party composition: combatants and their pets.

use serde::Deserialize;

use crate::job::Job;

/// A pet owned by a party member. Damage from pets is credited to the
/// owner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pet {
    /// Log id of the pet.
    pub id: u64,
    /// Pet name.
    pub name: String,
}

/// A party member in the encounter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Combatant {
    /// Log id of the combatant.
    pub id: u64,
    /// Character name.
    pub name: String,
    /// Job short code.
    pub job: Job,
    /// Pets whose damage is credited to this combatant.
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl Combatant {
    /// Returns whether this combatant is the source of an event,
    /// directly or through one of its pets.
    pub fn owns(&self, source_id: u64) -> bool {
        self.id == source_id || self.pets.iter().any(|p| p.id == source_id)
    }
}
