//! # Encounter Generation
//!
//! Random wild encounters rolled against a tile's spawn table.

use crate::game::{SpawnTable, Species};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A wild creature that is about to be battled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub species: Species,
    pub level: u32,
}

/// Rolls for an encounter on a tile.
///
/// Draws from `0..100` and succeeds below the spawn rate. On success a
/// species is picked uniformly among the table's candidates and a level
/// uniformly within `min_level..=max_level`.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tallgrass::{roll_encounter, SpawnTable, Species};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let always = SpawnTable::new(100, [Some(Species::Zubat), None, None], 3, 3);
/// let encounter = roll_encounter(&always, &mut rng).unwrap();
/// assert_eq!(encounter.species, Species::Zubat);
/// assert_eq!(encounter.level, 3);
///
/// assert!(roll_encounter(&SpawnTable::NONE, &mut rng).is_none());
/// ```
pub fn roll_encounter<R: Rng + ?Sized>(spawn: &SpawnTable, rng: &mut R) -> Option<Encounter> {
    if spawn.spawn_rate == 0 {
        return None;
    }

    let roll: u8 = rng.gen_range(0..100);
    log::debug!("Encounter roll {} against rate {}", roll, spawn.spawn_rate);
    if roll >= spawn.spawn_rate {
        return None;
    }

    let candidate_count = spawn.candidates.iter().flatten().count();
    if candidate_count == 0 {
        return None;
    }
    let pick = rng.gen_range(0..candidate_count);
    let species = spawn.candidates.iter().flatten().nth(pick).copied()?;
    // Tables loaded from JSON skip `SpawnTable::new`, so the bounds may be reversed.
    let (low, high) = if spawn.min_level <= spawn.max_level {
        (spawn.min_level, spawn.max_level)
    } else {
        (spawn.max_level, spawn.min_level)
    };
    let level = rng.gen_range(low..=high);

    Some(Encounter { species, level })
}
