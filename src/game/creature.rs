//! # Creature Model
//!
//! Species data, the shared move catalog, stat derivation and damage.
//!
//! Everything here is plain data plus pure functions. Species and moves are
//! looked up in compiled-in tables; a creature's move set holds copies of
//! catalog entries so nothing a battle does can touch the catalog itself.

use crate::config::MAX_MOVES;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of known species.
pub const SPECIES_COUNT: usize = 5;

/// Number of entries in the move catalog.
pub const MOVE_COUNT: usize = 15;

/// Every species that can appear in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Bulbasaur,
    Charmander,
    Squirtle,
    Pidgey,
    Zubat,
}

impl Species {
    /// All species in table order.
    pub const ALL: [Species; SPECIES_COUNT] = [
        Species::Bulbasaur,
        Species::Charmander,
        Species::Squirtle,
        Species::Pidgey,
        Species::Zubat,
    ];

    /// Looks up a species by its numeric id.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallgrass::Species;
    ///
    /// assert_eq!(Species::from_id(2), Some(Species::Squirtle));
    /// assert_eq!(Species::from_id(200), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Species> {
        Self::ALL.get(id as usize).copied()
    }

    /// Numeric id of this species.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Static descriptor holding name, base stats and default moves.
    pub fn descriptor(self) -> &'static SpeciesDescriptor {
        &SPECIES_TABLE[self as usize]
    }

    /// Display name of this species.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

/// Base stats a species scales from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

/// Per-species data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeciesDescriptor {
    /// Display name
    pub name: &'static str,
    /// Base stats used by the level formulas
    pub base: BaseStats,
    /// Default move set, `None` marks an empty slot
    pub default_moves: [Option<MoveId>; MAX_MOVES],
}

const fn base(hp: u32, attack: u32, defense: u32, speed: u32) -> BaseStats {
    BaseStats {
        hp,
        attack,
        defense,
        speed,
    }
}

static SPECIES_TABLE: [SpeciesDescriptor; SPECIES_COUNT] = [
    SpeciesDescriptor {
        name: "Bulbasaur",
        base: base(45, 49, 49, 45),
        default_moves: [
            Some(MoveId::Tackle),
            Some(MoveId::Growl),
            Some(MoveId::VineWhip),
            Some(MoveId::PoisonSting),
        ],
    },
    SpeciesDescriptor {
        name: "Charmander",
        base: base(39, 52, 43, 65),
        default_moves: [
            Some(MoveId::Scratch),
            Some(MoveId::Growl),
            Some(MoveId::Ember),
            None,
        ],
    },
    SpeciesDescriptor {
        name: "Squirtle",
        base: base(44, 48, 65, 43),
        default_moves: [
            Some(MoveId::Tackle),
            Some(MoveId::Growl),
            Some(MoveId::WaterGun),
            None,
        ],
    },
    SpeciesDescriptor {
        name: "Pidgey",
        base: base(40, 45, 40, 56),
        default_moves: [
            Some(MoveId::Tackle),
            Some(MoveId::QuickAttack),
            Some(MoveId::Gust),
            None,
        ],
    },
    SpeciesDescriptor {
        name: "Zubat",
        base: base(40, 45, 35, 55),
        default_moves: [
            Some(MoveId::PoisonSting),
            Some(MoveId::Gust),
            Some(MoveId::Acid),
            None,
        ],
    },
];

/// Stand-in for ids with no table row. One Tackle keeps enemy turns playable.
static PLACEHOLDER_SPECIES: SpeciesDescriptor = SpeciesDescriptor {
    name: "???",
    base: base(0, 0, 0, 0),
    default_moves: [Some(MoveId::Tackle), None, None, None],
};

/// Elemental type of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Flying,
    Poison,
}

/// Secondary effect a move may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveEffect {
    None,
    Burn,
    Paralyze,
    Sleep,
    Poison,
}

/// A combat action.
///
/// `accuracy` and `effect_chance` are carried as metadata only: a move with
/// nonzero power always connects and no status is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub name: &'static str,
    pub move_type: MoveType,
    /// 0 for status moves
    pub power: u32,
    pub accuracy: u8,
    pub effect: MoveEffect,
    /// Percent chance the effect triggers
    pub effect_chance: u8,
}

impl Move {
    /// An unused move slot.
    pub const EMPTY: Move = Move {
        name: "",
        move_type: MoveType::Normal,
        power: 0,
        accuracy: 0,
        effect: MoveEffect::None,
        effect_chance: 0,
    };

    /// Whether this slot is unused.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Whether this move never deals damage.
    pub fn is_status(&self) -> bool {
        self.power == 0
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Identifier of an entry in [`MOVE_CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveId {
    Tackle,
    Scratch,
    QuickAttack,
    Growl,
    Ember,
    Flamethrower,
    WaterGun,
    Bubble,
    VineWhip,
    RazorLeaf,
    Gust,
    WingAttack,
    PoisonSting,
    Acid,
    ThunderShock,
}

impl MoveId {
    /// Returns a copy of the catalog entry.
    pub fn data(self) -> Move {
        MOVE_CATALOG[self as usize]
    }
}

const fn catalog_move(
    name: &'static str,
    move_type: MoveType,
    power: u32,
    accuracy: u8,
    effect: MoveEffect,
    effect_chance: u8,
) -> Move {
    Move {
        name,
        move_type,
        power,
        accuracy,
        effect,
        effect_chance,
    }
}

/// The shared, read-only move catalog, indexed by [`MoveId`].
pub const MOVE_CATALOG: [Move; MOVE_COUNT] = [
    catalog_move("Tackle", MoveType::Normal, 40, 100, MoveEffect::None, 0),
    catalog_move("Scratch", MoveType::Normal, 40, 100, MoveEffect::None, 0),
    catalog_move("Quick Attack", MoveType::Normal, 40, 100, MoveEffect::None, 0),
    catalog_move("Growl", MoveType::Normal, 0, 100, MoveEffect::None, 0),
    catalog_move("Ember", MoveType::Fire, 40, 100, MoveEffect::Burn, 10),
    catalog_move("Flamethrower", MoveType::Fire, 90, 100, MoveEffect::Burn, 10),
    catalog_move("Water Gun", MoveType::Water, 40, 100, MoveEffect::None, 0),
    catalog_move("Bubble", MoveType::Water, 40, 100, MoveEffect::None, 0),
    catalog_move("Vine Whip", MoveType::Grass, 45, 100, MoveEffect::None, 0),
    catalog_move("Razor Leaf", MoveType::Grass, 55, 95, MoveEffect::None, 0),
    catalog_move("Gust", MoveType::Flying, 40, 100, MoveEffect::None, 0),
    catalog_move("Wing Attack", MoveType::Flying, 60, 100, MoveEffect::None, 0),
    catalog_move("Poison Sting", MoveType::Poison, 15, 100, MoveEffect::Poison, 30),
    catalog_move("Acid", MoveType::Poison, 40, 100, MoveEffect::Poison, 10),
    catalog_move("Thunder Shock", MoveType::Electric, 40, 100, MoveEffect::Paralyze, 10),
];

/// A combatant with derived stats and up to four moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    pub name: &'static str,
    /// `None` for the placeholder identity
    pub species: Option<Species>,
    pub level: u32,
    pub max_hp: u32,
    /// Always within `0..=max_hp`
    pub current_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub moves: [Move; MAX_MOVES],
}

impl Creature {
    fn from_descriptor(
        descriptor: &SpeciesDescriptor,
        species: Option<Species>,
        level: u32,
    ) -> Self {
        let stats = descriptor.base;
        let max_hp = saturate(
            u64::from(stats.hp) * 2 * u64::from(level) / 100 + u64::from(level) + 10,
        );

        let mut moves = [Move::EMPTY; MAX_MOVES];
        for (slot, id) in moves.iter_mut().zip(descriptor.default_moves.iter()) {
            if let Some(id) = id {
                *slot = id.data();
            }
        }

        Self {
            name: descriptor.name,
            species,
            level,
            max_hp,
            current_hp: max_hp,
            attack: derive_stat(stats.attack, level),
            defense: derive_stat(stats.defense, level),
            speed: derive_stat(stats.speed, level),
            moves,
        }
    }

    /// Whether this creature has no HP left.
    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Subtracts damage, clamping at zero. Returns the HP actually removed.
    pub fn apply_damage(&mut self, damage: u32) -> u32 {
        let dealt = damage.min(self.current_hp);
        self.current_hp -= dealt;
        dealt
    }

    /// Iterates the occupied move slots as `(slot, move)` pairs.
    pub fn usable_moves(&self) -> impl Iterator<Item = (usize, &Move)> {
        self.moves.iter().enumerate().filter(|(_, m)| !m.is_empty())
    }

    /// Number of occupied move slots.
    pub fn move_count(&self) -> usize {
        self.usable_moves().count()
    }

    /// Slot index of the `n`-th occupied move.
    pub fn nth_move_slot(&self, n: usize) -> Option<usize> {
        self.usable_moves().nth(n).map(|(slot, _)| slot)
    }

    /// Filled width of an HP bar `width` pixels wide.
    pub fn hp_bar_fill(&self, width: u32) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        saturate(u64::from(self.current_hp) * u64::from(width) / u64::from(self.max_hp))
    }
}

// Computed in u64, saturating at u32::MAX.
fn derive_stat(base_stat: u32, level: u32) -> u32 {
    saturate(u64::from(base_stat) * 2 * u64::from(level) / 100 + 5)
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Creates a creature of `species` at `level` with full HP and its default moves.
///
/// # Examples
///
/// ```
/// use tallgrass::{create_creature, Species};
///
/// let bulbasaur = create_creature(Species::Bulbasaur, 5);
/// assert_eq!(bulbasaur.max_hp, 19);
/// assert_eq!(bulbasaur.attack, 9);
/// assert_eq!(bulbasaur.current_hp, bulbasaur.max_hp);
/// ```
pub fn create_creature(species: Species, level: u32) -> Creature {
    Creature::from_descriptor(species.descriptor(), Some(species), level)
}

/// Creates a creature from a raw species id.
///
/// Unknown ids yield the "???" placeholder instead of failing.
pub fn create_creature_from_id(id: u8, level: u32) -> Creature {
    match Species::from_id(id) {
        Some(species) => create_creature(species, level),
        None => {
            log::debug!("Unknown species id {}, using placeholder", id);
            Creature::from_descriptor(&PLACEHOLDER_SPECIES, None, level)
        }
    }
}

/// Computes the damage `mv` deals when `attacker` uses it on `defender`.
///
/// Status moves deal 0. Damaging moves always connect and deal at least 1
/// after an 85-100% random variance.
pub fn compute_damage<R: Rng + ?Sized>(
    mv: &Move,
    attacker: &Creature,
    defender: &Creature,
    rng: &mut R,
) -> u32 {
    if mv.is_status() {
        return 0;
    }

    let level = u64::from(attacker.level);
    let power = u64::from(mv.power);
    let attack = u64::from(attacker.attack);
    let defense = u64::from(defender.defense.max(1));

    let base = (2 * level)
        .saturating_mul(power)
        .saturating_mul(attack)
        / (defense * 50)
        + 2;
    let variance: u64 = rng.gen_range(85..=100);
    let damage = base.saturating_mul(variance) / 100;

    saturate(damage).max(1)
}
