use serde::{Deserialize, Serialize};

use super::Artifact;

/// Primary stats that can be modified or sustained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    Str,
    Int,
    Wis,
    Dex,
    Con,
}

impl Stat {
    pub const ALL: [Stat; 5] = [Stat::Str, Stat::Int, Stat::Wis, Stat::Dex, Stat::Con];

    pub fn name(self) -> &'static str {
        match self {
            Stat::Str => "strength",
            Stat::Int => "intelligence",
            Stat::Wis => "wisdom",
            Stat::Dex => "dexterity",
            Stat::Con => "constitution",
        }
    }
}

/// Sparse numeric modifier kinds carried by an artifact.
///
/// All variants are unit variants so the modifier map serializes with plain
/// string keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modifier {
    Str,
    Int,
    Wis,
    Dex,
    Con,
    Stealth,
    Speed,
    Blows,
    Shots,
    Might,
}

impl Modifier {
    pub const ALL: [Modifier; 10] = [
        Modifier::Str,
        Modifier::Int,
        Modifier::Wis,
        Modifier::Dex,
        Modifier::Con,
        Modifier::Stealth,
        Modifier::Speed,
        Modifier::Blows,
        Modifier::Shots,
        Modifier::Might,
    ];

    /// The stat this modifier affects, if it is a stat modifier.
    pub fn stat(self) -> Option<Stat> {
        match self {
            Modifier::Str => Some(Stat::Str),
            Modifier::Int => Some(Stat::Int),
            Modifier::Wis => Some(Stat::Wis),
            Modifier::Dex => Some(Stat::Dex),
            Modifier::Con => Some(Stat::Con),
            _ => None,
        }
    }

    pub fn from_stat(stat: Stat) -> Modifier {
        match stat {
            Stat::Str => Modifier::Str,
            Stat::Int => Modifier::Int,
            Stat::Wis => Modifier::Wis,
            Stat::Dex => Modifier::Dex,
            Stat::Con => Modifier::Con,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Modifier::Str => "STR",
            Modifier::Int => "INT",
            Modifier::Wis => "WIS",
            Modifier::Dex => "DEX",
            Modifier::Con => "CON",
            Modifier::Stealth => "STEALTH",
            Modifier::Speed => "SPEED",
            Modifier::Blows => "BLOWS",
            Modifier::Shots => "SHOTS",
            Modifier::Might => "MIGHT",
        }
    }
}

/// Elements an artifact can resist (level 1) or, for the low four,
/// be immune to (level 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Acid,
    Elec,
    Fire,
    Cold,
    Poison,
    Light,
    Dark,
    Blindness,
    Confusion,
    Sound,
    Shards,
    Nexus,
    Nether,
    Chaos,
    Disenchant,
}

impl Element {
    pub const LOW: [Element; 4] = [Element::Acid, Element::Elec, Element::Fire, Element::Cold];

    pub const HIGH: [Element; 11] = [
        Element::Poison,
        Element::Light,
        Element::Dark,
        Element::Blindness,
        Element::Confusion,
        Element::Sound,
        Element::Shards,
        Element::Nexus,
        Element::Nether,
        Element::Chaos,
        Element::Disenchant,
    ];

    pub fn is_low(self) -> bool {
        Element::LOW.contains(&self)
    }

    pub fn token(self) -> &'static str {
        match self {
            Element::Acid => "ACID",
            Element::Elec => "ELEC",
            Element::Fire => "FIRE",
            Element::Cold => "COLD",
            Element::Poison => "POIS",
            Element::Light => "LIGHT",
            Element::Dark => "DARK",
            Element::Blindness => "BLIND",
            Element::Confusion => "CONF",
            Element::Sound => "SOUND",
            Element::Shards => "SHARD",
            Element::Nexus => "NEXUS",
            Element::Nether => "NETHER",
            Element::Chaos => "CHAOS",
            Element::Disenchant => "DISEN",
        }
    }

    pub fn from_token(token: &str) -> Option<Element> {
        let all = [
            Element::Acid,
            Element::Elec,
            Element::Fire,
            Element::Cold,
            Element::Poison,
            Element::Light,
            Element::Dark,
            Element::Blindness,
            Element::Confusion,
            Element::Sound,
            Element::Shards,
            Element::Nexus,
            Element::Nether,
            Element::Chaos,
            Element::Disenchant,
        ];
        all.into_iter().find(|e| e.token() == token)
    }
}

/// Boolean abilities an artifact can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flag {
    Aggravate,
    FreeAction,
    HoldLife,
    SeeInvisible,
    Telepathy,
    SlowDigestion,
    Regeneration,
    FeatherFall,
    Light,
    Blessed,
    DrainExp,
}

impl Flag {
    pub const ALL: [Flag; 11] = [
        Flag::Aggravate,
        Flag::FreeAction,
        Flag::HoldLife,
        Flag::SeeInvisible,
        Flag::Telepathy,
        Flag::SlowDigestion,
        Flag::Regeneration,
        Flag::FeatherFall,
        Flag::Light,
        Flag::Blessed,
        Flag::DrainExp,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Flag::Aggravate => "AGGRAVATE",
            Flag::FreeAction => "FREE_ACTION",
            Flag::HoldLife => "HOLD_LIFE",
            Flag::SeeInvisible => "SEE_INVIS",
            Flag::Telepathy => "TELEPATHY",
            Flag::SlowDigestion => "SLOW_DIGEST",
            Flag::Regeneration => "REGEN",
            Flag::FeatherFall => "FEATHER",
            Flag::Light => "LIGHT",
            Flag::Blessed => "BLESSED",
            Flag::DrainExp => "DRAIN_EXP",
        }
    }

    pub fn from_token(token: &str) -> Option<Flag> {
        Flag::ALL.into_iter().find(|f| f.token() == token)
    }
}

/// Elemental weapon brands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Brand {
    Acid,
    Elec,
    Fire,
    Cold,
    Poison,
}

impl Brand {
    pub const ALL: [Brand; 5] = [Brand::Acid, Brand::Elec, Brand::Fire, Brand::Cold, Brand::Poison];

    pub fn name(self) -> &'static str {
        match self {
            Brand::Acid => "of Corrosion",
            Brand::Elec => "of Lightning",
            Brand::Fire => "of Burning",
            Brand::Cold => "of Freezing",
            Brand::Poison => "of Venom",
        }
    }

    pub fn multiplier(self) -> u32 {
        match self {
            Brand::Poison => 2,
            _ => 3,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Brand::Acid => "ACID",
            Brand::Elec => "ELEC",
            Brand::Fire => "FIRE",
            Brand::Cold => "COLD",
            Brand::Poison => "POIS",
        }
    }

    pub fn from_token(token: &str) -> Option<Brand> {
        Brand::ALL.into_iter().find(|b| b.token() == token)
    }
}

/// Creature-class weapon slays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slay {
    Animal,
    Evil,
    Undead,
    Demon,
    Orc,
    Troll,
    Giant,
    Dragon,
}

impl Slay {
    pub const ALL: [Slay; 8] = [
        Slay::Animal,
        Slay::Evil,
        Slay::Undead,
        Slay::Demon,
        Slay::Orc,
        Slay::Troll,
        Slay::Giant,
        Slay::Dragon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slay::Animal => "of Hunting",
            Slay::Evil => "of Purity",
            Slay::Undead => "of Exorcism",
            Slay::Demon => "of Banishment",
            Slay::Orc => "of Orc Bane",
            Slay::Troll => "of Troll Bane",
            Slay::Giant => "of Giant Bane",
            Slay::Dragon => "of Dragon Bane",
        }
    }

    pub fn multiplier(self) -> u32 {
        match self {
            Slay::Animal | Slay::Evil => 2,
            _ => 3,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Slay::Animal => "ANIMAL",
            Slay::Evil => "EVIL",
            Slay::Undead => "UNDEAD",
            Slay::Demon => "DEMON",
            Slay::Orc => "ORC",
            Slay::Troll => "TROLL",
            Slay::Giant => "GIANT",
            Slay::Dragon => "DRAGON",
        }
    }

    pub fn from_token(token: &str) -> Option<Slay> {
        Slay::ALL.into_iter().find(|s| s.token() == token)
    }
}

/// Faults carried by deliberately bad artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Fault {
    Vulnerability,
    Teleportation,
    Hunger,
    Noise,
    DrainLife,
    DrainMana,
    Paralysis,
}

impl Fault {
    pub const ALL: [Fault; 7] = [
        Fault::Vulnerability,
        Fault::Teleportation,
        Fault::Hunger,
        Fault::Noise,
        Fault::DrainLife,
        Fault::DrainMana,
        Fault::Paralysis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Fault::Vulnerability => "vulnerability",
            Fault::Teleportation => "random teleportation",
            Fault::Hunger => "hunger",
            Fault::Noise => "noisiness",
            Fault::DrainLife => "life drain",
            Fault::DrainMana => "mana drain",
            Fault::Paralysis => "paralysis hazard",
        }
    }

    /// Whether the fault contradicts the artifact's current properties and
    /// must be stripped by the contradiction pass.
    pub fn conflicts(self, artifact: &Artifact) -> bool {
        match self {
            Fault::Hunger => artifact.flags.contains(&Flag::SlowDigestion),
            Fault::Noise => artifact.mod_value(Modifier::Stealth) > 0,
            Fault::DrainLife => {
                artifact.flags.contains(&Flag::HoldLife)
                    || artifact.flags.contains(&Flag::Regeneration)
            }
            Fault::Paralysis => artifact.flags.contains(&Flag::FreeAction),
            _ => false,
        }
    }
}

/// Activatable effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Activation {
    FireBolt,
    FrostBolt,
    LightningBolt,
    AcidBolt,
    Illuminate,
    HasteSelf,
    SeeInvisible,
    RestoreLife,
    Detection,
    Resist(Element),
}

impl Activation {
    /// Candidate pool for random activation picks.
    pub const POOL: [Activation; 13] = [
        Activation::FireBolt,
        Activation::FrostBolt,
        Activation::LightningBolt,
        Activation::AcidBolt,
        Activation::Illuminate,
        Activation::HasteSelf,
        Activation::SeeInvisible,
        Activation::RestoreLife,
        Activation::Detection,
        Activation::Resist(Element::Acid),
        Activation::Resist(Element::Elec),
        Activation::Resist(Element::Fire),
        Activation::Resist(Element::Cold),
    ];

    pub fn name(self) -> String {
        match self {
            Activation::FireBolt => "fire bolt".to_string(),
            Activation::FrostBolt => "frost bolt".to_string(),
            Activation::LightningBolt => "lightning bolt".to_string(),
            Activation::AcidBolt => "acid bolt".to_string(),
            Activation::Illuminate => "illumination".to_string(),
            Activation::HasteSelf => "haste self".to_string(),
            Activation::SeeInvisible => "see invisible".to_string(),
            Activation::RestoreLife => "restore life levels".to_string(),
            Activation::Detection => "detection".to_string(),
            Activation::Resist(el) => format!("temporary resist {}", el.token().to_lowercase()),
        }
    }

    /// An activation is redundant when the artifact already grants the same
    /// effect permanently.
    pub fn redundant_for(self, artifact: &Artifact) -> bool {
        match self {
            Activation::Resist(el) => artifact.resist_level(el) >= 1,
            Activation::Illuminate => artifact.flags.contains(&Flag::Light),
            Activation::SeeInvisible => artifact.flags.contains(&Flag::SeeInvisible),
            Activation::RestoreLife => artifact.flags.contains(&Flag::HoldLife),
            _ => false,
        }
    }
}
