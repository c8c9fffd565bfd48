use serde::{Deserialize, Serialize};

use super::flags::{Element, Stat};

/// Broad item-type families used for quota allocation, frequency rescaling,
/// and ability legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemFamily {
    Bow,
    Melee,
    Boots,
    Gloves,
    Helm,
    Shield,
    Cloak,
    Body,
    Light,
    Jewelry,
}

impl ItemFamily {
    pub const ALL: [ItemFamily; 10] = [
        ItemFamily::Bow,
        ItemFamily::Melee,
        ItemFamily::Boots,
        ItemFamily::Gloves,
        ItemFamily::Helm,
        ItemFamily::Shield,
        ItemFamily::Cloak,
        ItemFamily::Body,
        ItemFamily::Light,
        ItemFamily::Jewelry,
    ];

    pub const COUNT: usize = ItemFamily::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_weapon(self) -> bool {
        matches!(self, ItemFamily::Bow | ItemFamily::Melee)
    }

    pub fn tag(self) -> &'static str {
        match self {
            ItemFamily::Bow => "bow",
            ItemFamily::Melee => "melee",
            ItemFamily::Boots => "boots",
            ItemFamily::Gloves => "gloves",
            ItemFamily::Helm => "helm",
            ItemFamily::Shield => "shield",
            ItemFamily::Cloak => "cloak",
            ItemFamily::Body => "body",
            ItemFamily::Light => "light",
            ItemFamily::Jewelry => "jewelry",
        }
    }

    pub fn from_tag(tag: &str) -> Option<ItemFamily> {
        ItemFamily::ALL.into_iter().find(|f| f.tag() == tag)
    }
}

/// Closed enumeration of ability categories the design engine can grant.
///
/// The discriminant doubles as the index into every frequency table, so the
/// order here is load-bearing for table layout (not for game semantics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ability {
    // Bow-only
    BowShots,
    BowMight,
    SuperShots,
    SuperMight,
    // Melee-only (to-hit/to-dam/weight shared with bows)
    MeleeHit,
    MeleeDam,
    MeleeBless,
    MeleeBrand,
    MeleeSlay,
    MeleeBlows,
    MeleeDice,
    MeleeWeight,
    MeleeAc,
    SuperDice,
    SuperBlows,
    // Non-weapon combat bonuses
    NonweaponHit,
    NonweaponDam,
    // Armor-slot buckets
    BootAc,
    BootStealth,
    BootSpeed,
    BootFeather,
    GloveAc,
    GloveFreeAction,
    GloveDex,
    HelmAc,
    HelmSeeInvisible,
    HelmTelepathy,
    HelmResistBlind,
    HelmWis,
    HelmInt,
    ShieldAc,
    ShieldLowResist,
    CloakAc,
    CloakStealth,
    BodyAc,
    BodyStealth,
    BodyCon,
    BodyLowResist,
    BodyHighResist,
    BodyHoldLife,
    // General (legal on every family)
    Stat,
    Sustain,
    Stealth,
    Speed,
    SuperSpeed,
    FreeAction,
    HoldLife,
    SeeInvisible,
    Telepathy,
    SlowDigestion,
    Regeneration,
    FeatherFall,
    Light,
    Immunity,
    LowResist,
    HighResist,
    GeneralAc,
    SuperAc,
    Aggravate,
    Activation,
}

impl Ability {
    pub const ALL: [Ability; 60] = [
        Ability::BowShots,
        Ability::BowMight,
        Ability::SuperShots,
        Ability::SuperMight,
        Ability::MeleeHit,
        Ability::MeleeDam,
        Ability::MeleeBless,
        Ability::MeleeBrand,
        Ability::MeleeSlay,
        Ability::MeleeBlows,
        Ability::MeleeDice,
        Ability::MeleeWeight,
        Ability::MeleeAc,
        Ability::SuperDice,
        Ability::SuperBlows,
        Ability::NonweaponHit,
        Ability::NonweaponDam,
        Ability::BootAc,
        Ability::BootStealth,
        Ability::BootSpeed,
        Ability::BootFeather,
        Ability::GloveAc,
        Ability::GloveFreeAction,
        Ability::GloveDex,
        Ability::HelmAc,
        Ability::HelmSeeInvisible,
        Ability::HelmTelepathy,
        Ability::HelmResistBlind,
        Ability::HelmWis,
        Ability::HelmInt,
        Ability::ShieldAc,
        Ability::ShieldLowResist,
        Ability::CloakAc,
        Ability::CloakStealth,
        Ability::BodyAc,
        Ability::BodyStealth,
        Ability::BodyCon,
        Ability::BodyLowResist,
        Ability::BodyHighResist,
        Ability::BodyHoldLife,
        Ability::Stat,
        Ability::Sustain,
        Ability::Stealth,
        Ability::Speed,
        Ability::SuperSpeed,
        Ability::FreeAction,
        Ability::HoldLife,
        Ability::SeeInvisible,
        Ability::Telepathy,
        Ability::SlowDigestion,
        Ability::Regeneration,
        Ability::FeatherFall,
        Ability::Light,
        Ability::Immunity,
        Ability::LowResist,
        Ability::HighResist,
        Ability::GeneralAc,
        Ability::SuperAc,
        Ability::Aggravate,
        Ability::Activation,
    ];

    pub const COUNT: usize = Ability::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    /// Supercharge categories are only consulted by the dedicated
    /// supercharge pass, never by the main ability table.
    pub fn is_supercharge(self) -> bool {
        matches!(
            self,
            Ability::SuperShots
                | Ability::SuperMight
                | Ability::SuperDice
                | Ability::SuperBlows
                | Ability::SuperSpeed
                | Ability::SuperAc
        )
    }

    /// Legality of this category on a base item of the given family.
    pub fn applies_to(self, family: ItemFamily) -> bool {
        use Ability::*;
        match self {
            BowShots | BowMight | SuperShots | SuperMight => family == ItemFamily::Bow,
            MeleeHit | MeleeDam | MeleeWeight => family.is_weapon(),
            MeleeBless | MeleeBrand | MeleeSlay | MeleeBlows | MeleeDice | MeleeAc | SuperDice
            | SuperBlows => family == ItemFamily::Melee,
            NonweaponHit | NonweaponDam => !family.is_weapon(),
            BootAc | BootStealth | BootSpeed | BootFeather => family == ItemFamily::Boots,
            GloveAc | GloveFreeAction | GloveDex => family == ItemFamily::Gloves,
            HelmAc | HelmSeeInvisible | HelmTelepathy | HelmResistBlind | HelmWis | HelmInt => {
                family == ItemFamily::Helm
            }
            ShieldAc | ShieldLowResist => family == ItemFamily::Shield,
            CloakAc | CloakStealth => family == ItemFamily::Cloak,
            BodyAc | BodyStealth | BodyCon | BodyLowResist | BodyHighResist | BodyHoldLife => {
                family == ItemFamily::Body
            }
            _ => true,
        }
    }
}

/// Bucket selector: the slot-specific counter that shadows a general
/// category on the given family, or the general category itself.
///
/// Evaluated in one place so counting, rescaling, and application agree on
/// which bucket a property belongs to.
pub fn bucket(general: Ability, family: ItemFamily) -> Ability {
    use Ability::*;
    use ItemFamily::*;
    match (general, family) {
        (GeneralAc, Melee) => MeleeAc,
        (GeneralAc, Boots) => BootAc,
        (GeneralAc, Gloves) => GloveAc,
        (GeneralAc, Helm) => HelmAc,
        (GeneralAc, Shield) => ShieldAc,
        (GeneralAc, Cloak) => CloakAc,
        (GeneralAc, Body) => BodyAc,
        (Stealth, Boots) => BootStealth,
        (Stealth, Cloak) => CloakStealth,
        (Stealth, Body) => BodyStealth,
        (Speed, Boots) => BootSpeed,
        (FeatherFall, Boots) => BootFeather,
        (FreeAction, Gloves) => GloveFreeAction,
        (SeeInvisible, Helm) => HelmSeeInvisible,
        (Telepathy, Helm) => HelmTelepathy,
        (HoldLife, Body) => BodyHoldLife,
        (LowResist, Shield) => ShieldLowResist,
        (LowResist, Body) => BodyLowResist,
        (HighResist, Body) => BodyHighResist,
        _ => general,
    }
}

/// Slot-specific bucket for a stat bonus, where one exists.
pub fn stat_bucket(stat: Stat, family: ItemFamily) -> Ability {
    match (stat, family) {
        (Stat::Dex, ItemFamily::Gloves) => Ability::GloveDex,
        (Stat::Wis, ItemFamily::Helm) => Ability::HelmWis,
        (Stat::Int, ItemFamily::Helm) => Ability::HelmInt,
        (Stat::Con, ItemFamily::Body) => Ability::BodyCon,
        _ => Ability::Stat,
    }
}

/// Slot-specific bucket for a high-resist element, where one exists.
pub fn high_resist_bucket(element: Element, family: ItemFamily) -> Ability {
    if element == Element::Blindness && family == ItemFamily::Helm {
        Ability::HelmResistBlind
    } else {
        bucket(Ability::HighResist, family)
    }
}
