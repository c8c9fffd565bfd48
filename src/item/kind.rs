use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ability::ItemFamily;
use super::flags::{Brand, Element, Flag, Modifier, Slay};

/// One base item kind from the external item catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemKind {
    pub family: ItemFamily,
    pub name: String,
    pub to_hit: i32,
    pub to_dam: i32,
    pub to_ac: i32,
    pub weight: u32,
    /// Damage dice: number and sides.
    pub dd: u8,
    pub ds: u8,
    pub level: u32,
    pub alloc_prob: u32,
    pub flags: BTreeSet<Flag>,
    pub mods: BTreeMap<Modifier, i32>,
    pub resists: BTreeMap<Element, u8>,
    /// Fixed quest items never receive curated names.
    pub quest_item: bool,
}

impl ItemKind {
    /// A plain kind with no intrinsic bonuses, for catalogue construction.
    pub fn plain(family: ItemFamily, name: &str, weight: u32, level: u32) -> ItemKind {
        ItemKind {
            family,
            name: name.to_string(),
            to_hit: 0,
            to_dam: 0,
            to_ac: 0,
            weight,
            dd: if family == ItemFamily::Melee { 1 } else { 0 },
            ds: if family == ItemFamily::Melee { 4 } else { 0 },
            level,
            alloc_prob: 20,
            flags: BTreeSet::new(),
            mods: BTreeMap::new(),
            resists: BTreeMap::new(),
            quest_item: false,
        }
    }
}

/// Lookup catalogue over base item kinds, indexed by position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KindCatalogue {
    kinds: Vec<ItemKind>,
}

impl KindCatalogue {
    pub fn new(kinds: Vec<ItemKind>) -> KindCatalogue {
        KindCatalogue { kinds }
    }

    pub fn get(&self, index: usize) -> &ItemKind {
        &self.kinds[index]
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ItemKind)> {
        self.kinds.iter().enumerate()
    }

    /// Lookup by (family, subtype name).
    pub fn lookup(&self, family: ItemFamily, name: &str) -> Option<usize> {
        self.kinds
            .iter()
            .position(|k| k.family == family && k.name == name)
    }

    /// Weighted draw of one kind within a family, by allocation probability.
    /// Quest-item kinds are never drawn; their artifacts stay fixed.
    pub fn random_in_family(
        &self,
        family: ItemFamily,
        rng: &mut dyn rand::RngCore,
    ) -> Option<usize> {
        let candidates: Vec<(usize, u32)> = self
            .kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| k.family == family && !k.quest_item)
            .map(|(i, k)| (i, k.alloc_prob.max(1)))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let total: u32 = candidates.iter().map(|(_, w)| w).sum();
        let mut roll = rng.random_range(0..total);
        for (index, weight) in &candidates {
            if roll < *weight {
                return Some(*index);
            }
            roll -= weight;
        }
        candidates.last().map(|(i, _)| *i)
    }
}

// ---------------------------------------------------------------------------
// Brand / slay catalogue
// ---------------------------------------------------------------------------

const BRAND_WEIGHTS: &[(Brand, u32)] = &[
    (Brand::Fire, 5),
    (Brand::Cold, 5),
    (Brand::Elec, 3),
    (Brand::Acid, 2),
    (Brand::Poison, 3),
];

const SLAY_WEIGHTS: &[(Slay, u32)] = &[
    (Slay::Animal, 4),
    (Slay::Evil, 5),
    (Slay::Undead, 4),
    (Slay::Demon, 3),
    (Slay::Orc, 3),
    (Slay::Troll, 3),
    (Slay::Giant, 2),
    (Slay::Dragon, 3),
];

/// Weighted draw of one brand the item does not already carry.
pub fn random_brand(existing: &BTreeSet<Brand>, rng: &mut dyn rand::RngCore) -> Option<Brand> {
    weighted_pick(
        BRAND_WEIGHTS.iter().filter(|(b, _)| !existing.contains(b)),
        rng,
    )
}

/// Weighted draw of one slay the item does not already carry.
pub fn random_slay(existing: &BTreeSet<Slay>, rng: &mut dyn rand::RngCore) -> Option<Slay> {
    weighted_pick(
        SLAY_WEIGHTS.iter().filter(|(s, _)| !existing.contains(s)),
        rng,
    )
}

fn weighted_pick<'a, T: Copy + 'a>(
    candidates: impl Iterator<Item = &'a (T, u32)>,
    rng: &mut dyn rand::RngCore,
) -> Option<T> {
    let pool: Vec<(T, u32)> = candidates.copied().collect();
    let total: u32 = pool.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.random_range(0..total);
    for (value, weight) in &pool {
        if roll < *weight {
            return Some(*value);
        }
        roll -= weight;
    }
    None
}
