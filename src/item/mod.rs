pub mod ability;
pub mod flags;
pub mod kind;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub use ability::{Ability, ItemFamily, bucket, high_resist_bucket, stat_bucket};
pub use flags::{Activation, Brand, Element, Fault, Flag, Modifier, Slay, Stat};
pub use kind::{ItemKind, KindCatalogue, random_brand, random_slay};

/// The mutable unit being designed: one artifact record.
///
/// Exclusively owned by the design-loop iteration working on it; wiped and
/// re-initialized from a base kind at the start of each attempt via
/// [`Artifact::from_kind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Index of the base item kind in the catalogue.
    pub kind: usize,
    pub name: String,
    pub to_hit: i32,
    pub to_dam: i32,
    pub to_ac: i32,
    pub weight: u32,
    pub dd: u8,
    pub ds: u8,
    pub flags: BTreeSet<Flag>,
    pub mods: BTreeMap<Modifier, i32>,
    /// Resist level per element: 0 none, 1 resist, 2 immune.
    pub resists: BTreeMap<Element, u8>,
    pub sustains: BTreeSet<Stat>,
    pub brands: BTreeSet<Brand>,
    pub slays: BTreeSet<Slay>,
    pub activation: Option<Activation>,
    pub faults: Vec<Fault>,
    // Allocation fields, computed on acceptance.
    pub level: u32,
    pub alloc_prob: u32,
    pub min_depth: u32,
    pub max_depth: u32,
    pub cost: i64,
}

impl Artifact {
    /// Fresh artifact initialized from a base kind's intrinsic properties.
    pub fn from_kind(index: usize, kind: &ItemKind) -> Artifact {
        Artifact {
            kind: index,
            name: String::new(),
            to_hit: kind.to_hit,
            to_dam: kind.to_dam,
            to_ac: kind.to_ac,
            weight: kind.weight,
            dd: kind.dd,
            ds: kind.ds,
            flags: kind.flags.clone(),
            mods: kind.mods.clone(),
            resists: kind.resists.clone(),
            sustains: BTreeSet::new(),
            brands: BTreeSet::new(),
            slays: BTreeSet::new(),
            activation: None,
            faults: Vec::new(),
            level: kind.level,
            alloc_prob: kind.alloc_prob,
            min_depth: 0,
            max_depth: 0,
            cost: 0,
        }
    }

    pub fn mod_value(&self, modifier: Modifier) -> i32 {
        self.mods.get(&modifier).copied().unwrap_or(0)
    }

    /// Add to a modifier, dropping the entry when it returns to zero so the
    /// map stays sparse.
    pub fn add_mod(&mut self, modifier: Modifier, delta: i32) {
        let value = self.mod_value(modifier) + delta;
        if value == 0 {
            self.mods.remove(&modifier);
        } else {
            self.mods.insert(modifier, value);
        }
    }

    pub fn set_mod(&mut self, modifier: Modifier, value: i32) {
        if value == 0 {
            self.mods.remove(&modifier);
        } else {
            self.mods.insert(modifier, value);
        }
    }

    pub fn resist_level(&self, element: Element) -> u8 {
        self.resists.get(&element).copied().unwrap_or(0)
    }

    /// Raise a resist to at least the given level, never lowering it.
    pub fn raise_resist(&mut self, element: Element, level: u8) {
        if self.resist_level(element) < level {
            self.resists.insert(element, level);
        }
    }

    pub fn has_fault(&self, fault: Fault) -> bool {
        self.faults.contains(&fault)
    }

    pub fn add_fault(&mut self, fault: Fault) {
        if !self.has_fault(fault) {
            self.faults.push(fault);
        }
    }

    /// Snapshot of the full record for rollback. Deep value copy, so a
    /// restored candidate shares no storage with the snapshot.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            record: self.clone(),
        }
    }

    pub fn restore(&mut self, checkpoint: &Checkpoint) {
        *self = checkpoint.record.clone();
    }

    /// Boring-check: whether the artifact grants anything beyond its base
    /// kind. Cosmetic to-hit/to-dam/to-AC/weight tweaks alone do not count.
    pub fn is_interesting(&self, kind: &ItemKind) -> bool {
        if !self.brands.is_empty() || !self.slays.is_empty() || self.activation.is_some() {
            return true;
        }
        if !self.sustains.is_empty() {
            return true;
        }
        if self.flags.iter().any(|f| !kind.flags.contains(f)) {
            return true;
        }
        if self
            .mods
            .iter()
            .any(|(m, v)| *v > kind.mods.get(m).copied().unwrap_or(0))
        {
            return true;
        }
        if self
            .resists
            .iter()
            .any(|(el, lvl)| *lvl > kind.resists.get(el).copied().unwrap_or(0))
        {
            return true;
        }
        false
    }
}

/// Rollback checkpoint for one artifact record.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    record: Artifact,
}

/// A hand-authored reference artifact, plus the flag asking the generator to
/// rebuild it with the same machinery at its authored power.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceArtifact {
    pub item: Artifact,
    pub redesign: bool,
}

impl ReferenceArtifact {
    pub fn fixed(item: Artifact) -> ReferenceArtifact {
        ReferenceArtifact {
            item,
            redesign: false,
        }
    }
}
