use crate::item::{
    Ability, Artifact, Element, Flag, ItemFamily, ItemKind, KindCatalogue, Modifier,
    ReferenceArtifact, Stat, bucket, high_resist_bucket, stat_bucket,
};

use super::stats::SetStats;

// Derivative counting baselines: a bonus is tallied as the number of
// standard increments above the start value, so large bonuses carry
// proportionally more weight.
pub const TO_HIT_START: i32 = 3;
pub const TO_HIT_STEP: u32 = 4;
pub const TO_DAM_START: i32 = 3;
pub const TO_DAM_STEP: u32 = 4;
pub const TO_AC_START: i32 = 3;
pub const TO_AC_STEP: u32 = 4;

// At or above these, a modifier counts as its supercharge category instead
// of per-point tallies.
pub const SPEED_SUPER: i32 = 6;
pub const BLOWS_SUPER: i32 = 2;
pub const SHOTS_SUPER: i32 = 2;
pub const MIGHT_SUPER: i32 = 2;
pub const DICE_SUPER: u8 = 3;

/// Number of standard increments `value` sits above `start`.
pub fn increments(value: i32, start: i32, step: u32) -> u32 {
    if value <= start {
        0
    } else {
        ((value - start) as u32).div_ceil(step)
    }
}

/// Walk the reference set and tally how often each ability category
/// appears, bucketed by item family. Cursed references are skipped.
pub fn collect_frequencies(
    references: &[ReferenceArtifact],
    powers: &[i32],
    kinds: &KindCatalogue,
    stats: &mut SetStats,
) {
    for (reference, &power) in references.iter().zip(powers) {
        if power < 0 {
            continue;
        }
        let artifact = &reference.item;
        let kind = kinds.get(artifact.kind);
        match kind.family {
            ItemFamily::Melee => count_melee(artifact, kind, stats),
            ItemFamily::Bow => count_bow(artifact, kind, stats),
            family => count_other(artifact, kind, family, stats),
        }
        count_modifiers(artifact, kind, stats);
        count_low_resists(artifact, kind.family, stats);
        count_high_resists(artifact, kind.family, stats);
        count_misc(artifact, kind.family, stats);
    }
}

fn count_melee(artifact: &Artifact, kind: &ItemKind, stats: &mut SetStats) {
    stats.tally(
        Ability::MeleeHit,
        increments(artifact.to_hit, TO_HIT_START, TO_HIT_STEP),
    );
    stats.tally(
        Ability::MeleeDam,
        increments(artifact.to_dam, TO_DAM_START, TO_DAM_STEP),
    );
    if artifact.flags.contains(&Flag::Blessed) {
        stats.tally(Ability::MeleeBless, 1);
    }
    stats.tally(Ability::MeleeBrand, artifact.brands.len() as u32);
    stats.tally(Ability::MeleeSlay, artifact.slays.len() as u32);

    let blows = artifact.mod_value(Modifier::Blows);
    if blows >= BLOWS_SUPER {
        stats.tally(Ability::SuperBlows, 1);
    } else if blows > 0 {
        stats.tally(Ability::MeleeBlows, blows as u32);
    }

    let extra_dice = artifact.dd.saturating_sub(kind.dd);
    if extra_dice >= DICE_SUPER {
        stats.tally(Ability::SuperDice, 1);
    } else {
        stats.tally(Ability::MeleeDice, u32::from(extra_dice));
    }

    if artifact.weight < kind.weight {
        stats.tally(Ability::MeleeWeight, 1);
    }
    stats.tally(
        Ability::MeleeAc,
        increments(artifact.to_ac - kind.to_ac, TO_AC_START, TO_AC_STEP),
    );
    if artifact.flags.contains(&Flag::Aggravate) {
        stats.tally(Ability::Aggravate, 1);
    }
}

fn count_bow(artifact: &Artifact, kind: &ItemKind, stats: &mut SetStats) {
    let shots = artifact.mod_value(Modifier::Shots);
    if shots >= SHOTS_SUPER {
        stats.tally(Ability::SuperShots, 1);
    } else if shots > 0 {
        stats.tally(Ability::BowShots, shots as u32);
    }
    let might = artifact.mod_value(Modifier::Might);
    if might >= MIGHT_SUPER {
        stats.tally(Ability::SuperMight, 1);
    } else if might > 0 {
        stats.tally(Ability::BowMight, might as u32);
    }

    // To-hit/to-dam/weight share the weapon-wide buckets with melee.
    stats.tally(
        Ability::MeleeHit,
        increments(artifact.to_hit, TO_HIT_START, TO_HIT_STEP),
    );
    stats.tally(
        Ability::MeleeDam,
        increments(artifact.to_dam, TO_DAM_START, TO_DAM_STEP),
    );
    if artifact.weight < kind.weight {
        stats.tally(Ability::MeleeWeight, 1);
    }
    if artifact.flags.contains(&Flag::Aggravate) {
        stats.tally(Ability::Aggravate, 1);
    }
}

fn count_other(artifact: &Artifact, kind: &ItemKind, family: ItemFamily, stats: &mut SetStats) {
    stats.tally(
        Ability::NonweaponHit,
        increments(artifact.to_hit, TO_HIT_START, TO_HIT_STEP),
    );
    stats.tally(
        Ability::NonweaponDam,
        increments(artifact.to_dam, TO_DAM_START, TO_DAM_STEP),
    );
    stats.tally(
        bucket(Ability::GeneralAc, family),
        increments(artifact.to_ac - kind.to_ac, TO_AC_START, TO_AC_STEP),
    );
    if artifact.flags.contains(&Flag::Aggravate) {
        stats.tally(Ability::Aggravate, 1);
    }
}

fn count_modifiers(artifact: &Artifact, kind: &ItemKind, stats: &mut SetStats) {
    let family = kind.family;
    for stat in Stat::ALL {
        let value = artifact.mod_value(Modifier::from_stat(stat));
        if value > 0 {
            stats.tally(stat_bucket(stat, family), value as u32);
        }
    }
    stats.tally(Ability::Sustain, artifact.sustains.len() as u32);

    let stealth = artifact.mod_value(Modifier::Stealth);
    if stealth > 0 {
        stats.tally(bucket(Ability::Stealth, family), stealth as u32);
    }

    let speed = artifact.mod_value(Modifier::Speed);
    if speed >= SPEED_SUPER {
        stats.tally(Ability::SuperSpeed, 1);
    } else if speed > 0 {
        stats.tally(bucket(Ability::Speed, family), speed as u32);
    }
}

fn count_low_resists(artifact: &Artifact, family: ItemFamily, stats: &mut SetStats) {
    for element in Element::LOW {
        match artifact.resist_level(element) {
            0 => {}
            1 => stats.tally(bucket(Ability::LowResist, family), 1),
            _ => stats.tally(Ability::Immunity, 1),
        }
    }
}

fn count_high_resists(artifact: &Artifact, family: ItemFamily, stats: &mut SetStats) {
    for element in Element::HIGH {
        if artifact.resist_level(element) >= 1 {
            stats.tally(high_resist_bucket(element, family), 1);
        }
    }
}

fn count_misc(artifact: &Artifact, family: ItemFamily, stats: &mut SetStats) {
    for (flag, general) in [
        (Flag::FreeAction, Ability::FreeAction),
        (Flag::HoldLife, Ability::HoldLife),
        (Flag::SeeInvisible, Ability::SeeInvisible),
        (Flag::Telepathy, Ability::Telepathy),
        (Flag::SlowDigestion, Ability::SlowDigestion),
        (Flag::Regeneration, Ability::Regeneration),
        (Flag::FeatherFall, Ability::FeatherFall),
        (Flag::Light, Ability::Light),
    ] {
        if artifact.flags.contains(&flag) {
            stats.tally(bucket(general, family), 1);
        }
    }
    // Aggravate is also tallied by the per-family dispatch; the rescaler
    // halves it to undo the double weighting.
    if artifact.flags.contains(&Flag::Aggravate) {
        stats.tally(Ability::Aggravate, 1);
    }
    if artifact.activation.is_some() {
        stats.tally(Ability::Activation, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Brand, Slay};

    fn catalogue() -> KindCatalogue {
        let mut sword = ItemKind::plain(ItemFamily::Melee, "Long Sword", 130, 10);
        sword.dd = 2;
        sword.ds = 5;
        let mut bow = ItemKind::plain(ItemFamily::Bow, "Long Bow", 30, 10);
        bow.dd = 0;
        let boots = ItemKind::plain(ItemFamily::Boots, "Leather Boots", 20, 2);
        KindCatalogue::new(vec![sword, bow, boots])
    }

    fn collect_one(artifact: Artifact, kinds: &KindCatalogue) -> SetStats {
        let mut stats = SetStats::new(0);
        let refs = vec![ReferenceArtifact::fixed(artifact)];
        collect_frequencies(&refs, &[10], kinds, &mut stats);
        stats
    }

    #[test]
    fn increments_are_derivative() {
        assert_eq!(increments(3, 3, 4), 0);
        assert_eq!(increments(4, 3, 4), 1);
        assert_eq!(increments(7, 3, 4), 1);
        assert_eq!(increments(8, 3, 4), 2);
        assert_eq!(increments(-5, 3, 4), 0);
    }

    #[test]
    fn melee_counts_brands_slays_and_dice() {
        let kinds = catalogue();
        let mut art = Artifact::from_kind(0, kinds.get(0));
        art.to_hit = 11;
        art.brands.insert(Brand::Fire);
        art.slays.insert(Slay::Evil);
        art.slays.insert(Slay::Undead);
        art.dd = 3; // one extra die
        let stats = collect_one(art, &kinds);

        assert_eq!(stats.freq[Ability::MeleeHit.index()], 2);
        assert_eq!(stats.freq[Ability::MeleeBrand.index()], 1);
        assert_eq!(stats.freq[Ability::MeleeSlay.index()], 2);
        assert_eq!(stats.freq[Ability::MeleeDice.index()], 1);
        assert_eq!(stats.freq[Ability::SuperDice.index()], 0);
    }

    #[test]
    fn huge_dice_count_as_supercharge() {
        let kinds = catalogue();
        let mut art = Artifact::from_kind(0, kinds.get(0));
        art.dd = 6; // four extra dice
        let stats = collect_one(art, &kinds);
        assert_eq!(stats.freq[Ability::SuperDice.index()], 1);
        assert_eq!(stats.freq[Ability::MeleeDice.index()], 0);
    }

    #[test]
    fn bow_shots_bucketed_by_magnitude() {
        let kinds = catalogue();
        let mut art = Artifact::from_kind(1, kinds.get(1));
        art.set_mod(Modifier::Shots, 1);
        let stats = collect_one(art.clone(), &kinds);
        assert_eq!(stats.freq[Ability::BowShots.index()], 1);

        art.set_mod(Modifier::Shots, 2);
        let stats = collect_one(art, &kinds);
        assert_eq!(stats.freq[Ability::SuperShots.index()], 1);
        assert_eq!(stats.freq[Ability::BowShots.index()], 0);
    }

    #[test]
    fn slot_bucket_shadows_general() {
        let kinds = catalogue();
        let mut art = Artifact::from_kind(2, kinds.get(2));
        art.set_mod(Modifier::Stealth, 2);
        art.set_mod(Modifier::Speed, 3);
        let stats = collect_one(art, &kinds);

        assert_eq!(stats.freq[Ability::BootStealth.index()], 2);
        assert_eq!(stats.freq[Ability::Stealth.index()], 0);
        assert_eq!(stats.freq[Ability::BootSpeed.index()], 3);
        assert_eq!(stats.freq[Ability::Speed.index()], 0);
    }

    #[test]
    fn aggravate_counted_twice_before_rescale() {
        let kinds = catalogue();
        let mut art = Artifact::from_kind(0, kinds.get(0));
        art.flags.insert(Flag::Aggravate);
        let stats = collect_one(art, &kinds);
        assert_eq!(stats.freq[Ability::Aggravate.index()], 2);
    }

    #[test]
    fn cursed_references_are_skipped() {
        let kinds = catalogue();
        let mut art = Artifact::from_kind(0, kinds.get(0));
        art.brands.insert(Brand::Fire);
        let refs = vec![ReferenceArtifact::fixed(art)];
        let mut stats = SetStats::new(0);
        collect_frequencies(&refs, &[-5], &kinds, &mut stats);
        assert_eq!(stats.freq[Ability::MeleeBrand.index()], 0);
    }

    #[test]
    fn immunity_and_low_resist_are_distinct() {
        let kinds = catalogue();
        let mut art = Artifact::from_kind(2, kinds.get(2));
        art.raise_resist(Element::Fire, 2);
        art.raise_resist(Element::Cold, 1);
        art.raise_resist(Element::Chaos, 1);
        let stats = collect_one(art, &kinds);

        assert_eq!(stats.freq[Ability::Immunity.index()], 1);
        assert_eq!(stats.freq[Ability::LowResist.index()], 1);
        assert_eq!(stats.freq[Ability::HighResist.index()], 1);
    }
}
