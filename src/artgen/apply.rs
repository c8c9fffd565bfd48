use rand::Rng;

use crate::item::{
    Ability, Artifact, Element, Fault, Flag, ItemKind, Modifier, Stat, random_brand, random_slay,
};

use super::frequencies::{DICE_SUPER, SPEED_SUPER};
use super::table::draw_ability;

const MAX_DICE: u8 = 9;
const MAX_BLOWS: i32 = 3;

/// Draw one category from the candidate's table and apply it, then run the
/// contradiction pass. Returns the category applied, if any.
pub fn add_random_ability(
    artifact: &mut Artifact,
    kind: &ItemKind,
    table: &[u32; Ability::COUNT],
    rng: &mut dyn rand::RngCore,
) -> Option<Ability> {
    let ability = draw_ability(table, rng)?;
    apply_ability(ability, artifact, kind, rng);
    remove_contradictions(artifact);
    Some(ability)
}

/// Category-specific mutation of the candidate.
pub fn apply_ability(
    ability: Ability,
    artifact: &mut Artifact,
    kind: &ItemKind,
    rng: &mut dyn rand::RngCore,
) {
    use Ability::*;
    match ability {
        BowShots => artifact.add_mod(Modifier::Shots, 1),
        BowMight => artifact.add_mod(Modifier::Might, 1),
        SuperShots => artifact.set_mod(Modifier::Shots, 2),
        SuperMight => artifact.set_mod(Modifier::Might, 2),

        MeleeHit => artifact.to_hit += rng.random_range(1..=4),
        MeleeDam => artifact.to_dam += rng.random_range(1..=4),
        NonweaponHit => artifact.to_hit += rng.random_range(1..=3),
        NonweaponDam => artifact.to_dam += rng.random_range(1..=3),
        MeleeBless => {
            artifact.flags.insert(Flag::Blessed);
        }
        MeleeBrand => {
            if let Some(brand) = random_brand(&artifact.brands, rng) {
                artifact.brands.insert(brand);
            }
        }
        MeleeSlay => {
            if let Some(slay) = random_slay(&artifact.slays, rng) {
                artifact.slays.insert(slay);
            }
        }
        MeleeBlows => {
            if artifact.mod_value(Modifier::Blows) < MAX_BLOWS {
                artifact.add_mod(Modifier::Blows, 1);
            }
        }
        SuperBlows => artifact.set_mod(Modifier::Blows, 2),
        MeleeDice => artifact.dd = (artifact.dd + 1).min(MAX_DICE),
        SuperDice => artifact.dd = (kind.dd + DICE_SUPER).min(MAX_DICE),
        MeleeWeight => artifact.weight = (artifact.weight * 9 / 10).max(1),

        MeleeAc | BootAc | GloveAc | HelmAc | ShieldAc | CloakAc | BodyAc | GeneralAc => {
            artifact.to_ac += rng.random_range(1..=4);
        }
        SuperAc => artifact.to_ac += 8 + rng.random_range(1..=7),

        BootStealth | CloakStealth | BodyStealth | Stealth => {
            artifact.add_mod(Modifier::Stealth, 1);
        }
        BootSpeed | Speed => artifact.add_mod(Modifier::Speed, 1),
        SuperSpeed => {
            let boosted = SPEED_SUPER + rng.random_range(0..=4);
            if artifact.mod_value(Modifier::Speed) < boosted {
                artifact.set_mod(Modifier::Speed, boosted);
            }
        }

        BootFeather | FeatherFall => {
            artifact.flags.insert(Flag::FeatherFall);
        }
        GloveFreeAction | FreeAction => {
            artifact.flags.insert(Flag::FreeAction);
        }
        GloveDex => artifact.add_mod(Modifier::Dex, 1),
        HelmSeeInvisible | SeeInvisible => {
            artifact.flags.insert(Flag::SeeInvisible);
        }
        HelmTelepathy | Telepathy => {
            artifact.flags.insert(Flag::Telepathy);
        }
        HelmResistBlind => artifact.raise_resist(Element::Blindness, 1),
        HelmWis => artifact.add_mod(Modifier::Wis, 1),
        HelmInt => artifact.add_mod(Modifier::Int, 1),
        BodyCon => artifact.add_mod(Modifier::Con, 1),
        BodyHoldLife | HoldLife => {
            artifact.flags.insert(Flag::HoldLife);
        }

        ShieldLowResist | BodyLowResist | LowResist => {
            let element = Element::LOW[rng.random_range(0..Element::LOW.len())];
            artifact.raise_resist(element, 1);
        }
        BodyHighResist | HighResist => {
            let element = Element::HIGH[rng.random_range(0..Element::HIGH.len())];
            artifact.raise_resist(element, 1);
        }
        Immunity => {
            let element = Element::LOW[rng.random_range(0..Element::LOW.len())];
            artifact.raise_resist(element, 2);
        }

        Stat => {
            let stat = crate::item::Stat::ALL[rng.random_range(0..crate::item::Stat::ALL.len())];
            artifact.add_mod(Modifier::from_stat(stat), 1);
        }
        Sustain => {
            let stat = crate::item::Stat::ALL[rng.random_range(0..crate::item::Stat::ALL.len())];
            artifact.sustains.insert(stat);
        }
        SlowDigestion => {
            artifact.flags.insert(Flag::SlowDigestion);
        }
        Regeneration => {
            artifact.flags.insert(Flag::Regeneration);
        }
        Light => {
            artifact.flags.insert(Flag::Light);
        }
        Aggravate => {
            artifact.flags.insert(Flag::Aggravate);
        }
        Activation => {
            let pool: Vec<crate::item::Activation> = crate::item::Activation::POOL
                .into_iter()
                .filter(|a| !a.redundant_for(artifact))
                .collect();
            if !pool.is_empty() {
                artifact.activation = Some(pool[rng.random_range(0..pool.len())]);
            }
        }
    }
}

/// Strip mutually contradictory properties. Removal only, so the pass is
/// idempotent.
pub fn remove_contradictions(artifact: &mut Artifact) {
    if artifact.flags.contains(&Flag::Aggravate) && artifact.mod_value(Modifier::Stealth) > 0 {
        artifact.mods.remove(&Modifier::Stealth);
    }
    for stat in Stat::ALL {
        if artifact.mod_value(Modifier::from_stat(stat)) < 0 {
            artifact.sustains.remove(&stat);
        }
    }
    if artifact.flags.contains(&Flag::DrainExp) {
        artifact.flags.remove(&Flag::HoldLife);
    }
    let kept: Vec<Fault> = artifact
        .faults
        .iter()
        .copied()
        .filter(|fault| !fault.conflicts(artifact))
        .collect();
    artifact.faults = kept;
    if let Some(activation) = artifact.activation
        && activation.redundant_for(artifact)
    {
        artifact.activation = None;
    }
}

/// Damage pass for deliberately bad artifacts: invert some positive combat
/// bonuses and append one or two faults.
pub fn damage_artifact(artifact: &mut Artifact, rng: &mut dyn rand::RngCore) {
    if artifact.to_hit > 0 && rng.random_bool(0.5) {
        artifact.to_hit = -artifact.to_hit;
    }
    if artifact.to_dam > 0 && rng.random_bool(0.5) {
        artifact.to_dam = -artifact.to_dam;
    }
    if artifact.to_ac > 0 && rng.random_bool(0.5) {
        artifact.to_ac = -artifact.to_ac;
    }
    let positive: Vec<Modifier> = artifact
        .mods
        .iter()
        .filter(|(_, v)| **v > 0)
        .map(|(m, _)| *m)
        .collect();
    if !positive.is_empty() && rng.random_bool(0.5) {
        let modifier = positive[rng.random_range(0..positive.len())];
        let value = artifact.mod_value(modifier);
        artifact.set_mod(modifier, -value);
    }

    let new_faults = rng.random_range(1..=2);
    for _ in 0..new_faults {
        let fault = Fault::ALL[rng.random_range(0..Fault::ALL.len())];
        artifact.add_fault(fault);
    }
    remove_contradictions(artifact);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Activation, ItemFamily, KindCatalogue};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sword() -> (KindCatalogue, Artifact) {
        let mut kind = ItemKind::plain(ItemFamily::Melee, "Long Sword", 130, 10);
        kind.dd = 2;
        kind.ds = 5;
        let kinds = KindCatalogue::new(vec![kind]);
        let art = Artifact::from_kind(0, kinds.get(0));
        (kinds, art)
    }

    #[test]
    fn aggravate_clears_stealth() {
        let (_, mut art) = sword();
        art.set_mod(Modifier::Stealth, 3);
        art.flags.insert(Flag::Aggravate);
        remove_contradictions(&mut art);
        assert_eq!(art.mod_value(Modifier::Stealth), 0);
    }

    #[test]
    fn negative_stat_drops_sustain() {
        let (_, mut art) = sword();
        art.sustains.insert(Stat::Str);
        art.sustains.insert(Stat::Dex);
        art.set_mod(Modifier::Str, -2);
        remove_contradictions(&mut art);
        assert!(!art.sustains.contains(&Stat::Str));
        assert!(art.sustains.contains(&Stat::Dex));
    }

    #[test]
    fn drain_exp_removes_hold_life() {
        let (_, mut art) = sword();
        art.flags.insert(Flag::HoldLife);
        art.flags.insert(Flag::DrainExp);
        remove_contradictions(&mut art);
        assert!(!art.flags.contains(&Flag::HoldLife));
    }

    #[test]
    fn conflicting_faults_stripped() {
        let (_, mut art) = sword();
        art.flags.insert(Flag::SlowDigestion);
        art.faults.push(Fault::Hunger);
        art.faults.push(Fault::Teleportation);
        remove_contradictions(&mut art);
        assert_eq!(art.faults, vec![Fault::Teleportation]);
    }

    #[test]
    fn redundant_activation_removed() {
        let (_, mut art) = sword();
        art.raise_resist(Element::Fire, 1);
        art.activation = Some(Activation::Resist(Element::Fire));
        remove_contradictions(&mut art);
        assert_eq!(art.activation, None);

        art.activation = Some(Activation::FireBolt);
        remove_contradictions(&mut art);
        assert_eq!(art.activation, Some(Activation::FireBolt));
    }

    #[test]
    fn contradiction_pass_is_idempotent() {
        let (_, mut art) = sword();
        art.set_mod(Modifier::Stealth, 3);
        art.set_mod(Modifier::Int, -1);
        art.sustains.insert(Stat::Int);
        art.flags.insert(Flag::Aggravate);
        art.flags.insert(Flag::DrainExp);
        art.flags.insert(Flag::HoldLife);
        art.faults.push(Fault::Noise);

        remove_contradictions(&mut art);
        let once = art.clone();
        remove_contradictions(&mut art);
        assert_eq!(art, once);
    }

    #[test]
    fn dice_never_exceed_cap() {
        let (kinds, mut art) = sword();
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..20 {
            apply_ability(Ability::MeleeDice, &mut art, kinds.get(0), &mut rng);
        }
        assert_eq!(art.dd, MAX_DICE);
        apply_ability(Ability::SuperDice, &mut art, kinds.get(0), &mut rng);
        assert!(art.dd <= MAX_DICE);
    }

    #[test]
    fn super_speed_never_lowers_speed() {
        let (kinds, mut art) = sword();
        let mut rng = SmallRng::seed_from_u64(8);
        art.set_mod(Modifier::Speed, 12);
        apply_ability(Ability::SuperSpeed, &mut art, kinds.get(0), &mut rng);
        assert_eq!(art.mod_value(Modifier::Speed), 12);
    }

    #[test]
    fn damage_pass_adds_faults() {
        let (_, mut art) = sword();
        art.to_hit = 8;
        art.to_dam = 8;
        let mut rng = SmallRng::seed_from_u64(5);
        damage_artifact(&mut art, &mut rng);
        assert!(!art.faults.is_empty());
        assert!(art.faults.len() <= 2);
    }
}
