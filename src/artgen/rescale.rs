use crate::config::GenConfig;
use crate::item::{Ability, ItemFamily};

use super::stats::SetStats;

/// Minimum post-rescale tallies for rare supercharge categories, so they
/// stay reachable even in small reference sets.
const FLOORS: &[(Ability, u32)] = &[
    (Ability::SuperDice, 5),
    (Ability::SuperBlows, 2),
    (Ability::SuperShots, 2),
    (Ability::SuperMight, 2),
    (Ability::SuperSpeed, 2),
    (Ability::SuperAc, 2),
];

/// The item-type subset a category was counted within, or `None` for
/// categories counted across the whole reference set.
fn subset_count(stats: &SetStats, ability: Ability) -> Option<u32> {
    use Ability::*;
    let family = |f: ItemFamily| stats.family_count[f.index()];
    match ability {
        BowShots | BowMight | SuperShots | SuperMight => Some(family(ItemFamily::Bow)),
        MeleeHit | MeleeDam | MeleeWeight => {
            Some(family(ItemFamily::Bow) + family(ItemFamily::Melee))
        }
        MeleeBless | MeleeBrand | MeleeSlay | MeleeBlows | MeleeDice | MeleeAc | SuperDice
        | SuperBlows => Some(family(ItemFamily::Melee)),
        NonweaponHit | NonweaponDam => Some(
            stats
                .total_refs
                .saturating_sub(family(ItemFamily::Bow) + family(ItemFamily::Melee)),
        ),
        BootAc | BootStealth | BootSpeed | BootFeather => Some(family(ItemFamily::Boots)),
        GloveAc | GloveFreeAction | GloveDex => Some(family(ItemFamily::Gloves)),
        HelmAc | HelmSeeInvisible | HelmTelepathy | HelmResistBlind | HelmWis | HelmInt => {
            Some(family(ItemFamily::Helm))
        }
        ShieldAc | ShieldLowResist => Some(family(ItemFamily::Shield)),
        CloakAc | CloakStealth => Some(family(ItemFamily::Cloak)),
        BodyAc | BodyStealth | BodyCon | BodyLowResist | BodyHighResist | BodyHoldLife => {
            Some(family(ItemFamily::Body))
        }
        _ => None,
    }
}

/// Normalize item-type-restricted tallies onto the whole-set basis, apply
/// the supercharge floors, undo the aggravate double count, and convert
/// both the ability and family tables to cumulative form.
pub fn rescale_frequencies(stats: &mut SetStats, config: &GenConfig) {
    let total = u64::from(stats.total_refs);

    for ability in Ability::ALL {
        if let Some(subset) = subset_count(stats, ability) {
            // A zero subset means the category had nothing to count; the
            // substitute divisor of 1 keeps the arithmetic defined.
            let divisor = u64::from(subset.max(1));
            let raw = u64::from(stats.freq[ability.index()]);
            stats.freq[ability.index()] = (raw * total / divisor) as u32;
        }
    }

    for &(ability, floor) in FLOORS {
        let slot = &mut stats.freq[ability.index()];
        *slot = (*slot).max(floor);
    }

    // Aggravate is tallied by both the per-family dispatch and the misc
    // counter; halve it back to single weight.
    stats.freq[Ability::Aggravate.index()] /= 2;

    let mut running = 0u32;
    for ability in Ability::ALL {
        running += stats.freq[ability.index()];
        stats.cumulative_freq[ability.index()] = running;
    }

    // Family table for the fill pass: melee gets the inherited weight
    // reduction, and every family keeps a floor of 1 so forced types stay
    // reachable in degenerate reference sets.
    let (num, den) = config.melee_family_weight;
    let mut running = 0u32;
    for family in ItemFamily::ALL {
        let mut count = stats.family_count[family.index()];
        if family == ItemFamily::Melee {
            count = count * num / den.max(1);
        }
        running += count.max(1);
        stats.cumulative_family[family.index()] = running;
    }
}
