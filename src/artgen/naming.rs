use rand::Rng;

use crate::item::{Artifact, ItemFamily, KindCatalogue};
use crate::names::{NameCatalogue, fallback_name};

use super::designer::DesignOutcome;
use super::stats::SetStats;

const START_RADIUS: usize = 2;
const RADIUS_STEP: usize = 2;

/// Assign a name to every outcome, which must arrive ranked by achieved
/// power, descending. Quest-item kinds are skipped. Every consumed curated
/// name is marked in the aggregate's bitmap and never reused.
pub fn name_artifacts(
    outcomes: &mut [DesignOutcome],
    kinds: &KindCatalogue,
    names: &NameCatalogue,
    stats: &mut SetStats,
    rng: &mut dyn rand::RngCore,
) {
    let good = names.good_indices();
    let bad = names.bad_indices();
    let ranked = outcomes.len().max(1);

    for rank in 0..outcomes.len() {
        let kind = kinds.get(outcomes[rank].artifact.kind);
        if kind.quest_item {
            continue;
        }
        let family = kind.family;
        let cursed = outcomes[rank].power < 0 || outcomes[rank].bad;
        let picked = if cursed {
            pick_bad(&bad, names, stats, family, rng)
        } else {
            pick_good(
                &good,
                names,
                stats,
                &outcomes[rank].artifact,
                family,
                rank,
                ranked,
                rng,
            )
        };
        outcomes[rank].artifact.name = match picked {
            Some(index) => {
                stats.names_used[index] = true;
                names.entries[index].text.clone()
            }
            None => fallback_name(rng),
        };
    }
}

/// Uniform pick among unused bad-pool entries matching the item type.
fn pick_bad(
    bad: &[usize],
    names: &NameCatalogue,
    stats: &SetStats,
    family: ItemFamily,
    rng: &mut dyn rand::RngCore,
) -> Option<usize> {
    let pool: Vec<usize> = bad
        .iter()
        .copied()
        .filter(|&index| !stats.names_used[index] && names.entries[index].applies_to(family))
        .collect();
    if pool.is_empty() {
        None
    } else {
        Some(pool[rng.random_range(0..pool.len())])
    }
}

/// Map the artifact's power rank onto the good pool's own rank range, then
/// search a widening window around that position, weighting entries closer
/// to the target position more heavily.
#[allow(clippy::too_many_arguments)]
fn pick_good(
    good: &[usize],
    names: &NameCatalogue,
    stats: &SetStats,
    artifact: &Artifact,
    family: ItemFamily,
    rank: usize,
    ranked: usize,
    rng: &mut dyn rand::RngCore,
) -> Option<usize> {
    if good.is_empty() {
        return None;
    }
    let target = (rank * good.len() / ranked).min(good.len() - 1);
    let mut radius = START_RADIUS;

    loop {
        let low = target.saturating_sub(radius);
        let high = (target + radius).min(good.len() - 1);

        let mut pool: Vec<(usize, u32)> = Vec::new();
        for position in low..=high {
            let index = good[position];
            if stats.names_used[index] {
                continue;
            }
            let entry = &names.entries[index];
            if !entry.applies_to(family) || !entry.satisfied_by(artifact) {
                continue;
            }
            let distance = position.abs_diff(target) as u32;
            pool.push((index, radius as u32 + 1 - distance));
        }

        if !pool.is_empty() {
            let total: u32 = pool.iter().map(|(_, w)| w).sum();
            let mut roll = rng.random_range(0..total);
            for (index, weight) in &pool {
                if roll < *weight {
                    return Some(*index);
                }
                roll -= weight;
            }
        }
        if low == 0 && high == good.len() - 1 {
            return None;
        }
        radius += RADIUS_STEP;
    }
}
