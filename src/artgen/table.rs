use rand::Rng;

use crate::item::{Ability, ItemFamily};

use super::stats::SetStats;

/// Build a fresh cumulative frequency table restricted to the categories
/// legal for the given base-item family. Supercharge categories are owned
/// by the dedicated supercharge pass and get no mass here.
pub fn build_item_table(stats: &SetStats, family: ItemFamily) -> [u32; Ability::COUNT] {
    let mut table = [0u32; Ability::COUNT];
    let mut running = 0u32;
    for ability in Ability::ALL {
        if ability.applies_to(family) && !ability.is_supercharge() {
            running += stats.freq[ability.index()];
        }
        table[ability.index()] = running;
    }
    table
}

/// Weighted sample from a cumulative table: the first index whose entry is
/// at or above the draw. The draw must be in `[1, table.last()]`.
///
/// Kept as a documented O(n) scan; the tables involved are tens of entries.
pub fn sample_category(table: &[u32], draw: u32) -> Option<usize> {
    table.iter().position(|&mass| mass >= draw)
}

/// Draw one ability category from a per-item cumulative table.
pub fn draw_ability(
    table: &[u32; Ability::COUNT],
    rng: &mut dyn rand::RngCore,
) -> Option<Ability> {
    let total = *table.last()?;
    if total == 0 {
        return None;
    }
    let draw = rng.random_range(1..=total);
    sample_category(table, draw).map(|index| Ability::ALL[index])
}

/// Draw one item family from the rescaled cumulative family table.
pub fn draw_family(stats: &SetStats, rng: &mut dyn rand::RngCore) -> ItemFamily {
    let total = stats.cumulative_family[ItemFamily::COUNT - 1].max(1);
    let draw = rng.random_range(1..=total);
    let index = sample_category(&stats.cumulative_family, draw).unwrap_or(0);
    ItemFamily::ALL[index]
}
