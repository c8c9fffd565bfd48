use crate::config::GenConfig;
use crate::item::{KindCatalogue, ReferenceArtifact};
use crate::power::PowerOracle;

use super::stats::SetStats;

/// Score every reference artifact through the oracle and accumulate the
/// baseline power summaries.
///
/// Artifacts scoring at or above the inhibit ceiling, or negative, are
/// excluded from the mean/variance; negatives are counted separately as the
/// driver for how often new artifacts should be deliberately cursed.
/// Returns the per-slot scores for the later passes.
pub fn analyze_baseline(
    references: &[ReferenceArtifact],
    kinds: &KindCatalogue,
    oracle: &dyn PowerOracle,
    config: &GenConfig,
    stats: &mut SetStats,
) -> Vec<i32> {
    stats.total_refs = references.len() as u32;

    let mut powers = Vec::with_capacity(references.len());
    for reference in references {
        let artifact = &reference.item;
        let power = oracle.power(artifact, kinds);
        powers.push(power);

        let family = kinds.get(artifact.kind).family;
        stats.family_count[family.index()] += 1;

        if power < 0 {
            stats.negative_count += 1;
            continue;
        }
        if power >= config.inhibit_power {
            continue;
        }
        stats.global_power.record(power);
        stats.power_sq_total += i64::from(power) * i64::from(power);
        stats.family_power[family.index()].record(power);
    }
    powers
}
