pub mod apply;
pub mod baseline;
pub mod designer;
pub mod frequencies;
pub mod log;
pub mod naming;
pub mod rescale;
pub mod stats;
pub mod table;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::GenConfig;
use crate::item::{Artifact, KindCatalogue, ReferenceArtifact};
use crate::names::NameCatalogue;
use crate::power::PowerOracle;

pub use designer::{DesignOutcome, GenContext, design_artifact, lower_band, upper_band};
pub use log::write_set_log;
pub use stats::SetStats;
pub use table::sample_category;

/// One complete generated artifact set, ranked by achieved power,
/// descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSet {
    pub artifacts: Vec<Artifact>,
    pub powers: Vec<i32>,
}

/// Regenerate the entire artifact set from the configured seed.
///
/// Analyzes the reference set, rescales its ability frequencies, then runs
/// the quota, fill, and redesign passes before ranking and naming. The run
/// always produces a set; at worst it is statistically mediocre.
pub fn generate_artifact_set(
    kinds: &KindCatalogue,
    references: &[ReferenceArtifact],
    names: &NameCatalogue,
    oracle: &dyn PowerOracle,
    config: &GenConfig,
) -> GeneratedSet {
    debug_assert!(!kinds.is_empty(), "generation requires a kind catalogue");

    let mut stats = SetStats::new(names.len());
    let powers = baseline::analyze_baseline(references, kinds, oracle, config, &mut stats);
    frequencies::collect_frequencies(references, &powers, kinds, &mut stats);
    rescale::rescale_frequencies(&mut stats, config);

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let ctx = GenContext {
        kinds,
        oracle,
        config,
    };

    let mut outcomes: Vec<DesignOutcome> = Vec::with_capacity(config.slots);

    // First pass: per-family minimum quotas, forced type, derived target.
    // A family with no eligible kinds skips its quota slots.
    for &(family, quota) in &config.quotas {
        for _ in 0..quota {
            if outcomes.len() >= config.slots {
                break;
            }
            match design_artifact(&ctx, &stats, &mut rng, Some(family), None, 0) {
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }
    }
    // Second pass: fill the remaining slots with unconstrained designs. A
    // drawn family can come up empty; give up on the remainder once the
    // misses pile up rather than spin on a degenerate catalogue.
    let mut misses = 0;
    while outcomes.len() < config.slots {
        match design_artifact(&ctx, &stats, &mut rng, None, None, 0) {
            Some(outcome) => outcomes.push(outcome),
            None => {
                misses += 1;
                if misses > config.max_tries {
                    warn!(filled = outcomes.len(), "fill pass leaving set short");
                    break;
                }
            }
        }
    }
    // Third pass: references flagged for redesign, at their authored power.
    for (reference, &power) in references.iter().zip(&powers) {
        if reference.redesign
            && let Some(outcome) = design_artifact(
                &ctx,
                &stats,
                &mut rng,
                None,
                Some(reference.item.kind),
                power.max(1),
            )
        {
            outcomes.push(outcome);
        }
    }

    outcomes.sort_by(|a, b| b.power.cmp(&a.power));
    naming::name_artifacts(&mut outcomes, kinds, names, &mut stats, &mut rng);

    GeneratedSet {
        artifacts: outcomes.iter().map(|o| o.artifact.clone()).collect(),
        powers: outcomes.iter().map(|o| o.power).collect(),
    }
}

/// Turn one already-in-play base item into a random artifact at the given
/// power target.
///
/// Reuses the design loop against the reference set's statistics but keeps
/// the set-wide bookkeeping (name bitmap, slot ranking) untouched; the
/// result gets an invented name.
pub fn redesign_item(
    kinds: &KindCatalogue,
    references: &[ReferenceArtifact],
    oracle: &dyn PowerOracle,
    config: &GenConfig,
    kind_index: usize,
    target: i32,
    seed: u64,
) -> Artifact {
    let mut stats = SetStats::new(0);
    let powers = baseline::analyze_baseline(references, kinds, oracle, config, &mut stats);
    frequencies::collect_frequencies(references, &powers, kinds, &mut stats);
    rescale::rescale_frequencies(&mut stats, config);

    let mut rng = SmallRng::seed_from_u64(seed);
    let ctx = GenContext {
        kinds,
        oracle,
        config,
    };
    let outcome = design_artifact(&ctx, &stats, &mut rng, None, Some(kind_index), target.max(1));
    let mut artifact = match outcome {
        Some(outcome) => outcome.artifact,
        // A forced kind always resolves; this arm is unreachable.
        None => Artifact::from_kind(kind_index, kinds.get(kind_index)),
    };
    artifact.name = crate::names::fallback_name(&mut rng);
    artifact
}
