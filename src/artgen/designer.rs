use rand::Rng;
use tracing::warn;

use crate::config::GenConfig;
use crate::item::{Ability, Artifact, Flag, ItemFamily, KindCatalogue};
use crate::power::PowerOracle;

use super::apply::{add_random_ability, apply_ability, damage_artifact, remove_contradictions};
use super::stats::SetStats;
use super::table::{build_item_table, draw_family};

/// Everything a design-loop invocation needs, threaded explicitly instead
/// of living in ambient globals.
pub struct GenContext<'a> {
    pub kinds: &'a KindCatalogue,
    pub oracle: &'a dyn PowerOracle,
    pub config: &'a GenConfig,
}

/// One finished artifact with its achieved power.
#[derive(Debug, Clone)]
pub struct DesignOutcome {
    pub artifact: Artifact,
    pub power: i32,
    pub bad: bool,
}

/// Acceptance band bounds around a power target.
pub fn upper_band(target: i32) -> i32 {
    target * 23 / 20 + 1
}

pub fn lower_band(target: i32) -> i32 {
    target * 19 / 20
}

/// Design one artifact toward a power target.
///
/// A non-positive `requested_target` means "derive one from the family's
/// own baseline statistics". Accepted-but-boring artifacts restart the
/// whole process, up to the configured budget; budget exhaustion is a
/// logged warning, never a failure. Returns `None` only when the requested
/// family has no eligible base kinds at all.
pub fn design_artifact(
    ctx: &GenContext,
    stats: &SetStats,
    rng: &mut dyn rand::RngCore,
    forced_family: Option<ItemFamily>,
    forced_kind: Option<usize>,
    requested_target: i32,
) -> Option<DesignOutcome> {
    let mut outcome =
        design_attempt(ctx, stats, rng, forced_family, forced_kind, requested_target)?;
    for _ in 0..ctx.config.boring_retries {
        let kind = ctx.kinds.get(outcome.artifact.kind);
        if outcome.artifact.is_interesting(kind) {
            return Some(finalize(outcome));
        }
        outcome = design_attempt(ctx, stats, rng, forced_family, forced_kind, requested_target)?;
    }
    let kind = ctx.kinds.get(outcome.artifact.kind);
    if !outcome.artifact.is_interesting(kind) {
        warn!(
            kind = %kind.name,
            "boring-check budget exhausted; keeping last attempt"
        );
    }
    Some(finalize(outcome))
}

fn design_attempt(
    ctx: &GenContext,
    stats: &SetStats,
    rng: &mut dyn rand::RngCore,
    forced_family: Option<ItemFamily>,
    forced_kind: Option<usize>,
    requested_target: i32,
) -> Option<DesignOutcome> {
    let family = forced_family
        .or_else(|| forced_kind.map(|k| ctx.kinds.get(k).family))
        .unwrap_or_else(|| draw_family(stats, rng));
    let target = if requested_target > 0 {
        requested_target
    } else {
        derive_target(stats, family, rng)
    };
    let kind_index = match forced_kind {
        Some(index) => index,
        None => choose_base_kind(ctx, rng, family, target)?,
    };
    let kind = ctx.kinds.get(kind_index);
    let mut artifact = Artifact::from_kind(kind_index, kind);
    let table = build_item_table(stats, kind.family);

    try_supercharges(ctx, stats, &mut artifact, kind_index, target, rng);

    let mut bad = roll_bad(stats, ctx.config, rng);
    let mut power = ctx.oracle.power(&artifact, ctx.kinds);
    let mut accepted = false;

    for _ in 0..ctx.config.max_tries {
        let saved = artifact.checkpoint();
        let saved_power = power;

        if add_random_ability(&mut artifact, kind, &table, rng).is_none() {
            // Nothing legal left to add; keep what we have.
            break;
        }
        if bad {
            damage_artifact(&mut artifact, rng);
            if rng.random_range(0..4) == 0 {
                bad = false;
            }
        }
        power = ctx.oracle.power(&artifact, ctx.kinds);

        if power < 0 && bad {
            accepted = true;
            break;
        }
        if power > upper_band(target) {
            artifact.restore(&saved);
            power = saved_power;
            continue;
        }
        if power >= lower_band(target) {
            accepted = true;
            break;
        }
    }

    if !accepted {
        warn!(
            target,
            power,
            kind = %kind.name,
            "design budget exhausted; keeping best-effort artifact"
        );
    }

    Some(DesignOutcome {
        artifact,
        power,
        bad,
    })
}

/// Whether this attempt designs a deliberately bad artifact. The cursed
/// share of the reference set drives the probability once it exceeds the
/// configured one-in-`bad_rarity` floor.
fn roll_bad(stats: &SetStats, config: &GenConfig, rng: &mut dyn rand::RngCore) -> bool {
    if stats.total_refs > 0 && stats.negative_count * config.bad_rarity > stats.total_refs {
        rng.random_range(0..stats.total_refs) < stats.negative_count
    } else {
        rng.random_range(0..config.bad_rarity) == 0
    }
}

/// Baseline-derived target: family average jittered by one standard
/// deviation of the reference set.
fn derive_target(stats: &SetStats, family: ItemFamily, rng: &mut dyn rand::RngCore) -> i32 {
    let base = stats.family_target(family);
    let sd = stats.power_sd();
    let jitter = if sd > 0 { rng.random_range(-sd..=sd) } else { 0 };
    (base + jitter).max(1)
}

/// Pick a base kind whose intrinsic power sits comfortably below the
/// target, leaving room for added abilities. `None` means the family has
/// no eligible kinds at all; the slot is skipped rather than filled with
/// an off-family base.
fn choose_base_kind(
    ctx: &GenContext,
    rng: &mut dyn rand::RngCore,
    family: ItemFamily,
    target: i32,
) -> Option<usize> {
    let mut fallback = None;
    for _ in 0..ctx.config.kind_search_tries {
        let Some(index) = ctx.kinds.random_in_family(family, rng) else {
            warn!(family = family.tag(), "family has no eligible base kinds");
            return None;
        };
        fallback = Some(index);
        let base = Artifact::from_kind(index, ctx.kinds.get(index));
        if ctx.oracle.power(&base, ctx.kinds) < target * 7 / 10 {
            return Some(index);
        }
    }
    warn!(
        family = family.tag(),
        target, "no base kind comfortably below target; proceeding anyway"
    );
    fallback
}

/// One weighted chance at each applicable supercharge category, rolled
/// back if the result overshoots the acceptable ceiling. High-power
/// candidates additionally risk aggravation as a drawback.
fn try_supercharges(
    ctx: &GenContext,
    stats: &SetStats,
    artifact: &mut Artifact,
    kind_index: usize,
    target: i32,
    rng: &mut dyn rand::RngCore,
) {
    let kind = ctx.kinds.get(kind_index);
    let total = stats.cumulative_freq[Ability::COUNT - 1].max(1);

    for ability in Ability::ALL {
        if !ability.is_supercharge() || !ability.applies_to(kind.family) {
            continue;
        }
        let weight = stats.freq[ability.index()];
        if weight == 0 || rng.random_range(0..total) >= weight {
            continue;
        }
        let saved = artifact.checkpoint();
        apply_ability(ability, artifact, kind, rng);
        remove_contradictions(artifact);
        if ctx.oracle.power(artifact, ctx.kinds) > upper_band(target) {
            artifact.restore(&saved);
        }
    }

    if target > stats.mean_power().max(1) * 3 / 2 {
        let weight = stats.freq[Ability::Aggravate.index()];
        if weight > 0 && rng.random_range(0..total) < weight {
            artifact.flags.insert(Flag::Aggravate);
            remove_contradictions(artifact);
        }
    }
}

/// Allocation fields computed on acceptance.
fn finalize(mut outcome: DesignOutcome) -> DesignOutcome {
    let kind_level = outcome.artifact.level as i32;
    let power = outcome.power;
    let level = (power / 2).max(kind_level).clamp(1, 100);
    let artifact = &mut outcome.artifact;
    artifact.level = level as u32;
    artifact.alloc_prob = (80 - power / 5).clamp(1, 100) as u32;
    artifact.min_depth = level as u32 / 2;
    artifact.max_depth = 127;
    artifact.cost = i64::from(power.max(0)) * 100;
    outcome
}
