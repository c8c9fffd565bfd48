use crate::item::{Ability, ItemFamily};

/// Per-family baseline power summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerSummary {
    pub count: u32,
    pub min: i32,
    pub max: i32,
    pub total: i64,
}

impl PowerSummary {
    pub fn record(&mut self, power: i32) {
        if self.count == 0 {
            self.min = power;
            self.max = power;
        } else {
            self.min = self.min.min(power);
            self.max = self.max.max(power);
        }
        self.count += 1;
        self.total += i64::from(power);
    }

    pub fn avg(&self) -> i32 {
        if self.count == 0 {
            0
        } else {
            (self.total / i64::from(self.count)) as i32
        }
    }
}

/// The statistics aggregate: one long-lived record per generation run,
/// built by the baseline/collect/rescale passes and then read by every
/// design-loop invocation.
#[derive(Debug, Clone)]
pub struct SetStats {
    /// Per-ability tallies; raw after collection, rescaled in place by the
    /// rescaler.
    pub freq: [u32; Ability::COUNT],
    /// Cumulative form of `freq`, for weighted sampling.
    pub cumulative_freq: [u32; Ability::COUNT],
    /// Reference artifacts per item family.
    pub family_count: [u32; ItemFamily::COUNT],
    /// Cumulative adjusted family tallies, for drawing a family in the
    /// fill pass.
    pub cumulative_family: [u32; ItemFamily::COUNT],
    pub family_power: [PowerSummary; ItemFamily::COUNT],
    pub global_power: PowerSummary,
    /// Sum of squared included powers, for the variance.
    pub power_sq_total: i64,
    /// Reference artifacts with negative (cursed) power, tracked separately.
    pub negative_count: u32,
    pub total_refs: u32,
    /// One slot per name-catalogue entry; consumed names are never reused.
    pub names_used: Vec<bool>,
}

impl SetStats {
    pub fn new(name_count: usize) -> SetStats {
        SetStats {
            freq: [0; Ability::COUNT],
            cumulative_freq: [0; Ability::COUNT],
            family_count: [0; ItemFamily::COUNT],
            cumulative_family: [0; ItemFamily::COUNT],
            family_power: [PowerSummary::default(); ItemFamily::COUNT],
            global_power: PowerSummary::default(),
            power_sq_total: 0,
            negative_count: 0,
            total_refs: 0,
            names_used: vec![false; name_count],
        }
    }

    pub fn tally(&mut self, ability: Ability, amount: u32) {
        self.freq[ability.index()] += amount;
    }

    pub fn mean_power(&self) -> i32 {
        self.global_power.avg()
    }

    pub fn power_variance(&self) -> i64 {
        let n = i64::from(self.global_power.count);
        if n == 0 {
            return 0;
        }
        let mean = self.global_power.total / n;
        (self.power_sq_total / n - mean * mean).max(0)
    }

    pub fn power_sd(&self) -> i32 {
        (self.power_variance() as f64).sqrt() as i32
    }

    /// Baseline-derived power target for a forced family: the family's own
    /// average where it has data, the global mean otherwise.
    pub fn family_target(&self, family: ItemFamily) -> i32 {
        let summary = self.family_power[family.index()];
        if summary.count > 0 {
            summary.avg()
        } else {
            self.mean_power()
        }
    }
}
