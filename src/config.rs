use crate::item::ItemFamily;

/// Configuration for one artifact-set generation run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// RNG seed; the same seed always reproduces the same set.
    pub seed: u64,
    /// Number of artifact slots to fill (quota pass + fill pass).
    pub slots: usize,
    /// Minimum number of artifacts per item family, consumed first.
    pub quotas: Vec<(ItemFamily, usize)>,
    /// One-in-N chance per design attempt of a deliberately bad artifact.
    pub bad_rarity: u32,
    /// Iteration budget for the main design loop.
    pub max_tries: u32,
    /// Attempt budget for the base-kind search.
    pub kind_search_tries: u32,
    /// Restart budget when an accepted artifact turns out boring.
    pub boring_retries: u32,
    /// Reference artifacts scoring at or above this are excluded from the
    /// baseline mean/variance.
    pub inhibit_power: i32,
    /// Frequency ratio applied to the melee family tally during rescaling.
    /// Inherited tuning with no documented rationale; (1, 1) disables it.
    pub melee_family_weight: (u32, u32),
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            slots: 30,
            quotas: vec![
                (ItemFamily::Melee, 3),
                (ItemFamily::Bow, 1),
                (ItemFamily::Body, 2),
                (ItemFamily::Boots, 1),
                (ItemFamily::Gloves, 1),
                (ItemFamily::Helm, 1),
                (ItemFamily::Shield, 1),
                (ItemFamily::Cloak, 1),
            ],
            bad_rarity: 20,
            max_tries: 200,
            kind_search_tries: 30,
            boring_retries: 20,
            inhibit_power: 1000,
            melee_family_weight: (2, 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quotas_fit_in_slots() {
        let config = GenConfig::default();
        let quota_total: usize = config.quotas.iter().map(|(_, n)| n).sum();
        assert!(quota_total <= config.slots);
        assert!(config.bad_rarity > 0);
        assert!(config.max_tries > 0);
        assert_ne!(config.melee_family_weight.1, 0);
    }
}
