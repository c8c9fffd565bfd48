use crate::item::{Artifact, KindCatalogue};

/// External power evaluation oracle.
///
/// Given a fully-specified candidate, returns a single signed power score.
/// The engine treats the oracle as pure and calls it an unbounded number of
/// times per design attempt; how the score is computed is entirely the
/// caller's business.
pub trait PowerOracle {
    fn power(&self, artifact: &Artifact, kinds: &KindCatalogue) -> i32;
}

impl<F> PowerOracle for F
where
    F: Fn(&Artifact, &KindCatalogue) -> i32,
{
    fn power(&self, artifact: &Artifact, kinds: &KindCatalogue) -> i32 {
        self(artifact, kinds)
    }
}
