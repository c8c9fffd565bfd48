pub mod artgen;
pub mod config;
pub mod item;
pub mod names;
pub mod power;

pub use artgen::{
    GeneratedSet, SetStats, design_artifact, generate_artifact_set, redesign_item, write_set_log,
};
pub use config::GenConfig;
pub use item::{
    Ability, Artifact, Checkpoint, ItemFamily, ItemKind, KindCatalogue, ReferenceArtifact,
};
pub use names::NameCatalogue;
pub use power::PowerOracle;
