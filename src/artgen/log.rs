use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::item::{Artifact, Element, KindCatalogue};

use super::GeneratedSet;

/// Write the generated set as a flat `key: value`-per-line text log, one
/// blank-line-separated block per artifact, suitable for re-parsing as
/// static data.
pub fn write_set_log(set: &GeneratedSet, kinds: &KindCatalogue, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (artifact, &power) in set.artifacts.iter().zip(&set.powers) {
        write_artifact(&mut writer, artifact, kinds, power)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

fn write_artifact(
    writer: &mut impl Write,
    artifact: &Artifact,
    kinds: &KindCatalogue,
    power: i32,
) -> io::Result<()> {
    let kind = kinds.get(artifact.kind);
    writeln!(writer, "name: {}", artifact.name)?;
    writeln!(writer, "base: {}", kind.name)?;
    writeln!(writer, "family: {}", kind.family.tag())?;
    writeln!(writer, "power: {power}")?;
    writeln!(writer, "level: {}", artifact.level)?;
    writeln!(writer, "weight: {}", artifact.weight)?;
    writeln!(writer, "cost: {}", artifact.cost)?;
    writeln!(writer, "alloc-prob: {}", artifact.alloc_prob)?;
    writeln!(writer, "min-depth: {}", artifact.min_depth)?;
    writeln!(writer, "max-depth: {}", artifact.max_depth)?;
    writeln!(
        writer,
        "combat: {},{},{} {}d{}",
        artifact.to_hit, artifact.to_dam, artifact.to_ac, artifact.dd, artifact.ds
    )?;

    let flags: Vec<&str> = artifact.flags.iter().map(|f| f.token()).collect();
    writeln!(writer, "flags: {}", flags.join(" "))?;

    let mods: Vec<String> = artifact
        .mods
        .iter()
        .map(|(m, v)| format!("{}:{v}", m.name()))
        .collect();
    writeln!(writer, "mods: {}", mods.join(" "))?;

    let resists: Vec<String> = Element::LOW
        .into_iter()
        .chain(Element::HIGH)
        .filter_map(|el| {
            let level = artifact.resist_level(el);
            (level > 0).then(|| format!("{}:{level}", el.token()))
        })
        .collect();
    writeln!(writer, "resists: {}", resists.join(" "))?;

    let sustains: Vec<&str> = artifact.sustains.iter().map(|s| s.name()).collect();
    writeln!(writer, "sustains: {}", sustains.join(" "))?;

    let slays: Vec<String> = artifact
        .slays
        .iter()
        .map(|s| format!("{}:{}", s.token(), s.multiplier()))
        .collect();
    writeln!(writer, "slays: {}", slays.join(" "))?;

    let brands: Vec<String> = artifact
        .brands
        .iter()
        .map(|b| format!("{}:{}", b.token(), b.multiplier()))
        .collect();
    writeln!(writer, "brands: {}", brands.join(" "))?;

    let faults: Vec<&str> = artifact.faults.iter().map(|f| f.name()).collect();
    writeln!(writer, "faults: {}", faults.join(", "))?;

    match artifact.activation {
        Some(activation) => writeln!(writer, "activation: {}", activation.name())?,
        None => writeln!(writer, "activation:")?,
    }
    Ok(())
}
