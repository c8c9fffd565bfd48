pub mod syllable;

use crate::item::{Artifact, Brand, Element, Flag, ItemFamily, Slay};

pub use syllable::{fallback_name, random_word};

/// A property an artifact must exhibit to justify a curated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Flag(Flag),
    Resist(Element, u8),
    Immune(Element),
    Brand(Brand),
    Slay(Slay),
}

impl Requirement {
    /// Parse one requirement token from a name-list `R:` line.
    pub fn parse(token: &str) -> Result<Requirement, String> {
        if let Some(rest) = token.strip_prefix("RES_") {
            let (element, level) = rest
                .split_once(':')
                .ok_or_else(|| format!("malformed resist requirement '{token}'"))?;
            let element = Element::from_token(element)
                .ok_or_else(|| format!("unknown element in '{token}'"))?;
            let level: u8 = level
                .parse()
                .map_err(|_| format!("bad resist level in '{token}'"))?;
            return Ok(Requirement::Resist(element, level));
        }
        if let Some(rest) = token.strip_prefix("IMM_") {
            let element = Element::from_token(rest)
                .ok_or_else(|| format!("unknown element in '{token}'"))?;
            return Ok(Requirement::Immune(element));
        }
        if let Some(rest) = token.strip_prefix("BRAND_") {
            let brand =
                Brand::from_token(rest).ok_or_else(|| format!("unknown brand in '{token}'"))?;
            return Ok(Requirement::Brand(brand));
        }
        if let Some(rest) = token.strip_prefix("SLAY_") {
            let slay =
                Slay::from_token(rest).ok_or_else(|| format!("unknown slay in '{token}'"))?;
            return Ok(Requirement::Slay(slay));
        }
        Flag::from_token(token)
            .map(Requirement::Flag)
            .ok_or_else(|| format!("unknown requirement token '{token}'"))
    }

    pub fn satisfied_by(&self, artifact: &Artifact) -> bool {
        match *self {
            Requirement::Flag(flag) => artifact.flags.contains(&flag),
            Requirement::Resist(element, level) => artifact.resist_level(element) >= level,
            Requirement::Immune(element) => artifact.resist_level(element) >= 2,
            Requirement::Brand(brand) => artifact.brands.contains(&brand),
            Requirement::Slay(slay) => artifact.slays.contains(&slay),
        }
    }
}

/// One curated name, immutable once loaded.
#[derive(Debug, Clone)]
pub struct NameEntry {
    pub text: String,
    /// Member of the cursed-flavor pool rather than the good pool.
    pub bad: bool,
    /// Applicable family tags; empty means any item type.
    pub families: Vec<ItemFamily>,
    /// Properties justifying thematic use; empty means unconditional. A
    /// non-empty list is satisfied by matching at least one entry.
    pub requirements: Vec<Requirement>,
}

impl NameEntry {
    pub fn applies_to(&self, family: ItemFamily) -> bool {
        self.families.is_empty() || self.families.contains(&family)
    }

    pub fn satisfied_by(&self, artifact: &Artifact) -> bool {
        self.requirements.is_empty() || self.requirements.iter().any(|r| r.satisfied_by(artifact))
    }
}

/// The curated name catalogue. Good-pool entries keep their file order,
/// which doubles as the catalogue's own power ranking.
#[derive(Debug, Clone, Default)]
pub struct NameCatalogue {
    pub entries: Vec<NameEntry>,
}

impl NameCatalogue {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the line-oriented name-list format.
    ///
    /// `N:` opens an entry; `B:`, `T:`, and `R:` lines refine the current
    /// one. `#` comments and blank lines are skipped. Any unknown line kind
    /// or token is a hard parse error; corrupt name data aborts startup.
    pub fn parse(text: &str) -> Result<NameCatalogue, String> {
        let mut entries: Vec<NameEntry> = Vec::new();

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let number = number + 1;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (prefix, rest) = line
                .split_once(':')
                .ok_or_else(|| format!("line {number}: expected '<kind>:' prefix"))?;
            match prefix {
                "N" => {
                    if rest.trim().is_empty() {
                        return Err(format!("line {number}: empty name"));
                    }
                    entries.push(NameEntry {
                        text: rest.trim().to_string(),
                        bad: false,
                        families: Vec::new(),
                        requirements: Vec::new(),
                    });
                }
                "B" => {
                    let entry = entries
                        .last_mut()
                        .ok_or_else(|| format!("line {number}: B line before any N line"))?;
                    entry.bad = match rest.trim() {
                        "0" => false,
                        "1" => true,
                        other => {
                            return Err(format!("line {number}: bad-flag value '{other}'"));
                        }
                    };
                }
                "T" => {
                    let entry = entries
                        .last_mut()
                        .ok_or_else(|| format!("line {number}: T line before any N line"))?;
                    for tag in rest.split('|').map(str::trim).filter(|t| !t.is_empty()) {
                        let family = ItemFamily::from_tag(tag)
                            .ok_or_else(|| format!("line {number}: unknown type tag '{tag}'"))?;
                        entry.families.push(family);
                    }
                }
                "R" => {
                    let entry = entries
                        .last_mut()
                        .ok_or_else(|| format!("line {number}: R line before any N line"))?;
                    for token in rest.split_whitespace() {
                        let requirement = Requirement::parse(token)
                            .map_err(|e| format!("line {number}: {e}"))?;
                        entry.requirements.push(requirement);
                    }
                }
                other => {
                    return Err(format!("line {number}: unknown line kind '{other}'"));
                }
            }
        }

        Ok(NameCatalogue { entries })
    }

    /// Indices of good-pool entries, in catalogue (rank) order.
    pub fn good_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.bad)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of bad-pool entries.
    pub fn bad_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.bad)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemKind, Modifier};

    const SAMPLE: &str = "\
# test name list
N:Ringil
T:melee
R:RES_COLD:1 BRAND_COLD

N:of Thorns
B:1
T:body|cloak

N:of the Eagle
T:helm
R:SEE_INVIS TELEPATHY
";

    #[test]
    fn parses_entries_in_order() {
        let catalogue = NameCatalogue::parse(SAMPLE).unwrap();
        assert_eq!(catalogue.len(), 3);
        assert_eq!(catalogue.entries[0].text, "Ringil");
        assert!(!catalogue.entries[0].bad);
        assert!(catalogue.entries[1].bad);
        assert_eq!(catalogue.entries[1].families.len(), 2);
        assert_eq!(catalogue.good_indices(), vec![0, 2]);
        assert_eq!(catalogue.bad_indices(), vec![1]);
    }

    #[test]
    fn unknown_token_is_hard_error() {
        let err = NameCatalogue::parse("N:x\nR:RES_FROG:1\n").unwrap_err();
        assert!(err.contains("line 2"), "error should carry line number: {err}");
        assert!(NameCatalogue::parse("N:x\nT:chariot\n").is_err());
        assert!(NameCatalogue::parse("Q:whatever\n").is_err());
        assert!(NameCatalogue::parse("B:1\n").is_err());
    }

    #[test]
    fn requirement_satisfaction() {
        let kind = ItemKind::plain(ItemFamily::Melee, "Long Sword", 130, 10);
        let mut art = Artifact::from_kind(0, &kind);
        let req = Requirement::parse("RES_FIRE:1").unwrap();
        assert!(!req.satisfied_by(&art));
        art.raise_resist(Element::Fire, 1);
        assert!(req.satisfied_by(&art));

        let imm = Requirement::parse("IMM_FIRE").unwrap();
        assert!(!imm.satisfied_by(&art));
        art.raise_resist(Element::Fire, 2);
        assert!(imm.satisfied_by(&art));
    }

    #[test]
    fn any_one_requirement_suffices() {
        let catalogue = NameCatalogue::parse(SAMPLE).unwrap();
        let entry = &catalogue.entries[2];
        let kind = ItemKind::plain(ItemFamily::Helm, "Iron Helm", 40, 5);
        let mut art = Artifact::from_kind(0, &kind);
        art.add_mod(Modifier::Wis, 1);
        assert!(!entry.satisfied_by(&art));
        art.flags.insert(Flag::Telepathy);
        assert!(entry.satisfied_by(&art));
    }

    #[test]
    fn unconditional_entry_always_satisfied() {
        let catalogue = NameCatalogue::parse("N:of Nothing Much\n").unwrap();
        let kind = ItemKind::plain(ItemFamily::Boots, "Sandals", 5, 1);
        let art = Artifact::from_kind(0, &kind);
        assert!(catalogue.entries[0].satisfied_by(&art));
        assert!(catalogue.entries[0].applies_to(ItemFamily::Bow));
    }
}
