mod common;

use artifact_gen::{GenConfig, NameCatalogue, generate_artifact_set};

use common::{fixture_kinds, fixture_names, fixture_references, oracle};

#[test]
fn name_list_parse_reports_line_numbers() {
    let err = NameCatalogue::parse("N:Doomgiver\nT:melee\nX:what\n").unwrap_err();
    assert!(err.contains("line 3"), "{err}");

    let err = NameCatalogue::parse("N:Doomgiver\nR:RES_VOID:1\n").unwrap_err();
    assert!(err.contains("line 2"), "{err}");

    assert!(NameCatalogue::parse("T:melee\n").is_err());
    assert!(NameCatalogue::parse("N:\n").is_err());
}

#[test]
fn comments_and_blanks_are_ignored() {
    let catalogue = NameCatalogue::parse("# header\n\nN:Doomgiver\n\n# tail\nN:of Woe\nB:1\n").unwrap();
    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue.good_indices(), vec![0]);
    assert_eq!(catalogue.bad_indices(), vec![1]);
}

#[test]
fn curated_names_are_never_reused_across_a_large_set() {
    let kinds = fixture_kinds();
    let references = fixture_references(&kinds);
    let names = fixture_names();
    // More slots than curated names, so the fallback generator must kick in
    // instead of recycling the catalogue.
    let config = GenConfig {
        seed: 11,
        slots: 40,
        ..GenConfig::default()
    };
    let set = generate_artifact_set(&kinds, &references, &names, &oracle, &config);

    let curated: Vec<&str> = names.entries.iter().map(|e| e.text.as_str()).collect();
    let mut used: Vec<&str> = set
        .artifacts
        .iter()
        .map(|a| a.name.as_str())
        .filter(|n| curated.contains(n))
        .collect();
    let total = used.len();
    used.sort_unstable();
    used.dedup();
    assert_eq!(used.len(), total, "a curated name was assigned twice");

    let invented = set
        .artifacts
        .iter()
        .filter(|a| !curated.contains(&a.name.as_str()))
        .count();
    assert!(invented > 0, "overflow past the catalogue must invent names");
}

#[test]
fn invented_names_follow_the_two_house_forms() {
    let kinds = fixture_kinds();
    let references = fixture_references(&kinds);
    // Empty catalogue forces every name through the syllable generator.
    let names = NameCatalogue::default();
    let config = GenConfig {
        seed: 17,
        slots: 10,
        ..GenConfig::default()
    };
    let set = generate_artifact_set(&kinds, &references, &names, &oracle, &config);
    for artifact in &set.artifacts {
        let quoted = artifact.name.starts_with('\'') && artifact.name.ends_with('\'');
        let of_form = artifact.name.starts_with("of ");
        assert!(
            quoted || of_form,
            "invented name has an unexpected shape: {}",
            artifact.name
        );
    }
}

#[test]
fn family_tags_bind_names_to_their_slot() {
    let kinds = fixture_kinds();
    let references = fixture_references(&kinds);
    let names = fixture_names();
    let config = GenConfig {
        seed: 29,
        slots: 30,
        ..GenConfig::default()
    };
    let set = generate_artifact_set(&kinds, &references, &names, &oracle, &config);

    for artifact in &set.artifacts {
        let family = kinds.get(artifact.kind).family;
        if let Some(entry) = names.entries.iter().find(|e| e.text == artifact.name) {
            assert!(
                entry.applies_to(family),
                "'{}' is tagged for other families than {:?}",
                artifact.name,
                family
            );
            assert!(
                entry.satisfied_by(artifact),
                "'{}' demands properties {} lacks",
                entry.text,
                artifact.name
            );
        }
    }
}
