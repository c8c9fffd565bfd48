use artifact_gen::item::{Brand, Element, Fault, Flag, Modifier, Slay, Stat};
use artifact_gen::{
    Artifact, ItemFamily, ItemKind, KindCatalogue, NameCatalogue, ReferenceArtifact,
};

/// Base-item catalogue covering every family, plus one fixed quest item.
pub fn fixture_kinds() -> KindCatalogue {
    let mut long_sword = ItemKind::plain(ItemFamily::Melee, "Long Sword", 130, 10);
    long_sword.dd = 2;
    long_sword.ds = 5;
    let mut dagger = ItemKind::plain(ItemFamily::Melee, "Dagger", 12, 1);
    dagger.dd = 1;
    dagger.ds = 4;
    let mut war_hammer = ItemKind::plain(ItemFamily::Melee, "War Hammer", 120, 8);
    war_hammer.dd = 3;
    war_hammer.ds = 3;

    let long_bow = ItemKind::plain(ItemFamily::Bow, "Long Bow", 30, 10);
    let sling = ItemKind::plain(ItemFamily::Bow, "Sling", 5, 1);

    let mut chain_mail = ItemKind::plain(ItemFamily::Body, "Chain Mail", 220, 12);
    chain_mail.to_ac = 10;
    let mut leather_armour = ItemKind::plain(ItemFamily::Body, "Leather Armour", 80, 2);
    leather_armour.to_ac = 4;

    let mut leather_boots = ItemKind::plain(ItemFamily::Boots, "Leather Boots", 20, 2);
    leather_boots.to_ac = 2;
    let mut iron_boots = ItemKind::plain(ItemFamily::Boots, "Iron Shod Boots", 40, 6);
    iron_boots.to_ac = 4;

    let mut gloves = ItemKind::plain(ItemFamily::Gloves, "Leather Gloves", 8, 1);
    gloves.to_ac = 1;
    let mut helm = ItemKind::plain(ItemFamily::Helm, "Iron Helm", 40, 5);
    helm.to_ac = 4;
    let mut small_shield = ItemKind::plain(ItemFamily::Shield, "Small Shield", 60, 3);
    small_shield.to_ac = 3;
    let mut large_shield = ItemKind::plain(ItemFamily::Shield, "Large Shield", 100, 8);
    large_shield.to_ac = 5;
    let mut cloak = ItemKind::plain(ItemFamily::Cloak, "Cloak", 10, 1);
    cloak.to_ac = 1;

    let mut lantern = ItemKind::plain(ItemFamily::Light, "Lantern", 20, 3);
    lantern.flags.insert(Flag::Light);

    let mut quest_ring = ItemKind::plain(ItemFamily::Jewelry, "Plain Band", 2, 50);
    quest_ring.quest_item = true;

    KindCatalogue::new(vec![
        long_sword,     // 0
        dagger,         // 1
        war_hammer,     // 2
        long_bow,       // 3
        sling,          // 4
        chain_mail,     // 5
        leather_armour, // 6
        leather_boots,  // 7
        iron_boots,     // 8
        gloves,         // 9
        helm,           // 10
        small_shield,   // 11
        large_shield,   // 12
        cloak,          // 13
        lantern,        // 14
        quest_ring,     // 15
    ])
}

/// Additive heuristic oracle with small per-ability steps, standing in for
/// the game's combat model.
pub fn oracle(artifact: &Artifact, _: &KindCatalogue) -> i32 {
    let mods: i32 = artifact.mods.values().map(|v| v * 4).sum();
    let resists: i32 = artifact
        .resists
        .values()
        .map(|&level| if level >= 2 { 12 } else { 4 })
        .sum();
    artifact.to_hit.max(0) / 2
        + artifact.to_dam * 2
        + artifact.to_ac
        + mods
        + resists
        + artifact.flags.len() as i32 * 3
        + artifact.sustains.len() as i32 * 2
        + artifact.brands.len() as i32 * 6
        + artifact.slays.len() as i32 * 4
        + i32::from(artifact.dd) * 2
        + if artifact.activation.is_some() { 4 } else { 0 }
        - artifact.faults.len() as i32 * 10
}

/// A hand-authored reference set spanning every family, including one
/// cursed dagger.
pub fn fixture_references(kinds: &KindCatalogue) -> Vec<ReferenceArtifact> {
    let mut sword = Artifact::from_kind(0, kinds.get(0));
    sword.to_hit = 10;
    sword.to_dam = 15;
    sword.dd = 3;
    sword.slays.insert(Slay::Evil);
    sword.brands.insert(Brand::Fire);
    sword.flags.insert(Flag::FreeAction);

    let mut hammer = Artifact::from_kind(2, kinds.get(2));
    hammer.to_dam = 10;
    hammer.set_mod(Modifier::Blows, 1);
    hammer.sustains.insert(Stat::Str);

    let mut bow = Artifact::from_kind(3, kinds.get(3));
    bow.to_hit = 8;
    bow.to_dam = 8;
    bow.set_mod(Modifier::Shots, 1);

    let mut mail = Artifact::from_kind(5, kinds.get(5));
    mail.to_ac = 24;
    mail.raise_resist(Element::Fire, 1);
    mail.raise_resist(Element::Cold, 1);
    mail.flags.insert(Flag::HoldLife);

    let mut leather = Artifact::from_kind(6, kinds.get(6));
    leather.to_ac = 10;
    leather.set_mod(Modifier::Stealth, 2);

    let mut boots = Artifact::from_kind(7, kinds.get(7));
    boots.to_ac = 4;
    boots.set_mod(Modifier::Speed, 2);

    let mut helm = Artifact::from_kind(10, kinds.get(10));
    helm.to_ac = 8;
    helm.flags.insert(Flag::SeeInvisible);
    helm.set_mod(Modifier::Wis, 1);
    helm.raise_resist(Element::Blindness, 1);

    let mut shield = Artifact::from_kind(11, kinds.get(11));
    shield.to_ac = 12;
    shield.raise_resist(Element::Acid, 1);
    shield.raise_resist(Element::Elec, 1);

    let mut cloak = Artifact::from_kind(13, kinds.get(13));
    cloak.to_ac = 6;
    cloak.set_mod(Modifier::Stealth, 1);

    let mut gauntlets = Artifact::from_kind(9, kinds.get(9));
    gauntlets.to_ac = 5;
    gauntlets.flags.insert(Flag::FreeAction);
    gauntlets.set_mod(Modifier::Dex, 1);

    let mut lantern = Artifact::from_kind(14, kinds.get(14));
    lantern.raise_resist(Element::Dark, 1);
    lantern.activation = Some(artifact_gen::item::Activation::Detection);

    let mut cursed = Artifact::from_kind(1, kinds.get(1));
    cursed.to_hit = -5;
    cursed.to_dam = -8;
    cursed.flags.insert(Flag::Aggravate);
    cursed.add_fault(Fault::DrainLife);

    [
        sword, hammer, bow, mail, leather, boots, helm, shield, cloak, gauntlets, lantern, cursed,
    ]
    .into_iter()
    .map(ReferenceArtifact::fixed)
    .collect()
}

const NAME_LIST: &str = "\
# curated fixture names, grandest first
N:Doomgiver
T:melee
N:Stormcrown
T:helm
N:of the Ancient Kings
N:Nightcutter
T:melee|bow
N:of the Iron Wall
T:shield|body
N:Windstride
T:boots
N:of the Silent Path
T:boots|cloak
N:of the Eagle
T:helm
R:SEE_INVIS TELEPATHY
N:Emberguard
R:RES_FIRE:1 IMM_FIRE
N:of Frozen Stars
R:RES_COLD:1 BRAND_COLD
N:of Quickness
R:FEATHER
N:of the Steady Hand
T:gloves
N:Dawnlight
T:light
N:of Warding
N:of the Marches
N:of Lesser Days
N:of Thorns
B:1
N:of Creeping Dread
B:1
N:of Hollow Promise
B:1
N:of the Pit
B:1
";

pub fn fixture_names() -> NameCatalogue {
    NameCatalogue::parse(NAME_LIST).expect("fixture name list parses")
}
