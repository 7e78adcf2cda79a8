//! Import-path resilience: malformed strings, vanished catalog entries,
//! and the file-backed repository.

use planner_content::ContentCatalog;
use planner_core::{
    Armor, ArmorStats, Mote, SimplifiedBuild, SlotId, Weapon, WeaponLevelStats, WeaponStats,
};
use runtime::{
    CatalogProvider, FileBuildRepository, MemoryBuildRepository, Planner, PlannerError,
};

fn armor(alias: &str) -> Armor {
    Armor {
        alias: alias.to_owned(),
        map_id: format!("{alias}-map"),
        name: alias.to_owned(),
        stats: ArmorStats::default(),
    }
}

fn weapon(alias: &str) -> Weapon {
    Weapon {
        alias: alias.to_owned(),
        map_id: format!("{alias}-map"),
        name: alias.to_owned(),
        stats: WeaponStats {
            level0: Some(WeaponLevelStats {
                attack: Some("10".to_owned()),
                ..WeaponLevelStats::default()
            }),
            level30: None,
        },
    }
}

fn mote(id: &str) -> Mote {
    Mote {
        id: id.into(),
        name: id.to_owned(),
        effects: vec!["2 Grace".to_owned()],
    }
}

/// Catalog containing everything the exporting session equips.
fn full_catalog() -> ContentCatalog {
    ContentCatalog::new(
        vec![armor("helm"), armor("chest")],
        vec![weapon("sword")],
        vec![],
        vec![mote("mote-a"), mote("mote-b")],
    )
}

/// Catalog after a content update removed half the records.
fn thinned_catalog() -> ContentCatalog {
    ContentCatalog::new(
        vec![armor("helm")],
        vec![weapon("sword")],
        vec![],
        vec![mote("mote-b")],
    )
}

fn exported_build() -> String {
    let mut source = Planner::new(
        CatalogProvider::new(full_catalog()),
        MemoryBuildRepository::new(),
    );
    source.equip_armor(SlotId::Helm, armor("helm")).unwrap();
    source.equip_armor(SlotId::UpperBody, armor("chest")).unwrap();
    source.equip_weapon(SlotId::Primary, weapon("sword")).unwrap();
    source.socket_mote(SlotId::Primary, 0, mote("mote-a")).unwrap();
    source.socket_mote(SlotId::Primary, 1, mote("mote-b")).unwrap();
    source.export()
}

#[tokio::test]
async fn import_survives_vanished_records() {
    let encoded = exported_build();

    let mut imported = Planner::new(
        CatalogProvider::new(thinned_catalog()),
        MemoryBuildRepository::new(),
    );
    let outcome = imported.import(&encoded).await.unwrap();

    // "chest" and "mote-a" are gone: two dropped references.
    assert_eq!(outcome.missing, 2);
    assert!(!outcome.is_complete());

    let selection = imported.selection();
    assert!(selection.helm.is_some());
    assert!(selection.upper_body.is_none());

    // The weapon survives with a hole where mote-a was; mote-b keeps
    // its socket position.
    let equipped = selection.primary.as_ref().unwrap();
    assert_eq!(equipped.motes.len(), 2);
    assert!(equipped.motes[0].is_none());
    assert_eq!(equipped.motes[1].as_ref().unwrap().id.as_str(), "mote-b");
}

#[tokio::test]
async fn import_rejects_malformed_strings() {
    let mut session = Planner::new(
        CatalogProvider::new(full_catalog()),
        MemoryBuildRepository::new(),
    );
    session.equip_armor(SlotId::Helm, armor("helm")).unwrap();

    let err = session.import("definitely not a build").await.unwrap_err();
    assert!(matches!(err, PlannerError::Decode(_)));

    // A failed import leaves the session untouched.
    assert!(session.selection().helm.is_some());
}

#[tokio::test]
async fn import_then_reexport_is_stable() {
    let encoded = exported_build();

    let mut imported = Planner::new(
        CatalogProvider::new(full_catalog()),
        MemoryBuildRepository::new(),
    );
    imported.import(&encoded).await.unwrap();

    // With nothing missing, a re-export encodes the same string.
    assert_eq!(imported.export(), encoded);
}

#[tokio::test]
async fn file_repository_backs_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Planner::new(
        CatalogProvider::new(full_catalog()),
        FileBuildRepository::new(dir.path()).unwrap(),
    );
    session.equip_armor(SlotId::Helm, armor("helm")).unwrap();
    session.equip_weapon(SlotId::Primary, weapon("sword")).unwrap();
    session.socket_mote(SlotId::Primary, 2, mote("mote-a")).unwrap();
    session.save("campaign").unwrap();

    let mut restored = Planner::new(
        CatalogProvider::new(full_catalog()),
        FileBuildRepository::new(dir.path()).unwrap(),
    );
    assert!(restored.restore("campaign").unwrap());
    assert_eq!(
        SimplifiedBuild::from_selection(restored.selection()),
        SimplifiedBuild::from_selection(session.selection()),
    );
}
