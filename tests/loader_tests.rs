use raidforge::loader;
use raidforge::registry::GameRegistry;
use raidforge::roster::{ArmorType, Role, Tier, TierToken};
use std::io::Write;

#[test]
fn test_load_roster_json() {
    let registry = GameRegistry::new_with_defaults();
    let json = r#"[
        {"name": "Thunderstrike", "player": "alex", "class_id": "warrior",
         "spec_id": "protection_warrior", "role_group": "main"},
        {"name": "Frostwhisper", "player": "sarah", "class_id": "mage",
         "spec_id": "fire", "role_group": "alt"}
    ]"#;

    let records = loader::load_roster_json(json.as_bytes(), &registry).unwrap();
    assert_eq!(records.len(), 2);

    let tank = &records[0];
    assert_eq!(tank.name, "Thunderstrike");
    assert_eq!(tank.role, Role::Tank);
    assert_eq!(tank.tier, Tier::Main);
    assert_eq!(tank.armor, ArmorType::Plate);
    assert_eq!(tank.token, TierToken::Dreadful);
    assert_eq!(tank.class_name, "Warrior");
    assert_eq!(tank.spec_name, "Protection");
    assert_eq!(tank.buffs, vec!["battle_shout".to_string()]);

    let mage = &records[1];
    assert_eq!(mage.role, Role::RangedDps);
    assert_eq!(mage.armor, ArmorType::Cloth);
    assert_eq!(mage.token, TierToken::Mystic);
}

#[test]
fn test_unknown_class_row_is_skipped() {
    let registry = GameRegistry::new_with_defaults();
    let json = r#"[
        {"name": "Good", "player": "p1", "class_id": "mage",
         "spec_id": "fire", "role_group": "main"},
        {"name": "Bad", "player": "p2", "class_id": "bard",
         "spec_id": "fire", "role_group": "main"},
        {"name": "AlsoBad", "player": "p3", "class_id": "mage",
         "spec_id": "juggling", "role_group": "main"}
    ]"#;

    let records = loader::load_roster_json(json.as_bytes(), &registry).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Good");
}

#[test]
fn test_unknown_tier_coerces_to_inactive() {
    let registry = GameRegistry::new_with_defaults();
    let json = r#"[
        {"name": "Odd", "player": "p1", "class_id": "mage",
         "spec_id": "fire", "role_group": "benchwarmer"}
    ]"#;

    let records = loader::load_roster_json(json.as_bytes(), &registry).unwrap();
    assert_eq!(records[0].tier, Tier::Inactive);
}

#[test]
fn test_load_roster_csv() {
    let registry = GameRegistry::new_with_defaults();
    let csv = "\
name,player,class_id,spec_id,role_group
Moonshadow,mike,druid,guardian,main
Stormrage,mike,shaman,elemental,alt
Broken,row,missing
";

    let records = loader::load_roster_csv(csv.as_bytes(), &registry).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].role, Role::Tank);
    assert_eq!(records[1].armor, ArmorType::Mail);
}

#[test]
fn test_load_roster_from_tempfile() {
    let registry = GameRegistry::new_with_defaults();
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"name": "Ashbringer", "player": "chris", "class_id": "death_knight",
            "spec_id": "blood", "role_group": "main"}}]"#
    )
    .unwrap();

    let records = loader::load_roster(file.path(), &registry).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].role, Role::Tank);
}

#[test]
fn test_load_locks() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"characterName": "Thunderstrike", "groupId": 2}}]"#
    )
    .unwrap();

    let locks = loader::load_locks(file.path()).unwrap();
    assert_eq!(locks.len(), 1);
    assert_eq!(locks[0].character_name, "Thunderstrike");
    assert_eq!(locks[0].group_id, 2);
}

#[test]
fn test_registry_defaults() {
    let registry = GameRegistry::new_with_defaults();
    assert_eq!(registry.classes.len(), 13);

    let shaman = registry.class("shaman").unwrap();
    assert_eq!(shaman.armor, ArmorType::Mail);
    assert_eq!(shaman.token, TierToken::Zenith);
    assert!(shaman.buffs.contains(&"skyfury".to_string()));

    let spec = registry.spec("mistweaver").unwrap();
    assert_eq!(spec.class_id, "monk");
    assert_eq!(spec.role, "healer");

    let required = registry.required_buffs();
    assert_eq!(required.len(), 9);
    assert!(required.contains(&"skyfury".to_string()));
    assert!(!required.contains(&"windfury_totem".to_string()));
}

#[test]
fn test_registry_from_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
            "classes": [
                {{"class_id": "mage", "name": "Mage", "armor": "cloth",
                  "token": "mystic", "buffs": ["arcane_intellect"]}}
            ],
            "specs": [
                {{"spec_id": "fire", "name": "Fire", "class_id": "mage", "role": "rdps"}}
            ],
            "buffs": [
                {{"buff_id": "arcane_intellect", "name": "Arcane Intellect", "required": true}}
            ]
        }}"#
    )
    .unwrap();

    let registry = GameRegistry::load_from_file(file.path()).unwrap();
    assert_eq!(registry.classes.len(), 1);
    assert_eq!(registry.required_buffs(), vec!["arcane_intellect".to_string()]);
    assert!(registry.spec("fire").is_some());
}

#[test]
fn test_registry_rejects_dangling_spec() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
            "classes": [],
            "specs": [
                {{"spec_id": "fire", "name": "Fire", "class_id": "mage", "role": "rdps"}}
            ],
            "buffs": []
        }}"#
    )
    .unwrap();

    assert!(GameRegistry::load_from_file(file.path()).is_err());
}
