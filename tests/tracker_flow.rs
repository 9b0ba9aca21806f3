use std::fs;

use combat_tracker::engine::catalog::load_monsters;
use combat_tracker::engine::save_store::{SaveStore, CATALOG_FILE_NAME};
use combat_tracker::engine::tracker::{Status, Tracker, MSG_LOADED};
use combat_tracker::model::character::Character;
use combat_tracker::model::monster::{Monster, StatBlock};
use combat_tracker::model::roster::SortKey;
use rand::{rngs::StdRng, SeedableRng};

const CATALOG: &str = r#"[
    {
        "name": "Goblin",
        "size": "Small",
        "type": "humanoid",
        "subtype": "goblinoid",
        "alignment": "neutral evil",
        "armor_class": 15,
        "hit_points": 7,
        "hit_dice": "2d6",
        "speed": "30 ft.",
        "speed_json": { "walk": 30 },
        "strength": 8, "dexterity": 14, "constitution": 10,
        "intelligence": 10, "wisdom": 8, "charisma": 8,
        "constitution_save": null,
        "senses": "darkvision 60 ft., passive Perception 9",
        "languages": "Common, Goblin",
        "challenge_rating": "1/4",
        "special_abilities": [
            { "name": "Nimble Escape", "desc": "Disengage or Hide as a bonus action." }
        ],
        "actions": [
            { "name": "Scimitar", "desc": "Melee Weapon Attack", "attack_bonus": 4,
              "damage_dice": "1d6", "damage_bonus": 2 }
        ],
        "legendary_actions": null
    },
    { "name": null, "hit_points": null }
]"#;

#[test]
fn save_and_load_round_trip_with_monsters() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog_path = tmp.path().join(CATALOG_FILE_NAME);
    fs::write(&catalog_path, CATALOG).unwrap();

    let mut tracker = Tracker::with_rng(SaveStore::new(tmp.path()), StdRng::seed_from_u64(9));
    tracker.apply_catalog(load_monsters(&catalog_path));
    assert_eq!(tracker.monsters().len(), 2);

    let path = tracker.create_new_file();
    let goblin = tracker.monsters()[0].clone();
    let unnamed = tracker.monsters()[1].clone();
    tracker.add_monster(&goblin);
    tracker.add_monster(&unnamed);
    assert!(tracker.add_character("Wizard"));

    let wizard = tracker.roster().characters()[3].id;
    tracker.set_reaction(wizard, true);
    tracker.subtract_hp(wizard, 3);

    let before = tracker.roster().clone();

    let mut reopened = Tracker::new(SaveStore::new(tmp.path()));
    reopened.list_save_files();
    assert_eq!(reopened.save_files(), [path.clone()]);

    reopened.open_file(&path);
    assert_eq!(reopened.status(), Some(&Status::Info(MSG_LOADED.into())));
    assert_eq!(reopened.roster(), &before);

    let names: Vec<&str> = reopened.roster().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["New Character", "Goblin", "monster", "Wizard"]);
    assert_eq!(reopened.roster().characters()[1].hp, 7);
    assert_eq!(reopened.roster().characters()[2].hp, 100);
}

#[test]
fn monster_copy_is_independent_of_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    let mut tracker = Tracker::new(SaveStore::new(tmp.path()));
    tracker.create_new_file();

    tracker.apply_catalog(vec![Monster::from(StatBlock {
        name: Some("Bugbear".into()),
        hit_points: Some(27),
        ..Default::default()
    })]);
    let bugbear = tracker.monsters()[0].clone();
    tracker.add_monster(&bugbear);

    tracker.apply_catalog(Vec::new());

    let details = tracker.roster().characters()[1]
        .monster_details
        .as_ref()
        .unwrap();
    assert_eq!(details.display_name(), "Bugbear");
}

#[test]
fn opens_save_written_by_earlier_versions() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("campaign.json");
    fs::write(
        &path,
        r#"[
            {"id":"E621E1F8-C36C-495A-93FC-0C247A3E6E5F","name":"fighter","turnRoll":12,"hp":44,"reactionUsed":false},
            {"id":"0D5A2B1C-1111-4222-8333-944455556666","name":"Goblin","turnRoll":18,"hp":0,"reactionUsed":true,
             "monsterDetails":{"name":"Goblin","hit_points":7,"armor_class":15,"type":"humanoid"}}
        ]"#,
    )
    .unwrap();

    let mut tracker = Tracker::new(SaveStore::new(tmp.path()));
    tracker.open_file(&path);

    assert_eq!(tracker.roster().len(), 2);
    let goblin = &tracker.roster().characters()[1];
    assert!(goblin.is_down());
    assert!(goblin.reaction_used);
    assert_eq!(goblin.monster_details.as_ref().unwrap().armor_class(), 15);

    tracker.sort(SortKey::TurnRoll);
    assert_eq!(tracker.roster().characters()[0].name, "Goblin");

    let on_disk: Vec<Character> = SaveStore::new(tmp.path()).load(&path).unwrap();
    assert_eq!(on_disk[0].name, "fighter");
}
