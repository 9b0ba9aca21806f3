use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::monster::Monster;

/// A combatant on the roster.
///
/// Field names follow the save-file format (`turnRoll`, `reactionUsed`,
/// `monsterDetails`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub turn_roll: i64,
    pub hp: i64,
    #[serde(default)]
    pub reaction_used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster_details: Option<Monster>,
}

impl Character {
    pub fn new(name: impl Into<String>, turn_roll: i64, hp: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            turn_roll,
            hp: hp.max(0),
            reaction_used: false,
            monster_details: None,
        }
    }

    /// Subtracts `amount` from hp, never going below zero.
    /// Returns false (and changes nothing) for non-positive amounts.
    pub fn take_damage(&mut self, amount: i64) -> bool {
        if amount <= 0 {
            return false;
        }
        self.hp = self.hp.saturating_sub(amount).max(0);
        true
    }

    pub fn is_down(&self) -> bool {
        self.hp == 0
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new("New Character", 10, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut c = Character::new("Orc", 12, 15);
        assert!(c.take_damage(4));
        assert_eq!(c.hp, 11);
        assert!(c.take_damage(100));
        assert_eq!(c.hp, 0);
        assert!(c.is_down());
    }

    #[test]
    fn non_positive_damage_is_ignored() {
        let mut c = Character::new("Orc", 12, 15);
        assert!(!c.take_damage(0));
        assert!(!c.take_damage(-5));
        assert_eq!(c.hp, 15);
    }

    #[test]
    fn decodes_legacy_save_entry() {
        let json = r#"{
            "id": "6F9619FF-8B86-D011-B42D-00C04FC964FF",
            "name": "Goblin",
            "turnRoll": 14,
            "hp": 7,
            "reactionUsed": true,
            "monsterDetails": { "name": "Goblin", "hit_points": 7, "actions": null }
        }"#;

        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.name, "Goblin");
        assert_eq!(c.turn_roll, 14);
        assert!(c.reaction_used);
        assert_eq!(c.monster_details.unwrap().hit_points(), 7);
    }

    #[test]
    fn serializes_with_save_file_keys() {
        let c = Character::new("Bard", 10, 20);
        let value = serde_json::to_value(&c).unwrap();

        assert_eq!(value["turnRoll"], 10);
        assert_eq!(value["reactionUsed"], false);
        assert!(value.get("monsterDetails").is_none());
        assert_eq!(value["id"], c.id.to_string());
    }
}
