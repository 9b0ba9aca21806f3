use rand::Rng;

use crate::model::character::Character;
use crate::model::combat::roll_d20;
use crate::model::monster::Monster;

pub const DEFAULT_TURN_ROLL: i64 = 10;
pub const FALLBACK_MONSTER_NAME: &str = "monster";

/// A hand-entered combatant, named exactly as typed. Blank names are rejected.
pub fn new_from_name<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Option<Character> {
    if name.trim().is_empty() {
        return None;
    }
    Some(Character::new(name, DEFAULT_TURN_ROLL, roll_d20(rng)))
}

/// A combatant spawned from a catalog entry, carrying its own copy of the stat block.
pub fn new_from_monster<R: Rng + ?Sized>(monster: &Monster, rng: &mut R) -> Character {
    let name = monster
        .stats
        .name
        .clone()
        .unwrap_or_else(|| FALLBACK_MONSTER_NAME.to_string());

    Character {
        monster_details: Some(monster.clone()),
        ..Character::new(name, roll_d20(rng), monster.hit_points())
    }
}
