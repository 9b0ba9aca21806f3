use uuid::Uuid;

use crate::model::character::Character;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive, A to Z.
    Name,
    /// Highest first.
    Hp,
    /// Highest first.
    TurnRoll,
}

/// Ordered list of characters for the open save file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.characters.iter()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    pub fn append(&mut self, character: Character) {
        self.characters.push(character);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Character> {
        if index < self.characters.len() {
            Some(self.characters.remove(index))
        } else {
            None
        }
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Character> {
        self.characters.iter_mut()
    }

    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Name => self
                .characters
                .sort_by_cached_key(|c| c.name.to_lowercase()),
            SortKey::Hp => self.characters.sort_by(|a, b| b.hp.cmp(&a.hp)),
            SortKey::TurnRoll => self
                .characters
                .sort_by(|a, b| b.turn_roll.cmp(&a.turn_roll)),
        }
    }
}

impl From<Vec<Character>> for Roster {
    fn from(characters: Vec<Character>) -> Self {
        Self::new(characters)
    }
}
