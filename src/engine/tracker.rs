use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::engine::save_store::{SaveStore, CATALOG_FILE_NAME};
use crate::model::character::Character;
use crate::model::combat;
use crate::model::monster::Monster;
use crate::model::roster::{Roster, SortKey};
use crate::model::spawn;

pub const MSG_LOADED: &str = "File loaded successfully!";
pub const MSG_SAVED: &str = "File saved successfully!";
pub const MSG_LOAD_FAILED: &str = "Failed to load file.";
pub const MSG_SAVE_FAILED: &str =
    "Failed to save file. Please check file permissions or location.";
pub const MSG_LIST_FAILED: &str = "Failed to list save files.";
pub const MSG_NO_FILE: &str = "No file selected to save.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Info(t) | Status::Error(t) => t,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

/// Owns everything the combat screens mutate.
///
/// Every roster change except sorting is written straight to the open
/// save file. Failures end up in `status`, never in a returned error.
pub struct Tracker {
    store: SaveStore,
    roster: Roster,
    selected_file: Option<PathBuf>,
    save_files: Vec<PathBuf>,
    current_index: usize,
    pending_hp: HashMap<Uuid, i64>,
    monsters: Vec<Monster>,
    status: Option<Status>,
    hide_catalog_file: bool,
    rng: StdRng,
}

impl Tracker {
    pub fn new(store: SaveStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    pub fn with_rng(store: SaveStore, rng: StdRng) -> Self {
        Self {
            store,
            roster: Roster::default(),
            selected_file: None,
            save_files: Vec::new(),
            current_index: 0,
            pending_hp: HashMap::new(),
            monsters: Vec::new(),
            status: None,
            hide_catalog_file: true,
            rng,
        }
    }

    /* =========================
       Accessors
       ========================= */

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn save_files(&self) -> &[PathBuf] {
        &self.save_files
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_character(&self) -> Option<&Character> {
        self.roster.get(self.current_index)
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn pending_hp(&self, id: Uuid) -> i64 {
        self.pending_hp.get(&id).copied().unwrap_or(0)
    }

    pub fn set_pending_hp(&mut self, id: Uuid, amount: i64) {
        self.pending_hp.insert(id, amount);
    }

    pub fn hide_catalog_file(&self) -> bool {
        self.hide_catalog_file
    }

    pub fn set_hide_catalog_file(&mut self, hide: bool) {
        if self.hide_catalog_file != hide {
            self.hide_catalog_file = hide;
            self.list_save_files();
        }
    }

    /* =========================
       Files
       ========================= */

    pub fn list_save_files(&mut self) {
        match self.store.list_save_files() {
            Ok(mut files) => {
                if self.hide_catalog_file {
                    files.retain(|p| {
                        p.file_name().and_then(|n| n.to_str()) != Some(CATALOG_FILE_NAME)
                    });
                }
                tracing::debug!(count = files.len(), "listed save files");
                self.save_files = files;
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.save_files.clear();
                self.status = Some(Status::Error(MSG_LIST_FAILED.into()));
            }
        }
    }

    /// Opens `path` as the current save. On failure the previous roster and
    /// file stay as they were.
    pub fn open_file(&mut self, path: &Path) {
        match self.store.load(path) {
            Ok(characters) => {
                tracing::info!(path = %path.display(), count = characters.len(), "save loaded");
                self.roster = Roster::new(characters);
                self.selected_file = Some(path.to_path_buf());
                self.current_index = 0;
                self.pending_hp.clear();
                self.status = Some(Status::Info(MSG_LOADED.into()));
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.status = Some(Status::Error(MSG_LOAD_FAILED.into()));
            }
        }
    }

    /// Starts a fresh save holding one default character and selects it.
    pub fn create_new_file(&mut self) -> PathBuf {
        let path = self.store.new_save_path();
        tracing::info!(path = %path.display(), "creating new save");

        self.roster = Roster::new(vec![Character::default()]);
        self.selected_file = Some(path.clone());
        self.current_index = 0;
        self.pending_hp.clear();

        self.save();
        self.list_save_files();
        path
    }

    pub fn save(&mut self) {
        let Some(path) = self.selected_file.as_deref() else {
            self.status = Some(Status::Error(MSG_NO_FILE.into()));
            return;
        };

        match self.store.save(path, self.roster.characters()) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "roster saved");
                self.status = Some(Status::Info(MSG_SAVED.into()));
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.status = Some(Status::Error(MSG_SAVE_FAILED.into()));
            }
        }
    }

    /* =========================
       Catalog
       ========================= */

    pub fn catalog_path(&self) -> PathBuf {
        self.store.catalog_path()
    }

    pub fn apply_catalog(&mut self, monsters: Vec<Monster>) {
        self.monsters = monsters;
    }

    /* =========================
       Roster edits
       ========================= */

    /// Returns false when the name is blank and nothing was added.
    pub fn add_character(&mut self, name: &str) -> bool {
        let Some(character) = spawn::new_from_name(name, &mut self.rng) else {
            return false;
        };
        tracing::info!(name = %character.name, hp = character.hp, "character added");
        self.roster.append(character);
        self.save();
        true
    }

    pub fn add_monster(&mut self, monster: &Monster) {
        let character = spawn::new_from_monster(monster, &mut self.rng);
        tracing::info!(name = %character.name, hp = character.hp, "monster added");
        self.roster.append(character);
        self.save();
    }

    pub fn remove_character(&mut self, index: usize) {
        let Some(removed) = self.roster.remove_at(index) else {
            return;
        };
        self.pending_hp.remove(&removed.id);
        if self.current_index >= self.roster.len() {
            self.current_index = 0;
        }
        self.save();
    }

    pub fn adjust_turn_roll(&mut self, id: Uuid, delta: i64) {
        let Some(c) = self.roster.get_mut(id) else {
            return;
        };
        c.turn_roll = c.turn_roll.saturating_add(delta);
        self.save();
    }

    /// Applies damage directly. Non-positive amounts are ignored.
    pub fn subtract_hp(&mut self, id: Uuid, amount: i64) {
        let Some(c) = self.roster.get_mut(id) else {
            return;
        };
        if !c.take_damage(amount) {
            return;
        }
        tracing::debug!(name = %c.name, amount, hp = c.hp, "hp subtracted");
        self.pending_hp.insert(id, 0);
        self.save();
    }

    /// Applies whatever amount was typed into the character's damage field.
    pub fn subtract_pending_hp(&mut self, id: Uuid) {
        let amount = self.pending_hp(id);
        self.subtract_hp(id, amount);
    }

    pub fn set_reaction(&mut self, id: Uuid, used: bool) {
        let Some(c) = self.roster.get_mut(id) else {
            return;
        };
        c.reaction_used = used;
        self.save();
    }

    /* =========================
       Turn order
       ========================= */

    /// Reorders the on-screen list only; the file keeps its order until
    /// the next change that saves.
    pub fn sort(&mut self, key: SortKey) {
        self.roster.sort(key);
    }

    pub fn advance_turn(&mut self) {
        self.current_index = combat::next_turn(self.current_index, self.roster.len());
    }

    pub fn randomize_turn_rolls(&mut self) {
        combat::randomize_turn_rolls(&mut self.roster, &mut self.rng);
        self.save();
    }
}
