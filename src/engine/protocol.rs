use std::path::PathBuf;

use crate::model::monster::Monster;

pub enum EngineCommand {
    LoadMonsters(PathBuf),
}

pub enum EngineResponse {
    /// Replaces the whole catalog held by the tracker.
    MonstersLoaded(Vec<Monster>),
}
