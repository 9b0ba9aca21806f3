use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub const CURRENT_TURN: &str = "CurrentTurn";
pub const DOWNED: &str = "Downed";
pub const MONSTER_CARD: &str = "MonsterCard";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    /// Overrides the platform documents folder for saves and the catalog.
    pub documents_dir: Option<PathBuf>,

    /// Keep `monsters.json` out of the save-file list.
    pub hide_catalog_file: bool,

    /// RGBA per row highlight, keyed by the constants above.
    pub highlight_colors: HashMap<String, [u8; 4]>,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut highlight_colors = HashMap::new();

        highlight_colors.insert(CURRENT_TURN.into(), [40, 90, 60, 255]);
        highlight_colors.insert(DOWNED.into(), [120, 40, 40, 255]);
        highlight_colors.insert(MONSTER_CARD.into(), [40, 70, 120, 255]);

        Self {
            ui_scale: 1.0,
            documents_dir: None,
            hide_catalog_file: true,
            highlight_colors,
        }
    }
}

impl UiSettings {
    pub fn color(&self, key: &str) -> Color32 {
        self.highlight_colors
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::DARK_GRAY)
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        self.highlight_colors.insert(
            key.to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let s: UiSettings = serde_json::from_str(r#"{"ui_scale": 1.5}"#).unwrap();
        assert_eq!(s.ui_scale, 1.5);
        assert!(s.hide_catalog_file);
        assert!(s.documents_dir.is_none());
        assert_eq!(s.color(CURRENT_TURN), Color32::from_rgb(40, 90, 60));
    }

    #[test]
    fn colors_round_trip() {
        let mut s = UiSettings::default();
        s.set_color(DOWNED, Color32::from_rgb(1, 2, 3));
        assert_eq!(s.color(DOWNED), Color32::from_rgb(1, 2, 3));
        assert_eq!(s.color("Missing"), Color32::DARK_GRAY);
    }
}
