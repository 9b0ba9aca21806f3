use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("combat_tracker");
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) {
    save_settings_to(&settings_path(), settings);
}

/// Missing or unreadable settings fall back to the defaults.
pub fn load_settings_from(path: &Path) -> UiSettings {
    let Ok(data) = fs::read_to_string(path) else {
        return UiSettings::default();
    };
    serde_json::from_str(&data).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "ignoring bad settings file: {e}");
        UiSettings::default()
    })
}

pub fn save_settings_to(path: &Path, settings: &UiSettings) {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok();
    }
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = fs::write(path, json) {
                tracing::warn!(path = %path.display(), "failed to save settings: {e}");
            }
        }
        Err(e) => tracing::warn!("failed to encode settings: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_and_reloads() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("ui_settings.json");

        let mut settings = UiSettings::default();
        settings.ui_scale = 1.25;
        settings.documents_dir = Some(tmp.path().to_path_buf());
        save_settings_to(&path, &settings);

        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ui_settings.json");
        fs::write(&path, "][").unwrap();

        assert_eq!(load_settings_from(&path), UiSettings::default());
        assert_eq!(
            load_settings_from(&tmp.path().join("absent.json")),
            UiSettings::default()
        );
    }
}
