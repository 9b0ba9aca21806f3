use eframe::egui;
use std::path::PathBuf;

use crate::engine::tracker::Tracker;

pub fn draw_files_tab(ui: &mut egui::Ui, tracker: &mut Tracker) {
    ui.heading("File Management");

    ui.horizontal(|ui| {
        if ui.button("List Saved Files").clicked() {
            tracker.list_save_files();
        }
        if ui.button("New File").clicked() {
            tracker.create_new_file();
        }
        if ui.button("Copy Folder Path").clicked() {
            ui.ctx()
                .copy_text(tracker.store().dir().display().to_string());
        }
    });

    ui.label(format!("Folder: {}", tracker.store().dir().display()));
    ui.separator();

    if tracker.save_files().is_empty() {
        ui.label("No save files yet.");
        return;
    }

    let mut open: Option<PathBuf> = None;

    egui::ScrollArea::vertical()
        .max_height(200.0)
        .show(ui, |ui| {
            for file in tracker.save_files() {
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let selected = tracker.selected_file() == Some(file.as_path());

                if ui.selectable_label(selected, name).clicked() {
                    open = Some(file.clone());
                }
            }
        });

    if let Some(path) = open {
        tracker.open_file(&path);
    }
}
