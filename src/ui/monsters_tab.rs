use eframe::egui;

use crate::engine::tracker::Tracker;
use crate::model::monster::Monster;
use crate::ui::app::UiState;
use crate::ui::settings::{UiSettings, MONSTER_CARD};

const CARD_WIDTH: f32 = 150.0;

pub fn draw_monsters_tab(
    ui: &mut egui::Ui,
    tracker: &mut Tracker,
    state: &mut UiState,
    settings: &UiSettings,
) {
    ui.heading("Monsters");

    if state.catalog_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading monsters…");
        });
        return;
    }

    if tracker.monsters().is_empty() {
        ui.label(format!(
            "No monsters found. Put a catalog at {}",
            tracker.catalog_path().display()
        ));
        return;
    }

    ui.add(
        egui::TextEdit::singleline(&mut state.monster_filter).hint_text("Filter by name"),
    );
    ui.separator();

    let mut picked: Option<usize> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for (i, monster) in tracker.monsters().iter().enumerate() {
                if !monster.matches_filter(&state.monster_filter) {
                    continue;
                }
                ui.push_id(monster.id, |ui| {
                    if draw_card(ui, monster, settings) {
                        picked = Some(i);
                    }
                });
            }
        });
    });

    if let Some(i) = picked {
        let monster = tracker.monsters()[i].clone();
        tracker.add_monster(&monster);
    }
}

/// Returns true when "Add to Characters" was clicked.
fn draw_card(ui: &mut egui::Ui, m: &Monster, settings: &UiSettings) -> bool {
    let mut clicked = false;

    egui::Frame::group(ui.style())
        .fill(settings.color(MONSTER_CARD))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical_centered(|ui| {
                ui.strong(m.display_name());
                ui.label(format!("AC: {}", m.armor_class()));
                ui.weak(format!("Type: {}", m.kind()));
                ui.label(format!("HP: {}", m.hit_points()));
                ui.weak(format!("CR: {}", m.challenge_rating()));
                if ui.button("Add to Characters").clicked() {
                    clicked = true;
                }
            });
        });

    clicked
}

/// Modal-style list opened from the character editor's "Add Monster" button.
pub fn draw_monster_picker(ctx: &egui::Context, tracker: &mut Tracker, state: &mut UiState) {
    let mut open = state.show_monster_picker;
    let mut picked: Option<usize> = None;

    egui::Window::new("Choose a Monster")
        .open(&mut open)
        .collapsible(false)
        .default_height(400.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.monster_filter)
                        .hint_text("Filter by name"),
                );
                if ui.button("Cancel").clicked() {
                    state.show_monster_picker = false;
                }
            });
            ui.separator();

            if tracker.monsters().is_empty() {
                ui.label("No monsters loaded.");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (i, monster) in tracker.monsters().iter().enumerate() {
                    if !monster.matches_filter(&state.monster_filter) {
                        continue;
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Add").clicked() {
                            picked = Some(i);
                        }
                        ui.label(format!(
                            "{} (HP {}, CR {})",
                            monster.display_name(),
                            monster.hit_points(),
                            monster.challenge_rating()
                        ));
                    });
                }
            });
        });

    if let Some(i) = picked {
        let monster = tracker.monsters()[i].clone();
        tracker.add_monster(&monster);
        open = false;
    }
    state.show_monster_picker = open && state.show_monster_picker;
}
