use eframe::egui;
use uuid::Uuid;

use crate::engine::tracker::Tracker;
use crate::model::character::Character;
use crate::model::monster::Monster;
use crate::model::roster::SortKey;
use crate::ui::app::UiState;
use crate::ui::settings::{UiSettings, CURRENT_TURN, DOWNED};

/// Room kept below the roster list for the add bar.
const ADD_BAR_HEIGHT: f32 = 48.0;

/// Never negative, even when the window is shorter than the add bar.
fn roster_list_height(available: f32) -> f32 {
    (available - ADD_BAR_HEIGHT).max(0.0)
}

/// Edits collected while drawing and applied once the roster is no
/// longer borrowed.
enum RowAction {
    Remove(usize),
    AdjustTurn(Uuid, i64),
    SetPending(Uuid, i64),
    SubtractHp(Uuid),
    SetReaction(Uuid, bool),
}

pub fn draw_characters_tab(
    ui: &mut egui::Ui,
    tracker: &mut Tracker,
    state: &mut UiState,
    settings: &UiSettings,
) {
    if tracker.roster().is_empty() {
        ui.colored_label(
            egui::Color32::GRAY,
            "No characters loaded. Open a save file to edit characters.",
        );
        if tracker.selected_file().is_some() {
            draw_add_bar(ui, tracker, state);
        }
        return;
    }

    ui.horizontal_wrapped(|ui| {
        if ui.button("Sort by Name").clicked() {
            tracker.sort(SortKey::Name);
        }
        if ui.button("Sort by HP").clicked() {
            tracker.sort(SortKey::Hp);
        }
        if ui.button("Sort by Turn Roll").clicked() {
            tracker.sort(SortKey::TurnRoll);
        }
        if ui.button("Randomize Turn Rolls").clicked() {
            tracker.randomize_turn_rolls();
        }
    });

    if let Some(current) = tracker.current_character() {
        ui.label(format!("Current turn: {}", current.name));
    }

    ui.separator();

    let mut actions = Vec::new();

    egui::ScrollArea::vertical()
        .max_height(roster_list_height(ui.available_height()))
        .show(ui, |ui| {
            for (i, character) in tracker.roster().iter().enumerate() {
                let is_current = i == tracker.current_index();
                let pending = tracker.pending_hp(character.id);

                ui.push_id(character.id, |ui| {
                    draw_row(ui, i, character, is_current, pending, settings, &mut actions);
                });
                ui.add_space(6.0);
            }
        });

    for action in actions {
        match action {
            RowAction::Remove(i) => tracker.remove_character(i),
            RowAction::AdjustTurn(id, delta) => tracker.adjust_turn_roll(id, delta),
            RowAction::SetPending(id, amount) => tracker.set_pending_hp(id, amount),
            RowAction::SubtractHp(id) => tracker.subtract_pending_hp(id),
            RowAction::SetReaction(id, used) => tracker.set_reaction(id, used),
        }
    }

    ui.separator();
    draw_add_bar(ui, tracker, state);
}

fn draw_row(
    ui: &mut egui::Ui,
    index: usize,
    c: &Character,
    is_current: bool,
    pending: i64,
    settings: &UiSettings,
    actions: &mut Vec<RowAction>,
) {
    let mut frame = egui::Frame::group(ui.style());
    if is_current {
        frame = frame.fill(settings.color(CURRENT_TURN));
    } else if c.is_down() {
        frame = frame.fill(settings.color(DOWNED));
    }

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.strong(format!("Name: {}", c.name));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new("Remove").color(egui::Color32::LIGHT_RED))
                    .clicked()
                {
                    actions.push(RowAction::Remove(index));
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label(format!("Turn Roll: {}", c.turn_roll));
            if ui.small_button("+").clicked() {
                actions.push(RowAction::AdjustTurn(c.id, 1));
            }
            if ui.small_button("-").clicked() {
                actions.push(RowAction::AdjustTurn(c.id, -1));
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!("HP: {}", c.hp));
            let mut amount = pending;
            if ui
                .add(egui::DragValue::new(&mut amount).speed(1).range(0..=9999))
                .changed()
            {
                actions.push(RowAction::SetPending(c.id, amount));
            }
            if ui.button("Subtract HP").clicked() {
                if amount != pending {
                    actions.push(RowAction::SetPending(c.id, amount));
                }
                actions.push(RowAction::SubtractHp(c.id));
            }
        });

        let mut used = c.reaction_used;
        if ui.checkbox(&mut used, "Reaction").changed() {
            actions.push(RowAction::SetReaction(c.id, used));
        }

        if let Some(monster) = &c.monster_details {
            egui::CollapsingHeader::new("Monster Stats")
                .id_salt(("monster_stats", c.id))
                .show(ui, |ui| draw_monster_stats(ui, monster));
        }
    });
}

fn draw_monster_stats(ui: &mut egui::Ui, m: &Monster) {
    ui.label(format!("Type: {}", m.kind()));
    ui.label(format!("AC: {}", m.armor_class()));
    ui.label(format!("Speed: {}", m.speed()));
    ui.label(format!("Alignment: {}", m.alignment()));
    for (ability, score) in m.ability_scores() {
        ui.label(format!("{ability}: {score}"));
    }

    if !m.stats.actions.is_empty() {
        ui.collapsing("Actions", |ui| {
            for action in &m.stats.actions {
                let name = action.name.as_deref().unwrap_or("Unnamed");
                match &action.damage_dice {
                    Some(dice) => ui.strong(format!("{name} ({dice})")),
                    None => ui.strong(name),
                };
                if let Some(desc) = &action.desc {
                    ui.add(egui::Label::new(desc).wrap());
                }
            }
        });
    }

    if !m.stats.special_abilities.is_empty() {
        ui.collapsing("Special Abilities", |ui| {
            for ability in &m.stats.special_abilities {
                ui.strong(ability.name.as_deref().unwrap_or("Unnamed"));
                if let Some(desc) = &ability.desc {
                    ui.add(egui::Label::new(desc).wrap());
                }
            }
        });
    }

    if !m.stats.legendary_actions.is_empty() {
        ui.collapsing("Legendary Actions", |ui| {
            if let Some(desc) = &m.stats.legendary_desc {
                ui.add(egui::Label::new(desc).wrap());
            }
            for action in &m.stats.legendary_actions {
                ui.strong(action.name.as_deref().unwrap_or("Unnamed"));
                if let Some(desc) = &action.desc {
                    ui.add(egui::Label::new(desc).wrap());
                }
            }
        });
    }
}

fn draw_add_bar(ui: &mut egui::Ui, tracker: &mut Tracker, state: &mut UiState) {
    ui.horizontal(|ui| {
        if ui.button("End Turn").clicked() {
            tracker.advance_turn();
        }
        if ui.button("Add Monster").clicked() {
            state.show_monster_picker = true;
        }

        ui.add_sized(
            [200.0, 20.0],
            egui::TextEdit::singleline(&mut state.new_character_name)
                .hint_text("New Character Name"),
        );

        if ui.button("Add New Character").clicked()
            && tracker.add_character(&state.new_character_name)
        {
            state.new_character_name.clear();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_height_leaves_room_for_add_bar() {
        assert_eq!(roster_list_height(300.0), 252.0);
    }

    #[test]
    fn short_window_gives_zero_list_height() {
        assert_eq!(roster_list_height(20.0), 0.0);
        assert_eq!(roster_list_height(0.0), 0.0);
    }
}
