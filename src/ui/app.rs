use eframe::egui;
use std::sync::mpsc;

use crate::engine::engine::Engine;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::save_store::{documents_dir, SaveStore};
use crate::engine::tracker::Tracker;
use crate::ui::characters_tab::draw_characters_tab;
use crate::ui::files_tab::draw_files_tab;
use crate::ui::monsters_tab::{draw_monster_picker, draw_monsters_tab};
use crate::ui::settings::{UiSettings, CURRENT_TURN, DOWNED, MONSTER_CARD};
use crate::ui::settings_io::{load_settings, save_settings};

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Files,
    Characters,
    Monsters,
}

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct UiState {
    pub tab: Tab,
    pub new_character_name: String,
    pub monster_filter: String,
    pub show_monster_picker: bool,
    pub show_settings: bool,
    pub catalog_loading: bool,
}

/* =========================
   App
   ========================= */

pub struct TrackerApp {
    pub ui: UiState,
    pub settings: UiSettings,
    pub tracker: Tracker,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl TrackerApp {
    pub fn new() -> Self {
        let settings = load_settings();
        let store = SaveStore::new(documents_dir(settings.documents_dir.as_deref()));
        tracing::info!(dir = %store.dir().display(), "using documents directory");

        let mut tracker = Tracker::new(store);
        tracker.set_hide_catalog_file(settings.hide_catalog_file);
        tracker.list_save_files();

        let (cmd_tx, resp_rx) = Engine::spawn();

        let mut app = Self {
            ui: UiState::default(),
            settings,
            tracker,
            cmd_tx,
            resp_rx,
        };
        app.send_command(EngineCommand::LoadMonsters(app.tracker.catalog_path()));
        app.ui.catalog_loading = true;
        app
    }

    pub fn send_command(&self, cmd: EngineCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            tracing::error!("engine thread is gone");
        }
    }

    fn drain_engine(&mut self) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::MonstersLoaded(monsters) => {
                    self.tracker.apply_catalog(monsters);
                    self.ui.catalog_loading = false;
                }
            }
        }
    }

    fn characters_tab_label(&self) -> String {
        self.tracker
            .selected_file()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Edit Characters".to_string())
    }
}

impl Default for TrackerApp {
    fn default() -> Self {
        Self::new()
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        self.drain_engine();
        if self.ui.catalog_loading {
            ctx.request_repaint();
        }

        /* TABS */
        let label = self.characters_tab_label();
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.ui.tab, Tab::Files, "File Management");
                ui.selectable_value(&mut self.ui.tab, Tab::Characters, label);
                ui.selectable_value(&mut self.ui.tab, Tab::Monsters, "Monsters");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.ui.show_settings = !self.ui.show_settings;
                    }
                });
            });
        });

        /* STATUS */
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if let Some(status) = self.tracker.status() {
                let color = if status.is_error() {
                    egui::Color32::LIGHT_RED
                } else {
                    egui::Color32::LIGHT_GREEN
                };
                ui.colored_label(color, status.text());
            } else {
                ui.label("");
            }
        });

        /* CENTER */
        let tab = self.ui.tab;
        egui::CentralPanel::default().show(ctx, |ui| match tab {
            Tab::Files => draw_files_tab(ui, &mut self.tracker),
            Tab::Characters => {
                draw_characters_tab(ui, &mut self.tracker, &mut self.ui, &self.settings)
            }
            Tab::Monsters => draw_monsters_tab(ui, &mut self.tracker, &mut self.ui, &self.settings),
        });

        /* WINDOWS */
        if self.ui.show_monster_picker {
            draw_monster_picker(ctx, &mut self.tracker, &mut self.ui);
        }
        if self.ui.show_settings {
            self.draw_settings_window(ctx);
        }
    }
}

impl TrackerApp {
    fn draw_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.ui.show_settings;
        let mut changed = false;

        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("UI Scale");
                changed |= ui
                    .add(egui::Slider::new(&mut self.settings.ui_scale, 0.75..=2.0))
                    .changed();

                ui.separator();
                if ui
                    .checkbox(
                        &mut self.settings.hide_catalog_file,
                        "Hide monsters.json from the file list",
                    )
                    .changed()
                {
                    self.tracker
                        .set_hide_catalog_file(self.settings.hide_catalog_file);
                    changed = true;
                }

                ui.separator();
                ui.label("Highlights");
                for (key, label) in [
                    (CURRENT_TURN, "Current turn"),
                    (DOWNED, "Down (0 HP)"),
                    (MONSTER_CARD, "Monster card"),
                ] {
                    ui.horizontal(|ui| {
                        let mut color = self.settings.color(key);
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            self.settings.set_color(key, color);
                            changed = true;
                        }
                        ui.label(label);
                    });
                }

                ui.separator();
                ui.label("Documents folder (applies on restart)");
                ui.monospace(self.tracker.store().dir().display().to_string());
            });

        if changed {
            save_settings(&self.settings);
        }
        self.ui.show_settings = open;
    }
}
