pub mod app;
pub mod characters_tab;
pub mod files_tab;
pub mod monsters_tab;
pub mod settings;
pub mod settings_io;
