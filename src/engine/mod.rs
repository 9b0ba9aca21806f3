pub mod catalog;
pub mod engine;
pub mod protocol;
pub mod save_store;
pub mod tracker;
