pub mod character;
pub mod combat;
pub mod monster;
pub mod roster;
pub mod spawn;
