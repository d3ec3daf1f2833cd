pub mod dialogue;
pub mod movement;
pub mod quiz;
pub mod triggers;
