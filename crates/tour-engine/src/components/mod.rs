pub mod animation;
pub mod entity;
pub mod zone;
