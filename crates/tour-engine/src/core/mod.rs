pub mod fade;
pub mod graph;
pub mod scene;
pub mod session;
pub mod time;
pub mod trigger;
