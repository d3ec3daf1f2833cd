pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod runner;
pub mod systems;
pub mod ui;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, TourEvent};
pub use assets::manifest::TourManifest;
pub use components::animation::{AnimationComponent, AnimationDef};
pub use components::entity::Entity;
pub use components::zone::{TriggerZone, ZoneShape};
pub use core::fade::FadeTimer;
pub use core::graph::{Location, Payload, SpawnRule, Transition, TransitionGraph};
pub use core::scene::{Scene, PLAYER_TAG};
pub use core::session::{Arrival, TourSession};
pub use core::time::FixedTimestep;
pub use core::trigger::{TriggerGuard, TriggerPhase};
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{InputState, KEY_DOWN, KEY_E, KEY_LEFT, KEY_RIGHT, KEY_UP};
pub use runner::GameRunner;
pub use systems::dialogue::{DialogueChange, DialogueScript, DialogueState};
pub use systems::movement::{tick_movement, MoveIntent, WALK_SPEED};
pub use systems::quiz::{Question, QuizPhase, QuizState};
pub use systems::triggers::{evaluate_zones, PLAYER_BODY};
pub use ui::arrows::{ArrowControls, ArrowControlsConfig, ArrowDir};
