use crate::api::types::{EntityId, TourEvent};
use crate::core::graph::TransitionGraph;
use crate::core::scene::Scene;
use crate::core::session::{Arrival, TourSession};
use crate::input::state::InputState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Camera fade duration before a transition commits (default: 1.0).
    pub fade_secs: f32,
    /// Maximum number of host events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            fade_secs: 1.0,
            max_events: 32,
        }
    }
}

/// The core contract every walkthrough game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: build the transition graph, start the tour,
    /// populate the first scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One logical tick: read input, move the player, evaluate triggers.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState);

    /// A transition committed. Rebuild the scene for the new location.
    fn enter(&mut self, ctx: &mut EngineContext, arrival: &Arrival);
}

/// Mutable access to engine state, passed to Game methods.
pub struct EngineContext {
    pub scene: Scene,
    pub session: TourSession,
    pub events: Vec<TourEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            session: TourSession::empty(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Install the transition graph and place the session at `start`.
    /// Returns the synthetic arrival for the starting location so the game
    /// can build its first scene the same way it builds every other one.
    pub fn start_tour(&mut self, graph: TransitionGraph, start: &str) -> Arrival {
        self.session = TourSession::new(graph, start);
        let arrival = self.session.initial_arrival();
        self.events.push(TourEvent::LocationStarted {
            location: arrival.location.clone(),
            spawn: arrival.spawn,
            fade_in: arrival.fade_in,
        });
        arrival
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an event to be forwarded to the host.
    pub fn emit_event(&mut self, event: TourEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
