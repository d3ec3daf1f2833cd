use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::TourEvent;
use crate::core::time::FixedTimestep;
use crate::input::queue::{InputEvent, InputQueue};
use crate::input::state::InputState;

/// Generic runner that wires up the engine loop for a concrete game.
///
/// The host calls `push_input` as events arrive and `tick` once per
/// display frame; the runner folds frames into fixed steps and surfaces
/// the events the host should react to (fades, location changes, quiz
/// results) via `events()`.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    input_state: InputState,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            input_state: InputState::new(),
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: fold input, step the game, commit transitions.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.input_state.apply(&self.input);

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        let step_dt = self.timestep.dt();
        for step in 0..steps {
            // One-shot inputs apply to the first catch-up step only.
            if step > 0 {
                self.input_state.clear_one_shots();
            }
            self.game.update(&mut self.ctx, &self.input_state);
            if let Some(arrival) = self.ctx.session.tick(step_dt) {
                self.game.enter(&mut self.ctx, &arrival);
            }
        }

        // Drain input after update
        self.input.drain();

        // Forward session events alongside game events
        let session_events = self.ctx.session.drain_events();
        self.ctx.events.extend(session_events);
        self.ctx.events.truncate(self.config.max_events);
    }

    /// Events produced by the last tick, for the host to act on.
    pub fn events(&self) -> &[TourEvent] {
        &self.ctx.events
    }

    /// Location id the session currently sits at.
    pub fn current_location(&self) -> &str {
        self.ctx.session.current()
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::{Location, SpawnRule, Transition, TransitionGraph};
    use crate::core::session::Arrival;
    use glam::Vec2;

    struct MiniTour;

    impl Game for MiniTour {
        fn init(&mut self, ctx: &mut EngineContext) {
            let graph = TransitionGraph::new()
                .with(
                    Location::new("A", SpawnRule::new(Vec2::new(1.0, 2.0)))
                        .on("door", Transition::to("B").instant()),
                )
                .with(Location::new("B", SpawnRule::new(Vec2::new(3.0, 4.0))));
            ctx.start_tour(graph, "A");
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
            if input.just_pressed(69) {
                ctx.session.press("door");
            }
        }

        fn enter(&mut self, _ctx: &mut EngineContext, _arrival: &Arrival) {}
    }

    #[test]
    fn init_surfaces_the_starting_location() {
        let mut runner = GameRunner::new(MiniTour);
        runner.init();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.current_location(), "A");
    }

    #[test]
    fn key_press_drives_an_instant_transition() {
        let mut runner = GameRunner::new(MiniTour);
        runner.init();
        runner.push_input(InputEvent::KeyDown { key_code: 69 });
        // The press schedules the transition; instant, so it commits
        // inside the same frame's fixed step.
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.current_location(), "B");
        assert!(runner
            .events()
            .iter()
            .any(|e| matches!(e, TourEvent::LocationStarted { location, .. } if location == "B")));
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = GameRunner::new(MiniTour);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.current_location(), "");
    }
}
