//! The campus tour game: one `Game` impl stitching the location layouts,
//! dialogue, quizzes and the finale onto the engine session.

use glam::Vec2;
use tour_engine::{
    evaluate_zones, tick_movement, AnimationComponent, AnimationDef, Arrival, ArrowControls,
    ArrowControlsConfig, DialogueChange, DialogueState, EngineContext, Entity, Game, GameConfig,
    InputEvent, InputState, MoveIntent, QuizPhase, QuizState, TourEvent, TriggerZone, KEY_DOWN,
    KEY_E, KEY_LEFT, KEY_RIGHT, KEY_UP, PLAYER_BODY, PLAYER_TAG,
};

use crate::campus::{self, LocationKind};
use crate::dialogue;

// UI button kinds the host sends as `InputEvent::Button`.
/// Start-screen button. Value ignored.
pub const BTN_START: u32 = 1;
/// Lift panel. Value: 0 ground floor, 1 first floor, 2 second floor, 3 exit.
pub const BTN_LIFT: u32 = 2;
/// Quiz screen. Value: 0-3 answer choice, 4 exit, 5 retry.
pub const BTN_QUIZ: u32 = 3;

/// Fixed step, matching `GameConfig::default().fixed_dt`.
const DT: f32 = 1.0 / 60.0;
/// Total length of the intro slideshow before the outdoor scene starts.
const INTRO_SECS: f32 = 15.5;
/// Finale image sequence: count and seconds per image.
const FINALE_IMAGES: u32 = 5;
const FINALE_IMAGE_SECS: f32 = 5.0;
/// Screen size the arrow pad is laid out against.
const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

/// Robot speech, then a slideshow, then the tour is over.
struct Finale {
    speech: DialogueState,
    image_index: u32,
    image_timer: f32,
    ended: bool,
}

impl Finale {
    fn new() -> Self {
        Self {
            speech: DialogueState::new(dialogue::ai_robot()),
            image_index: 0,
            image_timer: 0.0,
            ended: false,
        }
    }
}

pub struct CampusTour {
    arrows: ArrowControls,
    kind: LocationKind,
    world: Vec2,
    zones: Vec<TriggerZone>,
    dialogue: Option<(Vec2, f32, DialogueState)>,
    quiz: Option<QuizState>,
    quiz_done_announced: bool,
    loading_left: f32,
    intro_fired: bool,
    finale: Option<Finale>,
}

impl CampusTour {
    pub fn new() -> Self {
        Self {
            arrows: ArrowControls::new(ArrowControlsConfig::new(SCREEN)),
            kind: LocationKind::Menu,
            world: SCREEN,
            zones: Vec::new(),
            dialogue: None,
            quiz: None,
            quiz_done_announced: false,
            loading_left: INTRO_SECS,
            intro_fired: false,
            finale: None,
        }
    }

    /// Rebuild game state for a freshly entered location.
    fn stage(&mut self, ctx: &mut EngineContext, arrival: &Arrival) {
        self.arrows.release_all();
        ctx.scene.clear();
        self.quiz = None;
        self.dialogue = None;
        self.finale = None;

        let Some(layout) = campus::layout(&arrival.location) else {
            log::debug!("no layout for location '{}'", arrival.location);
            self.kind = LocationKind::Menu;
            return;
        };
        self.kind = layout.kind;
        self.world = layout.world;
        self.zones = layout.zones;
        self.dialogue = layout
            .dialogue
            .map(|spot| (spot.pos, spot.radius, DialogueState::new(spot.script)));
        self.quiz = campus::quiz_bank(&arrival.location).map(QuizState::new);
        self.quiz_done_announced = false;
        self.loading_left = INTRO_SECS;
        self.intro_fired = false;

        match layout.kind {
            LocationKind::Walk => {
                let id = ctx.next_id();
                ctx.scene.spawn(
                    Entity::new(id)
                        .with_tag(PLAYER_TAG)
                        .with_pos(arrival.spawn)
                        .with_scale(layout.player_scale)
                        .with_sprite("character")
                        .with_animation(player_animation()),
                );
            }
            LocationKind::Cinematic => self.finale = Some(Finale::new()),
            _ => {}
        }
    }

    fn update_menu(&mut self, ctx: &mut EngineContext, input: &InputState) {
        for event in input.frame_events() {
            let InputEvent::Button { kind, value } = *event else {
                continue;
            };
            match kind {
                BTN_START => ctx.session.press("start"),
                BTN_LIFT => {
                    let trigger = match value {
                        0 => "ground-floor",
                        1 => "first-floor",
                        2 => "second-floor",
                        3 => "exit-lift",
                        _ => continue,
                    };
                    ctx.session.press(trigger);
                }
                BTN_QUIZ => self.quiz_button(ctx, value),
                _ => {}
            }
        }

        if let Some(quiz) = &mut self.quiz {
            quiz.tick(DT);
            if quiz.phase() == QuizPhase::Finished && !self.quiz_done_announced {
                self.quiz_done_announced = true;
                ctx.emit_event(TourEvent::QuizFinished {
                    score: quiz.score(),
                    total: quiz.total(),
                });
            }
        }
    }

    fn quiz_button(&mut self, ctx: &mut EngineContext, value: u32) {
        let Some(quiz) = &mut self.quiz else {
            return;
        };
        match value {
            0..=3 => quiz.answer(value as usize),
            4 if quiz.phase() == QuizPhase::Finished => ctx.session.press("exit"),
            5 if quiz.phase() == QuizPhase::Finished => {
                quiz.retry();
                self.quiz_done_announced = false;
            }
            _ => {}
        }
    }

    fn update_loading(&mut self, ctx: &mut EngineContext) {
        self.loading_left -= DT;
        if self.loading_left <= 0.0 && !self.intro_fired {
            self.intro_fired = true;
            ctx.session.press("intro-complete");
        }
    }

    fn update_walk(&mut self, ctx: &mut EngineContext, input: &InputState) {
        for event in input.frame_events() {
            self.arrows.handle_event(event);
        }
        let keys = MoveIntent {
            left: input.is_down(KEY_LEFT),
            right: input.is_down(KEY_RIGHT),
            up: input.is_down(KEY_UP),
            down: input.is_down(KEY_DOWN),
        };
        let intent = keys.or(self.arrows.intent());

        // Movement is frozen while a fade is running, in either direction.
        let can_move =
            !ctx.session.in_transit() && ctx.session.fade_in_progress().is_none();
        let player_pos = match ctx.scene.player_mut() {
            Some(player) => {
                if can_move {
                    tick_movement(player, intent, self.world, DT);
                } else if let Some(anim) = &mut player.animation {
                    anim.play_if_different("idle");
                    anim.tick(DT);
                }
                player.pos
            }
            None => return,
        };

        evaluate_zones(&mut ctx.session, &self.zones, player_pos, PLAYER_BODY, DT);

        if let Some((spot, radius, state)) = &mut self.dialogue {
            let near = player_pos.distance(*spot) <= *radius;
            let advance = input.just_pressed(KEY_E);
            match state.tick(near, advance, DT) {
                DialogueChange::Line => {
                    if let Some(line) = state.current_line() {
                        ctx.emit_event(TourEvent::DialogueLine {
                            speaker: state.speaker().to_string(),
                            line: line.to_string(),
                        });
                    }
                }
                DialogueChange::Hidden => ctx.emit_event(TourEvent::DialogueHidden),
                DialogueChange::None => {}
            }
        }
    }

    fn update_finale(&mut self, ctx: &mut EngineContext, input: &InputState) {
        let Some(finale) = &mut self.finale else {
            return;
        };
        if finale.ended {
            return;
        }

        if !finale.speech.completed() {
            let advance = input.just_pressed(KEY_E) || input.tapped();
            match finale.speech.tick(true, advance, DT) {
                DialogueChange::Line => {
                    if let Some(line) = finale.speech.current_line() {
                        ctx.emit_event(TourEvent::DialogueLine {
                            speaker: finale.speech.speaker().to_string(),
                            line: line.to_string(),
                        });
                    }
                }
                DialogueChange::Hidden => ctx.emit_event(TourEvent::DialogueHidden),
                DialogueChange::None => {}
            }
            return;
        }

        // Slideshow, then lights out.
        finale.image_timer += DT;
        if finale.image_timer >= FINALE_IMAGE_SECS {
            finale.image_timer = 0.0;
            finale.image_index += 1;
            if finale.image_index >= FINALE_IMAGES {
                finale.ended = true;
                log::info!("tour finished");
                ctx.emit_event(TourEvent::TourEnded);
            }
        }
    }
}

impl Default for CampusTour {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for CampusTour {
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let arrival = ctx.start_tour(campus::campus_graph(), campus::START);
        self.stage(ctx, &arrival);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
        match self.kind {
            LocationKind::Menu => self.update_menu(ctx, input),
            LocationKind::Loading => self.update_loading(ctx),
            LocationKind::Walk => self.update_walk(ctx, input),
            LocationKind::Cinematic => self.update_finale(ctx, input),
        }
    }

    fn enter(&mut self, ctx: &mut EngineContext, arrival: &Arrival) {
        self.stage(ctx, arrival);
    }
}

/// The 48px character sheet: 6-frame idle, 8-frame run, both at 10 fps.
fn player_animation() -> AnimationComponent {
    AnimationComponent::new()
        .with("idle", AnimationDef::strip(0, 5, 10.0))
        .with("run", AnimationDef::strip(0, 7, 10.0))
}
