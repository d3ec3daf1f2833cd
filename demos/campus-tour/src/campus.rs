//! The campus itself: every location, its world layout and its wiring in
//! the transition graph.
//!
//! Coordinate origin is the top-left of each location's background image.
//! All world sizes and marker positions come from the campus art.

use glam::Vec2;
use tour_engine::{Location, SpawnRule, Transition, TransitionGraph, TriggerZone};

use crate::dialogue;

// Location ids.
pub const START: &str = "Start";
pub const LOADING: &str = "Loading";
pub const OUTDOOR: &str = "Outdoor";
pub const GROUND_FLOOR: &str = "GroundFloor";
pub const LIFT: &str = "Lift";
pub const FIRST_FLOOR: &str = "FirstFloor";
pub const LABS_FLOOR: &str = "LabsFloor";
pub const ELECTRICAL_LAB: &str = "ElectricalLab";
pub const ELECTRICAL_QUIZ: &str = "ElectricalQuiz";
pub const PHYSICS_LAB: &str = "PhysicsLab";
pub const PHYSICS_QUIZ: &str = "PhysicsQuiz";
pub const PERFORMING_ARTS: &str = "PerformingArts";
pub const PERFORMING_ARTS_QUIZ: &str = "PerformingArtsQuiz";
pub const PLAYGROUND: &str = "Playground";
pub const SPORTS_QUIZ: &str = "SportsQuiz";
pub const AI_LAB: &str = "AiLab";

/// What kind of scene a location is, from the game loop's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// Free-walking map with a player character and trigger zones.
    Walk,
    /// Static screen driven by UI buttons (start screen, lift panel, quizzes).
    Menu,
    /// The intro slideshow; advances to the campus on a timer.
    Loading,
    /// The AI lab finale: robot dialogue, image sequence, tour over.
    Cinematic,
}

/// A spot in a walk location where a character talks to the player.
#[derive(Debug, Clone)]
pub struct DialogueSpot {
    pub pos: Vec2,
    pub radius: f32,
    pub script: tour_engine::DialogueScript,
}

/// Everything the game needs to stage one location.
pub struct LocationLayout {
    pub id: &'static str,
    pub kind: LocationKind,
    /// World bounds in pixels (background image size).
    pub world: Vec2,
    /// Camera zoom the host should use here.
    pub zoom: f32,
    pub player_scale: f32,
    pub zones: Vec<TriggerZone>,
    pub dialogue: Option<DialogueSpot>,
}

impl LocationLayout {
    fn walk(id: &'static str, world: Vec2, zoom: f32) -> Self {
        Self {
            id,
            kind: LocationKind::Walk,
            world,
            zoom,
            player_scale: 6.0,
            zones: Vec::new(),
            dialogue: None,
        }
    }

    fn menu(id: &'static str) -> Self {
        Self {
            id,
            kind: LocationKind::Menu,
            world: Vec2::new(800.0, 600.0),
            zoom: 1.0,
            player_scale: 1.0,
            zones: Vec::new(),
            dialogue: None,
        }
    }

    fn zone(mut self, zone: TriggerZone) -> Self {
        self.zones.push(zone);
        self
    }

    fn talk(mut self, pos: Vec2, radius: f32, script: tour_engine::DialogueScript) -> Self {
        self.dialogue = Some(DialogueSpot {
            pos,
            radius,
            script,
        });
        self
    }
}

/// The full transition graph of the tour.
pub fn campus_graph() -> TransitionGraph {
    TransitionGraph::new()
        .with(
            Location::new(START, SpawnRule::new(Vec2::ZERO))
                .on("start", Transition::to(LOADING).instant()),
        )
        .with(
            Location::new(LOADING, SpawnRule::new(Vec2::ZERO))
                .on("intro-complete", Transition::to(OUTDOOR).instant()),
        )
        .with(
            Location::new(OUTDOOR, SpawnRule::new(Vec2::new(1000.0, 500.0))).on(
                "campus-entrance",
                Transition::to(GROUND_FLOOR).fade_in(),
            ),
        )
        .with(
            Location::new(
                GROUND_FLOOR,
                SpawnRule::new(Vec2::new(1040.0, 925.0))
                    .re_entry(OUTDOOR, Vec2::new(800.0, 1100.0)),
            )
            .on("lift", Transition::to(LIFT).fade_in())
            .on(
                "front-exit",
                Transition::to(OUTDOOR).entry(Vec2::new(1500.0, 800.0)).fade_in(),
            )
            .on(
                "playground-door",
                Transition::to(PLAYGROUND).entry(Vec2::new(100.0, 100.0)).fade_in(),
            ),
        )
        .with(
            Location::new(LIFT, SpawnRule::new(Vec2::ZERO))
                .on("ground-floor", Transition::to(GROUND_FLOOR).fade_in())
                .on(
                    "first-floor",
                    Transition::to(LABS_FLOOR).entry(Vec2::new(2400.0, 350.0)).fade_in(),
                )
                .on("second-floor", Transition::to(FIRST_FLOOR).fade_in())
                .on("exit-lift", Transition::to(LABS_FLOOR).fade_in()),
        )
        .with(
            Location::new(
                FIRST_FLOOR,
                SpawnRule::new(Vec2::new(1500.0, 1700.0))
                    .re_entry(LIFT, Vec2::new(1500.0, 900.0)),
            )
            .on("pa-door", Transition::to(PERFORMING_ARTS).fade_in())
            .on("lift", Transition::to(LIFT).fade_in())
            .on(
                "stairs-down",
                Transition::to(GROUND_FLOOR).entry(Vec2::new(100.0, 100.0)).fade_in(),
            )
            // Carries no entry point, so arrival lands on the floor's
            // default spawn near the stairwell.
            .on("stairs-up", Transition::to(LABS_FLOOR).fade_in())
            .on("ai-door", Transition::to(AI_LAB).fade_in()),
        )
        .with(
            Location::new(
                LABS_FLOOR,
                SpawnRule::new(Vec2::new(100.0, 1400.0))
                    .re_entry(LIFT, Vec2::new(3000.0, 750.0))
                    .re_entry(ELECTRICAL_LAB, Vec2::new(3000.0, 750.0))
                    .re_entry(PHYSICS_LAB, Vec2::new(3000.0, 750.0)),
            )
            .on("lift", Transition::to(LIFT).fade_in())
            .on(
                "electrical-door",
                Transition::to(ELECTRICAL_LAB).entry(Vec2::new(450.0, 950.0)).fade_in(),
            )
            .on(
                "physics-door",
                Transition::to(PHYSICS_LAB).entry(Vec2::new(400.0, 950.0)).fade_in(),
            ),
        )
        .with(
            Location::new(ELECTRICAL_LAB, SpawnRule::new(Vec2::new(450.0, 950.0)))
                .on("quiz", Transition::to(ELECTRICAL_QUIZ))
                .on(
                    "exit-gate",
                    Transition::to(LABS_FLOOR).entry(Vec2::new(450.0, 150.0)).fade_in(),
                ),
        )
        .with(
            Location::new(ELECTRICAL_QUIZ, SpawnRule::new(Vec2::ZERO)).on(
                "exit",
                Transition::to(ELECTRICAL_LAB).entry(Vec2::new(880.0, 210.0)).instant(),
            ),
        )
        .with(
            Location::new(PHYSICS_LAB, SpawnRule::new(Vec2::new(2000.0, 1800.0)))
                .on("quiz", Transition::to(PHYSICS_QUIZ))
                .on(
                    "exit-gate",
                    Transition::to(LABS_FLOOR).entry(Vec2::new(5000.0, 350.0)).fade_in(),
                ),
        )
        .with(
            Location::new(PHYSICS_QUIZ, SpawnRule::new(Vec2::ZERO)).on(
                "exit",
                Transition::to(PHYSICS_LAB).entry(Vec2::new(160.0, 300.0)).instant(),
            ),
        )
        .with(
            Location::new(PERFORMING_ARTS, SpawnRule::new(Vec2::new(1100.0, 1300.0)))
                .on("quiz", Transition::to(PERFORMING_ARTS_QUIZ))
                .on(
                    "exit",
                    Transition::to(FIRST_FLOOR).entry(Vec2::new(1500.0, 810.0)).fade_in(),
                ),
        )
        .with(
            Location::new(PERFORMING_ARTS_QUIZ, SpawnRule::new(Vec2::ZERO)).on(
                "exit",
                Transition::to(PERFORMING_ARTS).entry(Vec2::new(400.0, 360.0)).instant(),
            ),
        )
        .with(
            Location::new(PLAYGROUND, SpawnRule::new(Vec2::new(900.0, 1000.0)))
                .on("quiz", Transition::to(SPORTS_QUIZ))
                .on(
                    "exit",
                    Transition::to(GROUND_FLOOR).entry(Vec2::new(100.0, 700.0)).fade_in(),
                ),
        )
        .with(
            Location::new(SPORTS_QUIZ, SpawnRule::new(Vec2::ZERO)).on(
                "exit",
                Transition::to(PLAYGROUND).entry(Vec2::new(400.0, 500.0)).instant(),
            ),
        )
        // Terminal scene: no outgoing transitions.
        .with(Location::new(AI_LAB, SpawnRule::new(Vec2::ZERO)))
}

/// Stage layout for a location, or `None` for ids the tour doesn't know.
pub fn layout(id: &str) -> Option<LocationLayout> {
    let layout = match id {
        START => LocationLayout::menu(START),
        LOADING => LocationLayout {
            kind: LocationKind::Loading,
            ..LocationLayout::menu(LOADING)
        },
        OUTDOOR => LocationLayout::walk(OUTDOOR, Vec2::new(2000.0, 1000.0), 1.0).zone(
            TriggerZone::rect(
                "campus-entrance",
                Vec2::new(1840.0, 920.0),
                Vec2::new(100.0, 100.0),
            ),
        ),
        GROUND_FLOOR => {
            LocationLayout::walk(GROUND_FLOOR, Vec2::new(1600.0, 1200.0), 0.5)
                .zone(TriggerZone::rect(
                    "lift",
                    Vec2::new(1350.0, 343.0),
                    Vec2::new(200.0, 150.0),
                ))
                .zone(TriggerZone::rect(
                    "front-exit",
                    Vec2::new(875.0, 1150.0),
                    Vec2::new(100.0, 50.0),
                ))
                .zone(TriggerZone::rect(
                    "playground-door",
                    Vec2::new(160.0, 600.0),
                    Vec2::new(100.0, 200.0),
                ))
                // Reception desk: a welcome message, no transition.
                .talk(Vec2::new(410.0, 175.0), 150.0, dialogue::welcome_desk())
        }
        LIFT => LocationLayout::menu(LIFT),
        FIRST_FLOOR => LocationLayout::walk(FIRST_FLOOR, Vec2::new(3000.0, 1800.0), 0.5)
            .zone(TriggerZone::rect(
                "pa-door",
                Vec2::new(450.0, 810.0),
                Vec2::new(150.0, 100.0),
            ))
            .zone(TriggerZone::rect(
                "lift",
                Vec2::new(1500.0, 360.0),
                Vec2::new(200.0, 150.0),
            ))
            .zone(TriggerZone::rect(
                "stairs-down",
                Vec2::new(100.0, 1750.0),
                Vec2::new(100.0, 50.0),
            ))
            .zone(TriggerZone::rect(
                "stairs-up",
                Vec2::new(2900.0, 50.0),
                Vec2::new(100.0, 50.0),
            ))
            .zone(TriggerZone::rect(
                "ai-door",
                Vec2::new(2460.0, 864.0),
                Vec2::new(150.0, 100.0),
            ))
            .talk(Vec2::new(1500.0, 900.0), 150.0, dialogue::floor_guide()),
        LABS_FLOOR => LocationLayout::walk(LABS_FLOOR, Vec2::new(6000.0, 1500.0), 0.35)
            .zone(TriggerZone::circle("lift", Vec2::new(3000.0, 150.0), 50.0))
            .zone(TriggerZone::rect(
                "electrical-door",
                Vec2::new(1080.0, 630.0),
                Vec2::new(150.0, 150.0),
            ))
            .zone(TriggerZone::rect(
                "physics-door",
                Vec2::new(4920.0, 630.0),
                Vec2::new(50.0, 50.0),
            ))
            .talk(Vec2::new(480.0, 1200.0), 400.0, dialogue::receptionist()),
        ELECTRICAL_LAB => LocationLayout::walk(ELECTRICAL_LAB, Vec2::new(3200.0, 1600.0), 0.35)
            .zone(TriggerZone::circle("quiz", Vec2::new(510.0, 280.0), 150.0))
            .zone(TriggerZone::rect(
                "exit-gate",
                Vec2::new(2650.0, 100.0),
                Vec2::new(20.0, 40.0),
            )),
        PHYSICS_LAB => LocationLayout::walk(PHYSICS_LAB, Vec2::new(4000.0, 1900.0), 0.5)
            .zone(TriggerZone::rect(
                "quiz",
                Vec2::new(400.0, 665.0),
                Vec2::new(100.0, 100.0),
            ))
            .zone(TriggerZone::rect(
                "exit-gate",
                Vec2::new(520.0, 1885.0),
                Vec2::new(50.0, 30.0),
            )),
        PERFORMING_ARTS => {
            let mut l = LocationLayout::walk(PERFORMING_ARTS, Vec2::new(2200.0, 1400.0), 0.5)
                .zone(TriggerZone::rect(
                    "quiz",
                    Vec2::new(880.0, 350.0),
                    Vec2::new(150.0, 100.0),
                ))
                .zone(TriggerZone::rect(
                    "exit",
                    Vec2::new(50.0, 1350.0),
                    Vec2::new(100.0, 100.0),
                ));
            l.player_scale = 5.5;
            l
        }
        PLAYGROUND => LocationLayout::walk(PLAYGROUND, Vec2::new(1800.0, 1100.0), 0.5)
            .zone(TriggerZone::rect(
                "quiz",
                Vec2::new(530.0, 930.0),
                Vec2::new(100.0, 100.0),
            ))
            .zone(TriggerZone::circle("exit", Vec2::new(460.0, 100.0), 100.0)),
        ELECTRICAL_QUIZ | PHYSICS_QUIZ | PERFORMING_ARTS_QUIZ | SPORTS_QUIZ => {
            LocationLayout::menu(id_static(id)?)
        }
        AI_LAB => LocationLayout {
            kind: LocationKind::Cinematic,
            ..LocationLayout::menu(AI_LAB)
        },
        _ => return None,
    };
    Some(layout)
}

fn id_static(id: &str) -> Option<&'static str> {
    match id {
        ELECTRICAL_QUIZ => Some(ELECTRICAL_QUIZ),
        PHYSICS_QUIZ => Some(PHYSICS_QUIZ),
        PERFORMING_ARTS_QUIZ => Some(PERFORMING_ARTS_QUIZ),
        SPORTS_QUIZ => Some(SPORTS_QUIZ),
        _ => None,
    }
}

/// The question bank a quiz room uses, if the location is a quiz room.
pub fn quiz_bank(id: &str) -> Option<Vec<tour_engine::Question>> {
    match id {
        ELECTRICAL_QUIZ => Some(crate::quizzes::electrical()),
        PHYSICS_QUIZ => Some(crate::quizzes::physics()),
        PERFORMING_ARTS_QUIZ => Some(crate::quizzes::performing_arts()),
        SPORTS_QUIZ => Some(crate::quizzes::sports()),
        _ => None,
    }
}
