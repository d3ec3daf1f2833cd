use glam::Vec2;

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Events surfaced to the embedding host (the rendering/UI layer).
///
/// The engine never draws or fades anything itself; it announces what the
/// host should do and carries on. This is the whole boundary with the
/// external renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum TourEvent {
    /// A transition was scheduled; the host should fade the camera to black
    /// over `duration` seconds. The commit happens on its own once the
    /// timer runs out.
    FadeOutStarted { to: String, duration: f32 },
    /// The current location changed. `fade_in` asks the host to fade the
    /// camera back in at the new location.
    LocationStarted {
        location: String,
        spawn: Vec2,
        fade_in: bool,
    },
    /// A dialogue line became visible.
    DialogueLine { speaker: String, line: String },
    /// The dialogue box was dismissed.
    DialogueHidden,
    /// A quiz ran out of questions and is showing its score screen.
    QuizFinished { score: u32, total: u32 },
    /// The tour reached its terminal scene and stopped.
    TourEnded,
}
