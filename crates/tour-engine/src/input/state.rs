//! Per-frame input state derived from the raw event queue.
//!
//! Movement wants "is this key held right now?"; interaction wants "was
//! this key pressed this frame?". Both are folded from the discrete
//! key-up/key-down stream once per frame.

use glam::Vec2;

use crate::input::queue::{InputEvent, InputQueue};

// Browser key codes, matching what the web host sends.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_E: u32 = 69;

#[derive(Debug, Default)]
pub struct InputState {
    down: Vec<u32>,
    just_pressed: Vec<u32>,
    pointer: Option<Vec2>,
    frame_events: Vec<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold this frame's events into held/just-pressed state. Call once
    /// per frame before the update steps.
    pub fn apply(&mut self, queue: &InputQueue) {
        self.just_pressed.clear();
        self.frame_events.clear();
        for event in queue.iter() {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    if !self.down.contains(&key_code) {
                        self.down.push(key_code);
                        self.just_pressed.push(key_code);
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    self.down.retain(|&k| k != key_code);
                }
                InputEvent::PointerMove { x, y } => {
                    self.pointer = Some(Vec2::new(x, y));
                }
                InputEvent::PointerDown { x, y } | InputEvent::PointerUp { x, y } => {
                    self.pointer = Some(Vec2::new(x, y));
                }
                InputEvent::Button { .. } => {}
            }
            self.frame_events.push(*event);
        }
    }

    /// Drop the one-shot view (just-pressed keys, raw events) while keeping
    /// held state. The runner calls this between catch-up steps so a single
    /// press is not handled once per step.
    pub fn clear_one_shots(&mut self) {
        self.just_pressed.clear();
        self.frame_events.clear();
    }

    /// Whether a key is currently held.
    pub fn is_down(&self, key_code: u32) -> bool {
        self.down.contains(&key_code)
    }

    /// Whether a key went down this frame (one-shot).
    pub fn just_pressed(&self, key_code: u32) -> bool {
        self.just_pressed.contains(&key_code)
    }

    /// Last known pointer position.
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Raw events received this frame, for widgets that need the stream
    /// (arrow buttons, tap-to-advance dialogue).
    pub fn frame_events(&self) -> &[InputEvent] {
        &self.frame_events
    }

    /// Any tap/click this frame?
    pub fn tapped(&self) -> bool {
        self.frame_events
            .iter()
            .any(|e| matches!(e, InputEvent::PointerDown { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_across_frames_just_pressed_once() {
        let mut state = InputState::new();
        let mut q = InputQueue::new();

        q.push(InputEvent::KeyDown { key_code: KEY_LEFT });
        state.apply(&q);
        assert!(state.is_down(KEY_LEFT));
        assert!(state.just_pressed(KEY_LEFT));

        // Next frame, no new events: still held, no longer "just pressed".
        q.drain();
        state.apply(&q);
        assert!(state.is_down(KEY_LEFT));
        assert!(!state.just_pressed(KEY_LEFT));

        q.push(InputEvent::KeyUp { key_code: KEY_LEFT });
        state.apply(&q);
        assert!(!state.is_down(KEY_LEFT));
    }

    #[test]
    fn repeated_key_down_is_not_just_pressed_again() {
        let mut state = InputState::new();
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: KEY_E });
        state.apply(&q);
        q.drain();

        // Browser auto-repeat sends KeyDown again while held.
        q.push(InputEvent::KeyDown { key_code: KEY_E });
        state.apply(&q);
        assert!(!state.just_pressed(KEY_E));
    }

    #[test]
    fn pointer_tracking_and_tap() {
        let mut state = InputState::new();
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 3.0, y: 4.0 });
        state.apply(&q);
        assert_eq!(state.pointer(), Some(Vec2::new(3.0, 4.0)));
        assert!(state.tapped());
    }
}
