//! Sprite animation state: named frame sequences over a spritesheet strip.

use std::collections::HashMap;

/// A single animation sequence: consecutive frame indices in a strip.
#[derive(Debug, Clone)]
pub struct AnimationDef {
    pub frames: Vec<u32>,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
}

impl AnimationDef {
    /// Frames `start..=end` of a strip at `fps`, looping.
    pub fn strip(start: u32, end: u32, fps: f32) -> Self {
        Self {
            frames: (start..=end).collect(),
            frame_duration: 1.0 / fps,
            looping: true,
        }
    }

    pub fn once(mut self) -> Self {
        self.looping = false;
        self
    }
}

/// Animation playback state for an entity.
#[derive(Debug, Clone, Default)]
pub struct AnimationComponent {
    animations: HashMap<String, AnimationDef>,
    current: String,
    frame_index: usize,
    frame_timer: f32,
}

impl AnimationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, def: AnimationDef) -> Self {
        let name = name.into();
        if self.current.is_empty() {
            self.current = name.clone();
        }
        self.animations.insert(name, def);
        self
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Restart the named animation from frame zero. Unknown names are
    /// ignored.
    pub fn play(&mut self, name: &str) {
        if self.animations.contains_key(name) {
            self.current = name.to_string();
            self.frame_index = 0;
            self.frame_timer = 0.0;
        }
    }

    /// Switch animations only when the name differs, so a held movement key
    /// does not restart the run cycle every tick.
    pub fn play_if_different(&mut self, name: &str) {
        if self.current != name {
            self.play(name);
        }
    }

    /// Frame index for the host to render.
    pub fn current_frame(&self) -> Option<u32> {
        self.animations
            .get(&self.current)
            .and_then(|def| def.frames.get(self.frame_index).copied())
    }

    /// Advance by dt seconds. Returns true if the visible frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(def) = self.animations.get(&self.current) else {
            return false;
        };
        if def.frames.is_empty() {
            return false;
        }

        self.frame_timer += dt;
        let mut changed = false;
        while self.frame_timer >= def.frame_duration {
            self.frame_timer -= def.frame_duration;
            if self.frame_index + 1 < def.frames.len() {
                self.frame_index += 1;
                changed = true;
            } else if def.looping {
                self.frame_index = 0;
                changed = true;
            } else {
                break;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_run() -> AnimationComponent {
        AnimationComponent::new()
            .with("idle", AnimationDef::strip(0, 5, 10.0))
            .with("run", AnimationDef::strip(0, 7, 10.0))
    }

    #[test]
    fn ticks_through_frames_and_loops() {
        let mut anim = idle_run();
        assert_eq!(anim.current_frame(), Some(0));
        anim.tick(0.15);
        assert_eq!(anim.current_frame(), Some(1));
        anim.tick(0.5); // past the end of the 6-frame loop
        assert_eq!(anim.current(), "idle");
        assert!(anim.current_frame().unwrap() <= 5);
    }

    #[test]
    fn play_if_different_does_not_restart() {
        let mut anim = idle_run();
        anim.tick(0.25);
        let frame = anim.current_frame();
        anim.play_if_different("idle");
        assert_eq!(anim.current_frame(), frame);

        anim.play_if_different("run");
        assert_eq!(anim.current(), "run");
        assert_eq!(anim.current_frame(), Some(0));
    }

    #[test]
    fn non_looping_sticks_on_last_frame() {
        let mut anim =
            AnimationComponent::new().with("wave", AnimationDef::strip(0, 2, 10.0).once());
        anim.tick(1.0);
        assert_eq!(anim.current_frame(), Some(2));
    }

    #[test]
    fn unknown_name_is_ignored() {
        let mut anim = idle_run();
        anim.play("teleport");
        assert_eq!(anim.current(), "idle");
    }
}
