//! Scripted dialogue: a linear list of lines shown one at a time.
//!
//! Lines advance on interact (E key or tap) or on an auto-advance timer.
//! Walking away hides the box and rewinds. After the last line the script
//! is done; scripts with a replay cooldown become available again once it
//! elapses.

/// A dialogue script attached to a spot in a location.
#[derive(Debug, Clone)]
pub struct DialogueScript {
    pub speaker: String,
    pub lines: Vec<String>,
    /// Seconds before a line advances on its own; `None` waits for input.
    pub auto_advance: Option<f32>,
    /// Seconds after completion before the script can play again;
    /// `None` means it never replays.
    pub replay_cooldown: Option<f32>,
}

impl DialogueScript {
    pub fn new(speaker: impl Into<String>, lines: &[&str]) -> Self {
        Self {
            speaker: speaker.into(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
            auto_advance: Some(7.0),
            replay_cooldown: Some(30.0),
        }
    }

    pub fn manual(mut self) -> Self {
        self.auto_advance = None;
        self
    }

    pub fn no_replay(mut self) -> Self {
        self.replay_cooldown = None;
        self
    }
}

/// What changed during a dialogue tick, for event emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueChange {
    None,
    /// A (new) line became visible.
    Line,
    /// The box was hidden (walked away or script finished).
    Hidden,
}

/// Playback state for one script.
#[derive(Debug, Clone)]
pub struct DialogueState {
    script: DialogueScript,
    current: usize,
    visible: bool,
    completed: bool,
    line_timer: f32,
    cooldown_remaining: f32,
}

impl DialogueState {
    pub fn new(script: DialogueScript) -> Self {
        Self {
            script,
            current: 0,
            visible: false,
            completed: false,
            line_timer: 0.0,
            cooldown_remaining: 0.0,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn speaker(&self) -> &str {
        &self.script.speaker
    }

    /// The line currently on screen.
    pub fn current_line(&self) -> Option<&str> {
        if self.visible {
            self.script.lines.get(self.current).map(String::as_str)
        } else {
            None
        }
    }

    /// One tick: `near` is whether the player is inside the talk radius,
    /// `advance` whether they pressed interact or tapped this tick.
    pub fn tick(&mut self, near: bool, advance: bool, dt: f32) -> DialogueChange {
        if self.completed && self.script.replay_cooldown.is_some() {
            self.cooldown_remaining -= dt;
            if self.cooldown_remaining <= 0.0 {
                self.completed = false;
                self.current = 0;
            }
        }

        if !near {
            if self.visible {
                self.visible = false;
                self.current = 0;
                return DialogueChange::Hidden;
            }
            return DialogueChange::None;
        }

        if self.completed {
            return DialogueChange::None;
        }

        if !self.visible {
            self.visible = true;
            self.line_timer = 0.0;
            return DialogueChange::Line;
        }

        self.line_timer += dt;
        let timed_out = self
            .script
            .auto_advance
            .map(|t| self.line_timer >= t)
            .unwrap_or(false);

        if advance || timed_out {
            self.current += 1;
            self.line_timer = 0.0;
            if self.current >= self.script.lines.len() {
                self.visible = false;
                self.current = 0;
                self.completed = true;
                self.cooldown_remaining = self.script.replay_cooldown.unwrap_or(0.0);
                return DialogueChange::Hidden;
            }
            return DialogueChange::Line;
        }

        DialogueChange::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn guide() -> DialogueState {
        DialogueState::new(DialogueScript::new("guide", &["one", "two", "three"]))
    }

    #[test]
    fn shows_first_line_on_approach() {
        let mut d = guide();
        assert_eq!(d.tick(true, false, DT), DialogueChange::Line);
        assert_eq!(d.current_line(), Some("one"));
    }

    #[test]
    fn advances_on_interact_and_completes() {
        let mut d = guide();
        d.tick(true, false, DT);
        assert_eq!(d.tick(true, true, DT), DialogueChange::Line);
        assert_eq!(d.current_line(), Some("two"));
        d.tick(true, true, DT);
        assert_eq!(d.tick(true, true, DT), DialogueChange::Hidden);
        assert!(d.completed());
        assert!(d.current_line().is_none());
    }

    #[test]
    fn walking_away_hides_and_rewinds() {
        let mut d = guide();
        d.tick(true, false, DT);
        d.tick(true, true, DT);
        assert_eq!(d.tick(false, false, DT), DialogueChange::Hidden);
        // Coming back restarts from the first line.
        d.tick(true, false, DT);
        assert_eq!(d.current_line(), Some("one"));
    }

    #[test]
    fn auto_advances_after_seven_seconds() {
        let mut d = guide();
        d.tick(true, false, DT);
        let mut elapsed = 0.0;
        while elapsed < 7.5 {
            d.tick(true, false, 0.25);
            elapsed += 0.25;
        }
        assert_eq!(d.current_line(), Some("two"));
    }

    #[test]
    fn completed_script_stays_quiet_until_cooldown() {
        let mut d = guide();
        d.tick(true, false, DT);
        for _ in 0..3 {
            d.tick(true, true, DT);
        }
        assert!(d.completed());

        // Standing around right after: nothing.
        assert_eq!(d.tick(true, false, DT), DialogueChange::None);
        assert!(!d.visible());

        // After the 30s replay cooldown it plays again.
        for _ in 0..((31.0 / 0.5) as usize) {
            d.tick(true, false, 0.5);
        }
        assert!(d.visible());
        assert_eq!(d.current_line(), Some("one"));
    }
}
