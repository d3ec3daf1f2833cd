//! One-shot guards for transition triggers.
//!
//! A spatial overlap stays true for many frames while the player stands in
//! a zone; the transition behind it must still fire exactly once. Each
//! trigger gets a small state machine instead of an ad hoc boolean flag.

/// Guard phases.
///
/// `Idle` — condition currently false, ready to arm.
/// `Armed` — condition went true, the trigger may fire once.
/// `Fired` — consumed; waits for the condition to drop before re-arming.
/// `Cooldown` — consumed; re-arms on a timer even if the condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    Idle,
    Armed,
    Fired,
    Cooldown,
}

/// Per-trigger one-shot guard.
#[derive(Debug, Clone)]
pub struct TriggerGuard {
    phase: TriggerPhase,
    cooldown: Option<f32>,
    remaining: f32,
}

impl TriggerGuard {
    /// A guard that re-arms only on a falling edge of its condition.
    pub fn new() -> Self {
        Self {
            phase: TriggerPhase::Idle,
            cooldown: None,
            remaining: 0.0,
        }
    }

    /// A guard that also re-arms after `secs` regardless of the condition.
    pub fn with_cooldown(secs: f32) -> Self {
        Self {
            phase: TriggerPhase::Idle,
            cooldown: Some(secs),
            remaining: 0.0,
        }
    }

    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    /// Feed the current condition sample and advance timers.
    pub fn update(&mut self, active: bool, dt: f32) {
        match self.phase {
            TriggerPhase::Idle => {
                if active {
                    self.phase = TriggerPhase::Armed;
                }
            }
            TriggerPhase::Armed => {
                if !active {
                    self.phase = TriggerPhase::Idle;
                }
            }
            TriggerPhase::Fired => {
                if !active {
                    self.phase = TriggerPhase::Idle;
                }
            }
            TriggerPhase::Cooldown => {
                self.remaining -= dt;
                if self.remaining <= 0.0 {
                    self.phase = if active {
                        TriggerPhase::Armed
                    } else {
                        TriggerPhase::Idle
                    };
                }
            }
        }
    }

    /// Consume the guard. Returns true exactly once per activation.
    pub fn try_fire(&mut self) -> bool {
        if self.phase != TriggerPhase::Armed {
            return false;
        }
        match self.cooldown {
            Some(secs) => {
                self.phase = TriggerPhase::Cooldown;
                self.remaining = secs;
            }
            None => self.phase = TriggerPhase::Fired,
        }
        true
    }
}

impl Default for TriggerGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_while_condition_holds() {
        let mut g = TriggerGuard::new();
        let mut fires = 0;
        for _ in 0..120 {
            g.update(true, 1.0 / 60.0);
            if g.try_fire() {
                fires += 1;
            }
        }
        assert_eq!(fires, 1);
        assert_eq!(g.phase(), TriggerPhase::Fired);
    }

    #[test]
    fn rearms_on_falling_edge() {
        let mut g = TriggerGuard::new();
        g.update(true, 0.016);
        assert!(g.try_fire());

        // Still overlapping: nothing.
        g.update(true, 0.016);
        assert!(!g.try_fire());

        // Step out, step back in.
        g.update(false, 0.016);
        assert_eq!(g.phase(), TriggerPhase::Idle);
        g.update(true, 0.016);
        assert!(g.try_fire());
    }

    #[test]
    fn cooldown_rearms_without_falling_edge() {
        let mut g = TriggerGuard::with_cooldown(1.0);
        g.update(true, 0.016);
        assert!(g.try_fire());
        assert_eq!(g.phase(), TriggerPhase::Cooldown);

        // Condition never drops; half the cooldown is not enough.
        g.update(true, 0.5);
        assert!(!g.try_fire());

        g.update(true, 0.6);
        assert!(g.try_fire());
    }

    #[test]
    fn never_fires_while_idle() {
        let mut g = TriggerGuard::new();
        assert!(!g.try_fire());
        g.update(false, 0.016);
        assert!(!g.try_fire());
    }
}
