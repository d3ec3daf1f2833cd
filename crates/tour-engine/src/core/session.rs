//! The tour session: single owner of the current-location pointer.
//!
//! Everything else reads the current location through this type; nothing
//! else ever writes it. Trigger activity flows in, guard state machines
//! decide whether a transition fires, the fade timer decides when it
//! commits, and `Arrival`s flow out.

use std::collections::HashMap;

use glam::Vec2;

use crate::api::types::TourEvent;
use crate::core::fade::FadeTimer;
use crate::core::graph::{Payload, TransitionGraph};
use crate::core::trigger::TriggerGuard;

/// The outcome of a committed transition, consumed by the game to rebuild
/// its scene at the destination.
#[derive(Debug, Clone)]
pub struct Arrival {
    pub location: String,
    pub spawn: Vec2,
    pub fade_in: bool,
    pub origin: Option<String>,
}

#[derive(Debug)]
struct Pending {
    dest: String,
    payload: Payload,
    timer: FadeTimer,
}

/// Session state driving the transition graph.
///
/// Guards are keyed by trigger id and scoped to the current location; they
/// are dropped wholesale on every commit, so a location always starts with
/// fresh guards when re-entered, exactly like the original scenes that
/// reset their flags on creation.
pub struct TourSession {
    graph: TransitionGraph,
    current: String,
    guards: HashMap<String, TriggerGuard>,
    pending: Option<Pending>,
    fade_in: Option<FadeTimer>,
    fade_secs: f32,
    events: Vec<TourEvent>,
}

impl TourSession {
    pub fn new(graph: TransitionGraph, start: &str) -> Self {
        Self {
            graph,
            current: start.to_string(),
            guards: HashMap::new(),
            pending: None,
            fade_in: None,
            fade_secs: 1.0,
            events: Vec::new(),
        }
    }

    /// A session with no graph and no location; placeholder until
    /// `EngineContext::start_tour` installs the real one.
    pub fn empty() -> Self {
        Self::new(TransitionGraph::new(), "")
    }

    pub fn with_fade_secs(mut self, secs: f32) -> Self {
        self.fade_secs = secs;
        self
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    /// Whether a transition has been scheduled and is waiting on its fade.
    /// Movement and further triggers are ignored while this holds.
    pub fn in_transit(&self) -> bool {
        self.pending.is_some()
    }

    /// Fade-in progress at the current location, if one is running.
    pub fn fade_in_progress(&self) -> Option<f32> {
        self.fade_in.as_ref().map(|t| t.progress())
    }

    /// Synthetic arrival for the starting location (empty payload).
    pub fn initial_arrival(&self) -> Arrival {
        Arrival {
            location: self.current.clone(),
            spawn: self.graph.resolve_spawn(&self.current, &Payload::empty()),
            fade_in: false,
            origin: None,
        }
    }

    /// Feed one frame of a continuous trigger condition (a zone overlap).
    /// Fires the transition on the guard's rising edge, at most once while
    /// the condition stays true.
    pub fn overlap(&mut self, trigger: &str, active: bool, dt: f32) {
        if !self.guards.contains_key(trigger) {
            let cooldown = self
                .graph
                .transition(&self.current, trigger)
                .and_then(|t| t.cooldown);
            let guard = match cooldown {
                Some(secs) => TriggerGuard::with_cooldown(secs),
                None => TriggerGuard::new(),
            };
            self.guards.insert(trigger.to_string(), guard);
        }
        let mut fired = false;
        if let Some(guard) = self.guards.get_mut(trigger) {
            guard.update(active, dt);
            fired = guard.try_fire();
        }
        if fired {
            self.schedule(trigger);
        }
    }

    /// Fire a discrete trigger (key press, UI button click).
    pub fn press(&mut self, trigger: &str) {
        self.schedule(trigger);
    }

    fn schedule(&mut self, trigger: &str) {
        // Once a fade is in flight the transition always completes;
        // everything else is ignored until it does.
        if self.pending.is_some() {
            return;
        }
        let Some((dest, transition)) = self.graph.fire_trigger(&self.current, trigger) else {
            return;
        };
        let dest = dest.to_string();
        let mut payload = transition.payload.clone();
        if payload.origin.is_none() {
            payload.origin = Some(self.current.clone());
        }
        let duration = if transition.fade_out {
            self.fade_secs
        } else {
            0.0
        };
        log::debug!(
            "trigger '{}' at '{}': scheduling transition to '{}'",
            trigger,
            self.current,
            dest
        );
        if duration > 0.0 {
            self.events.push(TourEvent::FadeOutStarted {
                to: dest.clone(),
                duration,
            });
        }
        self.pending = Some(Pending {
            dest,
            payload,
            timer: FadeTimer::new(duration),
        });
    }

    /// Advance timers. Returns the arrival when a pending transition
    /// commits this tick.
    pub fn tick(&mut self, dt: f32) -> Option<Arrival> {
        if let Some(timer) = &mut self.fade_in {
            if timer.tick(dt) {
                self.fade_in = None;
            }
        }

        let pending = self.pending.as_mut()?;
        if !pending.timer.tick(dt) {
            return None;
        }
        let Pending { dest, payload, .. } = self.pending.take()?;

        let spawn = self.graph.resolve_spawn(&dest, &payload);
        log::info!("transition: '{}' -> '{}'", self.current, dest);
        self.guards.clear();
        self.current = dest.clone();
        if payload.fade_in {
            self.fade_in = Some(FadeTimer::new(self.fade_secs));
        }
        self.events.push(TourEvent::LocationStarted {
            location: dest.clone(),
            spawn,
            fade_in: payload.fade_in,
        });
        Some(Arrival {
            location: dest,
            spawn,
            fade_in: payload.fade_in,
            origin: payload.origin,
        })
    }

    /// Drain host events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<TourEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::{Location, SpawnRule, Transition};

    const DT: f32 = 1.0 / 60.0;

    fn session() -> TourSession {
        let graph = TransitionGraph::new()
            .with(
                Location::new("Hall", SpawnRule::new(Vec2::new(50.0, 50.0)))
                    .on("door", Transition::to("Yard").fade_in())
                    .on("hatch", Transition::to("Attic"))
                    .on("chute", Transition::to("Yard").instant().entry(Vec2::new(7.0, 8.0))),
            )
            .with(Location::new(
                "Yard",
                SpawnRule::new(Vec2::new(10.0, 10.0)).re_entry("Hall", Vec2::new(90.0, 90.0)),
            ));
        // "Attic" deliberately missing from the graph.
        TourSession::new(graph, "Hall")
    }

    fn run_until_commit(s: &mut TourSession, max_ticks: usize) -> Option<Arrival> {
        for _ in 0..max_ticks {
            if let Some(arrival) = s.tick(DT) {
                return Some(arrival);
            }
        }
        None
    }

    #[test]
    fn continuous_overlap_changes_location_exactly_once() {
        let mut s = session().with_fade_secs(0.5);
        let mut commits = 0;
        for _ in 0..240 {
            s.overlap("door", true, DT);
            if s.tick(DT).is_some() {
                commits += 1;
            }
        }
        assert_eq!(commits, 1);
        assert_eq!(s.current(), "Yard");
    }

    #[test]
    fn commit_waits_for_fade_and_carries_payload() {
        let mut s = session();
        s.press("door");
        assert!(s.in_transit());
        assert_eq!(s.current(), "Hall");

        let arrival = run_until_commit(&mut s, 100).expect("fade should commit within 100 ticks");
        assert_eq!(arrival.location, "Yard");
        assert!(arrival.fade_in);
        // Origin auto-filled; no entry coords, so the Hall re-entry point.
        assert_eq!(arrival.origin.as_deref(), Some("Hall"));
        assert_eq!(arrival.spawn, Vec2::new(90.0, 90.0));
    }

    #[test]
    fn instant_transition_commits_next_tick() {
        let mut s = session();
        s.press("chute");
        let arrival = s.tick(DT).expect("instant transition commits immediately");
        assert_eq!(arrival.location, "Yard");
        assert_eq!(arrival.spawn, Vec2::new(7.0, 8.0));
        assert!(!arrival.fade_in);
    }

    #[test]
    fn unknown_destination_is_noop() {
        let mut s = session();
        s.press("hatch");
        assert!(!s.in_transit());
        assert!(run_until_commit(&mut s, 120).is_none());
        assert_eq!(s.current(), "Hall");
    }

    #[test]
    fn unknown_trigger_is_noop() {
        let mut s = session();
        s.press("window");
        s.overlap("window", true, DT);
        assert!(!s.in_transit());
        assert_eq!(s.current(), "Hall");
    }

    #[test]
    fn presses_during_fade_are_ignored() {
        let mut s = session();
        s.press("door");
        s.press("chute");
        let arrival = run_until_commit(&mut s, 100).unwrap();
        assert_eq!(arrival.location, "Yard");
        assert_eq!(arrival.spawn, Vec2::new(90.0, 90.0));
    }

    #[test]
    fn events_surface_fade_and_location_start() {
        let mut s = session();
        s.press("door");
        run_until_commit(&mut s, 100);
        let events = s.drain_events();
        assert!(matches!(
            events[0],
            TourEvent::FadeOutStarted { ref to, .. } if to == "Yard"
        ));
        assert!(matches!(
            events[1],
            TourEvent::LocationStarted { ref location, fade_in: true, .. } if location == "Yard"
        ));
    }

    #[test]
    fn fade_in_runs_after_arrival() {
        let mut s = session().with_fade_secs(0.5);
        s.press("door");
        run_until_commit(&mut s, 100).unwrap();
        assert!(s.fade_in_progress().is_some());
        for _ in 0..40 {
            s.tick(DT);
        }
        assert!(s.fade_in_progress().is_none());
    }
}
