//! The scene transition graph: named locations connected by triggers.
//!
//! Locations and transitions are static, defined once at startup. The graph
//! answers two questions and nothing more: "a trigger fired here, where do I
//! go and with what payload?" and "I arrived here with this payload, where
//! does the player stand?". Anything it does not recognise is a silent no-op.

use std::collections::HashMap;

use glam::Vec2;

/// Entry parameters handed from one location to the next.
///
/// A plain record of optional fields. Consumers only check presence and fall
/// back to defaults; nothing here is ever validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    /// Explicit spawn coordinate at the destination.
    pub entry: Option<Vec2>,
    /// Ask the host to fade the camera back in on arrival.
    pub fade_in: bool,
    /// Identifier of the location the player came from. Filled in by the
    /// session at fire time when the transition leaves it unset.
    pub origin: Option<String>,
}

impl Payload {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn at(mut self, entry: Vec2) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn fading_in(mut self) -> Self {
        self.fade_in = true;
        self
    }

    pub fn from_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

/// How a location turns an incoming payload into a spawn coordinate.
///
/// Resolution order: explicit `entry` in the payload, then a re-entry point
/// keyed by the payload's origin, then the location default. Pure function
/// of the payload; an empty payload always yields `default`.
#[derive(Debug, Clone)]
pub struct SpawnRule {
    default: Vec2,
    re_entry: HashMap<String, Vec2>,
}

impl SpawnRule {
    pub fn new(default: Vec2) -> Self {
        Self {
            default,
            re_entry: HashMap::new(),
        }
    }

    /// Register a spawn coordinate used when arriving from `origin` without
    /// explicit entry coordinates.
    pub fn re_entry(mut self, origin: impl Into<String>, at: Vec2) -> Self {
        self.re_entry.insert(origin.into(), at);
        self
    }

    pub fn default_spawn(&self) -> Vec2 {
        self.default
    }

    pub fn resolve(&self, payload: &Payload) -> Vec2 {
        if let Some(entry) = payload.entry {
            return entry;
        }
        payload
            .origin
            .as_ref()
            .and_then(|origin| self.re_entry.get(origin).copied())
            .unwrap_or(self.default)
    }
}

/// A directed edge: trigger → destination, carrying the entry payload.
#[derive(Debug, Clone)]
pub struct Transition {
    pub dest: String,
    pub payload: Payload,
    /// Whether the host fades to black before the commit. Almost every
    /// transition in a tour does; quiz exits cut straight over.
    pub fade_out: bool,
    /// Optional guard cooldown. `None` means the guard re-arms only when
    /// the trigger condition goes false and true again.
    pub cooldown: Option<f32>,
}

impl Transition {
    pub fn to(dest: impl Into<String>) -> Self {
        Self {
            dest: dest.into(),
            payload: Payload::empty(),
            fade_out: true,
            cooldown: None,
        }
    }

    pub fn entry(mut self, at: Vec2) -> Self {
        self.payload.entry = Some(at);
        self
    }

    pub fn fade_in(mut self) -> Self {
        self.payload.fade_in = true;
        self
    }

    /// Commit without the fade-to-black beat.
    pub fn instant(mut self) -> Self {
        self.fade_out = false;
        self
    }

    pub fn with_cooldown(mut self, secs: f32) -> Self {
        self.cooldown = Some(secs);
        self
    }
}

/// A named node: its outgoing transitions and its spawn-resolution rule.
#[derive(Debug, Clone)]
pub struct Location {
    id: String,
    spawn: SpawnRule,
    transitions: HashMap<String, Transition>,
}

impl Location {
    pub fn new(id: impl Into<String>, spawn: SpawnRule) -> Self {
        Self {
            id: id.into(),
            spawn,
            transitions: HashMap::new(),
        }
    }

    pub fn on(mut self, trigger: impl Into<String>, transition: Transition) -> Self {
        self.transitions.insert(trigger.into(), transition);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn spawn_rule(&self) -> &SpawnRule {
        &self.spawn
    }
}

/// The full graph. Built once, read-only afterwards; the only mutable piece
/// of the whole tour is the current-location pointer, and that lives in the
/// session, not here.
#[derive(Debug, Clone, Default)]
pub struct TransitionGraph {
    locations: HashMap<String, Location>,
}

impl TransitionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, location: Location) {
        self.locations.insert(location.id.clone(), location);
    }

    pub fn with(mut self, location: Location) -> Self {
        self.add(location);
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over every location id, in no particular order.
    pub fn location_ids(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// Look up an outgoing transition without firing it.
    pub fn transition(&self, location: &str, trigger: &str) -> Option<&Transition> {
        self.locations.get(location)?.transitions.get(trigger)
    }

    /// Decide where a fired trigger leads. Returns the destination id and
    /// the payload template to hand it.
    ///
    /// Unknown location, unknown trigger, or a transition pointing at a
    /// destination that does not exist all return `None`. Nothing here is
    /// ever an error; the tour keeps running.
    pub fn fire_trigger(&self, location: &str, trigger: &str) -> Option<(&str, &Transition)> {
        let transition = self.locations.get(location)?.transitions.get(trigger)?;
        if !self.locations.contains_key(&transition.dest) {
            log::debug!(
                "trigger '{}' at '{}' points to unknown location '{}'",
                trigger,
                location,
                transition.dest
            );
            return None;
        }
        Some((transition.dest.as_str(), transition))
    }

    /// Turn an incoming payload into a spawn coordinate at `location`.
    /// Unknown locations resolve to the origin of the world.
    pub fn resolve_spawn(&self, location: &str, payload: &Payload) -> Vec2 {
        self.locations
            .get(location)
            .map(|loc| loc.spawn.resolve(payload))
            .unwrap_or(Vec2::ZERO)
    }
}
