//! Per-tick zone evaluation: sample every trigger zone against the player's
//! bounds and feed the results to the session's guards.

use glam::Vec2;

use crate::components::zone::TriggerZone;
use crate::core::session::TourSession;

/// World-space body size of the 48px character at scale 6.
pub const PLAYER_BODY: Vec2 = Vec2::new(288.0, 288.0);

/// Sample all zones for one tick. Every zone is reported, active or not —
/// guards need the falling edges too.
pub fn evaluate_zones(
    session: &mut TourSession,
    zones: &[TriggerZone],
    player_pos: Vec2,
    player_body: Vec2,
    dt: f32,
) {
    for zone in zones {
        let active = zone.shape.overlaps(player_pos, player_body);
        session.overlap(&zone.trigger, active, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::{Location, SpawnRule, Transition, TransitionGraph};

    const DT: f32 = 1.0 / 60.0;

    fn session_with_door() -> TourSession {
        let graph = TransitionGraph::new()
            .with(
                Location::new("Hall", SpawnRule::new(Vec2::ZERO))
                    .on("door", Transition::to("Yard").instant()),
            )
            .with(Location::new("Yard", SpawnRule::new(Vec2::ZERO)));
        TourSession::new(graph, "Hall")
    }

    #[test]
    fn standing_in_zone_fires_transition_once() {
        let mut s = session_with_door();
        let zones = vec![TriggerZone::rect(
            "door",
            Vec2::new(100.0, 100.0),
            Vec2::new(50.0, 50.0),
        )];

        let mut commits = 0;
        for _ in 0..10 {
            evaluate_zones(&mut s, &zones, Vec2::new(100.0, 100.0), PLAYER_BODY, DT);
            if s.tick(DT).is_some() {
                commits += 1;
            }
        }
        assert_eq!(commits, 1);
        assert_eq!(s.current(), "Yard");
    }

    #[test]
    fn walking_past_zone_does_nothing() {
        let mut s = session_with_door();
        let zones = vec![TriggerZone::rect(
            "door",
            Vec2::new(5000.0, 5000.0),
            Vec2::new(50.0, 50.0),
        )];
        for _ in 0..10 {
            evaluate_zones(&mut s, &zones, Vec2::new(100.0, 100.0), PLAYER_BODY, DT);
            assert!(s.tick(DT).is_none());
        }
        assert_eq!(s.current(), "Hall");
    }
}
