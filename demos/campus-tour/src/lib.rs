//! MMCOE campus tour, built on the `tour-engine` runtime.
//!
//! The engine owns movement, trigger zones, fades and the transition
//! graph; this crate supplies the campus itself: the sixteen locations
//! and their wiring ([`campus`]), the lab quizzes ([`quizzes`]), the
//! NPC scripts ([`dialogue`]) and the [`CampusTour`] game that drives
//! them through a [`tour_engine::GameRunner`].

pub mod campus;
pub mod dialogue;
pub mod game;
pub mod quizzes;

pub use game::{CampusTour, BTN_LIFT, BTN_QUIZ, BTN_START};

#[cfg(test)]
mod tests {
    use tour_engine::TourManifest;

    #[test]
    fn manifest_has_art_for_every_location_but_the_loader() {
        let manifest =
            TourManifest::from_json(include_str!("../manifest.json")).unwrap();
        let graph = crate::campus::campus_graph();
        for id in graph.location_ids() {
            if id == crate::campus::LOADING {
                // The intro plays its own image sequence, no backdrop.
                assert!(manifest.background(id).is_none());
            } else {
                assert!(
                    manifest.background(id).is_some(),
                    "no background for {id}"
                );
            }
        }
        assert_eq!(manifest.spritesheets["character"].frame_width, 48);
    }
}
