//! On-screen arrow pad for touch movement.
//!
//! Four arrows anchored to the bottom-right corner of the screen. Each
//! arrow's hit area is a circle larger than the drawn sprite so fat
//! fingers still land. Pointer-up anywhere releases everything, and a
//! pointer that slides off an arrow releases that arrow.

use glam::Vec2;

use crate::input::queue::InputEvent;
use crate::systems::movement::MoveIntent;

/// Unscaled arrow sprite size in pixels.
pub const ARROW_FRAME: f32 = 120.0;

#[derive(Debug, Clone, Copy)]
pub struct ArrowControlsConfig {
    /// Screen size in pixels.
    pub screen: Vec2,
    /// Display scale applied to each arrow sprite.
    pub arrow_scale: f32,
    /// Hit circle radius as a multiple of the displayed half-size.
    pub hit_scaler: f32,
    /// Gap between the pad center and each arrow, in pixels.
    pub padding: f32,
}

impl ArrowControlsConfig {
    pub fn new(screen: Vec2) -> Self {
        Self {
            screen,
            arrow_scale: 0.7,
            hit_scaler: 1.5,
            padding: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDir {
    Left,
    Right,
    Up,
    Down,
}

const DIRS: [ArrowDir; 4] = [
    ArrowDir::Left,
    ArrowDir::Right,
    ArrowDir::Up,
    ArrowDir::Down,
];

struct Arrow {
    dir: ArrowDir,
    center: Vec2,
    hit_radius: f32,
    held: bool,
}

pub struct ArrowControls {
    arrows: [Arrow; 4],
}

impl ArrowControls {
    pub fn new(config: ArrowControlsConfig) -> Self {
        // Pad anchored near the bottom-right corner.
        let center = Vec2::new(config.screen.x - 190.0, config.screen.y - 120.0);
        let size = ARROW_FRAME * config.arrow_scale;
        let offset = size + config.padding;
        let hit_radius = size * 0.5 * config.hit_scaler;
        let place = |dir: ArrowDir| {
            let at = match dir {
                ArrowDir::Left => center - Vec2::new(offset, 0.0),
                ArrowDir::Right => center + Vec2::new(offset, 0.0),
                ArrowDir::Up => center - Vec2::new(0.0, offset),
                ArrowDir::Down => center + Vec2::new(0.0, offset),
            };
            Arrow {
                dir,
                center: at,
                hit_radius,
                held: false,
            }
        };
        Self {
            arrows: DIRS.map(place),
        }
    }

    /// Feed one pointer event through the pad.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                let at = Vec2::new(x, y);
                for arrow in &mut self.arrows {
                    if at.distance(arrow.center) <= arrow.hit_radius {
                        arrow.held = true;
                    }
                }
            }
            InputEvent::PointerUp { .. } => self.release_all(),
            InputEvent::PointerMove { x, y } => {
                // Sliding off an arrow releases it.
                let at = Vec2::new(x, y);
                for arrow in &mut self.arrows {
                    if arrow.held && at.distance(arrow.center) > arrow.hit_radius {
                        arrow.held = false;
                    }
                }
            }
            _ => {}
        }
    }

    pub fn release_all(&mut self) {
        for arrow in &mut self.arrows {
            arrow.held = false;
        }
    }

    pub fn is_held(&self, dir: ArrowDir) -> bool {
        self.arrows.iter().any(|a| a.dir == dir && a.held)
    }

    /// Current pad state as a movement intent.
    pub fn intent(&self) -> MoveIntent {
        MoveIntent {
            left: self.is_held(ArrowDir::Left),
            right: self.is_held(ArrowDir::Right),
            up: self.is_held(ArrowDir::Up),
            down: self.is_held(ArrowDir::Down),
        }
    }

    pub fn arrow_center(&self, dir: ArrowDir) -> Vec2 {
        self.arrows
            .iter()
            .find(|a| a.dir == dir)
            .map(|a| a.center)
            .unwrap_or(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad() -> ArrowControls {
        ArrowControls::new(ArrowControlsConfig::new(Vec2::new(800.0, 600.0)))
    }

    #[test]
    fn press_and_release_left() {
        let mut pad = pad();
        let at = pad.arrow_center(ArrowDir::Left);
        pad.handle_event(&InputEvent::PointerDown { x: at.x, y: at.y });
        assert!(pad.is_held(ArrowDir::Left));
        assert!(pad.intent().left);
        pad.handle_event(&InputEvent::PointerUp { x: at.x, y: at.y });
        assert!(pad.intent().idle());
    }

    #[test]
    fn hit_area_is_larger_than_the_sprite() {
        let mut pad = pad();
        let at = pad.arrow_center(ArrowDir::Up);
        // Just outside the sprite but inside the scaled hit circle.
        let edge = ARROW_FRAME * 0.7 * 0.5 + 5.0;
        pad.handle_event(&InputEvent::PointerDown {
            x: at.x + edge,
            y: at.y,
        });
        assert!(pad.is_held(ArrowDir::Up));
    }

    #[test]
    fn sliding_off_releases_the_arrow() {
        let mut pad = pad();
        let at = pad.arrow_center(ArrowDir::Right);
        pad.handle_event(&InputEvent::PointerDown { x: at.x, y: at.y });
        assert!(pad.is_held(ArrowDir::Right));
        pad.handle_event(&InputEvent::PointerMove { x: 0.0, y: 0.0 });
        assert!(!pad.is_held(ArrowDir::Right));
    }

    #[test]
    fn press_outside_every_arrow_does_nothing() {
        let mut pad = pad();
        pad.handle_event(&InputEvent::PointerDown { x: 10.0, y: 10.0 });
        assert!(pad.intent().idle());
    }
}
