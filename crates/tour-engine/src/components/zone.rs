//! Trigger zones: the invisible rectangles and proximity circles a location
//! scatters around its map. A zone does nothing by itself; the trigger
//! system samples "is the player inside?" each tick and feeds the answer to
//! the session's guards.

use glam::Vec2;

#[derive(Debug, Clone, Copy)]
pub enum ZoneShape {
    /// Axis-aligned rectangle, center + full size.
    Rect { center: Vec2, size: Vec2 },
    /// Proximity circle around a point.
    Circle { center: Vec2, radius: f32 },
}

impl ZoneShape {
    pub fn contains(&self, point: Vec2) -> bool {
        match *self {
            ZoneShape::Rect { center, size } => {
                let half = size * 0.5;
                (point.x - center.x).abs() <= half.x && (point.y - center.y).abs() <= half.y
            }
            ZoneShape::Circle { center, radius } => point.distance_squared(center) <= radius * radius,
        }
    }

    /// Overlap test against the player's bounding box.
    pub fn overlaps(&self, center: Vec2, size: Vec2) -> bool {
        let half = size * 0.5;
        match *self {
            ZoneShape::Rect {
                center: zc,
                size: zs,
            } => {
                let zh = zs * 0.5;
                (center.x - zc.x).abs() <= half.x + zh.x && (center.y - zc.y).abs() <= half.y + zh.y
            }
            ZoneShape::Circle {
                center: zc,
                radius,
            } => {
                // Closest point on the box to the circle center.
                let dx = (zc.x - center.x).clamp(-half.x, half.x);
                let dy = (zc.y - center.y).clamp(-half.y, half.y);
                let closest = center + Vec2::new(dx, dy);
                closest.distance_squared(zc) <= radius * radius
            }
        }
    }
}

/// A zone wired to a trigger id in the transition graph.
#[derive(Debug, Clone)]
pub struct TriggerZone {
    pub trigger: String,
    pub shape: ZoneShape,
}

impl TriggerZone {
    pub fn rect(trigger: impl Into<String>, center: Vec2, size: Vec2) -> Self {
        Self {
            trigger: trigger.into(),
            shape: ZoneShape::Rect { center, size },
        }
    }

    pub fn circle(trigger: impl Into<String>, center: Vec2, radius: f32) -> Self {
        Self {
            trigger: trigger.into(),
            shape: ZoneShape::Circle { center, radius },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_and_overlaps() {
        let z = ZoneShape::Rect {
            center: Vec2::new(100.0, 100.0),
            size: Vec2::new(50.0, 20.0),
        };
        assert!(z.contains(Vec2::new(110.0, 105.0)));
        assert!(!z.contains(Vec2::new(130.0, 100.0)));
        // A 48x48 body standing just outside still overlaps by its bounds.
        assert!(z.overlaps(Vec2::new(140.0, 100.0), Vec2::new(48.0, 48.0)));
        assert!(!z.overlaps(Vec2::new(200.0, 100.0), Vec2::new(48.0, 48.0)));
    }

    #[test]
    fn circle_proximity() {
        let z = ZoneShape::Circle {
            center: Vec2::new(0.0, 0.0),
            radius: 100.0,
        };
        assert!(z.contains(Vec2::new(60.0, 60.0)));
        assert!(!z.contains(Vec2::new(90.0, 90.0)));
        assert!(z.overlaps(Vec2::new(110.0, 0.0), Vec2::new(48.0, 48.0)));
    }
}
