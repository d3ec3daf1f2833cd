//! Player walk system: held directions to velocity, sprite facing, idle/run
//! animation switching, world-bounds clamp.

use glam::Vec2;

use crate::components::entity::Entity;

/// Walk speed in world units per second, same on both axes.
pub const WALK_SPEED: f32 = 600.0;

/// Held movement directions for one tick, merged from cursor keys and the
/// on-screen arrow buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    pub fn or(self, other: MoveIntent) -> MoveIntent {
        MoveIntent {
            left: self.left || other.left,
            right: self.right || other.right,
            up: self.up || other.up,
            down: self.down || other.down,
        }
    }

    pub fn idle(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }
}

/// Advance the player one tick. Opposite directions don't cancel: left wins
/// over right and up over down, like the original's if/else chains.
pub fn tick_movement(player: &mut Entity, intent: MoveIntent, world: Vec2, dt: f32) {
    let mut velocity = Vec2::ZERO;
    if intent.left {
        velocity.x = -WALK_SPEED;
        player.flip_x = true;
    } else if intent.right {
        velocity.x = WALK_SPEED;
        player.flip_x = false;
    }
    if intent.up {
        velocity.y = -WALK_SPEED;
    } else if intent.down {
        velocity.y = WALK_SPEED;
    }

    player.pos += velocity * dt;
    player.pos = player.pos.clamp(Vec2::ZERO, world);

    if let Some(anim) = &mut player.animation {
        if velocity == Vec2::ZERO {
            anim.play_if_different("idle");
        } else {
            anim.play_if_different("run");
        }
        anim.tick(dt);
    }
}
