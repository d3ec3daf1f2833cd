use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::animation::AnimationComponent;

/// Fat entity: one struct with optional components, no ECS.
///
/// A walkthrough scene holds the player sprite and a few static markers;
/// simplicity wins over generality here.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// String tag for lookups ("player", "hologram", ...).
    pub tag: String,
    pub pos: Vec2,
    /// Uniform render scale (the original blows its 48px character up 6x).
    pub scale: f32,
    /// Facing left? The host mirrors the sprite horizontally.
    pub flip_x: bool,
    /// Spritesheet key in the asset manifest; `None` for invisible markers.
    pub sprite: Option<String>,
    pub animation: Option<AnimationComponent>,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            pos: Vec2::ZERO,
            scale: 1.0,
            flip_x: false,
            sprite: None,
            animation: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = Some(sprite.into());
        self
    }

    pub fn with_animation(mut self, animation: AnimationComponent) -> Self {
        self.animation = Some(animation);
        self
    }
}
