use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Asset manifest for a tour: backgrounds, character sheets and UI images.
/// Loaded from a JSON file at runtime; the host does the actual fetching
/// and decoding, the engine only hands out paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourManifest {
    /// Background image per location: location id → image descriptor.
    #[serde(default)]
    pub backgrounds: HashMap<String, ImageDescriptor>,
    /// Character spritesheets: sheet name → descriptor.
    #[serde(default)]
    pub spritesheets: HashMap<String, SheetDescriptor>,
    /// Plain UI images (arrows, dialogue box, quiz panel, ...).
    #[serde(default)]
    pub ui: HashMap<String, ImageDescriptor>,
}

/// A single static image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Relative path to the image file (e.g., "backgrounds/hall.png").
    pub path: String,
}

/// A fixed-grid spritesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDescriptor {
    /// Relative path to the sheet image.
    pub path: String,
    /// Width of one frame in pixels.
    #[serde(default = "default_frame")]
    pub frame_width: u32,
    /// Height of one frame in pixels.
    #[serde(default = "default_frame")]
    pub frame_height: u32,
}

fn default_frame() -> u32 {
    48
}

impl TourManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Path of the background image for a location, if the manifest has one.
    pub fn background(&self, location: &str) -> Option<&str> {
        self.backgrounds.get(location).map(|d| d.path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let json = r#"{
            "backgrounds": {
                "Hall": { "path": "backgrounds/hall.png" },
                "Outdoor": { "path": "backgrounds/outdoor.png" }
            },
            "spritesheets": {
                "player": { "path": "sheets/player.png", "frame_width": 48, "frame_height": 48 }
            },
            "ui": {
                "arrow": { "path": "ui/arrow.png" }
            }
        }"#;
        let manifest = TourManifest::from_json(json).unwrap();
        assert_eq!(manifest.background("Hall"), Some("backgrounds/hall.png"));
        assert_eq!(manifest.background("Cafeteria"), None);
        assert_eq!(manifest.spritesheets["player"].frame_width, 48);
        assert_eq!(manifest.ui["arrow"].path, "ui/arrow.png");
    }

    #[test]
    fn frame_size_defaults_to_48() {
        let json = r#"{
            "spritesheets": {
                "robot": { "path": "sheets/robot.png" }
            }
        }"#;
        let manifest = TourManifest::from_json(json).unwrap();
        assert_eq!(manifest.spritesheets["robot"].frame_width, 48);
        assert_eq!(manifest.spritesheets["robot"].frame_height, 48);
    }
}
