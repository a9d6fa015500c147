use std::fmt;
use std::path::{Path, PathBuf};

use crate::manifest::Manifest;

pub const SPRITE_BOX: Dimensions = Dimensions::new(256, 256);
pub const BACKGROUND_SIZE: Dimensions = Dimensions::new(600, 400);

pub const DEFAULT_FIGHTERS: [&str; 4] = ["shade", "volt", "blaze", "granite"];
pub const DEFAULT_POSES: [&str; 10] = [
    "idle", "light", "heavy", "block", "jump", "crouch", "hitstun", "ko", "special", "victory",
];
pub const DEFAULT_BACKGROUNDS: [&str; 2] = ["arena_bg.png", "title_bg.png"];

/// Pixel size of an image or a target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything a normalization run needs. Built once and passed by reference,
/// so tests can swap in their own manifest and target sizes.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    pub root: PathBuf,
    pub manifest: Manifest,
    pub sprite_box: Dimensions,
    pub background_size: Dimensions,
}

impl NormalizerConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest: Manifest::default(),
            sprite_box: SPRITE_BOX,
            background_size: BACKGROUND_SIZE,
        }
    }

    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn with_sprite_box(mut self, sprite_box: Dimensions) -> Self {
        self.sprite_box = sprite_box;
        self
    }

    pub fn with_background_size(mut self, background_size: Dimensions) -> Self {
        self.background_size = background_size;
        self
    }
}

/// Project root for an installed executable: two levels above the file
/// itself, e.g. `<root>/bin/sprite-resize` resolves to `<root>`.
pub fn root_from_executable(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NormalizerConfig::new("/game");
        assert_eq!(config.sprite_box, Dimensions::new(256, 256));
        assert_eq!(config.background_size, Dimensions::new(600, 400));
        assert_eq!(config.manifest.fighters().len(), 4);
        assert_eq!(config.manifest.poses().len(), 10);
    }

    #[test]
    fn test_root_from_executable() {
        let root = root_from_executable(Path::new("/game/scripts/sprite-resize"));
        assert_eq!(root, Some(PathBuf::from("/game")));

        assert_eq!(root_from_executable(Path::new("sprite-resize")), None);
    }

    #[test]
    fn test_dimensions_display() {
        assert_eq!(Dimensions::new(600, 400).to_string(), "600x400");
    }
}
